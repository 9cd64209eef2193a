//! FocusFlow main entrypoint.

use focusflow::run;
use focusflow::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
