pub mod aggregator;
pub mod context;
pub mod log;
pub mod range;
pub mod record;
pub mod report;
pub mod trend;
pub mod window;
