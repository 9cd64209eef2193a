//! Per-view presentation context: greeting and avatar for the current user.

use crate::models::user::User;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

pub const AVATAR_COLORS: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9",
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ViewContext {
    pub greeting: &'static str,
    pub display_name: String,
    pub avatar_initials: String,
    pub avatar_color: &'static str,
}

impl ViewContext {
    pub fn for_user(user: Option<&User>, now: NaiveDateTime) -> Self {
        let greeting = greeting_for(now.hour());

        match user {
            Some(u) => Self {
                greeting,
                display_name: u.display_name().to_string(),
                avatar_initials: avatar_initials(&u.first_name, &u.last_name),
                avatar_color: avatar_color(u.id),
            },
            None => Self {
                greeting,
                display_name: "User".to_string(),
                avatar_initials: "UU".to_string(),
                avatar_color: AVATAR_COLORS[0],
            },
        }
    }
}

/// Morning before noon, afternoon until 18:00, evening after.
pub fn greeting_for(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// First letter of each name, upper-cased; 'U' stands in for a missing part.
pub fn avatar_initials(first_name: &str, last_name: &str) -> String {
    let initial = |s: &str| {
        s.trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_else(|| "U".to_string())
    };
    format!("{}{}", initial(first_name), initial(last_name))
}

/// Stable palette pick, so the same user always gets the same colour.
pub fn avatar_color(user_id: i64) -> &'static str {
    AVATAR_COLORS[user_id.rem_euclid(AVATAR_COLORS.len() as i64) as usize]
}
