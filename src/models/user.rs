use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub created_at: String,
}

impl User {
    pub fn display_name(&self) -> &str {
        let first = self.first_name.trim();
        if first.is_empty() { "User" } else { first }
    }
}
