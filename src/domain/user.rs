use serde::{Deserialize, Serialize};

/// Authenticated back-office user, persisted as JSON under the `"user"` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub role: String,
}

impl User {
    /// The single built-in administrator account.
    pub fn admin() -> Self {
        Self {
            id: 1,
            name: "Administrator".to_string(),
            username: "admin".to_string(),
            role: "admin".to_string(),
        }
    }
}
