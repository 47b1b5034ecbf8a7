use serde::{Deserialize, Serialize};

use crate::model::ids::UserId;

/// The person using the app for this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// First name, used in greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_name_takes_leading_word() {
        let user = User::new(UserId::new(1), "Ada Lovelace", "ada@example.org");
        assert_eq!(user.first_name(), "Ada");
    }
}
