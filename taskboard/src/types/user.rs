//! User type

use super::ids::UserId;
use serde::{Deserialize, Serialize};

/// Avatar shown for users without one of their own
pub const DEFAULT_AVATAR: &str = "/default-user.jpg";

/// A person tasks can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Create a user without an avatar
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
        }
    }

    /// Set the avatar reference
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// The avatar reference, or the placeholder when none is set
    pub fn avatar_or_default(&self) -> &str {
        self.avatar
            .as_deref()
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AVATAR)
    }

    /// Up to two upper-cased initials, one per word of the name
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_fallback() {
        let user = User::new("user-1", "Alice");
        assert_eq!(user.avatar_or_default(), DEFAULT_AVATAR);
        let user = user.with_avatar("/alice.png");
        assert_eq!(user.avatar_or_default(), "/alice.png");
        assert_eq!(User::new("u", "x").with_avatar("").avatar_or_default(), DEFAULT_AVATAR);
    }

    #[test]
    fn test_initials() {
        assert_eq!(User::new("u", "Александр Петров").initials(), "АП");
        assert_eq!(User::new("u", "ada lovelace byron").initials(), "AL");
        assert_eq!(User::new("u", "  ").initials(), "");
    }
}
