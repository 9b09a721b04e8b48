use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(
    Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
}

impl User {
    /// Display name: the local part of the email.
    pub fn name(&self) -> &str {
        self.email
            .split_once('@')
            .map_or(self.email.as_str(), |(local, _)| local)
    }

    pub fn username(&self) -> &str {
        &self.email
    }

    pub fn bio(&self) -> &str {
        self.bio.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_name_is_local_part() {
        let user = User {
            id: UserId(5),
            email: "john@example.com".to_string(),
            bio: Some("hello".to_string()),
        };

        assert_eq!(user.name(), "john");
        assert_eq!(user.username(), "john@example.com");
        assert_eq!(user.bio(), "hello");
    }

    #[test]
    fn test_name_without_at_sign() {
        let user = User {
            email: "localonly".to_string(),
            ..Default::default()
        };

        assert_eq!(user.name(), "localonly");
        assert_eq!(user.bio(), "");
    }

    #[test]
    fn test_deserialize_without_bio() {
        let user = serde_json::from_str::<User>(
            r#"{"id": 9, "email": "alice@example.com"}"#,
        )
        .unwrap();

        assert_eq!(user.id, UserId(9));
        assert_eq!(user.bio, None);
    }
}
