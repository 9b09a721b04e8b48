use std::{fmt, ops::Deref};

use serde::Serialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ContentError {
    #[error("Post content cannot be empty")]
    Empty,
}

/// Post text that is known to be non-empty after trimming.
///
/// Create and update bodies only accept this type, so blank text can never
/// reach the API.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(transparent)]
pub struct Content(String);

impl Content {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContentError::Empty);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Content {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Content {
    type Error = ContentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Content::parse(value)
    }
}
