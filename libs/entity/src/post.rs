use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{content::Content, user::UserId};

static CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(
    Debug, Default, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(PostId)
    }
}

/// Nested owner record sent by `GET /posts/:id`.
#[skip_serializing_none]
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: String,
}

/// Feeds send the owner flat (`user_id`, `user_email`); the single post
/// read nests it under `user`.
#[skip_serializing_none]
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub user_id: Option<UserId>,
    pub user_email: Option<String>,
    #[serde(default)]
    pub user: Option<PostAuthor>,
    pub created_at: Option<String>,
}

impl Post {
    pub fn author(&self) -> &str {
        self.user_email
            .as_deref()
            .or_else(|| self.user.as_ref().map(|user| user.email.as_str()))
            .filter(|email| !email.is_empty())
            .unwrap_or("Unknown")
    }

    /// `created_at` as shown to the user. Falls back to the raw value when
    /// the server sends something that is not a timestamp.
    pub fn created_label(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;

        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.format(CREATED_AT_FORMAT).to_string());
        }
        if let Ok(at) =
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        {
            return Some(at.format(CREATED_AT_FORMAT).to_string());
        }

        Some(raw.to_string())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct NewPost {
    pub content: Content,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct PostUpdate {
    pub content: Content,
}

/// Body of `GET /user/:id/posts`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize)]
pub struct UserPosts {
    #[serde(default)]
    pub posts: Vec<Post>,
}
