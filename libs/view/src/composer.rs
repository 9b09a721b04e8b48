use std::fmt;

use client::{ClientError, PostsApi, StatusCode};
use entity::prelude::*;
use tracing::{error, info};

use crate::status::RequestState;

pub static HEADING: &str = "What do you want to yap about?";
pub static UNAUTHORIZED: &str = "You must be logged in to create a post";
pub static NOT_FOUND: &str = "User not found";
pub static FAILED: &str = "Failed to create post";
pub static FALLBACK: &str = "An error occurred while creating the post";

/// What a successful submit tells the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerSignal {
    Created(Post),
    Close,
}

/// Post creation form.
///
/// A host opts into signals with [`Composer::with_on_create`] and
/// [`Composer::with_on_close`]. A successful submit emits `Created` when the
/// host listens for it, otherwise `Close` when the host listens for that,
/// otherwise nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Composer {
    content: String,
    state: RequestState<PostId, String>,
    on_create: bool,
    on_close: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_create(mut self) -> Self {
        self.on_create = true;
        self
    }

    pub fn with_on_close(mut self) -> Self {
        self.on_close = true;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns false when the input is disabled.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }

        self.content = content.into();
        true
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error().map(String::as_str)
    }

    /// Validates the content and enters the loading state. `None` means no
    /// request must be sent.
    pub fn begin_submit(&mut self) -> Option<NewPost> {
        if self.is_loading() {
            return None;
        }

        match Content::parse(&self.content) {
            Ok(content) => {
                self.state.start();
                Some(NewPost { content })
            }
            Err(e) => {
                self.state.fail(e.to_string());
                None
            }
        }
    }

    /// Applies the response of the request started by
    /// [`Composer::begin_submit`]. Always leaves the loading state.
    pub fn finish_submit(
        &mut self,
        result: Result<Post, ClientError>,
    ) -> Option<ComposerSignal> {
        match result {
            Ok(post) => {
                info!(task = "create post", id = %post.id);
                self.content.clear();
                self.state.finish(Ok(post.id));

                if self.on_create {
                    Some(ComposerSignal::Created(post))
                } else if self.on_close {
                    Some(ComposerSignal::Close)
                } else {
                    None
                }
            }
            Err(e) => {
                error!(task = "create post", err = e.to_string());
                self.state.fail(error_message(&e));
                None
            }
        }
    }

    pub async fn submit<A: PostsApi>(
        &mut self,
        api: &A,
    ) -> Option<ComposerSignal> {
        let request = self.begin_submit()?;
        let result = api.create_post(request).await;

        self.finish_submit(result)
    }

    pub fn view(&self) -> ComposerView<'_> {
        ComposerView {
            content: &self.content,
            error: self.error(),
            loading: self.is_loading(),
            cancellable: self.on_close,
        }
    }
}

fn error_message(e: &ClientError) -> String {
    match e.status_code() {
        Some(StatusCode::UNAUTHORIZED) => UNAUTHORIZED.to_string(),
        Some(StatusCode::NOT_FOUND) => NOT_FOUND.to_string(),
        Some(_) => FAILED.to_string(),
        None => {
            let message = e.to_string();
            if message.trim().is_empty() {
                FALLBACK.to_string()
            } else {
                message
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerView<'a> {
    pub content: &'a str,
    pub error: Option<&'a str>,
    pub loading: bool,
    pub cancellable: bool,
}

impl ComposerView<'_> {
    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Creating..."
        } else {
            "Post"
        }
    }
}

impl fmt::Display for ComposerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", HEADING)?;
        if self.content.is_empty() {
            writeln!(f, "  > Share your thoughts...")?;
        } else {
            writeln!(f, "  > {}", self.content)?;
        }
        if let Some(error) = self.error {
            writeln!(f, "  ! {}", error)?;
        }

        write!(f, "  [{}]", self.submit_label())?;
        if self.cancellable {
            write!(f, " [Cancel]")?;
        }
        writeln!(f)
    }
}
