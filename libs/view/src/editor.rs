use std::fmt;

use client::PostsApi;
use entity::prelude::*;
use tracing::{error, warn};

pub static HEADING: &str = "Edit Post";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Escape,
    BackdropClick,
    /// A click that lands on the modal surface itself.
    SurfaceClick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorSignal {
    Closed,
    PostUpdated(Post),
    PostDeleted(PostId),
}

/// Modal that edits or deletes one post.
///
/// Visible only while open with a target. Closing clears the target, so the
/// next open always preloads the buffer again.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditorModal {
    open: bool,
    post: Option<Post>,
    buffer: String,
}

impl EditorModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, post: Post) {
        self.set_post(Some(post));
        self.open = true;
    }

    /// Replaces the target. The buffer is reloaded when the target's identity
    /// changes and kept otherwise.
    pub fn set_post(&mut self, post: Option<Post>) {
        let same = match (&self.post, &post) {
            (Some(current), Some(next)) => current.id == next.id,
            _ => false,
        };
        if let Some(next) = post.as_ref().filter(|_| !same) {
            self.buffer = next.content.clone();
        }

        self.post = post;
    }

    pub fn is_visible(&self) -> bool {
        self.open && self.post.is_some()
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn close(&mut self) -> EditorSignal {
        self.open = false;
        self.post = None;
        EditorSignal::Closed
    }

    pub fn handle(&mut self, event: ModalEvent) -> Option<EditorSignal> {
        if !self.is_visible() {
            return None;
        }

        match event {
            ModalEvent::Escape | ModalEvent::BackdropClick => {
                Some(self.close())
            }
            ModalEvent::SurfaceClick => None,
        }
    }

    /// PATCHes the buffer. On failure the modal stays open and nothing is
    /// signalled.
    pub async fn save<A: PostsApi>(&mut self, api: &A) -> Option<EditorSignal> {
        let id = self.target()?;

        let content = match Content::parse(&self.buffer) {
            Ok(content) => content,
            Err(e) => {
                warn!(task = "update post", id = %id, err = e.to_string());
                return None;
            }
        };

        match api.update_post(id, PostUpdate { content }).await {
            Ok(post) => {
                self.close();
                Some(EditorSignal::PostUpdated(post))
            }
            Err(e) => {
                error!(task = "update post", id = %id, err = e.to_string());
                None
            }
        }
    }

    /// DELETEs the target right away; there is no confirmation step.
    pub async fn delete<A: PostsApi>(
        &mut self,
        api: &A,
    ) -> Option<EditorSignal> {
        let id = self.target()?;

        match api.delete_post(id).await {
            Ok(()) => {
                self.close();
                Some(EditorSignal::PostDeleted(id))
            }
            Err(e) => {
                error!(task = "delete post", id = %id, err = e.to_string());
                None
            }
        }
    }

    pub fn view(&self) -> Option<EditorView<'_>> {
        if !self.is_visible() {
            return None;
        }

        Some(EditorView {
            buffer: &self.buffer,
        })
    }

    fn target(&self) -> Option<PostId> {
        if !self.is_visible() {
            return None;
        }
        self.post.as_ref().map(|post| post.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorView<'a> {
    pub buffer: &'a str,
}

impl fmt::Display for EditorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+--- {} ---", HEADING)?;
        for line in self.buffer.lines() {
            writeln!(f, "| {}", line)?;
        }
        writeln!(f, "| [Save] [Delete] [Cancel]")?;
        writeln!(f, "+---")
    }
}
