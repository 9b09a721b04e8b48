use std::fmt;

use client::PostsApi;
use entity::prelude::*;
use tracing::error;

use crate::status::RequestState;

pub static LOADING: &str = "Loading posts...";
pub static GLOBAL_EMPTY: &str = "No posts available.";
pub static GLOBAL_ERROR: &str = "There was an error fetching posts.";
pub static USER_EMPTY: &str = "No posts to display.";
pub static USER_ERROR: &str = "Failed to load posts.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedScope {
    Global,
    User(UserId),
}

impl FeedScope {
    fn empty_text(&self) -> &'static str {
        match self {
            FeedScope::Global => GLOBAL_EMPTY,
            FeedScope::User(_) => USER_EMPTY,
        }
    }

    fn error_text(&self) -> &'static str {
        match self {
            FeedScope::Global => GLOBAL_ERROR,
            FeedScope::User(_) => USER_ERROR,
        }
    }
}

/// An ordered collection of posts owned by one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLoader {
    scope: FeedScope,
    state: RequestState<Vec<Post>, String>,
}

impl FeedLoader {
    pub fn new(scope: FeedScope) -> Self {
        Self {
            scope,
            state: RequestState::Idle,
        }
    }

    pub fn global() -> Self {
        Self::new(FeedScope::Global)
    }

    pub fn for_user(user_id: UserId) -> Self {
        Self::new(FeedScope::User(user_id))
    }

    pub fn scope(&self) -> FeedScope {
        self.scope
    }

    pub fn state(&self) -> &RequestState<Vec<Post>, String> {
        &self.state
    }

    /// Issues exactly one GET and replaces the collection with the result.
    pub async fn load<A: PostsApi>(&mut self, api: &A) {
        self.state.start();

        let result = match self.scope {
            FeedScope::Global => api.list_posts().await,
            FeedScope::User(user_id) => api.list_user_posts(user_id).await,
        };

        self.state.finish(result.map_err(|e| {
            error!(
                task = "load feed",
                scope = ?self.scope,
                err = e.to_string()
            );
            e.to_string()
        }));
    }

    /// Forces a fresh fetch. This is the only invalidation there is.
    pub async fn refresh<A: PostsApi>(&mut self, api: &A) {
        self.load(api).await;
    }

    /// Puts the feed in its error state without fetching, for pages whose
    /// prerequisite request failed.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state.fail(message.into());
    }

    pub fn posts(&self) -> Option<&[Post]> {
        self.state.value().map(Vec::as_slice)
    }

    pub fn find(&self, id: PostId) -> Option<&Post> {
        self.posts()?.iter().find(|post| post.id == id)
    }

    /// Swaps in a server-confirmed version of a post, keeping its position.
    pub fn replace(&mut self, updated: Post) -> bool {
        let Some(posts) = self.state.value_mut() else {
            return false;
        };
        let Some(slot) = posts.iter_mut().find(|post| post.id == updated.id)
        else {
            return false;
        };

        *slot = updated;
        true
    }

    pub fn remove(&mut self, id: PostId) -> bool {
        let Some(posts) = self.state.value_mut() else {
            return false;
        };

        let before = posts.len();
        posts.retain(|post| post.id != id);
        posts.len() != before
    }

    pub fn view(&self) -> FeedView<'_> {
        match &self.state {
            RequestState::Idle | RequestState::Loading => FeedView::Loading,
            RequestState::Failure(_) => {
                FeedView::Error(self.scope.error_text())
            }
            RequestState::Success(posts) if posts.is_empty() => {
                FeedView::Empty(self.scope.empty_text())
            }
            RequestState::Success(posts) => FeedView::Posts {
                scope: self.scope,
                posts,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView<'a> {
    Loading,
    Error(&'static str),
    Empty(&'static str),
    Posts {
        scope: FeedScope,
        posts: &'a [Post],
    },
}

impl fmt::Display for FeedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedView::Loading => writeln!(f, "{}", LOADING),
            FeedView::Error(text) => writeln!(f, "! {}", text),
            FeedView::Empty(text) => writeln!(f, "{}", text),
            FeedView::Posts {
                scope: FeedScope::Global,
                posts,
            } => {
                for post in posts.iter() {
                    writeln!(f, "{}", post.content)?;
                    match post.created_label() {
                        Some(at) => {
                            writeln!(f, "    {} ({})", post.author(), at)?
                        }
                        None => writeln!(f, "    {}", post.author())?,
                    }
                }
                Ok(())
            }
            FeedView::Posts {
                scope: FeedScope::User(_),
                posts,
            } => {
                for post in posts.iter() {
                    writeln!(f, "#{} {}  [Update]", post.id, post.content)?;
                }
                Ok(())
            }
        }
    }
}
