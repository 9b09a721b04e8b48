use std::{collections::VecDeque, sync::Mutex};

use client::{ClientError, PostsApi, SessionApi, StatusCode};
use entity::prelude::*;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ProbeSession,
    CurrentUser,
    ListPosts,
    ListUserPosts(UserId),
    GetPost(PostId),
    CreatePost(String),
    UpdatePost(PostId, String),
    DeletePost(PostId),
}

type Queue<T> = Mutex<VecDeque<Result<T, ClientError>>>;

/// Scripted API: each call pops the next queued response for its endpoint
/// and records itself. An empty queue answers 500.
#[derive(Default)]
pub struct MockApi {
    session: Queue<()>,
    users: Queue<User>,
    feeds: Queue<Vec<Post>>,
    posts: Queue<Post>,
    deletes: Queue<()>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    pub fn status(status_code: StatusCode) -> ClientError {
        ClientError::FailedStatusCode {
            status_code,
            message: "mock".to_string(),
            body: String::new(),
        }
    }

    pub fn transport() -> ClientError {
        ClientError::SerdeJsonError {
            source: serde_json::from_str::<serde_json::Value>("{")
                .unwrap_err(),
            message: "connection reset".to_string(),
        }
    }

    pub fn push_session(&self, response: Result<(), ClientError>) {
        self.session.lock().unwrap().push_back(response);
    }

    pub fn push_user(&self, response: Result<User, ClientError>) {
        self.users.lock().unwrap().push_back(response);
    }

    pub fn push_feed(&self, response: Result<Vec<Post>, ClientError>) {
        self.feeds.lock().unwrap().push_back(response);
    }

    /// Response for the next get, create or update.
    pub fn push_post(&self, response: Result<Post, ClientError>) {
        self.posts.lock().unwrap().push_back(response);
    }

    pub fn push_delete(&self, response: Result<(), ClientError>) {
        self.deletes.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn pop<T>(queue: &Queue<T>) -> Result<T, ClientError> {
    queue.lock().unwrap().pop_front().unwrap_or_else(|| {
        Err(MockApi::status(StatusCode::INTERNAL_SERVER_ERROR))
    })
}

pub fn post(id: i64, content: &str) -> Post {
    Post {
        id: PostId(id),
        content: content.to_string(),
        user_id: Some(UserId(1)),
        user_email: Some("alice@example.com".to_string()),
        user: None,
        created_at: None,
    }
}

pub fn user(id: i64, email: &str) -> User {
    User {
        id: UserId(id),
        email: email.to_string(),
        bio: None,
    }
}

impl SessionApi for MockApi {
    async fn probe_session(&self) -> Result<(), ClientError> {
        self.record(Call::ProbeSession);
        pop(&self.session)
    }

    async fn current_user(&self) -> Result<User, ClientError> {
        self.record(Call::CurrentUser);
        pop(&self.users)
    }

    fn login_url(&self) -> Result<Url, ClientError> {
        Ok(Url::parse("http://mock.yapper/login").unwrap())
    }

    fn logout_url(&self) -> Result<Url, ClientError> {
        Ok(Url::parse("http://mock.yapper/logout").unwrap())
    }
}

impl PostsApi for MockApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        self.record(Call::ListPosts);
        pop(&self.feeds)
    }

    async fn list_user_posts(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Post>, ClientError> {
        self.record(Call::ListUserPosts(user_id));
        pop(&self.feeds)
    }

    async fn get_post(&self, id: PostId) -> Result<Post, ClientError> {
        self.record(Call::GetPost(id));
        pop(&self.posts)
    }

    async fn create_post(&self, body: NewPost) -> Result<Post, ClientError> {
        self.record(Call::CreatePost(body.content.into_inner()));
        pop(&self.posts)
    }

    async fn update_post(
        &self,
        id: PostId,
        body: PostUpdate,
    ) -> Result<Post, ClientError> {
        self.record(Call::UpdatePost(id, body.content.into_inner()));
        pop(&self.posts)
    }

    async fn delete_post(&self, id: PostId) -> Result<(), ClientError> {
        self.record(Call::DeletePost(id));
        pop(&self.deletes)
    }
}
