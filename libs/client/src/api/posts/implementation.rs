use entity::prelude::*;
use reqwest::Method;
use tracing::debug;

use crate::{client::Client, ClientError};

use super::PostsApi;

impl PostsApi for Client {
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        let request = self.request(Method::GET, "posts")?;

        self.json(request, "failed to get posts").await
    }

    async fn list_user_posts(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Post>, ClientError> {
        let request =
            self.request(Method::GET, &format!("user/{}/posts", user_id))?;

        let response: UserPosts =
            self.json(request, "failed to get user posts").await?;

        Ok(response.posts)
    }

    async fn get_post(&self, id: PostId) -> Result<Post, ClientError> {
        let request = self.request(Method::GET, &format!("posts/{}", id))?;

        self.json(request, "failed to get post").await
    }

    async fn create_post(&self, body: NewPost) -> Result<Post, ClientError> {
        let request =
            Client::with_json(self.request(Method::POST, "posts")?, &body)?;

        let post: Post = self.json(request, "failed to create post").await?;
        debug!(task = "create post", id = %post.id);

        Ok(post)
    }

    async fn update_post(
        &self,
        id: PostId,
        body: PostUpdate,
    ) -> Result<Post, ClientError> {
        let request = Client::with_json(
            self.request(Method::PATCH, &format!("posts/{}", id))?,
            &body,
        )?;

        self.json(request, "failed to update post").await
    }

    async fn delete_post(&self, id: PostId) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("posts/{}", id))?;

        self.send(request, "failed to delete post").await?;
        debug!(task = "delete post", id = %id);

        Ok(())
    }
}
