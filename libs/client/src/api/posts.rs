pub mod implementation;

use std::future::Future;

use entity::prelude::*;

use crate::ClientError;

pub trait PostsApi {
    fn list_posts(
        &self,
    ) -> impl Future<Output = Result<Vec<Post>, ClientError>> + Send;

    fn list_user_posts(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Post>, ClientError>> + Send;

    fn get_post(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<Post, ClientError>> + Send;

    fn create_post(
        &self,
        request: NewPost,
    ) -> impl Future<Output = Result<Post, ClientError>> + Send;

    fn update_post(
        &self,
        id: PostId,
        request: PostUpdate,
    ) -> impl Future<Output = Result<Post, ClientError>> + Send;

    fn delete_post(
        &self,
        id: PostId,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}
