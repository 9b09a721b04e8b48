pub mod content;
pub mod post;
pub mod user;

pub mod prelude {
    pub use crate::content::{Content, ContentError};
    pub use crate::post::{
        NewPost, Post, PostAuthor, PostId, PostUpdate, UserPosts,
    };
    pub use crate::user::{User, UserId};
}
