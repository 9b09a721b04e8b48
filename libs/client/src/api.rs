pub mod posts;
pub mod session;

/// Everything a page needs from the remote API.
pub trait YapperApi: session::SessionApi + posts::PostsApi {}

impl<T: session::SessionApi + posts::PostsApi> YapperApi for T {}
