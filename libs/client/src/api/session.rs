pub mod implementation;

use std::future::Future;

use entity::prelude::*;
use url::Url;

use crate::ClientError;

pub trait SessionApi {
    /// `GET /user`, status only.
    fn probe_session(
        &self,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// `GET /user`, parsed as the signed-in user.
    fn current_user(
        &self,
    ) -> impl Future<Output = Result<User, ClientError>> + Send;

    /// Where the user agent goes to start the delegated login flow.
    fn login_url(&self) -> Result<Url, ClientError>;

    fn logout_url(&self) -> Result<Url, ClientError>;
}
