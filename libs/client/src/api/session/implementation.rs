use entity::prelude::*;
use reqwest::Method;
use url::Url;

use crate::{client::Client, ClientError};

use super::SessionApi;

impl SessionApi for Client {
    async fn probe_session(&self) -> Result<(), ClientError> {
        let request = self.request(Method::GET, "user")?;

        self.send(request, "failed to probe session").await?;

        Ok(())
    }

    async fn current_user(&self) -> Result<User, ClientError> {
        let request = self.request(Method::GET, "user")?;

        self.json(request, "failed to get user").await
    }

    fn login_url(&self) -> Result<Url, ClientError> {
        self.endpoint("login")
    }

    fn logout_url(&self) -> Result<Url, ClientError> {
        self.endpoint("logout")
    }
}
