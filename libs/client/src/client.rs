use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Method, RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{response::IntoResponse, ClientError};

/// HTTP client for the Yapper API.
///
/// Every request goes through one cookie store, so the session cookie set by
/// the login redirect is sent along with each call.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Url,
    client: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url =
            Url::parse(base_url).into_response("failed to parse base_url")?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert(
            "User-Agent",
            HeaderValue::from_static("Yapper-Rust-Client"),
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .into_response("failed to build http client")?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .into_response("failed to build endpoint")
    }

    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ClientError> {
        Ok(self.client.request(method, self.endpoint(path)?))
    }

    pub(crate) fn with_json<B: Serialize + ?Sized>(
        request: RequestBuilder,
        body: &B,
    ) -> Result<RequestBuilder, ClientError> {
        let body = serde_json::to_string(body)
            .into_response("failed to serialize body")?;

        Ok(request.header(CONTENT_TYPE, "application/json").body(body))
    }

    pub(crate) async fn send(
        &self,
        request: RequestBuilder,
        message: &str,
    ) -> Result<Response, ClientError> {
        let response = request.send().await.into_response(message)?;

        let status_code = response.status();
        if !status_code.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::FailedStatusCode {
                status_code,
                message: message.to_string(),
                body,
            });
        }

        Ok(response)
    }

    pub(crate) async fn json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        message: &str,
    ) -> Result<T, ClientError> {
        let response = self.send(request, message).await?;
        let text = response.text().await.into_response("failed to get text")?;

        serde_json::from_str(&text).into_response("failed to parse response")
    }
}
