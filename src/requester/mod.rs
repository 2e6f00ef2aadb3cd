//! Generic WeChat API request pipeline
//!
//! [`ApiRequester`] performs one remote call per invocation:
//!
//! 1. normalize the target URL so it can take query parameters
//! 2. optionally append `access_token=<token>` from an [`AccessTokenAccessor`]
//! 3. build the message (query string for GET, JSON body otherwise)
//! 4. dispatch through [`WechatClient`]
//! 5. decode the body
//!
//! There is no retry and no caching here.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use reqwest::Method;
//! use wechat_sdk::requester::ApiRequester;
//!
//! #[derive(serde::Serialize)]
//! struct UserInfoRequest { openid: String, lang: String }
//!
//! let requester = ApiRequester::new(client, Arc::new(token_manager));
//! let info: serde_json::Value = requester
//!     .request(
//!         "https://api.weixin.qq.com/cgi-bin/user/info",
//!         Method::GET,
//!         Some(&UserInfoRequest { openid: "o6_bmjrPTlm6".into(), lang: "zh_CN".into() }),
//!         true,
//!     )
//!     .await?;
//! ```

mod message;
mod multipart;
mod payload;

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::WechatClient;
use crate::error::{HttpError, WechatError};
use crate::middleware::redact_url;
use crate::token::AccessTokenAccessor;

pub use message::{
    append_access_token, build_get_url, build_request_message, normalize_target_url, query_pairs,
    NO_REQUEST,
};
pub use multipart::{unquote_boundary, unquote_request_boundary};
pub use payload::{decode_binary, BinaryPayload};

/// Executes WeChat API calls for the Official Account and Mini Program
/// families.
#[derive(Clone)]
pub struct ApiRequester {
    client: WechatClient,
    token_accessor: Arc<dyn AccessTokenAccessor>,
}

impl std::fmt::Debug for ApiRequester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequester")
            .field("client", &self.client)
            .field("token_accessor", &"AccessTokenAccessor { .. }")
            .finish()
    }
}

impl ApiRequester {
    pub fn new(client: WechatClient, token_accessor: Arc<dyn AccessTokenAccessor>) -> Self {
        Self {
            client,
            token_accessor,
        }
    }

    pub fn client(&self) -> &WechatClient {
        &self.client
    }

    async fn qualify_url(
        &self,
        target_url: &str,
        with_access_token: bool,
    ) -> Result<String, WechatError> {
        let url = normalize_target_url(target_url);
        if !with_access_token {
            return Ok(url);
        }

        let token = self.token_accessor.access_token().await?;
        Ok(append_access_token(&url, &token))
    }

    async fn dispatch(&self, message: reqwest::Request) -> Result<reqwest::Response, WechatError> {
        log::debug!(
            "{} {}",
            message.method(),
            redact_url(message.url().as_str())
        );

        let response = self.client.send_request(message).await?;
        Ok(response.error_for_status()?)
    }

    async fn send<R>(
        &self,
        target_url: &str,
        method: Method,
        request: Option<&R>,
        with_access_token: bool,
    ) -> Result<reqwest::Response, WechatError>
    where
        R: Serialize + ?Sized,
    {
        let url = self.qualify_url(target_url, with_access_token).await?;
        let message = build_request_message(self.client.http(), &url, &method, request)?;
        self.dispatch(message).await
    }

    /// Perform the call and return the raw response text.
    pub async fn request_text<R>(
        &self,
        target_url: &str,
        method: Method,
        request: Option<&R>,
        with_access_token: bool,
    ) -> Result<String, WechatError>
    where
        R: Serialize + ?Sized,
    {
        let response = self
            .send(target_url, method, request, with_access_token)
            .await?;
        response
            .text()
            .await
            .map_err(|e| WechatError::Http(HttpError::Decode(e.to_string())))
    }

    /// Perform the call and decode the JSON response into `T`.
    ///
    /// # Errors
    /// - `WechatError::Http` for transport failures and non-2xx statuses
    /// - `WechatError::Json` when the body is not valid JSON for `T`
    pub async fn request<T, R>(
        &self,
        target_url: &str,
        method: Method,
        request: Option<&R>,
        with_access_token: bool,
    ) -> Result<T, WechatError>
    where
        T: DeserializeOwned,
        R: Serialize + ?Sized,
    {
        let text = self
            .request_text(target_url, method, request, with_access_token)
            .await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Perform a call whose response may be binary.
    ///
    /// A body that does not decode as `T` is returned as
    /// [`BinaryPayload::Binary`] holding the raw bytes.
    pub async fn request_binary<T, R>(
        &self,
        target_url: &str,
        method: Method,
        request: Option<&R>,
        with_access_token: bool,
    ) -> Result<BinaryPayload<T>, WechatError>
    where
        T: DeserializeOwned,
        R: Serialize + ?Sized,
    {
        let response = self
            .send(target_url, method, request, with_access_token)
            .await?;
        let body = response.bytes().await?;
        Ok(decode_binary(body.to_vec()))
    }

    /// POST a multipart form. The token and the optional request value go
    /// into the query string.
    pub async fn request_multipart<T, R>(
        &self,
        target_url: &str,
        form: reqwest::multipart::Form,
        request: Option<&R>,
        with_access_token: bool,
    ) -> Result<T, WechatError>
    where
        T: DeserializeOwned,
        R: Serialize + ?Sized,
    {
        let url = self.qualify_url(target_url, with_access_token).await?;
        let url = build_get_url(&url, request)?;

        let message = self.client.http().post(url).multipart(form).build()?;
        self.dispatch_multipart(message).await
    }

    async fn dispatch_multipart<T>(&self, mut message: reqwest::Request) -> Result<T, WechatError>
    where
        T: DeserializeOwned,
    {
        unquote_request_boundary(&mut message)?;

        let text = self
            .dispatch(message)
            .await?
            .text()
            .await
            .map_err(|e| WechatError::Http(HttpError::Decode(e.to_string())))?;
        Ok(serde_json::from_str(&text)?)
    }
}
