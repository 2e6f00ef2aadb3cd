//! Access token sources for WeChat API calls
//!
//! The request pipeline only ever asks an [`AccessTokenAccessor`] for the
//! current token; refresh and caching policy live behind that trait.

use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;

use crate::client::WechatClient;
use crate::error::WechatError;
use crate::types::{AccessToken, AppId, AppSecret};

pub type TokenFuture<'a> = Pin<Box<dyn Future<Output = Result<String, WechatError>> + Send + 'a>>;

/// Supplies the bearer token attached as `access_token=` to API calls.
pub trait AccessTokenAccessor: Send + Sync {
    fn access_token(&self) -> TokenFuture<'_>;
}

/// An accessor that always returns the same token.
///
/// Useful when the token is managed by another service (e.g. a central
/// token server shared by several deployments).
#[derive(Debug, Clone)]
pub struct StaticAccessToken(AccessToken);

impl StaticAccessToken {
    pub fn new(token: AccessToken) -> Self {
        Self(token)
    }
}

impl AccessTokenAccessor for StaticAccessToken {
    fn access_token(&self) -> TokenFuture<'_> {
        let token = self.0.as_str().to_string();
        Box::pin(async move { Ok::<_, WechatError>(token) })
    }
}

struct CachedToken {
    token: AccessToken,
    expires_at: Instant,
}

impl CachedToken {
    fn is_expired(&self, buffer: Duration) -> bool {
        Instant::now() + buffer >= self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    expires_in: u64,
    #[serde(default)]
    errcode: i32,
    #[serde(default)]
    errmsg: String,
}

/// Fetches `/cgi-bin/token` with the app credentials and caches the result
/// until shortly before it expires.
pub struct TokenManager {
    client: WechatClient,
    appid: AppId,
    secret: AppSecret,
    cache: Mutex<Option<CachedToken>>,
    refresh_buffer: Duration,
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("appid", &self.appid)
            .field("refresh_buffer", &self.refresh_buffer)
            .finish_non_exhaustive()
    }
}

impl TokenManager {
    pub fn new(client: WechatClient, appid: AppId, secret: AppSecret) -> Self {
        Self {
            client,
            appid,
            secret,
            cache: Mutex::new(None),
            refresh_buffer: Duration::from_secs(5 * 60),
        }
    }

    pub fn appid(&self) -> &str {
        self.appid.as_str()
    }

    pub async fn get_token(&self) -> Result<String, WechatError> {
        let mut cache = self.cache.lock().await;

        if let Some(ref cached) = *cache {
            if !cached.is_expired(self.refresh_buffer) {
                return Ok(cached.token.as_str().to_string());
            }
        }

        let response = self.fetch_token().await?;
        WechatError::check_api(response.errcode, &response.errmsg)?;

        let token = AccessToken::new(response.access_token).map_err(WechatError::Token)?;
        let expires_at = Instant::now()
            .checked_add(Duration::from_secs(response.expires_in))
            .ok_or_else(|| {
                WechatError::Token(format!("invalid expires_in: {}", response.expires_in))
            })?;
        log::debug!(
            "access token refreshed for {}, expires in {}s",
            self.appid.as_str(),
            response.expires_in
        );

        *cache = Some(CachedToken {
            token: token.clone(),
            expires_at,
        });
        Ok(token.as_str().to_string())
    }

    async fn fetch_token(&self) -> Result<TokenResponse, WechatError> {
        let url = self.client.url("/cgi-bin/token");
        let query = [
            ("grant_type", "client_credential"),
            ("appid", self.appid.as_str()),
            ("secret", self.secret.as_str()),
        ];

        let request = self.client.http().get(url).query(&query).build()?;
        let response = self.client.send_request(request).await?.error_for_status()?;
        Ok(response.json().await?)
    }

    pub async fn invalidate(&self) {
        let mut cache = self.cache.lock().await;
        *cache = None;
    }
}

impl AccessTokenAccessor for TokenManager {
    fn access_token(&self) -> TokenFuture<'_> {
        Box::pin(self.get_token())
    }
}
