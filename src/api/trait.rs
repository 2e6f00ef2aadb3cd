//! WeChat API trait and context
//!
//! Provides the shared context handed to every API service.

use std::sync::Arc;

use crate::client::WechatClient;
use crate::requester::ApiRequester;
use crate::token::TokenManager;
use crate::types::{AppId, AppSecret};

/// Context holding the request pipeline shared by API services.
#[derive(Debug, Clone)]
pub struct WechatContext {
    pub(crate) requester: Arc<ApiRequester>,
}

impl WechatContext {
    /// Create a context around an existing requester
    pub fn new(requester: Arc<ApiRequester>) -> Self {
        Self { requester }
    }

    /// Create a context whose access tokens come from a [`TokenManager`]
    /// using the given app credentials.
    pub fn with_credentials(client: WechatClient, appid: AppId, secret: AppSecret) -> Self {
        let token_manager = Arc::new(TokenManager::new(client.clone(), appid, secret));
        Self::new(Arc::new(ApiRequester::new(client, token_manager)))
    }

    pub fn requester(&self) -> &ApiRequester {
        &self.requester
    }

    /// Absolute URL for an endpoint path on the configured base URL.
    pub fn url(&self, path: &str) -> String {
        self.requester.client().url(path)
    }
}

/// Trait for WeChat API services.
pub trait WechatApi: Send + Sync {
    /// Get a reference to the WeChat context
    fn context(&self) -> &WechatContext;

    /// Name of this API for logging and error context.
    fn api_name(&self) -> &'static str {
        "unknown"
    }
}
