//! WeChat Pay (v2, XML) endpoints
//!
//! Parameters are expected to be complete and signed by the caller.

use crate::client::WechatClient;
use crate::error::WechatError;

use super::requester::PayApiRequester;
use super::sandbox::sandbox_url;
use super::{PayOptions, PayParameters, PayResponse};

/// WeChat Pay order API
#[derive(Debug, Clone)]
pub struct PayApi {
    requester: PayApiRequester,
    options: PayOptions,
}

impl PayApi {
    pub fn new(client: WechatClient, options: PayOptions) -> Self {
        Self {
            requester: PayApiRequester::new(client),
            options,
        }
    }

    pub fn options(&self) -> &PayOptions {
        &self.options
    }

    /// Full URL for `path`, redirected to the sandbox when configured.
    pub fn request_url(&self, path: &str) -> String {
        let standard_url = format!("{}{}", self.options.base_url(), path);
        sandbox_url(&standard_url, self.options.is_sandbox())
    }

    async fn call(&self, path: &str, parameters: &PayParameters) -> Result<PayResponse, WechatError> {
        let url = self.request_url(path);
        self.requester
            .request_and_get_return_value(&url, parameters)
            .await
    }

    /// POST /pay/unifiedorder
    pub async fn unified_order(&self, parameters: &PayParameters) -> Result<PayResponse, WechatError> {
        self.call("/pay/unifiedorder", parameters).await
    }

    /// POST /pay/orderquery
    pub async fn order_query(&self, parameters: &PayParameters) -> Result<PayResponse, WechatError> {
        self.call("/pay/orderquery", parameters).await
    }

    /// POST /pay/closeorder
    pub async fn close_order(&self, parameters: &PayParameters) -> Result<PayResponse, WechatError> {
        self.call("/pay/closeorder", parameters).await
    }

    /// POST /pay/refundquery
    pub async fn refund_query(&self, parameters: &PayParameters) -> Result<PayResponse, WechatError> {
        self.call("/pay/refundquery", parameters).await
    }
}
