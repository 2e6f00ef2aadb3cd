use reqwest::header::{HeaderValue, CONTENT_TYPE};

use crate::client::WechatClient;
use crate::error::{HttpError, RemoteCallFailure, WechatError};
use crate::middleware::redact_url;

use super::{PayParameters, PayResponse};

/// Executes WeChat Pay calls: XML in, XML out, no access token.
#[derive(Debug, Clone)]
pub struct PayApiRequester {
    client: WechatClient,
}

impl PayApiRequester {
    pub fn new(client: WechatClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &WechatClient {
        &self.client
    }

    /// POST `body` to `target_url` and parse the XML reply.
    pub async fn request(&self, target_url: &str, body: String) -> Result<PayResponse, WechatError> {
        let message = self
            .client
            .http()
            .post(target_url)
            .header(CONTENT_TYPE, HeaderValue::from_static("text/xml; charset=utf-8"))
            .body(body)
            .build()?;

        log::debug!("POST {}", redact_url(message.url().as_str()));

        let response = self.client.send_request(message).await?.error_for_status()?;
        let text = response
            .text()
            .await
            .map_err(|e| WechatError::Http(HttpError::Decode(e.to_string())))?;

        PayResponse::from_xml(&text)
    }

    /// Send `parameters` and require `return_code=SUCCESS` / `return_msg=OK`.
    ///
    /// # Errors
    /// `WechatError::RemoteCall` carrying the remote error description, the
    /// target URL and the parameters that were sent.
    pub async fn request_and_get_return_value(
        &self,
        target_url: &str,
        parameters: &PayParameters,
    ) -> Result<PayResponse, WechatError> {
        let result = self.request(target_url, parameters.to_xml()).await?;

        if !result.is_return_success() {
            let message = result
                .err_code_des()
                .or_else(|| result.return_msg())
                .unwrap_or_default()
                .to_string();
            log::error!("WeChat Pay call failed: {} (target_url={})", message, target_url);

            return Err(WechatError::RemoteCall(Box::new(RemoteCallFailure {
                message,
                target_url: target_url.to_string(),
                request_parameters: parameters.clone(),
            })));
        }

        Ok(result)
    }
}
