use thiserror::Error;

use crate::pay::PayParameters;

/// Transport level failures
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("response decode failed: {0}")]
    Decode(String),
}

/// A payment call whose `return_code` / `return_msg` did not signal success.
///
/// Carries the request context so callers can log or inspect what was sent.
#[derive(Debug, Clone)]
pub struct RemoteCallFailure {
    pub message: String,
    pub target_url: String,
    pub request_parameters: PayParameters,
}

impl std::fmt::Display for RemoteCallFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (target_url={})", self.message, self.target_url)
    }
}

/// WeChat SDK error types
#[derive(Debug, Error)]
pub enum WechatError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML deserialization error: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("WeChat API error (code={code}): {message}")]
    Api { code: i32, message: String },

    #[error("WeChat Pay call failed: {0}")]
    RemoteCall(Box<RemoteCallFailure>),

    #[error("Access token error: {0}")]
    Token(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for WechatError {
    fn from(e: reqwest::Error) -> Self {
        WechatError::Http(HttpError::Reqwest(e))
    }
}

impl WechatError {
    /// Returns `Err(WechatError::Api)` when `errcode` is non-zero.
    pub fn check_api(errcode: i32, errmsg: &str) -> Result<(), WechatError> {
        if errcode != 0 {
            return Err(WechatError::Api {
                code: errcode,
                message: errmsg.to_string(),
            });
        }
        Ok(())
    }

    /// The payment failure details, if this is a [`WechatError::RemoteCall`].
    pub fn remote_call(&self) -> Option<&RemoteCallFailure> {
        match self {
            WechatError::RemoteCall(failure) => Some(failure),
            _ => None,
        }
    }
}
