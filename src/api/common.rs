//! Common API response primitives
//!
//! Most WeChat JSON APIs return `errcode` / `errmsg` alongside their data.
//!
//! ```rust
//! use wechat_sdk::api::common::{ApiResponseBase, WechatApiResponse};
//!
//! let json = r#"{"errcode": 40013, "errmsg": "invalid appid"}"#;
//! let resp: ApiResponseBase = serde_json::from_str(json).unwrap();
//! assert!(!resp.is_success());
//! assert!(resp.check().is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::WechatError;

/// Trait for WeChat API responses that carry `errcode` / `errmsg`.
pub trait WechatApiResponse {
    /// `0` indicates success; any other value is an error.
    fn errcode(&self) -> i32;

    fn errmsg(&self) -> &str;

    /// Returns `WechatError::Api` when `errcode != 0`.
    fn check(&self) -> Result<(), WechatError> {
        WechatError::check_api(self.errcode(), self.errmsg())
    }

    fn is_success(&self) -> bool {
        self.errcode() == 0
    }
}

/// Response carrying only `errcode` and `errmsg`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiResponseBase {
    #[serde(default)]
    pub errcode: i32,
    #[serde(default)]
    pub errmsg: String,
}

impl WechatApiResponse for ApiResponseBase {
    fn errcode(&self) -> i32 {
        self.errcode
    }

    fn errmsg(&self) -> &str {
        &self.errmsg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_base_deserialize_success() {
        let resp: ApiResponseBase = serde_json::from_str(r#"{"errcode":0,"errmsg":"ok"}"#).unwrap();
        assert!(resp.is_success());
        assert!(resp.check().is_ok());
    }

    #[test]
    fn test_api_response_base_defaults_on_missing_fields() {
        let resp: ApiResponseBase = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, ApiResponseBase::default());
        assert!(resp.is_success());
    }

    #[test]
    fn test_check_error_returns_api_error() {
        let resp: ApiResponseBase =
            serde_json::from_str(r#"{"errcode":40003,"errmsg":"invalid openid"}"#).unwrap();
        match resp.check() {
            Err(WechatError::Api { code, message }) => {
                assert_eq!(code, 40003);
                assert_eq!(message, "invalid openid");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
