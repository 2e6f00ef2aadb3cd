//! Mini Program code (wxacode) generation
//!
//! Both endpoints answer with image bytes on success and a JSON error
//! document on failure, so results come back as a [`BinaryPayload`].

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::WechatApiResponse;
use crate::api::r#trait::{WechatApi, WechatContext};
use crate::error::WechatError;
use crate::requester::BinaryPayload;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Request for `/wxa/getwxacodeunlimit`.
///
/// ```rust
/// use wechat_sdk::api::UnlimitedACodeRequest;
///
/// let request = UnlimitedACodeRequest::new("id=42")
///     .page("pages/detail/index")
///     .width(430);
/// assert_eq!(request.scene(), "id=42");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct UnlimitedACodeRequest {
    scene: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    check_path: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    env_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_color: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_color: Option<LineColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_hyaline: Option<bool>,
}

impl UnlimitedACodeRequest {
    /// `scene` is at most 32 visible characters.
    pub fn new(scene: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            page: None,
            check_path: None,
            env_version: None,
            width: None,
            auto_color: None,
            line_color: None,
            is_hyaline: None,
        }
    }

    pub fn scene(&self) -> &str {
        &self.scene
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn check_path(mut self, check_path: bool) -> Self {
        self.check_path = Some(check_path);
        self
    }

    /// `release`, `trial` or `develop`
    pub fn env_version(mut self, env_version: impl Into<String>) -> Self {
        self.env_version = Some(env_version.into());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn auto_color(mut self, auto_color: bool) -> Self {
        self.auto_color = Some(auto_color);
        self
    }

    pub fn line_color(mut self, line_color: LineColor) -> Self {
        self.line_color = Some(line_color);
        self
    }

    pub fn is_hyaline(mut self, is_hyaline: bool) -> Self {
        self.is_hyaline = Some(is_hyaline);
        self
    }
}

/// Request for `/wxa/getwxacode` (limited to 100,000 codes per app).
#[derive(Debug, Clone, Serialize)]
pub struct ACodeRequest {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_color: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_color: Option<LineColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_hyaline: Option<bool>,
}

impl ACodeRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            width: None,
            auto_color: None,
            line_color: None,
            is_hyaline: None,
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn auto_color(mut self, auto_color: bool) -> Self {
        self.auto_color = Some(auto_color);
        self
    }

    pub fn line_color(mut self, line_color: LineColor) -> Self {
        self.line_color = Some(line_color);
        self
    }

    pub fn is_hyaline(mut self, is_hyaline: bool) -> Self {
        self.is_hyaline = Some(is_hyaline);
        self
    }
}

/// JSON body returned instead of an image when generation fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ACodeResponse {
    #[serde(default)]
    pub errcode: i32,
    #[serde(default)]
    pub errmsg: String,
}

impl WechatApiResponse for ACodeResponse {
    fn errcode(&self) -> i32 {
        self.errcode
    }

    fn errmsg(&self) -> &str {
        &self.errmsg
    }
}

/// Mini Program code API
pub struct ACodeApi {
    context: Arc<WechatContext>,
}

impl ACodeApi {
    pub fn new(context: Arc<WechatContext>) -> Self {
        Self { context }
    }

    /// POST /wxa/getwxacodeunlimit
    pub async fn get_unlimited_acode(
        &self,
        request: &UnlimitedACodeRequest,
    ) -> Result<BinaryPayload<ACodeResponse>, WechatError> {
        self.context
            .requester
            .request_binary(
                &self.context.url("/wxa/getwxacodeunlimit"),
                Method::POST,
                Some(request),
                true,
            )
            .await
    }

    /// POST /wxa/getwxacode
    pub async fn get_acode(
        &self,
        request: &ACodeRequest,
    ) -> Result<BinaryPayload<ACodeResponse>, WechatError> {
        self.context
            .requester
            .request_binary(
                &self.context.url("/wxa/getwxacode"),
                Method::POST,
                Some(request),
                true,
            )
            .await
    }
}

impl WechatApi for ACodeApi {
    fn context(&self) -> &WechatContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "mini_program_acode"
    }
}
