use crate::error::WechatError;

pub(crate) const DEFAULT_PAY_BASE_URL: &str = "https://api.mch.weixin.qq.com";

/// WeChat Pay settings read on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayOptions {
    base_url: String,
    is_sandbox: bool,
}

impl Default for PayOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PAY_BASE_URL.to_string(),
            is_sandbox: false,
        }
    }
}

impl PayOptions {
    pub fn builder() -> PayOptionsBuilder {
        PayOptionsBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_sandbox(&self) -> bool {
        self.is_sandbox
    }
}

#[must_use]
#[derive(Debug, Default)]
pub struct PayOptionsBuilder {
    base_url: Option<String>,
    is_sandbox: bool,
}

impl PayOptionsBuilder {
    /// Default: `<https://api.mch.weixin.qq.com>`
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Route calls to the sandbox (`/sandboxnew/pay/...`) endpoints.
    pub fn sandbox(mut self, is_sandbox: bool) -> Self {
        self.is_sandbox = is_sandbox;
        self
    }

    pub fn build(self) -> Result<PayOptions, WechatError> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_PAY_BASE_URL.to_string());

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(WechatError::Config(format!(
                "pay base_url must start with http:// or https://, got: {}",
                base_url
            )));
        }

        Ok(PayOptions {
            base_url: base_url.trim_end_matches('/').to_string(),
            is_sandbox: self.is_sandbox,
        })
    }
}
