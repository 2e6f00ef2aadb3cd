//! Tower middleware for the WeChat transport.
//!
//! Layers are attached with
//! [`WechatClientBuilder::with_middleware`](crate::client::WechatClientBuilder::with_middleware)
//! and wrap every request the SDK dispatches.
//!
//! ```ignore
//! use wechat_sdk::client::WechatClient;
//! use wechat_sdk::middleware::LoggingMiddleware;
//!
//! let client = WechatClient::builder()
//!     .with_middleware(LoggingMiddleware::new().verbose())
//!     .build()?;
//! ```

pub use tower::{Layer, Service, ServiceBuilder};

mod logging;

pub use logging::{LoggingMiddleware, LoggingMiddlewareService};
pub(crate) use logging::redact_url;
