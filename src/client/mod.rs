//! WeChat HTTP transport
//!
//! [`WechatClient`] owns the reqwest client, the base URL and an optional
//! tower middleware stack. Everything that talks to WeChat dispatches
//! through it.

mod wechat_client;
pub use wechat_client::WechatClient;

mod builder;
pub use builder::WechatClientBuilder;

pub(crate) use wechat_client::MiddlewareExecutor;
