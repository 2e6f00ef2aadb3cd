//! WeChat SDK for Rust
//!
//! Async clients for the WeChat Official Account, Mini Program and Pay
//! server-side APIs, built around one request pipeline:
//!
//! - [`requester::ApiRequester`] - URL normalization, `access_token`
//!   injection, query/JSON message building, dispatch and JSON decoding,
//!   including a binary fallback for image-returning endpoints
//! - [`pay::PayApiRequester`] - the XML variant used by WeChat Pay, with
//!   `return_code` / `return_msg` validation and sandbox URL rewriting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wechat_sdk::api::{UserApi, WechatContext};
//! use wechat_sdk::client::WechatClient;
//! use wechat_sdk::types::{AppId, AppSecret};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WechatClient::builder().build()?;
//!     let context = Arc::new(WechatContext::with_credentials(
//!         client,
//!         AppId::new("wx1234567890abcdef")?,
//!         AppSecret::new("your_secret")?,
//!     ));
//!
//!     let user = UserApi::new(context)
//!         .get_user_info("o6_bmjrPTlm6_2sgVt7hMZOPfL2M", "zh_CN")
//!         .await?;
//!     println!("subscribed: {}", user.subscribe == 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Official Account and Mini Program API services
//! - [`client`] - HTTP transport
//! - [`error`] - Error types
//! - [`middleware`] - Tower middleware (request logging)
//! - [`pay`] - WeChat Pay
//! - [`requester`] - Generic request pipeline
//! - [`token`] - Access token sources
//! - [`types`] - Validated identifiers
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use wechat_sdk::WechatError;
//!
//! match result {
//!     Ok(response) => { /* handle success */ }
//!     Err(WechatError::Api { code, message }) => {
//!         eprintln!("API error: {} - {}", code, message);
//!     }
//!     Err(WechatError::RemoteCall(failure)) => {
//!         eprintln!("pay call to {} failed: {}", failure.target_url, failure.message);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod middleware;
pub mod pay;
pub mod requester;
pub mod token;
pub mod types;

pub use client::{WechatClient, WechatClientBuilder};
pub use error::WechatError;
pub use requester::{ApiRequester, BinaryPayload};
