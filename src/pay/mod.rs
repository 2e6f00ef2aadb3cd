//! WeChat Pay family
//!
//! - [`PayParameters`] - sorted request parameters serialized as XML
//! - [`PayResponse`] - flattened XML response
//! - [`PayApiRequester`] - dispatch plus `return_code` / `return_msg` validation
//! - [`sandbox_url`] - sandbox endpoint rewrite
//! - [`PayApi`] - order endpoints

mod api;
mod options;
mod parameters;
mod requester;
mod response;
mod sandbox;

pub use api::PayApi;
pub use options::{PayOptions, PayOptionsBuilder};
pub use parameters::PayParameters;
pub use requester::PayApiRequester;
pub use response::{PayResponse, RETURN_MSG_OK, SUCCESS};
pub use sandbox::sandbox_url;
