//! WeChat API services
//!
//! - [`common`] - shared `errcode` / `errmsg` handling
//! - [`official`] - Official Account user management and media upload
//! - [`mini_program`] - Mini Program code generation
//!
//! WeChat Pay lives in [`crate::pay`].

pub mod common;
pub mod mini_program;
pub mod official;
pub mod r#trait;

pub use common::{ApiResponseBase, WechatApiResponse};
pub use mini_program::{ACodeApi, ACodeRequest, ACodeResponse, LineColor, UnlimitedACodeRequest};
pub use official::{
    BlacklistResponse, MediaApi, MediaType, MediaUploadResponse, UserApi, UserInfoResponse,
};
pub use r#trait::{WechatApi, WechatContext};
