//! Official Account APIs

pub mod media;
pub mod user;

pub use media::{MediaApi, MediaType, MediaUploadResponse};
pub use user::{BlacklistResponse, OpenIdList, UserApi, UserInfoResponse};
