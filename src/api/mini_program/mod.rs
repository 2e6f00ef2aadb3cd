//! Mini Program APIs

pub mod acode;

pub use acode::{ACodeApi, ACodeRequest, ACodeResponse, LineColor, UnlimitedACodeRequest};
