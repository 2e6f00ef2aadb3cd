//! Temporary media upload
//!
//! Temporary media is kept by WeChat for three days and is referenced by its
//! `media_id` in customer service and template messages.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::common::WechatApiResponse;
use crate::api::r#trait::{WechatApi, WechatContext};
use crate::error::WechatError;

/// Media type for temporary media upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// jpg, png
    Image,
    /// mp3, wma, wav, amr
    Voice,
    /// mp4
    Video,
    /// jpg thumbnail
    Thumb,
}

#[derive(Debug, Serialize)]
struct UploadQuery {
    #[serde(rename = "type")]
    media_type: MediaType,
}

/// Response from temporary media upload
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUploadResponse {
    #[serde(rename = "type", default)]
    pub media_type: String,
    #[serde(default)]
    pub media_id: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub errcode: i32,
    #[serde(default)]
    pub errmsg: String,
}

impl WechatApiResponse for MediaUploadResponse {
    fn errcode(&self) -> i32 {
        self.errcode
    }

    fn errmsg(&self) -> &str {
        &self.errmsg
    }
}

/// Temporary media API
pub struct MediaApi {
    context: Arc<WechatContext>,
}

impl MediaApi {
    pub fn new(context: Arc<WechatContext>) -> Self {
        Self { context }
    }

    /// POST /cgi-bin/media/upload?access_token=ACCESS_TOKEN&type=TYPE
    ///
    /// The file is sent as the `media` part of a multipart form.
    pub async fn upload_temp_media(
        &self,
        media_type: MediaType,
        filename: &str,
        data: &[u8],
    ) -> Result<MediaUploadResponse, WechatError> {
        let part = reqwest::multipart::Part::bytes(data.to_vec()).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("media", part);

        let query = UploadQuery { media_type };
        let response: MediaUploadResponse = self
            .context
            .requester
            .request_multipart(
                &self.context.url("/cgi-bin/media/upload"),
                form,
                Some(&query),
                true,
            )
            .await?;

        response.check()?;
        Ok(response)
    }
}

impl WechatApi for MediaApi {
    fn context(&self) -> &WechatContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "official_media"
    }
}
