//! Official Account user management
//!
//! User profile lookup and blacklist management.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::common::{ApiResponseBase, WechatApiResponse};
use crate::api::r#trait::{WechatApi, WechatContext};
use crate::error::WechatError;

#[derive(Debug, Serialize)]
struct UserInfoRequest<'a> {
    openid: &'a str,
    lang: &'a str,
}

#[derive(Debug, Serialize)]
struct BlacklistQueryRequest<'a> {
    begin_openid: &'a str,
}

#[derive(Debug, Serialize)]
struct BatchBlacklistRequest<'a> {
    #[serde(rename = "openid_list")]
    open_ids: &'a [String],
}

/// Profile of a follower.
///
/// Only `subscribe` and `openid` are guaranteed; the rest is omitted for
/// users who have unsubscribed.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfoResponse {
    /// 1 when the user follows the account
    #[serde(default)]
    pub subscribe: i32,
    #[serde(default)]
    pub openid: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub subscribe_time: Option<i64>,
    #[serde(default)]
    pub unionid: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub groupid: Option<i64>,
    #[serde(default)]
    pub tagid_list: Vec<i64>,
    #[serde(default)]
    pub subscribe_scene: Option<String>,
    #[serde(default)]
    pub errcode: i32,
    #[serde(default)]
    pub errmsg: String,
}

impl WechatApiResponse for UserInfoResponse {
    fn errcode(&self) -> i32 {
        self.errcode
    }

    fn errmsg(&self) -> &str {
        &self.errmsg
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenIdList {
    #[serde(default)]
    pub openid: Vec<String>,
}

/// One page of blacklisted openids.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlacklistResponse {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub data: OpenIdList,
    /// Pass as `begin_openid` to fetch the next page
    #[serde(default)]
    pub next_openid: String,
    #[serde(default)]
    pub errcode: i32,
    #[serde(default)]
    pub errmsg: String,
}

impl WechatApiResponse for BlacklistResponse {
    fn errcode(&self) -> i32 {
        self.errcode
    }

    fn errmsg(&self) -> &str {
        &self.errmsg
    }
}

/// Official Account user API
pub struct UserApi {
    context: Arc<WechatContext>,
}

impl UserApi {
    pub fn new(context: Arc<WechatContext>) -> Self {
        Self { context }
    }

    /// GET /cgi-bin/user/info
    pub async fn get_user_info(
        &self,
        openid: &str,
        lang: &str,
    ) -> Result<UserInfoResponse, WechatError> {
        let request = UserInfoRequest { openid, lang };
        let response: UserInfoResponse = self
            .context
            .requester
            .request(
                &self.context.url("/cgi-bin/user/info"),
                Method::GET,
                Some(&request),
                true,
            )
            .await?;

        response.check()?;
        Ok(response)
    }

    /// POST /cgi-bin/tags/members/getblacklist
    ///
    /// Pass an empty `begin_openid` to start from the first page.
    pub async fn get_blacklist(&self, begin_openid: &str) -> Result<BlacklistResponse, WechatError> {
        let request = BlacklistQueryRequest { begin_openid };
        let response: BlacklistResponse = self
            .context
            .requester
            .request(
                &self.context.url("/cgi-bin/tags/members/getblacklist"),
                Method::POST,
                Some(&request),
                true,
            )
            .await?;

        response.check()?;
        Ok(response)
    }

    /// POST /cgi-bin/tags/members/batchblacklist
    pub async fn batch_blacklist(&self, open_ids: &[String]) -> Result<(), WechatError> {
        self.post_openid_list("/cgi-bin/tags/members/batchblacklist", open_ids)
            .await
    }

    /// POST /cgi-bin/tags/members/batchunblacklist
    pub async fn batch_unblacklist(&self, open_ids: &[String]) -> Result<(), WechatError> {
        self.post_openid_list("/cgi-bin/tags/members/batchunblacklist", open_ids)
            .await
    }

    async fn post_openid_list(&self, path: &str, open_ids: &[String]) -> Result<(), WechatError> {
        if open_ids.is_empty() || open_ids.len() > 20 {
            return Err(WechatError::Config(format!(
                "openid_list must contain 1 to 20 openids, got {}",
                open_ids.len()
            )));
        }

        let request = BatchBlacklistRequest { open_ids };
        let response: ApiResponseBase = self
            .context
            .requester
            .request(&self.context.url(path), Method::POST, Some(&request), true)
            .await?;

        response.check()
    }
}

impl WechatApi for UserApi {
    fn context(&self) -> &WechatContext {
        &self.context
    }

    fn api_name(&self) -> &'static str {
        "official_user"
    }
}
