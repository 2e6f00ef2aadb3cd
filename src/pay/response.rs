use std::collections::BTreeMap;

use crate::error::WechatError;

pub const SUCCESS: &str = "SUCCESS";
pub const RETURN_MSG_OK: &str = "OK";

/// A WeChat Pay XML response, flattened to the root element's children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayResponse {
    fields: BTreeMap<String, String>,
}

impl PayResponse {
    pub fn from_xml(xml: &str) -> Result<Self, WechatError> {
        let fields: BTreeMap<String, String> = quick_xml::de::from_str(xml)?;
        Ok(Self { fields })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn return_code(&self) -> Option<&str> {
        self.get("return_code")
    }

    pub fn return_msg(&self) -> Option<&str> {
        self.get("return_msg")
    }

    pub fn result_code(&self) -> Option<&str> {
        self.get("result_code")
    }

    pub fn err_code_des(&self) -> Option<&str> {
        self.get("err_code_des")
    }

    /// `true` when `return_code` is `SUCCESS` and `return_msg` is `OK`.
    pub fn is_return_success(&self) -> bool {
        self.return_code() == Some(SUCCESS) && self.return_msg() == Some(RETURN_MSG_OK)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }
}
