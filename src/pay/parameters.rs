use std::collections::BTreeMap;

use quick_xml::escape::escape;

use crate::error::WechatError;

fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// WeChat Pay request parameters.
///
/// Keys are kept sorted, which is also the order the signature is computed
/// over. Empty values are never stored.
///
/// ```rust
/// use wechat_sdk::pay::PayParameters;
///
/// let params = PayParameters::new()
///     .with("out_trade_no", "20240101001")?
///     .with("appid", "wx1234567890abcdef")?
///     .with("attach", "")?;
///
/// assert_eq!(params.len(), 2);
/// assert_eq!(
///     params.to_xml(),
///     "<xml><appid>wx1234567890abcdef</appid><out_trade_no>20240101001</out_trade_no></xml>"
/// );
/// # Ok::<(), wechat_sdk::WechatError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayParameters {
    values: BTreeMap<String, String>,
}

impl PayParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, skipping empty values.
    ///
    /// Keys become XML element names, so only ASCII letters, digits and `_`
    /// are accepted, starting with a letter or `_`.
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, WechatError> {
        let key = key.into();
        if !is_valid_key(&key) {
            return Err(WechatError::Config(format!(
                "invalid pay parameter name: {key:?}"
            )));
        }

        let value = value.into();
        if !value.is_empty() {
            self.values.insert(key, value);
        }
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize as the `<xml>...</xml>` document WeChat Pay expects.
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<xml>");
        for (key, value) in &self.values {
            xml.push_str(&format!("<{key}>{}</{key}>", escape(value.as_str())));
        }
        xml.push_str("</xml>");
        xml
    }
}
