//! Request message assembly
//!
//! Turns a target URL plus an optional serde-serializable request value into
//! a ready-to-send [`reqwest::Request`]. Field names come from the request
//! type's `Serialize` impl, so `#[serde(rename = "...")]` overrides the wire
//! name and fields keep their declaration order.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;

use crate::error::WechatError;

/// Everything except RFC 3986 unreserved characters is encoded.
const QUERY_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Placeholder for calls that carry no request value.
pub const NO_REQUEST: Option<&()> = None;

fn encode(component: &str) -> String {
    utf8_percent_encode(component, QUERY_COMPONENT_ENCODE_SET).to_string()
}

/// Make `url` ready to take its first (or next) query parameter.
///
/// A URL without a query gets a trailing `?`; a URL that already has one
/// gets a trailing `&` unless it already ends with a delimiter.
pub fn normalize_target_url(url: &str) -> String {
    if !url.contains('?') {
        return format!("{url}?");
    }
    if url.ends_with('?') || url.ends_with('&') {
        url.to_string()
    } else {
        format!("{url}&")
    }
}

/// Append `access_token=<token>` to a URL produced by [`normalize_target_url`].
pub fn append_access_token(url: &str, token: &str) -> String {
    format!("{url}access_token={}", encode(token))
}

/// Flatten a request value into `(wire_name, value)` pairs.
///
/// Strings are used as-is, scalars through their JSON text, nested arrays
/// and objects as compact JSON. `null` fields are dropped.
pub fn query_pairs<R>(request: &R) -> Result<Vec<(String, String)>, WechatError>
where
    R: Serialize + ?Sized,
{
    let Value::Object(fields) = serde_json::to_value(request)? else {
        return Err(WechatError::Config(
            "request must serialize to a JSON object".to_string(),
        ));
    };

    Ok(fields
        .into_iter()
        .filter_map(|(name, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(s) => s,
                other => other.to_string(),
            };
            Some((name, value))
        })
        .collect())
}

/// Build the GET URL: `target_url` followed by the request's fields.
pub fn build_get_url<R>(target_url: &str, request: Option<&R>) -> Result<String, WechatError>
where
    R: Serialize + ?Sized,
{
    let Some(request) = request else {
        return Ok(target_url.to_string());
    };

    let pairs = query_pairs(request)?;
    if pairs.is_empty() {
        return Ok(target_url.to_string());
    }

    let mut url = if target_url.ends_with('?') || target_url.ends_with('&') {
        target_url.to_string()
    } else if target_url.contains('?') {
        format!("{target_url}&")
    } else {
        format!("{target_url}?")
    };

    let query = pairs
        .iter()
        .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    url.push_str(&query);

    Ok(url)
}

/// Build the outgoing message. Any verb other than GET is sent as a POST
/// with the request's JSON text as body.
pub fn build_request_message<R>(
    http: &Client,
    target_url: &str,
    method: &Method,
    request: Option<&R>,
) -> Result<reqwest::Request, WechatError>
where
    R: Serialize + ?Sized,
{
    if *method == Method::GET {
        let url = build_get_url(target_url, request)?;
        return Ok(http.get(url).build()?);
    }

    let mut builder = http.post(target_url);
    if let Some(request) = request {
        builder = builder
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(serde_json::to_string(request)?);
    }
    Ok(builder.build()?)
}
