use reqwest::header::{HeaderValue, CONTENT_TYPE};

use crate::error::WechatError;

/// Remove quote characters from the `boundary` parameter of a
/// `multipart/form-data` content type. WeChat rejects quoted boundaries.
pub fn unquote_boundary(content_type: &str) -> String {
    content_type
        .split(';')
        .map(|param| {
            let trimmed = param.trim_start();
            let is_boundary = trimmed
                .get(..9)
                .is_some_and(|name| name.eq_ignore_ascii_case("boundary="));
            if is_boundary {
                let offset = param.len() - trimmed.len();
                format!("{}{}", &param[..offset], trimmed.replace('"', ""))
            } else {
                param.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Rewrite the request's `Content-Type` header with an unquoted boundary.
pub fn unquote_request_boundary(request: &mut reqwest::Request) -> Result<(), WechatError> {
    let Some(content_type) = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return Ok(());
    };

    let fixed = unquote_boundary(content_type);
    if fixed != content_type {
        let value = HeaderValue::from_str(&fixed)
            .map_err(|e| WechatError::Config(format!("invalid content type {fixed:?}: {e}")))?;
        request.headers_mut().insert(CONTENT_TYPE, value);
    }
    Ok(())
}
