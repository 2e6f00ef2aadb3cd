//! Request pipeline tests against a mock WeChat server.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use wechat_sdk::client::WechatClient;
use wechat_sdk::error::WechatError;
use wechat_sdk::requester::{ApiRequester, BinaryPayload, NO_REQUEST};
use wechat_sdk::token::StaticAccessToken;
use wechat_sdk::types::AccessToken;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Serialize)]
struct UserInfoRequest {
    openid: String,
    lang: String,
}

#[derive(Serialize)]
struct RenamedRequest {
    #[serde(rename = "openid_list")]
    open_ids: Vec<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct CodeResponse {
    #[serde(default)]
    errcode: i32,
    #[serde(default)]
    errmsg: String,
}

fn create_requester(mock_server: &MockServer) -> ApiRequester {
    let client = WechatClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();
    let token = StaticAccessToken::new(AccessToken::new("TEST_TOKEN").unwrap());
    ApiRequester::new(client, Arc::new(token))
}

fn user_info() -> UserInfoRequest {
    UserInfoRequest {
        openid: "o6_bmjrPTlm6".to_string(),
        lang: "zh_CN".to_string(),
    }
}

#[tokio::test]
async fn test_get_puts_token_before_fields() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/user/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errcode": 0,
            "errmsg": "ok"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let requester = create_requester(&mock_server);
    let url = format!("{}/cgi-bin/user/info", mock_server.uri());
    let response: CodeResponse = requester
        .request(&url, Method::GET, Some(&user_info()), true)
        .await
        .unwrap();
    assert_eq!(response.errcode, 0);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("access_token=TEST_TOKEN&openid=o6_bmjrPTlm6&lang=zh_CN")
    );
}

#[tokio::test]
async fn test_get_without_token() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/user/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let requester = create_requester(&mock_server);
    let url = format!("{}/cgi-bin/user/info", mock_server.uri());
    let _: CodeResponse = requester
        .request(&url, Method::GET, Some(&user_info()), false)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap();
    assert_eq!(query, "openid=o6_bmjrPTlm6&lang=zh_CN");
    assert!(!query.contains("access_token"));
}

#[tokio::test]
async fn test_get_uses_override_name() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/x"))
        .and(query_param("openid_list", r#"["a","b"]"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let requester = create_requester(&mock_server);
    let request = RenamedRequest {
        open_ids: vec!["a".to_string(), "b".to_string()],
    };
    let url = format!("{}/x", mock_server.uri());
    let _: CodeResponse = requester
        .request(&url, Method::GET, Some(&request), true)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cgi-bin/tags/members/batchunblacklist"))
        .and(query_param("access_token", "TEST_TOKEN"))
        .and(body_json(serde_json::json!({"openid_list": ["a"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errcode": 0,
            "errmsg": "ok"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let requester = create_requester(&mock_server);
    let request = RenamedRequest {
        open_ids: vec!["a".to_string()],
    };
    let url = format!("{}/cgi-bin/tags/members/batchunblacklist", mock_server.uri());
    let response: CodeResponse = requester
        .request(&url, Method::POST, Some(&request), true)
        .await
        .unwrap();
    assert_eq!(response.errmsg, "ok");
}

#[tokio::test]
async fn test_request_text_returns_raw_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/getcallbackip"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ip_list":["127.0.0.1"]}"#))
        .mount(&mock_server)
        .await;

    let requester = create_requester(&mock_server);
    let url = format!("{}/cgi-bin/getcallbackip", mock_server.uri());
    let text = requester
        .request_text(&url, Method::GET, NO_REQUEST, true)
        .await
        .unwrap();
    assert_eq!(text, r#"{"ip_list":["127.0.0.1"]}"#);
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/user/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let requester = create_requester(&mock_server);
    let url = format!("{}/cgi-bin/user/info", mock_server.uri());
    let result: Result<CodeResponse, _> = requester
        .request(&url, Method::GET, Some(&user_info()), true)
        .await;

    assert!(
        matches!(result, Err(WechatError::Json(_))),
        "expected WechatError::Json, got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_binary_body_falls_back_to_bytes() {
    let image = vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wxa/getwxacodeunlimit"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(image.clone()),
        )
        .mount(&mock_server)
        .await;

    let requester = create_requester(&mock_server);
    let url = format!("{}/wxa/getwxacodeunlimit", mock_server.uri());
    let payload: BinaryPayload<CodeResponse> = requester
        .request_binary(&url, Method::POST, Some(&user_info()), true)
        .await
        .unwrap();

    assert_eq!(payload, BinaryPayload::Binary(image));
}

#[tokio::test]
async fn test_binary_capable_call_with_json_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wxa/getwxacodeunlimit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errcode": 41030,
            "errmsg": "invalid page"
        })))
        .mount(&mock_server)
        .await;

    let requester = create_requester(&mock_server);
    let url = format!("{}/wxa/getwxacodeunlimit", mock_server.uri());
    let payload: BinaryPayload<CodeResponse> = requester
        .request_binary(&url, Method::POST, Some(&user_info()), true)
        .await
        .unwrap();

    assert_eq!(payload.json().unwrap().errcode, 41030);
    assert!(payload.binary_data().is_none());
}

#[tokio::test]
async fn test_http_error_status_propagates() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/user/info"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let requester = create_requester(&mock_server);
    let url = format!("{}/cgi-bin/user/info", mock_server.uri());
    let result: Result<CodeResponse, _> = requester
        .request(&url, Method::GET, NO_REQUEST, true)
        .await;

    assert!(
        matches!(result, Err(WechatError::Http(_))),
        "expected WechatError::Http, got: {:?}",
        result
    );
}

#[tokio::test]
async fn test_multipart_boundary_unquoted() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cgi-bin/media/upload"))
        .and(query_param("access_token", "TEST_TOKEN"))
        .and(query_param("type", "image"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "image",
            "media_id": "MEDIA_ID",
            "created_at": 1700000000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    #[derive(Serialize)]
    struct TypeQuery {
        #[serde(rename = "type")]
        media_type: &'static str,
    }

    let requester = create_requester(&mock_server);
    let part = reqwest::multipart::Part::bytes(b"fake image".to_vec()).file_name("a.jpg");
    let form = reqwest::multipart::Form::new().part("media", part);
    let url = format!("{}/cgi-bin/media/upload", mock_server.uri());

    let response: serde_json::Value = requester
        .request_multipart(&url, form, Some(&TypeQuery { media_type: "image" }), true)
        .await
        .unwrap();
    assert_eq!(response["media_id"], "MEDIA_ID");

    let requests = mock_server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    assert!(content_type.contains("boundary="));
    assert!(!content_type.contains('"'));
}
