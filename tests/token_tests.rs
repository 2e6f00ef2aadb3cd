use std::sync::Arc;

use wechat_sdk::client::WechatClient;
use wechat_sdk::error::WechatError;
use wechat_sdk::token::{AccessTokenAccessor, TokenManager};
use wechat_sdk::types::{AppId, AppSecret};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_manager(mock_server: &MockServer) -> TokenManager {
    let client = WechatClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();
    TokenManager::new(
        client,
        AppId::new("wx1234567890abcdef").unwrap(),
        AppSecret::new("secret1234567890ab").unwrap(),
    )
}

#[tokio::test]
async fn test_token_fetched_with_credentials() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .and(query_param("grant_type", "client_credential"))
        .and(query_param("appid", "wx1234567890abcdef"))
        .and(query_param("secret", "secret1234567890ab"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "mock_token_123",
            "expires_in": 7200
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let manager = create_manager(&mock_server);
    assert_eq!(manager.get_token().await.unwrap(), "mock_token_123");
}

#[tokio::test]
async fn test_token_cached_between_calls() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "cached_token",
            "expires_in": 7200
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let manager = create_manager(&mock_server);
    for _ in 0..3 {
        assert_eq!(manager.access_token().await.unwrap(), "cached_token");
    }
}

#[tokio::test]
async fn test_concurrent_callers_share_one_fetch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "shared_token",
            "expires_in": 7200
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let manager = Arc::new(create_manager(&mock_server));
    let calls = (0..5).map(|_| {
        let manager = Arc::clone(&manager);
        async move { manager.get_token().await }
    });

    let results = futures::future::join_all(calls).await;
    for result in results {
        assert_eq!(result.unwrap(), "shared_token");
    }
}

#[tokio::test]
async fn test_invalidate_forces_refetch() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "refetched",
            "expires_in": 7200
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let manager = create_manager(&mock_server);
    manager.get_token().await.unwrap();
    manager.invalidate().await;
    assert_eq!(manager.get_token().await.unwrap(), "refetched");
}

#[tokio::test]
async fn test_short_lived_token_refetched() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "short",
            "expires_in": 60
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let manager = create_manager(&mock_server);
    manager.get_token().await.unwrap();
    manager.get_token().await.unwrap();
}

#[tokio::test]
async fn test_token_api_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errcode": 40013,
            "errmsg": "invalid appid"
        })))
        .mount(&mock_server)
        .await;

    let manager = create_manager(&mock_server);
    let result = manager.get_token().await;

    assert!(matches!(
        result,
        Err(WechatError::Api { code: 40013, .. })
    ));
}

#[tokio::test]
async fn test_token_overflowing_expires_in_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cgi-bin/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "t",
            "expires_in": u64::MAX
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let manager = create_manager(&mock_server);
    for _ in 0..2 {
        let result = manager.get_token().await;
        assert!(matches!(result, Err(WechatError::Token(_))));
    }
}
