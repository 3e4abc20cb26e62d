//
//  cloudflare-client
//  tests/facade.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end scenarios through the `Cloudflare` facade against a mock API.

use cloudflare_client::{AuthScheme, Cloudflare, Credentials, Error};
use mockito::Matcher;
use serde_json::json;

fn facade(server: &mockito::ServerGuard, credentials: Credentials) -> Cloudflare {
    Cloudflare::builder()
        .credentials(credentials)
        .base_url(server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_zone_read_with_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/zones/abc123")
        .match_header("authorization", "Bearer T")
        .match_header("x-auth-key", Matcher::Missing)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "errors": [],
                "messages": [],
                "result": {"id": "abc123", "name": "example.com", "status": "active"}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let cf = facade(&server, Credentials::token("T"));
    let zone = cf.zones().read("abc123").await.unwrap();

    assert_eq!(zone.id, "abc123");
    assert_eq!(zone.name, "example.com");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_zone_read_unsuccessful_envelope() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/zones/abc123")
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": false,
                "errors": [{"code": 1003, "message": "Invalid or missing zone id."}],
                "messages": [],
                "result": null
            })
            .to_string(),
        )
        .create_async()
        .await;

    let cf = facade(&server, Credentials::token("T"));
    let err = cf.zones().read("abc123").await.unwrap_err();

    let api = err.api_error().expect("api error");
    assert_eq!(api.codes(), vec![1003]);
    assert!(api.message.contains("Invalid or missing zone id."));
}

#[tokio::test]
async fn test_dns_records_browse_with_email_and_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/zones/zoneId/dns_records")
        .match_header("x-auth-email", "e")
        .match_header("x-auth-key", "k")
        .match_header("authorization", Matcher::Missing)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "errors": [],
                "messages": [],
                "result": [
                    {"id": "r1", "type": "A", "name": "example.com", "content": "198.51.100.4"}
                ],
                "result_info": {"page": 1, "per_page": 20, "count": 1, "total_count": 1}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let cf = facade(&server, Credentials::email_key("e", "k"));
    let records = cf.dns_records().browse("zoneId", None).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type, "A");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_zone_fails_locally() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let cf = facade(&server, Credentials::email_key("e", "k"));
    let err = cf.dns_records().browse("", None).await.unwrap_err();

    assert!(matches!(
        err,
        Error::MissingParameter { parameter: "zone_id", .. }
    ));
    assert!(err.is_local());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_independent_facades_send_identical_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/user/tokens/verify")
        .match_header("authorization", "Bearer shared")
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "errors": [],
                "messages": [],
                "result": {"id": "tok", "status": "active"}
            })
            .to_string(),
        )
        .expect(2)
        .create_async()
        .await;

    let first = facade(&server, Credentials::token("shared"));
    let second = facade(&server, Credentials::token("shared"));

    assert!(!std::ptr::eq(first.client(), second.client()));
    assert_eq!(first.client().auth_scheme(), second.client().auth_scheme());
    assert_eq!(
        first.client().auth_scheme().map(|s| s.headers()),
        Some(vec![("Authorization", "Bearer shared".to_string())])
    );

    assert!(first.user_tokens().verify().await.unwrap().is_active());
    assert!(second.user_tokens().verify().await.unwrap().is_active());
    mock.assert_async().await;
}

#[test]
fn test_proxy_configuration() {
    let direct = Cloudflare::new(Credentials::token("T"), None).unwrap();
    assert!(!direct.client().has_proxy());

    let empty = Cloudflare::new(Credentials::token("T"), Some("")).unwrap();
    assert!(!empty.client().has_proxy());

    let proxied = Cloudflare::new(Credentials::token("T"), Some("http://proxy:8080")).unwrap();
    assert!(proxied.client().has_proxy());

    let bypassed = Cloudflare::builder()
        .credentials(Credentials::token("T"))
        .proxy("http://proxy:8080")
        .no_proxy("api.cloudflare.com")
        .build()
        .unwrap();
    assert!(!bypassed.client().has_proxy());
}

#[test]
fn test_auth_precedence() {
    let all = Credentials {
        email: Some("e".to_string()),
        key: Some("k".to_string()),
        token: Some("T".to_string()),
    };
    assert_eq!(AuthScheme::select(&all).map(|s| s.name()), Some("token"));

    let service = Credentials {
        email: Some("e".to_string()),
        ..Credentials::service_key("v1.0-abc")
    };
    assert_eq!(AuthScheme::select(&service).map(|s| s.name()), Some("user_service_key"));

    assert!(AuthScheme::select(&Credentials::default()).is_none());
}
