use std::time::Duration;

use chrono::Local;
use sendpulse::{Credentials, SendPulseClient, ViberCampaign};
use serde_json::json;
use wiremock::matchers::{
    body_partial_json, body_string, body_string_contains, header, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SendPulseClient {
    SendPulseClient::builder(Credentials::new("wire-id", "wire-secret").unwrap())
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=client_credentials&client_id=wire-id&client_secret=wire-secret",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_sends_query_and_bearer() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/addressbooks"))
        .and(query_param("limit", "10"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Main"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.authenticate().await);

    let response = client.list_address_books(10, 0).await;
    assert_eq!(response.http_status_code, 200);
    assert!(!response.is_error);
    assert_eq!(response.data, Some(json!([{"id": 1, "name": "Main"}])));
}

#[tokio::test]
async fn unauthorized_call_is_refreshed_and_resent() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "fresh").await;

    Mock::given(method("POST"))
        .and(path("/addressbooks"))
        .and(header("authorization", "Bearer fresh"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("bookName=Leads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 99})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/addressbooks"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "unauthorized"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.create_address_book("Leads").await;

    assert_eq!(response.http_status_code, 200);
    assert!(!response.is_error);
    assert_eq!(response.data, Some(json!({"id": 99})));
    assert!(client.has_token());
}

#[tokio::test]
async fn viber_campaign_is_sent_as_json() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("POST"))
        .and(path("/viber"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "address_book": 4,
            "message": "Hello",
            "sender_id": 2,
            "send_date": "now"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.authenticate().await);

    let response = client
        .send_viber_campaign(&ViberCampaign {
            address_book: 4,
            message: "Hello".to_owned(),
            sender_id: 2,
            send_date: Local::now(),
            ..Default::default()
        })
        .await;
    assert!(response.is_success());
}

#[tokio::test]
async fn smtp_mail_is_embedded_as_form_field() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("POST"))
        .and(path("/smtp/emails"))
        .and(body_string_contains("email=%7B%22subject%22%3A%22Ping%22"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.authenticate().await);

    let email = json!({"subject": "Ping", "html": "<b>pong</b>"});
    let response = client.smtp_send_mail(email.as_object().unwrap()).await;
    assert!(response.is_success());
}

#[tokio::test]
async fn server_error_with_text_body_has_no_data() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("GET"))
        .and(path("/balance/USD"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.authenticate().await);

    let response = client.get_balance(Some("usd")).await;
    assert_eq!(response.http_status_code, 500);
    assert!(response.is_error);
    assert_eq!(response.data, None);
}

#[tokio::test]
async fn rejected_credentials_leave_client_without_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/access_token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client",
            "message": "Client authentication failed."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(!client.authenticate().await);
    assert!(!client.has_token());
}

#[tokio::test]
async fn unreachable_host_is_reported_locally() {
    let client = SendPulseClient::builder(Credentials::new("id", "secret").unwrap())
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let response = client.list_senders().await;
    assert_eq!(response.http_status_code, 0);
    assert!(response.is_error);
    assert!(
        response
            .sdk_error_message
            .as_deref()
            .is_some_and(|message| message.starts_with("transport error"))
    );
}

#[tokio::test]
async fn email_path_segment_reaches_server_escaped() {
    let mock_server = MockServer::start().await;
    mount_token(&mock_server, "tok").await;

    Mock::given(method("DELETE"))
        .and(path("/emails/..%2Fbalance"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.authenticate().await);

    let response = client.remove_email_from_all_books("../balance").await;
    assert_eq!(response.http_status_code, 200);
    assert_eq!(response.data, Some(json!({"result": true})));
}
