use mockito::{Matcher, Server};
use monoclient::{Client, ClientConfig, DEFAULT_BASE_URL, Error, NoAuth, SignedAuth, TokenAuth};
use reqwest::StatusCode;

fn client_at(base_url: &str) -> Client {
    Client::with_config(
        TokenAuth::new("fake_token"),
        ClientConfig::default().with_base_url(base_url),
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_json_against_fake_api() {
    let mut server = Server::new_async().await;
    let expected = "This is fake response from the fake API";
    let mock = server
        .mock("GET", Matcher::Any)
        .with_body(expected)
        .create_async()
        .await;

    let mut client = Client::new(TokenAuth::new("fake_token")).unwrap();
    client.set_base_url(server.url());

    let (body, status) = client.get_json("/fake").await.unwrap();
    assert_eq!(body, expected.as_bytes());
    assert_eq!(status, StatusCode::OK);
    mock.assert_async().await;

    client.reset_base_url();
    assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    assert_eq!(
        client.build_url("/fake").unwrap(),
        "https://api.monobank.ua/fake"
    );
}

#[tokio::test]
async fn test_server_error_is_returned_not_raised() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/personal/client-info")
        .with_status(500)
        .with_body("error")
        .create_async()
        .await;

    let client = client_at(&server.url());
    let (body, status) = client.get_json("/personal/client-info").await.unwrap();

    assert_eq!(body, b"error");
    assert_eq!(status.as_u16(), 500);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_api_error_payload_passes_through() {
    let mut server = Server::new_async().await;
    let payload = r#"{"errorDescription":"Too many requests"}"#;
    let mock = server
        .mock("GET", "/bank/currency")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(payload)
        .create_async()
        .await;

    let client = Client::with_config(NoAuth, ClientConfig::default().with_base_url(server.url()))
        .unwrap();
    let (body, status) = client.get_json("/bank/currency").await.unwrap();

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body, payload.as_bytes());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_json_echo() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/echo")
        .match_header("x-token", "fake_token")
        .with_body_from_request(|request| request.body().unwrap().clone())
        .create_async()
        .await;

    let client = client_at(&server.url());
    let payload = br#"{"account":"0","from":1700000000}"#.to_vec();
    let (body, status) = client.post_json("/echo", payload.clone()).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_signed_auth_headers_reach_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/personal/corp/settings")
        .match_header("x-key-id", "key-1")
        .match_header("x-time", Matcher::Regex(r"^\d+$".to_string()))
        .match_header("x-sign", Matcher::Any)
        .with_status(200)
        .create_async()
        .await;

    let client = Client::with_config(
        SignedAuth::new("key-1", "secret"),
        ClientConfig::default().with_base_url(server.url()),
    )
    .unwrap();
    client.get_json("/personal/corp/settings").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/proxy/mono/bank/currency")
        .with_body("[]")
        .create_async()
        .await;

    let client = client_at(&format!("{}/proxy/mono", server.url()));
    let (body, _) = client.get_json("bank/currency/").await.unwrap();

    assert_eq!(body, b"[]");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_base_url_fails_before_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut client = client_at(&server.url());
    client.set_base_url("::not a url::");

    let err = client.get_json("/fake").await.unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.to_string().contains("::not a url::"));

    mock.assert_async().await;
}
