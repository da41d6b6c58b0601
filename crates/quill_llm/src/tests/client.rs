use mockito::{Matcher, Server};
use serde_json::json;

use crate::client::{GeminiClient, GeminiConfig, GenerationClient};
use crate::error::Error;

fn client_for(server: &Server) -> GeminiClient {
    GeminiClient::new(GeminiConfig::new().with_base_url(server.url())).unwrap()
}

#[tokio::test]
async fn test_success_returns_nested_text_untrimmed() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "contents": [{"parts": [{
                "text": "Using the following context:\n---\nctx\n---\nPerform this instruction: \"do thing\""
            }]}]
        })))
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"  generated  "}]}}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let out = client.generate("test-key", "ctx", "do thing").await.unwrap();

    // Trimming is the orchestrator's job, not the client's.
    assert_eq!(out, "  generated  ");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_body_message_is_surfaced() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error":{"message":"bad key"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate("k", "ctx", "go").await.unwrap_err();
    assert!(matches!(err, Error::Remote(ref m) if m == "bad key"));
}

#[tokio::test]
async fn test_unparsable_error_body_falls_back_to_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("<html>Internal Server Error</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate("k", "ctx", "go").await.unwrap_err();
    assert!(matches!(err, Error::Remote(ref m) if m == "HTTP error! status: 500"));
}

#[tokio::test]
async fn test_error_body_without_message_falls_back_to_status() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"reason":"quota"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate("k", "ctx", "go").await.unwrap_err();
    assert!(matches!(err, Error::Remote(ref m) if m == "HTTP error! status: 403"));
}

#[tokio::test]
async fn test_missing_candidates_is_unexpected_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate("k", "ctx", "go").await.unwrap_err();
    match err {
        Error::UnexpectedShape(body) => {
            // The parsed body rides along for diagnostic logging.
            assert_eq!(body["promptFeedback"]["blockReason"], "SAFETY");
        }
        other => panic!("expected UnexpectedShape, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_string_text_is_unexpected_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":42}]}}]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate("k", "ctx", "go").await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedShape(_)));
}

#[tokio::test]
async fn test_model_override_changes_endpoint_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let config = GeminiConfig::new()
        .with_base_url(server.url())
        .with_model("gemini-1.5-flash");
    let client = GeminiClient::new(config).unwrap();
    let out = client.generate("k", "ctx", "go").await.unwrap();

    assert_eq!(out, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // Nothing listens on this port.
    let config = GeminiConfig::new().with_base_url("http://127.0.0.1:9");
    let client = GeminiClient::new(config).unwrap();
    let err = client.generate("k", "ctx", "go").await.unwrap_err();
    assert!(matches!(err, Error::Network(_)));
}

#[tokio::test]
async fn test_empty_key_fails_before_any_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-pro:generateContent")
        .match_query(Matcher::Any)
        .expect(0)
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.generate("", "ctx", "go").await.unwrap_err();
    assert!(matches!(err, Error::MissingApiKey));
    mock.assert_async().await;
}
