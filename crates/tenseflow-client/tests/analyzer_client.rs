//! Integration tests for the analyzer client against a throwaway local server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tenseflow_client::{AnalyzerClient, ClientConfig, ClientError};
use tenseflow_core::{default_example, ElementPolicy, Normalizer, Notice, ReferenceVersion};

// ============================================================================
// Test server
// ============================================================================

type Received = Arc<Mutex<Vec<Value>>>;

/// Serve `app` on an ephemeral port and return the analyzer URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api/analyzer")
}

async fn record(
    State((log, reply)): State<(Received, Value)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    log.lock().unwrap().push(body);
    Json(reply)
}

/// An analyzer that records each request body and answers with `reply`.
async fn recording_analyzer(reply: Value) -> (String, Received) {
    let received: Received = Arc::default();
    let app = Router::new()
        .route("/api/analyzer", post(record))
        .with_state((received.clone(), reply));
    (serve(app).await, received)
}

fn client(url: String) -> AnalyzerClient {
    let config = ClientConfig::new(url);
    AnalyzerClient::new(config, Normalizer::default()).unwrap()
}

// ============================================================================
// Successful round trips
// ============================================================================

#[tokio::test]
async fn sends_trimmed_sentence_and_normalizes_messages() {
    let (url, received) = recording_analyzer(json!({
        "messages": [{"sentence": "B", "tense": "Past Simple", "tags": []}]
    }))
    .await;

    let outcome = client(url).analyze("   She reads.  \n").await.unwrap();

    assert_eq!(
        received.lock().unwrap().as_slice(),
        [json!({"sentence": "She reads."})]
    );
    assert_eq!(outcome.examples.len(), 1);
    assert_eq!(outcome.examples[0].sentence, "B");
    assert_eq!(outcome.notice, None);
}

#[tokio::test]
async fn unrecognized_shape_falls_back_with_notice() {
    let (url, _) = recording_analyzer(json!({"foo": 1})).await;
    let outcome = client(url).analyze("Hello").await.unwrap();
    assert_eq!(outcome.examples, vec![default_example()]);
    assert_eq!(outcome.notice, Some(Notice::UnrecognizedResponse));
}

#[tokio::test]
async fn validate_policy_reports_dropped_elements() {
    let (url, _) = recording_analyzer(json!([
        {"sentence": "kept", "tense": "Past Simple", "tags": []},
        {"sentence": "gone", "tense": "Aorist", "tags": []}
    ]))
    .await;
    let normalizer = Normalizer::new(
        ReferenceVersion::Full.tables(),
        ElementPolicy::Validate,
        true,
    );
    let config = ClientConfig::new(url);
    let client = AnalyzerClient::new(config, normalizer).unwrap();

    let outcome = client.analyze("x").await.unwrap();
    assert_eq!(outcome.examples.len(), 1);
    assert_eq!(outcome.examples[0].sentence, "kept");
    assert_eq!(outcome.notice, Some(Notice::DroppedElements(1)));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn error_status_falls_back_with_message() {
    let app = Router::new().route(
        "/api/analyzer",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = serve(app).await;

    let outcome = client(url).analyze("She reads.").await.unwrap();
    assert_eq!(outcome.examples, vec![default_example()]);
    match outcome.notice {
        Some(Notice::RequestFailed(message)) => assert!(message.contains("500"), "{message}"),
        other => panic!("unexpected notice: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_request_failure() {
    let app = Router::new().route(
        "/api/analyzer",
        post(|| async { "plain text" }),
    );
    let url = serve(app).await;

    let outcome = client(url).analyze("She reads.").await.unwrap();
    assert_eq!(outcome.examples, vec![default_example()]);
    assert!(matches!(outcome.notice, Some(Notice::RequestFailed(_))));
}

#[tokio::test]
async fn unreachable_analyzer_falls_back() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(format!("http://{addr}/api/analyzer"));
    let outcome = client.analyze("She reads.").await.unwrap();
    assert_eq!(outcome.examples, vec![default_example()]);
    assert!(matches!(outcome.notice, Some(Notice::RequestFailed(_))));
    assert!(!client.is_fetching());

    let err = client.fetch("She reads.").await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
}

#[tokio::test]
async fn timeout_is_a_request_failure() {
    let app = Router::new().route(
        "/api/analyzer",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!([]))
        }),
    );
    let url = serve(app).await;
    let timeout = Duration::from_millis(100);
    let config = ClientConfig::new(url).with_timeout(timeout);
    let client = AnalyzerClient::new(config, Normalizer::default()).unwrap();

    let outcome = client.analyze("She reads.").await.unwrap();
    assert!(matches!(outcome.notice, Some(Notice::RequestFailed(_))));
}

// ============================================================================
// Rejections
// ============================================================================

#[tokio::test]
async fn blank_input_is_rejected_without_a_request() {
    let (url, received) = recording_analyzer(json!([])).await;
    let client = client(url);

    for input in ["", "   ", "\n\t"] {
        let err = client.analyze(input).await.unwrap_err();
        assert!(matches!(err, ClientError::EmptySentence));
    }
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn second_submission_while_fetching_is_busy() {
    let app = Router::new().route(
        "/api/analyzer",
        post(|| async {
            tokio::time::sleep(Duration::from_millis(400)).await;
            let reply = json!([{"sentence": "slow", "tense": "Past Simple", "tags": []}]);
            Json(reply)
        }),
    );
    let url = serve(app).await;
    let client = client(url);

    let (first, second) = tokio::join!(client.analyze("one"), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        client.analyze("two").await
    });

    assert_eq!(first.unwrap().examples[0].sentence, "slow");
    assert!(matches!(second, Err(ClientError::Busy)));
    assert!(!client.is_fetching());

    // The gate reopens once the first request resolves.
    assert!(client.analyze("three").await.is_ok());
}
