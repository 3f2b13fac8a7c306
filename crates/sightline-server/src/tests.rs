//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sightline_core::ai::MockBackend;
use sightline_core::UNCONFIGURED_ANSWER;
use tower::ServiceExt;

fn mock_app(backend: MockBackend) -> Router {
    create_router(Some(ProviderClient::Mock(backend)))
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_request(questions: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "category1Data": ["Q1", "Q2"],
            "category2Data": ["North", "South"],
            "measuresData": [100.5, 150.2],
            "rawData": [
                {"category1": "Q1", "category2": "North", "measure": 100.5},
                {"category1": "Q2", "category2": "South", "measure": 150.2}
            ]
        },
        "questions": questions,
        "numberOfQuestions": questions.len()
    })
}

async fn post_json(app: Router, uri: &str, body: String) -> axum::response::Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ========== Metadata & Health ==========

#[tokio::test]
async fn test_root_metadata() {
    let app = mock_app(MockBackend::new());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["message"], "Sightline Insight API");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["endpoints"]["insights"], "/api/insights");
}

#[tokio::test]
async fn test_health() {
    let app = mock_app(MockBackend::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_health_independent_of_provider_config() {
    let app = create_router(None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

// ========== Insight Generation ==========

#[tokio::test]
async fn test_generate_insights_single_question() {
    let app = mock_app(MockBackend::new().with_answer("Q2 is higher."));
    let body = sample_request(&["Which is higher?"]);

    let response = post_json(app, "/api/insights", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let insights = json["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0]["id"], 1);
    assert_eq!(insights[0]["question"], "Which is higher?");
    assert_eq!(insights[0]["answer"], "Q2 is higher.");
}

#[tokio::test]
async fn test_generate_insights_alias_route() {
    let app = mock_app(MockBackend::new().with_answer("Q2 is higher."));
    let body = sample_request(&["Which is higher?"]);

    let response = post_json(app, "/generate-insights", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["insights"][0]["answer"], "Q2 is higher.");
}

#[tokio::test]
async fn test_generate_insights_preserves_question_order() {
    let app = mock_app(MockBackend::new());
    let questions = ["What trends?", "Which quarter performed best?", "Any outliers?"];
    let body = sample_request(&questions);

    let response = post_json(app, "/api/insights", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let insights = json["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 3);
    for (i, insight) in insights.iter().enumerate() {
        assert_eq!(insight["id"], i + 1);
        assert_eq!(insight["question"], questions[i]);
        assert!(!insight["answer"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_generate_insights_unconfigured_provider() {
    let app = create_router(None);
    let body = sample_request(&["What trends?", "Any outliers?"]);

    let response = post_json(app, "/api/insights", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let insights = json["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 2);
    for insight in insights {
        assert_eq!(insight["answer"], UNCONFIGURED_ANSWER);
    }
}

#[tokio::test]
async fn test_generate_insights_provider_failure_is_isolated() {
    let app = mock_app(MockBackend::new().with_answer("fine").fail_on_call(2));
    let body = sample_request(&["What trends?", "Which quarter performed best?"]);

    let response = post_json(app, "/api/insights", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let insights = json["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0]["answer"], "fine");

    let failed = insights[1]["answer"].as_str().unwrap();
    assert!(failed.contains("Unable to generate insight due to API error"));
    assert!(failed.contains("mock provider failure"));
    assert_eq!(insights[1]["question"], "Which quarter performed best?");
}

#[tokio::test]
async fn test_generate_insights_no_questions() {
    let app = mock_app(MockBackend::new());
    let body = sample_request(&[]);

    let response = post_json(app, "/api/insights", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(json["insights"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_insights_missing_measure_names_accepted() {
    // measureNames is optional on the wire; the sample omits it
    let app = mock_app(MockBackend::new());
    let body = sample_request(&["Which is higher?"]);
    assert!(body["data"].get("measureNames").is_none());

    let response = post_json(app, "/api/insights", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ========== Validation ==========

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let app = mock_app(MockBackend::new());
    let body = serde_json::json!({
        "questions": ["Which is higher?"],
        "numberOfQuestions": 1
    });

    let response = post_json(app, "/api/insights", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = get_body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("data"));
}

#[tokio::test]
async fn test_wrong_type_is_unprocessable() {
    let app = mock_app(MockBackend::new());
    let mut body = sample_request(&[]);
    body["questions"] = serde_json::json!("not-an-array");

    let response = post_json(app, "/api/insights", body.to_string()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let app = mock_app(MockBackend::new());

    let response = post_json(app, "/api/insights", "{not json".to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
