use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceExt;

use lifescan_server::config::ServerConfig;
use lifescan_server::router;
use lifescan_server::state::AppState;

/// Stand-in for the external prediction service on a random local port.
async fn spawn_upstream(probability: f64) -> String {
    let app = Router::new()
        .route(
            "/api/predict/{variant}",
            post(move |Json(_answers): Json<Value>| async move {
                Json(json!({
                    "success": true,
                    "prediction": 1,
                    "probability": probability,
                    "analysis": "Upstream analysis.",
                    "factors": ["Hypertension"],
                    "debug_info": {"was_adjusted": false, "risk_multiplier": 1.0}
                }))
            }),
        )
        .route(
            "/api/health",
            get(|| async {
                Json(json!({"status": "online", "models": {"stroke": true, "heart": false}}))
            }),
        )
        .route(
            "/api/chat/send",
            post(|Json(req): Json<Value>| async move {
                Json(json!({
                    "success": true,
                    "response": format!("echo: {}", req["message"].as_str().unwrap_or_default()),
                    "conversation_id": req["conversation_id"],
                    "timestamp": "2025-01-01 10:00"
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn app_for(prediction_url: &str) -> Router {
    let config = ServerConfig {
        prediction_url: prediction_url.to_string(),
        prediction_timeout: Duration::from_secs(2),
        ..ServerConfig::default()
    };
    router(AppState::new(&config))
}

fn offline_app() -> Router {
    app_for("http://127.0.0.1:1")
}

async fn call(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(b) => Body::from(b.to_string()),
            None => Body::empty(),
        })
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn stroke_answers() -> Value {
    json!({
        "gender": "Female",
        "age": "70",
        "ever_married": "Yes",
        "work_type": "Private",
        "Residence_type": "Urban",
        "avg_glucose_level": "90",
        "bmi": "22",
        "hypertension": "1",
        "heart_disease": "1",
        "smoking_status": "never smoked"
    })
}

#[tokio::test]
async fn lists_both_questionnaires() {
    let (status, body) = call(offline_app(), "GET", "/questionnaires", None).await;
    assert_eq!(status, StatusCode::OK);
    let variants: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["variant"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(variants, ["stroke", "heart"]);
}

#[tokio::test]
async fn detail_numbers_questions_in_order() {
    let (status, body) = call(offline_app(), "GET", "/questionnaires/heart", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 12);
    assert_eq!(body["questions"][0]["id"], "Age");
    assert_eq!(body["questions"][0]["number"], 1);
    assert_eq!(body["questions"][0]["kind"]["type"], "numeric");
}

#[tokio::test]
async fn unknown_variant_is_rejected() {
    let (status, _) = call(offline_app(), "GET", "/questionnaires/lungs", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn validate_reports_out_of_range_field() {
    let edit = json!({"question_id": "bmi", "value": "55"});
    let uri = "/questionnaires/stroke/validate";
    let (status, body) = call(offline_app(), "POST", uri, Some(edit)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["in_range"], false);
    assert!(body["message"].as_str().unwrap().ends_with("Entered value: 55"));

    let edit = json!({"question_id": "nope", "value": "1"});
    let (status, _) = call(offline_app(), "POST", uri, Some(edit)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn check_lists_missing_answers() {
    let (status, body) = call(
        offline_app(),
        "POST",
        "/questionnaires/stroke/check",
        Some(json!({"age": "70"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submittable"], false);
    assert_eq!(body["unusual_values"].as_array().unwrap().len(), 0);
    assert_eq!(body["missing"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn score_blocks_out_of_range_values() {
    let mut answers = stroke_answers();
    answers["bmi"] = json!("55");
    let uri = "/questionnaires/stroke/score";
    let (status, body) = call(offline_app(), "POST", uri, Some(answers)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["kind"], "unusual_values");
    assert_eq!(body["details"]["values"][0]["question_id"], "bmi");
}

#[tokio::test]
async fn score_returns_fallback_result() {
    let (status, body) = call(
        offline_app(),
        "POST",
        "/questionnaires/stroke/score",
        Some(stroke_answers()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 7);
    assert_eq!(body["tier"], "medium");
    assert_eq!(body["source"], "fallback");
}

#[tokio::test(flavor = "multi_thread")]
async fn assess_falls_back_when_service_is_down() {
    let (status, body) = call(
        offline_app(),
        "POST",
        "/questionnaires/stroke/assess",
        Some(stroke_answers()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["source"], "fallback");
    assert!(body["notice"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn assess_merges_service_prediction() {
    let upstream = spawn_upstream(0.82).await;
    let (status, body) = call(
        app_for(&upstream),
        "POST",
        "/questionnaires/stroke/assess",
        Some(stroke_answers()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["source"], "service");
    assert_eq!(body["result"]["tier"], "high");
    assert_eq!(body["result"]["score"], 7);
    assert_eq!(body["result"]["factors"], json!(["Hypertension"]));
    assert!(body["notice"].is_null());
}

#[tokio::test(flavor = "multi_thread")]
async fn assess_rejects_incomplete_forms() {
    let mut answers = stroke_answers();
    answers["gender"] = json!("");
    let uri = "/questionnaires/stroke/assess";
    let (status, body) = call(offline_app(), "POST", uri, Some(answers)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["kind"], "incomplete");
    assert_eq!(body["details"]["missing"], json!(["gender"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_upstream_availability() {
    let (status, body) = call(offline_app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction_service"], false);

    let upstream = spawn_upstream(0.5).await;
    let (_, body) = call(app_for(&upstream), "GET", "/health", None).await;
    assert_eq!(body["prediction_service"], true);
    assert_eq!(body["models"]["stroke"], true);
    assert_eq!(body["models"]["heart"], false);
}

#[tokio::test(flavor = "multi_thread")]
async fn chat_proxies_to_service() {
    let upstream = spawn_upstream(0.5).await;
    let message = json!({"message": "hello", "conversation_id": "abc"});
    let (status, body) = call(app_for(&upstream), "POST", "/chat", Some(message)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "echo: hello");
    assert_eq!(body["conversation_id"], "abc");
}

#[tokio::test(flavor = "multi_thread")]
async fn chat_errors_map_to_status_codes() {
    let empty = json!({"message": "  ", "conversation_id": "abc"});
    let (status, _) = call(offline_app(), "POST", "/chat", Some(empty)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let message = json!({"message": "hello", "conversation_id": "abc"});
    let (status, _) = call(offline_app(), "POST", "/chat", Some(message)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
