use actix_web::{http::StatusCode, test, web, App};
use sentibot::{routes, Chatbot, Settings};
use serde_json::{json, Value};

fn bot() -> web::Data<Chatbot> {
    web::Data::new(Chatbot::new(&Settings::default()).unwrap())
}

#[actix_web::test]
async fn chat_returns_full_analysis() {
    let app = test::init_service(App::new().app_data(bot()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "message": "  I love this! 😊  ", "session_id": "abc" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["user_message"], "I love this! 😊");
    assert_eq!(body["session_id"], "abc");
    assert_eq!(body["sentiment_analysis"]["label"], "positive");
    assert!(body["sentiment_analysis"]["breakdown"]["rules"].as_f64().unwrap() > 0.0);
    assert_eq!(body["detected_topics"], json!([]));
    assert_eq!(body["conversation_summary"]["message_count"], 1);
    assert_eq!(body["conversation_summary"]["engagement"], "low");
    assert!(!body["suggestions"].as_array().unwrap().is_empty());
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn chat_issues_a_session_id_when_missing() {
    let app = test::init_service(App::new().app_data(bot()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "message": "I hate my job, it's terrible" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let session_id = body["session_id"].as_str().unwrap();
    assert_eq!(session_id.len(), 36);
    assert_eq!(body["sentiment_analysis"]["label"], "negative");
    assert_eq!(body["detected_topics"], json!(["work"]));

    let req = test::TestRequest::get()
        .uri(&format!("/sessions/{session_id}"))
        .to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(summary["topics"], json!(["work"]));
    assert_eq!(summary["trend"], "declining");
}

#[actix_web::test]
async fn chat_accumulates_session_state() {
    let app = test::init_service(App::new().app_data(bot()).configure(routes::configure)).await;

    for message in ["My boss is great", "I went to the doctor", "all good"] {
        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "message": message, "session_id": "same" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/sessions/same").to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(summary["message_count"], 3);
    assert_eq!(summary["topics"], json!(["health", "work"]));
}

#[actix_web::test]
async fn invalid_chat_requests_are_rejected() {
    let app = test::init_service(App::new().app_data(bot()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "message": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Empty message");

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(json!({ "session_id": "x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No message provided");

    let req = test::TestRequest::post()
        .uri("/chat")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn sentiment_endpoint_scores_without_a_session() {
    let data = bot();
    let app = test::init_service(App::new().app_data(data.clone()).configure(routes::configure)).await;

    let req = test::TestRequest::post()
        .uri("/sentiment")
        .set_json(json!({ "text": "This is awful" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["text"], "This is awful");
    assert_eq!(body["sentiment_analysis"]["label"], "negative");
    assert!(data.sessions().is_empty());
}

#[actix_web::test]
async fn unknown_session_is_not_found() {
    let app = test::init_service(App::new().app_data(bot()).configure(routes::configure)).await;

    let req = test::TestRequest::get().uri("/sessions/nobody").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_reports_services() {
    let app = test::init_service(App::new().app_data(bot()).configure(routes::configure)).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["sessions"], 0);
    assert_eq!(body["services"]["valence"], "active");
}
