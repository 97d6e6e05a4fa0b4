use crate::chatbot::Chatbot;
use crate::error::ChatError;
use crate::insights::SessionSummary;
use crate::sentiment::{ConfidenceLevel, SentimentResult};
use actix_web::{error, get, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Deserialize)]
pub struct ChatRequest {
    message: Option<String>,
    session_id: Option<String>,
}

#[derive(Serialize)]
struct ChatResponse {
    user_message: String,
    bot_response: String,
    sentiment_analysis: SentimentResult,
    confidence: ConfidenceLevel,
    detected_topics: Vec<String>,
    conversation_summary: SessionSummary,
    suggestions: Vec<String>,
    session_id: String,
    timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct SentimentRequest {
    text: Option<String>,
}

#[derive(Serialize)]
struct SentimentResponse {
    text: String,
    sentiment_analysis: SentimentResult,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    sessions: usize,
    services: BTreeMap<&'static str, &'static str>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[post("/chat")]
async fn chat_endpoint(
    req: web::Json<ChatRequest>,
    bot: web::Data<Chatbot>,
) -> Result<HttpResponse, ChatError> {
    let req = req.into_inner();
    let message = req.message.ok_or(ChatError::MissingField("message"))?;
    let session_id = req
        .session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let outcome = bot.process(&session_id, &message)?;
    Ok(HttpResponse::Ok().json(ChatResponse {
        user_message: message.trim().to_string(),
        bot_response: outcome.response,
        confidence: outcome.sentiment.confidence_level,
        sentiment_analysis: outcome.sentiment,
        detected_topics: outcome.detected_topics,
        conversation_summary: outcome.summary,
        suggestions: outcome.suggestions,
        session_id,
        timestamp: Utc::now(),
    }))
}

#[post("/sentiment")]
async fn sentiment_endpoint(
    req: web::Json<SentimentRequest>,
    bot: web::Data<Chatbot>,
) -> Result<HttpResponse, ChatError> {
    let text = req.into_inner().text.ok_or(ChatError::MissingField("text"))?;
    let sentiment_analysis = bot.analyze(&text)?;
    Ok(HttpResponse::Ok().json(SentimentResponse {
        text: text.trim().to_string(),
        sentiment_analysis,
    }))
}

#[get("/sessions/{session_id}")]
async fn session_endpoint(path: web::Path<String>, bot: web::Data<Chatbot>) -> impl Responder {
    match bot.summary(&path.into_inner()) {
        Some(summary) => HttpResponse::Ok().json(summary),
        None => HttpResponse::NotFound().json(ErrorBody {
            error: "Session not found".to_string(),
        }),
    }
}

#[get("/health")]
async fn health_endpoint(bot: web::Data<Chatbot>) -> impl Responder {
    let services = BTreeMap::from([
        ("valence", "active"),
        ("pattern", "active"),
        ("keyword_analysis", "active"),
        ("rule_based", "active"),
    ]);
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        sessions: bot.sessions().len(),
        services,
    })
}

/// Registers every endpoint plus a JSON extractor config that reports
/// malformed bodies as `{"error": ...}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody {
            error: err.to_string(),
        });
        error::InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .service(chat_endpoint)
        .service(sentiment_endpoint)
        .service(session_endpoint)
        .service(health_endpoint);
}
