//! Chat controller - forwards one-shot prompts to the generation client.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};

use crate::ai::AiError;
use crate::models::{GenerateRequest, GenerateResponse};
use crate::AppState;

async fn generate(data: web::Data<AppState>, body: web::Json<GenerateRequest>) -> impl Responder {
    match data.gemini.generate(&body.prompt).await {
        Ok(text) => HttpResponse::Ok().json(GenerateResponse { response: text }),
        Err(e) => ai_error_response(&e),
    }
}

async fn chat_status(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "configured": data.gemini.is_configured()
    }))
}

fn ai_error_response(err: &AiError) -> HttpResponse {
    match err {
        AiError::InvalidInput => log::warn!("Rejected chat request: {}", err),
        _ => log::error!("Generation request failed: {}", err),
    }

    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(serde_json::json!({
        "error": err.to_string()
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/chat")
            .route("", web::post().to(generate))
            .route("/status", web::get().to(chat_status)),
    );
}
