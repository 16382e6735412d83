//! Memories controller - list and create entries in the memories collection.

use actix_web::{web, HttpResponse, Responder};

use super::store_error_response;
use crate::models::{CreateMemoryRequest, Memory};
use crate::AppState;

async fn list_memories(data: web::Data<AppState>) -> impl Responder {
    match data.memories.load() {
        Ok(memories) => HttpResponse::Ok().json(memories),
        Err(e) => store_error_response("Failed to load memories", &e),
    }
}

async fn create_memory(
    data: web::Data<AppState>,
    body: web::Json<CreateMemoryRequest>,
) -> impl Responder {
    let title = body.title.trim();
    let description = body.description.trim();
    if title.is_empty() || description.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Title and description must not be empty"
        }));
    }

    let location = body
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or("Somewhere Special");
    let image_url = body
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Memory::random_stock_photo().to_string());

    let current = match data.memories.load() {
        Ok(memories) => memories,
        Err(e) => return store_error_response("Failed to load memories", &e),
    };

    let memory = Memory::new(title, description, location, &image_url);
    let updated = data.memories.prepend(memory.clone(), &current);
    if let Err(e) = data.memories.persist(&updated) {
        return store_error_response("Failed to save memories", &e);
    }

    HttpResponse::Created().json(memory)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/memories")
            .route("", web::get().to(list_memories))
            .route("", web::post().to(create_memory)),
    );
}
