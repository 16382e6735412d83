//! Love notes controller - list and create entries in the notes collection.

use actix_web::{web, HttpResponse, Responder};

use super::store_error_response;
use crate::models::{CreateNoteRequest, LoveNote};
use crate::AppState;

async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.notes.load() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => store_error_response("Failed to load notes", &e),
    }
}

async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let title = body.title.trim();
    let message = body.message.trim();
    if title.is_empty() || message.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Title and message must not be empty"
        }));
    }

    let current = match data.notes.load() {
        Ok(notes) => notes,
        Err(e) => return store_error_response("Failed to load notes", &e),
    };

    let note = LoveNote::new(title, message, LoveNote::random_color());
    let updated = data.notes.prepend(note.clone(), &current);
    if let Err(e) = data.notes.persist(&updated) {
        return store_error_response("Failed to save notes", &e);
    }

    HttpResponse::Created().json(note)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note)),
    );
}
