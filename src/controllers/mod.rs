pub mod chat;
pub mod health;
pub mod memories;
pub mod notes;

use actix_web::HttpResponse;

use crate::store::StoreError;

/// Convert a storage failure into a JSON error response, logging at the
/// boundary where the error leaves the store.
pub(crate) fn store_error_response(context: &str, err: &StoreError) -> HttpResponse {
    log::error!("{}: {}", context, err);
    match err {
        StoreError::Unavailable(_) => {
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Storage is unavailable"
            }))
        }
        StoreError::Corrupt { key, .. } => {
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Stored data for '{}' could not be read", key)
            }))
        }
    }
}
