use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod ai;
mod config;
mod controllers;
mod db;
mod http;
mod models;
mod store;

use ai::GeminiClient;
use config::Config;
use db::Database;
use models::{LoveNote, Memory};
use store::seeds::{self, LOVE_NOTES_KEY, MEMORIES_KEY};
use store::CollectionStore;

pub struct AppState {
    pub notes: CollectionStore<LoveNote>,
    pub memories: CollectionStore<Memory>,
    pub gemini: GeminiClient,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url).expect("Failed to initialize database");
    let db = Arc::new(db);

    if config.gemini_api_key.is_none() {
        log::warn!("GEMINI_API_KEY is not set; chat requests will be rejected");
    }

    log::info!("Starting love notes server on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(AppState {
                notes: CollectionStore::new(
                    Arc::clone(&db),
                    LOVE_NOTES_KEY,
                    seeds::default_love_notes,
                ),
                memories: CollectionStore::new(
                    Arc::clone(&db),
                    MEMORIES_KEY,
                    seeds::default_memories,
                ),
                gemini: GeminiClient::new(
                    config.gemini_api_key.clone(),
                    &config.gemini_api_url,
                ),
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::notes::config)
            .configure(controllers::memories::config)
            .configure(controllers::chat::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
