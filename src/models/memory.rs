use chrono::Local;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stock photos used when a memory is created without its own image.
pub const STOCK_PHOTOS: [&str; 5] = [
    "https://images.pexels.com/photos/1024993/pexels-photo-1024993.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1024967/pexels-photo-1024967.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1024960/pexels-photo-1024960.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1024975/pexels-photo-1024975.jpeg?auto=compress&cs=tinysrgb&w=800",
    "https://images.pexels.com/photos/1024981/pexels-photo-1024981.jpeg?auto=compress&cs=tinysrgb&w=800",
];

/// A single journal memory. Serialized in camelCase to match the shape the
/// mobile client stores and renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display-formatted creation date, immutable after creation.
    pub date: String,
    pub location: String,
    pub image_url: String,
}

impl Memory {
    /// Create a memory stamped with a fresh id and today's date.
    pub fn new(title: &str, description: &str, location: &str, image_url: &str) -> Self {
        Memory {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date: today_long(),
            location: location.to_string(),
            image_url: image_url.to_string(),
        }
    }

    pub fn random_stock_photo() -> &'static str {
        STOCK_PHOTOS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(STOCK_PHOTOS[0])
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemoryRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Long locale date, e.g. "August 5, 2026".
pub fn today_long() -> String {
    Local::now().format("%B %-d, %Y").to_string()
}
