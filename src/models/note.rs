use chrono::Local;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// First stops of the card gradient palette; new notes pick one at random.
pub const NOTE_COLORS: [&str; 5] = ["#ffecd2", "#a8edea", "#fbc2eb", "#fdcbf1", "#ffecd2"];

/// A single love note entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoveNote {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Display-formatted creation date, immutable after creation.
    pub date: String,
    pub color: String,
}

impl LoveNote {
    /// Create a note stamped with a fresh id and today's date.
    pub fn new(title: &str, message: &str, color: &str) -> Self {
        LoveNote {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            message: message.to_string(),
            date: today_short(),
            color: color.to_string(),
        }
    }

    pub fn random_color() -> &'static str {
        NOTE_COLORS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(NOTE_COLORS[0])
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub message: String,
}

/// Short locale date, e.g. "8/5/2026".
pub fn today_short() -> String {
    Local::now().format("%-m/%-d/%Y").to_string()
}
