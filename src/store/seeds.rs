//! First-run default records for each collection key.
//!
//! Seed content is fixed; the date field is stamped with the current date
//! at first-seed time.

use crate::models::memory::{today_long, STOCK_PHOTOS};
use crate::models::note::today_short;
use crate::models::{LoveNote, Memory};

pub const LOVE_NOTES_KEY: &str = "love_notes";
pub const MEMORIES_KEY: &str = "memories";

pub fn default_love_notes() -> Vec<LoveNote> {
    let today = today_short();
    vec![
        LoveNote {
            id: "1".to_string(),
            title: "Good Morning Beautiful".to_string(),
            message: "Every morning I wake up grateful for another day to love you. \
                      Your smile is the sunshine that brightens my world. 💕"
                .to_string(),
            date: today.clone(),
            color: "#ffecd2".to_string(),
        },
        LoveNote {
            id: "2".to_string(),
            title: "Forever & Always".to_string(),
            message: "In a world full of temporary things, you are my forever. \
                      Thank you for being my constant source of joy and love."
                .to_string(),
            date: today,
            color: "#a8edea".to_string(),
        },
    ]
}

pub fn default_memories() -> Vec<Memory> {
    let today = today_long();
    vec![
        Memory {
            id: "1".to_string(),
            title: "Our First Date".to_string(),
            description: "The day we first met and I knew you were special. \
                          Your laugh filled the entire café and my heart."
                .to_string(),
            date: today.clone(),
            location: "Downtown Café".to_string(),
            image_url: STOCK_PHOTOS[0].to_string(),
        },
        Memory {
            id: "2".to_string(),
            title: "Beach Sunset".to_string(),
            description: "Walking hand in hand as the sun painted the sky in shades \
                          of pink and gold. Perfect moment, perfect person."
                .to_string(),
            date: today.clone(),
            location: "Sunset Beach".to_string(),
            image_url: STOCK_PHOTOS[1].to_string(),
        },
        Memory {
            id: "3".to_string(),
            title: "Cozy Movie Night".to_string(),
            description: "Cuddled up watching our favorite movie. Sometimes the \
                          simplest moments are the most precious."
                .to_string(),
            date: today,
            location: "Home Sweet Home".to_string(),
            image_url: STOCK_PHOTOS[2].to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_providers_are_deterministic_in_content() {
        let a = default_love_notes();
        let b = default_love_notes();
        assert_eq!(a, b);

        let a = default_memories();
        let b = default_memories();
        assert_eq!(a, b);
    }

    #[test]
    fn test_note_seeds_use_palette_colors() {
        for note in default_love_notes() {
            assert!(crate::models::note::NOTE_COLORS.contains(&note.color.as_str()));
        }
    }
}
