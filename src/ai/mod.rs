pub mod gemini;
pub mod types;

pub use gemini::{GeminiClient, GenerationTransport};
pub use types::AiError;
