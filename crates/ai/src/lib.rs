//! Text generation for summaries and study plans.
//!
//! Handlers depend on the [`TextGenerator`] trait only; the Gemini REST
//! client in [`client`] is the production implementation.

pub mod client;
pub mod prompts;

pub use client::{AiError, GeminiClient, GeminiConfig};

/// Turns one prompt into one block of generated text.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}
