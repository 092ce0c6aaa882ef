//! Text-generation provider abstractions and implementations.
//!
//! A trait-based seam over the remote model API so handlers stay agnostic
//! of the backend (Groq in production, mock in tests).

pub mod groq;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a generation call.
pub struct ProviderResponse {
    /// Generated text, if the model produced any.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Generation parameters.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<i32>,
}

/// Trait for text generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text response for a system instruction and user prompt.
    async fn generate(
        &self,
        system: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;
}
