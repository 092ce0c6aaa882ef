//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

/// Mock text provider for testing.
///
/// When disabled, every call fails with `NotConfigured`, which exercises the
/// same code paths a remote-call failure would.
pub struct MockTextProvider {
    enabled: bool,
}

impl MockTextProvider {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _system: &str,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            ));
        }

        // Simulate some processing
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Ok(ProviderResponse {
            text: Some(format!("Mock response for: {}", prompt)),
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
        })
    }
}
