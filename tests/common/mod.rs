use journal_ai_service::config::AppConfig;
use journal_ai_service::services::providers::mock::MockTextProvider;
use journal_ai_service::services::providers::TextProvider;
use journal_ai_service::startup::Application;
use serde_json::{json, Value};
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-token-123";

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the app with a working mock provider.
    pub async fn spawn() -> Self {
        Self::spawn_with_provider(Arc::new(MockTextProvider::new(true))).await
    }

    /// Spawn the app with the mock provider disabled, so every generation
    /// call fails like a remote-call failure would.
    pub async fn spawn_with_failing_provider() -> Self {
        Self::spawn_with_provider(Arc::new(MockTextProvider::new(false))).await
    }

    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        std::env::set_var("GROQ_API_KEY", "test-key");

        let mut config = AppConfig::load().expect("Failed to load configuration");
        config.host = "127.0.0.1".to_string();
        config.port = 0; // Random port for testing

        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let url = format!("http://127.0.0.1:{}/", port);
        for _ in 0..50 {
            if client.get(&url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }
}

/// A journal entry body as the app sends it.
#[allow(dead_code)]
pub fn sample_entry(id: &str, title: &str, content: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": content,
        "created_at": "2025-01-15T08:30:00Z"
    })
}
