//! Application startup and lifecycle management.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::groq::{GroqConfig, GroqTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    routing::{get, post},
    Router,
};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state. Handlers read configuration and reach the
/// remote model exclusively through this.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the given configuration, wiring up the
    /// Groq text provider.
    pub async fn build(config: AppConfig) -> Result<Self, AppError> {
        let text_provider: Arc<dyn TextProvider> = Arc::new(GroqTextProvider::new(GroqConfig {
            api_key: config.groq.api_key.clone(),
            model: config.models.text_model.clone(),
        }));

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Groq text provider"
        );

        Self::build_with_provider(config, text_provider).await
    }

    /// Build with an externally supplied text provider. Tests use this to
    /// swap in a mock.
    pub async fn build_with_provider(
        config: AppConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            text_provider,
        };

        let app = Router::new()
            .route("/", get(handlers::service_info))
            .route("/api/generate-prompt", post(handlers::generate_prompt))
            .route("/api/analyze", post(handlers::analyze_entry))
            .route("/api/analyze-entries", post(handlers::analyze_entries))
            .route("/api/suggest-topics", post(handlers::suggest_topics))
            // Development CORS default: every origin, method and header,
            // credentials included. Tighten before exposing this publicly.
            .layer(CorsLayer::very_permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    /// The port the server is listening on (useful with port 0 in tests).
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
