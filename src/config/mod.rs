use crate::error::AppError;
use serde::Deserialize;
use std::env;

/// Default model for prompt and analysis calls.
const DEFAULT_TEXT_MODEL: &str = "llama-3.1-8b-instant";

/// Process configuration, read once at startup and passed into handlers via
/// application state. Request logic never reads the environment directly.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub groq: GroqConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model for prompt generation and entry analysis.
    pub text_model: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(AppConfig {
            host: get_env("APP_HOST", Some("0.0.0.0"), is_prod)?,
            port: get_env("APP_PORT", Some("8000"), is_prod)?
                .parse()
                .map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("Invalid APP_PORT: {}", e))
                })?,
            groq: GroqConfig {
                api_key: get_env("GROQ_API_KEY", None, is_prod)?,
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some(DEFAULT_TEXT_MODEL), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
