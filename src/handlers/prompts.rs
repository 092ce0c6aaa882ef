use crate::dtos::{
    GeneratePromptRequest, LegacyPromptResponse, PromptResponse, SuggestTopicsRequest,
    TopicsResponse,
};
use crate::error::AppError;
use crate::handlers::excerpt;
use crate::middleware::BearerToken;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

/// Served when the remote call fails; the app renders it as a plain
/// (non-AI) writing prompt.
const FALLBACK_PROMPT: &str =
    "What's one thing that happened today that you'd like to remember?";

const DEFAULT_CATEGORY: &str = "general";

/// Entries fed into a prompt-generation call, each cut to this many chars.
const PROMPT_HISTORY_LEN: usize = 5;
const PROMPT_ENTRY_CHARS: usize = 200;

/// Entries fed into a topic-suggestion call, each cut to this many chars.
const TOPIC_HISTORY_LEN: usize = 15;
const TOPIC_ENTRY_CHARS: usize = 150;

/// System instruction for the topic-suggestion call.
const TOPIC_INSTRUCTION: &str = "You are a journaling coach. Based on the \
    writer's recent entries, suggest 4-6 fresh journaling topics they have not \
    covered yet. Respond as a JSON array of topic strings.";

/// Prompt generation.
///
/// Dispatches on the request shape: the current app sends a `userHistory`
/// and needs a token, legacy builds send a bare `content` string and get a
/// templated truncation back. The current path is the one place in this
/// service that degrades instead of failing: any provider error is recovered
/// into a fixed prompt marked `is_ai_generated: false`.
pub async fn generate_prompt(
    State(state): State<AppState>,
    token: Option<BearerToken>,
    Json(request): Json<GeneratePromptRequest>,
) -> Result<Response, AppError> {
    match request {
        GeneratePromptRequest::Legacy { content } => {
            let head: String = content.chars().take(100).collect();
            Ok(Json(LegacyPromptResponse {
                prompt: format!("Reflect on: {}...", head),
                status: "success".to_string(),
            })
            .into_response())
        }
        GeneratePromptRequest::Current {
            user_history,
            category,
        } => {
            token.ok_or_else(|| {
                AppError::Unauthorized(anyhow::anyhow!("Missing or invalid bearer token"))
            })?;

            let category = category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
            let start = user_history.len().saturating_sub(PROMPT_HISTORY_LEN);
            let context = user_history[start..]
                .iter()
                .map(|entry| excerpt(&entry.content, PROMPT_ENTRY_CHARS))
                .collect::<Vec<_>>()
                .join("\n\n");

            let instruction = format!(
                "You are a journaling coach. Based on the writer's recent entries, \
                 suggest one short, specific writing prompt in the category \"{}\". \
                 Respond with the prompt text only.",
                category
            );

            let params = GenerationParams {
                temperature: Some(0.7),
                max_tokens: Some(120),
            };
            let response = match state
                .text_provider
                .generate(&instruction, &context, &params)
                .await
            {
                Ok(reply) => match reply.text {
                    Some(text) => PromptResponse {
                        category,
                        text: text.trim().to_string(),
                        is_ai_generated: true,
                    },
                    None => {
                        tracing::warn!("Model returned no text, serving fallback prompt");
                        fallback_prompt(category)
                    }
                },
                Err(err) => {
                    tracing::warn!(error = %err, "Prompt generation failed, serving fallback prompt");
                    fallback_prompt(category)
                }
            };

            Ok(Json(response).into_response())
        }
    }
}

fn fallback_prompt(category: String) -> PromptResponse {
    PromptResponse {
        category,
        text: FALLBACK_PROMPT.to_string(),
        is_ai_generated: false,
    }
}

/// Topic suggestions.
///
/// Like `analyze_entries`, the generation call is made but its reply is not
/// parsed yet; a fixed demonstration list is returned. Provider failures
/// surface as internal errors.
pub async fn suggest_topics(
    State(state): State<AppState>,
    _token: BearerToken,
    Json(request): Json<SuggestTopicsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let start = request.entries.len().saturating_sub(TOPIC_HISTORY_LEN);
    let context = request.entries[start..]
        .iter()
        .map(|entry| excerpt(&entry.content, TOPIC_ENTRY_CHARS))
        .collect::<Vec<_>>()
        .join("\n\n");

    let params = GenerationParams {
        temperature: Some(0.7),
        max_tokens: Some(200),
    };
    let reply = state
        .text_provider
        .generate(TOPIC_INSTRUCTION, &context, &params)
        .await?;

    tracing::debug!(
        entries = request.entries.len(),
        output_tokens = reply.output_tokens,
        "Generated topic suggestions"
    );

    Ok(Json(demo_topics()))
}

fn demo_topics() -> TopicsResponse {
    TopicsResponse {
        topics: vec![
            "A moment that surprised you this week".to_string(),
            "Something you're looking forward to".to_string(),
            "A conversation that stayed with you".to_string(),
            "What rest looks like for you lately".to_string(),
            "A small win you haven't celebrated yet".to_string(),
        ],
    }
}
