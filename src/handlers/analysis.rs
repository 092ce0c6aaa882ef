use crate::dtos::{
    AnalysisResponse, AnalyzeEntriesRequest, AnalyzeRequest, InsightResponse,
};
use crate::error::AppError;
use crate::middleware::BearerToken;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};

/// Entries fed into a single insight call.
const INSIGHT_HISTORY_LEN: usize = 10;

/// System instruction for the cross-entry insight call.
const INSIGHT_INSTRUCTION: &str = "You are a reflective journaling assistant. \
    Given a set of journal entries, identify 3-5 recurring themes, 3-5 dominant \
    emotions, and 2-3 gentle suggestions for the writer. Respond as JSON with \
    the keys themes, emotions and suggestions.";

/// Per-entry analysis (legacy).
///
/// Only the word count is real; mood and sentiment are placeholders until an
/// analysis model is wired in.
pub async fn analyze_entry(
    Json(request): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(AnalysisResponse {
        mood: "neutral".to_string(),
        themes: Vec::new(),
        word_count: request.content.split_whitespace().count(),
        sentiment_score: 0.5,
    }))
}

/// Cross-entry insights.
///
/// Issues one generation call over the most recent entries, but the model's
/// reply is not parsed yet: the structured-output contract with the app is
/// still unsettled, so a fixed demonstration payload is returned. Provider
/// failures surface as internal errors.
pub async fn analyze_entries(
    State(state): State<AppState>,
    _token: BearerToken,
    Json(request): Json<AnalyzeEntriesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let start = request.entries.len().saturating_sub(INSIGHT_HISTORY_LEN);
    let context = request.entries[start..]
        .iter()
        .map(|entry| format!("{}\n{}", entry.title, entry.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    let params = GenerationParams {
        temperature: Some(0.3),
        max_tokens: Some(300),
    };
    let reply = state
        .text_provider
        .generate(INSIGHT_INSTRUCTION, &context, &params)
        .await?;

    tracing::debug!(
        entries = request.entries.len(),
        output_tokens = reply.output_tokens,
        "Generated insights"
    );

    Ok(Json(demo_insights()))
}

fn demo_insights() -> InsightResponse {
    InsightResponse {
        themes: vec![
            "Personal growth".to_string(),
            "Daily routines".to_string(),
            "Relationships".to_string(),
            "Work-life balance".to_string(),
        ],
        emotions: vec![
            "Gratitude".to_string(),
            "Curiosity".to_string(),
            "Occasional stress".to_string(),
        ],
        suggestions: vec![
            "Try writing at the same time each day to build a steady habit".to_string(),
            "Revisit entries from a few weeks ago to notice recurring patterns".to_string(),
        ],
    }
}
