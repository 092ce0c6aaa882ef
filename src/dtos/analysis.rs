use crate::models::JournalEntry;
use serde::{Deserialize, Serialize};

/// Body of the legacy `POST /api/analyze` endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
}

/// Per-entry analysis. Only `word_count` is computed; the remaining fields
/// are placeholders until a real analysis model is wired in.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub mood: String,
    pub themes: Vec<String>,
    pub word_count: usize,
    pub sentiment_score: f64,
}

/// Body of `POST /api/analyze-entries`.
#[derive(Debug, Deserialize)]
pub struct AnalyzeEntriesRequest {
    pub entries: Vec<JournalEntry>,
}

/// Cross-entry insight: 3-5 themes, 3-5 emotions, 2-3 suggestions.
#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub themes: Vec<String>,
    pub emotions: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Body of `POST /api/suggest-topics`.
#[derive(Debug, Deserialize)]
pub struct SuggestTopicsRequest {
    pub entries: Vec<JournalEntry>,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}
