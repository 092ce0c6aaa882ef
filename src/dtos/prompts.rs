use crate::models::JournalEntry;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate-prompt`.
///
/// Two client generations share this route: the current app sends a
/// `userHistory` of recent entries, older builds send a bare `content`
/// string. Serde picks the variant from the body shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GeneratePromptRequest {
    Current {
        #[serde(rename = "userHistory")]
        user_history: Vec<JournalEntry>,
        #[serde(default)]
        category: Option<String>,
    },
    Legacy {
        content: String,
    },
}

/// Response for the current request shape.
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub category: String,
    pub text: String,
    pub is_ai_generated: bool,
}

/// Response for the legacy request shape.
#[derive(Debug, Serialize)]
pub struct LegacyPromptResponse {
    pub prompt: String,
    pub status: String,
}
