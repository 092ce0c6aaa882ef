use serde::{Deserialize, Serialize};

/// A user-authored journal entry as supplied by the client.
///
/// Entries are per-request input values; this service never stores them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}
