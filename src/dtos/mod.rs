pub mod analysis;
pub mod prompts;

pub use analysis::{
    AnalysisResponse, AnalyzeEntriesRequest, AnalyzeRequest, InsightResponse,
    SuggestTopicsRequest, TopicsResponse,
};
pub use prompts::{GeneratePromptRequest, LegacyPromptResponse, PromptResponse};
