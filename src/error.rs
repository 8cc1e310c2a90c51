use thiserror::Error;

/// Startup configuration problems. All of them stop the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY not set! Check .env or the environment.")]
    MissingApiKey,
    #[error("invalid bind address {0:?}")]
    InvalidBind(String),
}

/// Why an ask produced no result.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("Please type a question first.")]
    EmptyQuestion,
    #[error("card {0:?} is not in the deck")]
    UnknownCard(String),
    #[error("Error generating text answer or takeaway: {0:#}")]
    TextModel(anyhow::Error),
}

impl AskError {
    /// An empty question is a nudge, not a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, AskError::EmptyQuestion)
    }
}
