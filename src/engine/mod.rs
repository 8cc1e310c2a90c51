pub mod oracle;

use async_trait::async_trait;

use crate::error::AskError;
use crate::session::{Notice, Session, View};

/// What a successful ask hands back: the new session plus anything that went
/// wrong along the way without stopping it.
#[derive(Debug, Clone)]
pub struct Asked {
    pub session: Session,
    pub notices: Vec<Notice>,
}

/// The outermost boundary. main.rs and the HTTP server only know this trait.
#[async_trait]
pub trait Engine: Send + Sync {
    async fn ask(&self, question: &str) -> Result<Asked, AskError>;

    /// Text model identifier, for display.
    fn text_model(&self) -> &str;

    /// Image model identifier, for display.
    fn image_model(&self) -> &str;
}

/// Ask from the page. Only the question box accepts a question; on success
/// the page switches to the result, on failure it is left untouched.
pub async fn ask_view(engine: &dyn Engine, view: &mut View, question: &str) -> Vec<Notice> {
    if !view.is_input() {
        return vec![Notice::warning(
            "Start a new session with /new before asking again.",
        )];
    }

    match engine.ask(question).await {
        Ok(Asked { session, notices }) => {
            *view = View::Result(session);
            notices
        }
        Err(e) if e.is_warning() => vec![Notice::warning(e.to_string())],
        Err(e) => vec![Notice::error(e.to_string())],
    }
}
