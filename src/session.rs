//! What the user is currently looking at.
//!
//! A [`Session`] only exists once the text stage of an ask has succeeded, so
//! every field but the image is always present. The page is either waiting
//! for a question ([`View::Input`]) or showing one result ([`View::Result`]).

use crate::deck::{self, Card};
use crate::model::InlineImage;

/// One question, the card drawn for it, and what the models made of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub question: String,
    pub card_key: &'static str,
    pub takeaway: String,
    pub answer: String,
    /// `None` when the image stage failed or produced nothing.
    pub generated_image: Option<InlineImage>,
}

impl Session {
    /// The drawn card. Keys come from the deck, so this only misses if a
    /// session was built by hand with a bogus key.
    pub fn card(&self) -> Option<&'static Card> {
        deck::get(self.card_key)
    }
}

/// The two page states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    /// Text box and ask trigger.
    #[default]
    Input,
    /// Card, question, takeaway, answer, image, and the new-session trigger.
    Result(Session),
}

impl View {
    /// Discard whatever is shown and go back to the question box.
    pub fn new_session(&mut self) {
        *self = View::Input;
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            View::Input => None,
            View::Result(session) => Some(session),
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, View::Input)
    }

    /// Short label for prompts and `/whoami`.
    pub fn label(&self) -> &'static str {
        match self {
            View::Input => "input",
            View::Result(_) => "result",
        }
    }
}

/// How loudly a notice is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

/// A message shown inline where the problem happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            Level::Warning => write!(f, "⚠ {}", self.message),
            Level::Error => write!(f, "✗ {}", self.message),
        }
    }
}
