pub mod gemini;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

/// Binary payload returned inline by the image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

/// One part of an image-model response, in the order the model sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    InlineData(InlineImage),
    /// Anything else the model sends (function calls, thoughts, ...).
    Other,
}

/// Ordered parts of the first candidate of an image-model response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResponse {
    pub parts: Vec<Part>,
}

impl ImageResponse {
    /// The first part carrying inline data, even an empty one. Later images
    /// and text parts are dropped.
    pub fn into_first_image(self) -> Option<InlineImage> {
        self.parts.into_iter().find_map(|part| match part {
            Part::InlineData(image) => Some(image),
            _ => None,
        })
    }
}

/// Reads a card and answers the question.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Model identifier, for display and logs.
    fn name(&self) -> &str;

    /// One generation call: `system` is the instruction, `user` the message.
    async fn generate_text(&self, system: &str, user: &str) -> Result<String>;
}

/// Turns the answer into a picture.
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Model identifier, for display and logs.
    fn name(&self) -> &str;

    async fn generate_image(&self, prompt: &str) -> Result<ImageResponse>;
}
