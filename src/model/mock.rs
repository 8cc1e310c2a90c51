use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ImageModel, ImageResponse, TextModel};

/// A scripted text model for tests. Returns pre-defined replies in order;
/// an `Err` entry becomes a failed call with that message.
pub struct MockTextModel {
    replies: Vec<Result<String, String>>,
    index: AtomicUsize,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockTextModel {
    pub fn new(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Succeeds once with `text`.
    pub fn replying(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    /// Fails once with `message`.
    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(message.to_string())])
    }

    /// Every `(system, user)` pair received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for MockTextModel {
    fn name(&self) -> &str {
        "mock-text"
    }

    async fn generate_text(&self, system: &str, user: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), user.to_string()));
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(i) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("MockTextModel: no more replies (called {} times)", i + 1)),
        }
    }
}

/// A scripted image model for tests.
pub struct MockImageModel {
    replies: Vec<Result<ImageResponse, String>>,
    index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockImageModel {
    pub fn new(replies: Vec<Result<ImageResponse, String>>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Succeeds once with `response`.
    pub fn returning(response: ImageResponse) -> Self {
        Self::new(vec![Ok(response)])
    }

    /// Fails once with `message`.
    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(message.to_string())])
    }

    /// Every prompt received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageModel for MockImageModel {
    fn name(&self) -> &str {
        "mock-image"
    }

    async fn generate_image(&self, prompt: &str) -> Result<ImageResponse> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(i) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("MockImageModel: no more replies (called {} times)", i + 1)),
        }
    }
}
