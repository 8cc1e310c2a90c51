use async_trait::async_trait;
use std::sync::Arc;

use super::{Asked, Engine};
use crate::deck;
use crate::error::AskError;
use crate::events::{Event, EventBus, Stage};
use crate::model::{ImageModel, TextModel};
use crate::prompts::card::build_card_prompt;
use crate::prompts::image::build_image_prompt;
use crate::reading::Reading;
use crate::selector::CardSelector;
use crate::session::{Notice, Session};

const FORMAT_WARNING: &str = "Response format issue: No 'Answer to question:' delimiter found.";
const NO_IMAGE_WARNING: &str = "No image generated by the model.";

/// Draw, read, paint. Wires a card selector to the two models.
///
/// The two model calls run strictly one after the other. A text failure ends
/// the ask with nothing kept; an image failure keeps the text and reports.
pub struct OracleEngine {
    selector: Box<dyn CardSelector>,
    text: Box<dyn TextModel>,
    image: Box<dyn ImageModel>,
    events: Option<Arc<EventBus>>,
}

impl OracleEngine {
    pub fn new(
        selector: Box<dyn CardSelector>,
        text: Box<dyn TextModel>,
        image: Box<dyn ImageModel>,
    ) -> Self {
        Self {
            selector,
            text,
            image,
            events: None,
        }
    }

    /// Publish progress on `bus`.
    pub fn with_events(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    fn emit(&self, event: Event) {
        if let Some(bus) = &self.events {
            bus.emit(event);
        }
    }

    async fn run(&self, question: &str) -> Result<Asked, AskError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AskError::EmptyQuestion);
        }

        let card_key = self.selector.draw();
        let card = deck::get(card_key).ok_or_else(|| AskError::UnknownCard(card_key.to_string()))?;
        tracing::debug!(card = card.id, title = card.title, "card drawn");
        self.emit(Event::CardDrawn { id: card.id });

        let prompt = build_card_prompt(card, question);
        self.emit(Event::StageStarted(Stage::Reading));
        let raw = self
            .text
            .generate_text(&prompt, question)
            .await
            .map_err(|e| {
                tracing::debug!(model = self.text.name(), error = %e, "text generation failed");
                AskError::TextModel(e)
            })?;

        let mut notices = Vec::new();
        let reading = Reading::parse(&raw);
        if !reading.well_formed {
            tracing::debug!(raw = %raw, "answer marker missing from model output");
            notices.push(Notice::warning(FORMAT_WARNING));
        }

        self.emit(Event::StageStarted(Stage::Painting));
        let image_prompt = build_image_prompt(&reading.answer);
        let generated_image = match self.image.generate_image(&image_prompt).await {
            Ok(response) => {
                let image = response.into_first_image();
                if image.is_none() {
                    notices.push(Notice::warning(NO_IMAGE_WARNING));
                }
                image
            }
            Err(e) => {
                tracing::debug!(model = self.image.name(), error = %e, "image generation failed");
                notices.push(Notice::error(format!("Error generating image: {e:#}")));
                None
            }
        };

        Ok(Asked {
            session: Session {
                question: question.to_string(),
                card_key: card.id,
                takeaway: reading.takeaway,
                answer: reading.answer,
                generated_image,
            },
            notices,
        })
    }
}

#[async_trait]
impl Engine for OracleEngine {
    async fn ask(&self, question: &str) -> Result<Asked, AskError> {
        let result = self.run(question).await;
        self.emit(Event::Finished);
        result
    }

    fn text_model(&self) -> &str {
        self.text.name()
    }

    fn image_model(&self) -> &str {
        self.image.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::mock::{MockImageModel, MockTextModel};
    use crate::model::{ImageResponse, InlineImage, Part};
    use crate::selector::FixedSelector;
    use crate::session::Level;

    fn engine(text: MockTextModel, image: MockImageModel) -> OracleEngine {
        OracleEngine::new(Box::new(FixedSelector("1")), Box::new(text), Box::new(image))
    }

    fn one_image() -> ImageResponse {
        ImageResponse {
            parts: vec![Part::InlineData(InlineImage {
                mime_type: Some("image/png".to_string()),
                data: vec![9, 9, 9],
            })],
        }
    }

    #[tokio::test]
    async fn question_is_trimmed() {
        let engine = engine(
            MockTextModel::replying("T\nAnswer to question: A"),
            MockImageModel::returning(one_image()),
        );
        let asked = engine.ask("  why?  \n").await.unwrap();
        assert_eq!(asked.session.question, "why?");
    }

    #[tokio::test]
    async fn unknown_card_is_rejected() {
        let engine = OracleEngine::new(
            Box::new(FixedSelector("99")),
            Box::new(MockTextModel::replying("unused")),
            Box::new(MockImageModel::returning(one_image())),
        );
        let err = engine.ask("why?").await.unwrap_err();
        assert!(matches!(err, AskError::UnknownCard(id) if id == "99"));
    }

    #[tokio::test]
    async fn image_without_parts_warns() {
        let engine = engine(
            MockTextModel::replying("T\nAnswer to question: A"),
            MockImageModel::returning(ImageResponse {
                parts: vec![Part::Text("no picture today".to_string())],
            }),
        );
        let asked = engine.ask("why?").await.unwrap();
        assert!(asked.session.generated_image.is_none());
        assert_eq!(asked.notices, vec![Notice::warning(NO_IMAGE_WARNING)]);
    }

    #[tokio::test]
    async fn empty_first_image_is_kept_without_warning() {
        let engine = engine(
            MockTextModel::replying("T\nAnswer to question: A"),
            MockImageModel::returning(ImageResponse {
                parts: vec![
                    Part::InlineData(InlineImage {
                        mime_type: None,
                        data: Vec::new(),
                    }),
                    Part::InlineData(InlineImage {
                        mime_type: Some("image/png".to_string()),
                        data: vec![1],
                    }),
                ],
            }),
        );
        let asked = engine.ask("why?").await.unwrap();
        assert!(asked.notices.is_empty());
        assert!(asked.session.generated_image.unwrap().data.is_empty());
    }

    #[tokio::test]
    async fn image_failure_is_an_error_notice() {
        let engine = engine(
            MockTextModel::replying("T\nAnswer to question: A"),
            MockImageModel::failing("503 overloaded"),
        );
        let asked = engine.ask("why?").await.unwrap();
        assert_eq!(asked.notices.len(), 1);
        assert_eq!(asked.notices[0].level, Level::Error);
        assert_eq!(asked.notices[0].message, "Error generating image: 503 overloaded");
    }

    #[tokio::test]
    async fn events_follow_the_pipeline() {
        let bus = Arc::new(EventBus::default());
        let mut rx = bus.subscribe();
        let engine = engine(
            MockTextModel::replying("T\nAnswer to question: A"),
            MockImageModel::returning(one_image()),
        )
        .with_events(Arc::clone(&bus));

        engine.ask("why?").await.unwrap();

        assert_eq!(rx.recv().await.unwrap(), Event::CardDrawn { id: "1" });
        assert_eq!(rx.recv().await.unwrap(), Event::StageStarted(Stage::Reading));
        assert_eq!(rx.recv().await.unwrap(), Event::StageStarted(Stage::Painting));
        assert_eq!(rx.recv().await.unwrap(), Event::Finished);
    }

    #[tokio::test]
    async fn empty_question_still_finishes() {
        let bus = Arc::new(EventBus::default());
        let mut rx = bus.subscribe();
        let engine = engine(MockTextModel::new(vec![]), MockImageModel::new(vec![]))
            .with_events(Arc::clone(&bus));

        assert!(engine.ask("").await.is_err());
        assert_eq!(rx.recv().await.unwrap(), Event::Finished);
    }

    #[test]
    fn model_names() {
        let engine = engine(MockTextModel::new(vec![]), MockImageModel::new(vec![]));
        assert_eq!(engine.text_model(), "mock-text");
        assert_eq!(engine.image_model(), "mock-image");
    }
}
