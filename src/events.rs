//! Progress events published while an ask runs.
//!
//! The engine emits via [`EventBus::emit`]; the REPL subscribes to drive the
//! spinner. Built on [`tokio::sync::broadcast`], so nobody has to listen.

use tokio::sync::broadcast;

/// Pipeline stages that take long enough to be worth showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Text model call.
    Reading,
    /// Image model call.
    Painting,
}

impl Stage {
    /// Spinner label for this stage.
    pub fn label(self) -> &'static str {
        match self {
            Stage::Reading => "reading the card",
            Stage::Painting => "painting the answer",
        }
    }
}

/// Events that flow out of an ask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A card was drawn for the current question.
    CardDrawn { id: &'static str },
    /// A model call is about to start.
    StageStarted(Stage),
    /// The ask returned, successfully or not.
    Finished,
}

/// A broadcast channel that any component can emit to or subscribe from.
#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all current subscribers.
    /// Returns the number of receivers that will see it.
    pub fn emit(&self, event: Event) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Subscribe to future events (past ones are not replayed).
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emit_reaches_subscriber_in_order() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.emit(Event::CardDrawn { id: "5" });
        bus.emit(Event::StageStarted(Stage::Reading));
        bus.emit(Event::Finished);

        assert_eq!(rx.recv().await.unwrap(), Event::CardDrawn { id: "5" });
        assert_eq!(rx.recv().await.unwrap(), Event::StageStarted(Stage::Reading));
        assert_eq!(rx.recv().await.unwrap(), Event::Finished);
    }

    #[test]
    fn emit_without_subscribers_returns_zero() {
        let bus = EventBus::default();
        assert_eq!(bus.emit(Event::Finished), 0);
    }

    #[test]
    fn emit_with_subscribers_returns_count() {
        let bus = EventBus::default();
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        assert_eq!(bus.emit(Event::StageStarted(Stage::Painting)), 2);
    }

    #[test]
    fn stage_labels_differ() {
        assert_ne!(Stage::Reading.label(), Stage::Painting.label());
    }
}
