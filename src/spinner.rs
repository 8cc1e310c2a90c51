//! A minimal terminal spinner for visual feedback while the models work.

use std::io::Write;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::events::Event;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

/// A terminal spinner that runs in a background task and writes to stderr,
/// so it never mixes with the rendered page on stdout.
pub struct Spinner {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl Spinner {
    /// Spin with a fixed label.
    #[cfg(test)]
    pub fn start(message: &str) -> Self {
        Self::spawn(message, None)
    }

    /// Spin, relabelling as pipeline events arrive.
    pub fn follow(message: &str, events: broadcast::Receiver<Event>) -> Self {
        Self::spawn(message, Some(events))
    }

    fn spawn(message: &str, mut events: Option<broadcast::Receiver<Event>>) -> Self {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let mut message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut i = 0;
            loop {
                let frame = FRAMES[i % FRAMES.len()];
                // \r moves to start of line, \x1b[2K clears the line
                eprint!("\x1b[2K\r{frame} {message}");
                let _ = std::io::stderr().flush();

                let event = tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {
                        i += 1;
                        continue;
                    }
                    _ = cancel_rx.changed() => break,
                    event = next_event(&mut events) => event,
                };

                match event {
                    Some(event) => {
                        if let Some(label) = label_for(&event) {
                            message = label;
                        }
                    }
                    None => events = None,
                }
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}

/// New spinner label for an event, if it changes one.
fn label_for(event: &Event) -> Option<String> {
    match event {
        Event::CardDrawn { id } => Some(format!("drew card {id}")),
        Event::StageStarted(stage) => Some(stage.label().to_string()),
        Event::Finished => None,
    }
}

/// Next event, skipping lag. `None` once the bus is gone; pends forever when
/// there is nothing to follow.
async fn next_event(events: &mut Option<broadcast::Receiver<Event>>) -> Option<Event> {
    let Some(rx) = events else {
        return std::future::pending().await;
    };
    loop {
        match rx.recv().await {
            Ok(event) => return Some(event),
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => return None,
        }
    }
}
