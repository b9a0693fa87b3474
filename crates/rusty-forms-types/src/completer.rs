// File: rusty-forms-types/src/completer.rs
// Purpose: Once-only completion handle for callback-style tests

use crate::outcome::{Completion, Outcome};
use tokio::sync::oneshot;

/// Hands a test's result back to the engine.
///
/// `complete` consumes the completer, so a test can report at most once. It
/// may be called before the test function returns or later from another task
/// (a timer, a network response).
#[derive(Debug)]
pub struct Completer {
    tx: oneshot::Sender<Completion>,
}

/// The engine side of a [`Completer`]
#[derive(Debug)]
pub struct Pending {
    rx: oneshot::Receiver<Completion>,
}

impl Completer {
    pub fn channel() -> (Completer, Pending) {
        let (tx, rx) = oneshot::channel();
        (Completer { tx }, Pending { rx })
    }

    pub fn complete(self, outcome: impl Into<Outcome>, message: impl Into<String>) {
        // Receiver gone means the run was abandoned; nothing to report to.
        let _ = self.tx.send(Completion::new(outcome, message));
    }
}

impl Pending {
    /// Wait for the completion. `None` if the completer was dropped unused.
    pub async fn wait(self) -> Option<Completion> {
        self.rx.await.ok()
    }
}
