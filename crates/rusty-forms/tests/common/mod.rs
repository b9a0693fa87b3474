//! Shared test checks and observers

#![allow(dead_code)]

use async_trait::async_trait;
use rusty_forms::{
    Check, CheckInput, CheckResult, Completion, Feedback, Observer, Outcome, ValidationResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// Records every call, then reports a fixed outcome
#[derive(Clone)]
pub struct Spy {
    pub label: &'static str,
    pub outcome: Outcome,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Spy {
    pub fn new(label: &'static str, outcome: Outcome, calls: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            label,
            outcome,
            calls: Arc::clone(calls),
        }
    }
}

#[async_trait]
impl Check for Spy {
    async fn run(&self, input: CheckInput<'_>) -> CheckResult {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}={}", self.label, input.values.join(",")));
        Ok(Completion::new(self.outcome, self.label))
    }
}

/// Completes after a delay and tracks how many runs overlap
#[derive(Clone, Default)]
pub struct Slow {
    pub active: Arc<AtomicUsize>,
    pub peak: Arc<AtomicUsize>,
    pub started: Arc<AtomicUsize>,
}

#[async_trait]
impl Check for Slow {
    async fn run(&self, _input: CheckInput<'_>) -> CheckResult {
        self.started.fetch_add(1, Ordering::SeqCst);
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(Completion::pass("slow"))
    }
}

/// Forwards every result to a channel
pub struct ChannelObserver {
    pub tx: mpsc::UnboundedSender<ValidationResult>,
    pub feedback: Feedback,
}

impl ChannelObserver {
    pub fn new(feedback: Feedback) -> (Self, mpsc::UnboundedReceiver<ValidationResult>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, feedback }, rx)
    }
}

impl Observer for ChannelObserver {
    fn on_validate(&self, result: &ValidationResult) -> Feedback {
        let _ = self.tx.send(result.clone());
        self.feedback
    }
}

/// `(field, test, outcome)` for each entry, for compact assertions
pub fn summary(result: &ValidationResult) -> Vec<(String, String, Outcome)> {
    result
        .fields
        .iter()
        .map(|e| (e.name.clone(), e.test.clone(), e.outcome))
        .collect()
}
