// File: src/wiring.rs
// Purpose: Field listeners and the idle debounce that drives them

use crate::error::Result;
use crate::form::WeakForm;
use crate::result::ValidationResult;
use rusty_forms_types::Trigger;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

/// Host collaborator that connects field-level events to a form.
///
/// [`FormBuilder::build`](crate::FormBuilder::build) calls `attach` at most
/// once per field name and trigger kind.
pub trait EventWiring: Send + Sync {
    fn attach(&self, listener: FieldListener);
}

/// Re-validates one field when its trigger fires
#[derive(Debug, Clone)]
pub struct FieldListener {
    form: WeakForm,
    field: String,
    trigger: Trigger,
    delay: Duration,
}

impl FieldListener {
    pub(crate) fn new(form: WeakForm, field: String, trigger: Trigger, delay: Duration) -> Self {
        Self {
            form,
            field,
            trigger,
            delay,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    /// Idle debounce window
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `validate(trigger, field)`; `None` once the form is gone
    pub async fn fire(&self) -> Option<Result<ValidationResult>> {
        let form = self.form.upgrade()?;
        Some(form.validate(self.trigger.as_str(), Some(&self.field)).await)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Per-field idle timers.
///
/// Each keystroke restarts the field's timer; when it expires without
/// further input the field's `idle` listener fires.
///
/// Timers run on the Tokio runtime captured at construction (or given via
/// [`with_handle`](Self::with_handle)), so keystrokes may be reported from
/// any thread. Without a runtime, keystrokes are ignored with a warning.
#[derive(Debug)]
pub struct IdleDebouncer {
    timers: Mutex<HashMap<String, JoinHandle<()>>>,
    runtime: Option<Handle>,
}

impl Default for IdleDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl IdleDebouncer {
    /// Uses the current runtime, if constructed inside one
    pub fn new() -> Self {
        Self {
            timers: Mutex::default(),
            runtime: Handle::try_current().ok(),
        }
    }

    pub fn with_handle(runtime: Handle) -> Self {
        Self {
            timers: Mutex::default(),
            runtime: Some(runtime),
        }
    }

    /// (Re)start the timer for the listener's field
    pub fn start(&self, listener: FieldListener) {
        let Some(runtime) = self.runtime.clone().or_else(|| Handle::try_current().ok()) else {
            warn!(field = %listener.field, "no tokio runtime; idle timer not started");
            return;
        };

        let field = listener.field.clone();
        let timer = runtime.spawn(async move {
            tokio::time::sleep(listener.delay).await;
            // Detached so that a later keystroke cannot abort a run in flight
            tokio::spawn(async move {
                trace!(field = %listener.field, "idle timer expired");
                if let Some(Err(err)) = listener.fire().await {
                    warn!(field = %listener.field, error = %err, "idle validation failed");
                }
            });
        });

        if let Some(previous) = lock(&self.timers).insert(field, timer) {
            previous.abort();
        }
    }

    /// Stop a pending timer; true if one was pending
    pub fn cancel(&self, field: &str) -> bool {
        match lock(&self.timers).remove(field) {
            Some(timer) => {
                let pending = !timer.is_finished();
                timer.abort();
                pending
            }
            None => false,
        }
    }

    /// A keystroke on the listener's field, leaving `value` in the input.
    /// An empty input only cancels.
    pub fn keyup(&self, listener: FieldListener, value: &str) {
        if value.is_empty() {
            self.cancel(listener.field());
        } else {
            self.start(listener);
        }
    }

    pub fn is_pending(&self, field: &str) -> bool {
        lock(&self.timers)
            .get(field)
            .map_or(false, |timer| !timer.is_finished())
    }
}

impl Drop for IdleDebouncer {
    fn drop(&mut self) {
        for (_, timer) in lock(&self.timers).drain() {
            timer.abort();
        }
    }
}

/// In-process [`EventWiring`]: keeps attached listeners so a host can
/// dispatch field events to them by name.
#[derive(Debug)]
pub struct ListenerRegistry {
    listeners: Mutex<HashMap<(String, Trigger), FieldListener>>,
    idle: IdleDebouncer,
}

impl EventWiring for ListenerRegistry {
    fn attach(&self, listener: FieldListener) {
        lock(&self.listeners).insert((listener.field.clone(), listener.trigger), listener);
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::with_debouncer(IdleDebouncer::new())
    }

    /// Idle timers run on `runtime`
    pub fn with_handle(runtime: Handle) -> Self {
        Self::with_debouncer(IdleDebouncer::with_handle(runtime))
    }

    fn with_debouncer(idle: IdleDebouncer) -> Self {
        Self {
            listeners: Mutex::default(),
            idle,
        }
    }

    pub fn listener(&self, field: &str, trigger: Trigger) -> Option<FieldListener> {
        lock(&self.listeners)
            .get(&(field.to_string(), trigger))
            .cloned()
    }

    /// Every attached (field, trigger) pair, sorted
    pub fn attached(&self) -> Vec<(String, Trigger)> {
        let mut keys: Vec<_> = lock(&self.listeners).keys().cloned().collect();
        keys.sort();
        keys
    }

    /// A `change` event on the field. `None` if nothing listens for it.
    pub async fn change(&self, field: &str) -> Option<Result<ValidationResult>> {
        self.dispatch(field, Trigger::Change).await
    }

    pub async fn click(&self, field: &str) -> Option<Result<ValidationResult>> {
        self.dispatch(field, Trigger::Click).await
    }

    /// A keystroke; restarts the idle timer if the field has an idle listener
    pub fn keyup(&self, field: &str, value: &str) -> bool {
        match self.listener(field, Trigger::Idle) {
            Some(listener) => {
                self.idle.keyup(listener, value);
                true
            }
            None => false,
        }
    }

    pub fn blur(&self, field: &str) {
        self.idle.cancel(field);
    }

    pub fn idle_pending(&self, field: &str) -> bool {
        self.idle.is_pending(field)
    }

    async fn dispatch(&self, field: &str, trigger: Trigger) -> Option<Result<ValidationResult>> {
        let listener = self.listener(field, trigger)?;
        listener.fire().await
    }
}
