// File: src/source.rs
// Purpose: Where the engine reads current field values from

use async_trait::async_trait;
use rusty_forms_types::{FieldValue, FormValues};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Supplies the current value of every field.
///
/// The engine takes a fresh snapshot before each test it runs, so a test
/// sees any value changed while an earlier test was pending.
#[async_trait]
pub trait ValueSource: Send + Sync {
    async fn snapshot(&self) -> FormValues;
}

/// A fixed set of values
#[async_trait]
impl ValueSource for FormValues {
    async fn snapshot(&self) -> FormValues {
        self.clone()
    }
}

/// Values that the host keeps updating as the user edits the form
#[derive(Debug, Clone, Default)]
pub struct SharedValues {
    inner: Arc<RwLock<FormValues>>,
}

impl SharedValues {
    pub fn new(values: FormValues) -> Self {
        Self {
            inner: Arc::new(RwLock::new(values)),
        }
    }

    pub async fn set(&self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.inner.write().await.insert(name, value);
    }

    pub async fn clear(&self, name: &str) {
        self.inner.write().await.remove(name);
    }

    pub async fn get(&self, name: &str) -> Option<FieldValue> {
        self.inner.read().await.get(name).cloned()
    }
}

#[async_trait]
impl ValueSource for SharedValues {
    async fn snapshot(&self) -> FormValues {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shared_values_track_edits() {
        let values = SharedValues::default();
        let handle = values.clone();

        handle.set("age", "25").await;
        assert_eq!(values.snapshot().await.values_of("age"), vec!["25"]);

        handle.clear("age").await;
        assert!(values.get("age").await.is_none());
    }
}
