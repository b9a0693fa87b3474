// File: src/form.rs
// Purpose: Form construction and the validation driver loop

use crate::config::{BusyPolicy, FormConfig};
use crate::error::{FormError, Result};
use crate::observer::{Feedback, FnObserver, LogFeedback, Observer};
use crate::result::ValidationResult;
use crate::run::ValidationRun;
use crate::source::ValueSource;
use crate::spec::{FieldSpec, Test, TestSpec};
use crate::submit::Submitter;
use crate::wiring::{EventWiring, FieldListener};
use rusty_forms_types::{Completion, ConfigError, SUBMIT};
use rusty_forms_validation::{CheckInput, CheckRegistry};
use std::collections::HashSet;
use std::sync::{Arc, Weak};
use tokio::sync::Mutex;
use tracing::{debug, error, trace};

/// Collects fields, tests and collaborators, then builds a [`Form`].
///
/// ```rust,ignore
/// let form = FormBuilder::new(values)
///     .add_tests("age", ["required", "isNumber"])
///     .add_tests("age", [Test::with("range", TestOptions::new().arg("18..118"))])
///     .on_validate(|result| {
///         println!("{} errors", result.error_count);
///         Feedback::Continue
///     })
///     .build();
///
/// let result = form.submit().await?;
/// ```
pub struct FormBuilder {
    source: Arc<dyn ValueSource>,
    registry: CheckRegistry,
    config: FormConfig,
    fields: Vec<(String, Vec<Test>)>,
    observers: Vec<Arc<dyn Observer>>,
    submitter: Option<Arc<dyn Submitter>>,
    wiring: Option<Arc<dyn EventWiring>>,
}

impl FormBuilder {
    /// Start a form reading values from `source`, with the built-in tests
    pub fn new(source: impl ValueSource + 'static) -> Self {
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn ValueSource>) -> Self {
        Self {
            source,
            registry: CheckRegistry::builtin(),
            config: FormConfig::default(),
            fields: Vec::new(),
            observers: Vec::new(),
            submitter: None,
            wiring: None,
        }
    }

    /// Replace the test registry
    pub fn registry(mut self, registry: CheckRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a field and its tests.
    ///
    /// Calling this twice with the same name registers two independent
    /// fields, validated in the order they were added.
    pub fn add_tests<I>(mut self, name: impl Into<String>, tests: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Test>,
    {
        self.fields
            .push((name.into(), tests.into_iter().map(Into::into).collect()));
        self
    }

    pub fn observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    pub fn on_validate<F>(self, callback: F) -> Self
    where
        F: Fn(&ValidationResult) -> Feedback + Send + Sync + 'static,
    {
        self.observer(FnObserver(callback))
    }

    pub fn submitter(mut self, submitter: impl Submitter + 'static) -> Self {
        self.submitter = Some(Arc::new(submitter));
        self
    }

    /// Collaborator that attaches `change`, `click` and `idle` listeners
    pub fn wiring(mut self, wiring: Arc<dyn EventWiring>) -> Self {
        self.wiring = Some(wiring);
        self
    }

    /// Resolve every test's options and attach field listeners.
    ///
    /// Without an explicit observer the form reports through [`LogFeedback`].
    pub fn build(self) -> Form {
        let config = self.config;
        let fields: Vec<FieldSpec> = self
            .fields
            .into_iter()
            .map(|(name, tests)| {
                let specs = tests
                    .into_iter()
                    .map(|test| TestSpec::resolve(name.as_str(), test, &config))
                    .collect();
                FieldSpec::new(name, specs)
            })
            .collect();

        let mut observers = self.observers;
        if observers.is_empty() {
            observers.push(Arc::new(LogFeedback));
        }

        let form = Form {
            inner: Arc::new(FormInner {
                fields,
                registry: self.registry,
                config,
                source: self.source,
                observers,
                submitter: self.submitter,
                gate: Mutex::new(()),
            }),
        };

        if let Some(wiring) = self.wiring {
            form.attach_listeners(wiring.as_ref());
        }

        debug!(fields = form.inner.fields.len(), "form built");
        form
    }
}

struct FormInner {
    fields: Vec<FieldSpec>,
    registry: CheckRegistry,
    config: FormConfig,
    source: Arc<dyn ValueSource>,
    observers: Vec<Arc<dyn Observer>>,
    submitter: Option<Arc<dyn Submitter>>,
    /// Held for the whole of a run
    gate: Mutex<()>,
}

/// A built form. Cheap to clone; clones share fields and the run gate.
#[derive(Clone)]
pub struct Form {
    inner: Arc<FormInner>,
}

impl Form {
    /// Run every test eligible for `event_name`, optionally only those of
    /// one field.
    ///
    /// Tests execute one at a time. The result is delivered to each observer
    /// once, then returned. A `submit` run that no observer prevented hands
    /// the values to the submitter.
    pub async fn validate(&self, event_name: &str, field: Option<&str>) -> Result<ValidationResult> {
        let inner = &*self.inner;
        let _running = match inner.config.on_busy {
            BusyPolicy::Queue => inner.gate.lock().await,
            BusyPolicy::Reject => inner
                .gate
                .try_lock()
                .map_err(|_| FormError::RunInProgress)?,
        };

        let mut run = ValidationRun::new(event_name, field);
        debug!(event = run.event_name(), field = ?run.field_filter(), "validation started");

        while let Some(spec) = run.next_test(&inner.fields) {
            let completion = self.execute(spec).await.map_err(|source| {
                error!(
                    field = %spec.field_name,
                    test = %spec.test_type,
                    error = %source,
                    "aborting validation"
                );
                FormError::Config {
                    field: spec.field_name.clone(),
                    test: spec.test_type.clone(),
                    source,
                }
            })?;

            trace!(
                field = %spec.field_name,
                test = %spec.test_type,
                outcome = %completion.outcome,
                "test completed"
            );
            run.record(spec, completion);
        }

        let result = run.finish();
        debug!(
            event = event_name,
            errors = result.error_count,
            entries = result.fields.len(),
            "validation finished"
        );

        let mut prevented = false;
        for observer in &inner.observers {
            if observer.on_validate(&result) == Feedback::PreventDefault {
                prevented = true;
            }
        }

        if result.event_name == SUBMIT && !prevented {
            if let Some(submitter) = &inner.submitter {
                let values = inner.source.snapshot().await;
                submitter.submit(&values).await.map_err(FormError::Submit)?;
                debug!("form submitted");
            }
        }

        Ok(result)
    }

    /// `validate("submit", None)`
    pub async fn submit(&self) -> Result<ValidationResult> {
        self.validate(SUBMIT, None).await
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.inner.fields
    }

    pub fn config(&self) -> &FormConfig {
        &self.inner.config
    }

    pub fn downgrade(&self) -> WeakForm {
        WeakForm {
            inner: Arc::downgrade(&self.inner),
        }
    }

    async fn execute(&self, spec: &TestSpec) -> std::result::Result<Completion, ConfigError> {
        let check = self.inner.registry.resolve(&spec.test_type)?;
        let form = self.inner.source.snapshot().await;
        let values = form.values_of(spec.value_field());

        check
            .run(CheckInput {
                values: &values,
                options: &spec.options,
                form: &form,
            })
            .await
    }

    /// One listener per field name and trigger kind; the first test
    /// requesting a trigger decides its idle delay
    fn attach_listeners(&self, wiring: &dyn EventWiring) {
        let mut attached = HashSet::new();

        for field in &self.inner.fields {
            for spec in &field.tests {
                for trigger in spec.field_triggers() {
                    if attached.insert((field.name.clone(), trigger)) {
                        trace!(field = %field.name, %trigger, "attaching listener");
                        wiring.attach(FieldListener::new(
                            self.downgrade(),
                            field.name.clone(),
                            trigger,
                            spec.idle_delay(),
                        ));
                    }
                }
            }
        }
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.inner.fields)
            .field("config", &self.inner.config)
            .field("registry", &self.inner.registry)
            .finish_non_exhaustive()
    }
}

/// Handle that does not keep a form alive
#[derive(Clone, Debug, Default)]
pub struct WeakForm {
    inner: Weak<FormInner>,
}

impl WeakForm {
    pub fn upgrade(&self) -> Option<Form> {
        self.inner.upgrade().map(|inner| Form { inner })
    }
}
