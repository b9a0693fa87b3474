// File: rusty-forms-types/src/trigger.rs
// Purpose: Event names that tests opt into

use std::fmt;

/// Event name used when a form is submitted
pub const SUBMIT: &str = "submit";

/// The occasions a validation run can be associated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Trigger {
    Submit,
    Change,
    Click,
    /// Typing stopped for the configured delay
    Idle,
}

impl Trigger {
    /// Triggers that are wired to individual fields rather than the whole form
    pub const FIELD_LEVEL: [Trigger; 3] = [Trigger::Change, Trigger::Click, Trigger::Idle];

    pub fn as_str(self) -> &'static str {
        match self {
            Trigger::Submit => SUBMIT,
            Trigger::Change => "change",
            Trigger::Click => "click",
            Trigger::Idle => "idle",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of event names a test is eligible for.
///
/// Parsed once from the space-delimited `on` option. An absent or blank
/// option means `submit` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triggers {
    events: Vec<String>,
}

impl Triggers {
    pub fn parse(on: Option<&str>) -> Self {
        let mut events: Vec<String> = Vec::new();
        for token in on.unwrap_or_default().split_whitespace() {
            if !events.iter().any(|e| e == token) {
                events.push(token.to_string());
            }
        }

        if events.is_empty() {
            events.push(SUBMIT.to_string());
        }

        Self { events }
    }

    /// Exact token match, never a substring match
    pub fn contains(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }

    /// The field-level triggers in this set that need a listener
    pub fn field_level(&self) -> impl Iterator<Item = Trigger> + '_ {
        Trigger::FIELD_LEVEL
            .into_iter()
            .filter(|trigger| self.contains(trigger.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(String::as_str)
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Self::parse(None)
    }
}
