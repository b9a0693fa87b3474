// File: src/schema.rs
// Purpose: Declarative form definitions loaded from TOML

use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::form::FormBuilder;
use crate::source::ValueSource;
use crate::spec::Test;
use rusty_forms_types::TestOptions;
use serde::Deserialize;
use std::path::Path;

/// A form written as TOML:
///
/// ```toml
/// [config]
/// idle_delay_ms = 500
///
/// [[fields]]
/// name = "age"
///
/// [[fields.tests]]
/// type = "required"
///
/// [[fields.tests]]
/// type = "range"
/// arg = "18..118"
/// on = "submit change"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSchema {
    #[serde(default)]
    pub config: FormConfig,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default)]
    pub tests: Vec<TestSchema>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestSchema {
    #[serde(rename = "type")]
    pub test_type: String,
    #[serde(flatten)]
    pub options: TestOptions,
    /// Keys left over after the known options; must be empty
    #[serde(flatten)]
    pub unknown: toml::Table,
}

impl From<TestSchema> for Test {
    fn from(schema: TestSchema) -> Self {
        Test::with(schema.test_type, schema.options)
    }
}

impl FormSchema {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let schema: Self = toml::from_str(source)?;
        schema.check_options()?;
        Ok(schema)
    }

    /// Reject misspelled or unsupported option keys
    pub fn check_options(&self) -> Result<()> {
        for field in &self.fields {
            for test in &field.tests {
                if let Some(key) = test.unknown.keys().next() {
                    return Err(FormError::UnknownOption {
                        field: field.name.clone(),
                        test: test.test_type.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| FormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// A builder with this schema's config and fields, in file order.
    /// Observers, registry and collaborators can still be added.
    pub fn into_builder(self, source: impl ValueSource + 'static) -> FormBuilder {
        self.fields
            .into_iter()
            .fold(FormBuilder::new(source).config(self.config), |builder, field| {
                builder.add_tests(field.name, field.tests)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BusyPolicy;
    use rusty_forms_types::TestArg;

    const SCHEMA: &str = r#"
[config]
idle_delay_ms = 250
on_busy = "reject"

[[fields]]
name = "age"

[[fields.tests]]
type = "required"
message = "Tell us your age"

[[fields.tests]]
type = "range"
arg = "18..118"
on = "submit change"

[[fields]]
name = "pets"

[[fields.tests]]
type = "maxCount"
arg = 3
delay = 400
"#;

    #[test]
    fn test_parses_config_fields_and_options() {
        let schema = FormSchema::from_toml_str(SCHEMA).unwrap();

        assert_eq!(schema.config.idle_delay_ms, 250);
        assert_eq!(schema.config.on_busy, BusyPolicy::Reject);
        assert_eq!(schema.fields.len(), 2);

        let age = &schema.fields[0];
        assert_eq!(age.tests[0].test_type, "required");
        assert_eq!(age.tests[0].options.message.as_deref(), Some("Tell us your age"));
        assert_eq!(age.tests[1].options.on.as_deref(), Some("submit change"));
        assert!(matches!(&age.tests[1].options.arg, Some(TestArg::Text(t)) if t == "18..118"));

        let pets = &schema.fields[1].tests[0];
        assert_eq!(pets.options.arg.as_ref().and_then(TestArg::as_number), Some(3.0));
        assert_eq!(pets.options.delay, Some(400));
    }

    #[test]
    fn test_empty_schema_uses_defaults() {
        let schema = FormSchema::from_toml_str("").unwrap();
        assert!(schema.fields.is_empty());
        assert_eq!(schema.config.idle_delay_ms, 1000);
        assert_eq!(schema.config.on_busy, BusyPolicy::Queue);
    }

    #[test]
    fn test_test_without_type_is_rejected() {
        let err = FormSchema::from_toml_str("[[fields]]\nname = \"a\"\n[[fields.tests]]\narg = 1\n")
            .unwrap_err();
        assert!(matches!(err, FormError::Schema(_)));
    }

    #[test]
    fn test_misspelled_option_is_rejected() {
        let err = FormSchema::from_toml_str(
            "[[fields]]\nname = \"age\"\n[[fields.tests]]\ntype = \"required\"\nmesage = \"Tell us\"\n",
        )
        .unwrap_err();

        match err {
            FormError::UnknownOption { field, test, key } => {
                assert_eq!(field, "age");
                assert_eq!(test, "required");
                assert_eq!(key, "mesage");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_known_options_leave_nothing_over() {
        let schema = FormSchema::from_toml_str(SCHEMA).unwrap();
        assert!(schema.fields.iter().flat_map(|f| &f.tests).all(|t| t.unknown.is_empty()));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = FormSchema::from_file("/nonexistent/form.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/form.toml"));
    }
}
