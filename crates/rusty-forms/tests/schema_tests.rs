//! Forms defined in TOML

use pretty_assertions::assert_eq;
use rusty_forms::*;

const SIGNUP: &str = r#"
[[fields]]
name = "age"

[[fields.tests]]
type = "required"

[[fields.tests]]
type = "isNumber"

[[fields.tests]]
type = "range"
arg = "118..18"
message = "Adults only"

[[fields]]
name = "other"

[[fields.tests]]
type = "is"
field = "reason"
arg = "otherReason"

[[fields.tests]]
type = "required"
"#;

#[tokio::test]
async fn test_schema_form_validates_like_code_form() {
    let values = FormValues::new()
        .with("age", "12")
        .with("reason", "moving")
        .with("other", "");

    let form = FormSchema::from_toml_str(SIGNUP)
        .unwrap()
        .into_builder(values)
        .on_validate(|_| Feedback::Continue)
        .build();

    let result = form.submit().await.unwrap();

    let outcomes: Vec<_> = result
        .fields
        .iter()
        .map(|e| (e.name.as_str(), e.test.as_str(), e.outcome))
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("age", "required", Outcome::Pass),
            ("age", "isNumber", Outcome::Pass),
            ("age", "range", Outcome::Fail),
            ("other", "is", Outcome::Skip),
        ]
    );
    assert_eq!(result.error_for("age"), Some("Adults only"));
    assert_eq!(result.error_count, 1);
}

#[tokio::test]
async fn test_schema_config_reaches_the_form() {
    let schema = FormSchema::from_toml_str(
        r#"
[config]
idle_delay_ms = 300

[[fields]]
name = "q"

[[fields.tests]]
type = "minLen"
arg = 2
on = "idle"
"#,
    )
    .unwrap();

    let form = schema.into_builder(FormValues::new()).build();

    assert_eq!(form.config().idle_delay_ms, 300);
    let spec = &form.fields()[0].tests[0];
    assert_eq!(spec.idle_delay(), std::time::Duration::from_millis(300));
    assert!(spec.runs_on("idle"));
    assert!(!spec.runs_on("submit"));
}
