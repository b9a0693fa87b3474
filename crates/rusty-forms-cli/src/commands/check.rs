use super::registry;
use crate::Format;
use anyhow::Context;
use rusty_forms::{FormSchema, FormValues, Outcome, ValidationResult};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub struct Args {
    pub schema: PathBuf,
    pub values: PathBuf,
    pub event: String,
    pub field: Option<String>,
    pub format: Format,
    pub timeout_ms: u64,
}

/// Ok(true) when the run recorded no failures
pub async fn run(args: Args) -> anyhow::Result<bool> {
    let schema = FormSchema::from_file(&args.schema)?;

    let raw = std::fs::read_to_string(&args.values)
        .with_context(|| format!("failed to read values {}", args.values.display()))?;
    let values: FormValues = serde_json::from_str(&raw)
        .with_context(|| format!("invalid values in {}", args.values.display()))?;
    debug!(fields = values.len(), "values loaded");

    let form = schema
        .into_builder(values)
        .registry(registry(Duration::from_millis(args.timeout_ms)))
        .build();

    let result = form.validate(&args.event, args.field.as_deref()).await?;

    match args.format {
        Format::Text => print!("{}", render_text(&result)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(result.is_valid())
}

fn render_text(result: &ValidationResult) -> String {
    let mut out = String::new();

    for entry in &result.fields {
        let label = match entry.outcome {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
            Outcome::Skip => "SKIP",
        };
        out.push_str(&format!("{label}  {}  {}", entry.name, entry.test));
        if !entry.outcome.is_pass() && !entry.message.is_empty() {
            out.push_str(&format!("  {}", entry.message));
        }
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} test(s) run on '{}', {} error(s)\n",
        result.fields.len(),
        result.event_name,
        result.error_count
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_forms::FieldOutcome;

    #[test]
    fn test_text_report_shows_messages_for_problems_only() {
        let result = ValidationResult {
            event_name: "submit".to_string(),
            error_count: 1,
            fields: vec![
                FieldOutcome {
                    name: "age".to_string(),
                    test: "required".to_string(),
                    outcome: Outcome::Pass,
                    message: "Value is required".to_string(),
                },
                FieldOutcome {
                    name: "age".to_string(),
                    test: "range".to_string(),
                    outcome: Outcome::Fail,
                    message: "Adults only".to_string(),
                },
            ],
        };

        let text = render_text(&result);
        assert!(text.contains("PASS  age  required\n"));
        assert!(text.contains("FAIL  age  range  Adults only\n"));
        assert!(text.contains("2 test(s) run on 'submit', 1 error(s)"));
    }
}
