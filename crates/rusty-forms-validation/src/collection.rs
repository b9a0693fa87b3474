//! Multiplicity tests: `minCount`, `maxCount`, `count`
//!
//! Useful for checkbox groups and multi-selects that submit several values
//! under one name. Only non-empty values are counted.

use crate::check::{count_filled, number_arg, CheckInput, CheckResult};
use rusty_forms_types::Completion;

/// At least `arg` non-empty values
pub fn min_count(input: CheckInput<'_>) -> CheckResult {
    let bound = number_arg(input.options, "minCount")?;
    let message = input.options.message_or_else(|| {
        format!("Must have at least {} values.", input.options.arg_display())
    });

    Ok(Completion::new(count_filled(input.values) as f64 >= bound, message))
}

/// At most `arg` non-empty values
pub fn max_count(input: CheckInput<'_>) -> CheckResult {
    let bound = number_arg(input.options, "maxCount")?;
    let message = input.options.message_or_else(|| {
        format!("Must have at most {} values.", input.options.arg_display())
    });

    Ok(Completion::new(count_filled(input.values) as f64 <= bound, message))
}

/// Exactly `arg` non-empty values
pub fn count(input: CheckInput<'_>) -> CheckResult {
    let expected = number_arg(input.options, "count")?;
    let message = input
        .options
        .message_or_else(|| format!("Must have {} values.", input.options.arg_display()));

    Ok(Completion::new(count_filled(input.values) as f64 == expected, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_forms_types::{FormValues, TestOptions};

    fn run(test: fn(CheckInput<'_>) -> CheckResult, values: &[&str], arg: &str) -> Completion {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let options = TestOptions::new().arg(arg);
        let form = FormValues::new();
        test(CheckInput {
            values: &values,
            options: &options,
            form: &form,
        })
        .unwrap()
    }

    #[test]
    fn test_empty_entries_are_not_counted() {
        assert!(run(min_count, &["a", "", "b"], "2").outcome.is_pass());
        assert!(run(min_count, &["a", "", ""], "2").outcome.is_fail());
        assert!(run(min_count, &[""], "1").outcome.is_fail());
    }

    #[test]
    fn test_max_count() {
        assert!(run(max_count, &["a", "b"], "2").outcome.is_pass());
        let done = run(max_count, &["a", "b", "c"], "2");
        assert!(done.outcome.is_fail());
        assert_eq!(done.message, "Must have at most 2 values.");
    }

    #[test]
    fn test_exact_count() {
        assert!(run(count, &["a", "b"], "2").outcome.is_pass());
        assert!(run(count, &["a", "b", ""], "2").outcome.is_pass());
        assert!(run(count, &["a"], "2").outcome.is_fail());
        assert_eq!(run(count, &["a"], "2").message, "Must have 2 values.");
    }
}
