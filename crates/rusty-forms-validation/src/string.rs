//! Text tests: presence, length, pattern and equality
//!
//! `required`, `minLen`, `maxLen`, `regex`, `is`, `isNot`, `sameAs`

use crate::check::{every_value, number_arg, required_arg, CheckInput, CheckResult};
use regex::Regex;
use rusty_forms_types::{to_number, Completion, ConfigError, FieldValue, TestArg};
use std::borrow::Cow;

/// Every value must contain at least one non-whitespace character
pub fn required(input: CheckInput<'_>) -> CheckResult {
    let message = input
        .options
        .message_or_else(|| "Value is required".to_string());

    Ok(every_value(input.values, message, |value| {
        !value.trim().is_empty()
    }))
}

/// Every value must be at least `arg` characters long
pub fn min_len(input: CheckInput<'_>) -> CheckResult {
    let bound = number_arg(input.options, "minLen")?;
    let message = input.options.message_or_else(|| {
        format!("Must be at least {} characters.", input.options.arg_display())
    });

    Ok(every_value(input.values, message, |value| {
        value.chars().count() as f64 >= bound
    }))
}

/// Every value must be at most `arg` characters long
pub fn max_len(input: CheckInput<'_>) -> CheckResult {
    let bound = number_arg(input.options, "maxLen")?;
    let message = input.options.message_or_else(|| {
        format!("Must be at most {} characters.", input.options.arg_display())
    });

    Ok(every_value(input.values, message, |value| {
        value.chars().count() as f64 <= bound
    }))
}

/// Every value must match `arg`, a compiled pattern or pattern source.
///
/// Matching is a search, not a full match; anchor the pattern with `^...$`
/// to constrain the whole value.
pub fn regex(input: CheckInput<'_>) -> CheckResult {
    let pattern: Cow<'_, Regex> = match required_arg(input.options, "regex")? {
        TestArg::Pattern(re) => Cow::Borrowed(re),
        TestArg::Text(source) => Cow::Owned(Regex::new(source)?),
        other => {
            return Err(ConfigError::InvalidArgument {
                test: "regex",
                arg: other.to_string(),
            })
        }
    };
    let message = input
        .options
        .message_or_else(|| "Must be in the correct format.".to_string());

    Ok(every_value(input.values, message, |value| {
        pattern.is_match(value)
    }))
}

/// Loose equality against a literal argument: numeric arguments compare
/// numerically, text compares exactly
fn equals_literal(value: &str, arg: &TestArg) -> bool {
    match arg {
        TestArg::Number(n) => to_number(value) == Some(*n),
        TestArg::Text(text) => value == text,
        _ => false,
    }
}

fn literal_arg<'a>(input: CheckInput<'a>, test: &'static str) -> Result<&'a TestArg, ConfigError> {
    match required_arg(input.options, test)? {
        arg @ (TestArg::Number(_) | TestArg::Text(_)) => Ok(arg),
        other => Err(ConfigError::InvalidArgument {
            test,
            arg: other.to_string(),
        }),
    }
}

/// Every value must equal `arg`
pub fn is(input: CheckInput<'_>) -> CheckResult {
    let arg = literal_arg(input, "is")?;
    let message = input.options.message_or_else(|| format!("Must be {arg}"));

    Ok(every_value(input.values, message, |value| {
        equals_literal(value, arg)
    }))
}

/// No value may equal `arg`
pub fn is_not(input: CheckInput<'_>) -> CheckResult {
    let arg = literal_arg(input, "isNot")?;
    let message = input.options.message_or_else(|| format!("Must not be {arg}"));

    Ok(every_value(input.values, message, |value| {
        !equals_literal(value, arg)
    }))
}

/// Every value must equal the current value of the field named by `arg`.
///
/// A multi-valued target is compared in its comma-joined form; a target
/// field with no value at all never matches.
pub fn same_as(input: CheckInput<'_>) -> CheckResult {
    let arg = required_arg(input.options, "sameAs")?;
    let target = arg.as_text().ok_or_else(|| ConfigError::InvalidArgument {
        test: "sameAs",
        arg: arg.to_string(),
    })?;
    let message = input
        .options
        .message_or_else(|| format!("Must be the same as: {target}"));

    let compare_to = input.form.get(&target).map(FieldValue::joined);
    let passed = match compare_to {
        Some(expected) => input.values.iter().all(|value| *value == expected),
        None => false,
    };

    Ok(Completion::new(passed, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rusty_forms_types::{FormValues, Outcome, TestOptions};

    fn run_with(
        test: fn(CheckInput<'_>) -> CheckResult,
        values: &[&str],
        options: TestOptions,
        form: &FormValues,
    ) -> CheckResult {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        test(CheckInput {
            values: &values,
            options: &options,
            form,
        })
    }

    fn run(test: fn(CheckInput<'_>) -> CheckResult, values: &[&str], options: TestOptions) -> CheckResult {
        run_with(test, values, options, &FormValues::new())
    }

    #[rstest]
    #[case(&["Ann"], Outcome::Pass)]
    #[case(&[""], Outcome::Fail)]
    #[case(&["  \t "], Outcome::Fail)]
    #[case(&["a", " "], Outcome::Fail)]
    fn test_required(#[case] values: &[&str], #[case] expected: Outcome) {
        let done = run(required, values, TestOptions::new()).unwrap();
        assert_eq!(done.outcome, expected);
    }

    #[test]
    fn test_required_message_override() {
        let done = run(required, &[""], TestOptions::new().message("Tell us your name")).unwrap();
        assert_eq!(done, Completion::fail("Tell us your name"));
    }

    #[test]
    fn test_length_counts_characters() {
        let options = TestOptions::new().arg(3);
        assert!(run(min_len, &["héé"], options.clone()).unwrap().outcome.is_pass());
        assert!(run(min_len, &["hé"], options).unwrap().outcome.is_fail());

        let done = run(max_len, &["abcdef"], TestOptions::new().arg("5")).unwrap();
        assert_eq!(done, Completion::fail("Must be at most 5 characters."));
    }

    #[test]
    fn test_regex_accepts_source_or_pattern() {
        let from_source = TestOptions::new().arg("^[A-Z0-9]*$");
        assert!(run(regex, &["AB12"], from_source.clone()).unwrap().outcome.is_pass());
        assert!(run(regex, &["ab12"], from_source).unwrap().outcome.is_fail());

        let compiled = TestOptions::new().arg(Regex::new(r"\d").unwrap());
        assert!(run(regex, &["abc1"], compiled).unwrap().outcome.is_pass());
    }

    #[test]
    fn test_regex_bad_source_is_config_error() {
        let err = run(regex, &["x"], TestOptions::new().arg("(unclosed")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern(_)));
    }

    #[test]
    fn test_is_and_is_not() {
        let options = TestOptions::new().arg("otherReason");
        assert!(run(is, &["otherReason"], options.clone()).unwrap().outcome.is_pass());
        let done = run(is, &["x"], options).unwrap();
        assert_eq!(done, Completion::fail("Must be otherReason"));

        let options = TestOptions::new().arg("none");
        assert!(run(is_not, &["male"], options.clone()).unwrap().outcome.is_pass());
        assert_eq!(
            run(is_not, &["none"], options).unwrap(),
            Completion::fail("Must not be none")
        );
    }

    #[test]
    fn test_is_compares_numbers_numerically() {
        let options = TestOptions::new().arg(5);
        assert!(run(is, &["5.0"], options.clone()).unwrap().outcome.is_pass());
        assert!(run(is, &["6"], options).unwrap().outcome.is_fail());
    }

    #[test]
    fn test_same_as_reads_other_field() {
        let form = FormValues::new().with("email", "a@b.com");
        let options = TestOptions::new().arg("email");

        let done = run_with(same_as, &["a@b.com"], options.clone(), &form).unwrap();
        assert!(done.outcome.is_pass());

        let done = run_with(same_as, &["a@c.com"], options, &form).unwrap();
        assert_eq!(done, Completion::fail("Must be the same as: email"));
    }

    #[test]
    fn test_same_as_missing_target_fails() {
        let done = run(same_as, &[""], TestOptions::new().arg("email")).unwrap();
        assert!(done.outcome.is_fail());
    }
}
