//! Numeric tests: `isNumber`, `min`, `max`, `range`
//!
//! Values are coerced with [`to_number`]. A value that is not numeric never
//! fails a bound test; pair bounds with `isNumber` to reject it.

use crate::check::{every_value, number_arg, required_arg, CheckInput, CheckResult};
use rusty_forms_types::{to_number, ConfigError};

/// Every value must be a number
pub fn is_number(input: CheckInput<'_>) -> CheckResult {
    let message = input
        .options
        .message_or_else(|| "Must be a number.".to_string());

    Ok(every_value(input.values, message, |value| {
        !value.is_empty() && to_number(value).is_some()
    }))
}

/// Every numeric value must be at least `arg`
pub fn min(input: CheckInput<'_>) -> CheckResult {
    let bound = number_arg(input.options, "min")?;
    let message = input.options.message_or_else(|| {
        format!("The value must be at least {}.", input.options.arg_display())
    });

    Ok(every_value(input.values, message, |value| {
        to_number(value).map_or(true, |n| n >= bound)
    }))
}

/// Every numeric value must be no more than `arg`
pub fn max(input: CheckInput<'_>) -> CheckResult {
    let bound = number_arg(input.options, "max")?;
    let message = input.options.message_or_else(|| {
        format!("The value must be less than {}.", input.options.arg_display())
    });

    Ok(every_value(input.values, message, |value| {
        to_number(value).map_or(true, |n| n <= bound)
    }))
}

/// Bounds of a `lo..hi` range argument, always returned smallest first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBounds {
    pub low: f64,
    pub high: f64,
}

impl RangeBounds {
    /// Parse `"lo..hi"`; the operands may be given in either order.
    /// A blank operand counts as zero.
    pub fn parse(arg: &str) -> Result<Self, ConfigError> {
        let malformed = || ConfigError::MalformedRange(arg.to_string());

        let (first, second) = operands(arg).ok_or_else(malformed)?;
        let first = to_number(first).ok_or_else(malformed)?;
        let second = to_number(second).ok_or_else(malformed)?;

        Ok(Self {
            low: first.min(second),
            high: first.max(second),
        })
    }

    pub fn contains(&self, n: f64) -> bool {
        n >= self.low && n <= self.high
    }
}

/// The first two `..`-separated operands; extra operands are ignored
fn operands(arg: &str) -> Option<(&str, &str)> {
    let mut parts = arg.split("..");
    Some((parts.next()?, parts.next()?))
}

/// Every numeric value must fall within `arg` (`"lo..hi"`)
pub fn range(input: CheckInput<'_>) -> CheckResult {
    let arg = required_arg(input.options, "range")?;
    let spec = arg.as_text().ok_or_else(|| ConfigError::InvalidArgument {
        test: "range",
        arg: arg.to_string(),
    })?;
    let bounds = RangeBounds::parse(&spec)?;

    let message = input.options.message_or_else(|| {
        let (first, second) = operands(&spec).unwrap_or_default();
        format!("The value must be {first} or greater, and less than {second}.")
    });

    Ok(every_value(input.values, message, |value| {
        to_number(value).map_or(true, |n| bounds.contains(n))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rusty_forms_types::{FormValues, Outcome, TestOptions};

    fn run(
        test: fn(CheckInput<'_>) -> CheckResult,
        values: &[&str],
        options: TestOptions,
    ) -> CheckResult {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let form = FormValues::new();
        test(CheckInput {
            values: &values,
            options: &options,
            form: &form,
        })
    }

    #[rstest]
    #[case(&["25"], Outcome::Pass)]
    #[case(&["-2.5e1"], Outcome::Pass)]
    #[case(&["0b101", "0o17", "0x1F"], Outcome::Pass)]
    #[case(&[""], Outcome::Fail)]
    #[case(&["twelve"], Outcome::Fail)]
    #[case(&["1", "x"], Outcome::Fail)]
    fn test_is_number(#[case] values: &[&str], #[case] expected: Outcome) {
        let done = run(is_number, values, TestOptions::new()).unwrap();
        assert_eq!(done.outcome, expected);
        assert_eq!(done.message, "Must be a number.");
    }

    #[test]
    fn test_min_and_max() {
        let at_least_18 = TestOptions::new().arg("18");
        assert!(run(min, &["18"], at_least_18.clone()).unwrap().outcome.is_pass());
        let done = run(min, &["17"], at_least_18).unwrap();
        assert!(done.outcome.is_fail());
        assert_eq!(done.message, "The value must be at least 18.");

        let at_most_100 = TestOptions::new().arg(100);
        assert!(run(max, &["100"], at_most_100.clone()).unwrap().outcome.is_pass());
        let done = run(max, &["100.5"], at_most_100).unwrap();
        assert_eq!(done.message, "The value must be less than 100.");
    }

    #[test]
    fn test_bounds_ignore_non_numeric_values() {
        let options = TestOptions::new().arg(10);
        assert!(run(min, &["abc"], options).unwrap().outcome.is_pass());
    }

    #[test]
    fn test_bound_without_arg_is_config_error() {
        let err = run(min, &["1"], TestOptions::new()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingArgument { test: "min" }));

        let err = run(max, &["1"], TestOptions::new().arg("lots")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidArgument { test: "max", .. }));
    }

    #[rstest]
    #[case("18..118")]
    #[case("118..18")]
    fn test_range_bounds_in_either_order(#[case] arg: &str) {
        let bounds = RangeBounds::parse(arg).unwrap();
        assert_eq!(bounds, RangeBounds { low: 18.0, high: 118.0 });

        let options = TestOptions::new().arg(arg);
        assert!(run(range, &["25"], options.clone()).unwrap().outcome.is_pass());
        assert!(run(range, &["18"], options.clone()).unwrap().outcome.is_pass());
        assert!(run(range, &["200"], options.clone()).unwrap().outcome.is_fail());
        assert!(run(range, &["17"], options).unwrap().outcome.is_fail());
    }

    #[test]
    fn test_range_message_keeps_written_order() {
        let done = run(range, &["5"], TestOptions::new().arg("118..18")).unwrap();
        assert_eq!(
            done.message,
            "The value must be 118 or greater, and less than 18."
        );
    }

    #[rstest]
    #[case("18")]
    #[case("a..b")]
    #[case("")]
    fn test_malformed_range(#[case] arg: &str) {
        let err = run(range, &["5"], TestOptions::new().arg(arg)).unwrap_err();
        assert!(matches!(err, ConfigError::MalformedRange(_)));
    }

    #[rstest]
    #[case("1", true)]
    #[case("2", true)]
    #[case("3", false)]
    fn test_range_uses_first_two_operands(#[case] value: &str, #[case] passes: bool) {
        let done = run(range, &[value], TestOptions::new().arg("1..2..3")).unwrap();
        assert_eq!(done.outcome.is_pass(), passes);
        assert_eq!(done.message, "The value must be 1 or greater, and less than 2.");
    }

    #[test]
    fn test_range_blank_operand_is_zero() {
        let bounds = RangeBounds::parse("..10").unwrap();
        assert_eq!(bounds, RangeBounds { low: 0.0, high: 10.0 });
    }
}
