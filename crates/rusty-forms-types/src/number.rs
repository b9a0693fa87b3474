//! Numeric coercion for form values
//!
//! Form values arrive as text. Numeric tests coerce them the way a browser
//! would: surrounding whitespace is ignored, an empty string counts as zero,
//! and anything that is not a numeric literal is not-a-number (`None`).

use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("decimal literal pattern")
});

/// Coerce a form value to a number, or `None` when it is not numeric
pub fn to_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    if let Some(n) = radix_literal(s) {
        return n;
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if DECIMAL.is_match(s) {
        s.parse().ok()
    } else {
        None
    }
}

/// `0x`, `0o` and `0b` integer literals. `None` when `s` has no such prefix.
fn radix_literal(s: &str) -> Option<Option<f64>> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.starts_with('+') {
        return Some(None);
    }
    Some(u64::from_str_radix(digits, radix).ok().map(|n| n as f64))
}
