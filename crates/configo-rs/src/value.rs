//! Conversion of raw string values into typed accessor results.

/// A type that can be read out of a raw config value.
pub trait ConfigValue: Sized {
    /// Human-readable type name used in `TypeMismatch` errors.
    const TYPE_NAME: &'static str;

    /// Parse the raw value, returning `None` when it does not fit the type.
    fn parse_value(raw: &str) -> Option<Self>;
}

impl ConfigValue for String {
    const TYPE_NAME: &'static str = "string";

    fn parse_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl ConfigValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn parse_value(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl ConfigValue for u64 {
    const TYPE_NAME: &'static str = "unsigned integer";

    fn parse_value(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl ConfigValue for f64 {
    const TYPE_NAME: &'static str = "float";

    /// Out-of-range input such as `1e400` is rejected rather than read as infinity.
    fn parse_value(raw: &str) -> Option<Self> {
        raw.parse()
            .ok()
            .filter(|value: &f64| value.is_finite() || is_non_finite_literal(raw))
    }
}

/// True when the text spells infinity or NaN, with an optional sign.
fn is_non_finite_literal(raw: &str) -> bool {
    let unsigned = raw
        .strip_prefix('+')
        .or_else(|| raw.strip_prefix('-'))
        .unwrap_or(raw);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|literal| unsigned.eq_ignore_ascii_case(literal))
}

impl ConfigValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    /// Accepts `true`/`false`/`t`/`f` in any case, plus `1`/`0`.
    fn parse_value(raw: &str) -> Option<Self> {
        if raw == "1" {
            return Some(true);
        }
        if raw == "0" {
            return Some(false);
        }
        if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("t") {
            return Some(true);
        }
        if raw.eq_ignore_ascii_case("false") || raw.eq_ignore_ascii_case("f") {
            return Some(false);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigValue;

    #[test]
    fn bool_accepts_documented_literals() {
        for raw in ["true", "TRUE", "True", "t", "T", "1"] {
            assert_eq!(bool::parse_value(raw), Some(true), "{raw}");
        }
        for raw in ["false", "FALSE", "False", "f", "F", "0"] {
            assert_eq!(bool::parse_value(raw), Some(false), "{raw}");
        }
        for raw in ["yes", "no", "", "2", "truthy"] {
            assert_eq!(bool::parse_value(raw), None, "{raw}");
        }
    }

    #[test]
    fn numeric_parsing_follows_type_ranges() {
        assert_eq!(i64::parse_value("-42"), Some(-42));
        assert_eq!(i64::parse_value("9223372036854775808"), None);
        assert_eq!(u64::parse_value("18446744073709551615"), Some(u64::MAX));
        assert_eq!(u64::parse_value("-1"), None);
        assert_eq!(f64::parse_value("1e3"), Some(1000.0));
        assert_eq!(f64::parse_value("abc"), None);
        assert_eq!(i64::parse_value("4.2"), None);
    }

    #[test]
    fn float_rejects_out_of_range_exponents() {
        assert_eq!(f64::parse_value("1e400"), None);
        assert_eq!(f64::parse_value("-1e400"), None);
        assert_eq!(f64::parse_value("1e308"), Some(1e308));
    }

    #[test]
    fn float_accepts_spelled_out_infinity_and_nan() {
        assert_eq!(f64::parse_value("inf"), Some(f64::INFINITY));
        assert_eq!(f64::parse_value("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(f64::parse_value("NaN").is_some_and(f64::is_nan));
    }
}
