//! Domain Value Objects
//!
//! Immutable value types for the problems domain.

use serde::Serialize;
use std::fmt;

/// Largest integer a JSON number carries without precision loss (2^53 - 1)
const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Caller-supplied problem number
///
/// Always a positive integer. Unique across the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProblemNo(i64);

impl ProblemNo {
    pub fn new(value: i64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Coerce form or JSON text into a problem number.
    ///
    /// Accepts integers and integral decimals ("12", " 12 ", "12.0", "1e3").
    /// Zero, negatives, fractions, non-numeric text and anything above
    /// 2^53 - 1 yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(value) = raw.parse::<i64>() {
            return (value <= MAX_SAFE_INTEGER).then_some(value).and_then(Self::new);
        }

        // Past the safe range the decimal may already have been rounded
        let value = raw.parse::<f64>().ok()?;
        if !value.is_finite() || value.fract() != 0.0 || value > MAX_SAFE_INTEGER as f64 {
            return None;
        }
        Self::new(value as i64)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProblemNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role asserted for the caller of an admin-gated route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallerRole {
    #[default]
    Viewer,
    Admin,
}

impl CallerRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            CallerRole::Viewer => "viewer",
            CallerRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, CallerRole::Admin)
    }
}

impl fmt::Display for CallerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_no_must_be_positive() {
        assert!(ProblemNo::new(1).is_some());
        assert!(ProblemNo::new(0).is_none());
        assert!(ProblemNo::new(-4).is_none());
    }

    #[test]
    fn test_parse_accepts_integral_text() {
        assert_eq!(ProblemNo::parse("42").map(|n| n.value()), Some(42));
        assert_eq!(ProblemNo::parse("  7 ").map(|n| n.value()), Some(7));
        assert_eq!(ProblemNo::parse("12.0").map(|n| n.value()), Some(12));
        assert_eq!(ProblemNo::parse("1e3").map(|n| n.value()), Some(1000));
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert!(ProblemNo::parse("").is_none());
        assert!(ProblemNo::parse("   ").is_none());
        assert!(ProblemNo::parse("abc").is_none());
        assert!(ProblemNo::parse("1.5").is_none());
        assert!(ProblemNo::parse("0").is_none());
        assert!(ProblemNo::parse("-3").is_none());
        assert!(ProblemNo::parse("NaN").is_none());
        assert!(ProblemNo::parse("inf").is_none());
        assert!(ProblemNo::parse("1e300").is_none());
    }

    #[test]
    fn test_parse_stays_within_exact_json_range() {
        assert_eq!(
            ProblemNo::parse("9007199254740991").map(|n| n.value()),
            Some(9_007_199_254_740_991)
        );
        assert!(ProblemNo::parse("9007199254740992").is_none());
        assert!(ProblemNo::parse("9007199254740993").is_none());
        assert!(ProblemNo::parse("9007199254740993.0").is_none());
        assert!(ProblemNo::parse("9223372036854775807").is_none());
    }

    #[test]
    fn test_caller_role() {
        assert!(CallerRole::Admin.is_admin());
        assert!(!CallerRole::Viewer.is_admin());
        assert_eq!(CallerRole::default(), CallerRole::Viewer);
        assert_eq!(CallerRole::Admin.to_string(), "admin");
    }
}
