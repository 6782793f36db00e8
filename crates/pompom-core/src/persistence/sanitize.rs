//! Field-level sanitizers for untrusted save input

use crate::stats::clamp_stat;
use indexmap::IndexSet;
use serde_json::Value;

/// Fallback for a stat that is missing or not a finite number
pub(crate) const STAT_FALLBACK: f64 = 50.0;

/// A finite number, if the value is one
pub(crate) fn finite(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|v| v.is_finite())
}

/// A stat clamped into range, or the fallback
pub(crate) fn stat(value: Option<&Value>) -> f64 {
    finite(value).map(clamp_stat).unwrap_or(STAT_FALLBACK)
}

/// A non-negative whole number (floored), if the value is one
pub(crate) fn whole(value: Option<&Value>) -> Option<u64> {
    finite(value).filter(|v| *v >= 0.0).map(|v| v.floor() as u64)
}

/// A non-negative whole number, or zero
pub(crate) fn count(value: Option<&Value>) -> u64 {
    whole(value).unwrap_or(0)
}

pub(crate) fn flag(value: Option<&Value>, default: bool) -> bool {
    value.and_then(Value::as_bool).unwrap_or(default)
}

/// The strings of an array, deduplicated in order. `None` when the value is
/// not an array.
pub(crate) fn string_set(value: Option<&Value>) -> Option<IndexSet<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}

/// A string field parsed with `parse`
pub(crate) fn parsed<T>(value: Option<&Value>, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
    value.and_then(Value::as_str).and_then(parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stat() {
        assert_eq!(stat(Some(&json!(150))), 100.0);
        assert_eq!(stat(Some(&json!(-50))), 0.0);
        assert_eq!(stat(Some(&json!(42.5))), 42.5);
        assert_eq!(stat(Some(&json!("NaN"))), STAT_FALLBACK);
        assert_eq!(stat(Some(&Value::Null)), STAT_FALLBACK);
        assert_eq!(stat(None), STAT_FALLBACK);
    }

    #[test]
    fn test_count() {
        assert_eq!(count(Some(&json!(-100))), 0);
        assert_eq!(count(Some(&json!(7.9))), 7);
        assert_eq!(count(Some(&json!("NaN"))), 0);
        assert_eq!(count(Some(&json!(999999999999999u64))), 999999999999999);
        assert_eq!(whole(Some(&json!(-1))), None);
    }

    #[test]
    fn test_string_set() {
        let set = string_set(Some(&json!(["A", 1, "B", "A", null]))).unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(string_set(Some(&json!("A"))).is_none());
        assert!(string_set(None).is_none());
    }
}
