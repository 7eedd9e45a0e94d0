//! Query-parameter values and sanitization.
//!
//! Resource methods assemble their optional filters as `(name, Option<ParamValue>)`
//! pairs and run them through [`discard_null_and_empty_values`] before handing
//! them to the request engine. The transport layer never sees a null or
//! empty-string parameter.

use std::fmt;

/// A scalar query-parameter value.
///
/// Covers the value shapes the Maropost API accepts in query strings.
/// Booleans render as `true`/`false`; numbers render in their canonical
/// decimal form.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// A string value.
    Str(String),
    /// A signed integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Removes every null and empty-string entry from a parameter list.
///
/// `None` values and `Str("")` values are discarded; everything else is
/// preserved and rendered to its query-string form. Falsy-but-meaningful
/// values survive: `false` renders as `"false"` and `0` as `"0"` (the
/// `unique` report filter relies on this).
///
/// Insertion order is preserved, so parameters appear in the query string in
/// the order the caller listed them.
///
/// # Example
///
/// ```rust
/// use maropost_api::api::{discard_null_and_empty_values, ParamValue};
///
/// let params = discard_null_and_empty_values(vec![
///     ("email", None),
///     ("fields", Some(ParamValue::from(""))),
///     ("unique", Some(ParamValue::from(false))),
///     ("page", Some(ParamValue::from(1_i64))),
/// ]);
///
/// assert_eq!(
///     params,
///     vec![
///         ("unique".to_string(), "false".to_string()),
///         ("page".to_string(), "1".to_string()),
///     ]
/// );
/// ```
#[must_use]
pub fn discard_null_and_empty_values(
    params: Vec<(&str, Option<ParamValue>)>,
) -> Vec<(String, String)> {
    params
        .into_iter()
        .filter_map(|(key, value)| match value {
            None => None,
            Some(ParamValue::Str(s)) if s.is_empty() => None,
            Some(value) => Some((key.to_string(), value.to_string())),
        })
        .collect()
}
