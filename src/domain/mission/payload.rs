//! Raw mission payload and lenient field coercion.
//!
//! Payloads arrive as loosely typed JSON: numbers may be strings, flags may be
//! `"yes"` or `1`, and any group or field may be missing. Each accessor here
//! returns the documented default instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Key of the mission-context group.
pub const MISSION_GROUP: &str = "mission";

/// Key of the health-history group.
pub const HISTORY_GROUP: &str = "history";

/// Raw request payload, kept verbatim so it can be echoed back.
///
/// ```json
/// {
///   "mission": { "mission_day": 42, "gravity": "microgravity", ... },
///   "history": { "cycle_irregularity_history": "moderate", ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPayload(Value);

impl RawPayload {
    /// Wraps an arbitrary JSON value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// An empty payload (`{}`); every field takes its default.
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Returns the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Mission-context fields.
    pub fn mission(&self) -> Section<'_> {
        self.section(MISSION_GROUP)
    }

    /// Health-history fields.
    pub fn history(&self) -> Section<'_> {
        self.section(HISTORY_GROUP)
    }

    fn section(&self, group: &'static str) -> Section<'_> {
        let fields = self
            .0
            .as_object()
            .and_then(|root| root.get(group))
            .and_then(Value::as_object);
        Section { group, fields }
    }
}

impl Default for RawPayload {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Read-only view over one payload group.
///
/// A group that is missing or is not a JSON object behaves as empty.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    group: &'static str,
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> Section<'a> {
    /// Returns the raw value of a field, treating `null` as absent.
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(field))
            .filter(|value| !value.is_null())
    }

    /// Returns true if the group carries no usable fields.
    pub fn is_empty(&self) -> bool {
        self.fields.map_or(true, Map::is_empty)
    }

    /// Integer field with fallback.
    pub fn int(&self, field: &str, default: i64) -> i64 {
        self.coerce(field, as_int).unwrap_or(default)
    }

    /// Float field with fallback.
    pub fn float(&self, field: &str, default: f64) -> f64 {
        self.coerce(field, as_float).unwrap_or(default)
    }

    /// Boolean field with fallback.
    pub fn flag(&self, field: &str, default: bool) -> bool {
        self.coerce(field, as_bool).unwrap_or(default)
    }

    /// String field, if present and actually a string.
    pub fn key(&self, field: &str) -> Option<&'a str> {
        self.coerce(field, Value::as_str)
    }

    fn coerce<T>(&self, field: &str, convert: impl FnOnce(&'a Value) -> Option<T>) -> Option<T> {
        let value = self.get(field)?;
        let converted = convert(value);
        if converted.is_none() {
            debug!(group = self.group, field, value = %value, "Unusable payload value, using default");
        }
        converted
    }
}

/// Coerces a JSON value to an integer.
///
/// Accepts integers, finite floats (truncated toward zero), booleans and
/// trimmed integer strings. Integer strings beyond the `i64` range saturate.
pub fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => parse_int(s.trim()),
        _ => None,
    }
}

fn parse_int(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if s.starts_with('-') { i64::MIN } else { i64::MAX })
}

/// Coerces a JSON value to a float.
///
/// Accepts numbers, booleans and trimmed numeric strings, including
/// `nan` and `inf` spellings. Non-finite values pass through and are
/// clamped by the caller.
pub fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerces a JSON value to a boolean.
///
/// Strings: `true/yes/y/1` and `false/no/n/0`, case-insensitive.
/// Numbers: non-zero is true.
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
