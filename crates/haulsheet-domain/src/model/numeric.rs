//! Numeric form fields
//!
//! Amounts are typed by hand, so the raw text is kept as entered and
//! only coerced to a number when totals are computed.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric input holding the text exactly as entered
#[derive(Debug, Clone, PartialEq)]
pub struct NumericField(String);

impl NumericField {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn from_value(value: f64) -> Self {
        Self(value.to_string())
    }

    /// Text as entered
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Numeric value; blank or unparsable input counts as zero
    pub fn value(&self) -> f64 {
        coerce(&self.0)
    }
}

impl Default for NumericField {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl From<f64> for NumericField {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

impl From<&str> for NumericField {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a field as `f64`, falling back to zero
pub fn coerce(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

impl Serialize for NumericField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumeric {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for NumericField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<RawNumeric>::deserialize(deserializer)?;
        Ok(match raw {
            Some(RawNumeric::Number(v)) => Self::from_value(v),
            Some(RawNumeric::Text(s)) => Self(s),
            None => Self(String::new()),
        })
    }
}
