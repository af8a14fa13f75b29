use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single numeric leaf of a [`FinancialEntry`](super::FinancialEntry).
///
/// Input that cannot be read as a number is not rejected. It is kept
/// verbatim as [`FieldValue::NotANumber`] and poisons every total it
/// takes part in, so the form can keep showing what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Number(Decimal),
    NotANumber(String),
}

impl FieldValue {
    /// Parses user input.
    ///
    /// Whitespace is trimmed and `,` thousands separators are removed.
    /// Scientific notation (`1e5`) is accepted. Empty input and `_` digit
    /// separators are not numbers.
    pub fn parse(input: &str) -> Self {
        let normalized = normalize_numeric_input(input);
        if normalized.is_empty() || normalized.contains('_') {
            tracing::debug!(input = %input, "non-numeric field input");
            return Self::NotANumber(input.to_string());
        }

        match Decimal::from_str(&normalized).or_else(|_| Decimal::from_scientific(&normalized)) {
            Ok(value) => Self::Number(value),
            Err(e) => {
                tracing::debug!(input = %input, "non-numeric field input: {}", e);
                Self::NotANumber(input.to_string())
            }
        }
    }

    /// The numeric value, or `None` when the input was not a number.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(*value),
            Self::NotANumber(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Number(Decimal::ZERO)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

/// Text suitable for putting back into an input box.
impl fmt::Display for FieldValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value.normalize()),
            Self::NotANumber(raw) => write!(f, "{raw}"),
        }
    }
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_numeric_input(s: &str) -> String {
    s.trim().replace(',', "")
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => Serialize::serialize(value, serializer),
            Self::NotANumber(raw) => serializer.serialize_str(raw),
        }
    }
}

/// Stored records may carry numbers or numeric strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldValue {
    Number(Decimal),
    Text(String),
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawFieldValue::deserialize(deserializer)? {
            RawFieldValue::Number(value) => Self::Number(value),
            RawFieldValue::Text(text) => Self::parse(&text),
        })
    }
}
