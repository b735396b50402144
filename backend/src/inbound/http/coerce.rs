//! Lenient reading of scalar body fields.
//!
//! Form posts deliver every field as text while JSON clients send numbers and
//! booleans. [`ScalarText`] accepts any scalar and keeps its textual form, so
//! handlers see the same input either way. Objects and arrays are rejected.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// A string, number, or boolean body field rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarText(String);

impl ScalarText {
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Flatten an optional field to its text, empty when absent.
pub(crate) fn text_or_empty(field: Option<ScalarText>) -> String {
    field.map(ScalarText::into_string).unwrap_or_default()
}

/// Flatten an optional field to its text.
pub(crate) fn text(field: Option<ScalarText>) -> Option<String> {
    field.map(ScalarText::into_string)
}

struct ScalarTextVisitor;

impl Visitor<'_> for ScalarTextVisitor {
    type Value = ScalarText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, or boolean")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<ScalarText, E> {
        Ok(ScalarText(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<ScalarText, E> {
        Ok(ScalarText(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<ScalarText, E> {
        Ok(ScalarText(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<ScalarText, E> {
        Ok(ScalarText(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<ScalarText, E> {
        Ok(ScalarText(value.to_string()))
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<ScalarText, E> {
        Ok(ScalarText(value.to_string()))
    }
}

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarTextVisitor)
    }
}
