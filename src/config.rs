//! Character-set configuration.

use serde::{Deserialize, Serialize};

use crate::RandomString;

/// Character-set selection for configuration-driven callers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[serde(deny_unknown_fields)]
pub enum Charset {
    /// The whole code-unit space
    Any,
    /// Alphabetic characters
    Alphabetic,
    /// Alphabetic and numeric characters
    Alphanumeric,
    /// Numeric characters
    Numeric,
    /// Printable ASCII
    Ascii,
    /// The characters of the provided string
    Custom {
        /// Characters to draw from, must be non-empty to generate anything
        chars: String,
    },
}

impl From<&Charset> for RandomString {
    fn from(charset: &Charset) -> Self {
        match charset {
            Charset::Any => RandomString::any(),
            Charset::Alphabetic => RandomString::alphabetic(),
            Charset::Alphanumeric => RandomString::alphanumeric(),
            Charset::Numeric => RandomString::numeric(),
            Charset::Ascii => RandomString::ascii(),
            Charset::Custom { chars } => RandomString::from_chars(chars),
        }
    }
}
