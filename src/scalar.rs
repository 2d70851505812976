//! Validated scalar types for the schema boundary.
//!
//! The schema declares `ObjectId`, `DateISO`, and `JSONObject` as custom
//! scalars; these wrappers validate values on the way in instead of passing
//! them through untyped.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::json_type_name;

/// Scalar validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalarError {
    /// Not a 24-character hexadecimal object id.
    #[error("invalid ObjectId \"{0}\": must be 24 hexadecimal characters")]
    InvalidObjectId(String),

    /// Not an ISO-8601 timestamp.
    #[error("invalid DateISO: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    /// Not a JSON object.
    #[error("invalid JSONObject: got {actual}")]
    NotAnObject {
        /// JSON type of the rejected value.
        actual: &'static str,
    },
}

/// 24-character hexadecimal identifier, as carried by the `ObjectId` scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// Validate and wrap a raw id.
    pub fn new(raw: impl Into<String>) -> Result<Self, ScalarError> {
        let raw = raw.into();
        if raw.len() == 24 && raw.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            Ok(Self(raw))
        } else {
            Err(ScalarError::InvalidObjectId(raw))
        }
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ObjectId {
    type Error = ScalarError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl FromStr for ObjectId {
    type Err = ScalarError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::new(raw)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated ISO-8601 timestamp, as carried by the `DateISO` scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateIso(pub DateTime<FixedOffset>);

impl DateIso {
    /// Parse and validate an ISO-8601 date string.
    pub fn parse(raw: &str) -> Result<Self, ScalarError> {
        Ok(Self(DateTime::parse_from_rfc3339(raw)?))
    }
}

impl fmt::Display for DateIso {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

/// Key-ordered object payload, as carried by the `JSONObject` scalar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonObject(pub serde_json::Map<String, serde_json::Value>);

impl JsonObject {
    /// Accept a JSON value known to be an object; reject anything else.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ScalarError> {
        match value {
            serde_json::Value::Object(map) => Ok(Self(map)),
            other => Err(ScalarError::NotAnObject {
                actual: json_type_name(&other),
            }),
        }
    }
}
