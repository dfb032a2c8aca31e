//! The record shape every mapping strategy must produce.
//!
//! One decoded message: a type label, a free-text body, an absolute
//! timestamp, a set of string values, and an ordered sequence of integers.
//! On the wire the timestamp is an integer count of milliseconds since the
//! Unix epoch and the collections are the `s_array`/`i_array` members.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One decoded message.
///
/// The derive-based mapping strategy reads this shape straight off a parsed
/// JSON tree; the manual strategy builds it field by field; the binary codec
/// round-trips it through bincode. All three must agree field for field.
///
/// Unknown members in the source document are ignored. A missing or empty
/// `s_array`/`i_array` decodes to an empty collection rather than a fault.
///
/// # Example
///
/// ```rust
/// use mapbench_core::MessageRecord;
/// use chrono::DateTime;
///
/// let date = DateTime::from_timestamp_millis(1_395_388_393_205).unwrap();
/// let record = MessageRecord::new("clist", "msg", date)
///     .string_values(["v1", "v2", "v3"])
///     .int_values([1, 2, 3]);
/// assert_eq!(record.int_values.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// The message type label (the `type` member on the wire).
    #[serde(rename = "type")]
    pub kind: String,
    /// The free-text message body.
    pub message: String,
    /// When the message was produced; epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
    /// Distinct string values; duplicates collapse, order is insignificant.
    #[serde(rename = "s_array", default)]
    pub string_values: HashSet<String>,
    /// Integer values in source-array order.
    #[serde(rename = "i_array", default)]
    pub int_values: Vec<i64>,
}

impl MessageRecord {
    /// Create a record with the given scalar fields and empty collections.
    #[must_use]
    pub fn new(kind: impl Into<String>, message: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            date,
            string_values: HashSet::new(),
            int_values: Vec::new(),
        }
    }

    /// Set the string values.
    #[must_use]
    pub fn string_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.string_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set the integer values.
    #[must_use]
    pub fn int_values(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.int_values = values.into_iter().collect();
        self
    }

    /// The timestamp as milliseconds since the Unix epoch.
    #[must_use]
    pub fn epoch_millis(&self) -> i64 {
        self.date.timestamp_millis()
    }
}
