//! Unified error handling for the benchmark crates.
//!
//! Every failure flows through a single [`MapError`] type. The benchmark has
//! no recovery path: its only input is a fixed, trusted literal, so errors
//! propagate straight to the driver, which renders a diagnostic report and
//! exits non-zero.
//!
//! The taxonomy mirrors the stages a record passes through:
//!
//! - [`MapError::Parse`] — the JSON text cannot be read into a tree
//! - [`MapError::Mapping`] — the derive-based converter cannot produce a
//!   record from the tree
//! - [`MapError::MissingField`] / [`MapError::FieldType`] — manual extraction
//!   found no such member, or a member of the wrong JSON type
//! - [`MapError::Codec`] — the binary round-trip cannot encode or decode
//! - [`MapError::Invariant`] — a produced record failed a post-phase check

use miette::Diagnostic;
use thiserror::Error;

/// Type alias for boxed errors that are Send + Sync.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The primary error type for the benchmark.
#[derive(Error, Diagnostic, Debug)]
pub enum MapError {
    /// Invalid JSON text could not be parsed into a tree.
    #[error("Parse error: {message}")]
    #[diagnostic(
        code(mapbench::parse_error),
        help("The benchmark input is a compile-time literal; a parse failure means the fixture itself is malformed")
    )]
    Parse {
        /// Human-readable error message.
        message: String,
        /// The underlying parse error, if available.
        #[source]
        source: Option<BoxError>,
    },

    /// The derive-based converter could not map the tree onto the record.
    #[error("Mapping error: {message}")]
    #[diagnostic(code(mapbench::mapping_error))]
    Mapping {
        /// Human-readable error message.
        message: String,
        /// The underlying conversion error, if available.
        #[source]
        source: Option<BoxError>,
    },

    /// Manual extraction found no member with the expected name.
    #[error("Missing field: {field}")]
    #[diagnostic(code(mapbench::missing_field))]
    MissingField {
        /// The member name that was looked up.
        field: &'static str,
    },

    /// Manual extraction found a member of the wrong JSON type.
    #[error("Field '{field}': expected {expected}, found {found}")]
    #[diagnostic(code(mapbench::field_type))]
    FieldType {
        /// The member name that was looked up.
        field: &'static str,
        /// The JSON type the extractor expected.
        expected: &'static str,
        /// What the tree actually held at that member.
        found: String,
    },

    /// The binary codec failed to encode or decode a record.
    #[error("Codec error: {message}")]
    #[diagnostic(
        code(mapbench::codec_error),
        help("Decode only accepts buffers produced by the matching encoder")
    )]
    Codec {
        /// Human-readable error message.
        message: String,
        /// The underlying codec error, if available.
        #[source]
        source: Option<BoxError>,
    },

    /// A produced record violated one of the post-phase checks.
    #[error("Invariant violated: {check}")]
    #[diagnostic(code(mapbench::invariant), severity(error))]
    Invariant {
        /// The check that failed, stated as the expectation.
        check: &'static str,
        /// What the record actually held.
        detail: String,
    },
}

impl MapError {
    /// Wrap a `serde_json` error from the text-to-tree step.
    #[must_use]
    pub fn parse(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Wrap a `serde_json` error from the tree-to-record step.
    #[must_use]
    pub fn mapping(err: serde_json::Error) -> Self {
        Self::Mapping {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Wrap a bincode error from either direction of the round-trip.
    #[must_use]
    pub fn codec(err: bincode::Error) -> Self {
        Self::Codec {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
