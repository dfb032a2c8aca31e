//! # mapbench-core
//!
//! Core building blocks for the JSON mapping benchmark:
//!
//! - **Record type**: [`MessageRecord`], the in-memory shape every strategy
//!   must produce
//! - **Mapping strategies**: derive-based tree-to-record mapping and manual
//!   field-by-field extraction over a `serde_json` tree
//! - **Binary codec**: bincode encode/decode for the round-trip strategy
//! - **Error handling**: unified [`MapError`] type with rich diagnostics
//!
//! The benchmark driver (`mapbench-cli`) and the criterion suite both build
//! on this crate; nothing here measures time itself.
//!
//! # Example
//!
//! ```rust
//! use mapbench_core::mapping;
//!
//! let json = r#"{"type":"clist","message":"msg","date":1395388393205,
//!                "s_array":["v1","v2","v3"],"i_array":[1,2,3]}"#;
//!
//! let tree = mapping::parse_tree(json).unwrap();
//! let record = mapping::record_from_tree(tree).unwrap();
//! assert_eq!(record.kind, "clist");
//! assert_eq!(record.int_values, [1, 2, 3]);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::unwrap_used)]

pub mod codec;
pub mod error;
pub mod mapping;
pub mod record;

// Re-export commonly used types at the crate root
pub use error::MapError;
pub use record::MessageRecord;
