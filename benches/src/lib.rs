//! Criterion benchmarks for the JSON mapping strategy comparison.
//!
//! The fixed-iteration driver (`mapbench-cli`) reports single wall-clock
//! numbers; this crate measures the same three strategies with criterion's
//! statistics instead.
//!
//! ## Running Benchmarks
//!
//! Run all benchmarks:
//! ```bash
//! cargo bench --package mapbench-benches
//! ```
//!
//! Run with fewer samples for quick validation:
//! ```bash
//! cargo bench --package mapbench-benches -- --sample-size 10
//! ```
//!
//! Results are written to `target/criterion/` with HTML reports.
//!
//! ## Benchmark Groups
//!
//! ### Strategies (`benches/strategies.rs`)
//! - `tree_mapping`: parse to a tree, then map through the serde derive
//! - `manual_extraction`: parse to a tree, then read members out by hand
//! - `binary_codec`: bincode encode, decode, and full round-trip

// This is a benchmark-only crate, no library code needed.
