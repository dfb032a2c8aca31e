//! Benchmark driver comparing three ways of turning a fixed JSON document
//! into a [`MessageRecord`]:
//!
//! 1. **Tree mapping** — parse into a `serde_json` tree, then let the serde
//!    derive map the tree onto the record.
//! 2. **Manual extraction** — parse into the tree, then read each named
//!    member out explicitly.
//! 3. **Binary decode** — encode a valid record into a bincode buffer once,
//!    then decode that same buffer repeatedly.
//!
//! Each strategy runs one million iterations on a single thread, strictly in
//! sequence. The elapsed time per phase and the encoded payload size go to
//! stdout; the record each phase last produced is checked against fixed
//! expectations, and any violation aborts the run with a failing exit status.
//!
//! ## Running
//!
//! ```bash
//! cargo run --release -p mapbench-cli
//! ```
//!
//! There are no flags. `RUST_LOG=trace` surfaces per-phase narration through
//! `tracing` without touching the measured loops' semantics.

use mapbench_core::{MapError, MessageRecord, codec, mapping};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// The document every strategy decodes.
const FIXTURE_JSON: &str = r#"{"type":"clist","message":"msg","date":1395388393205,"s_array":["v1","v2","v3"],"i_array":[1,2,3]}"#;

/// Timed iterations per strategy.
const ITERATIONS: u32 = 1_000_000;

/// Untimed iterations before the first timed phase.
const WARMUP_ITERATIONS: u32 = 1_000;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    run(ITERATIONS)?;
    Ok(())
}

/// Execute the warm-up and the three timed phases, reporting to stdout.
fn run(iterations: u32) -> Result<(), MapError> {
    println!("Warming up ({WARMUP_ITERATIONS} iterations)...");
    warm_up(WARMUP_ITERATIONS)?;
    println!("Starting timed run: {iterations} iterations per strategy");

    let (elapsed, record) = time_tree_mapping(iterations)?;
    println!("tree mapping:      {} ms", elapsed.as_millis());
    verify(&record)?;

    let (elapsed, record) = time_manual_extraction(iterations)?;
    println!("manual extraction: {} ms", elapsed.as_millis());
    verify(&record)?;

    // Encode once, outside the timed loop; only decoding is measured.
    let bytes = codec::encode(&record)?;
    println!("encoded payload:   {} bytes", bytes.len());

    let (elapsed, record) = time_binary_decode(&bytes, iterations)?;
    println!("binary decode:     {} ms", elapsed.as_millis());
    verify(&record)?;

    Ok(())
}

/// Untimed tree-mapping iterations to stabilize caches and branch predictors.
fn warm_up(iterations: u32) -> Result<(), MapError> {
    for _ in 0..iterations {
        let tree = mapping::parse_tree(FIXTURE_JSON)?;
        let _ = mapping::record_from_tree(tree)?;
    }
    Ok(())
}

/// Phase 1: parse to a tree, then map through the serde derive.
fn time_tree_mapping(iterations: u32) -> Result<(Duration, MessageRecord), MapError> {
    debug!(iterations, "tree mapping phase");
    let start = Instant::now();
    let mut last = None;
    for i in 0..iterations {
        let tree = mapping::parse_tree(FIXTURE_JSON)?;
        last = Some(mapping::record_from_tree(tree)?);
        if i % 10_000 == 0 {
            trace!(iteration = i, "tree mapping");
        }
    }
    finish(start, last)
}

/// Phase 2: parse to a tree, then read each member out by hand.
fn time_manual_extraction(iterations: u32) -> Result<(Duration, MessageRecord), MapError> {
    debug!(iterations, "manual extraction phase");
    let start = Instant::now();
    let mut last = None;
    for i in 0..iterations {
        let tree = mapping::parse_tree(FIXTURE_JSON)?;
        last = Some(mapping::extract_record(&tree)?);
        if i % 10_000 == 0 {
            trace!(iteration = i, "manual extraction");
        }
    }
    finish(start, last)
}

/// Phase 3: decode the same pre-encoded buffer over and over.
fn time_binary_decode(
    bytes: &[u8],
    iterations: u32,
) -> Result<(Duration, MessageRecord), MapError> {
    debug!(iterations, payload = bytes.len(), "binary decode phase");
    let start = Instant::now();
    let mut last = None;
    for i in 0..iterations {
        last = Some(codec::decode(bytes)?);
        if i % 10_000 == 0 {
            trace!(iteration = i, "binary decode");
        }
    }
    finish(start, last)
}

fn finish(
    start: Instant,
    last: Option<MessageRecord>,
) -> Result<(Duration, MessageRecord), MapError> {
    let elapsed = start.elapsed();
    let record = last.ok_or(MapError::Invariant {
        check: "phase produced a record",
        detail: "iteration count was zero".to_string(),
    })?;
    Ok((elapsed, record))
}

/// Check the record a phase last produced against the fixed expectations.
fn verify(record: &MessageRecord) -> Result<(), MapError> {
    if record.kind != "clist" {
        return Err(invariant("kind is \"clist\"", &record.kind));
    }
    if record.message != "msg" {
        return Err(invariant("message is \"msg\"", &record.message));
    }
    if record.epoch_millis() != 1_395_388_393_205 {
        return Err(invariant(
            "date is epoch millisecond 1395388393205",
            record.epoch_millis(),
        ));
    }
    if record.int_values.len() != 3 {
        return Err(invariant(
            "int values hold exactly 3 elements",
            record.int_values.len(),
        ));
    }
    if record.int_values[0] != 1 {
        return Err(invariant("first int value is 1", record.int_values[0]));
    }
    if record.string_values.len() != 3 {
        return Err(invariant(
            "string values hold exactly 3 elements",
            record.string_values.len(),
        ));
    }
    if !record.string_values.contains("v1") {
        return Err(invariant("string values contain \"v1\"", "absent"));
    }
    Ok(())
}

fn invariant(check: &'static str, found: impl std::fmt::Debug) -> MapError {
    MapError::Invariant {
        check,
        detail: format!("found {found:?}"),
    }
}
