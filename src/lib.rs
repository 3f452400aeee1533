//! segyscan - SEG-Y trace header scanner.
//!
//! segyscan reads the trace headers of one or more SEG-Y files and reduces
//! them to deduplicated source, receiver and CDP location tables, per-field
//! value ranges, and scatter maps of the three location domains.
//!
//! # Features
//!
//! - Big-endian SEG-Y binary and trace header decoding
//! - Location tables deduplicated on (X, Y), first occurrence wins
//! - Min/max ranges of fourteen trace header fields per file
//! - Plain-text tables and maps, plus an interactive terminal map viewer
//! - Damaged files are skipped without aborting the run
//!
//! # Example
//!
//! ```ignore
//! use segyscan::scan::ScanAggregator;
//! use segyscan::segy::SegyReader;
//! use std::path::Path;
//!
//! let reader = SegyReader::open(Path::new("line1.sgy"))?;
//! let mut aggregator = ScanAggregator::new();
//! let scan = aggregator.ingest_file(&reader, "line1")?;
//! println!("{} unique sources", scan.sources.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod discovery;
pub mod error;
pub mod plot;
pub mod progress;
pub mod report;
pub mod scan;
pub mod scanner;
pub mod segy;
pub mod ui;

pub use config::{Domain, ScanOptions};
pub use error::{Result, SegyScanError};
pub use scanner::{ScanOutcome, Scanner, SkippedFile};
