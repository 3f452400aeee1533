//! Aggregation of trace headers into location tables and ranges.
//!
//! One [`ScanAggregator`] lives for a whole run. Each file contributes a
//! [`FileScan`]; nothing is merged across files.

mod aggregator;
mod location;
mod ranges;
mod record;

pub use aggregator::{FileScan, FileSummary, ScanAggregator};
pub use location::{CdpEntry, Coord, LocationEntry, LocationTable, ReceiverEntry, SourceEntry};
pub use ranges::{FieldRange, HeaderRanges, RangeField};
pub use record::RawTraceRecord;
