//! SEG-Y binary decoding.
//!
//! This module reads the binary file header and the 240-byte trace headers of a
//! SEG-Y file. Trace sample data is skipped, never read.

mod fields;
mod ibm;
mod reader;

#[cfg(test)]
pub(crate) mod testing;

pub use fields::{FieldSpec, TraceField};
pub use ibm::{ibm_to_f32, ibm_to_ieee};
pub use reader::SegyReader;

/// Size of the textual (EBCDIC/ASCII) file header.
pub const TEXT_HEADER_LEN: u64 = 3200;
/// Size of the binary file header.
pub const BINARY_HEADER_LEN: usize = 400;
/// Offset of the first trace record.
pub const FIRST_TRACE_OFFSET: u64 = TEXT_HEADER_LEN + BINARY_HEADER_LEN as u64;
/// Size of each trace header.
pub const TRACE_HEADER_LEN: usize = 240;
/// Bytes per sample; all sample formats are assumed to be 32-bit.
pub const SAMPLE_LEN: usize = 4;
