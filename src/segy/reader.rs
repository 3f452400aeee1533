//! SEG-Y header reader.

use super::fields::{i16_table, i32_table, FieldSpec, TraceField};
use super::{BINARY_HEADER_LEN, FIRST_TRACE_OFFSET, SAMPLE_LEN, TEXT_HEADER_LEN, TRACE_HEADER_LEN};
use crate::error::{Result, SegyScanError};
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

/// Binary header offset of the sample interval in microseconds.
const SAMPLE_INTERVAL_OFFSET: usize = 16;
/// Binary header offset of the number of samples per trace.
const SAMPLE_COUNT_OFFSET: usize = 20;

/// Decoded SEG-Y file headers.
///
/// Opening a reader decodes the binary header and every trace header. The
/// sample block of each trace is seeked over, so memory use is
/// `240 * num_traces` bytes regardless of trace length.
#[derive(Debug)]
pub struct SegyReader {
    num_traces: usize,
    num_samples: usize,
    sample_interval_us: u16,
    trace_stride: usize,
    /// Trace headers back to back, `TRACE_HEADER_LEN` bytes each.
    headers: Vec<u8>,
}

impl SegyReader {
    /// Open and decode a SEG-Y file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SegyScanError::file_open(path.to_path_buf(), e))?;
        let reader = Self::from_reader(file)?;

        tracing::debug!(
            path = %path.display(),
            traces = reader.num_traces,
            samples = reader.num_samples,
            dt_us = reader.sample_interval_us,
            stride = reader.trace_stride,
            "Decoded SEG-Y headers"
        );

        Ok(reader)
    }

    /// Decode SEG-Y headers from any seekable source.
    pub fn from_reader<R: Read + Seek>(mut source: R) -> Result<Self> {
        let file_len = source.seek(SeekFrom::End(0))?;
        if file_len < FIRST_TRACE_OFFSET {
            return Err(SegyScanError::format(format!(
                "binary header truncated: file is {} bytes, need at least {}",
                file_len, FIRST_TRACE_OFFSET
            )));
        }

        let mut binary_header = [0u8; BINARY_HEADER_LEN];
        source.seek(SeekFrom::Start(TEXT_HEADER_LEN))?;
        source.read_exact(&mut binary_header).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                SegyScanError::format("failed to read binary header")
            } else {
                SegyScanError::Io(e)
            }
        })?;

        let sample_interval_us = read_u16(&binary_header, SAMPLE_INTERVAL_OFFSET);
        if sample_interval_us == 0 {
            return Err(SegyScanError::format(
                "sample interval (dt) is zero in binary header",
            ));
        }

        let num_samples = usize::from(read_u16(&binary_header, SAMPLE_COUNT_OFFSET));
        if num_samples == 0 {
            return Err(SegyScanError::format(
                "number of samples per trace is zero in binary header",
            ));
        }

        let trace_stride = TRACE_HEADER_LEN + num_samples * SAMPLE_LEN;
        let num_traces = ((file_len - FIRST_TRACE_OFFSET) / trace_stride as u64) as usize;
        if num_traces == 0 {
            return Err(SegyScanError::format("no traces found in SEG-Y file"));
        }

        let mut headers = vec![0u8; num_traces * TRACE_HEADER_LEN];
        for (i, header) in headers.chunks_exact_mut(TRACE_HEADER_LEN).enumerate() {
            let offset = FIRST_TRACE_OFFSET + (i * trace_stride) as u64;
            source.seek(SeekFrom::Start(offset))?;
            source.read_exact(header)?;
        }

        Ok(Self {
            num_traces,
            num_samples,
            sample_interval_us,
            trace_stride,
            headers,
        })
    }

    /// Number of traces in the file.
    pub fn num_traces(&self) -> usize {
        self.num_traces
    }

    /// Number of samples per trace.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Sample interval in seconds.
    pub fn sample_interval(&self) -> f64 {
        f64::from(self.sample_interval_us) * 1e-6
    }

    /// Sample interval in microseconds, as stored in the binary header.
    pub fn sample_interval_us(&self) -> u16 {
        self.sample_interval_us
    }

    /// Bytes from one trace header to the next.
    pub fn trace_stride(&self) -> usize {
        self.trace_stride
    }

    /// Raw 240-byte header of one trace.
    pub fn raw_trace_header(&self, trace_index: usize) -> Result<&[u8]> {
        if trace_index >= self.num_traces {
            return Err(SegyScanError::trace_index(trace_index, self.num_traces));
        }
        let start = trace_index * TRACE_HEADER_LEN;
        Ok(&self.headers[start..start + TRACE_HEADER_LEN])
    }

    /// Signed 32-bit header value by field name.
    ///
    /// Unknown names read as 0.
    pub fn get_trace_header_i32(&self, trace_index: usize, field_name: &str) -> Result<i32> {
        let header = self.raw_trace_header(trace_index)?;
        Ok(i32_table()
            .get(field_name)
            .map_or(0, |spec| read_i32(header, *spec)))
    }

    /// Signed 16-bit header value by field name. Only `TraceNumber` is known
    /// at this width; anything else reads as 0.
    pub fn get_trace_header_i16(&self, trace_index: usize, field_name: &str) -> Result<i16> {
        let header = self.raw_trace_header(trace_index)?;
        Ok(i16_table()
            .get(field_name)
            .map_or(0, |spec| read_i16(header, *spec)))
    }

    /// Signed 32-bit header value of a known field.
    pub fn trace_header(&self, trace_index: usize, field: TraceField) -> Result<i32> {
        self.get_trace_header_i32(trace_index, field.name())
    }
}

fn read_u16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}

fn read_i32(header: &[u8], spec: FieldSpec) -> i32 {
    header
        .get(spec.offset..spec.offset + 4)
        .and_then(|bytes| bytes.try_into().ok())
        .map_or(0, i32::from_be_bytes)
}

fn read_i16(header: &[u8], spec: FieldSpec) -> i16 {
    header
        .get(spec.offset..spec.offset + 2)
        .and_then(|bytes| bytes.try_into().ok())
        .map_or(0, i16::from_be_bytes)
}
