//! In-memory SEG-Y images for unit tests.

use super::{TraceField, SAMPLE_LEN, TEXT_HEADER_LEN, TRACE_HEADER_LEN};

/// Builds a minimal SEG-Y byte image.
#[derive(Debug)]
pub(crate) struct SegyBuilder {
    dt_us: u16,
    samples: u16,
    traces: Vec<[u8; TRACE_HEADER_LEN]>,
    trailing: usize,
}

impl SegyBuilder {
    pub(crate) fn new(dt_us: u16, samples: u16) -> Self {
        Self {
            dt_us,
            samples,
            traces: Vec::new(),
            trailing: 0,
        }
    }

    /// Append a trace whose header carries the given field values.
    pub(crate) fn trace(mut self, fields: &[(TraceField, i32)]) -> Self {
        let mut header = [0u8; TRACE_HEADER_LEN];
        for &(field, value) in fields {
            let offset = field.byte_position() - 1;
            header[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
        }
        self.traces.push(header);
        self
    }

    /// Append junk bytes after the last trace.
    pub(crate) fn trailing_bytes(mut self, len: usize) -> Self {
        self.trailing = len;
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut bytes = vec![b' '; TEXT_HEADER_LEN as usize];
        let mut binary = [0u8; 400];
        binary[16..18].copy_from_slice(&self.dt_us.to_be_bytes());
        binary[20..22].copy_from_slice(&self.samples.to_be_bytes());
        bytes.extend_from_slice(&binary);

        let data_len = usize::from(self.samples) * SAMPLE_LEN;
        for header in &self.traces {
            bytes.extend_from_slice(header);
            bytes.extend(std::iter::repeat(0xAB).take(data_len));
        }
        bytes.extend(std::iter::repeat(0).take(self.trailing));
        bytes
    }
}
