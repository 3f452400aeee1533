//! Run-wide aggregation of decoded trace headers.

use super::{CdpEntry, HeaderRanges, LocationTable, RawTraceRecord, ReceiverEntry, SourceEntry};
use crate::error::Result;
use crate::segy::SegyReader;

/// Scalar metadata of one scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    /// File name including extension.
    pub file_name: String,
    /// Number of traces.
    pub num_traces: usize,
    /// Samples per trace.
    pub num_samples: usize,
    /// Sample interval in whole milliseconds.
    pub sample_interval_ms: u32,
    /// Time of the last sample in milliseconds.
    pub max_time_ms: u32,
}

impl FileSummary {
    /// Summarise a decoded file.
    pub fn from_reader(reader: &SegyReader, file_name: impl Into<String>) -> Self {
        let sample_interval_ms = u32::from(reader.sample_interval_us()) / 1000;
        let num_samples = reader.num_samples();

        Self {
            file_name: file_name.into(),
            num_traces: reader.num_traces(),
            num_samples,
            sample_interval_ms,
            max_time_ms: (num_samples as u32).saturating_sub(1) * sample_interval_ms,
        }
    }
}

/// Everything collected from one file.
#[derive(Debug, Clone)]
pub struct FileScan {
    /// File identity used in reports (the file stem).
    pub label: String,
    /// Scalar metadata.
    pub summary: FileSummary,
    /// Unique sources.
    pub sources: LocationTable<SourceEntry>,
    /// Unique receivers.
    pub receivers: LocationTable<ReceiverEntry>,
    /// Unique CDP bins.
    pub cdps: LocationTable<CdpEntry>,
    /// Header ranges.
    pub ranges: HeaderRanges,
}

impl FileScan {
    /// Create an empty scan for a file.
    pub fn new(label: impl Into<String>, summary: FileSummary) -> Self {
        Self {
            label: label.into(),
            summary,
            sources: LocationTable::new(),
            receivers: LocationTable::new(),
            cdps: LocationTable::new(),
            ranges: HeaderRanges::new(),
        }
    }

    /// Fold one trace record into the tables and ranges.
    pub fn ingest(&mut self, record: &RawTraceRecord) {
        self.sources.insert_record(record);
        self.receivers.insert_record(record);
        self.cdps.insert_record(record);
        self.ranges.fold(record);
    }
}

/// Per-file scan results for a whole run, in processing order.
#[derive(Debug, Default)]
pub struct ScanAggregator {
    files: Vec<FileScan>,
}

impl ScanAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan every trace of `reader` into a new entry labelled `label`.
    pub fn ingest_file(&mut self, reader: &SegyReader, label: &str) -> Result<&FileScan> {
        self.ingest_file_with(reader, label, label, |_, _| {})
    }

    /// Like [`ingest_file`](Self::ingest_file), with the file name shown in
    /// the info table and a callback invoked after each trace with
    /// `(traces_done, num_traces)`.
    pub fn ingest_file_with<F>(
        &mut self,
        reader: &SegyReader,
        label: &str,
        file_name: &str,
        mut on_trace: F,
    ) -> Result<&FileScan>
    where
        F: FnMut(usize, usize),
    {
        let total = reader.num_traces();
        let mut scan = FileScan::new(label, FileSummary::from_reader(reader, file_name));

        for i in 0..total {
            let record = RawTraceRecord::read(reader, i)?;
            scan.ingest(&record);
            on_trace(i + 1, total);
        }

        tracing::info!(
            file = label,
            traces = total,
            sources = scan.sources.len(),
            receivers = scan.receivers.len(),
            cdps = scan.cdps.len(),
            "Scanned file"
        );

        Ok(self.insert(scan))
    }

    /// Store a finished scan. A scan with an existing label replaces the old one.
    pub fn insert(&mut self, scan: FileScan) -> &FileScan {
        let index = match self.files.iter().position(|f| f.label == scan.label) {
            Some(index) => {
                tracing::warn!(file = %scan.label, "Duplicate file label, replacing earlier scan");
                self.files[index] = scan;
                index
            },
            None => {
                self.files.push(scan);
                self.files.len() - 1
            },
        };
        &self.files[index]
    }

    /// Scan of one file by label.
    pub fn file(&self, label: &str) -> Option<&FileScan> {
        self.files.iter().find(|f| f.label == label)
    }

    /// All scans in processing order.
    pub fn files(&self) -> &[FileScan] {
        &self.files
    }

    /// Labels in processing order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.files.iter().map(|f| f.label.as_str())
    }

    /// Number of scanned files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no file has been scanned.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
