//! Scan orchestration: discovery, per-file decoding, reports.

use crate::config::ScanOptions;
use crate::discovery::{default_output_dir, discover, file_label, file_name};
use crate::error::{Result, SegyScanError};
use crate::progress::ProgressBar;
use crate::report::ReportWriter;
use crate::scan::ScanAggregator;
use crate::segy::SegyReader;
use std::path::{Path, PathBuf};

/// A file that was discovered but could not be scanned.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    /// Path of the file.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of a complete run.
#[derive(Debug)]
pub struct ScanOutcome {
    /// Per-file results.
    pub aggregator: ScanAggregator,
    /// Files that failed to decode.
    pub skipped: Vec<SkippedFile>,
    /// Directory the reports were written to.
    pub output_dir: PathBuf,
}

/// Runs scans with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner.
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan a file or directory and write every report.
    pub fn run(&self, input: &Path) -> Result<ScanOutcome> {
        tracing::info!("Discovering SEG-Y files...");
        let files = discover(input)?;
        if files.is_empty() {
            return Err(SegyScanError::NoFilesFound {
                path: input.to_path_buf(),
            });
        }
        tracing::info!("Found {} SEG-Y files", files.len());

        let (aggregator, skipped) = self.scan_files(&files)?;
        if aggregator.is_empty() {
            return Err(SegyScanError::NoFilesProcessed);
        }

        let output_dir = self
            .options
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(input));
        ReportWriter::create(&output_dir)?.write_all(&aggregator, &self.options)?;

        tracing::info!(
            processed = aggregator.len(),
            skipped = skipped.len(),
            output = %output_dir.display(),
            "Processing completed"
        );

        Ok(ScanOutcome {
            aggregator,
            skipped,
            output_dir,
        })
    }

    /// Scan each file in turn. Files that fail to decode are logged and
    /// skipped; an out-of-range trace access aborts the run.
    pub fn scan_files(&self, paths: &[PathBuf]) -> Result<(ScanAggregator, Vec<SkippedFile>)> {
        let mut aggregator = ScanAggregator::new();
        let mut skipped = Vec::new();

        for path in paths {
            tracing::info!("Processing: {}", path.display());
            match self.scan_file(&mut aggregator, path) {
                Ok(()) => {},
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Error processing {}: {}", path.display(), e);
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                },
                Err(e) => return Err(e),
            }
        }

        Ok((aggregator, skipped))
    }

    fn scan_file(&self, aggregator: &mut ScanAggregator, path: &Path) -> Result<()> {
        let reader = SegyReader::open(path)?;
        let name = file_name(path);
        let progress = ProgressBar::new(format!("Reading traces from {}", name), reader.num_traces())
            .enabled(self.options.show_progress);

        aggregator.ingest_file_with(&reader, &file_label(path), &name, |done, _| {
            progress.update(done)
        })?;
        Ok(())
    }
}
