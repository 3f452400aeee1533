//! Text reports: info, ranges and per-file location tables, plus map files.

mod table;

pub use table::TextTable;

use crate::config::{Domain, ScanOptions};
use crate::error::Result;
use crate::plot::{map_series, render_map_text};
use crate::scan::{FileScan, RangeField, ScanAggregator};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder for a range that was never observed.
const MISSING: &str = "N/A";

/// One summary row per processed file.
pub fn info_table(aggregator: &ScanAggregator) -> TextTable {
    let mut table = TextTable::new([
        "file_name",
        "num_traces",
        "num_samples",
        "sample_interval_ms",
        "max_time_ms",
    ]);
    for scan in aggregator.files() {
        let s = &scan.summary;
        table.push_row([
            s.file_name.clone(),
            s.num_traces.to_string(),
            s.num_samples.to_string(),
            s.sample_interval_ms.to_string(),
            s.max_time_ms.to_string(),
        ]);
    }
    table
}

/// Ranges tables, `files_per_table` file columns each.
pub fn ranges_tables(aggregator: &ScanAggregator, files_per_table: usize) -> Vec<TextTable> {
    aggregator
        .files()
        .chunks(files_per_table.max(1))
        .map(|chunk| {
            let mut table = TextTable::new(
                std::iter::once("Header").chain(chunk.iter().map(|scan| scan.label.as_str())),
            );
            for field in RangeField::ALL {
                let row = std::iter::once(field.label().to_string()).chain(chunk.iter().map(
                    |scan| {
                        scan.ranges
                            .get(field)
                            .map_or_else(|| MISSING.to_string(), |range| range.to_string())
                    },
                ));
                table.push_row(row);
            }
            table
        })
        .collect()
}

/// Unique sources of one file.
pub fn source_table(scan: &FileScan) -> TextTable {
    let mut table = TextTable::new(["Number", "FFID", "Source", "Sou_X", "Sou_Y", "Sou_Elev"]);
    for (n, e) in scan.sources.iter().enumerate() {
        table.push_row([
            (n + 1).to_string(),
            e.ffid.to_string(),
            e.source.to_string(),
            e.x.to_string(),
            e.y.to_string(),
            e.elevation.to_string(),
        ]);
    }
    table
}

/// Unique receivers of one file.
pub fn receiver_table(scan: &FileScan) -> TextTable {
    let mut table = TextTable::new(["Number", "Rec_X", "Rec_Y", "Rec_Elev"]);
    for (n, e) in scan.receivers.iter().enumerate() {
        table.push_row([
            (n + 1).to_string(),
            e.x.to_string(),
            e.y.to_string(),
            e.elevation.to_string(),
        ]);
    }
    table
}

/// Unique CDP bins of one file.
pub fn cdp_table(scan: &FileScan) -> TextTable {
    let mut table = TextTable::new(["Number", "CDP", "CDP_X", "CDP_Y"]);
    for (n, e) in scan.cdps.iter().enumerate() {
        table.push_row([
            (n + 1).to_string(),
            e.cdp.to_string(),
            e.x.to_string(),
            e.y.to_string(),
        ]);
    }
    table
}

/// Location table of one file for a domain.
pub fn domain_table(scan: &FileScan, domain: Domain) -> TextTable {
    match domain {
        Domain::Source => source_table(scan),
        Domain::Receiver => receiver_table(scan),
        Domain::Cdp => cdp_table(scan),
    }
}

/// Writes report files under an output directory.
#[derive(Debug)]
pub struct ReportWriter {
    tables_dir: PathBuf,
    maps_dir: PathBuf,
}

impl ReportWriter {
    /// Create `tables/` and `maps/` under `output_dir`.
    pub fn create(output_dir: &Path) -> Result<Self> {
        let writer = Self {
            tables_dir: output_dir.join("tables"),
            maps_dir: output_dir.join("maps"),
        };
        fs::create_dir_all(&writer.tables_dir)?;
        fs::create_dir_all(&writer.maps_dir)?;
        Ok(writer)
    }

    /// Directory holding the text tables.
    pub fn tables_dir(&self) -> &Path {
        &self.tables_dir
    }

    /// Directory holding the maps.
    pub fn maps_dir(&self) -> &Path {
        &self.maps_dir
    }

    /// Write `<label>_<suffix>.txt` for each selected domain.
    pub fn write_file_tables(&self, scan: &FileScan, options: &ScanOptions) -> Result<()> {
        for &domain in &options.domains {
            let path = self
                .tables_dir
                .join(format!("{}_{}.txt", scan.label, domain.suffix()));
            fs::write(&path, domain_table(scan, domain).render())?;
            tracing::debug!(path = %path.display(), "Wrote table");
        }
        Ok(())
    }

    /// Write `info.txt`.
    pub fn write_info(&self, aggregator: &ScanAggregator) -> Result<PathBuf> {
        let path = self.tables_dir.join("info.txt");
        fs::write(&path, info_table(aggregator).render())?;
        Ok(path)
    }

    /// Write `ranges.txt`, tables separated by a blank line.
    pub fn write_ranges(&self, aggregator: &ScanAggregator, files_per_table: usize) -> Result<PathBuf> {
        let path = self.tables_dir.join("ranges.txt");
        let text = ranges_tables(aggregator, files_per_table)
            .iter()
            .map(TextTable::render)
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&path, text)?;
        Ok(path)
    }

    /// Write one text map per selected domain.
    pub fn write_maps(&self, aggregator: &ScanAggregator, options: &ScanOptions) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for &domain in &options.domains {
            let series = map_series(aggregator, domain);
            let path = self.maps_dir.join(format!("{}.txt", domain.map_name()));
            let text = render_map_text(domain, &series, options.map_width, options.map_height);
            fs::write(&path, text)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Write every report for a finished run.
    pub fn write_all(&self, aggregator: &ScanAggregator, options: &ScanOptions) -> Result<()> {
        for scan in aggregator.files() {
            self.write_file_tables(scan, options)?;
        }

        tracing::info!("Generating info table...");
        self.write_info(aggregator)?;

        tracing::info!("Generating ranges table...");
        self.write_ranges(aggregator, options.files_per_table)?;

        if options.write_maps {
            tracing::info!("Generating maps...");
            self.write_maps(aggregator, options)?;
        }
        Ok(())
    }
}
