//! Scan configuration.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Location domain a table or map is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    /// Seismic sources.
    Source,
    /// Receivers.
    Receiver,
    /// CDP bins.
    Cdp,
}

impl Domain {
    /// All domains in report order.
    pub const ALL: [Domain; 3] = [Domain::Source, Domain::Receiver, Domain::Cdp];

    /// Suffix of the per-file table, e.g. `line1_sou.txt`.
    pub fn suffix(self) -> &'static str {
        match self {
            Domain::Source => "sou",
            Domain::Receiver => "rec",
            Domain::Cdp => "cdp",
        }
    }

    /// Map title.
    pub fn title(self) -> &'static str {
        match self {
            Domain::Source => "Source Locations",
            Domain::Receiver => "Receiver Locations",
            Domain::Cdp => "CDP Locations",
        }
    }

    /// Map file stem.
    pub fn map_name(self) -> &'static str {
        match self {
            Domain::Source => "sources",
            Domain::Receiver => "receivers",
            Domain::Cdp => "cdps",
        }
    }
}

/// Options for one scan run.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Domains to write tables and maps for.
    pub domains: BTreeSet<Domain>,
    /// Output directory; defaults to `segyscan` next to the input.
    pub output_dir: Option<PathBuf>,
    /// File columns per ranges table.
    pub files_per_table: usize,
    /// Whether to write text scatter maps.
    pub write_maps: bool,
    /// Map width in terminal cells.
    pub map_width: u16,
    /// Map height in terminal cells.
    pub map_height: u16,
    /// Draw progress bars on stderr.
    pub show_progress: bool,
}

impl ScanOptions {
    /// Select domains; an empty selection means all of them.
    pub fn with_domains(mut self, domains: impl IntoIterator<Item = Domain>) -> Self {
        let selected: BTreeSet<Domain> = domains.into_iter().collect();
        self.domains = if selected.is_empty() {
            Domain::ALL.into_iter().collect()
        } else {
            selected
        };
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            domains: Domain::ALL.into_iter().collect(),
            output_dir: None,
            files_per_table: 5,
            write_maps: true,
            map_width: 120,
            map_height: 40,
            show_progress: false,
        }
    }
}
