//! Map viewer state and logic.

use crate::clipboard::copy_to_clipboard;
use crate::config::Domain;
use crate::plot::{map_series, ScatterSeries};
use crate::report::domain_table;
use crate::scan::ScanAggregator;
use std::collections::BTreeMap;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Interactive map viewer over a finished scan.
#[derive(Debug)]
pub struct MapViewer {
    domains: Vec<Domain>,
    current: usize,
    labels: Vec<String>,
    series: BTreeMap<Domain, Vec<ScatterSeries>>,
    tables: BTreeMap<Domain, String>,
    hidden: Vec<bool>,
    selected: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
}

impl MapViewer {
    /// Build the viewer for the given domains. An empty list shows all three.
    pub fn new(aggregator: &ScanAggregator, domains: impl IntoIterator<Item = Domain>) -> Self {
        let mut domains: Vec<Domain> = domains.into_iter().collect();
        if domains.is_empty() {
            domains = Domain::ALL.to_vec();
        }
        domains.sort();
        domains.dedup();

        let series = domains
            .iter()
            .map(|&d| (d, map_series(aggregator, d)))
            .collect();
        let tables = domains
            .iter()
            .map(|&d| (d, clipboard_text(aggregator, d)))
            .collect();

        Self {
            domains,
            current: 0,
            labels: aggregator.labels().map(str::to_string).collect(),
            series,
            tables,
            hidden: vec![false; aggregator.len()],
            selected: 0,
            status: format!("Loaded {} files", aggregator.len()),
            theme: Theme::GruvboxDark,
        }
    }

    /// Domains available, in display order.
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Domain currently shown.
    pub fn domain(&self) -> Domain {
        self.domains[self.current]
    }

    /// Series of the current domain.
    pub fn current_series(&self) -> &[ScatterSeries] {
        self.series
            .get(&self.domain())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Per-file hidden flags, in processing order.
    pub fn hidden(&self) -> &[bool] {
        &self.hidden
    }

    /// File labels, in processing order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of the selected file.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Show the next domain, wrapping.
    pub fn next_domain(&mut self) {
        self.current = (self.current + 1) % self.domains.len();
        self.status = self.domain().title().to_string();
    }

    /// Show the previous domain, wrapping.
    pub fn prev_domain(&mut self) {
        self.current = (self.current + self.domains.len() - 1) % self.domains.len();
        self.status = self.domain().title().to_string();
    }

    /// Select the next file.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.labels.len() {
            self.selected += 1;
        }
        self.status = self.selection_status();
    }

    /// Select the previous file.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.status = self.selection_status();
    }

    /// Hide or show the selected file on every map.
    pub fn toggle_selected(&mut self) {
        if let Some(flag) = self.hidden.get_mut(self.selected) {
            *flag = !*flag;
        }
        self.status = self.selection_status();
    }

    /// Toggle theme.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Location tables of the current domain, one per file.
    pub fn current_tables(&self) -> &str {
        self.tables
            .get(&self.domain())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Copy the current domain's tables to the clipboard.
    pub fn copy_current(&mut self) {
        self.status = match copy_to_clipboard(self.current_tables()) {
            Ok(()) => format!("Copied {} tables", self.domain().title()),
            Err(e) => format!("Copy failed: {}", e),
        };
    }

    fn selection_status(&self) -> String {
        match self.labels.get(self.selected) {
            Some(label) => format!(
                "File {}/{}: {}{}",
                self.selected + 1,
                self.labels.len(),
                label,
                if self.hidden[self.selected] { " (hidden)" } else { "" }
            ),
            None => "No files".to_string(),
        }
    }
}

fn clipboard_text(aggregator: &ScanAggregator, domain: Domain) -> String {
    aggregator
        .files()
        .iter()
        .map(|scan| format!("# {}\n{}", scan.label, domain_table(scan, domain).render()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{FileScan, FileSummary, RawTraceRecord};

    fn aggregator(labels: &[&str]) -> ScanAggregator {
        let mut agg = ScanAggregator::new();
        for (i, label) in labels.iter().enumerate() {
            let mut scan = FileScan::new(
                *label,
                FileSummary {
                    file_name: format!("{label}.sgy"),
                    num_traces: 1,
                    num_samples: 1,
                    sample_interval_ms: 1,
                    max_time_ms: 0,
                },
            );
            scan.ingest(&RawTraceRecord {
                ffid: i as i32 + 1,
                sou_x: 10 * i as i32,
                ..Default::default()
            });
            agg.insert(scan);
        }
        agg
    }

    #[test]
    fn empty_domain_list_shows_everything() {
        let viewer = MapViewer::new(&aggregator(&["a"]), []);
        assert_eq!(viewer.domains(), Domain::ALL);
        assert_eq!(viewer.domain(), Domain::Source);
    }

    #[test]
    fn domains_wrap_both_ways() {
        let mut viewer = MapViewer::new(&aggregator(&["a"]), [Domain::Cdp, Domain::Source]);
        assert_eq!(viewer.domains(), [Domain::Source, Domain::Cdp]);
        viewer.next_domain();
        assert_eq!(viewer.domain(), Domain::Cdp);
        viewer.next_domain();
        assert_eq!(viewer.domain(), Domain::Source);
        viewer.prev_domain();
        assert_eq!(viewer.domain(), Domain::Cdp);
    }

    #[test]
    fn toggling_hides_selected_file() {
        let mut viewer = MapViewer::new(&aggregator(&["a", "b"]), []);
        viewer.select_next();
        viewer.select_next();
        assert_eq!(viewer.selected(), 1);
        viewer.toggle_selected();
        assert_eq!(viewer.hidden(), [false, true]);
        assert_eq!(viewer.status, "File 2/2: b (hidden)");
        viewer.select_prev();
        viewer.select_prev();
        assert_eq!(viewer.selected(), 0);
    }

    #[test]
    fn clipboard_text_has_a_table_per_file() {
        let viewer = MapViewer::new(&aggregator(&["a", "b"]), [Domain::Source]);
        let text = viewer.current_tables();
        assert!(text.starts_with("# a\nNumber FFID"));
        assert!(text.contains("\n# b\n"));
        assert_eq!(viewer.current_series().len(), 2);
    }
}
