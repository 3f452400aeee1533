//! Scatter maps of source, receiver and CDP locations.
//!
//! Maps are drawn with ratatui's `Chart` widget. The same chart is used by the
//! interactive viewer and rendered off-screen into a `Buffer` for the text map
//! files.

use crate::config::Domain;
use crate::scan::{Coord, FileScan, ScanAggregator};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Widget},
};

/// Colours assigned to files in processing order, cycling.
pub const SERIES_COLORS: [Color; 7] = [
    Color::Blue,
    Color::Red,
    Color::Green,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::Gray,
];

/// Colour of the `index`-th file.
pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Coordinates of one file in one domain, ascending by (x, y).
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    /// File label.
    pub label: String,
    /// Points to plot.
    pub points: Vec<(f64, f64)>,
}

impl ScatterSeries {
    /// Series of one scanned file.
    pub fn from_scan(scan: &FileScan, domain: Domain) -> Self {
        let points = match domain {
            Domain::Source => scan.sources.coords().map(to_point).collect(),
            Domain::Receiver => scan.receivers.coords().map(to_point).collect(),
            Domain::Cdp => scan.cdps.coords().map(to_point).collect(),
        };
        Self {
            label: scan.label.clone(),
            points,
        }
    }
}

fn to_point(coord: Coord) -> (f64, f64) {
    (f64::from(coord.x), f64::from(coord.y))
}

/// One series per scanned file, in processing order.
pub fn map_series(aggregator: &ScanAggregator, domain: Domain) -> Vec<ScatterSeries> {
    aggregator
        .files()
        .iter()
        .map(|scan| ScatterSeries::from_scan(scan, domain))
        .collect()
}

/// Axis bounds covering a set of series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    /// X axis `[min, max]`.
    pub x: [f64; 2],
    /// Y axis `[min, max]`.
    pub y: [f64; 2],
}

impl MapBounds {
    /// Padding added on each side, as a fraction of the span.
    const MARGIN: f64 = 0.05;

    /// Bounds of all points, padded. `None` if there are no points.
    pub fn from_series<'a>(series: impl IntoIterator<Item = &'a ScatterSeries>) -> Option<Self> {
        let mut points = series.into_iter().flat_map(|s| s.points.iter());
        let &(x0, y0) = points.next()?;
        let (mut x, mut y) = ([x0, x0], [y0, y0]);
        for &(px, py) in points {
            x = [x[0].min(px), x[1].max(px)];
            y = [y[0].min(py), y[1].max(py)];
        }
        Some(Self {
            x: pad(x),
            y: pad(y),
        })
    }
}

fn pad([min, max]: [f64; 2]) -> [f64; 2] {
    let span = max - min;
    if span == 0.0 {
        [min - 1.0, max + 1.0]
    } else {
        [min - span * MapBounds::MARGIN, max + span * MapBounds::MARGIN]
    }
}

fn axis_labels([min, max]: [f64; 2]) -> Vec<String> {
    vec![
        format!("{:.0}", min),
        format!("{:.0}", (min + max) / 2.0),
        format!("{:.0}", max),
    ]
}

/// Build the scatter chart for a domain. Series whose `hidden` flag is set are
/// left out; colours stay tied to the series index.
pub fn scatter_chart<'a>(
    domain: Domain,
    series: &'a [ScatterSeries],
    hidden: &[bool],
    marker: Marker,
) -> Chart<'a> {
    let visible: Vec<(usize, &'a ScatterSeries)> = series
        .iter()
        .enumerate()
        .filter(|(i, _)| !hidden.get(*i).copied().unwrap_or(false))
        .collect();

    let bounds = MapBounds::from_series(visible.iter().map(|(_, s)| *s)).unwrap_or(MapBounds {
        x: [0.0, 1.0],
        y: [0.0, 1.0],
    });

    let datasets: Vec<Dataset<'a>> = visible
        .into_iter()
        .map(|(i, s)| {
            Dataset::default()
                .name(s.label.clone())
                .marker(marker)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(series_color(i)))
                .data(&s.points)
        })
        .collect();

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", domain.title())),
        )
        .x_axis(
            Axis::default()
                .title("X Coordinate")
                .bounds(bounds.x)
                .labels(axis_labels(bounds.x)),
        )
        .y_axis(
            Axis::default()
                .title("Y Coordinate")
                .bounds(bounds.y)
                .labels(axis_labels(bounds.y)),
        )
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
}

/// Render a domain map to plain text, `height` lines of at most `width` cells.
pub fn render_map_text(domain: Domain, series: &[ScatterSeries], width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width.max(1), height.max(1));
    let mut buffer = Buffer::empty(area);
    scatter_chart(domain, series, &[], Marker::Dot).render(area, &mut buffer);
    buffer_to_text(&buffer)
}

fn buffer_to_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width);
    let mut out = String::new();
    for row in buffer.content.chunks(width) {
        let line: String = row.iter().map(|cell| cell.symbol()).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{FileSummary, RawTraceRecord};

    fn scan(label: &str, points: &[(i32, i32)]) -> FileScan {
        let mut scan = FileScan::new(
            label,
            FileSummary {
                file_name: format!("{label}.sgy"),
                num_traces: points.len(),
                num_samples: 1,
                sample_interval_ms: 1,
                max_time_ms: 0,
            },
        );
        for &(x, y) in points {
            scan.ingest(&RawTraceRecord {
                sou_x: x,
                sou_y: y,
                rec_x: x + 1,
                rec_y: y,
                cdp_x: x,
                cdp_y: y + 1,
                ..Default::default()
            });
        }
        scan
    }

    #[test]
    fn series_follow_table_order() {
        let scan = scan("a", &[(5, 5), (1, 1), (5, 5), (3, 0)]);
        let series = ScatterSeries::from_scan(&scan, Domain::Source);
        assert_eq!(series.points, vec![(1.0, 1.0), (3.0, 0.0), (5.0, 5.0)]);

        let cdp = ScatterSeries::from_scan(&scan, Domain::Cdp);
        assert_eq!(cdp.points[0], (1.0, 2.0));
    }

    #[test]
    fn map_series_has_one_entry_per_file() {
        let mut agg = ScanAggregator::new();
        agg.insert(scan("a", &[(0, 0)]));
        agg.insert(scan("b", &[(1, 1), (2, 2)]));
        let series = map_series(&agg, Domain::Receiver);
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].label, "b");
        assert_eq!(series[1].points.len(), 2);
    }

    #[test]
    fn bounds_pad_and_widen_degenerate_spans() {
        let series = [ScatterSeries {
            label: "a".into(),
            points: vec![(0.0, 5.0), (100.0, 5.0)],
        }];
        let bounds = MapBounds::from_series(&series).unwrap();
        assert_eq!(bounds.x, [-5.0, 105.0]);
        assert_eq!(bounds.y, [4.0, 6.0]);

        let empty: [ScatterSeries; 0] = [];
        assert_eq!(MapBounds::from_series(&empty), None);
    }

    #[test]
    fn text_map_has_title_and_requested_size() {
        let series = [ScatterSeries {
            label: "line1".into(),
            points: vec![(0.0, 0.0), (10.0, 10.0)],
        }];
        let text = render_map_text(Domain::Source, &series, 60, 20);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 60));
        assert!(text.contains("Source Locations"));
    }

    #[test]
    fn colours_cycle_per_file() {
        assert_eq!(series_color(0), Color::Blue);
        assert_eq!(series_color(7), Color::Blue);
        assert_eq!(series_color(8), Color::Red);
    }
}
