//! Domain tabs, file list and scatter map.

use super::ThemeColors;
use crate::app::MapViewer;
use crate::plot::{scatter_chart, series_color};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Tabs},
    Frame,
};

/// Width of the file list, including borders.
const FILE_LIST_WIDTH: u16 = 28;

pub(super) fn draw_tabs(f: &mut Frame<'_>, viewer: &MapViewer, area: Rect, colors: &ThemeColors) {
    let titles: Vec<&str> = viewer.domains().iter().map(|d| d.title()).collect();
    let selected = viewer
        .domains()
        .iter()
        .position(|&d| d == viewer.domain())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(colors.text).bg(colors.bg))
        .highlight_style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

pub(super) fn draw_body(f: &mut Frame<'_>, viewer: &MapViewer, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FILE_LIST_WIDTH), Constraint::Min(1)])
        .split(area);

    draw_files(f, viewer, chunks[0], colors);

    let chart = scatter_chart(
        viewer.domain(),
        viewer.current_series(),
        viewer.hidden(),
        Marker::Braille,
    )
    .style(Style::default().fg(colors.text).bg(colors.bg));
    f.render_widget(chart, chunks[1]);
}

fn draw_files(f: &mut Frame<'_>, viewer: &MapViewer, area: Rect, colors: &ThemeColors) {
    let items: Vec<ListItem<'_>> = viewer
        .labels()
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let marker = if viewer.hidden()[idx] { "  " } else { "● " };
            let style = if idx == viewer.selected() {
                Style::default().fg(colors.cursor_fg).bg(colors.cursor_bg)
            } else {
                Style::default().fg(colors.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(series_color(idx))),
                Span::styled(label.as_str(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Files ")
            .border_style(Style::default().fg(colors.border)),
    );
    f.render_widget(list, area);
}
