//! Panel 1 — Chart: open interest as a line, volume as bars, dates in input order.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, GraphType};
use ratatui::Frame;

use goldsent_core::DerivedRow;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, rows: &[DerivedRow]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_open_interest(f, chunks[0], rows);
    render_volume(f, chunks[1], rows);
}

fn render_open_interest(f: &mut Frame, area: Rect, rows: &[DerivedRow]) {
    let data: Vec<(f64, f64)> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.open_interest as f64))
        .collect();

    let (min_y, max_y) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });
    let padding = ((max_y - min_y).abs() * 0.05).max(1.0);
    let y_min = (min_y - padding).max(0.0);
    let y_max = max_y + padding;
    let x_max = rows.len().saturating_sub(1) as f64;

    let dataset = Dataset::default()
        .name("Open Interest")
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&data);

    let first = rows.first().map(|r| r.date.as_str()).unwrap_or("");
    let last = rows.last().map(|r| r.date.as_str()).unwrap_or("");

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .title(Span::styled("Date", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first.to_string(), theme::muted()),
                    Span::styled(last.to_string(), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Open Interest", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.0}"), theme::muted()),
                    Span::styled(format!("{y_max:.0}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_volume(f: &mut Frame, area: Rect, rows: &[DerivedRow]) {
    // One column per bar plus a gap; older dates drop off when they cannot fit.
    let capacity = (usize::from(area.width) / 2).max(1);
    let visible = &rows[rows.len().saturating_sub(capacity)..];

    let bars: Vec<Bar> = visible
        .iter()
        .map(|r| {
            Bar::default()
                .value(r.volume)
                .label(Line::from(r.date.clone()))
                .text_value(format_count(r.volume))
                .style(Style::default().fg(theme::MUTED))
        })
        .collect();

    let title = if visible.len() < rows.len() {
        format!(" Volume (last {} of {}) ", visible.len(), rows.len())
    } else {
        " Volume ".to_string()
    };

    let chart = BarChart::default()
        .block(Block::default().title(Span::styled(title, theme::muted())))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area.width, visible.len()))
        .bar_gap(1)
        .value_style(theme::accent_bold());

    f.render_widget(chart, area);
}

/// Share the width between `bars` bars with a one-column gap, 1..=12 columns each.
fn bar_width(width: u16, bars: usize) -> u16 {
    let bars = bars.max(1);
    let per_bar = usize::from(width).saturating_sub(bars) / bars;
    u16::try_from(per_bar.clamp(1, 12)).unwrap_or(1)
}

fn format_count(v: u64) -> String {
    if v >= 1_000_000 {
        format!("{:.1}M", v as f64 / 1_000_000.0)
    } else if v >= 1_000 {
        format!("{:.0}K", v as f64 / 1_000.0)
    } else {
        v.to_string()
    }
}
