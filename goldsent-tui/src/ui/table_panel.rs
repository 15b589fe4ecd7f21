//! Panel 2 — Signals: one row per date with price, changes, signal and score.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Cell, Row, Table};
use ratatui::Frame;

use goldsent_core::DerivedRow;

use crate::theme;

const HEADERS: [&str; 7] = [
    "Date",
    "Price",
    "OI Δ%",
    "Vol Δ%",
    "Signal",
    "Sentiment",
    "Block / Deliv",
];

pub fn render(f: &mut Frame, area: Rect, rows: &[DerivedRow], scroll: usize) {
    let header = Row::new(
        HEADERS
            .iter()
            .map(|h| Cell::from(Span::styled(*h, theme::accent_bold()))),
    )
    .bottom_margin(1);

    let body: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(scroll)
        .map(|(i, r)| {
            let row_style = if i == scroll {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(r.date.clone()),
                Cell::from(format_price(r.price)),
                Cell::from(format_pct(r.pct_oi_change)),
                Cell::from(format_pct(r.pct_volume_change)),
                Cell::from(Span::styled(
                    format!("{} {}", r.signal.icon(), r.signal.label()),
                    Style::default().fg(theme::signal_color(r.signal)),
                )),
                Cell::from(Span::styled(
                    format!("{:+.2}", r.sentiment_score),
                    Style::default().fg(theme::sentiment_color(r.sentiment_score)),
                )),
                Cell::from(Span::styled(
                    format!(
                        "{} / {}",
                        format_optional(r.block_trades),
                        format_optional(r.deliveries)
                    ),
                    theme::muted(),
                )),
            ])
            .style(row_style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(18),
        Constraint::Length(10),
        Constraint::Min(13),
    ];

    let table = Table::new(body, widths).header(header).column_spacing(1);
    f.render_widget(table, area);
}

fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| "—".to_string(), |p| format!("${p:.2}"))
}

fn format_pct(pct: f64) -> String {
    format!("{pct:+.2}")
}

fn format_optional(v: Option<u64>) -> String {
    v.map_or_else(|| "—".to_string(), |n| n.to_string())
}
