//! Panel 3 — Commentary: one narrative bullet per date.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use goldsent_core::DerivedRow;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, rows: &[DerivedRow], scroll: usize) {
    let mut lines: Vec<Line> = Vec::new();
    for r in rows.iter().skip(scroll) {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", r.signal.icon()),
                Style::default().fg(theme::signal_color(r.signal)),
            ),
            Span::raw("• "),
            Span::raw(r.commentary.as_str()),
        ]));
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
