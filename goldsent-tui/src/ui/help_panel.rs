//! Panel 4 — Help: keyboard shortcuts and how the numbers are derived.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-4", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Data Sources");
    key(&mut lines, "s", "Load the built-in three-day sample");
    key(&mut lines, "f", "Fetch the exchange volume / open interest feed");
    let upload = match &app.upload {
        Some(path) => format!("Reload {}", path.display()),
        None => "Reload the spreadsheet passed with --file".to_string(),
    };
    key(&mut lines, "u", &upload);
    key(&mut lines, "r", "Reload the current source");
    lines.push(Line::from(""));

    section(&mut lines, "Signals / Commentary");
    key(&mut lines, "j / k", "Scroll down / up");
    key(&mut lines, "g / G", "Jump to first / last date");
    lines.push(Line::from(""));

    section(&mut lines, "Errors");
    key(&mut lines, "e", "Open error history overlay");
    lines.push(Line::from(""));

    section(&mut lines, "Signals");
    key(&mut lines, "Bullish Spike", "OI up more than 5% and volume up more than 2%");
    key(&mut lines, "OI Drop", "OI down more than 3%");
    key(&mut lines, "Stable", "Anything else");
    key(
        &mut lines,
        "Sentiment",
        "OI%/10 + Vol%/20 + block/1000 + deliveries/1000, clamped to [-1, 1]",
    );

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
