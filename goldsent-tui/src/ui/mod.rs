//! Top-level UI layout — one panel at a time plus a status bar.

pub mod chart_panel;
pub mod commentary_panel;
pub mod help_panel;
pub mod overlays;
pub mod status_bar;
pub mod table_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    if app.overlay == Overlay::ErrorHistory {
        overlays::render_error_history(f, main_area, app);
    }
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;
    let source = app
        .analysis
        .as_ref()
        .map(|a| format!(" — {}", a.source.label()))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(
            " Gold Sentiment · {} [{}]{source} ",
            panel.label(),
            panel.index() + 1
        ))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if panel == Panel::Help {
        help_panel::render(f, inner, app);
        return;
    }

    let Some(analysis) = &app.analysis else {
        render_empty(f, inner, app.loading);
        return;
    };

    match panel {
        Panel::Chart => chart_panel::render(f, inner, &analysis.rows),
        Panel::Table => table_panel::render(f, inner, &analysis.rows, app.table_scroll),
        Panel::Commentary => {
            commentary_panel::render(f, inner, &analysis.rows, app.commentary_scroll)
        }
        Panel::Help => {}
    }
}

fn render_empty(f: &mut Frame, area: Rect, loading: bool) {
    let msg = if loading {
        Span::styled("Loading market data...", theme::warning())
    } else {
        Span::styled(
            "No data loaded. Press s for the sample, f for the live feed, u for the uploaded file.",
            theme::muted(),
        )
    };
    let lines = vec![Line::from(""), Line::from(""), Line::from(msg)];
    f.render_widget(Paragraph::new(lines), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use crate::worker::{handle_load, SourceKind};
    use goldsent_core::ErrorCategory;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_app() -> AppState {
        let (mut app, _rx, _tx) = test_app();
        let resp = handle_load(SourceKind::Sample, &app.config);
        app.handle_response(resp);
        app
    }

    #[test]
    fn empty_state_prompts_for_source() {
        let (app, _rx, _tx) = test_app();
        assert!(rendered(&app).contains("No data loaded"));
    }

    #[test]
    fn every_panel_renders_sample() {
        let mut app = loaded_app();
        for panel in [Panel::Chart, Panel::Table, Panel::Commentary, Panel::Help] {
            app.active_panel = panel;
            let screen = rendered(&app);
            assert!(screen.contains(panel.label()), "{panel:?} title missing");
        }
    }

    #[test]
    fn table_panel_shows_signals() {
        let mut app = loaded_app();
        app.active_panel = Panel::Table;
        let screen = rendered(&app);
        assert!(screen.contains("Bullish Spike"));
        assert!(screen.contains("Mar 28"));
    }

    #[test]
    fn commentary_panel_shows_bullets() {
        let mut app = loaded_app();
        app.active_panel = Panel::Commentary;
        assert!(rendered(&app).contains("On Mar 26"));
    }

    #[test]
    fn error_overlay_draws_over_panel() {
        let mut app = loaded_app();
        app.push_error(ErrorCategory::Network, "feed down".into(), "feed".into());
        app.overlay = Overlay::ErrorHistory;
        let screen = rendered(&app);
        assert!(screen.contains("Error History"));
        assert!(screen.contains("feed down"));
    }
}
