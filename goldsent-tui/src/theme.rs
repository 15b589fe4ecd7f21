//! Gold/charcoal theme tokens for the dashboard.
//!
//! # Color Palette
//! - **Accent**: Gold (focus, headings, the open interest line)
//! - **Positive**: Green (bullish spike, positive sentiment)
//! - **Negative**: Red-pink (OI drop, negative sentiment, errors)
//! - **Warning**: Orange (alerts, loading)
//! - **Neutral**: Slate purple (stable signal)
//! - **Muted**: Steel blue (secondary text, volume bars)

use ratatui::style::{Color, Modifier, Style};

use goldsent_core::Signal;

pub const ACCENT: Color = Color::Rgb(255, 196, 0);
pub const POSITIVE: Color = Color::Rgb(0, 220, 120);
pub const NEGATIVE: Color = Color::Rgb(255, 60, 110);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

pub fn signal_color(signal: Signal) -> Color {
    match signal {
        Signal::BullishSpike => POSITIVE,
        Signal::OiDrop => NEGATIVE,
        Signal::Stable => NEUTRAL,
    }
}

/// Gradient for the sentiment score in [-1, 1].
pub fn sentiment_color(score: f64) -> Color {
    match score {
        s if s >= 0.5 => POSITIVE,
        s if s > 0.0 => ACCENT,
        s if s == 0.0 => MUTED,
        s if s > -0.5 => WARNING,
        _ => NEGATIVE,
    }
}
