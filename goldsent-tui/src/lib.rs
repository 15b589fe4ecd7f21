//! Goldsent TUI — terminal dashboard over the gold futures metrics pipeline.
//!
//! Panels:
//! 1. Chart — open interest line and volume bars per date
//! 2. Signals — per-date table of changes, signal and sentiment
//! 3. Commentary — one narrative bullet per date
//! 4. Help — keyboard shortcuts

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;
pub mod worker;
