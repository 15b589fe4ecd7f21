//! Signal — the closed set of per-day classifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading signal derived from the day's percentage changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    #[serde(rename = "Bullish Spike")]
    BullishSpike,
    #[serde(rename = "OI Drop")]
    OiDrop,
    #[serde(rename = "Stable")]
    Stable,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::BullishSpike, Signal::OiDrop, Signal::Stable];

    pub fn label(self) -> &'static str {
        match self {
            Signal::BullishSpike => "Bullish Spike",
            Signal::OiDrop => "OI Drop",
            Signal::Stable => "Stable",
        }
    }

    /// Dashboard glyph shown next to the label.
    pub fn icon(self) -> &'static str {
        match self {
            Signal::BullishSpike => "📈",
            Signal::OiDrop => "⚠️",
            Signal::Stable => "🔄",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
