//! Templated natural-language commentary, one template per signal.
//! When price is unknown the price clause is dropped from the sentence.

use crate::domain::Signal;

pub fn commentary(date: &str, signal: Signal, price: Option<f64>) -> String {
    match (signal, price) {
        (Signal::BullishSpike, Some(p)) => format!(
            "On {date}, market sentiment turned notably bullish as open interest and trading \
             volume increased significantly. Gold prices advanced to ${p:?}, reflecting strong \
             institutional participation."
        ),
        (Signal::BullishSpike, None) => format!(
            "On {date}, market sentiment turned notably bullish as open interest and trading \
             volume increased significantly, reflecting strong institutional participation."
        ),
        (Signal::OiDrop, Some(p)) => format!(
            "On {date}, a decline in open interest was observed while gold prices remained \
             near ${p:?}, indicating potential profit-taking or position unwinding."
        ),
        (Signal::OiDrop, None) => format!(
            "On {date}, a decline in open interest was observed, indicating potential \
             profit-taking or position unwinding."
        ),
        (Signal::Stable, Some(p)) => format!(
            "On {date}, gold markets exhibited stability around ${p:?}, with no significant \
             shifts in open interest or volume to indicate directional conviction."
        ),
        (Signal::Stable, None) => format!(
            "On {date}, gold markets exhibited stability, with no significant shifts in open \
             interest or volume to indicate directional conviction."
        ),
    }
}
