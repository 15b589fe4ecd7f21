//! Plain-text rendering for terminals: signal table and commentary bullets.

use crate::domain::DerivedRow;

pub fn render_table(rows: &[DerivedRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<12} {:>10} {:<16} {:>9}\n",
        "Date", "Price", "Signal", "Sentiment"
    ));
    out.push_str(&"-".repeat(50));
    out.push('\n');
    for row in rows {
        let price = row
            .price
            .map(|p| format!("{p:.1}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<12} {:>10} {:<16} {:>9.2}\n",
            row.date,
            price,
            row.signal.label(),
            row.sentiment_score
        ));
    }
    out
}

pub fn render_commentary(rows: &[DerivedRow]) -> String {
    rows.iter()
        .map(|row| format!("- {}\n", row.commentary))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleProvider;
    use crate::domain::RawRecord;
    use crate::metrics::compute;

    #[test]
    fn table_has_one_line_per_row() {
        let rows = compute(&SampleProvider::records()).unwrap();
        let table = render_table(&rows);
        assert_eq!(table.lines().count(), 2 + rows.len());
        assert!(table.contains("Bullish Spike"));
        assert!(table.contains("2204.7"));
    }

    #[test]
    fn table_shows_dash_for_missing_price() {
        let rows = compute(&[RawRecord::new("Mar 27", 1, 1)]).unwrap();
        let line = render_table(&rows).lines().nth(2).unwrap().to_string();
        assert!(line.starts_with("Mar 27"));
        assert!(line.contains(" - "));
    }

    #[test]
    fn commentary_is_bulleted_in_order() {
        let rows = compute(&SampleProvider::records()).unwrap();
        let text = render_commentary(&rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("- On Mar 26,"));
        assert!(lines[2].starts_with("- On Mar 28,"));
    }
}
