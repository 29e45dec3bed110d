use crate::core::RefreshStatus;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Result,
    Warning,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Result => style(text).green().bold(),
        StyleType::Warning => style(text).yellow(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right aligned cell for a rate value.
pub fn rate_cell(rate: f64) -> Cell {
    Cell::new(format!("{rate:.4}")).set_alignment(CellAlignment::Right)
}

/// Creates a cell for "N/A" values.
pub fn na_cell() -> Cell {
    Cell::new("N/A").fg(Color::DarkGrey)
}

/// Creates a spinner shown while waiting on the network.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// One line summary of where the current rates came from.
pub fn status_line(status: &RefreshStatus) -> String {
    match status {
        RefreshStatus::Updated { at, .. } => style_text(
            &format!("Rates updated: {}", at.format("%d.%m.%Y %H:%M")),
            StyleType::Subtle,
        ),
        RefreshStatus::Fallback { error } => format!(
            "{} {}",
            style_text("Using fallback rates:", StyleType::Warning),
            style_text(&error.to_string(), StyleType::Error)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_status_line_updated() {
        let at = Local.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap();
        let line = console::strip_ansi_codes(&status_line(&RefreshStatus::Updated {
            count: 3,
            at,
        }))
        .to_string();
        assert_eq!(line, "Rates updated: 19.10.2026 09:05");
    }

    #[test]
    fn test_status_line_fallback() {
        let line = console::strip_ansi_codes(&status_line(&RefreshStatus::Fallback {
            error: anyhow!("HTTP error: 503 Service Unavailable for NBU exchange rates"),
        }))
        .to_string();
        assert_eq!(
            line,
            "Using fallback rates: HTTP error: 503 Service Unavailable for NBU exchange rates"
        );
    }
}
