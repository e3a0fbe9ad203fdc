use crate::core::rates::RateOrigin;
use chrono::Utc;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Selected,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Selected => style(text).cyan().bold(),
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

/// Creates a cell, emphasized when its row holds the source currency.
pub fn text_cell(text: &str, selected: bool) -> Cell {
    let cell = Cell::new(text);
    if selected {
        cell.add_attribute(Attribute::Bold).fg(Color::Cyan)
    } else {
        cell
    }
}

/// Creates a right-aligned cell for a monetary value.
pub fn amount_cell(text: &str, selected: bool) -> Cell {
    text_cell(text, selected).set_alignment(CellAlignment::Right)
}

/// Creates a new `indicatif::ProgressBar` spinner for the rate fetch.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// One-line provenance note for rates that were not fetched live.
pub fn origin_note(origin: &RateOrigin) -> Option<String> {
    match origin {
        RateOrigin::Live => None,
        RateOrigin::Cached { as_of } => Some(format!(
            "Rates cached {} ago",
            format_age_since(*as_of)
        )),
        RateOrigin::Stale { as_of } => Some(format!(
            "Offline: using rates last fetched {} ago",
            format_age_since(*as_of)
        )),
        RateOrigin::Builtin => Some("Offline: using built-in rates".to_string()),
    }
}

fn format_age_since(as_of: chrono::DateTime<Utc>) -> String {
    let age = Utc::now().signed_duration_since(as_of);
    if age.num_days() > 0 {
        format!("{}d", age.num_days())
    } else if age.num_hours() > 0 {
        format!("{}h", age.num_hours())
    } else if age.num_minutes() > 0 {
        format!("{}m", age.num_minutes())
    } else {
        format!("{}s", age.num_seconds().max(0))
    }
}
