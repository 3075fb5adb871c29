//! Shared `comfy-table` styling for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn department_cell(name: &str) -> Cell {
    Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold)
}

pub fn member_cell(name: &str) -> Cell {
    Cell::new(format!("  -> {}", name))
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

pub fn starred_cell(starred: bool) -> Cell {
    if starred {
        Cell::new("*").fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

/// Checkbox-style rendering of a tri-state selection status.
pub fn status_label(full: bool, partial: bool) -> &'static str {
    if full {
        "[x]"
    } else if partial {
        "[~]"
    } else {
        "[ ]"
    }
}
