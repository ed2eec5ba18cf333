use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::pricing::QuotaType;

/// Placeholder for a column that does not apply to a row
pub(super) const NOT_APPLICABLE: &str = "-";

pub(super) fn billing_label(quota_type: QuotaType) -> &'static str {
    match quota_type {
        QuotaType::Metered => "Metered",
        QuotaType::FlatRate => "Per call",
    }
}

/// Group ratio without trailing zeros: 1, 0.8, 1.25
pub(super) fn format_ratio(ratio: f64) -> String {
    let s = format!("{ratio:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_ratio_trims_zeros() {
        assert_eq!(format_ratio(1.0), "1");
        assert_eq!(format_ratio(0.8), "0.8");
        assert_eq!(format_ratio(1.25), "1.25");
        assert_eq!(format_ratio(0.0), "0");
    }

    #[test]
    fn billing_labels() {
        assert_eq!(billing_label(QuotaType::Metered), "Metered");
        assert_eq!(billing_label(QuotaType::FlatRate), "Per call");
    }

    #[test]
    fn styled_table_renders_single_line_header_separator() {
        let mut table = create_styled_table();
        table.set_header(vec![header_cell("Model", false)]);
        table.add_row(vec![styled_cell("gpt-4o", None, false)]);
        let rendered = table.to_string();
        assert!(rendered.contains('├'));
        assert!(!rendered.contains('╞'));
    }
}
