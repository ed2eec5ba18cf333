use comfy_table::{Cell, Color, Table};

use crate::pricing::{FormattedPrice, PricingSheet};

use super::format::{
    NOT_APPLICABLE, billing_label, create_styled_table, format_ratio, header_cell, right_cell,
    styled_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct PricingTableOptions {
    pub(crate) use_color: bool,
}

fn build_pricing_table(sheet: &PricingSheet, opts: PricingTableOptions) -> Table {
    let c = opts.use_color;
    let price_color = if c { Some(Color::Green) } else { None };

    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Model", c),
        header_cell("Billing", c),
        header_cell("Input", c),
        header_cell("Completion", c),
        header_cell("Price", c),
    ]);

    for row in &sheet.models {
        let mut cells: Vec<Cell> = vec![
            styled_cell(&row.entry.model_name, None, true),
            Cell::new(billing_label(row.entry.quota_type)),
        ];
        match &row.formatted_price {
            FormattedPrice::Metered { input, completion } => cells.extend([
                right_cell(input, price_color, false),
                right_cell(completion, price_color, false),
                right_cell(NOT_APPLICABLE, None, false),
            ]),
            FormattedPrice::FlatRate { price } => cells.extend([
                right_cell(NOT_APPLICABLE, None, false),
                right_cell(NOT_APPLICABLE, None, false),
                right_cell(price, price_color, false),
            ]),
        }
        table.add_row(cells);
    }

    table
}

pub(crate) fn print_pricing_table(sheet: &PricingSheet, opts: PricingTableOptions) {
    if sheet.models.is_empty() {
        println!("No models published by this gateway.");
        return;
    }

    println!("\n  Popular Models\n");
    println!("{}", build_pricing_table(sheet, opts));

    let summary = format!(
        "{} models | group ratio {}",
        sheet.models.len(),
        format_ratio(sheet.group_ratio)
    );
    if opts.use_color {
        println!("\n  \x1b[36m{summary}\x1b[0m\n");
    } else {
        println!("\n  {summary}\n");
    }
}
