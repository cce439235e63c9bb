//! Result summary printed after `export` and `stats`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::commands::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    println!("Country: {}", summary.country);
    println!("Transformation: {}", summary.transformation);
    for path in &summary.outputs {
        println!("Output: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Points"),
        header_cell("Years"),
        header_cell("Mean"),
        header_cell("Std dev"),
        header_cell("Min"),
        header_cell("Max"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for idx in 1..7 {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for line in &summary.variables {
        let stats_cells = match &line.stats {
            Some(stats) => vec![
                Cell::new(format!("{:.3}", stats.mean)),
                Cell::new(
                    stats
                        .std_dev
                        .map(|sd| format!("{sd:.3}"))
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::new(format!("{:.3}", stats.min)),
                Cell::new(format!("{:.3}", stats.max)),
            ],
            None => vec![Cell::new("-"), Cell::new("-"), Cell::new("-"), Cell::new("-")],
        };
        let mut row = vec![
            Cell::new(&line.variable),
            Cell::new(line.points),
            Cell::new(format!("{}-{}", line.first_year, line.last_year)),
        ];
        row.extend(stats_cells);
        table.add_row(row);
    }
    println!("{table}");

    if !summary.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &summary.warnings {
            eprintln!("- {warning}");
        }
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
