//! Plain-text table rendering for the console demo.

use shelflife_inventory::{InventoryEngine, Item};

const HEADERS: [&str; 4] = ["name", "sell_in", "quality", "rule"];

/// Render `items` as an aligned table, one row per item.
pub fn render(engine: &InventoryEngine, items: &[Item]) -> String {
    let rows: Vec<[String; 4]> = items
        .iter()
        .map(|item| {
            [
                item.name.clone(),
                item.sell_in.to_string(),
                item.quality.to_string(),
                engine.strategy_label(&item.name).to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = format_row(&HEADERS.map(String::from), &widths);
    for row in &rows {
        out.push('\n');
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    format!(
        "{:<w0$} | {:>w1$} | {:>w2$} | {:<w3$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    )
    .trim_end()
    .to_string()
}
