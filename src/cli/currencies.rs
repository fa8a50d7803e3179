use super::ui;
use crate::core::source::RateSource;
use crate::store::rates::RateStore;
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

/// Prints the sorted universe of convertible currency codes with their
/// anchor-relative rates.
pub async fn run(rates: &RateStore, source: &dyn RateSource) -> Result<()> {
    let table = rates.load(source).await?;

    let mut out = ui::new_styled_table();
    out.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell(&format!("Rate (per 1 {})", table.base)),
    ]);

    for code in table.currencies() {
        let rate = table.rate_of(code)?;
        out.add_row(vec![
            Cell::new(code),
            Cell::new(format!("{rate:.4}")).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{out}");
    Ok(())
}
