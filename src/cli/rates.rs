use super::ui;
use crate::core::{BASE_CURRENCY, RateTable};
use anyhow::Result;
use comfy_table::Cell;

impl RateTable {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Code"),
            ui::header_cell("Currency"),
            ui::header_cell(&format!("Rate ({BASE_CURRENCY})")),
        ]);

        for (code, rate) in self.sorted() {
            let name = self.name(code).map_or_else(ui::na_cell, Cell::new);
            table.add_row(vec![Cell::new(code), name, ui::rate_cell(rate)]);
        }

        let title = match self.as_of() {
            Some(date) => format!("Exchange rates as of {}", date.format("%d.%m.%Y")),
            None => "Exchange rates".to_string(),
        };

        let mut output = format!("{}\n\n", ui::style_text(&title, ui::StyleType::Title));
        output.push_str(&table.to_string());
        output
    }
}

pub fn run(table: &RateTable) -> Result<()> {
    println!("{}", table.display_as_table());
    Ok(())
}
