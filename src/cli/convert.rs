use super::ui;
use crate::core::{Conversion, RateTable};
use anyhow::{Context, Result, bail};
use tracing::warn;

/// Parses a user supplied amount, accepting either `.` or `,` as the decimal
/// separator.
pub fn parse_amount(input: &str) -> Result<f64> {
    let normalized = input.trim().replace(',', ".");
    let amount: f64 = normalized
        .parse()
        .with_context(|| format!("Invalid amount format: {input}"))?;
    if !amount.is_finite() {
        bail!("Invalid amount format: {input}");
    }
    if amount <= 0.0 {
        bail!("Amount must be greater than 0");
    }
    Ok(amount)
}

/// Trims and upper-cases a currency code, rejecting anything that is not
/// three ASCII letters.
pub fn normalize_code(input: &str) -> Result<String> {
    let code = input.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        bail!("Invalid currency code: {input}");
    }
    Ok(code)
}

/// Validates the request and converts it with the rates in `table`.
pub fn convert_request(table: &RateTable, amount: &str, from: &str, to: &str) -> Result<Conversion> {
    let from = normalize_code(from)?;
    let to = normalize_code(to)?;
    if from == to {
        bail!("Choose different currencies");
    }
    let amount = parse_amount(amount)?;

    for code in [&from, &to] {
        if !table.contains(code) {
            warn!(code = %code, "Currency not in rate table, treating it as base currency");
        }
    }

    Ok(table.convert(amount, &from, &to))
}

/// Renders a conversion along with notes for codes missing from `table`.
pub fn display_conversion(table: &RateTable, conversion: &Conversion) -> String {
    let mut output = ui::style_text(&conversion.to_string(), ui::StyleType::Result);
    for code in [&conversion.from, &conversion.to] {
        if !table.contains(code) {
            output.push('\n');
            output.push_str(&ui::style_text(
                &format!("{code} has no known rate and was treated as 1.0"),
                ui::StyleType::Subtle,
            ));
        }
    }
    output
}

pub fn run(table: &RateTable, amount: &str, from: &str, to: &str) -> Result<()> {
    let conversion = convert_request(table, amount, from, to)?;
    println!("{}", display_conversion(table, &conversion));
    Ok(())
}
