use super::ui;
use crate::core::cache::RateStore;
use crate::core::convert::{Conversion, convert_all, is_valid_amount, parse_amount};
use crate::core::currency::CurrencyCode;
use crate::core::rates::{RateOrigin, RateProvider};
use crate::core::refresh::load_rates;
use anyhow::{Result, ensure};

/// Renders the converted amounts as a styled table with the source row
/// emphasized, plus a provenance footer for non-live rates.
pub fn render_conversions(
    from: CurrencyCode,
    conversions: &[Conversion],
    origin: &RateOrigin,
) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Name"),
        ui::header_cell("Amount"),
    ]);

    for conversion in conversions {
        let meta = conversion.code.meta();
        let selected = conversion.code == from;

        table.add_row(vec![
            ui::text_cell(&format!("{} {}", meta.flag, conversion.code), selected),
            ui::text_cell(meta.name, selected),
            ui::amount_cell(&format!("{}{:.2}", meta.symbol, conversion.value), selected),
        ]);
    }

    let mut output = table.to_string();
    if let Some(note) = ui::origin_note(origin) {
        output.push('\n');
        output.push_str(&ui::style_text(&note, ui::StyleType::Subtle));
    }
    output
}

pub async fn run(
    amount_input: &str,
    from: CurrencyCode,
    provider: &dyn RateProvider,
    store: &dyn RateStore,
) -> Result<()> {
    ensure!(
        is_valid_amount(amount_input),
        "Invalid amount: {amount_input:?}. Expected a non-negative number like 12.34"
    );

    let spinner = ui::new_spinner("Fetching exchange rates...");
    let quote = load_rates(provider, store).await;
    spinner.finish_and_clear();

    let amount = parse_amount(amount_input);
    let conversions = convert_all(amount, from, &quote.table);
    println!("{}", render_conversions(from, &conversions, &quote.origin));

    Ok(())
}
