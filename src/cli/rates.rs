use super::ui;
use crate::core::cache::RateStore;
use crate::core::currency::CurrencyCode;
use crate::core::rates::{RateProvider, RateQuote};
use crate::core::refresh::load_rates;
use anyhow::Result;

/// Renders the rate table: one row per currency with its ratio to USD.
pub fn render_rates(quote: &RateQuote) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Name"),
        ui::header_cell("Rate (per 1 USD)"),
    ]);

    for code in CurrencyCode::ALL {
        let meta = code.meta();
        table.add_row(vec![
            ui::text_cell(&format!("{} {}", meta.flag, code), false),
            ui::text_cell(meta.name, false),
            ui::amount_cell(&quote.table.get(code).to_string(), false),
        ]);
    }

    let mut output = table.to_string();
    if let Some(note) = ui::origin_note(&quote.origin) {
        output.push('\n');
        output.push_str(&ui::style_text(&note, ui::StyleType::Subtle));
    }
    output
}

pub async fn run(provider: &dyn RateProvider, store: &dyn RateStore) -> Result<()> {
    let spinner = ui::new_spinner("Fetching exchange rates...");
    let quote = load_rates(provider, store).await;
    spinner.finish_and_clear();

    println!("{}", render_rates(&quote));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rates::{RateOrigin, RateTable};
    use chrono::{Duration, Utc};

    #[test]
    fn test_render_shows_all_rates() {
        let quote = RateQuote {
            table: RateTable::new(21.0, 4000.0, 0.9).unwrap(),
            origin: RateOrigin::Live,
        };
        let output = render_rates(&quote);

        assert!(output.contains("USD"));
        assert!(output.contains("1"));
        assert!(output.contains("21"));
        assert!(output.contains("4000"));
        assert!(output.contains("0.9"));
    }

    #[test]
    fn test_render_stale_origin_notes_age() {
        let quote = RateQuote {
            table: RateTable::builtin(),
            origin: RateOrigin::Stale {
                as_of: Utc::now() - Duration::hours(5),
            },
        };
        let output = render_rates(&quote);
        assert!(output.contains("Offline: using rates last fetched 5h ago"));
    }
}
