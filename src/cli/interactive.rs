use super::convert::render_conversions;
use super::ui;
use crate::core::cache::RateStore;
use crate::core::convert::{convert_all, is_valid_amount, parse_amount};
use crate::core::currency::CurrencyCode;
use crate::core::rates::{RateProvider, RateQuote};
use crate::core::refresh::load_rates;
use anyhow::{Result, bail};
use console::{Key, Term};

/// Screen state: the amount text as typed and the selected source currency.
/// Rates are resolved once when the screen opens and held for its lifetime.
struct Screen {
    amount: String,
    from: CurrencyCode,
    quote: RateQuote,
}

impl Screen {
    fn new(from: CurrencyCode, quote: RateQuote) -> Self {
        Screen {
            amount: "1".to_string(),
            from,
            quote,
        }
    }

    /// Applies one keystroke to the amount. An edit that would make the
    /// text invalid is discarded and the previous value is retained.
    fn push_amount_char(&mut self, c: char) {
        let mut candidate = self.amount.clone();
        candidate.push(c);
        if is_valid_amount(&candidate) {
            self.amount = candidate;
        }
    }

    fn pop_amount_char(&mut self) {
        self.amount.pop();
    }

    fn select_next(&mut self) {
        self.shift_selection(1);
    }

    fn select_previous(&mut self) {
        self.shift_selection(CurrencyCode::ALL.len() - 1);
    }

    fn shift_selection(&mut self, step: usize) {
        let all = CurrencyCode::ALL;
        let index = all.iter().position(|c| *c == self.from).unwrap_or(0);
        self.from = all[(index + step) % all.len()];
    }

    fn render(&self) -> String {
        let meta = self.from.meta();
        let mut output = format!(
            "{}\n\nAmount: {}{}\n\n",
            ui::style_text("Currency Converter", ui::StyleType::Title),
            meta.symbol,
            self.amount
        );

        let selector = CurrencyCode::ALL
            .map(|code| {
                let label = format!("{} {}", code.meta().flag, code);
                if code == self.from {
                    ui::style_text(&format!("[{label}]"), ui::StyleType::Selected)
                } else {
                    format!(" {label} ")
                }
            })
            .join(" ");
        output.push_str(&selector);
        output.push_str("\n\n");

        let amount = parse_amount(&self.amount);
        let conversions = convert_all(amount, self.from, &self.quote.table);
        output.push_str(&render_conversions(
            self.from,
            &conversions,
            &self.quote.origin,
        ));

        output.push('\n');
        output.push_str(&ui::style_text(
            "←/→ switch currency · digits edit amount · q quit",
            ui::StyleType::Subtle,
        ));
        output
    }
}

pub async fn run(
    from: CurrencyCode,
    provider: &dyn RateProvider,
    store: &dyn RateStore,
) -> Result<()> {
    let term = Term::stdout();
    if !term.is_term() {
        bail!("Interactive mode requires a terminal");
    }

    let spinner = ui::new_spinner("Fetching exchange rates...");
    let quote = load_rates(provider, store).await;
    spinner.finish_and_clear();

    let mut screen = Screen::new(from, quote);
    term.hide_cursor()?;

    let result = event_loop(&term, &mut screen);

    term.show_cursor()?;
    term.clear_screen()?;
    result
}

fn event_loop(term: &Term, screen: &mut Screen) -> Result<()> {
    loop {
        term.clear_screen()?;
        term.write_line(&screen.render())?;

        match term.read_key()? {
            Key::Char(c @ ('0'..='9' | '.')) => screen.push_amount_char(c),
            Key::Backspace => screen.pop_amount_char(),
            Key::ArrowRight | Key::Tab => screen.select_next(),
            Key::ArrowLeft => screen.select_previous(),
            Key::Char('q') | Key::Escape => return Ok(()),
            _ => {}
        }
    }
}
