pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::currency::CurrencyCode;
use crate::providers::open_er::OpenErApiProvider;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug)]
pub enum AppCommand {
    Convert {
        amount: String,
        from: Option<CurrencyCode>,
    },
    Rates,
    Interactive,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let default_from: CurrencyCode = config.currency.parse()?;
    let provider = OpenErApiProvider::new(&config.provider.base_url);
    let store = store::open_default();

    match command {
        AppCommand::Convert { amount, from } => {
            cli::convert::run(
                &amount,
                from.unwrap_or(default_from),
                &provider,
                store.as_ref(),
            )
            .await
        }
        AppCommand::Rates => cli::rates::run(&provider, store.as_ref()).await,
        AppCommand::Interactive => {
            cli::interactive::run(default_from, &provider, store.as_ref()).await
        }
    }
}
