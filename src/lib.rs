pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: String,
        from: String,
        to: String,
    },
    Rates,
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    offline: bool,
) -> Result<()> {
    info!("Currency converter starting...");

    let mut config = match config_path {
        Some(path) => crate::core::config::AppConfig::load_from_path(path)?,
        None => crate::core::config::AppConfig::load()?,
    };
    config.offline |= offline;
    debug!("Loaded config: {config:#?}");

    let mut table = crate::core::RateTable::new();
    let status = cli::load_rates(&mut table, &config).await;
    eprintln!("{}", cli::ui::status_line(&status));

    match command {
        AppCommand::Convert { amount, from, to } => {
            cli::convert::run(&table, &amount, &from, &to)
        }
        AppCommand::Rates => cli::rates::run(&table),
    }
}
