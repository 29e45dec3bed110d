pub mod convert;
pub mod rates;
pub mod setup;
pub mod ui;

use crate::core::config::AppConfig;
use crate::core::{RateTable, RefreshStatus};
use crate::providers::NbuRateProvider;
use anyhow::anyhow;
use std::time::Duration;
use tracing::info;

/// Populates `table` from the NBU, or from the fallback rates when offline or
/// when the request fails.
pub async fn load_rates(table: &mut RateTable, config: &AppConfig) -> RefreshStatus {
    if config.offline {
        info!("Offline mode, loading fallback rates");
        table.load_fallback();
        return RefreshStatus::Fallback {
            error: anyhow!("offline mode is enabled"),
        };
    }

    let provider = NbuRateProvider::new(
        config.nbu_base_url(),
        Duration::from_secs(config.request_timeout_secs),
    );
    let spinner = ui::new_spinner("Loading NBU exchange rates...");
    let status = table.refresh(&provider).await;
    spinner.finish_and_clear();
    status
}
