use std::sync::Arc;
use std::time::Duration;

use storelens_analysis::outreach::Signer;
use storelens_common::observability::LogConfig;
use storelens_common::observability::init_logging;
use storelens_common::{Result, StorelensError};
use storelens_config::{StorelensConfig, StorelensConfigLoader};
use storelens_http::PageFetcher;
use storelens_server::{run_server, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // 1) Load config (env wins); the file is optional so defaults alone
    //    boot the service.
    let cfg: StorelensConfig = StorelensConfigLoader::new()
        .with_file("storelens.yaml")
        .load()
        .map_err(|e| StorelensError::Config(e.to_string()))?;

    let log_path = init_logging(LogConfig {
        emit_stderr: true,
        ..LogConfig::default()
    })?;
    tracing::info!(log_path = %log_path.display(), "storelens starting");

    let fetcher = PageFetcher::new()
        .map_err(|e| StorelensError::Analysis(e.to_string()))?
        .with_timeout(Duration::from_secs(cfg.fetch.timeout_secs));

    let signer = Signer {
        agency_name: cfg.outreach.agency_name,
        contact_person: cfg.outreach.contact_person,
        scheduling_link: cfg.outreach.scheduling_link,
    };

    let state = AppState::new(Arc::new(fetcher), signer);
    run_server(state, &cfg.server.host, cfg.server.port)
        .await
        .map_err(StorelensError::Server)
}
