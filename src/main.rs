//! Ordemo Leads - Main entry point
//!
//! Serves `POST /api/leads` for the landing page and forwards each accepted
//! lead to the sales inbox.

use anyhow::Result;
use ordemo_leads::server::{run_server, AppState};
use ordemo_leads::services::{LeadService, LeadServiceImpl};
use ordemo_leads::{Config, LeadNotifier};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (RUST_LOG wins over LOG_LEVEL)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded successfully");

    // Mail relay
    let notifier = match LeadNotifier::from_config(&config) {
        Ok(notifier) => notifier,
        Err(e) => {
            error!("Failed to set up SMTP relay: {}", e);
            return Err(e.into());
        }
    };

    if notifier.is_enabled() {
        info!("Lead notifications enabled");
    } else {
        warn!("SMTP_USER/SMTP_PASS not set, leads will be accepted without email notification");
    }

    let service = Arc::new(LeadServiceImpl::new(notifier)) as Arc<dyn LeadService>;
    let state = AppState::new(service);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Lead server listening on {}", addr);

    run_server(listener, state).await?;

    info!("Lead server shutdown complete");
    Ok(())
}
