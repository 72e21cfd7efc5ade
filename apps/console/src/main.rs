//! Atrium console demo.
//!
//! Stands in for the dashboard's login view: wires the client stores against
//! file-backed storage slots, drives a login with the demo credentials, and
//! routes on the outcome. All navigation and messaging stays here; the
//! stores never touch the UI.

mod config;

use std::sync::Arc;

use mock_api::Latency;
use preferences::PreferenceStore;
use roster::RosterStore;
use session::{CredentialDirectory, SessionStore};
use storage::FileStateStore;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(&config.log_level);

    let slots = Arc::new(FileStateStore::new(&config.data_dir));
    let latency = Latency::from_millis(config.latency_ms);

    let sessions = SessionStore::restore(CredentialDirectory::demo(), slots.clone())
        .await
        .with_latency(latency);
    let prefs = PreferenceStore::restore(slots.clone()).await;
    let roster =
        RosterStore::new().with_latency(Latency::from_millis(roster::DEFAULT_LATENCY_MS));

    if let Some(user) = sessions.current_user().await {
        tracing::info!(email = %user.email, "Restored an authenticated session");
    }

    match sessions.login(&config.demo_email, &config.demo_password).await {
        Ok(user) => {
            tracing::info!(name = %user.name, role = ?user.role, "Logged in");
        }
        Err(error) => {
            tracing::error!(%error, "Login failed");
            anyhow::bail!("login failed: {error}");
        }
    }

    let managed = roster.fetch_users().await;
    tracing::info!(count = managed.len(), "Fetched the managed-user roster");

    let current = prefs.preferences().await;
    tracing::info!(
        mode = ?current.mode,
        color = ?current.color,
        radius_px = current.corner_radius.px(),
        "Active preferences"
    );

    sessions.logout().await;
    tracing::info!("Logged out");

    Ok(())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
