//! Roster server entry-point: loads settings, connects the pool, serves HTTP.

mod server;

use std::path::Path;

use actix_web::cookie::{Key, SameSite};
use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::config::AppSettings;
use roster::inbound::http::health::HealthState;
use roster::outbound::persistence::{DbPool, PoolConfig};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load settings: {error}"))?;
    let key = load_session_key(&settings.session_key_file(), settings.session_allow_ephemeral())?;
    let bind_addr = settings.bind_address()?;

    let mut config = ServerConfig::new(key, settings.cookie_secure(), SameSite::Lax, bind_addr);
    if let Some(url) = settings.database_url.as_deref() {
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.db_max_connections()))
            .await
            .wrap_err("failed to build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start server")?;
    info!(%bind_addr, "roster server listening");
    server.await.wrap_err("server terminated with an error")
}

fn load_session_key(path: &Path, allow_ephemeral: bool) -> Result<Key> {
    match std::fs::read(path) {
        // `Key::derive_from` panics on fewer than 32 bytes.
        Ok(bytes) if bytes.len() < 32 => Err(eyre!(
            "session key at {} must hold at least 32 bytes",
            path.display()
        )),
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) if cfg!(debug_assertions) || allow_ephemeral => {
            warn!(path = %path.display(), error = %e, "using temporary session key (dev only)");
            Ok(Key::generate())
        }
        Err(e) => Err(e).wrap_err_with(|| format!("failed to read session key at {}", path.display())),
    }
}
