use std::time::Duration;

use anyhow::{Context, Result};
use clinic_core::SessionStore;
use clinic_gateway::GenerationGateway;
use tracing_subscriber::EnvFilter;

mod config;
mod handler;
mod keyboards;
mod telegram;

use config::BotConfig;
use handler::Dispatcher;
use telegram::TelegramClient;

/// Sessions idle longer than this are dropped by the daily eviction tick.
const SESSION_MAX_IDLE_DAYS: i64 = 30;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BotConfig::load().context("loading bot configuration")?;

    let store = SessionStore::new();
    let gateway = GenerationGateway::for_generation(
        config.api_generation,
        &config.openai_api_key,
        &config.model,
    );
    let client = TelegramClient::new(&config.telegram_token);
    let dispatcher = Dispatcher::new(store.clone(), gateway, client.clone());

    spawn_eviction_tick(store.clone());

    tracing::info!("clinic bot started, polling for updates");

    // One logical consumer: updates are handled in arrival order
    let mut offset = 0i64;
    loop {
        match client.get_updates(offset).await {
            Ok(updates) => {
                for update in updates {
                    offset = offset.max(update.update_id + 1);
                    dispatcher.dispatch(update).await;
                }
            }
            Err(err) => {
                tracing::warn!("getUpdates failed: {err}");
                tokio::time::sleep(Duration::from_secs(5)).await;
            }
        }
    }
}

/// Daily cleanup of long-idle sessions.
fn spawn_eviction_tick(store: SessionStore) {
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(24 * 60 * 60));
        loop {
            tick.tick().await;
            store
                .evict_idle(chrono::Duration::days(SESSION_MAX_IDLE_DAYS))
                .await;
        }
    });
}
