mod config;
mod relay;
mod search;

use std::sync::Arc;

use teloxide::prelude::*;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;

use config::Config;
use relay::{EchoReceiver, ForwardReceiver, RelayError, Router, TelegramClient, UpdatePoller};
use search::SearchEngine;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive(tracing::Level::INFO.into()),
            ),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tgrelay.json".to_string());
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    info!("Loaded config from {config_path}");
    info!("Target chat: {}", config.target_chat_id);
    if config.update_offset != 0 {
        info!("Resuming from offset {}", config.update_offset);
    }

    let bot = Bot::new(&config.telegram_bot_token);
    let transport = Arc::new(TelegramClient::new(bot.clone()));

    // Delivery failures from any receiver fan in here; this task logs and
    // drops them so a receiver can never block on reporting.
    let (err_tx, mut err_rx) = mpsc::unbounded_channel::<RelayError>();
    tokio::spawn(async move {
        while let Some(err) = err_rx.recv().await {
            error!("{err}");
        }
    });

    let mut engine = SearchEngine::new();
    for phrase in &config.keywords {
        engine.add_query(phrase);
    }
    if engine.is_empty() {
        warn!("No keywords configured, group messages will never be forwarded");
    } else {
        info!("Search engine seeded with {} keyword(s)", engine.len());
    }

    let echo = EchoReceiver::new(transport.clone(), err_tx.clone());
    let forward = ForwardReceiver::new(transport, err_tx, config.target_chat_id, engine);
    let router = Router::new(echo, forward);

    let (update_tx, update_rx) = mpsc::channel(32);
    let poller = UpdatePoller::new(bot, config.update_offset, config.poll_timeout_secs);
    let stop = poller.stop_handle();
    tokio::spawn(poller.run(update_tx));
    let router_task = tokio::spawn(router.route(update_rx));

    info!("Listening for updates");
    shutdown_signal().await;
    info!("Shutting down");

    // Stop the poller; it drops its channel sender, the router drains what
    // is left and returns.
    stop.notify_one();
    if let Err(e) = router_task.await {
        warn!("Router task failed: {e}");
    }
    info!("Shutdown complete");
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut terminate =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = terminate.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    }
}
