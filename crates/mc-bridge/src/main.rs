mod config;
mod console;

use std::path::Path;
use std::sync::Arc;

use config::BridgeConfig;
use mc_bridge_inventory::{ItemRegistry, PacketSink, SessionDriver};
use tokio::io::AsyncBufReadExt;
use tracing::{error, info, warn};

const CONFIG_PATH: &str = "bridge.toml";

#[tokio::main]
async fn main() {
    let config = if Path::new(CONFIG_PATH).exists() {
        match BridgeConfig::load(CONFIG_PATH) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load {CONFIG_PATH}: {e}");
                std::process::exit(1);
            }
        }
    } else {
        BridgeConfig::default()
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("MC-Bridge v{} starting", env!("CARGO_PKG_VERSION"));

    let registry = match &config.items.mappings {
        Some(path) => ItemRegistry::load(path),
        None => ItemRegistry::bundled(),
    };
    let registry = match registry {
        Ok(r) => Arc::new(r),
        Err(e) => {
            error!("Failed to load item mappings: {e}");
            std::process::exit(1);
        }
    };
    info!("Loaded {} item mappings", registry.len());
    info!(
        "Reopen interval: {}ms (double chest floor {}ms)",
        config.inventory.min_reopen_interval_ms, config.inventory.double_chest_open_floor_ms
    );

    let (sink, mut upstream, mut downstream) = PacketSink::channel();

    // No real connections here; print what would go out on each side.
    tokio::spawn(async move {
        while let Some(pkt) = upstream.recv().await {
            info!("-> client 0x{:02X} {pkt:?}", pkt.packet_id());
        }
    });
    tokio::spawn(async move {
        while let Some(pkt) = downstream.recv().await {
            info!("-> server 0x{:02X} {pkt:?}", pkt.packet_id());
        }
    });

    let (driver, events) = SessionDriver::new(config.inventory, registry.clone(), sink);
    let session = tokio::spawn(driver.run());

    // Console REPL: each line becomes one session event
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(l)) => l,
                    Ok(None) => break,
                    Err(e) => {
                        error!("Console read failed: {e}");
                        break;
                    }
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match console::parse_command(line, &registry) {
                    Ok(event) => {
                        if events.send(event).is_err() {
                            break;
                        }
                    }
                    Err(e) => warn!("{e}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    drop(events);
    match session.await {
        Ok(session) => info!(
            "Bridge shut down (window state {:?}, held slot {})",
            session.state(),
            session.player_inventory().held_slot()
        ),
        Err(e) => error!("Session task failed: {e}"),
    }
}
