use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::info;

use vitrine_core::{ApiServer, AppConfig, AppState, ContactStore};

/// Run the HTTP API until Ctrl+C
pub async fn run(config: AppConfig, bind: Option<String>) -> Result<()> {
    let mut server_config = config.server;
    if let Some(bind) = bind {
        server_config.bind_addr = bind;
    }

    // Create shutdown channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Setup signal handler for graceful shutdown
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        let _ = shutdown_tx.send(true);
    });

    println!(
        "Serving on http://{} ({:?} validation). Press Ctrl+C to stop.",
        server_config.bind_addr, server_config.contact_validation
    );

    let store = Arc::new(ContactStore::new());
    let server = ApiServer::new(AppState::new(store.clone(), server_config));
    server.run(shutdown_rx).await?;

    println!("Server stopped. {} contact message(s) received.", store.len().await);
    Ok(())
}
