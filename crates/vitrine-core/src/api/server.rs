//! HTTP server loop
//!
//! Binds the configured address and serves the API router until the
//! shutdown channel flips to `true`.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use super::{build_router, AppState};
use crate::{Error, Result};

/// HTTP server for the site API
pub struct ApiServer {
    state: AppState,
}

impl ApiServer {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Bind the configured address and serve until shutdown
    pub async fn run(&self, shutdown_rx: watch::Receiver<bool>) -> Result<()> {
        let addr: SocketAddr = self
            .state
            .config
            .bind_addr
            .parse()
            .map_err(|e| {
                Error::Config(format!(
                    "invalid bind addr {}: {}",
                    self.state.config.bind_addr, e
                ))
            })?;

        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, shutdown_rx).await
    }

    /// Serve on an already bound listener until shutdown
    pub async fn serve(
        &self,
        listener: TcpListener,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> Result<()> {
        let local = listener.local_addr()?;
        info!("API server listening on: {}", local);

        let app = build_router(self.state.clone());
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                while !*shutdown_rx.borrow() {
                    if shutdown_rx.changed().await.is_err() {
                        break;
                    }
                }
                info!("API server shutting down");
            })
            .await
            .map_err(|e| Error::Server(e.to_string()))?;

        let stored = self.state.store.len().await;
        info!(stored, "API server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ServerConfig;
    use crate::contact::ContactStore;

    fn assert_send<T: Send>(_: &T) {}

    #[tokio::test]
    async fn test_serve_future_is_send() {
        let server = ApiServer::new(AppState::new(
            Arc::new(ContactStore::new()),
            ServerConfig::default(),
        ));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let (_tx, rx) = watch::channel(false);

        assert_send(&server.serve(listener, rx.clone()));
        assert_send(&server.run(rx));
    }
}
