//! Application struct that encapsulates server assembly and serving logic.

use crate::cli::Cli;
use fiire_core::config::{Config, UpstreamConfig};
use fiire_core::shutdown::SignalHandler;
use fiire_server::upstream::AnthropicExecutor;
use std::path::PathBuf;
use std::sync::Arc;

pub struct Application {
    config: Arc<Config>,
    router: axum::Router,
}

impl Application {
    /// Build the application from CLI args: resolve config once, build the
    /// upstream executor and router.
    pub fn build(cli: &Cli) -> anyhow::Result<Self> {
        let config = Arc::new(Config {
            host: cli.host.clone(),
            port: cli.port,
            static_root: PathBuf::from(&cli.root),
            upstream: UpstreamConfig::default(),
        });

        let upstream = Arc::new(AnthropicExecutor::new(&config.upstream)?);
        let router = fiire_server::build_router(config.clone(), upstream);

        Ok(Self { config, router })
    }

    /// Bind the listener, print the banner, and serve until interrupted.
    pub async fn serve(self) -> anyhow::Result<()> {
        let Self { config, router } = self;

        let (signal_handler, mut shutdown_rx) = SignalHandler::new();
        tokio::spawn(signal_handler.run());

        let addr = config.bind_addr();
        tracing::info!("Starting HTTP server on {addr}");
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        println!("FIIRE dev server on http://localhost:{}/", config.port);

        let shutdown = async move {
            let _ = shutdown_rx.wait_for(|v| *v).await;
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shut down.");
        Ok(())
    }
}
