use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use collision::ScalingLawEngine;
use collision_server::{ServerConfig, router};
use plot::MapRenderer;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "collision-server")]
#[command(about = "HTTP service for planetary collision outcomes")]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind, overriding the configuration
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "collision_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match ServerConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                error!("{err}");
                std::process::exit(1);
            }
        },
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }

    let engine = Arc::new(ScalingLawEngine::new());
    let renderer = Arc::new(MapRenderer::new(config.render.width, config.render.height));
    let app = router(&config, engine, renderer);

    let listener = match TcpListener::bind(config.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {err}", config.bind);
            std::process::exit(1);
        }
    };

    info!(
        modules = ?config.modules.keys().collect::<Vec<_>>(),
        "Serving http://{}{}",
        config.bind,
        config.base_path
    );

    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {err}");
    }
}
