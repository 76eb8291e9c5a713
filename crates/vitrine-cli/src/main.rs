use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vitrine_core::AppConfig;

mod commands;

use commands::preview::{PreviewKind, PreviewOptions};

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Backend and motion tooling for the Vitrine agency site")]
struct Cli {
    /// Path to the configuration file (defaults to ~/.config/vitrine/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API until Ctrl+C
    Serve {
        /// Address to listen on, overrides server.bind_addr
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Print the service catalog
    Services,
    /// Play a scroll animation on a simulated stage and print its frames
    Preview {
        /// Animation kind
        #[arg(short, long, value_enum, default_value_t = PreviewKind::FadeUp)]
        kind: PreviewKind,
        /// Number of children for the stagger kind
        #[arg(short = 'n', long, default_value_t = 4)]
        children: usize,
        /// Play the enter transition only once
        #[arg(long)]
        once: bool,
        /// Simulate a user who prefers reduced motion
        #[arg(long)]
        reduced_motion: bool,
        /// Sampling rate of printed frames
        #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=240))]
        fps: u32,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Serve { bind } => commands::serve::run(config, bind).await,
        Commands::Services => commands::services::run(),
        Commands::Preview {
            kind,
            children,
            once,
            reduced_motion,
            fps,
        } => commands::preview::run(
            &config,
            PreviewOptions {
                kind,
                children,
                once,
                reduced_motion,
                fps,
            },
        ),
        Commands::Config { init } => {
            let path = cli.config.unwrap_or_else(AppConfig::config_path);
            commands::config::run(&config, &path, init)
        }
    }
}
