//! FAUNARA - terminal client for the FAUNARA animal classification service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use tracing::{error, info};

use faunara_app::config::{default_config_path, init_config, load_settings, Settings};

/// FAUNARA - classify animals from images or attributes, and teach the
/// service new ones
#[derive(Parser, Debug)]
#[command(name = "faunara", version)]
#[command(about = "Terminal client for the FAUNARA animal classification service", long_about = None)]
struct Args {
    /// Base URL of the FAUNARA service (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default config file (using --server if given) and exit.
    /// An existing file is left unchanged.
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let config_path = args.config.clone().or_else(default_config_path);

    if args.init_config {
        let path = config_path.ok_or_else(|| eyre!("No config directory on this platform"))?;
        if init_config(&path, args.server.as_deref())? {
            println!("Created {}", path.display());
        } else {
            println!("Config already exists at {}, left unchanged", path.display());
        }
        return Ok(());
    }

    // Log to file, the terminal belongs to the TUI
    faunara_core::logging::init()?;

    let mut settings = match &config_path {
        Some(path) => load_settings(path),
        None => Settings::default(),
    };
    if let Some(server) = args.server {
        settings.server.base_url = server;
    }
    info!("Service URL: {}", settings.server.base_url);

    let result = faunara_tui::run(settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("FAUNARA client exiting");

    Ok(result?)
}
