//! Parley application binary - composition root.
//!
//! 1. Parse CLI flags and load the TOML configuration
//! 2. Initialize tracing (stderr, so logs don't interleave with the chat)
//! 3. Build the chat engine, validating the category table
//! 4. Run the interactive shell on stdin/stdout

mod cli;
mod shell;

use clap::Parser;

use parley_chat::ChatEngine;
use parley_core::config::ParleyConfig;

use cli::CliArgs;
use shell::Shell;

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let loaded = ParleyConfig::load_optional(&config_file);
    let found = matches!(loaded, Ok(Some(_)));
    let mut config = match loaded {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            init_tracing("info");
            tracing::error!(path = %config_file.display(), error = %e, "Failed to read configuration");
            return Err(e.into());
        }
    };
    args.apply(&mut config);
    if let Err(e) = config.validate() {
        init_tracing("info");
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    // Tracing.
    init_tracing(&config.general.log_level.to_lowercase());
    tracing::info!("Starting Parley v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), found, "Configuration resolved");

    if args.init_config {
        if let Err(e) = cli::write_initial_config(&config_file, config) {
            tracing::error!(error = %e, "Refusing to write configuration");
            return Err(e.into());
        }
        println!("Wrote configuration to {}", config_file.display());
        return Ok(());
    }

    // Engine.
    let engine = match ChatEngine::new(&config) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start chatbot");
            return Err(e.into());
        }
    };

    // Shell.
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&engine, stdin.lock(), stdout.lock()).run()?;

    tracing::info!("Session ended");
    Ok(())
}
