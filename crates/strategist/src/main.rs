// SPDX-FileCopyrightText: 2026 Strategist Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strategist - a personal AI content strategist backend.
//!
//! This is the binary entry point for the Strategist server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Strategist - a personal AI content strategist backend.
#[derive(Parser, Debug)]
#[command(name = "strategist", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the Strategist API server.
    Serve,
    /// Print the resolved configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match strategist_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            strategist_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => match toml::to_string_pretty(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("error: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("strategist: use --help for available commands");
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // A trivial allocation suffices; the global_allocator attribute
        // fails to compile at all if jemalloc is unavailable.
        let v = vec![0u8; 1024];
        assert_eq!(v.len(), 1024);
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = strategist_config::load_and_validate()
            .expect("default config should be valid");
        assert_eq!(config.server.port, 8700);
    }
}
