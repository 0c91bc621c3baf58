// SPDX-FileCopyrightText: 2026 Nossa Maternidade Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! nat - Emotional risk analysis for NAT-AI chat messages.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod analyze;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nat_config::NatConfig;

/// nat - Emotional risk analysis for NAT-AI chat messages.
#[derive(Parser, Debug)]
#[command(name = "nat", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one chat message and print the intervention, if any.
    Analyze {
        /// The message text.
        message: String,
        /// Sent to the remote classifier alongside the message.
        #[arg(long)]
        user_id: Option<String>,
        /// Name used to address the user in the intervention message.
        #[arg(long)]
        user_name: Option<String>,
        /// Skip the remote classifier even when it is enabled.
        #[arg(long)]
        local_only: bool,
        /// Print the analysis as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let loaded = match &cli.config {
        Some(path) => nat_config::load_and_validate_path(path),
        None => nat_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            nat_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.log_level);
    nat_risk::recording::register_metrics();

    match cli.command {
        Some(Commands::Analyze {
            message,
            user_id,
            user_name,
            local_only,
            json,
        }) => {
            let analyzer = match analyze::build_analyzer(&config, local_only) {
                Ok(analyzer) => analyzer,
                Err(e) => {
                    eprintln!("nat: {e}");
                    std::process::exit(1);
                }
            };
            let assessment = analyzer
                .assess(&message, user_id.as_deref(), user_name.as_deref())
                .await;
            if json {
                println!("{}", analyze::render_json(&assessment));
            } else {
                print!("{}", analyze::render_text(&assessment));
            }
        }
        Some(Commands::Config) => match render_config(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => {
                eprintln!("nat: failed to render config: {e}");
                std::process::exit(1);
            }
        },
        None => {
            println!("nat: use --help for available commands");
        }
    }
}

/// TOML rendering of the effective configuration with the anon key masked.
fn render_config(config: &NatConfig) -> Result<String, toml::ser::Error> {
    let mut shown = config.clone();
    if shown.remote.anon_key.is_some() {
        shown.remote.anon_key = Some("[REDACTED]".to_string());
    }
    toml::to_string_pretty(&shown)
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nat={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
