//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use todoapp::{AppConfig, VERSION};

/// todoapp - In-memory task list backend
#[derive(Parser, Debug)]
#[command(
    name = "todoapp",
    version,
    about = "In-memory task list backend",
    long_about = "Serve a JSON HTTP API for managing todo items.\n\n\
                  Tasks live in memory only and are lost when the server stops.\n\
                  Settings come from a TOML file, TODOAPP_* environment variables\n\
                  and command-line flags, in increasing order of precedence."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServerOverrides),

    /// Print the effective configuration as TOML
    Config(ServerOverrides),

    /// Show version
    Version,
}

/// Flags that override file and environment settings
#[derive(Args, Debug, Clone, Default)]
pub struct ServerOverrides {
    /// Address to bind
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Number of request worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Tasks per page in list responses
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl ServerOverrides {
    /// Apply every flag that was given
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind.clone_from(bind);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(workers) = self.workers {
            config.server.workers = workers;
        }
        if let Some(page_size) = self.page_size {
            config.list.page_size = page_size;
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Serve(overrides)) => commands::serve(config_path, &overrides),
        Some(Command::Config(overrides)) => commands::show_config(config_path, &overrides),
        Some(Command::Version) => {
            println!("todoapp v{VERSION}");
            Ok(())
        },
        None => {
            println!("todoapp v{VERSION}");
            println!("\nRun 'todoapp --help' for usage");
            println!("Run 'todoapp serve' to start the server");
            Ok(())
        },
    }
}
