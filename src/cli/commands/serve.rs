//! Start the HTTP server

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use todoapp::{TodoService, VERSION, server};

use crate::cli::app::ServerOverrides;

/// Start the server and block until it stops
pub fn serve(config_path: Option<&Path>, overrides: &ServerOverrides) -> anyhow::Result<()> {
    let config = super::load_config(config_path, overrides)?;
    let service = Arc::new(TodoService::new(config.list.page_size));

    println!("{} {}", "todoapp".green().bold(), format!("v{VERSION}").dimmed());
    println!(
        "  Listening on {}",
        format!("http://{}/todos", config.server.socket_addr()).cyan()
    );
    println!(
        "  {} workers, {} tasks per page",
        config.server.workers, config.list.page_size
    );
    println!();
    println!("Press Ctrl+C to stop");

    server::serve(&config, service)
}
