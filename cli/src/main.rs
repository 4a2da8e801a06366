//! Interactive terminal host for the todo client core.
//!
//! # Design
//! `main` sets up logging from the parsed `Cli` and runs the stdin loop.
//! Each line is parsed into a `Command` and handed to `session::dispatch`,
//! which drives the controller. Notices are shown by the surface, so the loop only logs
//! that a command did not complete.

mod command;
mod session;
mod terminal;
mod transport;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use todo_core::config::DEFAULT_API_PATH;
use todo_core::{ClientConfig, TodoApp, TodoClient};
use tracing::{debug, info};

use command::Command;
use terminal::TerminalSurface;
use transport::UreqTransport;

#[derive(Parser)]
#[command(name = "todo", about = "Manage a remote todo list from the terminal")]
struct Cli {
    /// Scheme and host of the todo API.
    #[arg(long, env = "TODO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    /// Path of the todo collection.
    #[arg(long, default_value = DEFAULT_API_PATH)]
    api_path: String,

    /// Also write the rendered list markup to this file after every change.
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::with_api_path(&cli.base_url, &cli.api_path);
    info!(url = %config.collection_url(), "starting todo client");

    let mut app = TodoApp::new(
        TodoClient::from_config(config),
        UreqTransport::new(),
        TerminalSurface::new(io::stdout(), cli.html),
    );
    // A failed first load is already reported; the session stays usable.
    let _ = app.load_all();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;
        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read command")?;

        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        if let Err(notice) = session::dispatch(&mut app, command) {
            debug!(%notice, "command did not complete");
        }
    }
    Ok(())
}
