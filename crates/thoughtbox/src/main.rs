// SPDX-FileCopyrightText: 2026 Thoughtbox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thoughtbox - capture, categorize and browse short notes.
//!
//! This is the binary entry point. Each subcommand maps to one user action
//! of the capture and listing screens.

mod commands;
mod notice;
mod session;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use thoughtbox_config::ThoughtboxConfig;
use thoughtbox_core::{AppState, AuthAdapter, StorageAdapter};
use thoughtbox_ocr::MockOcr;
use thoughtbox_thoughts::ThoughtStore;

use crate::commands::{App, Terminal};
use crate::notice::CommandError;
use crate::session::LocalSession;

/// Thoughtbox - capture, categorize and browse short notes.
#[derive(Parser, Debug)]
#[command(name = "thoughtbox", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List thoughts, newest first.
    List {
        /// Only show thoughts in this category ("All" shows everything).
        #[arg(long, short)]
        category: Option<String>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Save a new thought.
    Add {
        /// Thought text; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
        /// Category for the thought (defaults to display.default_category).
        #[arg(long, short)]
        category: Option<String>,
    },
    /// Extract text from an image and save it as a thought.
    Capture {
        /// Image (or, with --document, document) to read.
        path: PathBuf,
        #[arg(long, short)]
        category: Option<String>,
        /// Treat the file as a document rather than a photo.
        #[arg(long)]
        document: bool,
    },
    /// Delete a thought.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Move a thought to another category.
    Recategorize { id: String, category: String },
    /// Show the category filters.
    Categories,
}

/// Initialize the tracing subscriber with an EnvFilter.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to
/// thoughtbox crates and everything else logs warnings only.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("thoughtbox={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Option<ThoughtboxConfig> {
    let loaded = match path {
        Some(path) => thoughtbox_config::load_and_validate_path(path),
        None => thoughtbox_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => Some(config),
        Err(errors) => {
            thoughtbox_config::render_errors(&errors);
            None
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(config) = load_config(cli.config.as_deref()) else {
        return ExitCode::FAILURE;
    };
    init_tracing(&config.app.log_level);

    if cli.plain || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let storage = match thoughtbox_storage::open_storage(&config.storage).await {
        Ok(storage) => storage,
        Err(e) => {
            tracing::error!(
                error = %e,
                backend = %config.storage.backend,
                "failed to open storage"
            );
            eprintln!("{}", notice::Notice::LoadFailed.to_string().red());
            return ExitCode::FAILURE;
        }
    };

    let session = LocalSession::new();
    if let Err(e) = session.on_app_state(AppState::Active).await {
        warn!(error = %e, "session did not start refreshing");
    }

    let app = App {
        store: ThoughtStore::new(storage.clone()),
        ocr: Arc::new(MockOcr::new(&config.ocr)),
        config,
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let mut term = Terminal {
        input: &mut input,
        out: &mut out,
        err: &mut err,
    };

    let result = run(&app, cli.command, &mut term).await;

    if let Err(e) = session.on_app_state(AppState::Background).await {
        warn!(error = %e, "session did not stop refreshing");
    }
    shutdown(storage.as_ref()).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(app: &App, command: Commands, term: &mut Terminal<'_>) -> Result<(), CommandError> {
    match command {
        Commands::List { category, json } => {
            app.list(category.as_deref(), json, term).await?;
        }
        Commands::Add { content, category } => {
            app.add(&content, category, term).await?;
        }
        Commands::Capture {
            path,
            category,
            document,
        } => {
            app.capture(&path, category, document, term).await?;
        }
        Commands::Delete { id, yes } => {
            app.delete(&id, yes, term).await?;
        }
        Commands::Recategorize { id, category } => {
            app.recategorize(&id, &category, term).await?;
        }
        Commands::Categories => app.categories(term)?,
    }
    Ok(())
}

async fn shutdown(storage: &dyn StorageAdapter) {
    if let Err(e) = storage.close().await {
        warn!(error = %e, "storage did not close cleanly");
    }
    debug!("shutdown complete");
}

fn report(error: &CommandError) {
    match error {
        CommandError::Failed { source, .. } => {
            debug!(error = %source, "command failed");
            eprintln!("{}", error.to_string().red());
        }
        _ => eprintln!("{}", error.to_string().red()),
    }
}
