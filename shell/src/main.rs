//! Terminal front end for the todo list
//!
//! Reads commands from stdin and prints the rendered list to stdout.
//! Logs go to stderr.

mod config;
mod input;
mod output;
mod shell;

use std::io;
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_core::schedule::{Clock, SystemClock};
use todo_core::storage::{FileSlot, TaskPersistence};
use todo_core::task::TaskStore;
use todo_core::TodoApp;

use crate::config::Config;
use crate::shell::Shell;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_shell=info,todo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().context("Failed to read configuration")?;
    tracing::info!("Using data directory: {:?}", config.data_dir);

    let clock: Rc<dyn Clock> = Rc::new(SystemClock);
    let persistence = TaskPersistence::new(FileSlot::new(&config.data_dir));
    let store = TaskStore::open(persistence, Rc::clone(&clock));
    let app = TodoApp::new(store, clock, config.locale);

    let shell = Shell::new(app, config, io::stdin().lock(), io::stdout().lock());
    shell.run()?;
    Ok(())
}
