// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! uprs - command-line shell for the Uni Portal client.
//!
//! The shell is purely presentational: it picks a collection view-model,
//! drives its load/submit operations against the configured backend, and
//! renders the results. All synchronization behavior lives in `up-client`.
//!
//! # Main Components
//!
//! - [`Cli`] - clap command tree (one subcommand per portal view)
//! - [`run`] - testable entry point executing a parsed command
//! - [`Error`] - shell-level errors (transport failures and surfaced
//!   validation rejections)

mod cli;
mod commands;
mod display;

pub mod error;

pub use cli::{
    ChatCommand, ClassesCommand, Cli, Command, NotificationsCommand, OutputFormat,
    PaymentsCommand,
};
pub use error::{Error, Result};

use tracing::debug;
use up_client::ClientConfig;

/// Execute a parsed CLI command. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub async fn run(cli: Cli) -> Result<()> {
    let config = match cli.backend {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    debug!(backend = %config.base_url, "resolved backend address");
    match cli.command {
        Command::Classes(cmd) => commands::classes::run(&config, cmd).await,
        Command::Notifications(cmd) => commands::notifications::run(&config, cmd).await,
        Command::Payments(cmd) => commands::payments::run(&config, cmd).await,
        Command::Chat(cmd) => commands::chat::run(&config, cmd).await,
    }
}
