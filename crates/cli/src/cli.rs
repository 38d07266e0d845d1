// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface definition.
//!
//! One subcommand per portal view, each with a list operation and a create
//! operation. Field flags feed the view-model draft verbatim; validation
//! happens in the view-model, not in clap, so the shell surfaces the same
//! rejections the portal UI would swallow.

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for list commands.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "uport")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line shell for the Uni Portal collection store")]
pub struct Cli {
    /// Backend base address (overrides UPORT_BACKEND_URL)
    #[arg(long, global = true, value_name = "url")]
    pub backend: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Browse and create classes
    #[command(subcommand)]
    Classes(ClassesCommand),
    /// Browse and post notifications
    #[command(subcommand)]
    Notifications(NotificationsCommand),
    /// Browse and submit tuition payments
    #[command(subcommand)]
    Payments(PaymentsCommand),
    /// Read and send class chat messages
    #[command(subcommand)]
    Chat(ChatCommand),
}

#[derive(Subcommand)]
pub enum ClassesCommand {
    /// List all classes
    List {
        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },
    /// Create a class
    Add {
        /// Course code (e.g. CS101)
        #[arg(long)]
        code: String,
        /// Course name
        #[arg(long)]
        name: String,
        /// Instructor name
        #[arg(long, default_value = "")]
        instructor: String,
        /// Schedule description (e.g. "MWF 10:00")
        #[arg(long, default_value = "")]
        schedule: String,
    },
}

#[derive(Subcommand)]
pub enum NotificationsCommand {
    /// List notifications
    List {
        /// Only show notifications for this class
        #[arg(long, value_name = "code")]
        class_code: Option<String>,
        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },
    /// Post a notification
    Post {
        /// Notification title
        #[arg(long)]
        title: String,
        /// Notification body
        #[arg(long)]
        body: String,
        /// Scope the notification to a class
        #[arg(long, value_name = "code", default_value = "")]
        class_code: String,
    },
}

#[derive(Subcommand)]
pub enum PaymentsCommand {
    /// List payments
    List {
        /// Only show payments for this student
        #[arg(long, value_name = "id")]
        student_id: Option<String>,
        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },
    /// Submit a tuition payment
    Pay {
        /// Student identifier
        #[arg(long, value_name = "id")]
        student_id: String,
        /// Amount as decimal text (e.g. 120.50)
        #[arg(long)]
        amount: String,
        /// Billing term (e.g. "Fall 2026")
        #[arg(long)]
        term: String,
    },
}

#[derive(Subcommand)]
pub enum ChatCommand {
    /// Show recent messages for a class
    Show {
        /// Class code (chat scope)
        class_code: String,
        /// Maximum number of messages to fetch
        #[arg(long, short = 'n')]
        limit: Option<usize>,
        /// Output format
        #[arg(long, short, default_value = "text")]
        output: OutputFormat,
    },
    /// Send a message to a class chat
    Send {
        /// Class code (chat scope)
        class_code: String,
        /// Message text
        message: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
