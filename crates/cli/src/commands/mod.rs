// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers, one module per portal view.
//!
//! Each handler builds the view-model for its collection, drives the
//! requested operation, and renders the result. Validation rejections from
//! a view-model become [`Error::Rejected`](crate::error::Error::Rejected)
//! so they reach stderr instead of being silently swallowed.

pub mod chat;
pub mod classes;
pub mod notifications;
pub mod payments;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Print a list either as formatted lines or as pretty JSON.
pub(crate) fn print_list<T, F>(items: &[T], output: OutputFormat, format_line: F) -> Result<()>
where
    T: serde::Serialize,
    F: Fn(&T) -> String,
{
    match output {
        OutputFormat::Text => {
            for item in items {
                println!("{}", format_line(item));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
    }
    Ok(())
}
