// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use up_client::collections::{Classes, SubmitOutcome};
use up_client::{ClientConfig, PortalApi};
use up_core::models::ClassDraft;

use super::print_list;
use crate::cli::{ClassesCommand, OutputFormat};
use crate::display::format_class_line;
use crate::error::{Error, Result};

pub async fn run(config: &ClientConfig, cmd: ClassesCommand) -> Result<()> {
    match cmd {
        ClassesCommand::List { output } => list(config, output).await,
        ClassesCommand::Add {
            code,
            name,
            instructor,
            schedule,
        } => add(config, code, name, instructor, schedule).await,
    }
}

async fn list(config: &ClientConfig, output: OutputFormat) -> Result<()> {
    let mut classes = Classes::new(PortalApi::new(config));
    classes.load().await?;
    print_list(classes.items(), output, format_class_line)
}

async fn add(
    config: &ClientConfig,
    code: String,
    name: String,
    instructor: String,
    schedule: String,
) -> Result<()> {
    let mut classes = Classes::new(PortalApi::new(config));
    *classes.draft_mut() = ClassDraft {
        code,
        name,
        instructor,
        schedule,
    };
    match classes.submit().await? {
        SubmitOutcome::Sent => {
            println!("class created ({} total)", classes.items().len());
            Ok(())
        }
        SubmitOutcome::Rejected(fields) => Err(Error::Rejected { fields }),
    }
}
