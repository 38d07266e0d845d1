// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use up_client::collections::{Chat, SubmitOutcome};
use up_client::{ClientConfig, PortalApi};

use super::print_list;
use crate::cli::{ChatCommand, OutputFormat};
use crate::display::format_message_line;
use crate::error::{Error, Result};

pub async fn run(config: &ClientConfig, cmd: ChatCommand) -> Result<()> {
    match cmd {
        ChatCommand::Show {
            class_code,
            limit,
            output,
        } => show(config, class_code, limit, output).await,
        ChatCommand::Send {
            class_code,
            message,
        } => send(config, class_code, message).await,
    }
}

async fn show(
    config: &ClientConfig,
    class_code: String,
    limit: Option<usize>,
    output: OutputFormat,
) -> Result<()> {
    let mut chat = Chat::new(PortalApi::new(config), class_code);
    if let Some(limit) = limit {
        chat = chat.with_limit(limit);
    }
    chat.load().await?;
    print_list(chat.items(), output, format_message_line)
}

async fn send(config: &ClientConfig, class_code: String, message: String) -> Result<()> {
    let mut chat = Chat::new(PortalApi::new(config), class_code);
    chat.draft_mut().content = message;
    match chat.submit().await? {
        SubmitOutcome::Sent => {
            // Echo the refreshed tail so the sender sees their message land.
            for item in chat.items() {
                println!("{}", format_message_line(item));
            }
            Ok(())
        }
        SubmitOutcome::Rejected(fields) => Err(Error::Rejected { fields }),
    }
}
