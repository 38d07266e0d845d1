// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use up_client::collections::{Notifications, SubmitOutcome};
use up_client::{ClientConfig, PortalApi};
use up_core::models::NotificationDraft;

use super::print_list;
use crate::cli::{NotificationsCommand, OutputFormat};
use crate::display::format_notification_line;
use crate::error::{Error, Result};

pub async fn run(config: &ClientConfig, cmd: NotificationsCommand) -> Result<()> {
    match cmd {
        NotificationsCommand::List { class_code, output } => {
            list(config, class_code, output).await
        }
        NotificationsCommand::Post {
            title,
            body,
            class_code,
        } => post(config, title, body, class_code).await,
    }
}

async fn list(
    config: &ClientConfig,
    class_code: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let mut notifications = Notifications::new(PortalApi::new(config));
    notifications.set_scope(class_code);
    notifications.load().await?;
    print_list(notifications.items(), output, format_notification_line)
}

async fn post(
    config: &ClientConfig,
    title: String,
    body: String,
    class_code: String,
) -> Result<()> {
    let mut notifications = Notifications::new(PortalApi::new(config));
    *notifications.draft_mut() = NotificationDraft {
        title,
        body,
        class_code,
    };
    match notifications.submit().await? {
        SubmitOutcome::Sent => {
            println!(
                "notification posted ({} total)",
                notifications.items().len()
            );
            Ok(())
        }
        SubmitOutcome::Rejected(fields) => Err(Error::Rejected { fields }),
    }
}
