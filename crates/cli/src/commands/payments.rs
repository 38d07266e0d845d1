// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use up_client::collections::{Payments, SubmitOutcome};
use up_client::{ClientConfig, PortalApi};
use up_core::models::PaymentDraft;

use super::print_list;
use crate::cli::{OutputFormat, PaymentsCommand};
use crate::display::format_payment_line;
use crate::error::{Error, Result};

pub async fn run(config: &ClientConfig, cmd: PaymentsCommand) -> Result<()> {
    match cmd {
        PaymentsCommand::List { student_id, output } => list(config, student_id, output).await,
        PaymentsCommand::Pay {
            student_id,
            amount,
            term,
        } => pay(config, student_id, amount, term).await,
    }
}

async fn list(
    config: &ClientConfig,
    student_id: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let mut payments = Payments::new(PortalApi::new(config));
    payments.set_scope(student_id);
    payments.load().await?;
    print_list(payments.items(), output, format_payment_line)
}

async fn pay(
    config: &ClientConfig,
    student_id: String,
    amount: String,
    term: String,
) -> Result<()> {
    let mut payments = Payments::new(PortalApi::new(config));
    *payments.draft_mut() = PaymentDraft {
        student_id,
        amount,
        term,
    };
    match payments.submit().await? {
        SubmitOutcome::Sent => {
            println!("payment submitted ({} total)", payments.items().len());
            Ok(())
        }
        SubmitOutcome::Rejected(fields) => Err(Error::Rejected { fields }),
    }
}
