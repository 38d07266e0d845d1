// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the pre-submit validation gate as surfaced by the shell.
//!
//! Every case here fails validation client-side, so no backend is needed:
//! the command must exit nonzero naming the violated fields without
//! touching the network.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn uport() -> Command {
    cargo_bin_cmd!("uport")
}

#[test]
fn classes_add_rejects_blank_required_fields() {
    uport()
        .args(["classes", "add", "--code", "", "--name", "  "])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("code").and(predicate::str::contains("name")),
        );
}

#[test]
fn notifications_post_rejects_a_missing_body() {
    uport()
        .args(["notifications", "post", "--title", "Exam moved", "--body", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("body"));
}

#[test]
fn payments_pay_rejects_a_non_numeric_amount() {
    uport()
        .args([
            "payments",
            "pay",
            "--student-id",
            "s-1001",
            "--amount",
            "tuition",
            "--term",
            "Fall 2026",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount"));
}

#[test]
fn chat_send_rejects_whitespace_content() {
    uport()
        .args(["chat", "send", "CS101", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("content"));
}
