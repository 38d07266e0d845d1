// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the uport help and version surface.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use yare::parameterized;

fn uport() -> Command {
    cargo_bin_cmd!("uport")
}

#[test]
fn help_lists_the_four_views() {
    uport()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("classes")
                .and(predicate::str::contains("notifications"))
                .and(predicate::str::contains("payments"))
                .and(predicate::str::contains("chat")),
        );
}

#[parameterized(
    classes = { "classes" },
    notifications = { "notifications" },
    payments = { "payments" },
    chat = { "chat" },
)]
fn subcommand_help_shows_usage(command: &str) {
    uport()
        .args([command, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn version_flag_prints_the_package_version() {
    uport()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn backend_flag_is_documented_globally() {
    uport()
        .args(["classes", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--backend"));
}
