// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for transport failure surfacing.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn uport() -> Command {
    cargo_bin_cmd!("uport")
}

// Port 1 on loopback refuses connections; the single-attempt transport must
// surface that as an error without retrying.
#[test]
fn unreachable_backend_fails_with_a_transport_error() {
    uport()
        .args(["--backend", "http://127.0.0.1:1", "classes", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: transport error:"));
}

#[test]
fn env_configured_backend_is_used_when_no_flag_is_given() {
    uport()
        .env("UPORT_BACKEND_URL", "http://127.0.0.1:1")
        .args(["payments", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("transport error"));
}
