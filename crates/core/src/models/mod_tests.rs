// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the shared [`Id`] type.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use serde_json::json;

use super::Id;

#[test]
fn id_accepts_json_numbers() {
    let id: Id = serde_json::from_value(json!(42)).unwrap();
    assert_eq!(id, Id::Int(42));
}

#[test]
fn id_accepts_json_strings() {
    let id: Id = serde_json::from_value(json!("a1b2-c3")).unwrap();
    assert_eq!(id, Id::Str("a1b2-c3".into()));
}

#[test]
fn id_serializes_back_to_its_source_form() {
    assert_eq!(serde_json::to_value(Id::Int(7)).unwrap(), json!(7));
    assert_eq!(serde_json::to_value(Id::Str("x9".into())).unwrap(), json!("x9"));
}

#[test]
fn id_displays_without_decoration() {
    assert_eq!(Id::Int(7).to_string(), "7");
    assert_eq!(Id::Str("a1b2".into()).to_string(), "a1b2");
}
