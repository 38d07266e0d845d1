// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collection view-models pairing a cached item list with a pending draft.
//!
//! Each of the four portal collections gets one view-model. They all follow
//! the same synchronization contract:
//!
//! - `load()` replaces the cached list wholesale with the server's current
//!   contents; a failed load keeps the previous list and propagates the
//!   error.
//! - The draft is mutated locally, validated by a pure gate at submit time,
//!   and reset to its empty baseline only after a successful create.
//! - A valid submit sends exactly one create request and then reloads
//!   unconditionally (pessimistic refresh): the new record is never shown
//!   before the full round trip completes.
//!
//! Every operation walks the phase machine `Idle → Loading → Idle` or
//! `Idle → Submitting → Loading → Idle`; a transport failure ends the
//! attempt and returns the phase to `Idle`.

mod chat;
mod classes;
mod notifications;
mod payments;

pub use chat::Chat;
pub use classes::Classes;
pub use notifications::Notifications;
pub use payments::Payments;

/// Lifecycle phase of a collection view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operation in progress.
    Idle,
    /// A list request is in flight.
    Loading,
    /// A create request is in flight.
    Submitting,
}

/// Result of a submit attempt.
///
/// Validation failure is a no-op by contract, so it is reported as a value
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The create request was sent and the collection reloaded.
    Sent,
    /// The draft failed validation; nothing was sent and nothing changed.
    Rejected(Vec<&'static str>),
}
