// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! up-client - synchronization client for the Uni Portal collection store.
//!
//! The remote store is the only source of truth; this crate holds the
//! client-side contract for keeping view state in step with it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌────────┐
//! │  Collection  │────►│  PortalApi  │────►│  Transport  │────►│ Remote │
//! │  view-model  │◄────│   (typed)   │◄────│   (trait)   │◄────│ store  │
//! └──────────────┘     └─────────────┘     └─────────────┘     └────────┘
//! ```
//!
//! # Features
//!
//! - Single-attempt HTTP/JSON transport (no retry, timeout, or backoff)
//! - Typed endpoint wrappers mirroring the store contract route for route
//! - One view-model per collection: cached list + pending draft + pure
//!   validation gate + pessimistic refresh after every create
//! - Injectable transport trait for testing

pub mod api;
pub mod collections;
pub mod config;
pub mod transport;

pub use api::{PortalApi, DEFAULT_MESSAGE_LIMIT};
pub use collections::{Chat, Classes, Notifications, Payments, Phase, SubmitOutcome};
pub use config::{ClientConfig, BACKEND_URL_VAR, DEFAULT_BACKEND_URL};
pub use transport::{HttpTransport, Method, Transport, TransportError, TransportResult};

#[cfg(test)]
mod test_support;
