// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret synchronization from the vault into the target cluster.

pub mod handler;
pub mod writer;

pub use handler::{run, sync_secret};
pub use writer::write_secret;

/// How an invocation ended when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The secret did not exist and was created
    Created,
    /// The existing secret was overwritten
    Updated,
    /// The secret is tagged for other clusters only
    Skipped,
}
