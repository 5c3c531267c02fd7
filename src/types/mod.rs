// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret identifiers and resolved secret records.

pub mod identifier;
pub mod record;

pub use identifier::SecretIdentifier;
pub use record::{parse_payload, SecretRecord, TagMetadata, VaultTag};
