// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret retrieval from the vault and resolution into secret records.

pub mod resolver;
pub mod secrets_manager;

use crate::error::Result;
use crate::types::VaultTag;
use async_trait::async_trait;

pub use resolver::resolve_secret;
pub use secrets_manager::SecretsManagerSource;

/// Read access to secret values and their tags
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Current string value of the secret, if it has one
    async fn secret_string(&self, secret_id: &str) -> Result<Option<String>>;

    /// All tags attached to the secret
    async fn secret_tags(&self, secret_id: &str) -> Result<Vec<VaultTag>>;
}
