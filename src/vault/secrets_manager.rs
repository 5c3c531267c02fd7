// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! AWS Secrets Manager backed secret source.

use crate::constants::VERSION_STAGE;
use crate::error::{Result, SyncError};
use crate::types::VaultTag;
use crate::vault::SecretSource;
use async_trait::async_trait;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use aws_types::SdkConfig;
use tracing::{debug, instrument};

pub struct SecretsManagerSource {
    client: Client,
}

impl SecretsManagerSource {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self::from_client(Client::new(sdk_config))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretSource for SecretsManagerSource {
    #[instrument(skip(self))]
    async fn secret_string(&self, secret_id: &str) -> Result<Option<String>> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .version_stage(VERSION_STAGE)
            .send()
            .await
            .map_err(|e| vault_error("GetSecretValue", secret_id, &e))?;

        debug!(
            version_id = output.version_id().unwrap_or_default(),
            "Fetched secret value"
        );

        Ok(output.secret_string().map(str::to_string))
    }

    #[instrument(skip(self))]
    async fn secret_tags(&self, secret_id: &str) -> Result<Vec<VaultTag>> {
        let output = self
            .client
            .describe_secret()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| vault_error("DescribeSecret", secret_id, &e))?;

        Ok(output
            .tags()
            .iter()
            .map(|t| VaultTag::new(t.key().unwrap_or_default(), t.value().unwrap_or_default()))
            .collect())
    }
}

fn vault_error<E: std::error::Error>(operation: &'static str, secret_id: &str, err: E) -> SyncError {
    SyncError::VaultAccess {
        operation,
        secret_id: secret_id.to_string(),
        message: DisplayErrorContext(err).to_string(),
    }
}
