// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Entry point for one secret-change event: resolve, authenticate, write.

use crate::config::{load_sdk_config, Config};
use crate::error::Result;
use crate::kubernetes::{ClusterAuthenticator, EksAuthenticator};
use crate::sync::{write_secret, SyncOutcome};
use crate::types::SecretIdentifier;
use crate::vault::{resolve_secret, SecretSource, SecretsManagerSource};
use tracing::{info, instrument};

/// Mirror one vault secret into the configured cluster using AWS collaborators
pub async fn run(config: &Config, secret_id: &str) -> Result<SyncOutcome> {
    let identifier = SecretIdentifier::parse(secret_id)?;

    let sdk_config = load_sdk_config(config).await;
    let source = SecretsManagerSource::new(&sdk_config);
    let authenticator = EksAuthenticator::from_config(&sdk_config, config).await?;

    sync_identifier(&source, &authenticator, config, &identifier).await
}

/// Mirror the secret `secret_id` from `source` into `config.cluster_id`.
///
/// The identifier is validated before any remote call, and the cluster is only
/// contacted once the record has been fully resolved.
pub async fn sync_secret(
    source: &dyn SecretSource,
    authenticator: &dyn ClusterAuthenticator,
    config: &Config,
    secret_id: &str,
) -> Result<SyncOutcome> {
    let identifier = SecretIdentifier::parse(secret_id)?;
    sync_identifier(source, authenticator, config, &identifier).await
}

#[instrument(skip_all, fields(cluster = %config.cluster_id, secret = %identifier))]
async fn sync_identifier(
    source: &dyn SecretSource,
    authenticator: &dyn ClusterAuthenticator,
    config: &Config,
    identifier: &SecretIdentifier,
) -> Result<SyncOutcome> {
    info!("Got update event for {}", identifier);

    let record = resolve_secret(source, identifier).await?;

    if !record.is_affiliated_with(&config.cluster_id) {
        info!(
            "Secret {} is tagged for clusters {:?}, not {}; skipping",
            identifier, record.clusters, config.cluster_id
        );
        return Ok(SyncOutcome::Skipped);
    }

    let client = authenticator.connect(&config.cluster_id).await?;
    write_secret(&client, &record).await
}
