// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Turns a secret identifier into a record ready to be written to Kubernetes.

use crate::error::Result;
use crate::types::{parse_payload, SecretIdentifier, SecretRecord, TagMetadata};
use crate::vault::SecretSource;
use tracing::{debug, instrument};

/// Fetch the current value and tags of a secret and build its record
#[instrument(
    skip(source, identifier),
    fields(secret = %identifier, environment = identifier.environment().unwrap_or_default())
)]
pub async fn resolve_secret(
    source: &dyn SecretSource,
    identifier: &SecretIdentifier,
) -> Result<SecretRecord> {
    let secret_id = identifier.as_str();

    let payload = source.secret_string(secret_id).await?;
    let string_data = parse_payload(secret_id, payload.as_deref())?;

    let tags = source.secret_tags(secret_id).await?;
    let metadata = TagMetadata::from_tags(&tags);

    debug!(
        "Resolved secret {} to {}/{} with {} keys, {} labels, {} annotations",
        secret_id,
        identifier.namespace(),
        identifier.name(),
        string_data.len(),
        metadata.labels.len(),
        metadata.annotations.len()
    );

    Ok(SecretRecord::new(identifier, string_data, metadata))
}
