// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create-or-update of the mirrored Kubernetes secret

use crate::error::{Result, SyncError};
use crate::sync::SyncOutcome;
use crate::types::SecretRecord;
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, info, instrument};

/// Write `record` to the cluster, creating the secret if it does not exist yet
#[instrument(
    skip(client, record),
    fields(secret = %format!("{}/{}", record.namespace, record.name))
)]
pub async fn write_secret(client: &Client, record: &SecretRecord) -> Result<SyncOutcome> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), &record.namespace);

    match secrets.get(&record.name).await {
        Ok(existing) => {
            debug!("Secret exists, updating");
            update_secret(&secrets, record, existing).await
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("Secret not found, creating");
            create_secret(&secrets, record).await
        }
        Err(e) => Err(SyncError::KubeError(e)),
    }
}

async fn create_secret(secrets: &Api<Secret>, record: &SecretRecord) -> Result<SyncOutcome> {
    let secret = build_secret(record);

    let created = secrets
        .create(&PostParams::default(), &secret)
        .await
        .map_err(|source| SyncError::CreateFailed {
            namespace: record.namespace.clone(),
            name: record.name.clone(),
            source,
        })?;

    info!(
        "Successfully created secret {}, namespace {}",
        created.name_any(),
        created.namespace().unwrap_or_else(|| record.namespace.clone())
    );

    Ok(SyncOutcome::Created)
}

async fn update_secret(
    secrets: &Api<Secret>,
    record: &SecretRecord,
    existing: Secret,
) -> Result<SyncOutcome> {
    let secret = apply_record(existing, record);

    let updated = secrets
        .replace(&record.name, &PostParams::default(), &secret)
        .await
        .map_err(|source| SyncError::UpdateFailed {
            namespace: record.namespace.clone(),
            name: record.name.clone(),
            source,
        })?;

    info!(
        "Successfully updated secret {}, namespace {}",
        updated.name_any(),
        updated.namespace().unwrap_or_else(|| record.namespace.clone())
    );

    Ok(SyncOutcome::Updated)
}

/// A fresh secret carrying the record's payload and metadata
fn build_secret(record: &SecretRecord) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(record.name.clone()),
            labels: Some(record.labels.clone()),
            annotations: Some(record.annotations.clone()),
            ..Default::default()
        },
        string_data: Some(record.string_data.clone()),
        ..Default::default()
    }
}

/// Overwrite payload and metadata on a fetched secret, keeping its namespace and
/// server-managed fields. Stale base64 `data` is dropped so removed keys disappear.
fn apply_record(mut secret: Secret, record: &SecretRecord) -> Secret {
    secret.metadata.name = Some(record.name.clone());
    secret.metadata.labels = Some(record.labels.clone());
    secret.metadata.annotations = Some(record.annotations.clone());
    secret.data = None;
    secret.string_data = Some(record.string_data.clone());
    secret
}
