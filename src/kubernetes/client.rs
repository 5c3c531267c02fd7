// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from resolved connection details

use crate::error::{Result, SyncError};
use crate::kubernetes::auth::ClusterConnection;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use tracing::{debug, instrument};

/// Create a Kubernetes client for the cluster described by `connection`
#[instrument(skip(connection), fields(cluster = %connection.cluster_id))]
pub async fn create_cluster_client(connection: &ClusterConnection) -> Result<Client> {
    let kubeconfig = build_kubeconfig(connection)?;
    debug!("Connecting to {}", connection.endpoint);

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| SyncError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| SyncError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Render a single-context kubeconfig with bearer token auth
fn build_kubeconfig(connection: &ClusterConnection) -> Result<Kubeconfig> {
    let name = connection.cluster_id.as_str();
    let document = serde_json::json!({
        "apiVersion": "v1",
        "kind": "Config",
        "clusters": [{
            "name": name,
            "cluster": {
                "server": connection.endpoint,
                "certificate-authority-data": STANDARD.encode(&connection.ca_certificate),
            }
        }],
        "users": [{
            "name": name,
            "user": { "token": connection.token }
        }],
        "contexts": [{
            "name": name,
            "context": { "cluster": name, "user": name }
        }],
        "current-context": name,
    });

    serde_json::from_value(document)
        .map_err(|e| SyncError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))
}
