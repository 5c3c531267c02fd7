// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Malformed secret identifier '{0}': expected <namespace>/<name> or <environment>/<namespace>/<name>")]
    MalformedIdentifier(String),

    #[error("Secrets Manager {operation} failed for {secret_id}: {message}")]
    VaultAccess {
        operation: &'static str,
        secret_id: String,
        message: String,
    },

    #[error("Invalid payload for secret {secret_id}: {message}")]
    Payload { secret_id: String, message: String },

    #[error("Failed to describe cluster {cluster}: {message}")]
    ClusterDescriptor { cluster: String, message: String },

    #[error("Failed to obtain token for cluster {cluster}: {message}")]
    TokenExchange { cluster: String, message: String },

    #[error("Failed to build cluster client: {0}")]
    KubeconfigError(String),

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to create secret {namespace}/{name}: {source}")]
    CreateFailed {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to update secret {namespace}/{name}: {source}")]
    UpdateFailed {
        namespace: String,
        name: String,
        #[source]
        source: kube::Error,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;
