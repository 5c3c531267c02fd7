// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolved secret records and the tag conventions that feed them.

use crate::constants::tags;
use crate::error::{Result, SyncError};
use crate::types::identifier::SecretIdentifier;
use serde_json::Value;
use std::collections::BTreeMap;

/// A key/value tag attached to a Secrets Manager secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultTag {
    pub key: String,
    pub value: String,
}

impl VaultTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Kubernetes metadata carried in vault tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMetadata {
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    /// Cluster names from `kubernetes.io/cluster/<name>` tags
    pub clusters: Vec<String>,
}

impl TagMetadata {
    /// Every tag is checked against all three prefixes; unmatched tags are ignored.
    pub fn from_tags(vault_tags: &[VaultTag]) -> Self {
        let mut metadata = Self::default();

        for tag in vault_tags {
            if let Some(label) = tag.key.strip_prefix(tags::LABEL_PREFIX) {
                metadata.labels.insert(label.to_string(), tag.value.clone());
            }
            if let Some(annotation) = tag.key.strip_prefix(tags::ANNOTATION_PREFIX) {
                metadata
                    .annotations
                    .insert(annotation.to_string(), tag.value.clone());
            }
            if let Some(cluster) = tag.key.strip_prefix(tags::CLUSTER_PREFIX) {
                metadata.clusters.push(cluster.to_string());
            }
        }

        metadata
    }
}

/// Parse a secret string into Kubernetes string data.
///
/// An absent or blank payload yields an empty mapping. Anything else must be a
/// JSON object of string values; each value is trimmed.
pub fn parse_payload(secret_id: &str, payload: Option<&str>) -> Result<BTreeMap<String, String>> {
    let payload = payload.unwrap_or_default();
    if payload.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let invalid = |message: String| SyncError::Payload {
        secret_id: secret_id.to_string(),
        message,
    };

    let value: Value =
        serde_json::from_str(payload).map_err(|e| invalid(format!("not valid JSON: {}", e)))?;

    let Value::Object(entries) = value else {
        return Err(invalid("expected a JSON object".to_string()));
    };

    entries
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s.trim().to_string())),
            _ => Err(invalid(format!("value for key '{}' is not a string", key))),
        })
        .collect()
}

/// A vault secret resolved into its Kubernetes shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRecord {
    pub name: String,
    pub namespace: String,
    pub string_data: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub clusters: Vec<String>,
}

impl SecretRecord {
    pub fn new(
        identifier: &SecretIdentifier,
        string_data: BTreeMap<String, String>,
        metadata: TagMetadata,
    ) -> Self {
        Self {
            name: identifier.name().to_string(),
            namespace: identifier.namespace().to_string(),
            string_data,
            labels: metadata.labels,
            annotations: metadata.annotations,
            clusters: metadata.clusters,
        }
    }

    /// Untagged secrets go to any cluster; tagged ones only to the clusters they name
    pub fn is_affiliated_with(&self, cluster_id: &str) -> bool {
        self.clusters.is_empty() || self.clusters.iter().any(|c| c == cluster_id)
    }
}
