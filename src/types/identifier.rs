// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Composite Secrets Manager identifiers encoding a Kubernetes destination.

use crate::error::{Result, SyncError};
use std::fmt;
use std::str::FromStr;

/// A secret id of the form `<namespace>/<name>` or `<environment>/<namespace>/<name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretIdentifier {
    raw: String,
    environment: Option<String>,
    namespace: String,
    name: String,
}

impl SecretIdentifier {
    /// Split an identifier into its positional segments.
    /// The last two segments are always the target namespace and name.
    pub fn parse(raw: &str) -> Result<Self> {
        let segments: Vec<&str> = raw.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(SyncError::MalformedIdentifier(raw.to_string()));
        }

        let (environment, namespace, name) = match segments.as_slice() {
            [namespace, name] => (None, *namespace, *name),
            [environment, namespace, name] => (Some(environment.to_string()), *namespace, *name),
            _ => return Err(SyncError::MalformedIdentifier(raw.to_string())),
        };

        Ok(Self {
            raw: raw.to_string(),
            environment,
            namespace: namespace.to_string(),
            name: name.to_string(),
        })
    }

    /// The identifier exactly as stored in Secrets Manager
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for SecretIdentifier {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SecretIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
