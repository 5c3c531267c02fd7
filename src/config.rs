// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as vars;
use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_types::{region::Region, SdkConfig};
use std::env;

/// Invocation configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Ambient region, used for Secrets Manager
    pub region: Option<String>,
    /// Explicit region for the EKS cluster, overriding `region`
    pub cluster_region: Option<String>,
    /// Role assumed for EKS describe and token exchange
    pub role_arn: Option<String>,
    pub cluster_id: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let cluster_id = non_blank(vars::CLUSTER_ID)
            .with_context(|| format!("{} environment variable not set", vars::CLUSTER_ID))?;

        Ok(Config {
            region: non_blank(vars::AWS_REGION),
            cluster_region: non_blank(vars::CLUSTER_REGION),
            role_arn: non_blank(vars::ROLE),
            cluster_id,
        })
    }

    /// Region for cluster operations: the override if present, else the ambient region
    pub fn effective_cluster_region(&self) -> Option<&str> {
        self.cluster_region.as_deref().or(self.region.as_deref())
    }
}

/// Load the shared AWS configuration, pinning the ambient region when one is configured
pub async fn load_sdk_config(config: &Config) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    loader.load().await
}
