// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! EKS cluster authentication: endpoint and CA from DescribeCluster, bearer token
//! from a presigned STS request, optionally under an assumed role.

use crate::config::Config;
use crate::constants::token::SESSION_NAME;
use crate::error::{Result, SyncError};
use crate::kubernetes::client::create_cluster_client;
use crate::kubernetes::token::presign_token;
use async_trait::async_trait;
use aws_config::sts::AssumeRoleProvider;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_eks::error::DisplayErrorContext;
use aws_types::{region::Region, SdkConfig};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use kube::Client;
use std::fmt;
use std::time::SystemTime;
use tracing::{debug, info, instrument};

/// Everything needed to talk to one cluster's API server
#[derive(Clone)]
pub struct ClusterConnection {
    pub cluster_id: String,
    pub endpoint: String,
    /// PEM bytes of the cluster CA
    pub ca_certificate: Vec<u8>,
    pub token: String,
}

impl fmt::Debug for ClusterConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterConnection")
            .field("cluster_id", &self.cluster_id)
            .field("endpoint", &self.endpoint)
            .field("ca_certificate", &format!("<{} bytes>", self.ca_certificate.len()))
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Produces an authenticated client for a named cluster
#[async_trait]
pub trait ClusterAuthenticator: Send + Sync {
    async fn connect(&self, cluster_id: &str) -> Result<Client>;
}

pub struct EksAuthenticator {
    eks: aws_sdk_eks::Client,
    credentials: SharedCredentialsProvider,
    region: Region,
}

impl EksAuthenticator {
    /// Build an authenticator in the cluster region, assuming `config.role_arn` when set
    pub async fn from_config(sdk_config: &SdkConfig, config: &Config) -> Result<Self> {
        let auth_error = |message: &str| SyncError::TokenExchange {
            cluster: config.cluster_id.clone(),
            message: message.to_string(),
        };

        let region = config
            .effective_cluster_region()
            .map(|r| Region::new(r.to_string()))
            .or_else(|| sdk_config.region().cloned())
            .ok_or_else(|| auth_error("no region configured for the cluster"))?;

        let credentials = match &config.role_arn {
            Some(role_arn) => {
                info!("Assuming role {} for cluster access", role_arn);
                let provider = AssumeRoleProvider::builder(role_arn)
                    .session_name(SESSION_NAME)
                    .region(region.clone())
                    .configure(sdk_config)
                    .build()
                    .await;
                SharedCredentialsProvider::new(provider)
            }
            None => sdk_config
                .credentials_provider()
                .ok_or_else(|| auth_error("no AWS credentials available"))?,
        };

        let eks_config = sdk_config
            .to_builder()
            .region(region.clone())
            .credentials_provider(credentials.clone())
            .build();

        Ok(Self {
            eks: aws_sdk_eks::Client::new(&eks_config),
            credentials,
            region,
        })
    }

    /// Resolve endpoint, CA and a fresh bearer token for `cluster_id`
    #[instrument(skip(self))]
    pub async fn connection(&self, cluster_id: &str) -> Result<ClusterConnection> {
        let (endpoint, ca_certificate) = self.describe_cluster(cluster_id).await?;
        let token = self.bearer_token(cluster_id).await?;

        Ok(ClusterConnection {
            cluster_id: cluster_id.to_string(),
            endpoint,
            ca_certificate,
            token,
        })
    }

    async fn describe_cluster(&self, cluster_id: &str) -> Result<(String, Vec<u8>)> {
        let descriptor_error = |message: String| SyncError::ClusterDescriptor {
            cluster: cluster_id.to_string(),
            message,
        };

        let output = self
            .eks
            .describe_cluster()
            .name(cluster_id)
            .send()
            .await
            .map_err(|e| descriptor_error(DisplayErrorContext(&e).to_string()))?;

        let cluster = output
            .cluster()
            .ok_or_else(|| descriptor_error("response has no cluster".to_string()))?;
        let endpoint = cluster
            .endpoint()
            .ok_or_else(|| descriptor_error("cluster has no endpoint".to_string()))?;
        let ca_data = cluster
            .certificate_authority()
            .and_then(|ca| ca.data())
            .ok_or_else(|| descriptor_error("cluster has no certificate authority".to_string()))?;

        debug!("Cluster {} endpoint is {}", cluster_id, endpoint);

        Ok((endpoint.to_string(), decode_certificate(cluster_id, ca_data)?))
    }

    async fn bearer_token(&self, cluster_id: &str) -> Result<String> {
        let credentials = self
            .credentials
            .provide_credentials()
            .await
            .map_err(|e| SyncError::TokenExchange {
                cluster: cluster_id.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        presign_token(&credentials, self.region.as_ref(), cluster_id, SystemTime::now())
    }
}

#[async_trait]
impl ClusterAuthenticator for EksAuthenticator {
    async fn connect(&self, cluster_id: &str) -> Result<Client> {
        let connection = self.connection(cluster_id).await?;
        create_cluster_client(&connection).await
    }
}

/// Decode the base64 CA bundle returned by DescribeCluster
fn decode_certificate(cluster_id: &str, data: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(data.trim())
        .map_err(|e| SyncError::ClusterDescriptor {
            cluster: cluster_id.to_string(),
            message: format!("invalid certificate authority data: {}", e),
        })
}
