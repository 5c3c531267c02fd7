// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read at invocation start
pub mod env {
    /// Ambient region for Secrets Manager and, by default, EKS
    pub const AWS_REGION: &str = "AWS_REGION";
    /// Region override for EKS describe and token presigning
    pub const CLUSTER_REGION: &str = "EKSRegion";
    /// Role ARN assumed for EKS access (optional)
    pub const ROLE: &str = "Role";
    /// Name of the target EKS cluster
    pub const CLUSTER_ID: &str = "ClusterId";
}

/// Secrets Manager tag prefixes carrying Kubernetes metadata
pub mod tags {
    pub const LABEL_PREFIX: &str = "label/";
    pub const ANNOTATION_PREFIX: &str = "annotation/";
    pub const CLUSTER_PREFIX: &str = "kubernetes.io/cluster/";
}

/// Version stage pinned on every secret value fetch
pub const VERSION_STAGE: &str = "AWSCURRENT";

/// EKS IAM token presigning
pub mod token {
    pub const PREFIX: &str = "k8s-aws-v1.";
    pub const CLUSTER_ID_HEADER: &str = "x-k8s-aws-id";
    pub const SIGNING_SERVICE: &str = "sts";
    /// Validity of the presigned GetCallerIdentity URL
    pub const EXPIRES_SECS: u64 = 60;
    /// Session name used when assuming the configured role
    pub const SESSION_NAME: &str = "eks-secret-mirror";
}
