// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for cluster authentication and client creation.

pub mod auth;
pub mod client;
pub mod token;

pub use auth::{ClusterAuthenticator, ClusterConnection, EksAuthenticator};
pub use client::create_cluster_client;
pub use token::presign_token;
