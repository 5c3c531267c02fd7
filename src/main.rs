// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use eks_secret_mirror::config::Config;
use eks_secret_mirror::sync::run;

#[derive(Parser)]
#[command(name = "eks-secret-mirror")]
#[command(about = "Mirror an AWS Secrets Manager secret into an EKS cluster")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Secret id: <namespace>/<name> or <environment>/<namespace>/<name>
    secret_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: cluster_id={}, cluster_region={}, assume_role={}",
        config.cluster_id,
        config.effective_cluster_region().unwrap_or("<sdk default>"),
        config.role_arn.as_deref().unwrap_or("<none>")
    );

    match run(&config, &cli.secret_id).await {
        Ok(outcome) => {
            info!("Sync of {} finished: {:?}", cli.secret_id, outcome);
            Ok(())
        }
        Err(e) => {
            error!("ERROR: {}", e);
            Err(e.into())
        }
    }
}
