// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! EKS bearer tokens: a presigned STS GetCallerIdentity URL bound to a cluster name.

use crate::constants::token::{CLUSTER_ID_HEADER, EXPIRES_SECS, PREFIX, SIGNING_SERVICE};
use crate::error::{Result, SyncError};
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{
    sign, SignableBody, SignableRequest, SignatureLocation, SigningParams, SigningSettings,
};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::time::{Duration, SystemTime};
use url::Url;

/// Build a `k8s-aws-v1.` token for `cluster_id` signed with `credentials` at `time`
pub fn presign_token(
    credentials: &Credentials,
    region: &str,
    cluster_id: &str,
    time: SystemTime,
) -> Result<String> {
    let token_error = |message: String| SyncError::TokenExchange {
        cluster: cluster_id.to_string(),
        message,
    };

    let identity: Identity = credentials.clone().into();

    let mut settings = SigningSettings::default();
    settings.signature_location = SignatureLocation::QueryParams;
    settings.expires_in = Some(Duration::from_secs(EXPIRES_SECS));

    let params: SigningParams<'_> = v4::SigningParams::builder()
        .identity(&identity)
        .region(region)
        .name(SIGNING_SERVICE)
        .time(time)
        .settings(settings)
        .build()
        .map_err(|e| token_error(format!("invalid signing parameters: {}", e)))?
        .into();

    let endpoint = sts_endpoint(region);
    let signable = SignableRequest::new(
        "GET",
        endpoint.as_str(),
        std::iter::once((CLUSTER_ID_HEADER, cluster_id)),
        SignableBody::Bytes(&[]),
    )
    .map_err(|e| token_error(format!("unsignable request: {}", e)))?;

    let (instructions, _signature) = sign(signable, &params)
        .map_err(|e| token_error(format!("signing failed: {}", e)))?
        .into_parts();

    let mut url =
        Url::parse(&endpoint).map_err(|e| token_error(format!("invalid STS URL: {}", e)))?;
    {
        let mut query = url.query_pairs_mut();
        for (name, value) in instructions.params() {
            query.append_pair(name, value);
        }
    }

    Ok(format!("{}{}", PREFIX, URL_SAFE_NO_PAD.encode(url.as_str())))
}

fn sts_endpoint(region: &str) -> String {
    format!("https://sts.{region}.amazonaws.com/?Action=GetCallerIdentity&Version=2011-06-15")
}
