// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test doubles for the Kubernetes API, the vault, and cluster authentication.

use crate::error::{Result, SyncError};
use crate::kubernetes::ClusterAuthenticator;
use crate::types::VaultTag;
use crate::vault::SecretSource;
use async_trait::async_trait;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request seen by [`MockService`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// A mock HTTP service that returns predefined responses based on request paths
/// and records every request it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PUT requests matching the exact path
    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// All requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request with the given method
    pub fn last_request(&self, method: &str) -> Option<RecordedRequest> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method)
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();
        responses
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let response = self.find_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let bytes = req.into_body().collect().await?.to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });

            let (status, body) =
                response.unwrap_or_else(|| (404, status_json(404, "NotFound", "not found")));
            Ok::<_, tower::BoxError>(
                Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap(),
            )
        })
    }
}

/// Create a mock Secret JSON response
pub fn secret_json(
    namespace: &str,
    name: &str,
    resource_version: &str,
    string_data: &BTreeMap<String, String>,
) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "resourceVersion": resource_version,
            "uid": "test-uid"
        },
        "stringData": string_data,
        "type": "Opaque"
    })
    .to_string()
}

/// Create a Status failure response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// In-memory vault keyed by secret id; unknown ids fail like a missing secret
#[derive(Default)]
pub struct FakeVault {
    secrets: Mutex<HashMap<String, (Option<String>, Vec<VaultTag>)>>,
    calls: AtomicUsize,
}

impl FakeVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(self, secret_id: &str, payload: Option<&str>, tags: Vec<VaultTag>) -> Self {
        self.put(secret_id, payload, tags);
        self
    }

    /// Replace the stored value and tags of a secret
    pub fn put(&self, secret_id: &str, payload: Option<&str>, tags: Vec<VaultTag>) {
        self.secrets.lock().unwrap().insert(
            secret_id.to_string(),
            (payload.map(str::to_string), tags),
        );
    }

    /// Number of vault calls made
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lookup(
        &self,
        operation: &'static str,
        secret_id: &str,
    ) -> Result<(Option<String>, Vec<VaultTag>)> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.secrets
            .lock()
            .unwrap()
            .get(secret_id)
            .cloned()
            .ok_or_else(|| SyncError::VaultAccess {
                operation,
                secret_id: secret_id.to_string(),
                message: "ResourceNotFoundException: Secrets Manager can't find the specified secret."
                    .to_string(),
            })
    }
}

#[async_trait]
impl SecretSource for FakeVault {
    async fn secret_string(&self, secret_id: &str) -> Result<Option<String>> {
        Ok(self.lookup("GetSecretValue", secret_id)?.0)
    }

    async fn secret_tags(&self, secret_id: &str) -> Result<Vec<VaultTag>> {
        Ok(self.lookup("DescribeSecret", secret_id)?.1)
    }
}

/// Hands out a fixed client and counts how often it was asked
pub struct StaticAuthenticator {
    client: Client,
    calls: AtomicUsize,
}

impl StaticAuthenticator {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClusterAuthenticator for StaticAuthenticator {
    async fn connect(&self, _cluster_id: &str) -> Result<Client> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.client.clone())
    }
}
