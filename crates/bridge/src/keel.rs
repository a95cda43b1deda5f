/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// src/keel.rs
// Approval sources: the Keel HTTP API client and the local stub.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

const APPROVALS_ENDPOINT: &str = "approvals";

// Approval is one pending release decision reported by Keel. Only the
// fields the bridge republishes are modeled; Keel sends more (provider,
// event, votesRequired, deadline, ...) and serde ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    // Composite "<namespace>/<name>:<current-version>" string.
    pub identifier: String,
    pub current_version: String,
    pub new_version: String,
    // Human-readable summary of the pending update.
    pub message: String,
}

// KeelError is the error taxonomy for fetching approvals. None of these
// are caught in the poll loop; a failed fetch is fatal by design.
#[derive(Debug, Error)]
pub enum KeelError {
    // The network call itself failed (DNS, connect, read).
    #[error("failed to reach the Keel API: {0}")]
    Transport(#[from] reqwest::Error),

    // The server answered with a non-2xx status.
    #[error("Keel API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    // The response body was not a valid JSON approvals array.
    #[error("failed to decode the Keel approvals response: {0}")]
    Decode(#[from] serde_json::Error),
}

// ApprovalSource is the single capability the poll loop needs: fetch
// the current list of pending approvals. Implemented by the live HTTP
// client and by the stub, selected by configuration at startup.
#[async_trait]
pub trait ApprovalSource: Send + Sync {
    async fn pending_approvals(&self) -> Result<Vec<Approval>, KeelError>;
}

// KeelClient talks to a live Keel service over HTTP with basic auth.
#[derive(Debug)]
pub struct KeelClient {
    base_url: String,
    username: String,
    password: String,
    http_client: reqwest::Client,
}

impl KeelClient {
    pub fn new(username: &str, password: &str, host: &str, port: u16) -> Self {
        Self {
            base_url: format!("http://{host}:{port}/v1"),
            username: username.to_string(),
            password: password.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl ApprovalSource for KeelClient {
    async fn pending_approvals(&self) -> Result<Vec<Approval>, KeelError> {
        let response = self
            .http_client
            .get(self.endpoint(APPROVALS_ENDPOINT))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(KeelError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

// StubKeel stands in for a live Keel service during local testing. It
// returns the same single pending approval on every call.
#[derive(Debug, Default)]
pub struct StubKeel;

#[async_trait]
impl ApprovalSource for StubKeel {
    async fn pending_approvals(&self) -> Result<Vec<Approval>, KeelError> {
        Ok(vec![Approval {
            identifier: "default/wd:0.0.15".to_string(),
            current_version: "0.0.13".to_string(),
            new_version: "0.0.15".to_string(),
            message: "New image is available for release default/wd (0.0.13 -> 0.0.15)."
                .to_string(),
        }])
    }
}
