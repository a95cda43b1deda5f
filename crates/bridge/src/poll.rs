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

// src/poll.rs
// The poll loop: fetch pending approvals, publish their state, sleep,
// repeat. The loop holds no state between cycles; MQTT always reflects
// the most recent successful fetch.

use hamqtt::MessageSink;
use tokio::sync::watch;
use tokio::time::{self, Duration};

use crate::keel::{ApprovalSource, KeelError};
use crate::mapper;

/// Runs poll cycles until shutdown is requested or the approval source
/// fails. A source failure is fatal: no retry, no backoff, the error
/// propagates to the caller with the current cycle abandoned. Publish
/// failures are logged and the cycle continues; the next successful
/// cycle republishes everything anyway.
pub async fn run(
    source: &dyn ApprovalSource,
    sink: &dyn MessageSink,
    interval: Duration,
    shutdown: &mut watch::Receiver<bool>,
) -> Result<(), KeelError> {
    loop {
        let approvals = source.pending_approvals().await?;
        tracing::debug!("Fetched {} pending approvals", approvals.len());

        for approval in &approvals {
            let Some(pairs) = mapper::map_approval(approval) else {
                tracing::warn!("Skipping approval with empty identifier: {:?}", approval);
                continue;
            };

            for (topic, payload) in pairs {
                if let Err(e) = sink.publish_json(&topic, &payload).await {
                    tracing::warn!("Failed to publish to {}: {}", topic, e);
                }
            }
        }

        // Biased so a pending shutdown always wins over a zero-length
        // sleep, which keeps stopping the loop deterministic.
        tokio::select! {
            biased;
            _ = shutdown.changed() => {
                tracing::info!("Poll loop stopped");
                return Ok(());
            }
            _ = time::sleep(interval) => {}
        }
    }
}
