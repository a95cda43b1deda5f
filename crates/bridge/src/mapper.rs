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

// src/mapper.rs
// Pure mapping from one approval to the (topic, payload) pairs the
// bridge publishes. No side effects; everything here is recomputed
// from the approval on every poll cycle.

use hamqtt::discovery::{DiscoveryOrigin, LATEST_VERSION_TEMPLATE, UpdateDiscovery};
use serde_json::json;

use crate::keel::Approval;

// Topic namespace for approval state.
pub const STATE_TOPIC_PREFIX: &str = "keel";

// Command topic Home Assistant posts install requests to.
pub const COMMAND_TOPIC: &str = "keel/approvals";

// derive_identifier turns a raw "<namespace>/<name>:<version>"
// identifier into an MQTT-topic-safe token: everything from the first
// ':' is dropped and every '/' becomes '_'. An identifier without a
// ':' passes through whole.
pub fn derive_identifier(identifier: &str) -> String {
    let (prefix, _) = identifier.split_once(':').unwrap_or((identifier, ""));
    prefix.replace('/', "_")
}

pub fn state_topic(derived_id: &str) -> String {
    format!("{STATE_TOPIC_PREFIX}/{derived_id}")
}

pub fn latest_version_topic(derived_id: &str) -> String {
    format!("{}/latest", state_topic(derived_id))
}

// map_approval produces the three publishes for one approval, in
// order: state, latest version, discovery document. Returns None for
// an approval with an empty identifier; the caller skips the record
// rather than failing the whole cycle.
pub fn map_approval(approval: &Approval) -> Option<Vec<(String, serde_json::Value)>> {
    if approval.identifier.is_empty() {
        return None;
    }

    let derived_id = derive_identifier(&approval.identifier);
    let state_topic = state_topic(&derived_id);
    let latest_version_topic = latest_version_topic(&derived_id);

    let state_payload = json!({
        "installed_version": approval.current_version,
        "latest_version": approval.new_version,
        "title": derived_id,
        "release_summary": approval.message,
    });

    let latest_version_payload = json!({ "version": approval.new_version });

    let discovery = UpdateDiscovery {
        command_topic: COMMAND_TOPIC.to_string(),
        latest_version_template: LATEST_VERSION_TEMPLATE.to_string(),
        latest_version_topic: latest_version_topic.clone(),
        name: derived_id.clone(),
        object_id: derived_id.clone(),
        origin: DiscoveryOrigin::default(),
        payload_install: derived_id.clone(),
        state_topic: state_topic.clone(),
        unique_id: derived_id.clone(),
    };
    let discovery_topic = UpdateDiscovery::config_topic(&derived_id);
    let discovery_payload = serde_json::to_value(&discovery)
        .expect("BUG: discovery document serialization cannot fail");

    Some(vec![
        (state_topic, state_payload),
        (latest_version_topic, latest_version_payload),
        (discovery_topic, discovery_payload),
    ])
}
