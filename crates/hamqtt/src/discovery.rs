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

// src/discovery.rs
// Home Assistant MQTT-discovery document types for `update` entities.
//
// Publishing one of these (retained or not) to
// homeassistant/update/<object_id>/config auto-registers an update
// entity in the dashboard. Field set per the Home Assistant MQTT
// update integration docs.

use serde::Serialize;

// Discovery topic prefix Home Assistant listens on by default.
pub const DISCOVERY_PREFIX: &str = "homeassistant";

// Jinja template Home Assistant applies to latest-version messages.
pub const LATEST_VERSION_TEMPLATE: &str = r#"{{ value_json["version"] }}"#;

pub const ORIGIN_NAME: &str = "keel-ha-bridge";
pub const ORIGIN_SW_VERSION: &str = "1.0";
pub const ORIGIN_SUPPORT_URL: &str = "https://github.com/craigcabrey/keel-ha-bridge";

// UpdateDiscovery is the discovery document for one `update` entity.
// Field order is the serialization order; keep it stable so repeated
// publishes of the same entity are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateDiscovery {
    pub command_topic: String,
    pub latest_version_template: String,
    pub latest_version_topic: String,
    pub name: String,
    pub object_id: String,
    pub origin: DiscoveryOrigin,
    pub payload_install: String,
    pub state_topic: String,
    pub unique_id: String,
}

impl UpdateDiscovery {
    // config_topic computes the discovery topic for an object id.
    pub fn config_topic(object_id: &str) -> String {
        format!("{DISCOVERY_PREFIX}/update/{object_id}/config")
    }
}

// DiscoveryOrigin identifies the application that produced the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryOrigin {
    pub name: String,
    pub sw_version: String,
    pub support_url: String,
}

impl Default for DiscoveryOrigin {
    fn default() -> Self {
        Self {
            name: ORIGIN_NAME.to_string(),
            sw_version: ORIGIN_SW_VERSION.to_string(),
            support_url: ORIGIN_SUPPORT_URL.to_string(),
        }
    }
}
