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

// src/lib.rs
// Main exports for the hamqtt publishing library: a thin MQTT client for
// pushing Home Assistant state and discovery documents to a broker.

pub mod client;
pub mod discovery;
pub mod errors;
pub mod traits;

// Export some things for convenience.
pub use client::{ClientCredentials, ClientOptions, HaMqttClient, MQTT_PORT};
pub use discovery::{DiscoveryOrigin, UpdateDiscovery};
pub use errors::HaMqttError;
pub use rumqttc::QoS;
pub use traits::MessageSink;
