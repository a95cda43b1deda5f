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

// src/errors.rs
// Error types for the hamqtt client library.

use thiserror::Error;

// HaMqttError covers everything a publish can fail with: the underlying
// rumqttc client rejecting the request, or the payload failing to
// serialize to JSON before it ever reaches the wire.
#[derive(Debug, Error)]
pub enum HaMqttError {
    // The rumqttc request channel rejected the publish or subscribe.
    #[error("MQTT connection error: {0}")]
    ConnectionError(#[from] rumqttc::ClientError),

    // The payload could not be serialized to JSON.
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
}

impl HaMqttError {
    // is_connection_error checks if this error came from the MQTT client.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }

    // is_serialization_error checks if this error came from JSON encoding.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Self::JsonSerializationError(_))
    }
}
