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

// src/traits.rs
// Consumer-facing traits for publishing messages.

use async_trait::async_trait;

use crate::errors::HaMqttError;

// MessageSink is the seam between message producers and the broker.
// The real implementation is HaMqttClient; tests substitute a recording
// sink so publishes can be asserted on without a broker.
//
// Example:
// struct RecordingSink { messages: Mutex<Vec<(String, serde_json::Value)>> }
//
// #[async_trait]
// impl MessageSink for RecordingSink {
//     async fn publish_json(&self, topic: &str, payload: &serde_json::Value)
//         -> Result<(), HaMqttError>
//     {
//         self.messages.lock().unwrap().push((topic.to_string(), payload.clone()));
//         Ok(())
//     }
// }
#[async_trait]
pub trait MessageSink: Send + Sync {
    // publish_json serializes the payload and hands it to the broker.
    // Delivery is fire-and-forget: a successful return only means the
    // message was accepted for sending.
    async fn publish_json(
        &self,
        topic: &str,
        payload: &serde_json::Value,
    ) -> Result<(), HaMqttError>;
}
