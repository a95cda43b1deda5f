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

// src/client/options.rs
// Configuration options for the hamqtt client.
use tokio::time::Duration;

// Keepalive used for MQTT broker connections when none is configured.
pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(60);

// Number of requests the underlying async client queue buffers before
// publish calls start to wait.
pub const DEFAULT_MESSAGE_CHANNEL_CAPACITY: usize = 64;

// ClientOptions are optional parameters that can be passed to the
// client, all of which have default fallbacks.
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    // keep_alive sets the keepalive to use for MQTT broker connections.
    // Defaults to DEFAULT_KEEP_ALIVE.
    pub keep_alive: Option<Duration>,
    // message_channel_capacity is the number of requests the underlying
    // async client queue should buffer.
    // Defaults to DEFAULT_MESSAGE_CHANNEL_CAPACITY.
    pub message_channel_capacity: Option<usize>,
    // credentials are optional username/password credentials
    // that can be provided to the MQTT server for authnz.
    pub credentials: Option<ClientCredentials>,
}

impl ClientOptions {
    // Builder methods that consume and return Self
    pub fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }

    pub fn with_message_channel_capacity(mut self, capacity: usize) -> Self {
        self.message_channel_capacity = Some(capacity);
        self
    }

    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.credentials = Some(ClientCredentials { username, password });
        self
    }
}

// ClientCredentials are used for providing a username
// and password to the MQTT server.
#[derive(Clone, Debug)]
pub struct ClientCredentials {
    pub username: String,
    pub password: String,
}
