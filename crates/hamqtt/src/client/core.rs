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

// src/client/core.rs
// The hamqtt client: a thin publishing wrapper over rumqttc.
//
// Connection keep-alive and reconnection are the event loop's job; the
// driver task spawned by connect() keeps polling it for the lifetime of
// the process. Publishes are fire-and-forget: success only means the
// request was queued for the broker.

use async_trait::async_trait;
use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::client::options::{
    ClientOptions, DEFAULT_KEEP_ALIVE, DEFAULT_MESSAGE_CHANNEL_CAPACITY,
};
use crate::errors::HaMqttError;
use crate::traits::MessageSink;

// MQTT broker port. Not configurable.
pub const MQTT_PORT: u16 = 1883;

// Diagnostic subscription: broker status topics, logged on receipt only.
const SYS_TOPIC: &str = "$SYS/#";

// Pause before re-polling the event loop after a connection error, so a
// dead broker doesn't spin the driver task.
const RECONNECT_PAUSE: Duration = Duration::from_secs(1);

// HaMqttClient wraps a rumqttc AsyncClient plus a background task that
// drives its event loop. The handle is cheap to clone and safe to share.
#[derive(Clone)]
pub struct HaMqttClient {
    client: AsyncClient,
}

impl HaMqttClient {
    // connect builds the broker connection and spawns the event loop
    // driver task. The connection itself is established lazily by the
    // event loop; publishes issued before the broker is reachable are
    // queued up to the channel capacity.
    pub fn connect(host: &str, options: ClientOptions) -> Self {
        let client_id = format!("keel-ha-bridge-{}", std::process::id());
        let mut mqtt_options = MqttOptions::new(client_id, host, MQTT_PORT);
        mqtt_options.set_keep_alive(options.keep_alive.unwrap_or(DEFAULT_KEEP_ALIVE));

        if let Some(credentials) = &options.credentials {
            mqtt_options.set_credentials(&credentials.username, &credentials.password);
        }

        let capacity = options
            .message_channel_capacity
            .unwrap_or(DEFAULT_MESSAGE_CHANNEL_CAPACITY);
        let (client, event_loop) = AsyncClient::new(mqtt_options, capacity);

        tokio::spawn(drive_event_loop(client.clone(), event_loop));

        Self { client }
    }
}

#[async_trait]
impl MessageSink for HaMqttClient {
    async fn publish_json(
        &self,
        topic: &str,
        payload: &serde_json::Value,
    ) -> Result<(), HaMqttError> {
        let bytes = serde_json::to_vec(payload)?;
        self.client
            .publish(topic, QoS::AtMostOnce, false, bytes)
            .await?;
        Ok(())
    }
}

// drive_event_loop owns the rumqttc event loop for the lifetime of the
// process. Subscribing inside the ConnAck arm means the diagnostic
// subscription is renewed whenever the connection is re-established.
async fn drive_event_loop(client: AsyncClient, mut event_loop: EventLoop) {
    loop {
        match event_loop.poll().await {
            Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                info!("Connected to MQTT broker with result code {:?}", ack.code);
                if let Err(e) = client.subscribe(SYS_TOPIC, QoS::AtMostOnce).await {
                    warn!("Failed to subscribe to {}: {}", SYS_TOPIC, e);
                }
            }
            Ok(Event::Incoming(Packet::Publish(publish))) => {
                debug!(
                    "{} {}",
                    publish.topic,
                    String::from_utf8_lossy(&publish.payload)
                );
            }
            Ok(_) => {}
            Err(e) => {
                warn!("MQTT connection error: {}", e);
                tokio::time::sleep(RECONNECT_PAUSE).await;
            }
        }
    }
}
