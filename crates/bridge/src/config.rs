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

// src/config.rs
// Command line options. The MQTT broker port is fixed at 1883 and
// intentionally not configurable.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "keel-ha-bridge")]
pub struct Options {
    #[clap(long, default_value = "keel", help = "Hostname of the Keel service")]
    pub keel_service: String,

    #[clap(long, default_value_t = 9300, help = "Port of the Keel service")]
    pub keel_port: u16,

    #[clap(long, help = "Basic auth username for the Keel API")]
    pub keel_username: String,

    #[clap(long, help = "Basic auth password for the Keel API")]
    pub keel_password: String,

    #[clap(long, default_value_t = 60, help = "Seconds between poll cycles")]
    pub keel_poll_interval: u64,

    #[clap(long, help = "Use the stub approval source instead of a live Keel")]
    pub keel_stub: bool,

    #[clap(long, help = "Hostname of the MQTT broker (port is always 1883)")]
    pub mqtt_host: String,

    #[clap(long, help = "Username for the MQTT broker")]
    pub mqtt_username: Option<String>,

    #[clap(long, help = "Password for the MQTT broker")]
    pub mqtt_password: Option<String>,
}
