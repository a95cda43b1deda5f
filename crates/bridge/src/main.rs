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

use bridge::keel::{ApprovalSource, KeelClient, StubKeel};
use bridge::{Options, poll};
use clap::Parser;
use eyre::WrapErr;
use hamqtt::{ClientOptions, HaMqttClient};
use tokio::sync::watch;
use tokio::time::Duration;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    let options = Options::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
        .add_directive("rumqttc=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()?;

    let mut mqtt_options = ClientOptions::default();
    if let Some(username) = &options.mqtt_username {
        mqtt_options = mqtt_options.with_credentials(
            username.clone(),
            options.mqtt_password.clone().unwrap_or_default(),
        );
    }
    let mqtt_client = HaMqttClient::connect(&options.mqtt_host, mqtt_options);

    let source: Box<dyn ApprovalSource> = if options.keel_stub {
        tracing::info!("Using the stub approval source");
        Box::new(StubKeel)
    } else {
        Box::new(KeelClient::new(
            &options.keel_username,
            &options.keel_password,
            &options.keel_service,
            options.keel_port,
        ))
    };

    let (shutdown_sender, mut shutdown_receiver) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
            let _ = shutdown_sender.send(true);
        }
    });

    tracing::info!(
        "Polling {}:{} for approvals every {}s",
        options.keel_service,
        options.keel_port,
        options.keel_poll_interval
    );

    poll::run(
        source.as_ref(),
        &mqtt_client,
        Duration::from_secs(options.keel_poll_interval),
        &mut shutdown_receiver,
    )
    .await
    .wrap_err("approval poll loop failed")?;

    Ok(())
}
