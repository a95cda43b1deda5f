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

// tests/poll.rs
// Integration tests for the poll loop: publish counts and ordering,
// fatal source errors, malformed records, shutdown and interval timing.
// The broker is replaced by a recording sink and Keel by test sources.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bridge::keel::{Approval, ApprovalSource, KeelError, StubKeel};
use bridge::poll;
use hamqtt::{HaMqttError, MessageSink};
use tokio::sync::watch;
use tokio::time::{Duration, Instant};

// RecordingSink stores every publish for inspection.
#[derive(Default)]
struct RecordingSink {
    messages: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingSink {
    fn messages(&self) -> Vec<(String, serde_json::Value)> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSink for RecordingSink {
    async fn publish_json(
        &self,
        topic: &str,
        payload: &serde_json::Value,
    ) -> Result<(), HaMqttError> {
        self.messages
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.clone()));
        Ok(())
    }
}

// FailingSource fails every fetch, as a dead Keel service would.
struct FailingSource;

#[async_trait]
impl ApprovalSource for FailingSource {
    async fn pending_approvals(&self) -> Result<Vec<Approval>, KeelError> {
        Err(KeelError::Decode(
            serde_json::from_str::<i32>("not json").unwrap_err(),
        ))
    }
}

// CountingSource returns the stub approval and flips the shutdown
// channel after a fixed number of fetches.
struct CountingSource {
    calls: AtomicUsize,
    stop_after: usize,
    shutdown: watch::Sender<bool>,
}

#[async_trait]
impl ApprovalSource for CountingSource {
    async fn pending_approvals(&self) -> Result<Vec<Approval>, KeelError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call >= self.stop_after {
            let _ = self.shutdown.send(true);
        }
        StubKeel.pending_approvals().await
    }
}

#[tokio::test]
async fn one_cycle_publishes_three_messages_in_order() {
    let sink = RecordingSink::default();
    let (shutdown_sender, mut shutdown_receiver) = watch::channel(false);

    // Request shutdown up front: exactly one cycle runs.
    shutdown_sender.send(true).unwrap();

    poll::run(
        &StubKeel,
        &sink,
        Duration::from_secs(60),
        &mut shutdown_receiver,
    )
    .await
    .expect("loop should stop cleanly");

    let messages = sink.messages();
    let topics: Vec<&str> = messages.iter().map(|(topic, _)| topic.as_str()).collect();
    assert_eq!(
        topics,
        [
            "keel/default_wd",
            "keel/default_wd/latest",
            "homeassistant/update/default_wd/config",
        ]
    );

    // The latest-version payload decodes to the stub's new version.
    assert_eq!(messages[1].1, serde_json::json!({ "version": "0.0.15" }));
}

#[tokio::test]
async fn discovery_payload_matches_the_published_topics() {
    let sink = RecordingSink::default();
    let (shutdown_sender, mut shutdown_receiver) = watch::channel(false);
    shutdown_sender.send(true).unwrap();

    poll::run(
        &StubKeel,
        &sink,
        Duration::from_secs(60),
        &mut shutdown_receiver,
    )
    .await
    .expect("loop should stop cleanly");

    let messages = sink.messages();
    let discovery = &messages[2].1;
    assert_eq!(discovery["state_topic"], *messages[0].0.as_str());
    assert_eq!(discovery["latest_version_topic"], *messages[1].0.as_str());
}

#[tokio::test]
async fn fetch_error_stops_the_loop_without_publishing() {
    let sink = RecordingSink::default();
    let (_shutdown_sender, mut shutdown_receiver) = watch::channel(false);

    let result = poll::run(
        &FailingSource,
        &sink,
        Duration::from_secs(60),
        &mut shutdown_receiver,
    )
    .await;

    assert!(matches!(result, Err(KeelError::Decode(_))));
    assert!(sink.messages().is_empty());
}

#[tokio::test]
async fn malformed_record_is_skipped_not_fatal() {
    struct MixedSource;

    #[async_trait]
    impl ApprovalSource for MixedSource {
        async fn pending_approvals(&self) -> Result<Vec<Approval>, KeelError> {
            let mut approvals = StubKeel.pending_approvals().await?;
            approvals.insert(
                0,
                Approval {
                    identifier: String::new(),
                    current_version: "1".to_string(),
                    new_version: "2".to_string(),
                    message: "degenerate record".to_string(),
                },
            );
            Ok(approvals)
        }
    }

    let sink = RecordingSink::default();
    let (shutdown_sender, mut shutdown_receiver) = watch::channel(false);
    shutdown_sender.send(true).unwrap();

    poll::run(
        &MixedSource,
        &sink,
        Duration::from_secs(60),
        &mut shutdown_receiver,
    )
    .await
    .expect("loop should stop cleanly");

    // Only the well-formed approval was published.
    let messages = sink.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].0, "keel/default_wd");
}

#[tokio::test]
async fn zero_interval_is_valid() {
    let sink = RecordingSink::default();
    let (shutdown_sender, mut shutdown_receiver) = watch::channel(false);
    shutdown_sender.send(true).unwrap();

    poll::run(&StubKeel, &sink, Duration::ZERO, &mut shutdown_receiver)
        .await
        .expect("loop should stop cleanly");

    assert_eq!(sink.messages().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn loop_sleeps_for_the_configured_interval_between_cycles() {
    let interval = Duration::from_secs(60);
    let sink = RecordingSink::default();
    let (shutdown_sender, mut shutdown_receiver) = watch::channel(false);

    let source = CountingSource {
        calls: AtomicUsize::new(0),
        stop_after: 3,
        shutdown: shutdown_sender,
    };

    let started = Instant::now();
    poll::run(&source, &sink, interval, &mut shutdown_receiver)
        .await
        .expect("loop should stop cleanly");

    // Three cycles, two sleeps between them; shutdown wins over the
    // third sleep. Virtual time only advances in the sleeps.
    assert_eq!(source.calls.load(Ordering::SeqCst), 3);
    assert_eq!(started.elapsed(), interval * 2);
    assert_eq!(sink.messages().len(), 9);
}
