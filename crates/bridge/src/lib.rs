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
// keel-ha-bridge: polls Keel for pending release approvals and
// republishes them to an MQTT broker as Home Assistant update entities.

pub mod config;
pub mod keel;
pub mod mapper;
pub mod poll;

pub use config::Options;
pub use keel::{Approval, ApprovalSource, KeelClient, KeelError, StubKeel};
