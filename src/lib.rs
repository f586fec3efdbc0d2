//! This crate issues SCSI commands to local devices through the Linux
//! generic-SCSI (`SG_IO`) pass-through interface.
// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Handles configuration, command-line parsing, and logging.
pub mod cfg;
/// Implements various SCSI commands (control blocks).
pub mod control_block;
/// Protocol operations layered on the transport (INQUIRY, TEST UNIT READY).
pub mod handlers;
/// The SG_IO transport: transfer descriptor, device handle, outcome
/// classification.
pub mod sg;
/// Provides utility functions used throughout the crate.
pub mod utils;
