//! This module talks to the Linux sg driver: it builds the `sg_io_hdr`
//! transfer descriptor, issues the `SG_IO` ioctl and classifies the result.

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Generic-SCSI character device handle.
pub mod device;
/// Error kinds surfaced by the transport and the operations above it.
pub mod error;
/// Kernel ABI transfer descriptor (`sg_io_hdr`).
pub mod hdr;
/// Outcome classification of a completed transfer.
pub mod outcome;
/// Sense key / additional sense code descriptions.
pub mod sense;
/// Descriptor submission over a two-operation transport seam.
pub mod transport;
