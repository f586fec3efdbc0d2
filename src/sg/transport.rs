// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Descriptor submission. The kernel is reached through [`SgTransport`], a
//! two-operation seam (version query + descriptor submit) so the layers
//! above can run against a fake without hardware or privileges.

use std::io;

use crate::sg::{
    error::SgError,
    hdr::{DataDirection, SENSE_BUF_LEN, SgIoHdr},
};

/// Per-command timeout used by the bundled operations.
pub const TIMEOUT_20_SECS: u32 = 20_000;

/// The two privileged calls the sg driver exposes to us.
pub trait SgTransport {
    /// `SG_GET_VERSION_NUM` — the driver's interface version (e.g. 30536
    /// for 3.5.36).
    fn interface_version(&self) -> io::Result<u32>;

    /// `SG_IO` — submit one transfer descriptor; the kernel fills the
    /// response fields in place and blocks until completion or timeout.
    fn submit(&self, hdr: &mut SgIoHdr) -> io::Result<()>;
}

/// Knobs threaded explicitly into the operations instead of a process-wide
/// debug toggle.
#[derive(Debug, Clone, Copy)]
pub struct SgOptions {
    pub timeout_ms: u32,
    /// Dump raw response and sense bytes at debug level, success included.
    pub debug: bool,
}

impl Default for SgOptions {
    fn default() -> Self {
        Self {
            timeout_ms: TIMEOUT_20_SECS,
            debug: false,
        }
    }
}

/// Issue one CDB over `transport`.
///
/// Builds a descriptor bound to `cdb`, `data` and a fresh 32-byte sense
/// buffer, submits it and hands back the populated descriptor together
/// with the sense bytes. An ioctl-level failure is [`SgError::Transport`];
/// a device-reported error still returns `Ok` here and is surfaced by the
/// outcome classifier.
pub fn submit_cdb<T: SgTransport + ?Sized>(
    transport: &T,
    cdb: &[u8],
    direction: DataDirection,
    data: &mut [u8],
    timeout_ms: u32,
) -> Result<(SgIoHdr, [u8; SENSE_BUF_LEN]), SgError> {
    let mut sense = [0u8; SENSE_BUF_LEN];
    let mut hdr =
        SgIoHdr::for_command(cdb, direction, data, &mut sense, timeout_ms);
    transport.submit(&mut hdr)?;
    Ok((hdr, sense))
}
