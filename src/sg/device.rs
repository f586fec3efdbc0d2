// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{
    fs::File,
    io,
    os::unix::io::AsRawFd,
    path::{Path, PathBuf},
};

use libc::{c_int, c_void};
use tracing::debug;

use crate::sg::{error::SgError, hdr::SgIoHdr, transport::SgTransport};

#[cfg(not(target_env = "musl"))]
type IoctlRequest = libc::c_ulong;
#[cfg(target_env = "musl")]
type IoctlRequest = libc::c_int;

const SG_GET_VERSION_NUM: IoctlRequest = 0x2282;
const SG_IO: IoctlRequest = 0x2285;

/// Oldest sg interface version whose SG_IO semantics we rely on.
pub const MIN_SG_VERSION: u32 = 30000;

/// An open generic-SCSI character device.
///
/// Only constructed through [`SgDevice::open`], so a live value has already
/// passed the interface-version check. The fd is released exactly once when
/// the value drops, early-error paths included.
#[derive(Debug)]
pub struct SgDevice {
    file: File,
    path: PathBuf,
}

impl SgDevice {
    /// Open `path` read-only and verify it speaks sg v3 or later.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SgError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SgError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let device = Self {
            file,
            path: path.to_path_buf(),
        };
        // A failed version query and a pre-v3 driver are the same answer:
        // not a usable sg node. The fd drops with `device`.
        let version = device.interface_version().unwrap_or(0);
        if version < MIN_SG_VERSION {
            return Err(SgError::IncompatibleDevice {
                path: device.path,
                version,
            });
        }
        debug!(path = ?device.path, version, "opened sg device");
        Ok(device)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ioctl(&self, request: IoctlRequest, arg: *mut c_void) -> io::Result<()> {
        // SAFETY: `arg` points to a live object of the type the request
        // expects, and the fd is owned by `self.file`.
        let rc = unsafe { libc::ioctl(self.file.as_raw_fd(), request, arg) };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

impl SgTransport for SgDevice {
    fn interface_version(&self) -> io::Result<u32> {
        let mut version: c_int = 0;
        self.ioctl(
            SG_GET_VERSION_NUM,
            (&raw mut version).cast::<c_void>(),
        )?;
        Ok(version as u32)
    }

    fn submit(&self, hdr: &mut SgIoHdr) -> io::Result<()> {
        self.ioctl(SG_IO, (hdr as *mut SgIoHdr).cast::<c_void>())
    }
}
