// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::sg::outcome::DeviceFault;

/// Everything that can go wrong between opening an sg node and reading a
/// command outcome back.
///
/// `Transport` is the ioctl itself failing; a device that answered with a
/// non-GOOD status is `Device`, carrying the classified fault.
#[derive(Debug, Error)]
pub enum SgError {
    #[error("failed to open sg device {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "{path:?} does not appear to be an sg device (interface version \
         {version}, need >= 30000)"
    )]
    IncompatibleDevice { path: PathBuf, version: u32 },

    #[error("SG_IO ioctl failed: {0}")]
    Transport(#[from] io::Error),

    #[error("SCSI response not ok: {0}")]
    Device(DeviceFault),
}
