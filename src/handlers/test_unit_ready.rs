// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::path::Path;

use crate::{
    control_block::test_unit_ready::build_test_unit_ready,
    sg::{
        device::SgDevice,
        error::SgError,
        hdr::DataDirection,
        outcome::expect_good,
        transport::{SgOptions, SgTransport, submit_cdb},
    },
};

/// Issue TEST UNIT READY: all-zero six-byte CDB, zero-length transfer.
/// `Ok(())` means the unit answered GOOD status.
pub fn test_unit_ready<T: SgTransport>(
    device: &T,
    opts: &SgOptions,
) -> Result<(), SgError> {
    let mut cdb = [0u8; 6];
    build_test_unit_ready(&mut cdb, 0x00);
    let mut data = [0u8; 0];
    let (hdr, sense) = submit_cdb(
        device,
        &cdb,
        DataDirection::FromDevice,
        &mut data,
        opts.timeout_ms,
    )?;
    expect_good(&hdr, &sense, opts)
}

/// Open the sg node at `path` and run [`test_unit_ready`] against it.
pub fn test_unit_ready_path(
    path: impl AsRef<Path>,
    opts: &SgOptions,
) -> Result<(), SgError> {
    let device = SgDevice::open(path)?;
    test_unit_ready(&device, opts)
}
