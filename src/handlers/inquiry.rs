// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::path::Path;

use tracing::debug;

use crate::{
    control_block::inquiry::{
        VpdPage, fill_inquiry_standard_simple, fill_inquiry_vpd_simple,
    },
    sg::{
        device::SgDevice,
        error::SgError,
        hdr::DataDirection,
        outcome::expect_good,
        transport::{SgOptions, SgTransport, submit_cdb},
    },
    utils::{dump_hex, parse_cstring},
};

/// Allocation length for both INQUIRY sub-requests.
pub const INQ_REPLY_LEN: usize = 96;

/// Identity strings reported by a standard INQUIRY and the unit serial
/// number VPD page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryReport {
    pub vendor_id: String,
    pub product_id: String,
    pub product_rev: String,
    pub serial: String,
}

/// NUL-truncate an identity field and drop the space padding SCSI devices
/// right-pad with.
fn identity_field(bytes: &[u8]) -> String {
    parse_cstring(bytes).trim_end().to_string()
}

/// Run a standard INQUIRY, then the unit serial number page (VPD 0x80) on
/// the same handle. The second sub-request reuses the data buffer; only the
/// CDB changes between the two submissions.
pub fn inquire<T: SgTransport>(
    device: &T,
    opts: &SgOptions,
) -> Result<InquiryReport, SgError> {
    let mut data = [0u8; INQ_REPLY_LEN];
    let mut cdb = [0u8; 6];

    fill_inquiry_standard_simple(&mut cdb, INQ_REPLY_LEN as u8);
    let (hdr, sense) = submit_cdb(
        device,
        &cdb,
        DataDirection::FromDevice,
        &mut data,
        opts.timeout_ms,
    )?;
    expect_good(&hdr, &sense, opts)?;
    if opts.debug {
        debug!(response = %dump_hex(&data), "INQUIRY response");
    }
    let vendor_id = identity_field(&data[8..16]);
    let product_id = identity_field(&data[16..32]);
    let product_rev = identity_field(&data[32..36]);

    fill_inquiry_vpd_simple(&mut cdb, VpdPage::UnitSerial, INQ_REPLY_LEN as u8);
    let (hdr, sense) = submit_cdb(
        device,
        &cdb,
        DataDirection::FromDevice,
        &mut data,
        opts.timeout_ms,
    )?;
    expect_good(&hdr, &sense, opts)?;
    if opts.debug {
        debug!(response = %dump_hex(&data), "INQUIRY (unit serial) response");
    }
    let serial = identity_field(&data[4..16]);

    Ok(InquiryReport {
        vendor_id,
        product_id,
        product_rev,
        serial,
    })
}

/// Open the sg node at `path` and run [`inquire`] against it.
pub fn inquire_path(
    path: impl AsRef<Path>,
    opts: &SgOptions,
) -> Result<InquiryReport, SgError> {
    let device = SgDevice::open(path)?;
    inquire(&device, opts)
}
