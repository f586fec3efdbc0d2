// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! Fixed-format sense decode.
//!
//! Offset 12 holds the sense key, offset 13 the additional sense code.
//! Descriptor-format sense data puts these elsewhere; we do not branch on
//! the response code. Known limitation.

/// Byte offsets into the sense buffer, fixed format assumed.
pub const SENSE_KEY_OFFSET: usize = 12;
pub const ASC_OFFSET: usize = 13;

/// Return a description for a given sense key / additional sense code pair.
///
/// Pairs not present in the table fall back to a generic placeholder.
#[inline]
pub fn sense_to_str(key: u8, asc: u8) -> &'static str {
    hot_table(key, asc).unwrap_or(if key == 0x00 {
        "No additional sense information"
    } else {
        "UNSPECIFIED / unknown sense data"
    })
}

fn hot_table(key: u8, asc: u8) -> Option<&'static str> {
    Some(match (key, asc) {
        (0x00, 0x00) => "No additional sense information",
        (0x01, 0x17) => "Recovered error – data recovered with retries",
        (0x02, 0x04) => "Not ready – logical unit not ready",
        (0x02, 0x3A) => "Not ready – medium not present",
        (0x03, 0x11) => "Medium error – unrecovered read error",
        (0x04, 0x44) => "Hardware error – internal target failure",
        (0x05, 0x20) => "Illegal request – invalid command operation code",
        (0x05, 0x24) => "Illegal request – invalid field in CDB",
        (0x05, 0x25) => "Illegal request – logical unit not supported",
        (0x06, 0x28) => "Unit attention – medium may have changed",
        (0x06, 0x29) => {
            "Unit attention – power on, reset, or bus device reset occurred"
        },
        (0x06, 0x2A) => "Unit attention – parameters changed",
        (0x07, 0x27) => "Data protect – write protected",
        (0x0B, 0x47) => "Aborted command – SCSI parity error",
        _ => return None,
    })
}
