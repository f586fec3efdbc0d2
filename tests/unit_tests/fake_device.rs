// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

//! A scripted stand-in for the sg driver: implements the two-operation
//! transport seam and replays canned responses, recording every CDB it is
//! handed.

use std::{cell::RefCell, io, ptr, slice};

use sg_client_rs::sg::{hdr::SgIoHdr, transport::SgTransport};

/// One canned completion: data-in payload plus the response fields the
/// kernel would have written back into the descriptor.
#[derive(Debug, Clone, Default)]
pub struct FakeResponse {
    pub data: Vec<u8>,
    pub sense: Vec<u8>,
    pub info: u32,
    pub status: u8,
    pub masked_status: u8,
    pub host_status: u16,
    pub driver_status: u16,
}

impl FakeResponse {
    /// Clean completion carrying `data`.
    pub fn good(data: Vec<u8>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// CHECK CONDITION with fixed-format sense bytes at offsets 12/13.
    pub fn check_condition(key: u8, asc: u8) -> Self {
        let mut sense = vec![0u8; 18];
        sense[12] = key;
        sense[13] = asc;
        Self {
            sense,
            info: 0x1,
            status: 0x02,
            masked_status: 0x01,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeSg {
    pub version: u32,
    responses: RefCell<Vec<FakeResponse>>,
    seen_cdbs: RefCell<Vec<Vec<u8>>>,
}

impl FakeSg {
    pub fn with_responses(responses: Vec<FakeResponse>) -> Self {
        Self {
            version: 30536,
            responses: RefCell::new(responses),
            seen_cdbs: RefCell::new(Vec::new()),
        }
    }

    pub fn seen_cdbs(&self) -> Vec<Vec<u8>> {
        self.seen_cdbs.borrow().clone()
    }
}

impl SgTransport for FakeSg {
    fn interface_version(&self) -> io::Result<u32> {
        Ok(self.version)
    }

    fn submit(&self, hdr: &mut SgIoHdr) -> io::Result<()> {
        // SAFETY: submit_cdb keeps the CDB and buffers alive across this
        // call; lengths come from the descriptor itself.
        let cdb = unsafe {
            slice::from_raw_parts(hdr.cmdp, hdr.cmd_len as usize).to_vec()
        };
        self.seen_cdbs.borrow_mut().push(cdb);

        let resp = self.responses.borrow_mut().remove(0);
        if !resp.data.is_empty() && !hdr.dxferp.is_null() {
            let n = resp.data.len().min(hdr.dxfer_len as usize);
            unsafe {
                ptr::copy_nonoverlapping(
                    resp.data.as_ptr(),
                    hdr.dxferp.cast::<u8>(),
                    n,
                );
            }
        }
        if !resp.sense.is_empty() && !hdr.sbp.is_null() {
            let n = resp.sense.len().min(hdr.mx_sb_len as usize);
            unsafe {
                ptr::copy_nonoverlapping(resp.sense.as_ptr(), hdr.sbp, n);
            }
            hdr.sb_len_wr = n as u8;
        }
        hdr.info = resp.info;
        hdr.status = resp.status;
        hdr.masked_status = resp.masked_status;
        hdr.host_status = resp.host_status;
        hdr.driver_status = resp.driver_status;
        Ok(())
    }
}

/// Transport whose ioctl always fails, for exercising the transport-error
/// path.
#[derive(Debug, Default)]
pub struct BrokenSg;

impl SgTransport for BrokenSg {
    fn interface_version(&self) -> io::Result<u32> {
        Err(io::Error::from_raw_os_error(libc::EIO))
    }

    fn submit(&self, _hdr: &mut SgIoHdr) -> io::Result<()> {
        Err(io::Error::from_raw_os_error(libc::EIO))
    }
}
