// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::fmt;

use tracing::debug;

use crate::{
    sg::{
        error::SgError,
        hdr::{SENSE_BUF_LEN, SG_INFO_OK, SG_INFO_OK_MASK, SgIoHdr},
        sense::{ASC_OFFSET, SENSE_KEY_OFFSET, sense_to_str},
        transport::SgOptions,
    },
    utils::dump_hex,
};

/// Sense key / additional sense code pulled out of the sense buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenseSummary {
    pub key: u8,
    pub asc: u8,
}

impl SenseSummary {
    pub fn description(&self) -> &'static str {
        sense_to_str(self.key, self.asc)
    }
}

/// Whatever non-OK detail the completed descriptor carried. Only fields
/// that were actually nonzero are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceFault {
    pub sense: Option<SenseSummary>,
    pub scsi_status: Option<u8>,
    pub host_status: Option<u16>,
    pub driver_status: Option<u16>,
}

impl fmt::Display for DeviceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        if let Some(s) = &self.sense {
            write!(
                f,
                "sense key {:#04x} asc {:#04x}: {}",
                s.key,
                s.asc,
                s.description()
            )?;
            sep = ", ";
        }
        if let Some(st) = self.scsi_status {
            write!(f, "{sep}SCSI status {st}")?;
            sep = ", ";
        }
        if let Some(h) = self.host_status {
            write!(f, "{sep}host status {h}")?;
            sep = ", ";
        }
        if let Some(d) = self.driver_status {
            write!(f, "{sep}driver status {d}")?;
            sep = ", ";
        }
        if sep.is_empty() {
            write!(f, "no status detail reported")?;
        }
        Ok(())
    }
}

/// Tri-state result of one submission, minus the transport failures that
/// never produce a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Good,
    Fault(DeviceFault),
}

/// Classify a completed transfer descriptor. Pure: reads the descriptor
/// and sense bytes, mutates neither.
pub fn classify(hdr: &SgIoHdr, sense: &[u8; SENSE_BUF_LEN]) -> Outcome {
    if hdr.info & SG_INFO_OK_MASK == SG_INFO_OK {
        return Outcome::Good;
    }
    let mut fault = DeviceFault::default();
    if hdr.sb_len_wr > 0 {
        fault.sense = Some(SenseSummary {
            key: sense[SENSE_KEY_OFFSET],
            asc: sense[ASC_OFFSET],
        });
    }
    if hdr.masked_status != 0 {
        fault.scsi_status = Some(hdr.status);
    }
    if hdr.host_status != 0 {
        fault.host_status = Some(hdr.host_status);
    }
    if hdr.driver_status != 0 {
        fault.driver_status = Some(hdr.driver_status);
    }
    Outcome::Fault(fault)
}

/// Classify and turn a fault into [`SgError::Device`].
///
/// With `opts.debug` set the sense decode is logged even on the OK path.
pub fn expect_good(
    hdr: &SgIoHdr,
    sense: &[u8; SENSE_BUF_LEN],
    opts: &SgOptions,
) -> Result<(), SgError> {
    if opts.debug {
        debug!(
            sense = %dump_hex(sense),
            decode = sense_to_str(sense[SENSE_KEY_OFFSET], sense[ASC_OFFSET]),
            "sense buffer"
        );
    }
    match classify(hdr, sense) {
        Outcome::Good => Ok(()),
        Outcome::Fault(fault) => Err(SgError::Device(fault)),
    }
}
