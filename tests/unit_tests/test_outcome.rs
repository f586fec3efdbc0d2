// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use sg_client_rs::sg::{
    error::SgError,
    hdr::{SENSE_BUF_LEN, SgIoHdr},
    outcome::{Outcome, SenseSummary, classify, expect_good},
    transport::SgOptions,
};

fn hdr_with(info: u32) -> SgIoHdr {
    SgIoHdr {
        info,
        ..SgIoHdr::default()
    }
}

#[test]
fn info_ok_bit_clear_is_good_regardless_of_status() {
    let mut hdr = hdr_with(0x2); // only non-OK-mask bits set
    hdr.status = 0x02;
    hdr.host_status = 0x07;
    hdr.driver_status = 0x08;
    let sense = [0u8; SENSE_BUF_LEN];
    assert_eq!(classify(&hdr, &sense), Outcome::Good);
}

#[test]
fn sense_data_is_decoded() {
    let mut hdr = hdr_with(0x1);
    hdr.sb_len_wr = 2;
    let mut sense = [0u8; SENSE_BUF_LEN];
    sense[12] = 0x06;
    sense[13] = 0x29;

    match classify(&hdr, &sense) {
        Outcome::Fault(fault) => {
            let summary = fault.sense.expect("sense must be decoded");
            assert_eq!(summary, SenseSummary { key: 0x06, asc: 0x29 });
            assert!(summary.description().contains("reset"));
            // masked_status stayed zero, so no SCSI status line
            assert_eq!(fault.scsi_status, None);
            assert_eq!(fault.host_status, None);
            assert_eq!(fault.driver_status, None);
        },
        Outcome::Good => panic!("info bit set must not classify Good"),
    }
}

#[test]
fn nonzero_statuses_are_carried() {
    let mut hdr = hdr_with(0x1);
    hdr.status = 0x02;
    hdr.masked_status = 0x01;
    hdr.host_status = 0x07;
    hdr.driver_status = 0x08;
    let sense = [0u8; SENSE_BUF_LEN];

    match classify(&hdr, &sense) {
        Outcome::Fault(fault) => {
            assert_eq!(fault.sense, None); // sb_len_wr == 0
            assert_eq!(fault.scsi_status, Some(0x02));
            assert_eq!(fault.host_status, Some(0x07));
            assert_eq!(fault.driver_status, Some(0x08));
        },
        Outcome::Good => panic!("expected a fault"),
    }
}

#[test]
fn fault_display_names_each_field() {
    let mut hdr = hdr_with(0x1);
    hdr.sb_len_wr = 18;
    hdr.status = 0x02;
    hdr.masked_status = 0x01;
    let mut sense = [0u8; SENSE_BUF_LEN];
    sense[12] = 0x02;
    sense[13] = 0x04;

    let err = expect_good(&hdr, &sense, &SgOptions::default())
        .expect_err("fault expected");
    let msg = err.to_string();
    assert!(msg.contains("logical unit not ready"), "{msg}");
    assert!(msg.contains("SCSI status 2"), "{msg}");
    assert!(matches!(err, SgError::Device(_)));
}

#[test]
fn expect_good_passes_clean_descriptor() {
    let hdr = hdr_with(0);
    let sense = [0u8; SENSE_BUF_LEN];
    let opts = SgOptions {
        debug: true,
        ..SgOptions::default()
    };
    expect_good(&hdr, &sense, &opts).expect("clean descriptor must pass");
}
