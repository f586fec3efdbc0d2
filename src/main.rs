// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use anyhow::Result;
use sg_client_rs::{
    cfg::{cli::parse_args, logger::init_logger},
    handlers::{inquiry::inquire_path, test_unit_ready::test_unit_ready_path},
    sg::transport::SgOptions,
};
use tracing::{error, info};

fn main() -> Result<()> {
    let args = parse_args(std::env::args_os().skip(1));
    init_logger(if args.debug { "debug" } else { "info" })?;

    let opts = SgOptions {
        debug: args.debug,
        ..SgOptions::default()
    };

    // A failed TUR is worth reporting but should not stop the INQUIRY.
    match test_unit_ready_path(&args.device, &opts) {
        Ok(()) => info!("TUR: OK"),
        Err(e) => error!("TUR failed: {e}"),
    }

    match inquire_path(&args.device, &opts) {
        Ok(report) => {
            info!("Vendor   ID: {}", report.vendor_id);
            info!("Product  ID: {}", report.product_id);
            info!("Product rev: {}", report.product_rev);
            info!("Serial:      {}", report.serial);
        },
        Err(e) => error!("INQUIRY failed: {e}"),
    }

    Ok(())
}
