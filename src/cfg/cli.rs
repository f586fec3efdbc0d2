// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::{ffi::OsString, path::PathBuf};

pub const DEFAULT_SG_DEVICE: &str = "/dev/sg0";

/// What the demo binary needs: a device path and a debug switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub device: PathBuf,
    pub debug: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_SG_DEVICE),
            debug: false,
        }
    }
}

/// Parse `[--debug] [DEVICE]` from an iterator of raw arguments (the
/// program name already stripped). Unknown flags are ignored.
pub fn parse_args(args: impl IntoIterator<Item = OsString>) -> CliArgs {
    let mut parsed = CliArgs::default();
    for arg in args {
        if arg == "--debug" || arg == "-d" {
            parsed.debug = true;
        } else if !arg.to_string_lossy().starts_with('-') {
            parsed.device = PathBuf::from(arg);
        }
    }
    parsed
}
