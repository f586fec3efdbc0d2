// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

use std::fmt::Write;

/// Decode the ASCII prefix of `bytes` up to (excluding) the first NUL byte,
/// or the whole range when no NUL is present. Non-ASCII bytes become `?`.
pub fn parse_cstring(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    bytes[..end]
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

/// Render `data` as lowercase two-digit hex pairs, each followed by a single
/// space (`[0xde, 0xad]` → `"de ad "`). Diagnostics only.
pub fn dump_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for byte in data {
        write!(&mut out, "{byte:02x} ").expect("Writing to String cannot fail");
    }
    out
}
