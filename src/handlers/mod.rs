//! Protocol operations layered on the SG transport.

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2012-2025 Andrei Maltsev

/// Standard INQUIRY plus the unit serial number VPD page.
pub mod inquiry;
/// TEST UNIT READY.
pub mod test_unit_ready;
