// CTMAP - ctmap-error
// Module: Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for ctmap

// Construction error codes (1000-1999)
/// Number of supplied entries differs from the map's fixed length
pub const ENTRY_COUNT_MISMATCH: u16 = 1001;
/// The same key was supplied more than once
pub const DUPLICATE_KEY: u16 = 1002;
