// CTMAP - ctmap-error
// Module: Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! ctmap error handling library
//!
//! Errors only arise when a map is built from data that is not known until
//! runtime. Malformed literal construction is rejected by the compiler, and a
//! missing key is reported as `None` by the lookup methods.
//!
//! # Error Categories
//!
//! ## Construction Errors (1000-1999)
//! - Entry count mismatch
//! - Duplicate keys
//!
//! # Usage
//!
//! ```
//! use ctmap_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Construction,
//!     codes::ENTRY_COUNT_MISMATCH,
//!     "expected 3 entries",
//! );
//! assert!(error.is_construction_error());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for ctmap
pub mod codes;
/// Error and error handling types
pub mod errors;

pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for ctmap operations.
///
/// This type alias uses `ctmap_error::Error` as the error type and is
/// suitable for `no_std` environments.
pub type Result<T> = core::result::Result<T, Error>;
