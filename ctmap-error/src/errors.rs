// CTMAP - ctmap-error
// Module: Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

/// Error type shared by the ctmap crates
///
/// Only runtime construction can fail. Lookups report a missing key through
/// `Option` and never produce an `Error`.
use core::fmt;

use crate::codes;

/// `Error` categories for ctmap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Building a map from runtime data failed
    Construction = 1,
    /// Supplied entries violate a map invariant
    Validation   = 2,
}

/// ctmap `Error` type
///
/// Plain data: a category, a numeric code and a static message. It never
/// allocates, so it is usable from `no_std` targets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an entry count mismatch error
    #[must_use]
    pub const fn entry_count_mismatch(message: &'static str) -> Self {
        Self::new(
            ErrorCategory::Construction,
            codes::ENTRY_COUNT_MISMATCH,
            message,
        )
    }

    /// Create a duplicate key error
    #[must_use]
    pub const fn duplicate_key(message: &'static str) -> Self {
        Self::new(ErrorCategory::Validation, codes::DUPLICATE_KEY, message)
    }

    /// Check if this is a construction error
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Construction)
    }

    /// Check if this is a validation error
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self.category, ErrorCategory::Validation)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
