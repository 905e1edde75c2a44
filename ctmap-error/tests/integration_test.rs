// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![allow(clippy::unwrap_used)]
//! Integration tests for the ctmap-error crate.

#[cfg(test)]
mod tests {
    use ctmap_error::{codes, Error, ErrorCategory, Result};

    #[test]
    fn test_error_creation() {
        let error = Error::new(
            ErrorCategory::Construction,
            codes::ENTRY_COUNT_MISMATCH,
            "Test error",
        );
        assert!(error.is_construction_error());
        assert_eq!(error.code, codes::ENTRY_COUNT_MISMATCH);
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_result_with_error() {
        let result: Result<i32> = Err(Error::duplicate_key("key1 repeated"));
        assert!(result.is_err());

        let error = result.err().unwrap();
        assert!(error.is_validation_error());
        assert_eq!(error.code, codes::DUPLICATE_KEY);
    }

    #[test]
    fn test_error_codes_are_distinct() {
        assert_ne!(codes::ENTRY_COUNT_MISMATCH, codes::DUPLICATE_KEY);
    }

    #[test]
    fn test_category_ordering() {
        assert!(ErrorCategory::Construction < ErrorCategory::Validation);
        assert_eq!(ErrorCategory::Validation as u8, 2);
    }

    #[test]
    fn test_errors_compare_by_value() {
        let a = Error::duplicate_key("same");
        let b = Error::duplicate_key("same");
        assert_eq!(a, b);
        assert_ne!(a, Error::entry_count_mismatch("same"));
    }
}
