// VLANE - vlane-error
// Module: Error Types
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error types for vlane operations.
//!
//! [`Error`] is a small `Copy` value: a category, a stable code from
//! [`crate::codes`] and a static message. Lane operations validate their
//! inputs before building any lane array, so an `Err` never carries a
//! partially computed result.

use core::fmt;

use crate::codes;

/// Error categories for vlane operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Species commensurability and conversion-pair errors
    Species      = 1,
    /// Lane index, origin, part and array-range errors
    Bounds       = 2,
    /// Operation undefined for the lane width or element class
    NotSupported = 3,
    /// Faulting lane cases of signed integer division
    Arithmetic   = 4,
    /// Byte-image memory transfer errors
    Memory       = 5,
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// vlane `Error` type
///
/// The main error type for the vector library. Categorized errors with
/// stable codes and static messages; `Copy`, allocation-free, usable in
/// `const` context.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
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

    /// Check if this is a species error
    #[must_use]
    pub fn is_species_error(&self) -> bool {
        self.category == ErrorCategory::Species
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a not-supported error
    #[must_use]
    pub fn is_not_supported_error(&self) -> bool {
        self.category == ErrorCategory::NotSupported
    }

    /// Check if this is an arithmetic fault
    #[must_use]
    pub fn is_arithmetic_error(&self) -> bool {
        self.category == ErrorCategory::Arithmetic
    }

    /// Check if this is a memory transfer error
    #[must_use]
    pub fn is_memory_error(&self) -> bool {
        self.category == ErrorCategory::Memory
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04}] {}", self.category, self.code, self.message)
    }
}

impl core::error::Error for Error {}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

/// Validate that a code sits inside the band of its category.
///
/// Used by the error-constant tests; the bands are documented in
/// [`crate::codes`].
#[must_use]
pub const fn code_in_band(category: ErrorCategory, code: u16) -> bool {
    let base = category as u16 * 1000;
    code >= base && code < base + 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category_and_code() {
        let err = Error::new(
            ErrorCategory::Bounds,
            codes::LANE_INDEX_OUT_OF_RANGE,
            "Lane index out of range",
        );
        let rendered = std::format!("{err}");
        assert!(rendered.contains("Bounds"));
        assert!(rendered.contains("E2000"));
        assert!(rendered.contains("Lane index out of range"));
    }

    #[test]
    fn category_predicates() {
        let err = Error::new(ErrorCategory::Arithmetic, codes::DIVISION_BY_ZERO, "div by zero");
        assert!(err.is_arithmetic_error());
        assert!(!err.is_bounds_error());
    }

    #[test]
    fn codes_sit_in_their_bands() {
        assert!(code_in_band(ErrorCategory::Species, codes::SPECIES_NOT_COMMENSURABLE));
        assert!(code_in_band(ErrorCategory::Bounds, codes::PART_OUT_OF_RANGE));
        assert!(code_in_band(ErrorCategory::NotSupported, codes::MASK_TOO_WIDE));
        assert!(code_in_band(ErrorCategory::Arithmetic, codes::DIVISION_OVERFLOW));
        assert!(code_in_band(ErrorCategory::Memory, codes::MEMORY_RANGE_OUT_OF_BOUNDS));
        assert!(!code_in_band(ErrorCategory::Species, codes::MASK_TOO_WIDE));
    }
}
