// VLANE - vlane-error
// Module: Error Helpers
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Helper functions for creating common error values.
//!
//! Each helper pins the category/code pair so call sites only supply the
//! message. All helpers are `const` and usable when building associated
//! constants.

use crate::{codes, Error, ErrorCategory};

/// Create a species-commensurability error
#[must_use]
pub const fn species_not_commensurable_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::Species,
        codes::SPECIES_NOT_COMMENSURABLE,
        message,
    )
}

/// Create a conversion-not-applicable error
#[must_use]
pub const fn conversion_not_applicable_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::Species,
        codes::CONVERSION_NOT_APPLICABLE,
        message,
    )
}

/// Create a lane-index error
#[must_use]
pub const fn lane_index_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::Bounds,
        codes::LANE_INDEX_OUT_OF_RANGE,
        message,
    )
}

/// Create a slice-origin error
#[must_use]
pub const fn origin_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Bounds, codes::ORIGIN_OUT_OF_RANGE, message)
}

/// Create a part-number error
#[must_use]
pub const fn part_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Bounds, codes::PART_OUT_OF_RANGE, message)
}

/// Create an element-array range error
#[must_use]
pub const fn array_range_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::Bounds,
        codes::ARRAY_RANGE_OUT_OF_BOUNDS,
        message,
    )
}

/// Create a gather/scatter index-map error
#[must_use]
pub const fn index_map_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::Bounds,
        codes::INDEX_MAP_OUT_OF_BOUNDS,
        message,
    )
}

/// Create a mask-too-wide error
#[must_use]
pub const fn mask_too_wide_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::NotSupported, codes::MASK_TOO_WIDE, message)
}

/// Create an op-not-applicable error
#[must_use]
pub const fn op_not_applicable_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::NotSupported, codes::OP_NOT_APPLICABLE, message)
}

/// Create a math-unavailable error
#[must_use]
pub const fn math_unavailable_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::NotSupported, codes::MATH_UNAVAILABLE, message)
}

/// Create a division-by-zero fault
#[must_use]
pub const fn division_by_zero_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Arithmetic, codes::DIVISION_BY_ZERO, message)
}

/// Create a division-overflow fault
#[must_use]
pub const fn division_overflow_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Arithmetic, codes::DIVISION_OVERFLOW, message)
}

/// Create a byte-image range error
#[must_use]
pub const fn memory_range_error(message: &'static str) -> Error {
    Error::new(
        ErrorCategory::Memory,
        codes::MEMORY_RANGE_OUT_OF_BOUNDS,
        message,
    )
}
