// VLANE - vlane-error
// Module: Error Codes
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for vlane.
//!
//! Codes are banded by category so a numeric code alone identifies the
//! failure class: 1000s species, 2000s bounds, 3000s not-supported,
//! 4000s arithmetic faults, 5000s memory transfer.

// Species error codes (1000-1999)
/// Source and destination species are not commensurable (neither extent
/// divides the other evenly)
pub const SPECIES_NOT_COMMENSURABLE: u16 = 1000;
/// Conversion kind does not apply to the source element class
pub const CONVERSION_NOT_APPLICABLE: u16 = 1001;

// Bounds error codes (2000-2999)
/// Lane index outside `[0, lane_count)`
pub const LANE_INDEX_OUT_OF_RANGE: u16 = 2000;
/// Slice origin outside `[0, lane_count]`
pub const ORIGIN_OUT_OF_RANGE: u16 = 2001;
/// Part number outside the range allowed by the shape ratio
pub const PART_OUT_OF_RANGE: u16 = 2002;
/// Element-array range does not cover the addressed lanes
pub const ARRAY_RANGE_OUT_OF_BOUNDS: u16 = 2003;
/// Gather/scatter index map addresses an element outside the base array
pub const INDEX_MAP_OUT_OF_BOUNDS: u16 = 2004;

// Not-supported error codes (3000-3999)
/// Bit access on a mask wider than 64 lanes
pub const MASK_TOO_WIDE: u16 = 3000;
/// Operation tag not applicable to the element class
pub const OP_NOT_APPLICABLE: u16 = 3001;
/// Float math operation unavailable without the `std` feature
pub const MATH_UNAVAILABLE: u16 = 3002;

// Arithmetic error codes (4000-4999)
/// Signed integer division or remainder by zero
pub const DIVISION_BY_ZERO: u16 = 4000;
/// Signed integer division overflow (MIN / -1)
pub const DIVISION_OVERFLOW: u16 = 4001;

// Memory error codes (5000-5999)
/// Byte-image range does not cover the addressed lanes
pub const MEMORY_RANGE_OUT_OF_BOUNDS: u16 = 5000;
