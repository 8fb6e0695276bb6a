//! Tests for error constants and helper constructors.
//! Ensures every code is unique and sits inside its category band.

use std::collections::HashSet;

use vlane_error::{codes, errors::code_in_band, helpers, Error, ErrorCategory};

#[test]
fn all_error_codes_are_unique() {
    let all_codes = [
        codes::SPECIES_NOT_COMMENSURABLE,
        codes::CONVERSION_NOT_APPLICABLE,
        codes::LANE_INDEX_OUT_OF_RANGE,
        codes::ORIGIN_OUT_OF_RANGE,
        codes::PART_OUT_OF_RANGE,
        codes::ARRAY_RANGE_OUT_OF_BOUNDS,
        codes::INDEX_MAP_OUT_OF_BOUNDS,
        codes::MASK_TOO_WIDE,
        codes::OP_NOT_APPLICABLE,
        codes::MATH_UNAVAILABLE,
        codes::DIVISION_BY_ZERO,
        codes::DIVISION_OVERFLOW,
        codes::MEMORY_RANGE_OUT_OF_BOUNDS,
    ];

    let mut seen = HashSet::new();
    for code in all_codes {
        assert!(seen.insert(code), "Duplicate error code: {code}");
    }
}

#[test]
fn helper_constructors_band_correctly() {
    let cases: [(Error, ErrorCategory); 6] = [
        (helpers::species_not_commensurable_error("x"), ErrorCategory::Species),
        (helpers::lane_index_error("x"), ErrorCategory::Bounds),
        (helpers::part_error("x"), ErrorCategory::Bounds),
        (helpers::mask_too_wide_error("x"), ErrorCategory::NotSupported),
        (helpers::division_by_zero_error("x"), ErrorCategory::Arithmetic),
        (helpers::memory_range_error("x"), ErrorCategory::Memory),
    ];

    for (err, category) in cases {
        assert_eq!(err.category, category);
        assert!(code_in_band(category, err.code), "code {} outside band", err.code);
    }
}

#[test]
fn errors_are_const_constructible() {
    const ERR: Error = helpers::division_overflow_error("MIN / -1 overflows");
    assert_eq!(ERR.code, codes::DIVISION_OVERFLOW);
    assert_eq!(ERR.message, "MIN / -1 overflows");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error>(_e: E) {}
    assert_error(helpers::lane_index_error("lane 9 of 8"));
}
