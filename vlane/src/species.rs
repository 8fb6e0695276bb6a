// VLANE - vlane
// Module: Species Descriptors
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Species descriptors: the (element type, lane count) pair every vector,
//! mask and shuffle is parameterized over.
//!
//! A species is a zero-sized type; all derived quantities are associated
//! constants, so equal species are equal types and there is exactly one
//! descriptor per combination. The catalog below names the 64- to 512-bit
//! shapes of the six element types.

use core::marker::PhantomData;

use vlane_accel::ElemKind;

use crate::lane::Lane;

/// Bit width of the shapes the accelerated block path serves best.
pub const PREFERRED_BIT_WIDTH: u32 = 128;

/// Lane count of `E` at a given vector bit width.
#[must_use]
pub const fn lane_count_for<E: Lane>(bit_width: u32) -> usize {
    (bit_width / E::BITS) as usize
}

/// Shape summary of one species, as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeciesInfo {
    /// Element class.
    pub kind: ElemKind,
    /// Number of lanes.
    pub lanes: usize,
    /// Total width in bits.
    pub bit_width: u32,
    /// Total width in bytes.
    pub byte_size: usize,
}

/// The species of vectors with `N` lanes of element type `E`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Species<E: Lane, const N: usize> {
    _marker: PhantomData<E>,
}

impl<E: Lane, const N: usize> Species<E, N> {
    /// Number of lanes.
    pub const LANES: usize = N;
    /// Element width in bits.
    pub const ELEM_BITS: u32 = E::BITS;
    /// Vector width in bits.
    pub const BIT_WIDTH: u32 = E::BITS * (N as u32);
    /// Vector width in bytes, the size of the byte image.
    pub const BYTE_SIZE: usize = E::BYTES * N;

    /// The descriptor value.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Shape summary as plain data.
    #[must_use]
    pub const fn describe() -> SpeciesInfo {
        SpeciesInfo {
            kind: E::KIND,
            lanes: N,
            bit_width: Self::BIT_WIDTH,
            byte_size: Self::BYTE_SIZE,
        }
    }
}

// The 64- to 512-bit shape catalog.

/// 8 lanes of `i8`, 64 bits.
pub type I8x8 = Species<i8, 8>;
/// 16 lanes of `i8`, 128 bits.
pub type I8x16 = Species<i8, 16>;
/// 32 lanes of `i8`, 256 bits.
pub type I8x32 = Species<i8, 32>;
/// 64 lanes of `i8`, 512 bits.
pub type I8x64 = Species<i8, 64>;

/// 4 lanes of `i16`, 64 bits.
pub type I16x4 = Species<i16, 4>;
/// 8 lanes of `i16`, 128 bits.
pub type I16x8 = Species<i16, 8>;
/// 16 lanes of `i16`, 256 bits.
pub type I16x16 = Species<i16, 16>;
/// 32 lanes of `i16`, 512 bits.
pub type I16x32 = Species<i16, 32>;

/// 2 lanes of `i32`, 64 bits.
pub type I32x2 = Species<i32, 2>;
/// 4 lanes of `i32`, 128 bits.
pub type I32x4 = Species<i32, 4>;
/// 8 lanes of `i32`, 256 bits.
pub type I32x8 = Species<i32, 8>;
/// 16 lanes of `i32`, 512 bits.
pub type I32x16 = Species<i32, 16>;

/// 1 lane of `i64`, 64 bits.
pub type I64x1 = Species<i64, 1>;
/// 2 lanes of `i64`, 128 bits.
pub type I64x2 = Species<i64, 2>;
/// 4 lanes of `i64`, 256 bits.
pub type I64x4 = Species<i64, 4>;
/// 8 lanes of `i64`, 512 bits.
pub type I64x8 = Species<i64, 8>;

/// 2 lanes of `f32`, 64 bits.
pub type F32x2 = Species<f32, 2>;
/// 4 lanes of `f32`, 128 bits.
pub type F32x4 = Species<f32, 4>;
/// 8 lanes of `f32`, 256 bits.
pub type F32x8 = Species<f32, 8>;
/// 16 lanes of `f32`, 512 bits.
pub type F32x16 = Species<f32, 16>;

/// 1 lane of `f64`, 64 bits.
pub type F64x1 = Species<f64, 1>;
/// 2 lanes of `f64`, 128 bits.
pub type F64x2 = Species<f64, 2>;
/// 4 lanes of `f64`, 256 bits.
pub type F64x4 = Species<f64, 4>;
/// 8 lanes of `f64`, 512 bits.
pub type F64x8 = Species<f64, 8>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_width_is_lanes_times_elem_bits() {
        assert_eq!(I8x16::BIT_WIDTH, 128);
        assert_eq!(I8x16::BYTE_SIZE, 16);
        assert_eq!(F64x8::BIT_WIDTH, 512);
        assert_eq!(F64x8::BYTE_SIZE, 64);
        assert_eq!(I64x1::BIT_WIDTH, 64);
        assert_eq!(I16x8::LANES, 8);
        assert_eq!(I16x8::ELEM_BITS, 16);
    }

    #[test]
    fn describe_reports_the_shape() {
        let info = F32x4::describe();
        assert_eq!(info.kind, ElemKind::F32);
        assert_eq!(info.lanes, 4);
        assert_eq!(info.bit_width, 128);
        assert_eq!(info.byte_size, 16);
    }

    #[test]
    fn preferred_width_lane_counts() {
        assert_eq!(lane_count_for::<i8>(PREFERRED_BIT_WIDTH), 16);
        assert_eq!(lane_count_for::<i16>(PREFERRED_BIT_WIDTH), 8);
        assert_eq!(lane_count_for::<i32>(PREFERRED_BIT_WIDTH), 4);
        assert_eq!(lane_count_for::<i64>(PREFERRED_BIT_WIDTH), 2);
        assert_eq!(lane_count_for::<f32>(256), 8);
        assert_eq!(lane_count_for::<f64>(512), 8);
    }
}
