// VLANE - vlane
// Module: Lane Masks
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Per-lane boolean masks.
//!
//! A mask carries one flag per lane of its species and steers the masked
//! variants of every vector operation: mask-false lanes are left alone,
//! substituted, or skipped as each operation documents. Masks combine with
//! the usual boolean algebra and compress to a `u64` bit image when the
//! species is narrow enough.

use core::marker::PhantomData;

use vlane_error::{helpers, Result};

use crate::lane::Lane;

/// Boolean lane mask of a species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mask<E: Lane, const N: usize> {
    pub(crate) lanes: [bool; N],
    _marker: PhantomData<E>,
}

impl<E: Lane, const N: usize> Mask<E, N> {
    /// Every lane set.
    pub const ALL_TRUE: Self = Self {
        lanes: [true; N],
        _marker: PhantomData,
    };

    /// No lane set.
    pub const ALL_FALSE: Self = Self {
        lanes: [false; N],
        _marker: PhantomData,
    };

    /// The same value in every lane.
    #[must_use]
    pub const fn splat(value: bool) -> Self {
        Self {
            lanes: [value; N],
            _marker: PhantomData,
        }
    }

    /// Mask from a boolean lane array.
    #[must_use]
    pub const fn from_array(lanes: [bool; N]) -> Self {
        Self {
            lanes,
            _marker: PhantomData,
        }
    }

    /// Mask from `N` booleans starting at `offset`.
    pub fn from_slice(source: &[bool], offset: usize) -> Result<Self> {
        let end = offset.checked_add(N);
        match end {
            Some(end) if end <= source.len() => {
                let mut lanes = [false; N];
                lanes.copy_from_slice(&source[offset..end]);
                Ok(Self {
                    lanes,
                    _marker: PhantomData,
                })
            }
            _ => Err(helpers::array_range_error(
                "boolean slice too short for mask",
            )),
        }
    }

    /// Mask with lane `i` set to `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        Self {
            lanes: core::array::from_fn(f),
            _marker: PhantomData,
        }
    }

    /// The boolean lane array.
    #[must_use]
    pub const fn to_array(self) -> [bool; N] {
        self.lanes
    }

    /// Lane-wise conjunction.
    #[must_use]
    pub fn and(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.lanes[i] & rhs.lanes[i])
    }

    /// Lane-wise disjunction.
    #[must_use]
    pub fn or(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.lanes[i] | rhs.lanes[i])
    }

    /// Lane-wise exclusive or.
    #[must_use]
    pub fn xor(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.lanes[i] ^ rhs.lanes[i])
    }

    /// Lane-wise complement.
    #[must_use]
    pub fn not(self) -> Self {
        Self::from_fn(|i| !self.lanes[i])
    }

    /// Lane-wise `self & !rhs`.
    #[must_use]
    pub fn and_not(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.lanes[i] & !rhs.lanes[i])
    }

    /// Number of set lanes.
    #[must_use]
    pub fn true_count(self) -> usize {
        self.lanes.iter().filter(|&&b| b).count()
    }

    /// Index of the first set lane, or `N` when none is.
    #[must_use]
    pub fn first_true(self) -> usize {
        self.lanes.iter().position(|&b| b).unwrap_or(N)
    }

    /// Index of the last set lane, or `N` when none is.
    #[must_use]
    pub fn last_true(self) -> usize {
        self.lanes.iter().rposition(|&b| b).unwrap_or(N)
    }

    /// Whether any lane is set.
    #[must_use]
    pub fn any_true(self) -> bool {
        self.lanes.iter().any(|&b| b)
    }

    /// Whether every lane is set.
    #[must_use]
    pub fn all_true(self) -> bool {
        self.lanes.iter().all(|&b| b)
    }

    /// Whether lane `i` is set; `i` must be below the lane count.
    pub fn lane_is_set(self, i: usize) -> Result<bool> {
        if i < N {
            Ok(self.lanes[i])
        } else {
            Err(helpers::lane_index_error("mask lane index out of range"))
        }
    }

    /// Bit image with lane 0 in the least significant bit. Species wider
    /// than 64 lanes have no bit image.
    pub fn to_bits(self) -> Result<u64> {
        if N > 64 {
            return Err(helpers::mask_too_wide_error(
                "mask bit image limited to 64 lanes",
            ));
        }
        let mut bits = 0u64;
        for (i, &set) in self.lanes.iter().enumerate() {
            if set {
                bits |= 1 << i;
            }
        }
        Ok(bits)
    }

    /// Inverse of [`to_bits`](Self::to_bits); bits past lane `N - 1` are
    /// ignored.
    pub fn from_bits(bits: u64) -> Result<Self> {
        if N > 64 {
            return Err(helpers::mask_too_wide_error(
                "mask bit image limited to 64 lanes",
            ));
        }
        Ok(Self::from_fn(|i| (bits >> i) & 1 == 1))
    }

    /// Mask with the same number of set lanes, packed to the front.
    #[must_use]
    pub fn compress(self) -> Self {
        let count = self.true_count();
        Self::from_fn(|i| i < count)
    }

    /// The same lane flags for another element type.
    #[must_use]
    pub fn cast<F: Lane>(self) -> Mask<F, N> {
        Mask {
            lanes: self.lanes,
            _marker: PhantomData,
        }
    }

    /// Lane `i` set iff `offset + i < limit`; the loop-tail predicate.
    #[must_use]
    pub fn index_in_range(offset: i64, limit: i64) -> Self {
        Self::from_fn(|i| {
            offset
                .checked_add(i as i64)
                .is_some_and(|index| index < limit)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type M = Mask<i32, 4>;

    #[test]
    fn boolean_algebra_is_lane_wise() {
        let a = M::from_array([true, true, false, false]);
        let b = M::from_array([true, false, true, false]);
        assert_eq!(a.and(b).to_array(), [true, false, false, false]);
        assert_eq!(a.or(b).to_array(), [true, true, true, false]);
        assert_eq!(a.xor(b).to_array(), [false, true, true, false]);
        assert_eq!(a.and_not(b).to_array(), [false, true, false, false]);
        assert_eq!(a.not().to_array(), [false, false, true, true]);
    }

    #[test]
    fn counts_and_sentinels() {
        let m = M::from_array([false, true, true, false]);
        assert_eq!(m.true_count(), 2);
        assert_eq!(m.first_true(), 1);
        assert_eq!(m.last_true(), 2);
        assert_eq!(M::ALL_FALSE.first_true(), 4);
        assert_eq!(M::ALL_FALSE.last_true(), 4);
        assert!(M::ALL_TRUE.all_true());
        assert!(!M::ALL_FALSE.any_true());
    }

    #[test]
    fn bit_image_puts_lane_zero_lowest() {
        let m = M::from_array([true, false, false, true]);
        assert_eq!(m.to_bits().unwrap(), 0b1001);
        assert_eq!(M::from_bits(0b1001).unwrap(), m);
        // Bits past the lane count are ignored.
        assert_eq!(M::from_bits(0xFFF0).unwrap(), M::ALL_FALSE);
    }

    #[test]
    fn wide_masks_have_no_bit_image() {
        let wide = Mask::<i8, 65>::ALL_TRUE;
        assert!(wide.to_bits().is_err());
        assert!(Mask::<i8, 65>::from_bits(1).is_err());
        // 64 lanes is still within the image.
        assert_eq!(Mask::<i8, 64>::ALL_TRUE.to_bits().unwrap(), u64::MAX);
    }

    #[test]
    fn compress_packs_to_the_front() {
        let m = M::from_array([false, true, false, true]);
        assert_eq!(m.compress().to_array(), [true, true, false, false]);
    }

    #[test]
    fn index_in_range_marks_the_tail() {
        let m = M::index_in_range(6, 8);
        assert_eq!(m.to_array(), [true, true, false, false]);
        assert_eq!(M::index_in_range(8, 8), M::ALL_FALSE);
        assert_eq!(M::index_in_range(0, 100), M::ALL_TRUE);
        // Saturating at the i64 edge declines rather than wrapping.
        assert_eq!(M::index_in_range(i64::MAX, i64::MAX), M::ALL_FALSE);
    }

    #[test]
    fn slice_and_fn_constructors() {
        let bools = [true, false, true, false, true];
        let m = M::from_slice(&bools, 1).unwrap();
        assert_eq!(m.to_array(), [false, true, false, true]);
        assert!(M::from_slice(&bools, 2).is_err());
        assert_eq!(M::from_fn(|i| i % 2 == 0).to_array(), [true, false, true, false]);
        assert_eq!(m.cast::<f32>().to_array(), m.to_array());
        assert!(M::splat(true).all_true());
    }
}
