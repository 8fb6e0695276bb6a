// VLANE - vlane
// Module: Vectors
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-width vectors and their lane-wise operations.
//!
//! A vector owns `[E; N]` and is immutable: every operation returns a new
//! value. Lane-local operations validate the op tag against the element
//! class, attempt the accelerated block path when the species' byte image
//! divides into 16-byte blocks, and otherwise run the per-lane semantics
//! of [`Lane`]. The two paths are observably identical for all inputs;
//! masked forms of faultable ops always run per lane so that masked-off
//! lanes cannot fault.

use vlane_error::{helpers, Result};

use crate::dispatch;
use crate::lane::{IndexLane, Lane};
use crate::mask::Mask;
use crate::ops::{BinaryOp, CompareOp, ReduceOp, ShiftOp, TernaryOp, TestOp, UnaryOp};
use crate::shuffle::Shuffle;

/// Vector of `N` lanes of element type `E`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<E: Lane, const N: usize> {
    pub(crate) lanes: [E; N],
}

/// Broadcasting conversion, so binary entry points accept a vector or a
/// single element.
impl<E: Lane, const N: usize> From<E> for Vector<E, N> {
    fn from(value: E) -> Self {
        Self::broadcast(value)
    }
}

impl<E: Lane, const N: usize> Vector<E, N> {
    /// The all-zero vector.
    pub const ZERO: Self = Self {
        lanes: [E::ZERO; N],
    };

    /// The same value in every lane.
    #[must_use]
    pub const fn broadcast(value: E) -> Self {
        Self { lanes: [value; N] }
    }

    /// Broadcast an `i64`, narrowed per the element's conversion rules
    /// (truncation into integers, numeric cast into floats).
    #[must_use]
    pub fn broadcast_i64(value: i64) -> Self {
        Self::broadcast(E::from_i64(value))
    }

    /// Vector from a lane array.
    #[must_use]
    pub const fn from_array(lanes: [E; N]) -> Self {
        Self { lanes }
    }

    /// The lane array.
    #[must_use]
    pub const fn to_array(self) -> [E; N] {
        self.lanes
    }

    /// Vector with lane `i` holding `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> E) -> Self {
        Self {
            lanes: core::array::from_fn(f),
        }
    }

    /// Lane `i` holds the value `i`.
    #[must_use]
    pub fn iota() -> Self {
        Self::from_fn(|i| E::from_i64(i as i64))
    }

    /// Value of lane `i`.
    pub fn lane(self, i: usize) -> Result<E> {
        if i < N {
            Ok(self.lanes[i])
        } else {
            Err(helpers::lane_index_error("vector lane index out of range"))
        }
    }

    /// Copy with lane `i` replaced.
    pub fn with_lane(self, i: usize, value: E) -> Result<Self> {
        if i < N {
            let mut lanes = self.lanes;
            lanes[i] = value;
            Ok(Self { lanes })
        } else {
            Err(helpers::lane_index_error("vector lane index out of range"))
        }
    }

    // ------------------------------------------------------------------
    // Lane-wise operations
    // ------------------------------------------------------------------

    /// Apply a one-operand op to every lane.
    pub fn lanewise_unary(self, op: UnaryOp) -> Result<Self> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "unary op not defined for this element class",
            ));
        }
        if let Some(out) = self.accel_unary(op) {
            return Ok(out);
        }
        self.try_map(|a| a.unary(op))
    }

    /// Apply a one-operand op where the mask is set; other lanes are
    /// unchanged.
    pub fn lanewise_unary_masked(self, op: UnaryOp, mask: Mask<E, N>) -> Result<Self> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "unary op not defined for this element class",
            ));
        }
        let mut lanes = self.lanes;
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask.lanes[i] {
                *lane = lane.unary(op)?;
            }
        }
        Ok(Self { lanes })
    }

    /// Apply a two-operand op to every lane pair. `rhs` may be a vector or
    /// a broadcast element.
    pub fn lanewise(self, op: BinaryOp, rhs: impl Into<Self>) -> Result<Self> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "binary op not defined for this element class",
            ));
        }
        let rhs = rhs.into();
        if let Some(out) = self.accel_binary(op, rhs) {
            return Ok(out);
        }
        self.try_zip(rhs, |a, b| a.binary(op, b))
    }

    /// Apply a two-operand op where the mask is set; other lanes keep
    /// `self`'s value. Masked-off lanes are never evaluated, so they
    /// cannot fault.
    pub fn lanewise_masked(
        self,
        op: BinaryOp,
        rhs: impl Into<Self>,
        mask: Mask<E, N>,
    ) -> Result<Self> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "binary op not defined for this element class",
            ));
        }
        let rhs = rhs.into();
        let mut lanes = self.lanes;
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask.lanes[i] {
                *lane = lane.binary(op, rhs.lanes[i])?;
            }
        }
        Ok(Self { lanes })
    }

    /// Shift every lane by one scalar amount, reduced modulo the element
    /// bit width before any lane is touched.
    pub fn lanewise_shift(self, op: ShiftOp, amount: u32) -> Result<Self> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "shift op not defined for this element class",
            ));
        }
        let amount = amount & (E::BITS - 1);
        if let Some(out) = self.accel_shift(op, amount) {
            return Ok(out);
        }
        let count = E::from_u64(u64::from(amount));
        self.try_map(|a| a.binary(op.as_binary(), count))
    }

    /// Masked scalar-amount shift; mask-false lanes are unchanged.
    pub fn lanewise_shift_masked(
        self,
        op: ShiftOp,
        amount: u32,
        mask: Mask<E, N>,
    ) -> Result<Self> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "shift op not defined for this element class",
            ));
        }
        let count = E::from_u64(u64::from(amount & (E::BITS - 1)));
        let mut lanes = self.lanes;
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask.lanes[i] {
                *lane = lane.binary(op.as_binary(), count)?;
            }
        }
        Ok(Self { lanes })
    }

    /// Apply a three-operand op lane-wise.
    pub fn lanewise_ternary(self, op: TernaryOp, b: Self, c: Self) -> Result<Self> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "ternary op not defined for this element class",
            ));
        }
        if let Some(out) = self.accel_ternary(op, b, c) {
            return Ok(out);
        }
        let mut lanes = self.lanes;
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = lane.ternary(op, b.lanes[i], c.lanes[i])?;
        }
        Ok(Self { lanes })
    }

    /// Masked three-operand op; mask-false lanes are unchanged.
    pub fn lanewise_ternary_masked(
        self,
        op: TernaryOp,
        b: Self,
        c: Self,
        mask: Mask<E, N>,
    ) -> Result<Self> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "ternary op not defined for this element class",
            ));
        }
        let mut lanes = self.lanes;
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask.lanes[i] {
                *lane = lane.ternary(op, b.lanes[i], c.lanes[i])?;
            }
        }
        Ok(Self { lanes })
    }

    /// Compare lane pairs under a predicate. `rhs` may be a vector or a
    /// broadcast element.
    pub fn compare(self, op: CompareOp, rhs: impl Into<Self>) -> Result<Mask<E, N>> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "comparison not defined for this element class",
            ));
        }
        let rhs = rhs.into();
        if let Some(mask) = self.accel_compare(op, rhs) {
            return Ok(mask);
        }
        let mut flags = [false; N];
        for (i, flag) in flags.iter_mut().enumerate() {
            *flag = self.lanes[i].compare(op, rhs.lanes[i])?;
        }
        Ok(Mask::from_array(flags))
    }

    /// Masked comparison: forced false where the mask is false.
    pub fn compare_masked(
        self,
        op: CompareOp,
        rhs: impl Into<Self>,
        mask: Mask<E, N>,
    ) -> Result<Mask<E, N>> {
        let rhs = rhs.into();
        Ok(self.compare(op, rhs)?.and(mask))
    }

    /// Evaluate a one-operand predicate per lane.
    pub fn test(self, op: TestOp) -> Result<Mask<E, N>> {
        if !op.applicable_to(E::KIND) {
            return Err(helpers::op_not_applicable_error(
                "lane test not defined for this element class",
            ));
        }
        let mut flags = [false; N];
        for (i, flag) in flags.iter_mut().enumerate() {
            *flag = self.lanes[i].test(op)?;
        }
        Ok(Mask::from_array(flags))
    }

    /// Masked lane test: forced false where the mask is false.
    pub fn test_masked(self, op: TestOp, mask: Mask<E, N>) -> Result<Mask<E, N>> {
        Ok(self.test(op)?.and(mask))
    }

    /// Fold all lanes under an associative op, lane 0 to lane N-1.
    pub fn reduce_lanes(self, op: ReduceOp) -> Result<E> {
        self.reduce_lanes_masked(op, Mask::ALL_TRUE)
    }

    /// Masked fold: the op's identity element is substituted for
    /// mask-false lanes.
    pub fn reduce_lanes_masked(self, op: ReduceOp, mask: Mask<E, N>) -> Result<E> {
        let identity = E::reduce_identity(op)?;
        let bin = op.as_binary();
        let mut acc = identity;
        for i in 0..N {
            let v = if mask.lanes[i] { self.lanes[i] } else { identity };
            acc = if i == 0 { v } else { acc.binary(bin, v)? };
        }
        Ok(acc)
    }

    /// Fold all lanes and widen the result to `i64`.
    pub fn reduce_lanes_to_i64(self, op: ReduceOp) -> Result<i64> {
        Ok(self.reduce_lanes(op)?.to_i64())
    }

    // ------------------------------------------------------------------
    // Lane movement
    // ------------------------------------------------------------------

    /// Lane-wise select: mask-true lanes from `rhs`, the rest from `self`.
    #[must_use]
    pub fn blend(self, rhs: impl Into<Self>, mask: Mask<E, N>) -> Self {
        let rhs = rhs.into();
        Self::from_fn(|i| if mask.lanes[i] { rhs.lanes[i] } else { self.lanes[i] })
    }

    /// Lanes `[origin, N)` shifted down to lane 0, zero-filled at the top.
    /// `origin` must lie in `[0, N]`.
    pub fn slice(self, origin: usize) -> Result<Self> {
        self.slice_with(origin, Self::ZERO)
    }

    /// Window `[origin, origin + N)` of the concatenation `self ++ rhs`.
    pub fn slice_with(self, origin: usize, rhs: Self) -> Result<Self> {
        if origin > N {
            return Err(helpers::origin_error("slice origin out of range"));
        }
        Ok(Self::from_fn(|i| {
            let src = origin + i;
            if src < N {
                self.lanes[src]
            } else {
                rhs.lanes[src - N]
            }
        }))
    }

    /// Reverse of [`slice`](Self::slice): lane `i` lands at `origin + i`,
    /// zero elsewhere; lanes pushed past the end are dropped.
    pub fn unslice(self, origin: usize) -> Result<Self> {
        self.unslice_masked(origin, Self::ZERO, 0, Mask::ALL_TRUE)
    }

    /// Reverse of [`slice_with`](Self::slice_with): lane `i` lands at
    /// position `origin + i` of a conceptual `2N`-lane window over the
    /// background `rhs`; `part` 0 returns the window's front half, 1 the
    /// back half.
    pub fn unslice_with(self, origin: usize, rhs: Self, part: i32) -> Result<Self> {
        self.unslice_masked(origin, rhs, part, Mask::ALL_TRUE)
    }

    /// Masked [`unslice_with`](Self::unslice_with): only mask-true lanes
    /// of `self` are written into the background.
    pub fn unslice_masked(
        self,
        origin: usize,
        rhs: Self,
        part: i32,
        mask: Mask<E, N>,
    ) -> Result<Self> {
        if origin > N {
            return Err(helpers::origin_error("unslice origin out of range"));
        }
        if part != 0 && part != 1 {
            return Err(helpers::part_error("unslice part must be 0 or 1"));
        }
        let mut lanes = rhs.lanes;
        for i in 0..N {
            if !mask.lanes[i] {
                continue;
            }
            let dest = origin + i;
            if part == 0 && dest < N {
                lanes[dest] = self.lanes[i];
            } else if part == 1 && dest >= N {
                lanes[dest - N] = self.lanes[i];
            }
        }
        Ok(Self { lanes })
    }

    /// Permute lanes through a shuffle; exceptional indices select zero.
    #[must_use]
    pub fn rearrange(self, shuffle: Shuffle<E, N>) -> Self {
        Self::from_fn(|i| {
            let idx = shuffle.indices[i].to_i64();
            if idx >= 0 {
                self.lanes[idx as usize]
            } else {
                E::ZERO
            }
        })
    }

    /// Masked permutation: mask-false lanes are zero, and exceptional
    /// indices still select zero.
    #[must_use]
    pub fn rearrange_masked(self, shuffle: Shuffle<E, N>, mask: Mask<E, N>) -> Self {
        Self::from_fn(|i| {
            let idx = shuffle.indices[i].to_i64();
            if mask.lanes[i] && idx >= 0 {
                self.lanes[idx as usize]
            } else {
                E::ZERO
            }
        })
    }

    /// Two-source permutation: valid indices address `self`, exceptional
    /// ones address `rhs` at the wrapped position, realizing "index >= N
    /// selects the second vector" under the index encoding.
    #[must_use]
    pub fn rearrange_with(self, shuffle: Shuffle<E, N>, rhs: Self) -> Self {
        Self::from_fn(|i| {
            let idx = shuffle.indices[i].to_i64();
            if idx >= 0 {
                self.lanes[idx as usize]
            } else {
                rhs.lanes[(idx + N as i64) as usize]
            }
        })
    }

    /// Mask-true lanes packed to the front, zero fill behind them.
    #[must_use]
    pub fn compress(self, mask: Mask<E, N>) -> Self {
        let mut lanes = [E::ZERO; N];
        let mut next = 0;
        for i in 0..N {
            if mask.lanes[i] {
                lanes[next] = self.lanes[i];
                next += 1;
            }
        }
        Self { lanes }
    }

    /// Reverse of [`compress`](Self::compress): front lanes spread into
    /// the mask-true positions, zero elsewhere.
    #[must_use]
    pub fn expand(self, mask: Mask<E, N>) -> Self {
        let mut lanes = [E::ZERO; N];
        let mut next = 0;
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask.lanes[i] {
                *lane = self.lanes[next];
                next += 1;
            }
        }
        Self { lanes }
    }

    /// Use `self`'s lane values as indices into `table`.
    #[must_use]
    pub fn select_from(self, table: Self) -> Self {
        table.rearrange(self.to_shuffle())
    }

    /// Masked [`select_from`](Self::select_from): mask-false lanes are
    /// zero.
    #[must_use]
    pub fn select_from_masked(self, table: Self, mask: Mask<E, N>) -> Self {
        table.rearrange_masked(self.to_shuffle(), mask)
    }

    /// Use `self`'s lane values as indices into the `2N`-lane
    /// concatenation `first ++ second`.
    #[must_use]
    pub fn select_from_two(self, first: Self, second: Self) -> Self {
        first.rearrange_with(self.to_shuffle(), second)
    }

    /// Lane values partially wrapped into shuffle indices.
    #[must_use]
    pub fn to_shuffle(self) -> Shuffle<E, N> {
        Shuffle::from_fn(|i| self.lanes[i].to_i64())
    }

    /// `self + iota * scale`, the index vector for strided addressing.
    pub fn add_index(self, scale: i64) -> Result<Self> {
        let step = Self::iota().lanewise(BinaryOp::Mul, Self::broadcast_i64(scale))?;
        self.lanewise(BinaryOp::Add, step)
    }

    // ------------------------------------------------------------------
    // Operator sugar
    // ------------------------------------------------------------------

    /// Lane-wise wrapping/IEEE addition.
    pub fn add(self, rhs: impl Into<Self>) -> Result<Self> {
        self.lanewise(BinaryOp::Add, rhs)
    }

    /// Lane-wise wrapping/IEEE subtraction.
    pub fn sub(self, rhs: impl Into<Self>) -> Result<Self> {
        self.lanewise(BinaryOp::Sub, rhs)
    }

    /// Lane-wise wrapping/IEEE multiplication.
    pub fn mul(self, rhs: impl Into<Self>) -> Result<Self> {
        self.lanewise(BinaryOp::Mul, rhs)
    }

    /// Lane-wise minimum.
    pub fn min(self, rhs: impl Into<Self>) -> Result<Self> {
        self.lanewise(BinaryOp::Min, rhs)
    }

    /// Lane-wise maximum.
    pub fn max(self, rhs: impl Into<Self>) -> Result<Self> {
        self.lanewise(BinaryOp::Max, rhs)
    }

    /// Lane-wise bitwise and (integer species).
    pub fn and(self, rhs: impl Into<Self>) -> Result<Self> {
        self.lanewise(BinaryOp::And, rhs)
    }

    /// Lane-wise bitwise or (integer species).
    pub fn or(self, rhs: impl Into<Self>) -> Result<Self> {
        self.lanewise(BinaryOp::Or, rhs)
    }

    /// Lane-wise negation.
    pub fn neg(self) -> Result<Self> {
        self.lanewise_unary(UnaryOp::Neg)
    }

    /// Lane-wise absolute value.
    pub fn abs(self) -> Result<Self> {
        self.lanewise_unary(UnaryOp::Abs)
    }

    /// Lane-wise complement (integer species).
    pub fn not(self) -> Result<Self> {
        self.lanewise_unary(UnaryOp::Not)
    }

    /// Lane-wise equality mask.
    pub fn eq(self, rhs: impl Into<Self>) -> Result<Mask<E, N>> {
        self.compare(CompareOp::Eq, rhs)
    }

    /// Lane-wise less-than mask.
    pub fn lt(self, rhs: impl Into<Self>) -> Result<Mask<E, N>> {
        self.compare(CompareOp::Lt, rhs)
    }

    // ------------------------------------------------------------------
    // Accelerated block path
    // ------------------------------------------------------------------

    fn accel_unary(self, op: UnaryOp) -> Option<Self> {
        if !dispatch::species_accelerable::<E, N>() {
            return None;
        }
        let kernel = dispatch::unary_kernel(op)?;
        let provider = vlane_accel::active();
        let step = dispatch::BLOCK_BYTES / E::BYTES;
        let mut lanes = self.lanes;
        let mut i = 0;
        while i < N {
            let a = dispatch::pack_block(&self.lanes[i..i + step]);
            let out = provider.unary(kernel, E::KIND, &a)?;
            dispatch::unpack_block(&out, &mut lanes[i..i + step]);
            i += step;
        }
        Some(Self { lanes })
    }

    fn accel_binary(self, op: BinaryOp, rhs: Self) -> Option<Self> {
        // Faultable ops take the per-lane path so that faults surface.
        if op.can_fault(E::KIND) || !dispatch::species_accelerable::<E, N>() {
            return None;
        }
        let kernel = dispatch::binary_kernel(op)?;
        let provider = vlane_accel::active();
        let step = dispatch::BLOCK_BYTES / E::BYTES;
        let mut lanes = self.lanes;
        let mut i = 0;
        while i < N {
            let a = dispatch::pack_block(&self.lanes[i..i + step]);
            let b = dispatch::pack_block(&rhs.lanes[i..i + step]);
            let out = provider.binary(kernel, E::KIND, &a, &b)?;
            dispatch::unpack_block(&out, &mut lanes[i..i + step]);
            i += step;
        }
        Some(Self { lanes })
    }

    fn accel_shift(self, op: ShiftOp, amount: u32) -> Option<Self> {
        if !dispatch::species_accelerable::<E, N>() {
            return None;
        }
        let kernel = dispatch::shift_kernel(op)?;
        let provider = vlane_accel::active();
        let step = dispatch::BLOCK_BYTES / E::BYTES;
        let mut lanes = self.lanes;
        let mut i = 0;
        while i < N {
            let a = dispatch::pack_block(&self.lanes[i..i + step]);
            let out = provider.shift(kernel, E::KIND, &a, amount)?;
            dispatch::unpack_block(&out, &mut lanes[i..i + step]);
            i += step;
        }
        Some(Self { lanes })
    }

    fn accel_ternary(self, op: TernaryOp, b: Self, c: Self) -> Option<Self> {
        if !dispatch::species_accelerable::<E, N>() {
            return None;
        }
        let provider = vlane_accel::active();
        let step = dispatch::BLOCK_BYTES / E::BYTES;
        let mut lanes = self.lanes;
        let mut i = 0;
        while i < N {
            let blk_a = dispatch::pack_block(&self.lanes[i..i + step]);
            let blk_b = dispatch::pack_block(&b.lanes[i..i + step]);
            let blk_c = dispatch::pack_block(&c.lanes[i..i + step]);
            let out = match op {
                TernaryOp::FusedMultiplyAdd => {
                    provider.fused_multiply_add(E::KIND, &blk_a, &blk_b, &blk_c)?
                }
                TernaryOp::BitwiseBlend => {
                    provider.select_bits(&blk_a, &blk_b, &blk_c)?
                }
            };
            dispatch::unpack_block(&out, &mut lanes[i..i + step]);
            i += step;
        }
        Some(Self { lanes })
    }

    fn accel_compare(self, op: CompareOp, rhs: Self) -> Option<Mask<E, N>> {
        if !dispatch::species_accelerable::<E, N>() {
            return None;
        }
        let kernel = dispatch::compare_kernel(op)?;
        let provider = vlane_accel::active();
        let step = dispatch::BLOCK_BYTES / E::BYTES;
        let mut flags = [false; N];
        let mut i = 0;
        while i < N {
            let a = dispatch::pack_block(&self.lanes[i..i + step]);
            let b = dispatch::pack_block(&rhs.lanes[i..i + step]);
            let out = provider.compare(kernel, E::KIND, &a, &b)?;
            for j in 0..step {
                let lane = &out[j * E::BYTES..(j + 1) * E::BYTES];
                flags[i + j] = lane.iter().any(|&byte| byte != 0);
            }
            i += step;
        }
        Some(Mask::from_array(flags))
    }

    // ------------------------------------------------------------------
    // Per-lane plumbing
    // ------------------------------------------------------------------

    fn try_map(self, mut f: impl FnMut(E) -> Result<E>) -> Result<Self> {
        let mut lanes = self.lanes;
        for lane in &mut lanes {
            *lane = f(*lane)?;
        }
        Ok(Self { lanes })
    }

    fn try_zip(self, rhs: Self, mut f: impl FnMut(E, E) -> Result<E>) -> Result<Self> {
        let mut lanes = self.lanes;
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = f(*lane, rhs.lanes[i])?;
        }
        Ok(Self { lanes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type V = Vector<i32, 4>;

    #[test]
    fn lane_access_is_checked() {
        let v = V::from_array([10, 20, 30, 40]);
        assert_eq!(v.lane(2).unwrap(), 30);
        assert!(v.lane(4).is_err());
        let w = v.with_lane(0, -1).unwrap();
        assert_eq!(w.to_array(), [-1, 20, 30, 40]);
        // Copy-on-write leaves the original alone.
        assert_eq!(v.lane(0).unwrap(), 10);
        assert!(v.with_lane(9, 0).is_err());
    }

    #[test]
    fn broadcast_and_iota() {
        assert_eq!(V::broadcast(7).to_array(), [7; 4]);
        assert_eq!(V::broadcast_i64(0x1_0000_0001).to_array(), [1; 4]);
        assert_eq!(V::iota().to_array(), [0, 1, 2, 3]);
        assert_eq!(
            Vector::<f32, 4>::broadcast_i64(3).to_array(),
            [3.0, 3.0, 3.0, 3.0]
        );
        let from_elem: V = 5.into();
        assert_eq!(from_elem, V::broadcast(5));
    }

    #[test]
    fn add_index_strides() {
        let v = V::broadcast(100).add_index(3).unwrap();
        assert_eq!(v.to_array(), [100, 103, 106, 109]);
    }

    #[test]
    fn blend_selects_mask_true_lanes() {
        let a = V::broadcast(0);
        let b = V::broadcast(9);
        let m = Mask::from_array([true, false, false, true]);
        assert_eq!(a.blend(b, m).to_array(), [9, 0, 0, 9]);
        assert_eq!(a.blend(5, m).to_array(), [5, 0, 0, 5]);
    }

    #[test]
    fn slice_and_unslice_window() {
        let v = V::from_array([1, 2, 3, 4]);
        assert_eq!(v.slice(1).unwrap().to_array(), [2, 3, 4, 0]);
        assert_eq!(v.slice(4).unwrap(), V::ZERO);
        assert!(v.slice(5).is_err());

        let w = V::from_array([5, 6, 7, 8]);
        assert_eq!(v.slice_with(3, w).unwrap().to_array(), [4, 5, 6, 7]);

        assert_eq!(v.unslice(1).unwrap().to_array(), [0, 1, 2, 3]);
        // Front half keeps the background below the origin.
        assert_eq!(v.unslice_with(1, w, 0).unwrap().to_array(), [5, 1, 2, 3]);
        // Back half holds what spilled past lane N.
        assert_eq!(v.unslice_with(1, w, 1).unwrap().to_array(), [4, 6, 7, 8]);
        assert!(v.unslice_with(1, w, 2).is_err());
        assert!(v.unslice(5).is_err());

        let m = Mask::from_array([true, false, false, true]);
        assert_eq!(
            v.unslice_masked(1, w, 0, m).unwrap().to_array(),
            [5, 1, 7, 8]
        );
    }

    #[test]
    fn slice_of_concatenation_round_trips() {
        let v = V::from_array([1, 2, 3, 4]);
        let w = V::from_array([5, 6, 7, 8]);
        for origin in 0..=4 {
            let front = v.slice_with(origin, w).unwrap();
            let restored = front
                .unslice_with(origin, V::ZERO, 0)
                .unwrap()
                .blend(v, Mask::from_fn(|i| i < origin));
            assert_eq!(restored, v, "origin {origin}");
        }
    }

    #[test]
    fn rearrange_zeroes_exceptional_lanes() {
        let v = V::from_array([10, 20, 30, 40]);
        let s = Shuffle::from_array([3, 0, -1, 7]);
        assert_eq!(v.rearrange(s).to_array(), [40, 10, 0, 0]);

        let m = Mask::from_array([false, true, true, true]);
        assert_eq!(v.rearrange_masked(s, m).to_array(), [0, 10, 0, 0]);

        let w = V::from_array([50, 60, 70, 80]);
        // -1 wraps to the second vector's lane 3, 7 to its lane 3 as well.
        assert_eq!(v.rearrange_with(s, w).to_array(), [40, 10, 80, 80]);
    }

    #[test]
    fn select_from_addresses_the_table() {
        let idx = V::from_array([2, 2, 5, 0]);
        let table = V::from_array([10, 20, 30, 40]);
        let other = V::from_array([50, 60, 70, 80]);
        assert_eq!(idx.select_from(table).to_array(), [30, 30, 0, 10]);
        assert_eq!(idx.select_from_two(table, other).to_array(), [30, 30, 60, 10]);
        let m = Mask::from_array([true, true, false, false]);
        assert_eq!(idx.select_from_masked(table, m).to_array(), [30, 30, 0, 0]);
    }

    #[test]
    fn compress_then_expand_restores_selected_lanes() {
        let v = V::from_array([1, 2, 3, 4]);
        let m = Mask::from_array([false, true, false, true]);
        let packed = v.compress(m);
        assert_eq!(packed.to_array(), [2, 4, 0, 0]);
        let spread = packed.expand(m);
        assert_eq!(spread.to_array(), [0, 2, 0, 4]);
        assert_eq!(spread, v.blend(V::ZERO, m.not()));
    }

    #[test]
    fn masked_lanewise_keeps_unselected_lanes() {
        let v = V::from_array([1, 2, 3, 4]);
        let m = Mask::from_array([true, false, true, false]);
        let out = v.lanewise_masked(BinaryOp::Add, 10, m).unwrap();
        assert_eq!(out.to_array(), [11, 2, 13, 4]);

        let out = v.lanewise_unary_masked(UnaryOp::Neg, m).unwrap();
        assert_eq!(out.to_array(), [-1, 2, -3, 4]);

        let out = v
            .lanewise_shift_masked(ShiftOp::Shl, 1, m)
            .unwrap();
        assert_eq!(out.to_array(), [2, 2, 6, 4]);
    }

    #[test]
    fn masked_division_skips_faulting_lanes() {
        let v = V::from_array([8, 9, 10, 11]);
        let d = V::from_array([2, 0, 5, 0]);
        let m = Mask::from_array([true, false, true, false]);
        let out = v.lanewise_masked(BinaryOp::Div, d, m).unwrap();
        assert_eq!(out.to_array(), [4, 9, 2, 11]);
        // Unmasked, the zero divisor faults.
        assert!(v.lanewise(BinaryOp::Div, d).is_err());
    }

    #[test]
    fn compare_and_test_masks() {
        let v = V::from_array([1, 5, 3, 9]);
        assert_eq!(
            v.compare(CompareOp::Gt, 3).unwrap().to_array(),
            [false, true, false, true]
        );
        let m = Mask::from_array([false, true, true, true]);
        assert_eq!(
            v.compare_masked(CompareOp::Gt, 0, m).unwrap().to_array(),
            [false, true, true, true]
        );
        assert_eq!(
            V::from_array([0, -1, 2, -3]).test(TestOp::IsNegative).unwrap().to_array(),
            [false, true, false, true]
        );
        assert!(v.test(TestOp::IsNan).is_err());
    }

    #[test]
    fn reductions_fold_in_lane_order() {
        let v = V::from_array([1, 2, 3, 4]);
        assert_eq!(v.reduce_lanes(ReduceOp::Add).unwrap(), 10);
        assert_eq!(v.reduce_lanes(ReduceOp::Mul).unwrap(), 24);
        assert_eq!(v.reduce_lanes(ReduceOp::Min).unwrap(), 1);
        assert_eq!(v.reduce_lanes(ReduceOp::Max).unwrap(), 4);
        assert_eq!(v.reduce_lanes_to_i64(ReduceOp::Add).unwrap(), 10);

        let m = Mask::from_array([false, true, true, false]);
        assert_eq!(v.reduce_lanes_masked(ReduceOp::Add, m).unwrap(), 5);
        assert_eq!(v.reduce_lanes_masked(ReduceOp::Mul, m).unwrap(), 6);
        assert_eq!(
            v.reduce_lanes_masked(ReduceOp::Min, Mask::ALL_FALSE).unwrap(),
            i32::MAX
        );
        assert_eq!(
            V::from_array([0, 0, 7, 9]).reduce_lanes(ReduceOp::FirstNonzero).unwrap(),
            7
        );
    }

    #[test]
    fn negative_zero_survives_a_float_sum() {
        let v = Vector::<f64, 2>::broadcast(-0.0);
        let total = v.reduce_lanes(ReduceOp::Add).unwrap();
        assert!(total == 0.0 && total.is_sign_negative());
    }

    #[test]
    fn inapplicable_ops_error_before_any_lane_runs() {
        let v = Vector::<f32, 4>::broadcast(1.0);
        assert!(v.not().is_err());
        assert!(v.lanewise(BinaryOp::Xor, 2.0).is_err());
        assert!(v.lanewise_shift(ShiftOp::Shl, 1).is_err());
        // Even with an all-false mask the tag itself is rejected.
        assert!(v
            .lanewise_masked(BinaryOp::And, 0.0, Mask::ALL_FALSE)
            .is_err());
        let i = V::broadcast(1);
        assert!(i.lanewise_unary(UnaryOp::Sqrt).is_err());
        assert!(i.lanewise_ternary(TernaryOp::FusedMultiplyAdd, i, i).is_err());
    }

    #[test]
    fn to_shuffle_triggers_the_index_encoding() {
        let v = V::from_array([0, 3, 4, -1]);
        let s = v.to_shuffle();
        let mut raw = [0i64; 4];
        s.into_array(&mut raw, 0).unwrap();
        assert_eq!(raw, [0, 3, -4, -1]);
    }
}
