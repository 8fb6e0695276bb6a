// VLANE - vlane
// Module: Kernel Dispatch
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Glue between lane-wise operations and acceleration kernels.
//!
//! Maps op tags onto the block-kernel vocabulary and converts lane arrays
//! to and from the little-endian 16-byte blocks providers operate on. Tags
//! with no kernel counterpart (per-lane shift counts, rotations, anything
//! that can fault) map to `None` and always take the per-lane path.

use vlane_accel::{BinaryKernel, CompareKernel, ShiftKernel, UnaryKernel};

use crate::lane::Lane;
use crate::ops::{BinaryOp, CompareOp, ShiftOp, UnaryOp};

/// Kernel block width in bytes.
pub(crate) const BLOCK_BYTES: usize = 16;

/// Whether a species' byte image divides evenly into kernel blocks.
pub(crate) const fn species_accelerable<E: Lane, const N: usize>() -> bool {
    (E::BYTES * N) % BLOCK_BYTES == 0
}

pub(crate) const fn unary_kernel(op: UnaryOp) -> Option<UnaryKernel> {
    match op {
        UnaryOp::Neg => Some(UnaryKernel::Neg),
        UnaryOp::Abs => Some(UnaryKernel::Abs),
        UnaryOp::Not => Some(UnaryKernel::Not),
        UnaryOp::Sqrt => Some(UnaryKernel::Sqrt),
        UnaryOp::Zomo
        | UnaryOp::BitCount
        | UnaryOp::LeadingZeros
        | UnaryOp::TrailingZeros
        | UnaryOp::ReverseBits
        | UnaryOp::ReverseBytes => None,
    }
}

pub(crate) const fn binary_kernel(op: BinaryOp) -> Option<BinaryKernel> {
    match op {
        BinaryOp::Add => Some(BinaryKernel::Add),
        BinaryOp::Sub => Some(BinaryKernel::Sub),
        BinaryOp::Mul => Some(BinaryKernel::Mul),
        BinaryOp::Div => Some(BinaryKernel::Div),
        BinaryOp::Min => Some(BinaryKernel::MinSigned),
        BinaryOp::Max => Some(BinaryKernel::MaxSigned),
        BinaryOp::UnsignedMin => Some(BinaryKernel::MinUnsigned),
        BinaryOp::UnsignedMax => Some(BinaryKernel::MaxUnsigned),
        BinaryOp::SaturatingAdd => Some(BinaryKernel::SatAddSigned),
        BinaryOp::SaturatingSub => Some(BinaryKernel::SatSubSigned),
        BinaryOp::SaturatingUnsignedAdd => Some(BinaryKernel::SatAddUnsigned),
        BinaryOp::SaturatingUnsignedSub => Some(BinaryKernel::SatSubUnsigned),
        BinaryOp::And => Some(BinaryKernel::And),
        BinaryOp::AndNot => Some(BinaryKernel::AndNot),
        BinaryOp::Or => Some(BinaryKernel::Or),
        BinaryOp::Xor => Some(BinaryKernel::Xor),
        // Per-lane counts, remainders and the rest have no block kernel.
        BinaryOp::Rem
        | BinaryOp::UnsignedDiv
        | BinaryOp::UnsignedRem
        | BinaryOp::FirstNonzero
        | BinaryOp::Shl
        | BinaryOp::LogicalShr
        | BinaryOp::ArithmeticShr
        | BinaryOp::RotateLeft
        | BinaryOp::RotateRight
        | BinaryOp::CopySign => None,
    }
}

pub(crate) const fn shift_kernel(op: ShiftOp) -> Option<ShiftKernel> {
    match op {
        ShiftOp::Shl => Some(ShiftKernel::Shl),
        ShiftOp::LogicalShr => Some(ShiftKernel::LogicalShr),
        ShiftOp::ArithmeticShr => Some(ShiftKernel::ArithmeticShr),
        ShiftOp::RotateLeft | ShiftOp::RotateRight => None,
    }
}

pub(crate) const fn compare_kernel(op: CompareOp) -> Option<CompareKernel> {
    match op {
        CompareOp::Eq => Some(CompareKernel::Eq),
        CompareOp::Ne => Some(CompareKernel::Ne),
        CompareOp::Lt => Some(CompareKernel::Lt),
        CompareOp::Le => Some(CompareKernel::Le),
        CompareOp::Gt => Some(CompareKernel::Gt),
        CompareOp::Ge => Some(CompareKernel::Ge),
        CompareOp::UnsignedLt
        | CompareOp::UnsignedLe
        | CompareOp::UnsignedGt
        | CompareOp::UnsignedGe => None,
    }
}

/// Pack one block's worth of lanes into their little-endian byte image.
pub(crate) fn pack_block<E: Lane>(lanes: &[E]) -> [u8; BLOCK_BYTES] {
    let mut block = [0u8; BLOCK_BYTES];
    for (i, lane) in lanes.iter().enumerate() {
        lane.write_le(&mut block[i * E::BYTES..]);
    }
    block
}

/// Unpack a block byte image back into lanes.
pub(crate) fn unpack_block<E: Lane>(block: &[u8; BLOCK_BYTES], out: &mut [E]) {
    for (i, lane) in out.iter_mut().enumerate() {
        *lane = E::read_le(&block[i * E::BYTES..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_block_multiples_are_accelerable() {
        assert!(species_accelerable::<i8, 16>());
        assert!(species_accelerable::<i32, 8>());
        assert!(species_accelerable::<f64, 2>());
        assert!(!species_accelerable::<i8, 8>());
        assert!(!species_accelerable::<i32, 2>());
        assert!(!species_accelerable::<i16, 12>());
    }

    #[test]
    fn faultable_and_per_lane_tags_have_no_kernel() {
        assert!(binary_kernel(BinaryOp::Rem).is_none());
        assert!(binary_kernel(BinaryOp::UnsignedDiv).is_none());
        assert!(binary_kernel(BinaryOp::Shl).is_none());
        assert!(binary_kernel(BinaryOp::RotateLeft).is_none());
        assert!(shift_kernel(ShiftOp::RotateRight).is_none());
        assert!(compare_kernel(CompareOp::UnsignedLt).is_none());
        assert!(unary_kernel(UnaryOp::BitCount).is_none());
    }

    #[test]
    fn block_round_trip_is_little_endian() {
        let lanes = [0x0102i16, 0x0304, -1, 0, 5, 6, 7, 8];
        let block = pack_block(&lanes);
        assert_eq!(block[0], 0x02);
        assert_eq!(block[1], 0x01);
        assert_eq!(block[4], 0xFF);
        assert_eq!(block[5], 0xFF);

        let mut out = [0i16; 8];
        unpack_block(&block, &mut out);
        assert_eq!(out, lanes);
    }
}
