// VLANE - vlane-accel
// Module: Kernel Vocabulary
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Kernel vocabulary shared between acceleration providers and callers.
//!
//! A kernel is one lane-local operation over a 16-byte block holding
//! little-endian lanes of a single element kind. Providers answer each
//! request with `Some(block)` or decline with `None`; declining is always
//! legal, claiming obliges the provider to match the caller's scalar
//! semantics bit for bit.

/// Element kind of the lanes packed into a 16-byte block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElemKind {
    /// 8-bit signed integer lanes (16 per block)
    I8,
    /// 16-bit signed integer lanes (8 per block)
    I16,
    /// 32-bit signed integer lanes (4 per block)
    I32,
    /// 64-bit signed integer lanes (2 per block)
    I64,
    /// 32-bit IEEE-754 lanes (4 per block)
    F32,
    /// 64-bit IEEE-754 lanes (2 per block)
    F64,
}

impl ElemKind {
    /// Width of one lane in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::I8 => 8,
            Self::I16 => 16,
            Self::I32 | Self::F32 => 32,
            Self::I64 | Self::F64 => 64,
        }
    }

    /// Width of one lane in bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Lanes per 16-byte block.
    #[must_use]
    pub const fn lanes_per_block(self) -> usize {
        16 / self.bytes()
    }

    /// Whether the lanes are IEEE-754 floats.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

/// One-operand kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryKernel {
    /// Wrapping negation (integers) or IEEE sign flip (floats)
    Neg,
    /// Wrapping absolute value (integers) or IEEE sign clear (floats)
    Abs,
    /// Bitwise complement
    Not,
    /// IEEE square root
    Sqrt,
}

/// Two-operand kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKernel {
    /// Wrapping addition (integers) or IEEE addition (floats)
    Add,
    /// Wrapping subtraction or IEEE subtraction
    Sub,
    /// Wrapping multiplication or IEEE multiplication
    Mul,
    /// IEEE division (integer division is never a kernel: it can fault)
    Div,
    /// Signed minimum
    MinSigned,
    /// Signed maximum
    MaxSigned,
    /// Unsigned minimum
    MinUnsigned,
    /// Unsigned maximum
    MaxUnsigned,
    /// Signed saturating addition
    SatAddSigned,
    /// Signed saturating subtraction
    SatSubSigned,
    /// Unsigned saturating addition
    SatAddUnsigned,
    /// Unsigned saturating subtraction
    SatSubUnsigned,
    /// Bitwise and
    And,
    /// Bitwise and-not (`a & !b`)
    AndNot,
    /// Bitwise or
    Or,
    /// Bitwise xor
    Xor,
}

/// Uniform-amount shift kernels. The caller reduces the amount modulo the
/// lane width before asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftKernel {
    /// Shift left
    Shl,
    /// Logical (zero-filling) shift right
    LogicalShr,
    /// Arithmetic (sign-filling) shift right
    ArithmeticShr,
}

/// Comparison kernels. A claimed comparison fills each result lane with
/// all-ones for true and all-zeros for false. Float comparisons are the
/// ordered IEEE predicates except `Ne`, which is true on unordered inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareKernel {
    /// Equal
    Eq,
    /// Not equal
    Ne,
    /// Signed/ordered less-than
    Lt,
    /// Signed/ordered less-or-equal
    Le,
    /// Signed/ordered greater-than
    Gt,
    /// Signed/ordered greater-or-equal
    Ge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_geometry_is_consistent() {
        for kind in [
            ElemKind::I8,
            ElemKind::I16,
            ElemKind::I32,
            ElemKind::I64,
            ElemKind::F32,
            ElemKind::F64,
        ] {
            assert_eq!(kind.bytes() * kind.lanes_per_block(), 16);
            assert_eq!(kind.bytes() as u32 * 8, kind.bits());
        }
        assert!(ElemKind::F32.is_float());
        assert!(!ElemKind::I64.is_float());
    }
}
