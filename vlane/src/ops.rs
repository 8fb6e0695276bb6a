// VLANE - vlane
// Module: Operation Tags
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Operation tags for lane-wise arithmetic, comparison, testing, reduction
//! and conversion.
//!
//! A tag names a per-lane semantic; the element class (integer or float)
//! determines whether the tag applies. Requesting an inapplicable tag is an
//! unsupported-operation error, reported uniformly by every entry point
//! through [`applicable_to`](UnaryOp::applicable_to)-style predicates and
//! the per-lane implementations.

use vlane_accel::ElemKind;

/// One-operand lane operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Wrapping negation (integers) or IEEE sign flip (floats)
    Neg,
    /// Wrapping absolute value (integers) or IEEE sign clear (floats)
    Abs,
    /// Bitwise complement (integers)
    Not,
    /// Zero to zero, everything else to all-ones (integers)
    Zomo,
    /// Count of set bits (integers)
    BitCount,
    /// Count of leading zero bits (integers)
    LeadingZeros,
    /// Count of trailing zero bits (integers)
    TrailingZeros,
    /// Bit order reversal (integers)
    ReverseBits,
    /// Byte order reversal (integers)
    ReverseBytes,
    /// IEEE square root (floats)
    Sqrt,
}

impl UnaryOp {
    /// Whether the tag is defined for the element class.
    #[must_use]
    pub const fn applicable_to(self, kind: ElemKind) -> bool {
        match self {
            Self::Neg | Self::Abs => true,
            Self::Not
            | Self::Zomo
            | Self::BitCount
            | Self::LeadingZeros
            | Self::TrailingZeros
            | Self::ReverseBits
            | Self::ReverseBytes => !kind.is_float(),
            Self::Sqrt => kind.is_float(),
        }
    }
}

/// Two-operand lane operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    /// Wrapping addition (integers) or IEEE addition (floats)
    Add,
    /// Wrapping subtraction or IEEE subtraction
    Sub,
    /// Wrapping multiplication or IEEE multiplication
    Mul,
    /// Signed division; faults on zero divisor and MIN / -1 (integers),
    /// IEEE division (floats)
    Div,
    /// Signed remainder; faults on zero divisor, MIN rem -1 is 0
    /// (integers), IEEE truncated remainder (floats)
    Rem,
    /// Unsigned division; zero divisor yields 0 (integers)
    UnsignedDiv,
    /// Unsigned remainder; zero divisor yields the dividend (integers)
    UnsignedRem,
    /// Minimum; floats order NaN first and -0.0 below +0.0
    Min,
    /// Maximum; floats order NaN first and +0.0 above -0.0
    Max,
    /// Unsigned-view minimum (integers)
    UnsignedMin,
    /// Unsigned-view maximum (integers)
    UnsignedMax,
    /// Saturating signed addition (integers)
    SaturatingAdd,
    /// Saturating signed subtraction (integers)
    SaturatingSub,
    /// Saturating unsigned-view addition (integers)
    SaturatingUnsignedAdd,
    /// Saturating unsigned-view subtraction (integers)
    SaturatingUnsignedSub,

    // Bitwise
    /// Bitwise and (integers)
    And,
    /// Bitwise and-not, `a & !b` (integers)
    AndNot,
    /// Bitwise or (integers)
    Or,
    /// Bitwise xor (integers)
    Xor,

    /// First operand unless it is zero, else the second; float zeroness is
    /// judged on the bit pattern, so -0.0 counts as nonzero
    FirstNonzero,

    // Shifts by per-lane counts, each count masked to the element width
    /// Shift left (integers)
    Shl,
    /// Logical shift right (integers)
    LogicalShr,
    /// Arithmetic shift right (integers)
    ArithmeticShr,
    /// Rotate left (integers)
    RotateLeft,
    /// Rotate right (integers)
    RotateRight,

    /// Magnitude of the first operand with the sign of the second (floats)
    CopySign,
}

impl BinaryOp {
    /// Whether the tag is defined for the element class.
    #[must_use]
    pub const fn applicable_to(self, kind: ElemKind) -> bool {
        match self {
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Rem
            | Self::Min
            | Self::Max
            | Self::FirstNonzero => true,
            Self::UnsignedDiv
            | Self::UnsignedRem
            | Self::UnsignedMin
            | Self::UnsignedMax
            | Self::SaturatingAdd
            | Self::SaturatingSub
            | Self::SaturatingUnsignedAdd
            | Self::SaturatingUnsignedSub
            | Self::And
            | Self::AndNot
            | Self::Or
            | Self::Xor
            | Self::Shl
            | Self::LogicalShr
            | Self::ArithmeticShr
            | Self::RotateLeft
            | Self::RotateRight => !kind.is_float(),
            Self::CopySign => kind.is_float(),
        }
    }

    /// Whether a lane of this op can fault on data (division family).
    #[must_use]
    pub const fn can_fault(self, kind: ElemKind) -> bool {
        matches!(self, Self::Div | Self::Rem) && !kind.is_float()
    }
}

/// Shifts by one scalar amount, reduced modulo the element width before
/// any lane is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftOp {
    /// Shift left
    Shl,
    /// Logical shift right
    LogicalShr,
    /// Arithmetic shift right
    ArithmeticShr,
    /// Rotate left
    RotateLeft,
    /// Rotate right
    RotateRight,
}

impl ShiftOp {
    /// Whether the tag is defined for the element class.
    #[must_use]
    pub const fn applicable_to(self, kind: ElemKind) -> bool {
        !kind.is_float()
    }

    /// The per-lane binary op carrying the same shift semantics.
    #[must_use]
    pub const fn as_binary(self) -> BinaryOp {
        match self {
            Self::Shl => BinaryOp::Shl,
            Self::LogicalShr => BinaryOp::LogicalShr,
            Self::ArithmeticShr => BinaryOp::ArithmeticShr,
            Self::RotateLeft => BinaryOp::RotateLeft,
            Self::RotateRight => BinaryOp::RotateRight,
        }
    }
}

/// Three-operand lane operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TernaryOp {
    /// Single-rounding `a * b + c` (floats)
    FusedMultiplyAdd,
    /// Bit i of the result is the second operand's bit where the third
    /// operand's bit is set, else the first's (integers)
    BitwiseBlend,
}

impl TernaryOp {
    /// Whether the tag is defined for the element class.
    #[must_use]
    pub const fn applicable_to(self, kind: ElemKind) -> bool {
        match self {
            Self::FusedMultiplyAdd => kind.is_float(),
            Self::BitwiseBlend => !kind.is_float(),
        }
    }
}

/// Lane comparison predicates. On floats the signed forms are the IEEE
/// ordered predicates: NaN compares false under everything except `Ne`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// Equal
    Eq,
    /// Not equal (true on unordered float input)
    Ne,
    /// Less-than
    Lt,
    /// Less-or-equal
    Le,
    /// Greater-than
    Gt,
    /// Greater-or-equal
    Ge,
    /// Unsigned-view less-than (integers)
    UnsignedLt,
    /// Unsigned-view less-or-equal (integers)
    UnsignedLe,
    /// Unsigned-view greater-than (integers)
    UnsignedGt,
    /// Unsigned-view greater-or-equal (integers)
    UnsignedGe,
}

impl CompareOp {
    /// Whether the tag is defined for the element class.
    #[must_use]
    pub const fn applicable_to(self, kind: ElemKind) -> bool {
        match self {
            Self::Eq | Self::Ne | Self::Lt | Self::Le | Self::Gt | Self::Ge => true,
            Self::UnsignedLt | Self::UnsignedLe | Self::UnsignedGt | Self::UnsignedGe => {
                !kind.is_float()
            }
        }
    }
}

/// Per-lane predicates over a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestOp {
    /// Lane equals the default value zero (numeric equality; -0.0 is
    /// default)
    IsDefault,
    /// Lane is strictly negative (-0.0 and NaN are not)
    IsNegative,
    /// Lane is a finite float
    IsFinite,
    /// Lane is a float NaN
    IsNan,
    /// Lane is a float infinity
    IsInfinite,
}

impl TestOp {
    /// Whether the tag is defined for the element class.
    #[must_use]
    pub const fn applicable_to(self, kind: ElemKind) -> bool {
        match self {
            Self::IsDefault | Self::IsNegative => true,
            Self::IsFinite | Self::IsNan | Self::IsInfinite => kind.is_float(),
        }
    }
}

/// Associative fold operations over all lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    /// Sum of lanes, identity 0
    Add,
    /// Product of lanes, identity 1
    Mul,
    /// Least lane, identity is the greatest element value
    Min,
    /// Greatest lane, identity is the least element value
    Max,
    /// Bitwise and of lanes, identity all-ones (integers)
    And,
    /// Bitwise or of lanes, identity 0 (integers)
    Or,
    /// Bitwise xor of lanes, identity 0 (integers)
    Xor,
    /// First lane with a nonzero bit pattern, identity 0
    FirstNonzero,
}

impl ReduceOp {
    /// Whether the tag is defined for the element class.
    #[must_use]
    pub const fn applicable_to(self, kind: ElemKind) -> bool {
        match self {
            Self::Add | Self::Mul | Self::Min | Self::Max | Self::FirstNonzero => true,
            Self::And | Self::Or | Self::Xor => !kind.is_float(),
        }
    }

    /// The per-lane binary op used for each fold step.
    #[must_use]
    pub const fn as_binary(self) -> BinaryOp {
        match self {
            Self::Add => BinaryOp::Add,
            Self::Mul => BinaryOp::Mul,
            Self::Min => BinaryOp::Min,
            Self::Max => BinaryOp::Max,
            Self::And => BinaryOp::And,
            Self::Or => BinaryOp::Or,
            Self::Xor => BinaryOp::Xor,
            Self::FirstNonzero => BinaryOp::FirstNonzero,
        }
    }
}

/// Value conversion kinds for `convert`/`convert_shape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Standard cast: sign-extending/truncating between integers,
    /// round-to-nearest into floats, saturating with NaN to 0 out of
    /// floats
    Cast,
    /// Integer source reinterpreted as unsigned before the cast; not
    /// applicable to float sources
    UnsignedCast,
}

impl Conversion {
    /// Whether the conversion accepts the source element class.
    #[must_use]
    pub const fn applicable_to_source(self, kind: ElemKind) -> bool {
        match self {
            Self::Cast => true,
            Self::UnsignedCast => !kind.is_float(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_tags_reject_floats() {
        assert!(UnaryOp::Not.applicable_to(ElemKind::I8));
        assert!(!UnaryOp::Not.applicable_to(ElemKind::F32));
        assert!(BinaryOp::Shl.applicable_to(ElemKind::I64));
        assert!(!BinaryOp::Shl.applicable_to(ElemKind::F64));
        assert!(!CompareOp::UnsignedLt.applicable_to(ElemKind::F32));
        assert!(!ReduceOp::Xor.applicable_to(ElemKind::F64));
        assert!(TernaryOp::BitwiseBlend.applicable_to(ElemKind::I32));
        assert!(!TernaryOp::BitwiseBlend.applicable_to(ElemKind::F32));
    }

    #[test]
    fn float_tags_reject_integers() {
        assert!(UnaryOp::Sqrt.applicable_to(ElemKind::F64));
        assert!(!UnaryOp::Sqrt.applicable_to(ElemKind::I16));
        assert!(BinaryOp::CopySign.applicable_to(ElemKind::F32));
        assert!(!BinaryOp::CopySign.applicable_to(ElemKind::I32));
        assert!(TestOp::IsNan.applicable_to(ElemKind::F32));
        assert!(!TestOp::IsNan.applicable_to(ElemKind::I8));
        assert!(TernaryOp::FusedMultiplyAdd.applicable_to(ElemKind::F64));
        assert!(!TernaryOp::FusedMultiplyAdd.applicable_to(ElemKind::I64));
    }

    #[test]
    fn shared_tags_apply_everywhere() {
        for kind in [ElemKind::I8, ElemKind::I64, ElemKind::F32, ElemKind::F64] {
            assert!(UnaryOp::Neg.applicable_to(kind));
            assert!(BinaryOp::Add.applicable_to(kind));
            assert!(BinaryOp::Min.applicable_to(kind));
            assert!(CompareOp::Eq.applicable_to(kind));
            assert!(TestOp::IsDefault.applicable_to(kind));
            assert!(ReduceOp::Add.applicable_to(kind));
        }
    }

    #[test]
    fn faultable_ops_are_signed_integer_division() {
        assert!(BinaryOp::Div.can_fault(ElemKind::I32));
        assert!(BinaryOp::Rem.can_fault(ElemKind::I8));
        assert!(!BinaryOp::Div.can_fault(ElemKind::F32));
        assert!(!BinaryOp::UnsignedDiv.can_fault(ElemKind::I32));
        assert!(!BinaryOp::Add.can_fault(ElemKind::I64));
    }

    #[test]
    fn unsigned_cast_rejects_float_sources() {
        assert!(Conversion::UnsignedCast.applicable_to_source(ElemKind::I8));
        assert!(!Conversion::UnsignedCast.applicable_to_source(ElemKind::F64));
        assert!(Conversion::Cast.applicable_to_source(ElemKind::F64));
    }
}
