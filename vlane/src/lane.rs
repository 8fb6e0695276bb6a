// VLANE - vlane
// Module: Lane Elements
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Element types and their per-lane semantics.
//!
//! [`Lane`] is the scalar contract every vector operation is defined
//! against: one implementation per element type, shared by the per-lane
//! fallback path and by the equivalence tests that pin accelerated kernels
//! to it. The trait is sealed; the six element types here are the whole
//! universe.
//!
//! Integer arithmetic wraps unless an op says otherwise. The only lane
//! computations that fault are signed division and remainder; everything
//! else is total, with policy results (shift masking, unsigned division by
//! zero) documented on the op tags.

use vlane_accel::ElemKind;
use vlane_error::{helpers, Result};

use crate::ops::{BinaryOp, CompareOp, ReduceOp, TernaryOp, TestOp, UnaryOp};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Integer type used to carry shuffle indices for one element width.
pub trait IndexLane:
    sealed::Sealed + Copy + Clone + core::fmt::Debug + PartialEq + Eq + Send + Sync + 'static
{
    /// The zero index.
    const ZERO: Self;
    /// Largest lane count whose partially wrapped range `[-N, N)` still
    /// fits this type.
    const MAX_LANES: usize;

    /// Widen to `i64` without changing the value.
    fn to_i64(self) -> i64;
    /// Narrow from `i64`, truncating high bits.
    fn from_i64(value: i64) -> Self;
}

macro_rules! impl_index_lane {
    ($ty:ty, $max_lanes:expr) => {
        impl IndexLane for $ty {
            const ZERO: Self = 0;
            const MAX_LANES: usize = $max_lanes;

            #[inline]
            fn to_i64(self) -> i64 {
                i64::from(self)
            }

            #[inline]
            fn from_i64(value: i64) -> Self {
                value as $ty
            }
        }
    };
}

impl_index_lane!(i8, 128);
impl_index_lane!(i16, 32_768);
impl_index_lane!(i32, 1 << 31);

impl IndexLane for i64 {
    const ZERO: Self = 0;
    const MAX_LANES: usize = 1 << 31;

    #[inline]
    fn to_i64(self) -> i64 {
        self
    }

    #[inline]
    fn from_i64(value: i64) -> Self {
        value
    }
}

/// A scalar element of a vector lane.
///
/// Every lane-wise vector operation is a loop over the methods here, so
/// this trait is the single authority on arithmetic semantics. Accelerated
/// kernels are only ever admitted when they reproduce these results bit for
/// bit.
pub trait Lane:
    sealed::Sealed + Copy + Clone + core::fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// Index carrier of the same width: `i32` for `f32`, `i64` for `f64`,
    /// the type itself for integers.
    type Index: IndexLane;

    /// Element class seen by acceleration providers.
    const KIND: ElemKind;
    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;
    /// The default value.
    const ZERO: Self;
    /// The unit value, used when widening booleans.
    const ONE: Self;

    /// Apply a one-operand op.
    fn unary(self, op: UnaryOp) -> Result<Self>;
    /// Apply a two-operand op.
    fn binary(self, op: BinaryOp, rhs: Self) -> Result<Self>;
    /// Apply a three-operand op.
    fn ternary(self, op: TernaryOp, b: Self, c: Self) -> Result<Self>;
    /// Evaluate a comparison predicate.
    fn compare(self, op: CompareOp, rhs: Self) -> Result<bool>;
    /// Evaluate a one-operand predicate.
    fn test(self, op: TestOp) -> Result<bool>;
    /// Identity element substituted for masked-out lanes of a reduction.
    fn reduce_identity(op: ReduceOp) -> Result<Self>;

    /// Whether the bit pattern is all zeros. Distinct from numeric
    /// equality with zero: `-0.0` is nonzero here.
    fn is_zero(self) -> bool;

    /// Widen to `i64` (sign extension for integers, truncation toward
    /// zero with saturation for floats).
    fn to_i64(self) -> i64;
    /// Widen the unsigned view to `u64` (zero extension).
    fn to_u64(self) -> u64;
    /// Widen to `f64`.
    fn to_f64(self) -> f64;
    /// Narrow from `i64`, truncating integer high bits or rounding into a
    /// float.
    fn from_i64(value: i64) -> Self;
    /// Narrow from `u64` through the unsigned view.
    fn from_u64(value: u64) -> Self;
    /// Narrow from `f64`; integer targets saturate and map NaN to zero.
    fn from_f64(value: f64) -> Self;

    /// Read one element from the front of `bytes`, little-endian.
    /// Callers validate the range first.
    fn read_le(bytes: &[u8]) -> Self;
    /// Read one element from the front of `bytes`, big-endian.
    fn read_be(bytes: &[u8]) -> Self;
    /// Write the little-endian image to the front of `out`.
    fn write_le(self, out: &mut [u8]);
    /// Write the big-endian image to the front of `out`.
    fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_int_lane {
    ($ty:ty, $unsigned:ty, $index:ty, $kind:expr) => {
        impl Lane for $ty {
            type Index = $index;

            const KIND: ElemKind = $kind;
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = core::mem::size_of::<$ty>();
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn unary(self, op: UnaryOp) -> Result<Self> {
                match op {
                    UnaryOp::Neg => Ok(self.wrapping_neg()),
                    UnaryOp::Abs => Ok(self.wrapping_abs()),
                    UnaryOp::Not => Ok(!self),
                    UnaryOp::Zomo => Ok(if self == 0 { 0 } else { -1 }),
                    UnaryOp::BitCount => Ok(self.count_ones() as $ty),
                    UnaryOp::LeadingZeros => Ok(self.leading_zeros() as $ty),
                    UnaryOp::TrailingZeros => Ok(self.trailing_zeros() as $ty),
                    UnaryOp::ReverseBits => Ok(self.reverse_bits()),
                    UnaryOp::ReverseBytes => Ok(self.swap_bytes()),
                    UnaryOp::Sqrt => Err(helpers::op_not_applicable_error(
                        "square root on integer lanes",
                    )),
                }
            }

            fn binary(self, op: BinaryOp, rhs: Self) -> Result<Self> {
                match op {
                    BinaryOp::Add => Ok(self.wrapping_add(rhs)),
                    BinaryOp::Sub => Ok(self.wrapping_sub(rhs)),
                    BinaryOp::Mul => Ok(self.wrapping_mul(rhs)),
                    BinaryOp::Div => {
                        if rhs == 0 {
                            Err(helpers::division_by_zero_error("signed division by zero"))
                        } else if self == <$ty>::MIN && rhs == -1 {
                            Err(helpers::division_overflow_error(
                                "signed division overflow",
                            ))
                        } else {
                            Ok(self / rhs)
                        }
                    }
                    BinaryOp::Rem => {
                        if rhs == 0 {
                            Err(helpers::division_by_zero_error("signed remainder by zero"))
                        } else {
                            // MIN rem -1 is 0, not a fault.
                            Ok(self.wrapping_rem(rhs))
                        }
                    }
                    BinaryOp::UnsignedDiv => {
                        if rhs == 0 {
                            Ok(0)
                        } else {
                            Ok(((self as $unsigned) / (rhs as $unsigned)) as $ty)
                        }
                    }
                    BinaryOp::UnsignedRem => {
                        if rhs == 0 {
                            Ok(self)
                        } else {
                            Ok(((self as $unsigned) % (rhs as $unsigned)) as $ty)
                        }
                    }
                    BinaryOp::Min => Ok(self.min(rhs)),
                    BinaryOp::Max => Ok(self.max(rhs)),
                    BinaryOp::UnsignedMin => {
                        Ok((self as $unsigned).min(rhs as $unsigned) as $ty)
                    }
                    BinaryOp::UnsignedMax => {
                        Ok((self as $unsigned).max(rhs as $unsigned) as $ty)
                    }
                    BinaryOp::SaturatingAdd => Ok(self.saturating_add(rhs)),
                    BinaryOp::SaturatingSub => Ok(self.saturating_sub(rhs)),
                    BinaryOp::SaturatingUnsignedAdd => {
                        Ok((self as $unsigned).saturating_add(rhs as $unsigned) as $ty)
                    }
                    BinaryOp::SaturatingUnsignedSub => {
                        Ok((self as $unsigned).saturating_sub(rhs as $unsigned) as $ty)
                    }
                    BinaryOp::And => Ok(self & rhs),
                    BinaryOp::AndNot => Ok(self & !rhs),
                    BinaryOp::Or => Ok(self | rhs),
                    BinaryOp::Xor => Ok(self ^ rhs),
                    BinaryOp::FirstNonzero => Ok(if self != 0 { self } else { rhs }),
                    BinaryOp::Shl => {
                        Ok(self.wrapping_shl((rhs as u32) & (Self::BITS - 1)))
                    }
                    BinaryOp::LogicalShr => {
                        let count = (rhs as u32) & (Self::BITS - 1);
                        Ok(((self as $unsigned) >> count) as $ty)
                    }
                    BinaryOp::ArithmeticShr => {
                        Ok(self.wrapping_shr((rhs as u32) & (Self::BITS - 1)))
                    }
                    BinaryOp::RotateLeft => Ok(self.rotate_left(rhs as u32)),
                    BinaryOp::RotateRight => Ok(self.rotate_right(rhs as u32)),
                    BinaryOp::CopySign => Err(helpers::op_not_applicable_error(
                        "copy-sign on integer lanes",
                    )),
                }
            }

            fn ternary(self, op: TernaryOp, b: Self, c: Self) -> Result<Self> {
                match op {
                    TernaryOp::FusedMultiplyAdd => Err(helpers::op_not_applicable_error(
                        "fused multiply-add on integer lanes",
                    )),
                    TernaryOp::BitwiseBlend => Ok((b & c) | (self & !c)),
                }
            }

            fn compare(self, op: CompareOp, rhs: Self) -> Result<bool> {
                match op {
                    CompareOp::Eq => Ok(self == rhs),
                    CompareOp::Ne => Ok(self != rhs),
                    CompareOp::Lt => Ok(self < rhs),
                    CompareOp::Le => Ok(self <= rhs),
                    CompareOp::Gt => Ok(self > rhs),
                    CompareOp::Ge => Ok(self >= rhs),
                    CompareOp::UnsignedLt => Ok((self as $unsigned) < (rhs as $unsigned)),
                    CompareOp::UnsignedLe => Ok((self as $unsigned) <= (rhs as $unsigned)),
                    CompareOp::UnsignedGt => Ok((self as $unsigned) > (rhs as $unsigned)),
                    CompareOp::UnsignedGe => Ok((self as $unsigned) >= (rhs as $unsigned)),
                }
            }

            fn test(self, op: TestOp) -> Result<bool> {
                match op {
                    TestOp::IsDefault => Ok(self == 0),
                    TestOp::IsNegative => Ok(self < 0),
                    TestOp::IsFinite | TestOp::IsNan | TestOp::IsInfinite => Err(
                        helpers::op_not_applicable_error(
                            "float classification on integer lanes",
                        ),
                    ),
                }
            }

            fn reduce_identity(op: ReduceOp) -> Result<Self> {
                match op {
                    ReduceOp::Add | ReduceOp::Or | ReduceOp::Xor | ReduceOp::FirstNonzero => {
                        Ok(0)
                    }
                    ReduceOp::Mul => Ok(1),
                    ReduceOp::Min => Ok(<$ty>::MAX),
                    ReduceOp::Max => Ok(<$ty>::MIN),
                    ReduceOp::And => Ok(-1),
                }
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0
            }

            #[inline]
            fn to_i64(self) -> i64 {
                i64::from(self)
            }

            #[inline]
            fn to_u64(self) -> u64 {
                u64::from(self as $unsigned)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i64(value: i64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $unsigned as $ty
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn read_le(bytes: &[u8]) -> Self {
                let mut raw = [0u8; core::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..core::mem::size_of::<$ty>()]);
                <$ty>::from_le_bytes(raw)
            }

            #[inline]
            fn read_be(bytes: &[u8]) -> Self {
                let mut raw = [0u8; core::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..core::mem::size_of::<$ty>()]);
                <$ty>::from_be_bytes(raw)
            }

            #[inline]
            fn write_le(self, out: &mut [u8]) {
                out[..core::mem::size_of::<$ty>()].copy_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn write_be(self, out: &mut [u8]) {
                out[..core::mem::size_of::<$ty>()].copy_from_slice(&self.to_be_bytes());
            }
        }
    };
}

impl_int_lane!(i8, u8, i8, ElemKind::I8);
impl_int_lane!(i16, u16, i16, ElemKind::I16);
impl_int_lane!(i32, u32, i32, ElemKind::I32);
impl_int_lane!(i64, u64, i64, ElemKind::I64);

macro_rules! impl_float_lane {
    ($ty:ty, $bits:ty, $index:ty, $kind:expr) => {
        impl Lane for $ty {
            type Index = $index;

            const KIND: ElemKind = $kind;
            const BITS: u32 = (core::mem::size_of::<$ty>() as u32) * 8;
            const BYTES: usize = core::mem::size_of::<$ty>();
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn unary(self, op: UnaryOp) -> Result<Self> {
                match op {
                    UnaryOp::Neg => Ok(-self),
                    UnaryOp::Abs => {
                        let sign: $bits = 1 << (Self::BITS - 1);
                        Ok(<$ty>::from_bits(self.to_bits() & !sign))
                    }
                    UnaryOp::Sqrt => {
                        #[cfg(feature = "std")]
                        {
                            Ok(self.sqrt())
                        }
                        #[cfg(not(feature = "std"))]
                        {
                            Err(helpers::math_unavailable_error(
                                "square root needs the std math library",
                            ))
                        }
                    }
                    UnaryOp::Not
                    | UnaryOp::Zomo
                    | UnaryOp::BitCount
                    | UnaryOp::LeadingZeros
                    | UnaryOp::TrailingZeros
                    | UnaryOp::ReverseBits
                    | UnaryOp::ReverseBytes => Err(helpers::op_not_applicable_error(
                        "integer bit operation on float lanes",
                    )),
                }
            }

            fn binary(self, op: BinaryOp, rhs: Self) -> Result<Self> {
                match op {
                    BinaryOp::Add => Ok(self + rhs),
                    BinaryOp::Sub => Ok(self - rhs),
                    BinaryOp::Mul => Ok(self * rhs),
                    BinaryOp::Div => Ok(self / rhs),
                    BinaryOp::Rem => Ok(self % rhs),
                    // NaN wins, and -0.0 orders below +0.0.
                    BinaryOp::Min => Ok(if self.is_nan() {
                        self
                    } else if rhs.is_nan() {
                        rhs
                    } else if self == rhs {
                        if self.is_sign_negative() { self } else { rhs }
                    } else if self < rhs {
                        self
                    } else {
                        rhs
                    }),
                    BinaryOp::Max => Ok(if self.is_nan() {
                        self
                    } else if rhs.is_nan() {
                        rhs
                    } else if self == rhs {
                        if self.is_sign_positive() { self } else { rhs }
                    } else if self > rhs {
                        self
                    } else {
                        rhs
                    }),
                    BinaryOp::FirstNonzero => {
                        Ok(if self.to_bits() != 0 { self } else { rhs })
                    }
                    BinaryOp::CopySign => {
                        let sign: $bits = 1 << (Self::BITS - 1);
                        Ok(<$ty>::from_bits(
                            (self.to_bits() & !sign) | (rhs.to_bits() & sign),
                        ))
                    }
                    BinaryOp::UnsignedDiv
                    | BinaryOp::UnsignedRem
                    | BinaryOp::UnsignedMin
                    | BinaryOp::UnsignedMax
                    | BinaryOp::SaturatingAdd
                    | BinaryOp::SaturatingSub
                    | BinaryOp::SaturatingUnsignedAdd
                    | BinaryOp::SaturatingUnsignedSub
                    | BinaryOp::And
                    | BinaryOp::AndNot
                    | BinaryOp::Or
                    | BinaryOp::Xor
                    | BinaryOp::Shl
                    | BinaryOp::LogicalShr
                    | BinaryOp::ArithmeticShr
                    | BinaryOp::RotateLeft
                    | BinaryOp::RotateRight => Err(helpers::op_not_applicable_error(
                        "integer operation on float lanes",
                    )),
                }
            }

            fn ternary(self, op: TernaryOp, b: Self, c: Self) -> Result<Self> {
                match op {
                    TernaryOp::FusedMultiplyAdd => {
                        #[cfg(feature = "std")]
                        {
                            Ok(self.mul_add(b, c))
                        }
                        #[cfg(not(feature = "std"))]
                        {
                            let _ = (b, c);
                            Err(helpers::math_unavailable_error(
                                "fused multiply-add needs the std math library",
                            ))
                        }
                    }
                    TernaryOp::BitwiseBlend => Err(helpers::op_not_applicable_error(
                        "bitwise blend on float lanes",
                    )),
                }
            }

            fn compare(self, op: CompareOp, rhs: Self) -> Result<bool> {
                match op {
                    CompareOp::Eq => Ok(self == rhs),
                    CompareOp::Ne => Ok(self != rhs),
                    CompareOp::Lt => Ok(self < rhs),
                    CompareOp::Le => Ok(self <= rhs),
                    CompareOp::Gt => Ok(self > rhs),
                    CompareOp::Ge => Ok(self >= rhs),
                    CompareOp::UnsignedLt
                    | CompareOp::UnsignedLe
                    | CompareOp::UnsignedGt
                    | CompareOp::UnsignedGe => Err(helpers::op_not_applicable_error(
                        "unsigned comparison on float lanes",
                    )),
                }
            }

            fn test(self, op: TestOp) -> Result<bool> {
                match op {
                    TestOp::IsDefault => Ok(self == 0.0),
                    TestOp::IsNegative => Ok(self < 0.0),
                    TestOp::IsFinite => Ok(self.is_finite()),
                    TestOp::IsNan => Ok(self.is_nan()),
                    TestOp::IsInfinite => Ok(self.is_infinite()),
                }
            }

            fn reduce_identity(op: ReduceOp) -> Result<Self> {
                match op {
                    ReduceOp::Add | ReduceOp::FirstNonzero => Ok(0.0),
                    ReduceOp::Mul => Ok(1.0),
                    ReduceOp::Min => Ok(<$ty>::INFINITY),
                    ReduceOp::Max => Ok(<$ty>::NEG_INFINITY),
                    ReduceOp::And | ReduceOp::Or | ReduceOp::Xor => Err(
                        helpers::op_not_applicable_error("bitwise reduction on float lanes"),
                    ),
                }
            }

            #[inline]
            fn is_zero(self) -> bool {
                self.to_bits() == 0
            }

            #[inline]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            #[inline]
            fn from_i64(value: i64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $ty
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn read_le(bytes: &[u8]) -> Self {
                let mut raw = [0u8; core::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..core::mem::size_of::<$ty>()]);
                <$ty>::from_le_bytes(raw)
            }

            #[inline]
            fn read_be(bytes: &[u8]) -> Self {
                let mut raw = [0u8; core::mem::size_of::<$ty>()];
                raw.copy_from_slice(&bytes[..core::mem::size_of::<$ty>()]);
                <$ty>::from_be_bytes(raw)
            }

            #[inline]
            fn write_le(self, out: &mut [u8]) {
                out[..core::mem::size_of::<$ty>()].copy_from_slice(&self.to_le_bytes());
            }

            #[inline]
            fn write_be(self, out: &mut [u8]) {
                out[..core::mem::size_of::<$ty>()].copy_from_slice(&self.to_be_bytes());
            }
        }
    };
}

impl_float_lane!(f32, u32, i32, ElemKind::F32);
impl_float_lane!(f64, u64, i64, ElemKind::F64);
