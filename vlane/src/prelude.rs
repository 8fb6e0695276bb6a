// VLANE - vlane
// Module: Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for vlane
//!
//! One import for the common working set: the value types, the op tags,
//! the shape catalog and the error vocabulary.

pub use crate::lane::{IndexLane, Lane};
pub use crate::mask::Mask;
pub use crate::memory::ByteOrder;
pub use crate::ops::{
    BinaryOp, CompareOp, Conversion, ReduceOp, ShiftOp, TernaryOp, TestOp, UnaryOp,
};
pub use crate::shuffle::Shuffle;
pub use crate::species::{
    lane_count_for, Species, SpeciesInfo, F32x16, F32x2, F32x4, F32x8, F64x1, F64x2, F64x4,
    F64x8, I16x16, I16x32, I16x4, I16x8, I32x16, I32x2, I32x4, I32x8, I64x1, I64x2, I64x4,
    I64x8, I8x16, I8x32, I8x64, I8x8, PREFERRED_BIT_WIDTH,
};
pub use crate::vector::Vector;
pub use vlane_accel::{AccelCapabilities, AccelLevel, ElemKind};
pub use vlane_error::{codes, helpers, Error, ErrorCategory, Result};
