// VLANE - vlane
// Module: Library Root
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-width SIMD-style vectors with species-typed shapes.
//!
//! The library models the classic vector-API triple: a [`Vector`] of `N`
//! lanes of one of six element types, a [`Mask`] steering its masked
//! operations, and a [`Shuffle`] permuting its lanes through partially
//! wrapped indices. Shapes are species types ([`Species`], with aliases
//! like [`I8x16`](species::I8x16) for the 64- to 512-bit catalog), so
//! mixing shapes is a compile error and the remaining runtime checks sit
//! at the dynamic seams: conversion parts, slice bounds, index maps.
//!
//! Lane-local operations dispatch through the `vlane-accel` provider
//! stack: when a species' byte image divides into 16-byte blocks the
//! active provider may run a hardware kernel, and otherwise the per-lane
//! semantics of [`Lane`] run. Providers only claim kernels that reproduce
//! those semantics bit for bit, so the two paths are indistinguishable.
//!
//! ```
//! use vlane::prelude::*;
//!
//! fn sum_plus_three(values: [i8; 16]) -> vlane::Result<i64> {
//!     let v = Vector::<i8, 16>::from_array(values);
//!     let shifted = v.add(3)?;
//!     shifted.reduce_lanes_to_i64(ReduceOp::Add)
//! }
//! # assert_eq!(sum_plus_three([5; 16]).unwrap(), 128);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

/// Shape conversions and bit reinterpretation
mod convert;
/// Kernel dispatch glue
mod dispatch;
/// Element types and per-lane semantics
pub mod lane;
/// Per-lane boolean masks
pub mod mask;
/// Bounded memory transfers
pub mod memory;
/// Operation tags
pub mod ops;
/// Unified imports for common use
pub mod prelude;
/// Lane permutations
pub mod shuffle;
/// Species descriptors and the shape catalog
pub mod species;
/// Vectors and lane-wise operations
pub mod vector;

pub use lane::{IndexLane, Lane};
pub use mask::Mask;
pub use memory::ByteOrder;
pub use ops::{
    BinaryOp, CompareOp, Conversion, ReduceOp, ShiftOp, TernaryOp, TestOp, UnaryOp,
};
pub use shuffle::Shuffle;
pub use species::{lane_count_for, Species, SpeciesInfo, PREFERRED_BIT_WIDTH};
pub use vector::Vector;
pub use vlane_accel::{AccelCapabilities, AccelLevel, ElemKind};
pub use vlane_error::{Error, ErrorCategory, Result};
