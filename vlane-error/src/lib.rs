// VLANE - vlane-error
// Module: Error Handling
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error handling for the vlane SIMD value library.
//!
//! Every fallible operation in the workspace reports a [`Error`]: a `Copy`
//! value carrying a category, a stable numeric code and a static message.
//! Categories follow the library's error taxonomy:
//!
//! - **Species** (1000-1999): species pairs that cannot take part in a
//!   conversion or reinterpretation together.
//! - **Bounds** (2000-2999): lane indices, slice origins, part numbers and
//!   array ranges outside their declared domain.
//! - **NotSupported** (3000-3999): operations undefined for a lane width or
//!   element class, such as bit access on masks wider than 64 lanes.
//! - **Arithmetic** (4000-4999): the faulting lane cases of signed integer
//!   division.
//! - **Memory** (5000-5999): byte-image transfers outside the addressed
//!   buffer.
//!
//! Errors are constructed through [`Error::new`] or the `const` helpers in
//! [`helpers`]; both are usable in constant context.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

/// Error codes for vlane
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Helper constructors for common error patterns
pub mod helpers;
/// Unified imports for std and `no_std` builds
pub mod prelude;

pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for vlane operations.
///
/// Suitable for `no_std` environments as [`Error`] does not allocate.
pub type Result<T> = core::result::Result<T, Error>;
