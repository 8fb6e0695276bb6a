// VLANE - vlane-error
// Module: Error Prelude
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for vlane-error
//!
//! Provides a unified set of imports for both std and `no_std` environments
//! and re-exports the error vocabulary used across the workspace.

pub use core::{
    cmp::{Eq, Ord, PartialEq, PartialOrd},
    convert::{TryFrom, TryInto},
    fmt,
    fmt::{Debug, Display},
    marker::PhantomData,
    mem,
    slice,
    str,
};

pub use crate::{codes, helpers, Error, ErrorCategory, ErrorSource, Result};
