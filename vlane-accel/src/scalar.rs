// VLANE - vlane-accel
// Module: Scalar Provider
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Provider of last resort for targets without usable vector units.
//!
//! The scalar provider claims no kernels at all. Every request is declined,
//! which routes the caller to its own per-lane fallback closure. That keeps
//! exactly one source of truth for lane semantics on unaccelerated targets.

use crate::{AccelLevel, AccelProvider};

/// Acceleration provider that declines every kernel request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarAccel;

impl ScalarAccel {
    /// Create a new scalar provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AccelProvider for ScalarAccel {
    fn level(&self) -> AccelLevel {
        AccelLevel::None
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "scalar"
    }
}
