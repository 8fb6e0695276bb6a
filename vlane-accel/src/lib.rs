// VLANE - vlane-accel
// Module: Acceleration Runtime
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Hardware acceleration backends for fixed-width lane blocks.
//!
//! A provider answers kernel requests over 16-byte blocks of little-endian
//! lanes, lane 0 first. Every request may be declined with `None`; callers
//! keep a per-lane fallback that carries the authoritative semantics, so a
//! claimed kernel is a transparent speedup, never a behavioral variant.
//!
//! # Architecture
//!
//! The crate is organized into:
//! - Runtime capability detection
//! - The platform-agnostic [`AccelProvider`] trait
//! - Platform implementations (x86_64 for now)
//! - A declining scalar provider for everything else
//!
//! # Safety
//!
//! All unsafe SIMD intrinsics are contained in the platform modules. The
//! public API is completely safe to use.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod kernels;
pub mod scalar;

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

pub use kernels::{BinaryKernel, CompareKernel, ElemKind, ShiftKernel, UnaryKernel};
pub use scalar::ScalarAccel;
#[cfg(target_arch = "x86_64")]
pub use x86_64::X86Accel;

/// Acceleration tiers a provider can implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccelLevel {
    /// No vector unit in use; every kernel request is declined
    None,
    /// Baseline vector unit (SSE2 on x86_64)
    Baseline,
    /// Advanced vector unit (AVX2 on x86_64)
    Advanced,
}

/// Runtime-detected acceleration capabilities.
#[derive(Debug, Clone)]
pub struct AccelCapabilities {
    /// SSE2 available (x86_64 baseline)
    #[cfg(target_arch = "x86_64")]
    pub has_sse2: bool,
    /// AVX2 available
    #[cfg(target_arch = "x86_64")]
    pub has_avx2: bool,
    /// Fused multiply-add available
    #[cfg(target_arch = "x86_64")]
    pub has_fma: bool,

    /// Highest available acceleration level
    pub level: AccelLevel,
}

impl Default for AccelCapabilities {
    fn default() -> Self {
        Self::detect()
    }
}

impl AccelCapabilities {
    /// Detect acceleration capabilities at runtime.
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            Self::detect_x86_64()
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            Self {
                level: AccelLevel::None,
            }
        }
    }

    #[cfg(target_arch = "x86_64")]
    fn detect_x86_64() -> Self {
        #[cfg(feature = "std")]
        let has_sse2 = is_x86_feature_detected!("sse2");
        #[cfg(feature = "std")]
        let has_avx2 = is_x86_feature_detected!("avx2");
        #[cfg(feature = "std")]
        let has_fma = is_x86_feature_detected!("fma");

        // Without std there is no cpuid wrapper. SSE2 is part of the
        // x86_64 baseline ABI; nothing beyond it is assumed.
        #[cfg(not(feature = "std"))]
        let (has_sse2, has_avx2, has_fma) = (true, false, false);

        let level = if has_avx2 {
            AccelLevel::Advanced
        } else if has_sse2 {
            AccelLevel::Baseline
        } else {
            AccelLevel::None
        };

        Self {
            has_sse2,
            has_avx2,
            has_fma,
            level,
        }
    }
}

/// A hardware acceleration backend over 16-byte lane blocks.
///
/// Declining a request is always correct. Claiming one obliges the
/// provider to return exactly the bytes the caller's per-lane fallback
/// would produce. Comparison kernels fill each result lane with all-ones
/// for true and all-zeros for false.
pub trait AccelProvider: Send + Sync {
    /// Acceleration tier this provider implements.
    fn level(&self) -> AccelLevel;

    /// Whether the provider can execute on the current CPU.
    fn is_available(&self) -> bool;

    /// Short provider name for diagnostics.
    fn name(&self) -> &'static str;

    /// Lane-wise one-operand kernel.
    fn unary(&self, _op: UnaryKernel, _kind: ElemKind, _a: &[u8; 16]) -> Option<[u8; 16]> {
        None
    }

    /// Lane-wise two-operand kernel.
    fn binary(
        &self,
        _op: BinaryKernel,
        _kind: ElemKind,
        _a: &[u8; 16],
        _b: &[u8; 16],
    ) -> Option<[u8; 16]> {
        None
    }

    /// Lane-wise shift by one uniform amount, already reduced modulo the
    /// lane width.
    fn shift(&self, _op: ShiftKernel, _kind: ElemKind, _a: &[u8; 16], _amount: u32) -> Option<[u8; 16]> {
        None
    }

    /// Lane-wise comparison producing all-ones/all-zeros lanes.
    fn compare(
        &self,
        _op: CompareKernel,
        _kind: ElemKind,
        _a: &[u8; 16],
        _b: &[u8; 16],
    ) -> Option<[u8; 16]> {
        None
    }

    /// Bitwise blend: result bit = select bit ? second : first.
    fn select_bits(&self, _a: &[u8; 16], _b: &[u8; 16], _c: &[u8; 16]) -> Option<[u8; 16]> {
        None
    }

    /// Single-rounding `a * b + c` over float lanes.
    fn fused_multiply_add(
        &self,
        _kind: ElemKind,
        _a: &[u8; 16],
        _b: &[u8; 16],
        _c: &[u8; 16],
    ) -> Option<[u8; 16]> {
        None
    }
}

/// Runtime that pairs detected capabilities with the best provider.
#[cfg(feature = "std")]
pub struct AccelRuntime {
    provider: Box<dyn AccelProvider>,
    capabilities: AccelCapabilities,
}

#[cfg(feature = "std")]
impl AccelRuntime {
    /// Create a runtime with automatic provider selection.
    #[must_use]
    pub fn new() -> Self {
        let capabilities = AccelCapabilities::detect();
        let provider = Self::select_provider(&capabilities);
        Self {
            provider,
            capabilities,
        }
    }

    /// Runtime pinned to the scalar provider, regardless of CPU features.
    ///
    /// Useful for comparing accelerated results against the per-lane path.
    #[must_use]
    pub fn scalar() -> Self {
        Self {
            provider: Box::new(ScalarAccel::new()),
            capabilities: AccelCapabilities {
                #[cfg(target_arch = "x86_64")]
                has_sse2: false,
                #[cfg(target_arch = "x86_64")]
                has_avx2: false,
                #[cfg(target_arch = "x86_64")]
                has_fma: false,
                level: AccelLevel::None,
            },
        }
    }

    /// Select the widest provider the capabilities support.
    fn select_provider(_capabilities: &AccelCapabilities) -> Box<dyn AccelProvider> {
        #[cfg(target_arch = "x86_64")]
        {
            if _capabilities.has_avx2 {
                if _capabilities.has_fma {
                    return Box::new(x86_64::X86Accel::new_avx2_fma());
                }
                return Box::new(x86_64::X86Accel::new_avx2());
            }
            if _capabilities.has_sse2 {
                return Box::new(x86_64::X86Accel::new_sse2());
            }
        }

        Box::new(ScalarAccel::new())
    }

    /// Get the selected provider.
    #[must_use]
    pub fn provider(&self) -> &dyn AccelProvider {
        &*self.provider
    }

    /// Get the detected capabilities.
    #[must_use]
    pub fn capabilities(&self) -> &AccelCapabilities {
        &self.capabilities
    }

    /// Whether anything beyond the scalar path is in use.
    #[must_use]
    pub fn has_acceleration(&self) -> bool {
        self.capabilities.level > AccelLevel::None
    }
}

#[cfg(feature = "std")]
impl Default for AccelRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide provider consulted by dispatchers.
///
/// Selected once on first use. Setting the `VLANE_FORCE_SCALAR` environment
/// variable to anything but `0` pins the scalar provider, which keeps every
/// operation on the per-lane path.
#[cfg(feature = "std")]
pub fn active() -> &'static dyn AccelProvider {
    static ACTIVE: std::sync::OnceLock<Box<dyn AccelProvider>> = std::sync::OnceLock::new();
    ACTIVE
        .get_or_init(|| {
            let forced = std::env::var_os("VLANE_FORCE_SCALAR").is_some_and(|v| v != "0");
            let provider: Box<dyn AccelProvider> = if forced {
                Box::new(ScalarAccel::new())
            } else {
                AccelRuntime::select_provider(&AccelCapabilities::detect())
            };
            #[cfg(feature = "log")]
            log::debug!(
                "acceleration provider: {} (level {:?})",
                provider.name(),
                provider.level()
            );
            provider
        })
        .as_ref()
}

/// The process-wide provider consulted by dispatchers.
///
/// Without std there is no trustworthy feature detection, so every
/// operation stays on the per-lane path.
#[cfg(not(feature = "std"))]
pub fn active() -> &'static dyn AccelProvider {
    static SCALAR: ScalarAccel = ScalarAccel::new();
    &SCALAR
}
