// VLANE - vlane-accel
// Module: x86_64 Provider
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! x86_64 kernels backed by SSE2, with wider claims when AVX2 and FMA
//! are present.
//!
//! Every claimed kernel must reproduce the caller's per-lane semantics bit
//! for bit. Kernels that cannot (float min/max, where the SSE instructions
//! disagree with the lane contract on NaN and signed zero) are declined
//! rather than approximated. Two-instruction multiply-add is likewise never
//! claimed as a fused multiply-add.

use core::arch::x86_64::*;

use crate::{
    AccelLevel, AccelProvider,
    kernels::{BinaryKernel, CompareKernel, ElemKind, ShiftKernel, UnaryKernel},
};

/// x86_64 acceleration provider.
///
/// The baseline constructor claims only SSE2 kernels, which every x86_64
/// CPU executes. The advanced constructors additionally claim kernels from
/// the AVX2 feature set (which includes SSSE3 and SSE4.x) and, separately,
/// fused multiply-add.
#[derive(Debug, Clone)]
pub struct X86Accel {
    level: AccelLevel,
    has_sse2: bool,
    has_avx2: bool,
    has_fma: bool,
}

impl X86Accel {
    /// Create a provider limited to the SSE2 baseline.
    #[must_use]
    pub const fn new_sse2() -> Self {
        Self {
            level: AccelLevel::Baseline,
            has_sse2: true,
            has_avx2: false,
            has_fma: false,
        }
    }

    /// Create a provider for CPUs with AVX2 but no FMA.
    #[must_use]
    pub const fn new_avx2() -> Self {
        Self {
            level: AccelLevel::Advanced,
            has_sse2: true,
            has_avx2: true,
            has_fma: false,
        }
    }

    /// Create a provider for CPUs with AVX2 and FMA.
    #[must_use]
    pub const fn new_avx2_fma() -> Self {
        Self {
            level: AccelLevel::Advanced,
            has_sse2: true,
            has_avx2: true,
            has_fma: true,
        }
    }
}

#[inline]
fn load(block: &[u8; 16]) -> __m128i {
    // Unaligned load; a byte array carries no alignment guarantee.
    unsafe { _mm_loadu_si128(block.as_ptr() as *const __m128i) }
}

#[inline]
fn store(v: __m128i) -> [u8; 16] {
    let mut output = [0u8; 16];
    unsafe { _mm_storeu_si128(output.as_mut_ptr() as *mut __m128i, v) };
    output
}

#[inline]
fn load_ps(block: &[u8; 16]) -> __m128 {
    unsafe { _mm_loadu_ps(block.as_ptr() as *const f32) }
}

#[inline]
fn store_ps(v: __m128) -> [u8; 16] {
    let mut output = [0u8; 16];
    unsafe { _mm_storeu_ps(output.as_mut_ptr() as *mut f32, v) };
    output
}

#[inline]
fn load_pd(block: &[u8; 16]) -> __m128d {
    unsafe { _mm_loadu_pd(block.as_ptr() as *const f64) }
}

#[inline]
fn store_pd(v: __m128d) -> [u8; 16] {
    let mut output = [0u8; 16];
    unsafe { _mm_storeu_pd(output.as_mut_ptr() as *mut f64, v) };
    output
}

#[inline]
fn invert(v: __m128i) -> __m128i {
    unsafe { _mm_xor_si128(v, _mm_set1_epi8(-1)) }
}

/// Wrapping i32 lane multiply on plain SSE2, which has no `pmulld`.
///
/// `_mm_mul_epu32` produces full 64-bit products of the even lanes; the odd
/// lanes are shuffled into even position first, then the low halves of both
/// product pairs are interleaved back. The low 32 bits of the product are
/// independent of signedness, so this matches `i32::wrapping_mul`.
#[inline]
fn mul_i32_sse2(a: __m128i, b: __m128i) -> __m128i {
    unsafe {
        let a_even = _mm_shuffle_epi32::<0xA0>(a); // lanes [0, 0, 2, 2]
        let b_even = _mm_shuffle_epi32::<0xA0>(b);
        let even_prod = _mm_mul_epu32(a_even, b_even);

        let a_odd = _mm_shuffle_epi32::<0xF5>(a); // lanes [1, 1, 3, 3]
        let b_odd = _mm_shuffle_epi32::<0xF5>(b);
        let odd_prod = _mm_mul_epu32(a_odd, b_odd);

        let even_lo = _mm_shuffle_epi32::<0x08>(even_prod);
        let odd_lo = _mm_shuffle_epi32::<0x08>(odd_prod);
        _mm_unpacklo_epi32(even_lo, odd_lo)
    }
}

/// Wrapping i64 lane multiply. No 64-bit lane multiply exists below
/// AVX-512, so the two lanes are computed through scalar registers.
#[inline]
fn mul_i64_lanes(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut output = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        let mut lane_a = [0u8; 8];
        let mut lane_b = [0u8; 8];
        lane_a.copy_from_slice(&a[i..i + 8]);
        lane_b.copy_from_slice(&b[i..i + 8]);
        let product = i64::from_le_bytes(lane_a).wrapping_mul(i64::from_le_bytes(lane_b));
        output[i..i + 8].copy_from_slice(&product.to_le_bytes());
        i += 8;
    }
    output
}

impl AccelProvider for X86Accel {
    fn level(&self) -> AccelLevel {
        self.level
    }

    fn is_available(&self) -> bool {
        // SSE2 is part of the x86_64 baseline; the constructors never
        // claim more than the CPU reported.
        self.has_sse2
    }

    fn name(&self) -> &'static str {
        if self.has_avx2 { "x86_64-avx2" } else { "x86_64-sse2" }
    }

    fn unary(&self, op: UnaryKernel, kind: ElemKind, a: &[u8; 16]) -> Option<[u8; 16]> {
        match (op, kind) {
            (UnaryKernel::Neg, ElemKind::I8) => {
                Some(unsafe { store(_mm_sub_epi8(_mm_setzero_si128(), load(a))) })
            }
            (UnaryKernel::Neg, ElemKind::I16) => {
                Some(unsafe { store(_mm_sub_epi16(_mm_setzero_si128(), load(a))) })
            }
            (UnaryKernel::Neg, ElemKind::I32) => {
                Some(unsafe { store(_mm_sub_epi32(_mm_setzero_si128(), load(a))) })
            }
            (UnaryKernel::Neg, ElemKind::I64) => {
                Some(unsafe { store(_mm_sub_epi64(_mm_setzero_si128(), load(a))) })
            }
            (UnaryKernel::Neg, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_xor_ps(load_ps(a), _mm_set1_ps(-0.0))) })
            }
            (UnaryKernel::Neg, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_xor_pd(load_pd(a), _mm_set1_pd(-0.0))) })
            }
            (UnaryKernel::Abs, ElemKind::I8) if self.has_avx2 => {
                Some(unsafe { store(_mm_abs_epi8(load(a))) })
            }
            (UnaryKernel::Abs, ElemKind::I16) if self.has_avx2 => {
                Some(unsafe { store(_mm_abs_epi16(load(a))) })
            }
            (UnaryKernel::Abs, ElemKind::I32) if self.has_avx2 => {
                Some(unsafe { store(_mm_abs_epi32(load(a))) })
            }
            (UnaryKernel::Abs, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_andnot_ps(_mm_set1_ps(-0.0), load_ps(a))) })
            }
            (UnaryKernel::Abs, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_andnot_pd(_mm_set1_pd(-0.0), load_pd(a))) })
            }
            (UnaryKernel::Not, _) => Some(store(invert(load(a)))),
            (UnaryKernel::Sqrt, ElemKind::F32) => Some(unsafe { store_ps(_mm_sqrt_ps(load_ps(a))) }),
            (UnaryKernel::Sqrt, ElemKind::F64) => Some(unsafe { store_pd(_mm_sqrt_pd(load_pd(a))) }),
            _ => None,
        }
    }

    fn binary(
        &self,
        op: BinaryKernel,
        kind: ElemKind,
        a: &[u8; 16],
        b: &[u8; 16],
    ) -> Option<[u8; 16]> {
        match (op, kind) {
            (BinaryKernel::Add, ElemKind::I8) => {
                Some(unsafe { store(_mm_add_epi8(load(a), load(b))) })
            }
            (BinaryKernel::Add, ElemKind::I16) => {
                Some(unsafe { store(_mm_add_epi16(load(a), load(b))) })
            }
            (BinaryKernel::Add, ElemKind::I32) => {
                Some(unsafe { store(_mm_add_epi32(load(a), load(b))) })
            }
            (BinaryKernel::Add, ElemKind::I64) => {
                Some(unsafe { store(_mm_add_epi64(load(a), load(b))) })
            }
            (BinaryKernel::Add, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_add_ps(load_ps(a), load_ps(b))) })
            }
            (BinaryKernel::Add, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_add_pd(load_pd(a), load_pd(b))) })
            }
            (BinaryKernel::Sub, ElemKind::I8) => {
                Some(unsafe { store(_mm_sub_epi8(load(a), load(b))) })
            }
            (BinaryKernel::Sub, ElemKind::I16) => {
                Some(unsafe { store(_mm_sub_epi16(load(a), load(b))) })
            }
            (BinaryKernel::Sub, ElemKind::I32) => {
                Some(unsafe { store(_mm_sub_epi32(load(a), load(b))) })
            }
            (BinaryKernel::Sub, ElemKind::I64) => {
                Some(unsafe { store(_mm_sub_epi64(load(a), load(b))) })
            }
            (BinaryKernel::Sub, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_sub_ps(load_ps(a), load_ps(b))) })
            }
            (BinaryKernel::Sub, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_sub_pd(load_pd(a), load_pd(b))) })
            }
            (BinaryKernel::Mul, ElemKind::I16) => {
                Some(unsafe { store(_mm_mullo_epi16(load(a), load(b))) })
            }
            (BinaryKernel::Mul, ElemKind::I32) if self.has_avx2 => {
                Some(unsafe { store(_mm_mullo_epi32(load(a), load(b))) })
            }
            (BinaryKernel::Mul, ElemKind::I32) => Some(store(mul_i32_sse2(load(a), load(b)))),
            (BinaryKernel::Mul, ElemKind::I64) => Some(mul_i64_lanes(a, b)),
            (BinaryKernel::Mul, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_mul_ps(load_ps(a), load_ps(b))) })
            }
            (BinaryKernel::Mul, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_mul_pd(load_pd(a), load_pd(b))) })
            }
            (BinaryKernel::Div, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_div_ps(load_ps(a), load_ps(b))) })
            }
            (BinaryKernel::Div, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_div_pd(load_pd(a), load_pd(b))) })
            }
            (BinaryKernel::MinSigned, ElemKind::I8) if self.has_avx2 => {
                Some(unsafe { store(_mm_min_epi8(load(a), load(b))) })
            }
            (BinaryKernel::MinSigned, ElemKind::I16) => {
                Some(unsafe { store(_mm_min_epi16(load(a), load(b))) })
            }
            (BinaryKernel::MinSigned, ElemKind::I32) if self.has_avx2 => {
                Some(unsafe { store(_mm_min_epi32(load(a), load(b))) })
            }
            (BinaryKernel::MaxSigned, ElemKind::I8) if self.has_avx2 => {
                Some(unsafe { store(_mm_max_epi8(load(a), load(b))) })
            }
            (BinaryKernel::MaxSigned, ElemKind::I16) => {
                Some(unsafe { store(_mm_max_epi16(load(a), load(b))) })
            }
            (BinaryKernel::MaxSigned, ElemKind::I32) if self.has_avx2 => {
                Some(unsafe { store(_mm_max_epi32(load(a), load(b))) })
            }
            (BinaryKernel::MinUnsigned, ElemKind::I8) => {
                Some(unsafe { store(_mm_min_epu8(load(a), load(b))) })
            }
            (BinaryKernel::MinUnsigned, ElemKind::I16) if self.has_avx2 => {
                Some(unsafe { store(_mm_min_epu16(load(a), load(b))) })
            }
            (BinaryKernel::MinUnsigned, ElemKind::I32) if self.has_avx2 => {
                Some(unsafe { store(_mm_min_epu32(load(a), load(b))) })
            }
            (BinaryKernel::MaxUnsigned, ElemKind::I8) => {
                Some(unsafe { store(_mm_max_epu8(load(a), load(b))) })
            }
            (BinaryKernel::MaxUnsigned, ElemKind::I16) if self.has_avx2 => {
                Some(unsafe { store(_mm_max_epu16(load(a), load(b))) })
            }
            (BinaryKernel::MaxUnsigned, ElemKind::I32) if self.has_avx2 => {
                Some(unsafe { store(_mm_max_epu32(load(a), load(b))) })
            }
            (BinaryKernel::SatAddSigned, ElemKind::I8) => {
                Some(unsafe { store(_mm_adds_epi8(load(a), load(b))) })
            }
            (BinaryKernel::SatAddSigned, ElemKind::I16) => {
                Some(unsafe { store(_mm_adds_epi16(load(a), load(b))) })
            }
            (BinaryKernel::SatSubSigned, ElemKind::I8) => {
                Some(unsafe { store(_mm_subs_epi8(load(a), load(b))) })
            }
            (BinaryKernel::SatSubSigned, ElemKind::I16) => {
                Some(unsafe { store(_mm_subs_epi16(load(a), load(b))) })
            }
            (BinaryKernel::SatAddUnsigned, ElemKind::I8) => {
                Some(unsafe { store(_mm_adds_epu8(load(a), load(b))) })
            }
            (BinaryKernel::SatAddUnsigned, ElemKind::I16) => {
                Some(unsafe { store(_mm_adds_epu16(load(a), load(b))) })
            }
            (BinaryKernel::SatSubUnsigned, ElemKind::I8) => {
                Some(unsafe { store(_mm_subs_epu8(load(a), load(b))) })
            }
            (BinaryKernel::SatSubUnsigned, ElemKind::I16) => {
                Some(unsafe { store(_mm_subs_epu16(load(a), load(b))) })
            }
            (BinaryKernel::And, _) => Some(unsafe { store(_mm_and_si128(load(a), load(b))) }),
            // `_mm_andnot_si128(x, y)` computes `!x & y`; the kernel wants
            // `a & !b`, so the arguments swap.
            (BinaryKernel::AndNot, _) => Some(unsafe { store(_mm_andnot_si128(load(b), load(a))) }),
            (BinaryKernel::Or, _) => Some(unsafe { store(_mm_or_si128(load(a), load(b))) }),
            (BinaryKernel::Xor, _) => Some(unsafe { store(_mm_xor_si128(load(a), load(b))) }),
            _ => None,
        }
    }

    fn shift(&self, op: ShiftKernel, kind: ElemKind, a: &[u8; 16], amount: u32) -> Option<[u8; 16]> {
        // The caller reduces `amount` modulo the lane width. 8-bit lanes
        // have no shift instruction and stay on the per-lane path.
        let count = unsafe { _mm_cvtsi32_si128(amount as i32) };
        match (op, kind) {
            (ShiftKernel::Shl, ElemKind::I16) => Some(unsafe { store(_mm_sll_epi16(load(a), count)) }),
            (ShiftKernel::Shl, ElemKind::I32) => Some(unsafe { store(_mm_sll_epi32(load(a), count)) }),
            (ShiftKernel::Shl, ElemKind::I64) => Some(unsafe { store(_mm_sll_epi64(load(a), count)) }),
            (ShiftKernel::LogicalShr, ElemKind::I16) => {
                Some(unsafe { store(_mm_srl_epi16(load(a), count)) })
            }
            (ShiftKernel::LogicalShr, ElemKind::I32) => {
                Some(unsafe { store(_mm_srl_epi32(load(a), count)) })
            }
            (ShiftKernel::LogicalShr, ElemKind::I64) => {
                Some(unsafe { store(_mm_srl_epi64(load(a), count)) })
            }
            (ShiftKernel::ArithmeticShr, ElemKind::I16) => {
                Some(unsafe { store(_mm_sra_epi16(load(a), count)) })
            }
            (ShiftKernel::ArithmeticShr, ElemKind::I32) => {
                Some(unsafe { store(_mm_sra_epi32(load(a), count)) })
            }
            // 64-bit arithmetic shift right is AVX-512 only.
            _ => None,
        }
    }

    fn compare(
        &self,
        op: CompareKernel,
        kind: ElemKind,
        a: &[u8; 16],
        b: &[u8; 16],
    ) -> Option<[u8; 16]> {
        match (op, kind) {
            (CompareKernel::Eq, ElemKind::I8) => {
                Some(unsafe { store(_mm_cmpeq_epi8(load(a), load(b))) })
            }
            (CompareKernel::Eq, ElemKind::I16) => {
                Some(unsafe { store(_mm_cmpeq_epi16(load(a), load(b))) })
            }
            (CompareKernel::Eq, ElemKind::I32) => {
                Some(unsafe { store(_mm_cmpeq_epi32(load(a), load(b))) })
            }
            (CompareKernel::Eq, ElemKind::I64) if self.has_avx2 => {
                Some(unsafe { store(_mm_cmpeq_epi64(load(a), load(b))) })
            }
            (CompareKernel::Ne, ElemKind::I8) => {
                Some(unsafe { store(invert(_mm_cmpeq_epi8(load(a), load(b)))) })
            }
            (CompareKernel::Ne, ElemKind::I16) => {
                Some(unsafe { store(invert(_mm_cmpeq_epi16(load(a), load(b)))) })
            }
            (CompareKernel::Ne, ElemKind::I32) => {
                Some(unsafe { store(invert(_mm_cmpeq_epi32(load(a), load(b)))) })
            }
            (CompareKernel::Ne, ElemKind::I64) if self.has_avx2 => {
                Some(unsafe { store(invert(_mm_cmpeq_epi64(load(a), load(b)))) })
            }
            (CompareKernel::Gt, ElemKind::I8) => {
                Some(unsafe { store(_mm_cmpgt_epi8(load(a), load(b))) })
            }
            (CompareKernel::Gt, ElemKind::I16) => {
                Some(unsafe { store(_mm_cmpgt_epi16(load(a), load(b))) })
            }
            (CompareKernel::Gt, ElemKind::I32) => {
                Some(unsafe { store(_mm_cmpgt_epi32(load(a), load(b))) })
            }
            (CompareKernel::Gt, ElemKind::I64) if self.has_avx2 => {
                Some(unsafe { store(_mm_cmpgt_epi64(load(a), load(b))) })
            }
            (CompareKernel::Lt, ElemKind::I8) => {
                Some(unsafe { store(_mm_cmpgt_epi8(load(b), load(a))) })
            }
            (CompareKernel::Lt, ElemKind::I16) => {
                Some(unsafe { store(_mm_cmpgt_epi16(load(b), load(a))) })
            }
            (CompareKernel::Lt, ElemKind::I32) => {
                Some(unsafe { store(_mm_cmpgt_epi32(load(b), load(a))) })
            }
            (CompareKernel::Lt, ElemKind::I64) if self.has_avx2 => {
                Some(unsafe { store(_mm_cmpgt_epi64(load(b), load(a))) })
            }
            (CompareKernel::Le, ElemKind::I8) => {
                Some(unsafe { store(invert(_mm_cmpgt_epi8(load(a), load(b)))) })
            }
            (CompareKernel::Le, ElemKind::I16) => {
                Some(unsafe { store(invert(_mm_cmpgt_epi16(load(a), load(b)))) })
            }
            (CompareKernel::Le, ElemKind::I32) => {
                Some(unsafe { store(invert(_mm_cmpgt_epi32(load(a), load(b)))) })
            }
            (CompareKernel::Le, ElemKind::I64) if self.has_avx2 => {
                Some(unsafe { store(invert(_mm_cmpgt_epi64(load(a), load(b)))) })
            }
            (CompareKernel::Ge, ElemKind::I8) => {
                Some(unsafe { store(invert(_mm_cmpgt_epi8(load(b), load(a)))) })
            }
            (CompareKernel::Ge, ElemKind::I16) => {
                Some(unsafe { store(invert(_mm_cmpgt_epi16(load(b), load(a)))) })
            }
            (CompareKernel::Ge, ElemKind::I32) => {
                Some(unsafe { store(invert(_mm_cmpgt_epi32(load(b), load(a)))) })
            }
            (CompareKernel::Ge, ElemKind::I64) if self.has_avx2 => {
                Some(unsafe { store(invert(_mm_cmpgt_epi64(load(b), load(a)))) })
            }
            // Float predicates are the ordered forms except Ne, which is
            // true on unordered input, matching scalar `!=`.
            (CompareKernel::Eq, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_cmpeq_ps(load_ps(a), load_ps(b))) })
            }
            (CompareKernel::Ne, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_cmpneq_ps(load_ps(a), load_ps(b))) })
            }
            (CompareKernel::Lt, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_cmplt_ps(load_ps(a), load_ps(b))) })
            }
            (CompareKernel::Le, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_cmple_ps(load_ps(a), load_ps(b))) })
            }
            (CompareKernel::Gt, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_cmpgt_ps(load_ps(a), load_ps(b))) })
            }
            (CompareKernel::Ge, ElemKind::F32) => {
                Some(unsafe { store_ps(_mm_cmpge_ps(load_ps(a), load_ps(b))) })
            }
            (CompareKernel::Eq, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_cmpeq_pd(load_pd(a), load_pd(b))) })
            }
            (CompareKernel::Ne, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_cmpneq_pd(load_pd(a), load_pd(b))) })
            }
            (CompareKernel::Lt, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_cmplt_pd(load_pd(a), load_pd(b))) })
            }
            (CompareKernel::Le, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_cmple_pd(load_pd(a), load_pd(b))) })
            }
            (CompareKernel::Gt, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_cmpgt_pd(load_pd(a), load_pd(b))) })
            }
            (CompareKernel::Ge, ElemKind::F64) => {
                Some(unsafe { store_pd(_mm_cmpge_pd(load_pd(a), load_pd(b))) })
            }
            _ => None,
        }
    }

    fn select_bits(&self, a: &[u8; 16], b: &[u8; 16], c: &[u8; 16]) -> Option<[u8; 16]> {
        // Result bit = c ? b : a, i.e. (b & c) | (a & !c).
        Some(unsafe {
            let c_vec = load(c);
            let picked_b = _mm_and_si128(c_vec, load(b));
            let picked_a = _mm_andnot_si128(c_vec, load(a));
            store(_mm_or_si128(picked_b, picked_a))
        })
    }

    fn fused_multiply_add(
        &self,
        kind: ElemKind,
        a: &[u8; 16],
        b: &[u8; 16],
        c: &[u8; 16],
    ) -> Option<[u8; 16]> {
        // Without the FMA unit there is no single-rounding a*b+c here;
        // mul-then-add rounds twice and is declined.
        if !self.has_fma {
            return None;
        }
        match kind {
            ElemKind::F32 => {
                Some(unsafe { store_ps(_mm_fmadd_ps(load_ps(a), load_ps(b), load_ps(c))) })
            }
            ElemKind::F64 => {
                Some(unsafe { store_pd(_mm_fmadd_pd(load_pd(a), load_pd(b), load_pd(c))) })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i8_block(vals: [i8; 16]) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (slot, v) in out.iter_mut().zip(vals) {
            *slot = v as u8;
        }
        out
    }

    fn i32_block(vals: [i32; 4]) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (chunk, v) in out.chunks_exact_mut(4).zip(vals) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
        out
    }

    fn i32_lanes(block: [u8; 16]) -> [i32; 4] {
        let mut out = [0i32; 4];
        for (slot, chunk) in out.iter_mut().zip(block.chunks_exact(4)) {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(chunk);
            *slot = i32::from_le_bytes(bytes);
        }
        out
    }

    fn f32_block(vals: [f32; 4]) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (chunk, v) in out.chunks_exact_mut(4).zip(vals) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
        out
    }

    #[test]
    fn sse2_i8_add_wraps() {
        let p = X86Accel::new_sse2();
        let a = i8_block([127, -128, 1, -1, 0, 50, -50, 100, 0, 0, 0, 0, 0, 0, 0, 0]);
        let b = i8_block([1, -1, -1, 1, 0, 50, -50, 100, 0, 0, 0, 0, 0, 0, 0, 0]);
        let got = p.binary(BinaryKernel::Add, ElemKind::I8, &a, &b);
        let want = i8_block([-128, 127, 0, 0, 0, 100, -100, -56, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(got, Some(want));
    }

    #[test]
    fn sse2_i32_mul_emulation_matches_scalar() {
        let p = X86Accel::new_sse2();
        let xs = [i32::MIN, -7, 123_456_789, i32::MAX];
        let ys = [3, -11, -987_654, i32::MAX];
        let got = p.binary(BinaryKernel::Mul, ElemKind::I32, &i32_block(xs), &i32_block(ys));
        assert!(got.is_some());
        if let Some(block) = got {
            let lanes = i32_lanes(block);
            for i in 0..4 {
                assert_eq!(lanes[i], xs[i].wrapping_mul(ys[i]));
            }
        }
    }

    #[test]
    fn i64_mul_wraps_through_lanes() {
        let p = X86Accel::new_sse2();
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        a[0..8].copy_from_slice(&i64::MAX.to_le_bytes());
        a[8..16].copy_from_slice(&(-3i64).to_le_bytes());
        b[0..8].copy_from_slice(&2i64.to_le_bytes());
        b[8..16].copy_from_slice(&7i64.to_le_bytes());
        let got = p.binary(BinaryKernel::Mul, ElemKind::I64, &a, &b);
        assert!(got.is_some());
        if let Some(block) = got {
            let mut lo = [0u8; 8];
            lo.copy_from_slice(&block[0..8]);
            assert_eq!(i64::from_le_bytes(lo), i64::MAX.wrapping_mul(2));
            let mut hi = [0u8; 8];
            hi.copy_from_slice(&block[8..16]);
            assert_eq!(i64::from_le_bytes(hi), -21);
        }
    }

    #[test]
    fn compare_lanes_saturate_to_all_ones() {
        let p = X86Accel::new_sse2();
        let a = i32_block([1, 5, -3, 0]);
        let b = i32_block([1, 4, -3, 9]);
        let got = p.compare(CompareKernel::Eq, ElemKind::I32, &a, &b);
        let want = i32_block([-1, 0, -1, 0]);
        assert_eq!(got, Some(want));
    }

    #[test]
    fn lt_is_swapped_gt() {
        let p = X86Accel::new_sse2();
        let a = i32_block([1, 5, -3, 0]);
        let b = i32_block([2, 4, -3, -7]);
        let got = p.compare(CompareKernel::Lt, ElemKind::I32, &a, &b);
        let want = i32_block([-1, 0, 0, 0]);
        assert_eq!(got, Some(want));
    }

    #[test]
    fn shift_uses_uniform_amount() {
        let p = X86Accel::new_sse2();
        let a = i32_block([1, -8, 256, i32::MIN]);
        let got = p.shift(ShiftKernel::ArithmeticShr, ElemKind::I32, &a, 2);
        let want = i32_block([0, -2, 64, i32::MIN >> 2]);
        assert_eq!(got, Some(want));
    }

    #[test]
    fn float_neg_flips_sign_bit_of_nan() {
        let p = X86Accel::new_sse2();
        let a = f32_block([f32::NAN, -0.0, 1.5, f32::INFINITY]);
        let got = p.unary(UnaryKernel::Neg, ElemKind::F32, &a);
        assert!(got.is_some());
        if let Some(block) = got {
            let mut bytes = [0u8; 4];
            bytes.copy_from_slice(&block[0..4]);
            let lane0 = f32::from_le_bytes(bytes);
            assert!(lane0.is_nan());
            assert!(lane0.is_sign_negative());
        }
    }

    #[test]
    fn baseline_declines_advanced_claims() {
        let p = X86Accel::new_sse2();
        let block = [0u8; 16];
        assert!(p.unary(UnaryKernel::Abs, ElemKind::I8, &block).is_none());
        assert!(
            p.binary(BinaryKernel::MinSigned, ElemKind::I32, &block, &block)
                .is_none()
        );
        assert!(
            p.compare(CompareKernel::Eq, ElemKind::I64, &block, &block)
                .is_none()
        );
        assert!(
            p.fused_multiply_add(ElemKind::F32, &block, &block, &block)
                .is_none()
        );
    }

    #[test]
    fn float_min_max_are_never_claimed() {
        let p = X86Accel::new_avx2_fma();
        let block = [0u8; 16];
        for op in [BinaryKernel::MinSigned, BinaryKernel::MaxSigned] {
            assert!(p.binary(op, ElemKind::F32, &block, &block).is_none());
            assert!(p.binary(op, ElemKind::F64, &block, &block).is_none());
        }
    }

    #[test]
    #[cfg(feature = "std")]
    fn avx2_claims_match_scalar_where_supported() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        let p = X86Accel::new_avx2();
        let xs = [i32::MIN, -7, 0, i32::MAX];
        let ys = [3, -11, 0, 1];
        let got = p.binary(BinaryKernel::MinSigned, ElemKind::I32, &i32_block(xs), &i32_block(ys));
        assert!(got.is_some());
        if let Some(block) = got {
            let lanes = i32_lanes(block);
            for i in 0..4 {
                assert_eq!(lanes[i], xs[i].min(ys[i]));
            }
        }
    }

    #[test]
    fn select_bits_mixes_per_bit() {
        let p = X86Accel::new_sse2();
        let a = [0x00u8; 16];
        let b = [0xFFu8; 16];
        let mut c = [0x0Fu8; 16];
        c[15] = 0xAA;
        let got = p.select_bits(&a, &b, &c);
        assert!(got.is_some());
        if let Some(block) = got {
            assert_eq!(block[0], 0x0F);
            assert_eq!(block[15], 0xAA);
        }
    }
}
