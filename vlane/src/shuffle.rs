// VLANE - vlane
// Module: Lane Shuffles
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Lane permutations with partially wrapped index storage.
//!
//! A shuffle stores one source-lane index per lane in the signed integer
//! type matching the element width. Stored values live in `[-N, N)`: a
//! non-negative value selects that source lane, a negative value is an
//! *exceptional* index remembering that the raw request was out of range.
//! Any raw index `r` outside `[0, N)` is stored as `r.rem_euclid(N) - N`,
//! so there are exactly `N` valid and `N` exceptional encodings and the
//! wrapped lane is recoverable by adding `N`.

use vlane_error::{helpers, Result};

use crate::lane::{IndexLane, Lane};
use crate::mask::Mask;
use crate::vector::Vector;

/// Lane permutation of a species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shuffle<E: Lane, const N: usize> {
    pub(crate) indices: [E::Index; N],
}

impl<E: Lane, const N: usize> Shuffle<E, N> {
    /// Store a raw index: identity on `[0, N)`, exceptional in `[-N, 0)`
    /// otherwise. The inline assertion rejects lane counts the index type
    /// cannot encode.
    fn partial_wrap(raw: i64) -> E::Index {
        const {
            assert!(
                N > 0 && N <= <E::Index as IndexLane>::MAX_LANES,
                "lane count exceeds the shuffle index range",
            );
        }
        let n = N as i64;
        let stored = if raw >= 0 && raw < n {
            raw
        } else {
            raw.rem_euclid(n) - n
        };
        E::Index::from_i64(stored)
    }

    /// Shuffle from `N` raw indices starting at `offset`.
    pub fn from_indices(source: &[i64], offset: usize) -> Result<Self> {
        match offset.checked_add(N) {
            Some(end) if end <= source.len() => Ok(Self {
                indices: core::array::from_fn(|i| Self::partial_wrap(source[offset + i])),
            }),
            _ => Err(helpers::array_range_error(
                "index slice too short for shuffle",
            )),
        }
    }

    /// Shuffle from a raw index array.
    #[must_use]
    pub fn from_array(raw: [i64; N]) -> Self {
        Self {
            indices: core::array::from_fn(|i| Self::partial_wrap(raw[i])),
        }
    }

    /// Shuffle with lane `i` sourcing from `f(i)`.
    pub fn from_fn(mut f: impl FnMut(usize) -> i64) -> Self {
        Self {
            indices: core::array::from_fn(|i| Self::partial_wrap(f(i))),
        }
    }

    /// The identity permutation.
    #[must_use]
    pub fn iota() -> Self {
        Self::from_fn(|i| i as i64)
    }

    /// Lane `i` sourcing from `start + i * step`, wrapping through the
    /// index encoding.
    #[must_use]
    pub fn iota_with(start: i64, step: i64) -> Self {
        Self::from_fn(|i| start.wrapping_add((i as i64).wrapping_mul(step)))
    }

    /// True where the stored index is valid (non-negative).
    #[must_use]
    pub fn lane_is_valid(self) -> Mask<E, N> {
        Mask::from_fn(|i| self.indices[i].to_i64() >= 0)
    }

    /// Resolve exceptional indices to their wrapped source lanes.
    #[must_use]
    pub fn wrap_indexes(self) -> Self {
        if N.is_power_of_two() {
            self.wrap_indexes_pow2()
        } else {
            self.wrap_indexes_general()
        }
    }

    // Stored values are two's complement, so masking with N-1 lands every
    // encoding on its wrapped lane when N is a power of two.
    fn wrap_indexes_pow2(self) -> Self {
        Self {
            indices: core::array::from_fn(|i| {
                E::Index::from_i64(self.indices[i].to_i64() & (N as i64 - 1))
            }),
        }
    }

    fn wrap_indexes_general(self) -> Self {
        Self {
            indices: core::array::from_fn(|i| {
                let stored = self.indices[i].to_i64();
                E::Index::from_i64(if stored < 0 { stored + N as i64 } else { stored })
            }),
        }
    }

    /// Permutation composition: lane `i` of the result holds
    /// `self[other[i]]`, with `other`'s exceptional lanes contributing
    /// index zero.
    #[must_use]
    pub fn rearrange(self, other: Self) -> Self {
        self.to_vector().rearrange(other).to_shuffle()
    }

    /// The stored index values as elements of the species.
    #[must_use]
    pub fn to_vector(self) -> Vector<E, N> {
        Vector::from_fn(|i| E::from_i64(self.indices[i].to_i64()))
    }

    /// Stored index of lane `i`, widened.
    pub fn lane_source(self, i: usize) -> Result<i64> {
        if i < N {
            Ok(self.indices[i].to_i64())
        } else {
            Err(helpers::lane_index_error("shuffle lane index out of range"))
        }
    }

    /// Write the stored indices, widened, into `out` starting at `offset`.
    pub fn into_array(self, out: &mut [i64], offset: usize) -> Result<()> {
        match offset.checked_add(N) {
            Some(end) if end <= out.len() => {
                for (i, idx) in self.indices.iter().enumerate() {
                    out[offset + i] = idx.to_i64();
                }
                Ok(())
            }
            _ => Err(helpers::array_range_error(
                "output slice too short for shuffle indices",
            )),
        }
    }

    /// The same permutation re-encoded for another element type.
    #[must_use]
    pub fn cast<F: Lane>(self) -> Shuffle<F, N> {
        // Stored values are already in [-N, N), on which the partial wrap
        // is the identity; routing through it re-checks the encoding fit.
        Shuffle {
            indices: core::array::from_fn(|i| {
                Shuffle::<F, N>::partial_wrap(self.indices[i].to_i64())
            }),
        }
    }
}
