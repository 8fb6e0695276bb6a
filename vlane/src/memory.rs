// VLANE - vlane
// Module: Memory Transfers
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounded transfers between vectors and element slices, byte images and
//! boolean slices.
//!
//! All transfers validate before touching any lane, so a failed operation
//! leaves the destination untouched. Masked forms check bounds only for
//! mask-true lanes: masked-off reads substitute zero and masked-off writes
//! are skipped, which is what makes the loop-tail idiom with
//! [`Mask::index_in_range`] work on short slices.

use vlane_error::{helpers, Result};

use crate::lane::Lane;
use crate::mask::Mask;
use crate::vector::Vector;

/// Byte order of a vector's byte image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl<E: Lane, const N: usize> Vector<E, N> {
    /// Load `N` elements starting at `offset`.
    pub fn from_slice(source: &[E], offset: usize) -> Result<Self> {
        if !range_fits(source.len(), offset, N) {
            return Err(helpers::array_range_error("source slice too short"));
        }
        Ok(Self::from_fn(|i| source[offset + i]))
    }

    /// Masked load: mask-true lanes are loaded and bounds-checked,
    /// mask-false lanes are zero.
    pub fn from_slice_masked(source: &[E], offset: usize, mask: Mask<E, N>) -> Result<Self> {
        let mut lanes = [E::ZERO; N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask.lanes[i] {
                *lane = *checked_elem(source, offset, i)?;
            }
        }
        Ok(Self { lanes })
    }

    /// Store all lanes starting at `offset`.
    pub fn into_slice(self, dest: &mut [E], offset: usize) -> Result<()> {
        if !range_fits(dest.len(), offset, N) {
            return Err(helpers::array_range_error("destination slice too short"));
        }
        for (i, lane) in self.lanes.iter().enumerate() {
            dest[offset + i] = *lane;
        }
        Ok(())
    }

    /// Masked store: mask-true lanes are written and bounds-checked,
    /// mask-false lanes are skipped. Nothing is written on error.
    pub fn into_slice_masked(self, dest: &mut [E], offset: usize, mask: Mask<E, N>) -> Result<()> {
        for i in 0..N {
            if mask.lanes[i] {
                checked_elem(dest, offset, i)?;
            }
        }
        for i in 0..N {
            if mask.lanes[i] {
                dest[offset + i] = self.lanes[i];
            }
        }
        Ok(())
    }

    /// Gather: lane `i` loads `source[offset + map[map_offset + i]]`.
    pub fn from_slice_gather(
        source: &[E],
        offset: usize,
        map: &[i32],
        map_offset: usize,
    ) -> Result<Self> {
        Self::from_slice_gather_masked(source, offset, map, map_offset, Mask::ALL_TRUE)
    }

    /// Masked gather: mask-false lanes are zero and their map entries are
    /// neither read nor validated.
    pub fn from_slice_gather_masked(
        source: &[E],
        offset: usize,
        map: &[i32],
        map_offset: usize,
        mask: Mask<E, N>,
    ) -> Result<Self> {
        let mut lanes = [E::ZERO; N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask.lanes[i] {
                *lane = source[gather_index(source.len(), offset, map, map_offset, i)?];
            }
        }
        Ok(Self { lanes })
    }

    /// Scatter: lane `i` stores to `dest[offset + map[map_offset + i]]`.
    /// Lanes are written in order, so on duplicate indices the last lane
    /// wins.
    pub fn into_slice_scatter(
        self,
        dest: &mut [E],
        offset: usize,
        map: &[i32],
        map_offset: usize,
    ) -> Result<()> {
        self.into_slice_scatter_masked(dest, offset, map, map_offset, Mask::ALL_TRUE)
    }

    /// Masked scatter: mask-false lanes are skipped and their map entries
    /// are neither read nor validated. Nothing is written on error.
    pub fn into_slice_scatter_masked(
        self,
        dest: &mut [E],
        offset: usize,
        map: &[i32],
        map_offset: usize,
        mask: Mask<E, N>,
    ) -> Result<()> {
        let mut targets = [0usize; N];
        for (i, target) in targets.iter_mut().enumerate() {
            if mask.lanes[i] {
                *target = gather_index(dest.len(), offset, map, map_offset, i)?;
            }
        }
        for i in 0..N {
            if mask.lanes[i] {
                dest[targets[i]] = self.lanes[i];
            }
        }
        Ok(())
    }

    /// Load the `N * W/8`-byte image starting at `offset`, in the given
    /// byte order.
    pub fn from_bytes(source: &[u8], offset: usize, order: ByteOrder) -> Result<Self> {
        if !range_fits(source.len(), offset, E::BYTES * N) {
            return Err(helpers::memory_range_error("byte image out of bounds"));
        }
        Ok(Self::from_fn(|i| {
            read_elem::<E>(&source[offset + i * E::BYTES..], order)
        }))
    }

    /// Masked byte-image load: each mask-true lane's byte range is
    /// checked; mask-false lanes are zero.
    pub fn from_bytes_masked(
        source: &[u8],
        offset: usize,
        order: ByteOrder,
        mask: Mask<E, N>,
    ) -> Result<Self> {
        let mut lanes = [E::ZERO; N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask.lanes[i] {
                let at = lane_byte_range::<E>(source.len(), offset, i)?;
                *lane = read_elem::<E>(&source[at..], order);
            }
        }
        Ok(Self { lanes })
    }

    /// Store the byte image starting at `offset`, in the given byte order.
    pub fn into_bytes(self, dest: &mut [u8], offset: usize, order: ByteOrder) -> Result<()> {
        if !range_fits(dest.len(), offset, E::BYTES * N) {
            return Err(helpers::memory_range_error("byte image out of bounds"));
        }
        for (i, lane) in self.lanes.iter().enumerate() {
            write_elem(*lane, &mut dest[offset + i * E::BYTES..], order);
        }
        Ok(())
    }

    /// Masked byte-image store: mask-true lanes are written and checked,
    /// mask-false lanes leave their bytes alone. Nothing is written on
    /// error.
    pub fn into_bytes_masked(
        self,
        dest: &mut [u8],
        offset: usize,
        order: ByteOrder,
        mask: Mask<E, N>,
    ) -> Result<()> {
        for i in 0..N {
            if mask.lanes[i] {
                lane_byte_range::<E>(dest.len(), offset, i)?;
            }
        }
        for i in 0..N {
            if mask.lanes[i] {
                write_elem(self.lanes[i], &mut dest[offset + i * E::BYTES..], order);
            }
        }
        Ok(())
    }

    /// Load booleans as 0/1 lane values.
    pub fn from_bools(source: &[bool], offset: usize) -> Result<Self> {
        if !range_fits(source.len(), offset, N) {
            return Err(helpers::array_range_error("boolean slice too short"));
        }
        Ok(Self::from_fn(|i| {
            if source[offset + i] { E::ONE } else { E::ZERO }
        }))
    }

    /// Masked boolean load; mask-false lanes are zero.
    pub fn from_bools_masked(source: &[bool], offset: usize, mask: Mask<E, N>) -> Result<Self> {
        let mut lanes = [E::ZERO; N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            if mask.lanes[i] && *checked_elem(source, offset, i)? {
                *lane = E::ONE;
            }
        }
        Ok(Self { lanes })
    }

    /// Store each lane's numeric `!= 0` as a boolean.
    pub fn into_bools(self, dest: &mut [bool], offset: usize) -> Result<()> {
        if !range_fits(dest.len(), offset, N) {
            return Err(helpers::array_range_error("boolean slice too short"));
        }
        for (i, lane) in self.lanes.iter().enumerate() {
            dest[offset + i] = *lane != E::ZERO;
        }
        Ok(())
    }

    /// Masked boolean store; mask-false lanes are skipped. Nothing is
    /// written on error.
    pub fn into_bools_masked(self, dest: &mut [bool], offset: usize, mask: Mask<E, N>) -> Result<()> {
        for i in 0..N {
            if mask.lanes[i] {
                checked_elem(dest, offset, i)?;
            }
        }
        for i in 0..N {
            if mask.lanes[i] {
                dest[offset + i] = self.lanes[i] != E::ZERO;
            }
        }
        Ok(())
    }
}

fn range_fits(len: usize, offset: usize, span: usize) -> bool {
    offset.checked_add(span).is_some_and(|end| end <= len)
}

fn checked_elem<T>(slice: &[T], offset: usize, i: usize) -> Result<&T> {
    offset
        .checked_add(i)
        .and_then(|at| slice.get(at))
        .ok_or_else(|| helpers::array_range_error("lane index past the slice"))
}

fn gather_index(
    len: usize,
    offset: usize,
    map: &[i32],
    map_offset: usize,
    i: usize,
) -> Result<usize> {
    let entry = map_offset
        .checked_add(i)
        .and_then(|at| map.get(at))
        .copied()
        .ok_or_else(|| helpers::index_map_error("index map too short"))?;
    let effective = offset as i64 + i64::from(entry);
    if effective >= 0 && effective < len as i64 {
        Ok(effective as usize)
    } else {
        Err(helpers::index_map_error("mapped index out of bounds"))
    }
}

fn lane_byte_range<E: Lane>(len: usize, offset: usize, i: usize) -> Result<usize> {
    let at = offset.checked_add(i * E::BYTES);
    match at {
        Some(at) if range_fits(len, at, E::BYTES) => Ok(at),
        _ => Err(helpers::memory_range_error("lane bytes out of bounds")),
    }
}

fn read_elem<E: Lane>(bytes: &[u8], order: ByteOrder) -> E {
    match order {
        ByteOrder::Little => E::read_le(bytes),
        ByteOrder::Big => E::read_be(bytes),
    }
}

fn write_elem<E: Lane>(value: E, out: &mut [u8], order: ByteOrder) {
    match order {
        ByteOrder::Little => value.write_le(out),
        ByteOrder::Big => value.write_be(out),
    }
}
