// VLANE - vlane
// Module: Shape Conversions
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Value conversions and bit reinterpretations between species.
//!
//! Both families share the part rule: with source extent `A` and
//! destination extent `B` (lane counts for value conversion, byte sizes
//! for reinterpretation), the larger must be an integer multiple of the
//! smaller. A contraction (`A > B`) selects source block `part` of
//! `[0, A/B)`; an expansion (`B > A`) accepts `part` in `(-(B/A), 0]` and
//! places the source at destination block `-part`, zero-filling the rest;
//! equal extents require part 0.

use vlane_error::{helpers, Result};

use crate::lane::Lane;
use crate::ops::Conversion;
use crate::vector::Vector;

// Largest element width in bytes, the staging size for byte reassembly.
const MAX_ELEM_BYTES: usize = 8;

/// Resolve the part rule for extents `a` (source) and `b` (destination).
/// Returns source offset, destination offset and span, all in extent
/// units.
fn part_window(a: usize, b: usize, part: i32) -> Result<(usize, usize, usize)> {
    if a == b {
        return if part == 0 {
            Ok((0, 0, a))
        } else {
            Err(helpers::part_error("equal shapes take only part 0"))
        };
    }
    let (large, small) = if a > b { (a, b) } else { (b, a) };
    if large % small != 0 {
        return Err(helpers::species_not_commensurable_error(
            "shape extents are not commensurable",
        ));
    }
    let ratio = (large / small) as i64;
    if a > b {
        // Contraction: part selects the source block.
        if (0..ratio).contains(&i64::from(part)) {
            Ok((part as usize * b, 0, b))
        } else {
            Err(helpers::part_error("contraction part out of range"))
        }
    } else {
        // Expansion: non-positive part selects the destination block.
        let block = -i64::from(part);
        if (0..ratio).contains(&block) {
            Ok((0, block as usize * a, a))
        } else {
            Err(helpers::part_error("expansion part out of range"))
        }
    }
}

fn convert_lane<E: Lane, F: Lane>(value: E, conversion: Conversion) -> F {
    match conversion {
        Conversion::Cast => {
            if E::KIND.is_float() {
                F::from_f64(value.to_f64())
            } else {
                F::from_i64(value.to_i64())
            }
        }
        Conversion::UnsignedCast => F::from_u64(value.to_u64()),
    }
}

impl<E: Lane, const N: usize> Vector<E, N> {
    /// Convert every lane to element type `F`, lane count unchanged.
    pub fn convert<F: Lane>(self, conversion: Conversion) -> Result<Vector<F, N>> {
        self.convert_shape::<F, N>(conversion, 0)
    }

    /// Convert lane values into a possibly differently shaped species.
    /// `part` follows the module-level part rule over lane counts.
    pub fn convert_shape<F: Lane, const M: usize>(
        self,
        conversion: Conversion,
        part: i32,
    ) -> Result<Vector<F, M>> {
        if !conversion.applicable_to_source(E::KIND) {
            return Err(helpers::conversion_not_applicable_error(
                "unsigned cast is undefined for float sources",
            ));
        }
        let (src, dst, span) = part_window(N, M, part)?;
        let mut lanes = [F::ZERO; M];
        for i in 0..span {
            lanes[dst + i] = convert_lane::<E, F>(self.lanes[src + i], conversion);
        }
        Ok(Vector::from_array(lanes))
    }

    /// Reinterpret the little-endian lane-0-first byte image as another
    /// species. No value conversion; `part` follows the part rule over
    /// byte sizes.
    pub fn reinterpret_shape<F: Lane, const M: usize>(self, part: i32) -> Result<Vector<F, M>> {
        let (src, dst, span) = part_window(E::BYTES * N, F::BYTES * M, part)?;
        let mut lanes = [F::ZERO; M];
        for (j, lane) in lanes.iter_mut().enumerate() {
            let mut staged = [0u8; MAX_ELEM_BYTES];
            for (byte, slot) in staged.iter_mut().enumerate().take(F::BYTES) {
                // Global byte position in the destination image.
                let g = j * F::BYTES + byte;
                if g >= dst && g < dst + span {
                    let src_byte = src + (g - dst);
                    let mut image = [0u8; MAX_ELEM_BYTES];
                    self.lanes[src_byte / E::BYTES].write_le(&mut image);
                    *slot = image[src_byte % E::BYTES];
                }
            }
            *lane = F::read_le(&staged);
        }
        Ok(Vector::from_array(lanes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn casts_narrow_and_widen_per_language_rules() {
        let v = Vector::<i32, 4>::from_array([300, -1, 128, 0]);
        let narrow: Vector<i8, 4> = v.convert(Conversion::Cast).unwrap();
        assert_eq!(narrow.to_array(), [44, -1, -128, 0]);

        let wide: Vector<i64, 4> = narrow.convert(Conversion::Cast).unwrap();
        assert_eq!(wide.to_array(), [44, -1, -128, 0]);

        let floats: Vector<f32, 4> = v.convert(Conversion::Cast).unwrap();
        assert_eq!(floats.to_array(), [300.0, -1.0, 128.0, 0.0]);
    }

    #[test]
    fn float_to_int_saturates_and_zeroes_nan() {
        let v = Vector::<f32, 4>::from_array([300.5, -1e9, f32::NAN, 2.9]);
        let bytes: Vector<i8, 4> = v.convert(Conversion::Cast).unwrap();
        assert_eq!(bytes.to_array(), [127, -128, 0, 2]);

        let doubled: Vector<f64, 4> = v.convert(Conversion::Cast).unwrap();
        assert!(doubled.lane(2).unwrap().is_nan());
        assert_eq!(doubled.lane(0).unwrap(), 300.5);
    }

    #[test]
    fn unsigned_cast_widens_the_unsigned_view() {
        let v = Vector::<i8, 4>::from_array([-1, -128, 127, 0]);
        let wide: Vector<i32, 4> = v.convert(Conversion::UnsignedCast).unwrap();
        assert_eq!(wide.to_array(), [255, 128, 127, 0]);

        let floats: Vector<f32, 4> = v.convert(Conversion::UnsignedCast).unwrap();
        assert_eq!(floats.to_array(), [255.0, 128.0, 127.0, 0.0]);

        let from_float: Result<Vector<i32, 4>> =
            Vector::<f32, 4>::broadcast(1.0).convert(Conversion::UnsignedCast);
        assert!(from_float.is_err());
    }

    #[test]
    fn contraction_selects_the_source_block() {
        let v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        let front: Vector<i32, 2> = v.convert_shape(Conversion::Cast, 0).unwrap();
        assert_eq!(front.to_array(), [1, 2]);
        let back: Vector<i32, 2> = v.convert_shape(Conversion::Cast, 1).unwrap();
        assert_eq!(back.to_array(), [3, 4]);

        let too_far: Result<Vector<i32, 2>> = v.convert_shape(Conversion::Cast, 2);
        assert!(too_far.is_err());
        let negative: Result<Vector<i32, 2>> = v.convert_shape(Conversion::Cast, -1);
        assert!(negative.is_err());
    }

    #[test]
    fn expansion_places_the_block_and_zero_fills() {
        let v = Vector::<i32, 2>::from_array([7, 8]);
        let low: Vector<i32, 4> = v.convert_shape(Conversion::Cast, 0).unwrap();
        assert_eq!(low.to_array(), [7, 8, 0, 0]);
        let high: Vector<i32, 4> = v.convert_shape(Conversion::Cast, -1).unwrap();
        assert_eq!(high.to_array(), [0, 0, 7, 8]);

        let out: Result<Vector<i32, 4>> = v.convert_shape(Conversion::Cast, 1);
        assert!(out.is_err());
        let out: Result<Vector<i32, 4>> = v.convert_shape(Conversion::Cast, -2);
        assert!(out.is_err());
    }

    #[test]
    fn incommensurable_shapes_are_rejected() {
        let v = Vector::<i32, 4>::from_array([1, 2, 3, 4]);
        let odd: Result<Vector<i32, 3>> = v.convert_shape(Conversion::Cast, 0);
        assert_eq!(
            odd.unwrap_err().code,
            vlane_error::codes::SPECIES_NOT_COMMENSURABLE
        );
    }

    #[test]
    fn equal_byte_reinterpretation_is_bit_exact() {
        let v = Vector::<f32, 4>::from_array([1.0, -0.0, 0.0, 2.0]);
        let ints: Vector<i32, 4> = v.reinterpret_shape(0).unwrap();
        assert_eq!(
            ints.to_array(),
            [0x3F80_0000, i32::MIN, 0, 0x4000_0000]
        );
        let back: Vector<f32, 4> = ints.reinterpret_shape(0).unwrap();
        assert_eq!(back.to_array().map(f32::to_bits), v.to_array().map(f32::to_bits));

        let bytes: Vector<i8, 16> = v.reinterpret_shape(0).unwrap();
        assert_eq!(&bytes.to_array()[..4], &[0, 0, -128, 63]);
    }

    #[test]
    fn byte_expansion_can_straddle_destination_lanes() {
        let v = Vector::<i8, 2>::from_array([1, 2]);
        let low: Vector<i32, 2> = v.reinterpret_shape(0).unwrap();
        assert_eq!(low.to_array(), [0x0000_0201, 0]);
        // Part -1 lands the two source bytes in the middle of lane 0.
        let shifted: Vector<i32, 2> = v.reinterpret_shape(-1).unwrap();
        assert_eq!(shifted.to_array(), [0x0201_0000, 0]);
        // Part -3 fills the top of lane 1.
        let top: Vector<i32, 2> = v.reinterpret_shape(-3).unwrap();
        assert_eq!(top.to_array(), [0, 0x0201_0000]);
    }

    #[test]
    fn byte_contraction_selects_blocks() {
        let v = Vector::<i64, 2>::from_array([0x0807_0605_0403_0201, -1]);
        let front: Vector<i32, 2> = v.reinterpret_shape(0).unwrap();
        assert_eq!(front.to_array(), [0x0403_0201, 0x0807_0605]);
        let back: Vector<i32, 2> = v.reinterpret_shape(1).unwrap();
        assert_eq!(back.to_array(), [-1, -1]);
        let bad: Result<Vector<i32, 2>> = v.reinterpret_shape(2);
        assert!(bad.is_err());
    }

    #[test]
    fn part_window_rule() {
        assert_eq!(part_window(4, 4, 0).unwrap(), (0, 0, 4));
        assert!(part_window(4, 4, 1).is_err());
        assert_eq!(part_window(8, 2, 3).unwrap(), (6, 0, 2));
        assert!(part_window(8, 2, 4).is_err());
        assert_eq!(part_window(2, 8, -3).unwrap(), (0, 6, 2));
        assert!(part_window(2, 8, 1).is_err());
        assert!(part_window(3, 7, 0).is_err());
    }
}
