//! Sine and cosine by piecewise linear extrapolation.

use crate::{Q15, Q16};

mod table;

pub use table::SINE_SEGMENTS;

/// One straight line piece of a [`SegmentTable`], valid across 1/256 of the
/// input range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Rise across the whole segment
    pub slope: Q15,
    /// Value at the start of the segment
    pub intercept: Q15,
}

/// 256 linear segments approximating a periodic function over `[-1, 1)`.
///
/// The upper byte of the input's two's complement bit pattern picks the
/// segment, so the table wraps around naturally: entry 0 starts at 0, entry
/// 127 ends just below 1, entry 128 starts at -1 and entry 255 ends just below
/// 0. A table with a different fit can be substituted without changing the
/// evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentTable(pub [Segment; 256]);

impl SegmentTable {
    /// Evaluates `intercept + slope * frac` for the segment containing `x`,
    /// where `frac` is the position within the segment in steps of 1/256.
    ///
    /// The product is truncated the same way as [`Q15::mul_q16`], there is no
    /// further rounding, and the sum wraps.
    #[must_use]
    pub fn eval(&self, x: Q15) -> Q15 {
        let bits = x.to_raw() as u16;

        let segment = self.0[usize::from(bits >> 8)];
        let frac = Q16::from_raw(bits << 8);

        segment.intercept + segment.slope.mul_q16(frac)
    }
}

impl Q15 {
    /// Calculates `sin(pi * x)`, mapping `[-1, 1)` onto `[-pi, pi)`.
    ///
    /// The result stays within 5 LSB of the exact value and peaks at
    /// `±32767`.
    ///
    /// ```
    /// # use qfixnum::Q15;
    /// assert_eq!(Q15::ZERO.sin(), Q15::ZERO);
    /// assert_eq!(Q15::from_raw(0x4000).sin(), Q15::MAX);      // pi / 2
    /// assert_eq!(Q15::from_raw(-0x4000).sin(), -Q15::MAX);    // -pi / 2
    /// assert_eq!(Q15::MIN.sin(), Q15::ZERO);                  // -pi
    /// ```
    #[must_use]
    pub fn sin(self) -> Q15 {
        SINE_SEGMENTS.eval(self)
    }

    /// Calculates `cos(pi * x)` as `sin(pi * (x + 1/2))`, with the phase
    /// wrapping around at 1.
    ///
    /// ```
    /// # use qfixnum::Q15;
    /// assert_eq!(Q15::ZERO.cos(), Q15::MAX);
    /// assert_eq!(Q15::from_raw(0x4000).cos(), Q15::ZERO);
    /// assert_eq!(Q15::MIN.cos(), -Q15::MAX);
    /// ```
    #[must_use]
    pub fn cos(self) -> Q15 {
        (self + Q15::from_raw(0x4000)).sin()
    }
}

#[cfg(test)]
mod test {
    use core::f64::consts::PI;

    use super::*;

    fn exact_sin(raw: i16) -> f64 {
        (f64::from(raw) / 32768.0 * PI).sin() * 32768.0
    }

    #[test]
    fn sine_of_cardinal_points() {
        let cases = [
            (0, 0),
            (0x2000, 23170),
            (0x4000, 32767),
            (0x6000, 23170),
            (-0x2000, -23170),
            (-0x4000, -32767),
            (-0x6000, -23170),
            (i16::MIN, 0),
        ];

        for (x, expected) in cases {
            assert_eq!(Q15::from_raw(x).sin(), Q15::from_raw(expected), "x = {x:#x}");
        }
    }

    #[test]
    fn sine_is_close_to_exact_everywhere() {
        for raw in i16::MIN..=i16::MAX {
            let error = (f64::from(Q15::from_raw(raw).sin().to_raw()) - exact_sin(raw)).abs();
            assert!(error < 5.0, "x = {raw:#x} off by {error}");
        }
    }

    #[test]
    fn sine_never_leaves_unit_range() {
        for raw in i16::MIN..=i16::MAX {
            let y = Q15::from_raw(raw).sin().to_raw();
            assert!((-32767..=32767).contains(&y), "x = {raw:#x} gave {y}");
        }
    }

    #[test]
    fn sine_is_monotonic_on_rising_half() {
        let mut previous = Q15::from_raw(-0x4000).sin();

        for raw in -0x3FFF..=0x4000 {
            let current = Q15::from_raw(raw).sin();
            assert!(current >= previous, "x = {raw:#x}");
            previous = current;
        }
    }

    #[test]
    fn sine_returns_intercepts_on_segment_starts() {
        for idx in 0..256_u16 {
            let x = Q15::from_raw((idx << 8) as i16);
            assert_eq!(x.sin(), SINE_SEGMENTS.0[usize::from(idx)].intercept);
        }
    }

    #[test]
    fn sine_truncates_in_segment_product() {
        // 804 * 1/256 = 3.14, truncated
        assert_eq!(Q15::from_raw(1).sin(), Q15::from_raw(3));
        // -804 + 804 * 255/256 = -3.14, truncated towards negative infinity
        assert_eq!(Q15::from_raw(-1).sin(), Q15::from_raw(-4));
        assert_eq!(Q15::from_raw(100).sin(), Q15::from_raw(314));
    }

    #[test]
    fn cosine_is_shifted_sine() {
        for raw in (i16::MIN..=i16::MAX).step_by(3) {
            let x = Q15::from_raw(raw);
            assert_eq!(x.cos(), Q15::from_raw(raw.wrapping_add(0x4000)).sin());
        }

        assert_eq!(Q15::from_raw(0x2000).cos(), Q15::from_raw(23170));
    }

    #[test]
    fn substituted_table_is_evaluated_the_same_way() {
        // every segment rises by 1/128 from its own start, giving the identity
        let identity = SegmentTable(core::array::from_fn(|i| Segment {
            slope: Q15::from_raw(256),
            intercept: Q15::from_raw((i << 8) as u16 as i16),
        }));

        for raw in i16::MIN..=i16::MAX {
            let x = Q15::from_raw(raw);
            assert_eq!(identity.eval(x), x);
        }
    }
}
