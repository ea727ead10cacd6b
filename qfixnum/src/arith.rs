//! Absolute value, multiplication and division.
//!
//! Every multiply computes the full width product and keeps only the bits of
//! the result format. Nothing here rounds and nothing checks for overflow:
//! signed results truncate towards negative infinity and integer overflow in
//! the 32 bit formats wraps.

use core::ops::{Div, Mul, MulAssign};

use crate::{Q15, Q16, Q32, Q1616, SplitWord};

impl Q15 {
    /// Absolute value where `-1` (the one value without a positive
    /// counterpart) maps to [`Q15::MAX`] instead of wrapping back to itself.
    ///
    /// ```
    /// # use qfixnum::Q15;
    /// assert_eq!(Q15::from_raw(-1234).saturating_abs(), Q15::from_raw(1234));
    /// assert_eq!(Q15::MIN.saturating_abs(), Q15::MAX);
    /// ```
    #[must_use]
    pub fn saturating_abs(self) -> Self {
        Q15::from_raw(self.to_raw().saturating_abs())
    }

    /// Q0.15 × Q0.15, truncated to Q0.15.
    ///
    /// `-1 × -1` does not fit and wraps to `-1`.
    #[must_use]
    pub fn mul_q15(self, rhs: Q15) -> Q15 {
        let product = i32::from(self.to_raw()) * i32::from(rhs.to_raw());

        Q15::from_raw((product >> 15) as i16)
    }

    /// Q0.15 × Q0.16, truncated to Q0.15.
    ///
    /// ```
    /// # use qfixnum::{Q15, Q16};
    /// let x = Q15::from_raw(-0x4000); // -0.5
    /// assert_eq!(x.mul_q16(Q16::HALF), Q15::from_raw(-0x2000));
    /// ```
    #[must_use]
    pub fn mul_q16(self, rhs: Q16) -> Q15 {
        let product = i32::from(self.to_raw()) * i32::from(rhs.to_raw());

        Q15::from_raw((product >> 16) as i16)
    }

    /// Q0.15 × Q16.16, truncated to Q0.15. The result isn't clipped, so the
    /// caller must make sure it lies in `[-1, 1)`.
    #[must_use]
    pub fn mul_q1616(self, rhs: Q1616) -> Q15 {
        // integer half contributes whole Q0.15 units, only its low 16 bits survive
        let integer = (i32::from(self.to_raw()) * i32::from(rhs.high())) as i16;

        let fraction = self.mul_q16(Q16::from_raw(rhs.low()));

        Q15::from_raw(integer.wrapping_add(fraction.to_raw()))
    }
}

impl Q16 {
    /// Q0.16 × Q0.16, truncated to Q0.16. The result never exceeds the exact
    /// product.
    ///
    /// ```
    /// # use qfixnum::Q16;
    /// assert_eq!(Q16::HALF.mul_q16(Q16::HALF), Q16::from_raw(0x4000));
    /// assert_eq!(Q16::MAX.mul_q16(Q16::MAX), Q16::from_raw(0xFFFE));
    /// ```
    #[must_use]
    pub fn mul_q16(self, rhs: Q16) -> Q16 {
        let product = u32::from(self.to_raw()) * u32::from(rhs.to_raw());

        Q16::from_raw((product >> 16) as u16)
    }

    /// Divides two Q0.16 numbers giving a Q16.16 quotient, truncated.
    ///
    /// The quotient is `(self << 16) / den` computed on 32 bit integers, which
    /// is always in range since the numerator has only 16 significant bits.
    ///
    /// # Panics
    /// In debug builds if `den` is zero. Release builds don't check, so use
    /// [`Q16::checked_div_q16`] if the denominator can be zero.
    ///
    /// ```
    /// # use qfixnum::{Q16, Q1616};
    /// let third = Q16::from_raw(0x5555);
    /// assert_eq!(Q16::HALF.div_q16(third), Q1616::from_raw(0x0001_8001));
    /// assert_eq!(third.div_q16(third), Q1616::ONE);
    /// ```
    #[must_use]
    pub fn div_q16(self, den: Q16) -> Q1616 {
        debug_assert!(den.to_raw() != 0, "division of Q0.16 by zero");

        Q1616::from_raw((u32::from(self.to_raw()) << 16) / u32::from(den.to_raw()))
    }

    /// Like [`Q16::div_q16`], but returns `None` if `den` is zero.
    #[must_use]
    pub fn checked_div_q16(self, den: Q16) -> Option<Q1616> {
        (u32::from(self.to_raw()) << 16)
            .checked_div(u32::from(den.to_raw()))
            .map(Q1616::from_raw)
    }
}

impl Q32 {
    /// Q0.32 × Q0.16, truncated to Q0.32.
    #[must_use]
    pub fn mul_q16(self, rhs: Q16) -> Q32 {
        Q32::from_raw(mul_split_q16(self.high(), self.low(), rhs))
    }

    /// Q0.32 × an integer, truncated to Q0.32: any integer part of the result
    /// is discarded, so this effectively computes the fractional part of the
    /// product.
    #[must_use]
    pub fn mul_u16(self, rhs: u16) -> Q32 {
        Q32::from_raw(mul_split_u16(self.high(), self.low(), rhs))
    }
}

impl Q1616 {
    /// Q16.16 × Q0.16, truncated to Q16.16.
    #[must_use]
    pub fn mul_q16(self, rhs: Q16) -> Q1616 {
        Q1616::from_raw(mul_split_q16(self.high(), self.low(), rhs))
    }

    /// Q16.16 × an integer, truncated to Q16.16. The integer part of the result
    /// must not exceed 65535, overflow wraps.
    #[must_use]
    pub fn mul_u16(self, rhs: u16) -> Q1616 {
        Q1616::from_raw(mul_split_u16(self.high(), self.low(), rhs))
    }

    /// Q16.16 × Q16.16, truncated to Q16.16. The integer part of the result
    /// must not exceed 65535, overflow wraps.
    ///
    /// ```
    /// # use qfixnum::{q, Q1616};
    /// let a: Q1616 = q!(1.5);
    /// let b: Q1616 = q!(2.25);
    /// assert_eq!(a.mul_q1616(b), q!(3.375));
    /// ```
    #[must_use]
    pub fn mul_q1616(self, rhs: Q1616) -> Q1616 {
        let integer = self.mul_u16(rhs.high());
        let fraction = self.mul_q16(Q16::from_raw(rhs.low()));

        integer + fraction
    }
}

/// `(high:low × rhs) >> 16` without a 64 bit product. The sum can't overflow
/// since `0xFFFF * 0xFFFF + 0xFFFE < 2^32`.
fn mul_split_q16(high: u16, low: u16, rhs: Q16) -> u32 {
    let rhs = u32::from(rhs.to_raw());

    u32::from(high) * rhs + ((u32::from(low) * rhs) >> 16)
}

/// `(high:low × rhs)` keeping the lower 32 bits
fn mul_split_u16(high: u16, low: u16, rhs: u16) -> u32 {
    let rhs = u32::from(rhs);
    let high_product = (u32::from(high) * rhs) as u16;

    (u32::from(low) * rhs).wrapping_add(u32::from(high_product) << 16)
}

/// Multiplies every element of `src` by `factor`, writing the results to `dst`.
///
/// Elements are processed in index order and each result is identical to
/// [`Q15::mul_q16`] on that element. Use [`mul_slice_q16_in_place`] when the
/// source and destination are the same buffer.
///
/// # Panics
/// In debug builds if `src` is empty or the slices differ in length. Release
/// builds only process the common prefix.
///
/// ```
/// # use qfixnum::{Q15, Q16, mul_slice_q16};
/// let src = [Q15::from_raw(0x4000), Q15::from_raw(-0x4000)];
/// let mut dst = [Q15::ZERO; 2];
///
/// mul_slice_q16(&src, Q16::HALF, &mut dst);
///
/// assert_eq!(dst, [Q15::from_raw(0x2000), Q15::from_raw(-0x2000)]);
/// ```
pub fn mul_slice_q16(src: &[Q15], factor: Q16, dst: &mut [Q15]) {
    debug_assert!(!src.is_empty(), "slice multiply needs at least one element");
    debug_assert_eq!(
        src.len(),
        dst.len(),
        "source and destination must have the same length"
    );

    for (out, &x) in dst.iter_mut().zip(src) {
        *out = x.mul_q16(factor);
    }
}

/// Multiplies every element of `buffer` by `factor` in place.
///
/// Each element is read before it is overwritten, so the result is the same as
/// [`mul_slice_q16`] with a copy of `buffer` as the source.
///
/// # Panics
/// In debug builds if `buffer` is empty.
pub fn mul_slice_q16_in_place(buffer: &mut [Q15], factor: Q16) {
    debug_assert!(!buffer.is_empty(), "slice multiply needs at least one element");

    for x in buffer.iter_mut() {
        *x = x.mul_q16(factor);
    }
}

macro_rules! mul_impl {
    ($Lhs: ty, $Rhs: ty, $method: ident) => {
        impl Mul<$Rhs> for $Lhs {
            type Output = $Lhs;
            fn mul(self, rhs: $Rhs) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl MulAssign<$Rhs> for $Lhs {
            fn mul_assign(&mut self, rhs: $Rhs) {
                *self = self.$method(rhs);
            }
        }
    };
}

mul_impl!(Q15, Q15, mul_q15);
mul_impl!(Q15, Q16, mul_q16);
mul_impl!(Q15, Q1616, mul_q1616);
mul_impl!(Q16, Q16, mul_q16);
mul_impl!(Q32, Q16, mul_q16);
mul_impl!(Q32, u16, mul_u16);
mul_impl!(Q1616, Q16, mul_q16);
mul_impl!(Q1616, u16, mul_u16);
mul_impl!(Q1616, Q1616, mul_q1616);

impl Div for Q16 {
    type Output = Q1616;
    fn div(self, rhs: Q16) -> Self::Output {
        self.div_q16(rhs)
    }
}

#[cfg(test)]
mod test {
    extern crate alloc;

    use alloc::vec::Vec;

    use quickcheck::{Arbitrary, Gen, quickcheck};

    use super::*;
    use crate::{Q1516, q};

    impl Arbitrary for Q15 {
        fn arbitrary(g: &mut Gen) -> Self {
            Q15::from_raw(i16::arbitrary(g))
        }
    }

    impl Arbitrary for Q16 {
        fn arbitrary(g: &mut Gen) -> Self {
            Q16::from_raw(u16::arbitrary(g))
        }
    }

    impl Arbitrary for Q32 {
        fn arbitrary(g: &mut Gen) -> Self {
            Q32::from_raw(u32::arbitrary(g))
        }
    }

    impl Arbitrary for Q1616 {
        fn arbitrary(g: &mut Gen) -> Self {
            Q1616::from_raw(u32::arbitrary(g))
        }
    }

    impl Arbitrary for Q1516 {
        fn arbitrary(g: &mut Gen) -> Self {
            Q1516::from_raw(i32::arbitrary(g))
        }
    }

    #[test]
    fn saturating_abs_of_every_value() {
        for raw in i16::MIN..=i16::MAX {
            let expected = if raw == i16::MIN {
                i16::MAX
            } else {
                raw.abs()
            };

            assert_eq!(Q15::from_raw(raw).saturating_abs().to_raw(), expected);
        }
    }

    #[test]
    fn q15_multiply_truncates_towards_negative_infinity() {
        // 0.5 * 2^-15 is half an LSB
        let half: Q15 = q!(0.5);
        let lsb = Q15::from_raw(1);

        assert_eq!(half * lsb, Q15::ZERO);
        assert_eq!(half * -lsb, Q15::from_raw(-1));
        assert_eq!(half * half, q!(0.25));
        assert_eq!(-half * half, q!(-0.25));
    }

    #[test]
    fn q15_multiply_of_minus_one_squared_wraps() {
        assert_eq!(Q15::MIN * Q15::MIN, Q15::MIN);
        assert_eq!(Q15::MIN * Q15::MAX, Q15::from_raw(-0x7FFF));
    }

    #[test]
    fn q15_by_q16_matches_wide_product() {
        for a in (i16::MIN..=i16::MAX).step_by(7) {
            for b in (0..=u16::MAX).step_by(251) {
                let expected = ((i64::from(a) * i64::from(b)) >> 16) as i16;
                assert_eq!(Q15::from_raw(a).mul_q16(Q16::from_raw(b)).to_raw(), expected);
            }
        }
    }

    #[test]
    fn q15_by_q1616_with_integer_part() {
        let quarter: Q15 = q!(0.25);
        let three_and_half: Q1616 = q!(3.5);

        assert_eq!(quarter * three_and_half, q!(0.875));
        assert_eq!(-quarter * three_and_half, q!(-0.875));
        assert_eq!(quarter * Q1616::ONE, quarter);
    }

    #[test]
    fn q16_multiply_is_exact_for_powers_of_two() {
        let quarter: Q16 = q!(0.25);

        assert_eq!(Q16::HALF * Q16::HALF, quarter);
        assert_eq!(Q16::MAX * Q16::ZERO, Q16::ZERO);
    }

    #[test]
    fn q32_multiplies() {
        let half: Q32 = q!(0.5);
        let quarter: Q32 = q!(0.25);
        let three_quarters: Q32 = q!(0.75);

        assert_eq!(half * Q16::HALF, quarter);
        assert_eq!(quarter * 3, three_quarters);
        // 0.75 * 3 = 2.25, integer part discarded
        assert_eq!(three_quarters * 3, quarter);
        assert_eq!(Q32::MAX * Q16::MAX, Q32::from_raw(0xFFFE_FFFF));
    }

    #[test]
    fn q1616_multiplies() {
        let a: Q1616 = q!(10.5);

        assert_eq!(a * Q16::HALF, q!(5.25));
        assert_eq!(a * 4, q!(42.0));
        assert_eq!(a * a, q!(110.25));

        // 65536 wraps to 0
        let big: Q1616 = q!(32768.0);
        assert_eq!(big * 2, Q1616::ZERO);
    }

    #[test]
    fn operators_assign() {
        let mut gain = Q1616::ONE;
        gain *= 3;
        gain *= Q16::HALF;
        assert_eq!(gain, q!(1.5));

        let mut sample: Q15 = q!(0.5);
        sample *= Q16::HALF;
        assert_eq!(sample, q!(0.25));
    }

    #[test]
    fn division_of_known_values() {
        let quarter: Q16 = q!(0.25);

        assert_eq!(quarter / Q16::HALF, Q1616::from_raw(0x8000));
        assert_eq!(Q16::HALF / quarter, q!(2.0));
        assert_eq!(Q16::MAX / Q16::from_raw(1), Q1616::from_raw(0xFFFF_0000));
        assert_eq!(Q16::ZERO / Q16::MAX, Q1616::ZERO);
        // 1/3 = 0x5555.5555... of an LSB, truncated
        assert_eq!(Q16::from_raw(1) / Q16::from_raw(3), Q1616::from_raw(0x5555));
    }

    #[test]
    fn division_of_a_value_by_itself_is_one() {
        for raw in 1..=u16::MAX {
            let x = Q16::from_raw(raw);
            assert_eq!(x.div_q16(x), Q1616::ONE, "input {raw:#06x}");
        }
    }

    #[test]
    fn checked_division_rejects_zero() {
        assert_eq!(Q16::HALF.checked_div_q16(Q16::ZERO), None);
        assert_eq!(Q16::HALF.checked_div_q16(Q16::HALF), Some(Q1616::ONE));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn division_by_zero_panics_in_debug() {
        let _ = Q16::HALF.div_q16(Q16::ZERO);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn empty_slice_multiply_panics_in_debug() {
        mul_slice_q16(&[], Q16::HALF, &mut []);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn mismatched_slice_multiply_panics_in_debug() {
        let mut dst = [Q15::ZERO; 2];
        mul_slice_q16(&[Q15::MAX; 3], Q16::HALF, &mut dst);
    }

    quickcheck! {
        fn q15_multiply_matches_wide_product(a: Q15, b: Q15) -> bool {
            let expected = (i64::from(a.to_raw()) * i64::from(b.to_raw())) >> 15;
            (a * b).to_raw() == expected as i16
        }

        fn q15_by_q1616_matches_wide_product(a: Q15, b: Q1616) -> bool {
            let expected = (i64::from(a.to_raw()) * i64::from(b.to_raw())) >> 16;
            (a * b).to_raw() == expected as i16
        }

        fn q16_multiply_never_exceeds_exact_product(a: Q16, b: Q16) -> bool {
            let exact = u64::from(a.to_raw()) * u64::from(b.to_raw());
            let truncated = u64::from((a * b).to_raw()) << 16;

            truncated <= exact && exact - truncated < 1 << 16
        }

        fn q32_by_q16_matches_wide_product(a: Q32, b: Q16) -> bool {
            let expected = (u64::from(a.to_raw()) * u64::from(b.to_raw())) >> 16;
            (a * b).to_raw() == expected as u32
        }

        fn q32_by_integer_keeps_fraction(a: Q32, b: u16) -> bool {
            (a * b).to_raw() == a.to_raw().wrapping_mul(u32::from(b))
        }

        fn q1616_by_q16_matches_wide_product(a: Q1616, b: Q16) -> bool {
            let expected = (u64::from(a.to_raw()) * u64::from(b.to_raw())) >> 16;
            (a * b).to_raw() == expected as u32
        }

        fn q1616_by_integer_wraps(a: Q1616, b: u16) -> bool {
            (a * b).to_raw() == a.to_raw().wrapping_mul(u32::from(b))
        }

        fn q1616_multiply_matches_wide_product(a: Q1616, b: Q1616) -> bool {
            let expected = (u64::from(a.to_raw()) * u64::from(b.to_raw())) >> 16;
            (a * b).to_raw() == expected as u32
        }

        fn division_matches_widened_long_division(num: Q16, den: Q16) -> bool {
            if den == Q16::ZERO {
                return num.checked_div_q16(den).is_none();
            }

            let expected = (u64::from(num.to_raw()) << 16) / u64::from(den.to_raw());
            u64::from((num / den).to_raw()) == expected
        }

        fn q1516_to_q16_saturates_outside_unit_interval(x: Q1516) -> bool {
            let expected = x.to_raw().clamp(0, 0xFFFF) as u16;
            x.to_q16().to_raw() == expected
        }

        fn q1516_halves_join_back(x: Q1516) -> bool {
            Q1516::from_halves(x.high(), x.low()) == x
        }

        fn slice_multiply_matches_scalar(values: Vec<Q15>, factor: Q16) -> bool {
            if values.is_empty() {
                return true;
            }

            let mut dst = alloc::vec![Q15::ZERO; values.len()];
            mul_slice_q16(&values, factor, &mut dst);

            dst.iter().zip(&values).all(|(&out, &x)| out == x.mul_q16(factor))
        }

        fn in_place_slice_multiply_matches_copying(values: Vec<Q15>, factor: Q16) -> bool {
            if values.is_empty() {
                return true;
            }

            let mut copied = alloc::vec![Q15::ZERO; values.len()];
            mul_slice_q16(&values, factor, &mut copied);

            let mut in_place = values;
            mul_slice_q16_in_place(&mut in_place, factor);

            in_place == copied
        }
    }
}
