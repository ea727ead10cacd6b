//! Re-scaling between the formats. None of these are value preserving in
//! general, check the documentation of each one for what is lost.

use crate::{Q15, Q16, Q1516, SplitWord};

impl Q15 {
    /// Moves the binary point one place to the right, `x << 1`, filling the
    /// new least significant bit from bit 14 so that full scale maps onto full
    /// scale (`0x7FFF` becomes `0xFFFF`).
    ///
    /// Only meaningful for non-negative values. A negative input produces a
    /// wrapped value; use [`Q15::to_q16`] if the input can be negative.
    ///
    /// ```
    /// # use qfixnum::{Q15, Q16};
    /// assert_eq!(Q15::from_raw(0x2000).to_q16_naive(), Q16::from_raw(0x4000));
    /// assert_eq!(Q15::MAX.to_q16_naive(), Q16::MAX);
    /// ```
    #[must_use]
    pub fn to_q16_naive(self) -> Q16 {
        let x = i32::from(self.to_raw());

        Q16::from_raw(((x << 1) + (x >> 14)) as u16)
    }

    /// Same as [`Q15::to_q16_naive`] but negative values are clipped to zero.
    ///
    /// ```
    /// # use qfixnum::{Q15, Q16};
    /// assert_eq!(Q15::from_raw(-1).to_q16(), Q16::ZERO);
    /// assert_eq!(Q15::MAX.to_q16(), Q16::MAX);
    /// ```
    #[must_use]
    pub fn to_q16(self) -> Q16 {
        // all ones for non-negative, all zeros for negative
        let sat = !((self.to_raw() >> 15) as u16);

        Q16::from_raw(self.to_q16_naive().to_raw() & sat)
    }
}

impl Q16 {
    /// Zero extends into Q15.16. Always exact.
    #[must_use]
    pub fn to_q1516(self) -> Q1516 {
        Q1516::from_raw(i32::from(self.to_raw()))
    }

    /// Shifts right by one bit, dropping the least significant bit.
    ///
    /// This is a reinterpretation rather than a rescale: the most significant
    /// bit of the input lands in bit 14 of the result, so the result is always
    /// non-negative and the value is halved.
    ///
    /// ```
    /// # use qfixnum::{Q15, Q16};
    /// assert_eq!(Q16::from_raw(0x8001).to_q15(), Q15::from_raw(0x4000));
    /// assert_eq!(Q16::MAX.to_q15(), Q15::MAX);
    /// ```
    #[must_use]
    pub fn to_q15(self) -> Q15 {
        Q15::from_raw((self.to_raw() >> 1) as i16)
    }
}

impl Q1516 {
    /// Converts to Q0.16 if the integer part is zero, otherwise saturates:
    /// negative values become `0` and values `>= 1` become [`Q16::MAX`].
    ///
    /// ```
    /// # use qfixnum::{Q16, Q1516};
    /// assert_eq!(Q1516::from_raw(0x0000_1234).to_q16(), Q16::from_raw(0x1234));
    /// assert_eq!(Q1516::from_raw(0x0001_0000).to_q16(), Q16::MAX);
    /// assert_eq!(Q1516::from_raw(-1).to_q16(), Q16::ZERO);
    /// ```
    #[must_use]
    pub fn to_q16(self) -> Q16 {
        let high = self.high();

        if high == 0 {
            Q16::from_raw(self.low())
        } else {
            Q16::from_raw(!((high >> 15) as u16))
        }
    }
}

impl From<Q16> for Q1516 {
    fn from(value: Q16) -> Self {
        value.to_q1516()
    }
}
