use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::{OutOfRangeError, ParseQError};

/// Can be thought of having the signature `q!(float) -> impl QFormat`, the
/// target format is picked up from the surrounding type.
///
/// The literal is evaluated at compile time so the target never has to do any
/// floating point work. Fractional bits beyond the target's precision are
/// rounded towards negative infinity, so tiny negative literals become `-1` LSB.
///
/// ```
/// # use qfixnum::{q, Q15, Q16, Q1616};
/// let half: Q15 = q!(0.5);
/// assert_eq!(half.to_raw(), 0x4000);
///
/// let quarter: Q16 = q!(0.25);
/// assert_eq!(quarter.to_raw(), 0x4000);
///
/// let x: Q1616 = q!(2.25);
/// assert_eq!(x.to_raw(), 0x0002_4000);
///
/// let neg: Q15 = q!(-0.25);
/// assert_eq!(neg.to_raw(), -0x2000);
/// ```
#[macro_export]
macro_rules! q {
    ($value:expr) => {
        $crate::QFormat::new_from_parts(const {
            use $crate::__private::const_soft_float::soft_f64::SoftF64;

            let v = SoftF64($value as f64);
            let integer = v.trunc().to_f64();
            let fractional = v.sub(v.trunc()).to_f64() * (1_u64 << 32) as f64;

            (integer as i32, fractional as i64)
        })
    };
}

/// Behaviour shared by every Q-format number in this crate.
///
/// A value of a format with `F` fractional bits is stored as the integer
/// `round(value * 2^F)`. The trait mostly exists so that generic code (and the
/// [`q!`] macro) can move between the raw representation and real numbers.
pub trait QFormat: Copy + Ord + Debug + Display {
    /// Human readable name of the format, e.g. `"Q0.15"`
    const NAME: &'static str;
    /// Number of fractional bits `F`
    const FRACTIONAL_BITS: u32;
    /// The smallest representable value
    const MIN: Self;
    /// The largest representable value
    const MAX: Self;

    /// The raw value sign or zero extended to 64 bits
    fn to_wide(self) -> i64;

    /// Creates a value from a 64 bit raw value, keeping only the bits that fit
    fn from_wide_wrapping(wide: i64) -> Self;

    /// The real number this value represents
    fn to_f64(self) -> f64 {
        self.to_wide() as f64 / (1_u64 << Self::FRACTIONAL_BITS) as f64
    }

    /// Lossily transforms an f64 into the closest representable value,
    /// saturating at the ends of the range. `NaN` becomes zero.
    /// You should prefer the [`q!`] macro for constants.
    #[must_use]
    fn from_f64(input: f64) -> Self {
        let scaled = num_traits::float::FloatCore::round(input * Self::scale()) as i64;

        Self::from_wide_wrapping(scaled.clamp(Self::MIN.to_wide(), Self::MAX.to_wide()))
    }

    /// Transforms an f64 into the closest representable value, failing if the
    /// value is `NaN` or lies outside the range of the format.
    ///
    /// ```
    /// # use qfixnum::{Q15, QFormat};
    /// assert_eq!(Q15::try_from_f64(-0.5).unwrap().to_raw(), -0x4000);
    /// assert!(Q15::try_from_f64(1.0).is_err());
    /// ```
    fn try_from_f64(input: f64) -> Result<Self, OutOfRangeError> {
        let scaled = num_traits::float::FloatCore::round(input * Self::scale());

        if scaled.is_nan()
            || scaled < Self::MIN.to_wide() as f64
            || scaled > Self::MAX.to_wide() as f64
        {
            return Err(OutOfRangeError { format: Self::NAME });
        }

        Ok(Self::from_wide_wrapping(scaled as i64))
    }

    /// Called by the [`q!`] macro with the integer part and the fractional
    /// part scaled by `2^32`.
    #[doc(hidden)]
    #[inline(always)]
    #[must_use]
    fn new_from_parts(parts: (i32, i64)) -> Self {
        let wide = (i64::from(parts.0) << Self::FRACTIONAL_BITS)
            + (parts.1 >> (32 - Self::FRACTIONAL_BITS));

        debug_assert!(
            wide >= Self::MIN.to_wide() && wide <= Self::MAX.to_wide(),
            "literal does not fit in {}",
            Self::NAME
        );

        Self::from_wide_wrapping(wide)
    }

    #[doc(hidden)]
    fn scale() -> f64 {
        (1_u64 << Self::FRACTIONAL_BITS) as f64
    }
}

/// Access to the two 16 bit halves of a 32 bit format.
///
/// The high half holds the integer part (or the upper fraction bits for
/// [`Q32`]) and the low half holds the lower 16 fractional bits. Splitting and
/// joining are lossless: `T::from_halves(x.high(), x.low()) == x`.
///
/// ```
/// # use qfixnum::{Q1516, SplitWord};
/// let x = Q1516::from_raw(-0x0001_8000); // -1.5
/// assert_eq!(x.high(), -2);
/// assert_eq!(x.low(), 0x8000);
/// assert_eq!(Q1516::from_halves(-2, 0x8000), x);
/// ```
pub trait SplitWord: Copy {
    /// Type of the upper half word, signed for signed formats
    type High: Copy;

    /// The upper 16 bits
    fn high(self) -> Self::High;
    /// The lower 16 bits
    fn low(self) -> u16;
    /// Joins an upper and lower half back into one value
    fn from_halves(high: Self::High, low: u16) -> Self;
}

macro_rules! q_format {
    ($(#[$attr:meta])* $name:ident($raw:ty), $frac:literal, $display_name:literal) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name($raw);

        impl $name {
            /// The smallest representable value
            pub const MIN: Self = Self(<$raw>::MIN);
            /// The largest representable value
            pub const MAX: Self = Self(<$raw>::MAX);
            /// Zero
            pub const ZERO: Self = Self(0);

            /// A bit for bit conversion from the underlying integer.
            ///
            /// Get the value back with `to_raw`.
            #[inline(always)]
            pub const fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            /// The internal representation, `value * 2^F`
            #[inline(always)]
            pub const fn to_raw(self) -> $raw {
                self.0
            }
        }

        impl QFormat for $name {
            const NAME: &'static str = $display_name;
            const FRACTIONAL_BITS: u32 = $frac;
            const MIN: Self = $name::MIN;
            const MAX: Self = $name::MAX;

            #[inline(always)]
            fn to_wide(self) -> i64 {
                i64::from(self.0)
            }

            #[inline(always)]
            fn from_wide_wrapping(wide: i64) -> Self {
                Self(wide as $raw)
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0.wrapping_add(rhs.0))
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0.wrapping_sub(rhs.0))
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl num_traits::Zero for $name {
            fn zero() -> Self {
                Self::ZERO
            }

            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl num_traits::Bounded for $name {
            fn min_value() -> Self {
                Self::MIN
            }

            fn max_value() -> Self {
                Self::MAX
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                Display::fmt(&self.to_f64(), f)
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(
                    f,
                    "{}({} = {:#0width$x})",
                    stringify!($name),
                    self,
                    self.0,
                    width = 2 + <$raw>::BITS as usize / 4
                )
            }
        }

        impl FromStr for $name {
            type Err = ParseQError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: f64 = s.trim().parse()?;
                Ok(Self::try_from_f64(value)?)
            }
        }
    };
}

macro_rules! signed_q_format {
    ($name:ident) => {
        impl Neg for $name {
            type Output = Self;
            /// Wrapping negation, `-MIN == MIN`
            fn neg(self) -> Self::Output {
                Self(self.0.wrapping_neg())
            }
        }
    };
}

macro_rules! split_word {
    ($name:ident, $high:ty, $raw:ty) => {
        impl SplitWord for $name {
            type High = $high;

            #[inline(always)]
            fn high(self) -> $high {
                (self.0 >> 16) as $high
            }

            #[inline(always)]
            fn low(self) -> u16 {
                self.0 as u16
            }

            #[inline(always)]
            fn from_halves(high: $high, low: u16) -> Self {
                Self((<$raw>::from(high) << 16) | <$raw>::from(low))
            }
        }
    };
}

q_format!(
    /// A signed fraction in the range `[-1, 1)` stored in 16 bits (Q0.15).
    ///
    /// This is the main signal format: samples, coefficients and sine outputs
    /// all use it.
    Q15(i16), 15, "Q0.15"
);

q_format!(
    /// An unsigned fraction in the range `[0, 1)` stored in 16 bits (Q0.16).
    ///
    /// Used for gains, interpolation weights and phases.
    Q16(u16), 16, "Q0.16"
);

q_format!(
    /// An unsigned fraction in the range `[0, 1)` stored in 32 bits (Q0.32).
    Q32(u32), 32, "Q0.32"
);

q_format!(
    /// An unsigned number in the range `[0, 65536)` with 16 integer and 16
    /// fractional bits (Q16.16).
    Q1616(u32), 16, "Q16.16"
);

q_format!(
    /// A signed number in the range `[-32768, 32768)` with 15 integer bits, a
    /// sign bit and 16 fractional bits (Q15.16).
    Q1516(i32), 16, "Q15.16"
);

signed_q_format!(Q15);
signed_q_format!(Q1516);

split_word!(Q32, u16, u32);
split_word!(Q1616, u16, u32);
split_word!(Q1516, i16, i32);

impl Q16 {
    /// 0.5 in Q0.16
    pub const HALF: Self = Self(0x8000);
}

impl Q1616 {
    /// 1.0 in Q16.16
    pub const ONE: Self = Self(1 << 16);
}

impl Q1516 {
    /// 1.0 in Q15.16
    pub const ONE: Self = Self(1 << 16);
}
