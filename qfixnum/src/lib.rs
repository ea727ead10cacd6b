#![no_std]
#![deny(missing_docs)]
//! Q-format fixed point primitives for platforms without a floating point unit.
//!
//! Five formats are provided, each a thin wrapper around an integer holding
//! `value * 2^F`:
//!
//! | Type      | Format | Storage | Range             |
//! |-----------|--------|---------|-------------------|
//! | [`Q15`]   | Q0.15  | `i16`   | `[-1, 1)`         |
//! | [`Q16`]   | Q0.16  | `u16`   | `[0, 1)`          |
//! | [`Q32`]   | Q0.32  | `u32`   | `[0, 1)`          |
//! | [`Q1616`] | Q16.16 | `u32`   | `[0, 65536)`      |
//! | [`Q1516`] | Q15.16 | `i32`   | `[-32768, 32768)` |
//!
//! Every operation has a fixed numeric contract and it matters which one you
//! pick. Multiplication and division truncate and never check for overflow,
//! interpolation rounds to nearest, conversions either reinterpret bits or
//! saturate. None of them allocate, block or return errors; preconditions (like
//! a non-zero divisor) are only checked by debug assertions.
//!
//! ```
//! use qfixnum::{Q15, Q16, interp_linear, q};
//!
//! // a quarter of the way through a sine period, scaled down by a gain of 0.75
//! let phase: Q15 = q!(0.5);
//! let gain: Q16 = q!(0.75);
//!
//! let sample = phase.sin() * gain;
//! assert_eq!(sample, Q15::from_raw(24575));
//!
//! // and blended half way back towards zero
//! assert_eq!(interp_linear(Q15::ZERO, sample, Q16::HALF), Q15::from_raw(12288));
//! ```

mod arith;
mod convert;
mod error;
mod format;
mod interp;
mod trig;

#[doc(hidden)]
pub mod __private {
    pub use const_soft_float;
}

mod lut {
    include!(concat!(env!("OUT_DIR"), "/lut.rs"));
}

pub use arith::{mul_slice_q16, mul_slice_q16_in_place};
pub use error::*;
pub use format::*;
pub use interp::{LUT_256_LEN, interp_linear, interp_lut_256, lut_from_slice};
pub use lut::SINE_SAMPLES;
pub use trig::{SINE_SEGMENTS, Segment, SegmentTable};
