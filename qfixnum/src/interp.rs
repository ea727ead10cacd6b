//! Linear interpolation.
//!
//! Unlike the multiplies, both routines here round the accumulated result to
//! nearest (halves round up) before truncating to Q0.15.
//! The arithmetic models a 40 bit multiply-accumulate: products are summed at
//! full width and only the final store rounds and saturates.

use crate::{Q15, Q16, TableLengthError};

/// Number of entries in a table for [`interp_lut_256`]: 256 segments plus the
/// right hand end point of the last one.
pub const LUT_256_LEN: usize = 257;

/// Rounds an accumulator holding a Q0.15 value in its upper 16 bits and
/// stores it, saturating to the Q0.15 range.
fn store_rounded(acc: i64) -> Q15 {
    let rounded = (acc + 0x8000) >> 16;

    Q15::from_raw(rounded.clamp(i64::from(i16::MIN), i64::from(i16::MAX)) as i16)
}

/// Interpolates linearly between `y1` (at `x = 0`) and `y2` (at `x = 1`),
/// computing `y1 + (y2 - y1) * x` rounded to nearest.
///
/// `x = 0` returns `y1` exactly. As `x` can't reach 1, the largest weight
/// lands within one LSB of `y2`.
///
/// ```
/// # use qfixnum::{Q15, Q16, interp_linear};
/// let y1 = Q15::from_raw(1000);
/// let y2 = Q15::from_raw(2000);
///
/// assert_eq!(interp_linear(y1, y2, Q16::ZERO), y1);
/// assert_eq!(interp_linear(y1, y2, Q16::HALF), Q15::from_raw(1500));
/// ```
#[must_use]
pub fn interp_linear(y1: Q15, y2: Q15, x: Q16) -> Q15 {
    let weight = i64::from(x.to_raw());
    let y1 = i64::from(y1.to_raw());
    let y2 = i64::from(y2.to_raw());

    let acc = (y1 << 16) + (y2 - y1) * weight;

    store_rounded(acc)
}

/// Interpolates a 256 segment lookup table.
///
/// The upper byte of `x` selects the segment `table[idx]..table[idx + 1]`,
/// the lower byte is the position inside it in steps of 1/256. The result is
/// rounded to nearest, so at every multiple of 1/256 the table entry itself is
/// returned.
///
/// The table spans `x` in `[0, 1]`: `table[0]` is the value at 0 and
/// `table[256]` the value at 1 (which `x` can only approach).
///
/// ```
/// # use qfixnum::{Q15, Q16, interp_lut_256};
/// let mut table = [Q15::ZERO; 257];
/// for (i, entry) in table.iter_mut().enumerate() {
///     *entry = Q15::from_raw(i as i16 * 100);
/// }
///
/// assert_eq!(interp_lut_256(&table, Q16::from_raw(0x0300)), Q15::from_raw(300));
/// assert_eq!(interp_lut_256(&table, Q16::from_raw(0x0380)), Q15::from_raw(350));
/// ```
#[must_use]
pub fn interp_lut_256(table: &[Q15; LUT_256_LEN], x: Q16) -> Q15 {
    let idx = usize::from(x.to_raw() >> 8);
    let frac = i64::from(x.to_raw() & 0xFF);

    let left = i64::from(table[idx].to_raw());
    let right = i64::from(table[idx + 1].to_raw());

    // the sample is loaded pre-scaled by 2^-7 and the product scaled back by 2^7
    // on the store, which leaves everything in units of 2^-8 LSB
    let acc = ((left << 8) - left * frac + right * frac) << 8;

    store_rounded(acc)
}

/// Views a slice as a table for [`interp_lut_256`], checking its length.
///
/// ```
/// # use qfixnum::{Q15, TableLengthError, lut_from_slice};
/// let samples = [Q15::ZERO; 300];
///
/// assert!(lut_from_slice(&samples[..257]).is_ok());
/// assert_eq!(
///     lut_from_slice(&samples),
///     Err(TableLengthError { expected: 257, actual: 300 })
/// );
/// ```
pub fn lut_from_slice(table: &[Q15]) -> Result<&[Q15; LUT_256_LEN], TableLengthError> {
    table.try_into().map_err(|_| TableLengthError {
        expected: LUT_256_LEN,
        actual: table.len(),
    })
}
