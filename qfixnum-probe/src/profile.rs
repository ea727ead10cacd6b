use std::f64::consts::PI;

use qfixnum::Q15;

/// How far an approximation strays from the exact function over every
/// possible Q0.15 input, measured in LSB of the result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorProfile {
    pub max: f64,
    pub worst_input: Q15,
    pub mean: f64,
    pub lowest_output: Q15,
    pub highest_output: Q15,
}

/// Sweeps all 65536 inputs, comparing `approx(x)` with `exact(pi * x) * 32768`.
pub fn error_profile(approx: impl Fn(Q15) -> Q15, exact: impl Fn(f64) -> f64) -> ErrorProfile {
    let mut profile = ErrorProfile {
        max: 0.0,
        worst_input: Q15::ZERO,
        mean: 0.0,
        lowest_output: Q15::MAX,
        highest_output: Q15::MIN,
    };

    let mut total = 0.0;

    for raw in i16::MIN..=i16::MAX {
        let x = Q15::from_raw(raw);
        let y = approx(x);

        let expected = exact(f64::from(raw) / 32768.0 * PI) * 32768.0;
        let error = (f64::from(y.to_raw()) - expected).abs();

        total += error;
        if error > profile.max {
            profile.max = error;
            profile.worst_input = x;
        }

        profile.lowest_output = profile.lowest_output.min(y);
        profile.highest_output = profile.highest_output.max(y);
    }

    profile.mean = total / 65536.0;
    profile
}
