use std::fmt;

use clap::ValueEnum;
use qfixnum::{Q15, Q16, Q32, Q1516, Q1616, interp_linear};
use thiserror::Error;

use crate::raw::{Operand, RawError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("{op} takes {expected} operand(s) but was given {actual}")]
    Arity {
        op: String,
        expected: usize,
        actual: usize,
    },
    #[error("operand {index}: {source}")]
    Operand { index: usize, source: RawError },
    #[error("division by zero")]
    DivisionByZero,
}

/// Every primitive the probe can run, named `<operation>-<formats>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Op {
    #[value(name = "abs")]
    Abs,
    #[value(name = "q15-to-q16-naive")]
    Q15ToQ16Naive,
    #[value(name = "q15-to-q16")]
    Q15ToQ16,
    #[value(name = "q16-to-q1516")]
    Q16ToQ1516,
    #[value(name = "q16-to-q15")]
    Q16ToQ15,
    #[value(name = "q1516-to-q16")]
    Q1516ToQ16,
    #[value(name = "mul-q15")]
    MulQ15,
    #[value(name = "mul-q15-q16")]
    MulQ15Q16,
    #[value(name = "mul-q15-q1616")]
    MulQ15Q1616,
    #[value(name = "mul-q16")]
    MulQ16,
    #[value(name = "mul-q32-q16")]
    MulQ32Q16,
    #[value(name = "mul-q32-u16")]
    MulQ32U16,
    #[value(name = "mul-q1616-q16")]
    MulQ1616Q16,
    #[value(name = "mul-q1616-u16")]
    MulQ1616U16,
    #[value(name = "mul-q1616")]
    MulQ1616,
    #[value(name = "div-q16")]
    DivQ16,
    #[value(name = "interp-linear")]
    InterpLinear,
    #[value(name = "sin")]
    Sin,
    #[value(name = "cos")]
    Cos,
}

/// A typed operand or result, printed with both its value and bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value {
    Q15(Q15),
    Q16(Q16),
    Q32(Q32),
    Q1616(Q1616),
    Q1516(Q1516),
    U16(u16),
}

macro_rules! value_from {
    ($($name:ident),*) => {
        $(
            impl From<$name> for Value {
                fn from(value: $name) -> Self {
                    Value::$name(value)
                }
            }
        )*
    };
}

value_from!(Q15, Q16, Q32, Q1616, Q1516);

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::U16(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Q15(v) => write!(f, "{v:?}"),
            Value::Q16(v) => write!(f, "{v:?}"),
            Value::Q32(v) => write!(f, "{v:?}"),
            Value::Q1616(v) => write!(f, "{v:?}"),
            Value::Q1516(v) => write!(f, "{v:?}"),
            Value::U16(v) => write!(f, "u16({v} = {v:#06x})"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub inputs: Vec<Value>,
    pub output: Value,
}

struct Operands<'a>(&'a [i64]);

impl Operands<'_> {
    fn get<T: Operand>(&self, index: usize) -> Result<T, EvalError> {
        T::from_operand(self.0[index]).map_err(|source| EvalError::Operand { index, source })
    }
}

impl Op {
    pub fn arity(self) -> usize {
        match self {
            Op::Abs
            | Op::Q15ToQ16Naive
            | Op::Q15ToQ16
            | Op::Q16ToQ1516
            | Op::Q16ToQ15
            | Op::Q1516ToQ16
            | Op::Sin
            | Op::Cos => 1,
            Op::InterpLinear => 3,
            _ => 2,
        }
    }

    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|value| value.get_name().to_owned())
            .unwrap_or_else(|| format!("{self:?}"))
    }

    pub fn eval(self, operands: &[i64]) -> Result<Evaluation, EvalError> {
        if operands.len() != self.arity() {
            return Err(EvalError::Arity {
                op: self.name(),
                expected: self.arity(),
                actual: operands.len(),
            });
        }

        let args = Operands(operands);

        match self {
            Op::Abs => unary(&args, Q15::saturating_abs),
            Op::Q15ToQ16Naive => unary(&args, Q15::to_q16_naive),
            Op::Q15ToQ16 => unary(&args, Q15::to_q16),
            Op::Q16ToQ1516 => unary(&args, Q16::to_q1516),
            Op::Q16ToQ15 => unary(&args, Q16::to_q15),
            Op::Q1516ToQ16 => unary(&args, Q1516::to_q16),
            Op::MulQ15 => binary(&args, Q15::mul_q15),
            Op::MulQ15Q16 => binary(&args, Q15::mul_q16),
            Op::MulQ15Q1616 => binary(&args, Q15::mul_q1616),
            Op::MulQ16 => binary(&args, Q16::mul_q16),
            Op::MulQ32Q16 => binary(&args, Q32::mul_q16),
            Op::MulQ32U16 => binary(&args, Q32::mul_u16),
            Op::MulQ1616Q16 => binary(&args, Q1616::mul_q16),
            Op::MulQ1616U16 => binary(&args, Q1616::mul_u16),
            Op::MulQ1616 => binary(&args, Q1616::mul_q1616),
            Op::DivQ16 => {
                let num: Q16 = args.get(0)?;
                let den: Q16 = args.get(1)?;

                let quotient = num.checked_div_q16(den).ok_or(EvalError::DivisionByZero)?;

                Ok(Evaluation {
                    inputs: vec![num.into(), den.into()],
                    output: quotient.into(),
                })
            }
            Op::InterpLinear => {
                let y1: Q15 = args.get(0)?;
                let y2: Q15 = args.get(1)?;
                let x: Q16 = args.get(2)?;

                Ok(Evaluation {
                    inputs: vec![y1.into(), y2.into(), x.into()],
                    output: interp_linear(y1, y2, x).into(),
                })
            }
            Op::Sin => unary(&args, Q15::sin),
            Op::Cos => unary(&args, Q15::cos),
        }
    }
}

fn unary<A, R>(args: &Operands<'_>, f: impl FnOnce(A) -> R) -> Result<Evaluation, EvalError>
where
    A: Operand + Into<Value> + Copy,
    R: Into<Value>,
{
    let a: A = args.get(0)?;

    Ok(Evaluation {
        inputs: vec![a.into()],
        output: f(a).into(),
    })
}

fn binary<A, B, R>(
    args: &Operands<'_>,
    f: impl FnOnce(A, B) -> R,
) -> Result<Evaluation, EvalError>
where
    A: Operand + Into<Value> + Copy,
    B: Operand + Into<Value> + Copy,
    R: Into<Value>,
{
    let a: A = args.get(0)?;
    let b: B = args.get(1)?;

    Ok(Evaluation {
        inputs: vec![a.into(), b.into()],
        output: f(a, b).into(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn output(op: Op, operands: &[i64]) -> Value {
        match op.eval(operands) {
            Ok(evaluation) => evaluation.output,
            Err(e) => panic!("{} {operands:?} failed: {e}", op.name()),
        }
    }

    #[test]
    fn should_run_each_kind_of_primitive() {
        assert_eq!(output(Op::Abs, &[0x8000]), Value::Q15(Q15::MAX));
        assert_eq!(output(Op::Q15ToQ16Naive, &[0x7FFF]), Value::Q16(Q16::MAX));
        assert_eq!(output(Op::Q15ToQ16, &[-1]), Value::Q16(Q16::ZERO));
        assert_eq!(output(Op::MulQ15, &[0x8000, 0x8000]), Value::Q15(Q15::MIN));
        assert_eq!(
            output(Op::MulQ32U16, &[0x8000_0000, 3]),
            Value::Q32(Q32::from_raw(0x8000_0000))
        );
        assert_eq!(
            output(Op::DivQ16, &[0x8000, 0x4000]),
            Value::Q1616(Q1616::from_raw(0x0002_0000))
        );
        assert_eq!(
            output(Op::InterpLinear, &[1000, 2000, 0x8000]),
            Value::Q15(Q15::from_raw(1500))
        );
        assert_eq!(output(Op::Sin, &[0x4000]), Value::Q15(Q15::MAX));
        assert_eq!(output(Op::Cos, &[0]), Value::Q15(Q15::MAX));
    }

    #[test]
    fn should_echo_typed_inputs() -> Result<(), EvalError> {
        let evaluation = Op::MulQ1616U16.eval(&[0x0001_8000, 2])?;

        assert_eq!(
            evaluation.inputs,
            vec![Value::Q1616(Q1616::from_raw(0x0001_8000)), Value::U16(2)]
        );
        assert_eq!(evaluation.output, Value::Q1616(Q1616::from_raw(0x0003_0000)));

        Ok(())
    }

    #[test]
    fn should_check_operand_count() {
        assert_eq!(
            Op::MulQ15.eval(&[1]),
            Err(EvalError::Arity {
                op: "mul-q15".to_owned(),
                expected: 2,
                actual: 1
            })
        );
        assert!(Op::Sin.eval(&[1, 2]).is_err());
    }

    #[test]
    fn should_report_which_operand_is_out_of_range() {
        assert!(matches!(
            Op::MulQ15Q16.eval(&[1, 0x1_0000]),
            Err(EvalError::Operand { index: 1, .. })
        ));
    }

    #[test]
    fn should_refuse_to_divide_by_zero() {
        assert_eq!(Op::DivQ16.eval(&[1, 0]), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn should_print_values_with_bit_patterns() {
        assert_eq!(Value::U16(10).to_string(), "u16(10 = 0x000a)");
        assert_eq!(Value::Q15(Q15::MIN).to_string(), "Q15(-1 = 0x8000)");
    }

    #[test]
    fn should_name_ops_like_the_command_line() {
        for op in Op::value_variants() {
            assert_eq!(Op::from_str(&op.name(), false), Ok(*op));
        }
    }
}
