use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use qfixnum::{Q15, SINE_SAMPLES, SINE_SEGMENTS};

use ops::Op;
use profile::error_profile;

mod ops;
mod profile;
mod raw;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one primitive on raw bit patterns
    Eval {
        /// The primitive to run
        op: Op,

        /// Raw operands in decimal, or hexadecimal / binary with a 0x / 0b prefix
        #[arg(value_parser = raw::parse_raw, allow_hyphen_values = true)]
        operands: Vec<i64>,
    },
    /// Measure the sine approximation against f64 over every input
    SineError {
        /// Measure the cosine instead
        #[arg(long)]
        cos: bool,

        /// Exit with an error if the largest error exceeds this many LSB
        #[arg(long)]
        max_lsb: Option<f64>,
    },
    /// Dump one of the built in tables
    Table {
        /// Which table to dump
        kind: TableKind,

        /// Print raw values in hexadecimal instead of decimal
        #[arg(long)]
        hex: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TableKind {
    /// The 256 (slope, intercept) pairs behind `sin`
    Segments,
    /// The 257 generated sine samples for table interpolation
    Samples,
}

fn main() -> anyhow::Result<()> {
    let cli = Args::parse();

    match cli.command {
        Command::Eval { op, operands } => eval(op, &operands),
        Command::SineError { cos, max_lsb } => sine_error(cos, max_lsb),
        Command::Table { kind, hex } => {
            print_table(kind, hex);
            Ok(())
        }
    }
}

fn eval(op: Op, operands: &[i64]) -> anyhow::Result<()> {
    let evaluation = op.eval(operands)?;

    let inputs = evaluation
        .inputs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "{}({inputs}) = {}",
        op.name().bold(),
        evaluation.output.to_string().green()
    );

    Ok(())
}

fn sine_error(cos: bool, max_lsb: Option<f64>) -> anyhow::Result<()> {
    let (name, profile) = if cos {
        ("cos", error_profile(Q15::cos, f64::cos))
    } else {
        ("sin", error_profile(Q15::sin, f64::sin))
    };

    println!("{} over all 65536 inputs", name.bold());
    println!(
        "  max error  {} LSB at {:?}",
        format!("{:.3}", profile.max).green(),
        profile.worst_input
    );
    println!("  mean error {} LSB", format!("{:.3}", profile.mean).green());
    println!(
        "  output     {} ..= {}",
        profile.lowest_output.to_raw(),
        profile.highest_output.to_raw()
    );

    if let Some(limit) = max_lsb {
        if profile.max > limit {
            bail!(
                "{}",
                format!("max error {:.3} LSB exceeds the limit of {limit} LSB", profile.max).red()
            );
        }

        if profile.max > limit * 0.9 {
            eprintln!(
                "{}",
                format!("Warning: max error is within 10% of the {limit} LSB limit").yellow()
            );
        }
    }

    Ok(())
}

fn format_raw(raw: i16, hex: bool) -> String {
    if hex {
        format!("{raw:#06x}")
    } else {
        raw.to_string()
    }
}

fn print_table(kind: TableKind, hex: bool) {
    match kind {
        TableKind::Segments => {
            println!("{}", "index\tslope\tintercept".bold());
            for (i, segment) in SINE_SEGMENTS.0.iter().enumerate() {
                println!(
                    "{i}\t{}\t{}",
                    format_raw(segment.slope.to_raw(), hex),
                    format_raw(segment.intercept.to_raw(), hex)
                );
            }
        }
        TableKind::Samples => {
            println!("{}", "index\tsample".bold());
            for (i, sample) in SINE_SAMPLES.iter().enumerate() {
                println!("{i}\t{}", format_raw(sample.to_raw(), hex));
            }
        }
    }
}
