use std::{fs::File, io::BufWriter};

use quote::quote;

/// One full period sampled at 256 points plus the wrap-around sample, so that
/// `table[idx + 1]` is valid for every 8 bit index.
fn generate_period_table<F>(f: F) -> [i16; 257]
where
    F: Fn(f64) -> f64,
{
    let mut table = [0; 257];

    for (i, v) in table.iter_mut().enumerate() {
        let x = (i as f64) / f64::from(1 << 8);
        let p = (f(x) * f64::from(i16::MAX)).round();

        *v = p as i16;
    }

    table
}

fn output_q15_table(file: &mut dyn std::io::Write, name: &str, doc: &str, values: &[i16]) {
    let ident = quote::format_ident!("{}", name);
    let len = values.len();

    let s = quote! {
        #[doc = #doc]
        pub static #ident: [crate::Q15; #len] = [
            #(crate::Q15::from_raw(#values)),*
        ];
    };

    writeln!(file, "{s}").expect("Should be able to write to file");
}

fn main() {
    let build_dir = std::env::var("OUT_DIR").expect("OUT_DIR must be specified");

    let mut file = BufWriter::new(
        File::create(format!("{build_dir}/lut.rs")).expect("Should be able to open file"),
    );

    output_q15_table(
        &mut file,
        "SINE_SAMPLES",
        "One period of `32767 * sin(2 * pi * x)` sampled at 257 evenly spaced points in `[0, 1]`,\n\
         ready for [`interp_lut_256`](crate::interp_lut_256).",
        &generate_period_table(|x| (x * std::f64::consts::TAU).sin()),
    );
}
