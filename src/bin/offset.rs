//! Print the argument to supply for a given bias and target descriptor.
//!
//! Usage: `offset <BIAS> <TARGET>` (bias in decimal or 0x-hex).

use fdpwn::solver::{compute_argument, std_stream};
use std::process::exit;

fn parse_int(s: &str) -> Option<i64> {
    if let Some(hex) = s.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()
    } else {
        s.parse().ok()
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (bias, target) = match (
        args.get(1).and_then(|s| parse_int(s)),
        args.get(2).and_then(|s| parse_int(s)),
    ) {
        (Some(bias), Some(target)) if bias > 0 => (bias as u64, target),
        _ => {
            eprintln!("usage: offset <BIAS> <TARGET>");
            exit(1);
        }
    };

    let argument = compute_argument(bias, target);
    println!("argument: {}", argument);
    match std_stream(target) {
        Some(stream) => println!("target descriptor {} is {:?}", target, stream),
        None => println!("target descriptor {} is not a standard stream", target),
    }
}
