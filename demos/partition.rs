//! Example: minimum-cost partitioning under two pricing schemes.
//!
//! Run with:
//! `cargo run --example partition`

use part_dp::costs::{cubic_length, letter_weight};
use part_dp::{solve_naive, solve_prefix};

fn main() {
    let inputs: [&[u8]; 3] = [b"cat", b"aaaa", b"ababab"];

    for seq in inputs {
        let text = String::from_utf8_lossy(seq);
        println!("input: {text:?}");

        report("letter_weight", seq, &letter_weight);
        report("cubic_length", seq, &cubic_length);
        println!();
    }
}

fn report(name: &str, seq: &[u8], oracle: &impl Fn(&[u8]) -> f64) {
    let naive = solve_naive(seq, oracle).expect("oracle is total");
    let prefix = solve_prefix(seq, oracle).expect("oracle is total");
    assert_eq!(naive, prefix, "the two dynamic programs must agree");
    println!("  {name:<16} min cost = {prefix}");
}
