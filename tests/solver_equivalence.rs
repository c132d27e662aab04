use part_dp::costs::{alternation_penalty, cubic_length, letter_weight, ORACLES};
use part_dp::utils::bruteforce_min_cost;
use part_dp::{solve_naive, solve_prefix};
use proptest::prelude::*;

/// Non-integer oracle with negative territory; exercises float paths the
/// reference oracles never touch.
fn wavy(piece: &[u8]) -> f64 {
    let base = piece
        .iter()
        .enumerate()
        .fold(0.25, |acc, (i, &b)| acc + f64::from(b) * 0.37 - i as f64 * 1.5);
    base - (piece.len() * piece.len()) as f64 * 0.11
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn reference_oracles_agree_exactly(s in "[a-z]{0,12}") {
        // Integer-valued oracles: every intermediate sum is exact in f64,
        // so agreement must be bit-for-bit.
        let seq = s.as_bytes();
        for &(name, oracle) in ORACLES {
            let naive = solve_naive(seq, &oracle).unwrap();
            let prefix = solve_prefix(seq, &oracle).unwrap();
            prop_assert_eq!(naive, prefix, "oracle {} disagrees on {:?}", name, s);
        }
    }

    #[test]
    fn fractional_oracle_agrees_within_tolerance(s in "[a-z]{0,14}") {
        // The two solvers sum identical piece costs in different association
        // orders, so only near-equality is guaranteed here.
        let seq = s.as_bytes();
        let naive = solve_naive(seq, &wavy).unwrap();
        let prefix = solve_prefix(seq, &wavy).unwrap();
        prop_assert!(close(naive, prefix), "naive={}, prefix={}", naive, prefix);
    }

    #[test]
    fn both_match_the_bruteforce_baseline(s in "[a-z]{0,10}") {
        let seq = s.as_bytes();
        for oracle in [letter_weight, cubic_length, alternation_penalty] {
            let baseline = bruteforce_min_cost(seq, &oracle).unwrap();
            prop_assert_eq!(solve_naive(seq, &oracle).unwrap(), baseline);
            prop_assert_eq!(solve_prefix(seq, &oracle).unwrap(), baseline);
        }
    }

    #[test]
    fn result_never_exceeds_the_unsplit_piece(s in "[a-z]{1,12}") {
        // "No split" is always a valid partition, so it bounds the optimum.
        let seq = s.as_bytes();
        for &(_, oracle) in ORACLES {
            let whole = oracle(seq);
            prop_assert!(solve_prefix(seq, &oracle).unwrap() <= whole);
            prop_assert!(solve_naive(seq, &oracle).unwrap() <= whole);
        }
    }

    #[test]
    fn singletons_cost_the_oracle_value(b in b'a'..=b'z') {
        let seq = [b];
        for &(_, oracle) in ORACLES {
            prop_assert_eq!(solve_naive(&seq, &oracle).unwrap(), oracle(&seq));
            prop_assert_eq!(solve_prefix(&seq, &oracle).unwrap(), oracle(&seq));
        }
    }

    #[test]
    fn re_invocation_is_bit_identical(s in "[a-z]{0,12}") {
        let seq = s.as_bytes();
        let a = solve_prefix(seq, &wavy).unwrap();
        let b = solve_prefix(seq, &wavy).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
        let a = solve_naive(seq, &wavy).unwrap();
        let b = solve_naive(seq, &wavy).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn empty_input_agrees_at_zero() {
    for &(_, oracle) in ORACLES {
        assert_eq!(solve_naive(b"", &oracle).unwrap(), 0.0);
        assert_eq!(solve_prefix(b"", &oracle).unwrap(), 0.0);
    }
}
