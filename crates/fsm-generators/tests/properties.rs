//! Property-based tests for the generated transducers.
//!
//! 1. **Identity law**: the identity transducer returns its input
//! 2. **Window semantics**: counter output `o_j` is 1 iff the block ends at `j`
//! 3. **State count**: a block of length k yields exactly k states
//! 4. **Strategy equivalence**: rescanning and the prefix table build the
//!    same automaton
//! 5. **Determinism**: rebuilding yields the same table

use fsm_generators::{FailureStrategy, SubblockCounterBuilder, make_identity};
use proptest::prelude::*;

const ALPHABET: [u8; 3] = [0, 1, 2];

/// Brute-force reference: compare every length-k window with the block.
fn window_marks(block: &[u8], input: &[u8]) -> Vec<u8> {
    (0..input.len())
        .map(|j| {
            let matched = j + 1 >= block.len() && input[j + 1 - block.len()..=j] == *block;
            matched as u8
        })
        .collect()
}

// Small alphabets make overlapping and partial matches frequent.
fn arb_block() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..3, 1..7)
}

fn arb_input() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..3, 0..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn identity_returns_input(input in arb_input()) {
        let t = make_identity(ALPHABET).unwrap();
        prop_assert_eq!(t.apply(&input).unwrap(), input);
    }

    #[test]
    fn counter_marks_block_windows(block in arb_block(), input in arb_input()) {
        let counter = SubblockCounterBuilder::new(block.clone()).build(ALPHABET).unwrap();
        let output = counter.apply(&input).unwrap();
        prop_assert_eq!(output.len(), input.len());
        prop_assert_eq!(output, window_marks(&block, &input));
    }

    #[test]
    fn prefix_table_marks_block_windows(block in arb_block(), input in arb_input()) {
        let counter = SubblockCounterBuilder::new(block.clone())
            .strategy(FailureStrategy::PrefixTable)
            .build(ALPHABET)
            .unwrap();
        prop_assert_eq!(counter.apply(&input).unwrap(), window_marks(&block, &input));
    }

    #[test]
    fn counter_has_block_length_states(block in arb_block()) {
        let counter = SubblockCounterBuilder::new(block.clone()).build(ALPHABET).unwrap();
        prop_assert_eq!(counter.automaton().state_count(), block.len());
    }

    #[test]
    fn strategies_agree(block in arb_block()) {
        let rescan = SubblockCounterBuilder::new(block.clone()).build(ALPHABET).unwrap();
        let table = SubblockCounterBuilder::new(block)
            .strategy(FailureStrategy::PrefixTable)
            .build(ALPHABET)
            .unwrap();
        prop_assert_eq!(rescan.automaton().states(), table.automaton().states());
        prop_assert_eq!(rescan.automaton().table_bytes(), table.automaton().table_bytes());
    }

    #[test]
    fn rebuild_is_deterministic(block in arb_block()) {
        let a = SubblockCounterBuilder::new(block.clone()).build(ALPHABET).unwrap();
        let b = SubblockCounterBuilder::new(block).build(ALPHABET).unwrap();
        prop_assert_eq!(a.automaton().states(), b.automaton().states());
        prop_assert_eq!(a.automaton().table_bytes(), b.automaton().table_bytes());
    }

    #[test]
    fn count_matches_reference(block in arb_block(), input in arb_input()) {
        let counter = SubblockCounterBuilder::new(block.clone()).build(ALPHABET).unwrap();
        let expected = window_marks(&block, &input).iter().filter(|&&m| m == 1).count();
        prop_assert_eq!(counter.count(&input).unwrap(), expected);
    }
}
