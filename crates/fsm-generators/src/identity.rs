// Identity transducer.

use fsm_core::{Alphabet, Result, Symbol};
use fsm_engine::{Automaton, build};
use log::debug;

/// Transducer mapping every word over its alphabet to itself.
pub type IdentityAutomaton<S> = Automaton<u32, S, S>;

/// Build the identity transducer over `input_alphabet`.
///
/// The result has a single state `0`, both initial and final, with one loop
/// `d|d` per symbol `d`. Input and output alphabets are both
/// `input_alphabet`.
///
/// Fails with [`fsm_core::FsmError::EmptyAlphabet`] or
/// [`fsm_core::FsmError::DuplicateSymbol`] for a degenerate alphabet.
pub fn make_identity<S, T>(input_alphabet: T) -> Result<IdentityAutomaton<S>>
where
    S: Symbol,
    T: IntoIterator<Item = S>,
{
    let alphabet = Alphabet::new(input_alphabet)?;
    let mut automaton = build(
        [0u32],
        |&state, symbol: &S| (state, symbol.clone()),
        alphabet.clone(),
        alphabet,
    )?;
    automaton.mark_all_states_final();
    debug!(
        "identity transducer over {} symbols",
        automaton.input_alphabet().len()
    );
    Ok(automaton)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsm_core::FsmError;

    #[test]
    fn one_state_initial_and_final() {
        let t = make_identity([0u8, 1]).unwrap();
        assert_eq!(t.state_count(), 1);
        assert_eq!(t.initial_states().collect::<Vec<_>>(), vec![&0]);
        assert_eq!(t.final_states().collect::<Vec<_>>(), vec![&0]);
        assert_eq!(t.input_alphabet().as_slice(), &[0, 1]);
        assert_eq!(t.output_alphabet().as_slice(), &[0, 1]);
    }

    #[test]
    fn transitions_map_symbols_to_themselves() {
        let t = make_identity([0u8, 1]).unwrap();
        let listing: Vec<String> = t.sorted_transitions().iter().map(|v| v.to_string()).collect();
        assert_eq!(
            listing,
            vec!["Transition from 0 to 0: 0|0", "Transition from 0 to 0: 1|1"]
        );
    }

    #[test]
    fn apply_returns_input() {
        let t = make_identity([0u8, 1]).unwrap();
        assert_eq!(t.apply(&[0, 1, 0, 1, 1]).unwrap(), vec![0, 1, 0, 1, 1]);

        let t = make_identity("xyz".chars()).unwrap();
        let word: Vec<char> = "zzyxz".chars().collect();
        assert_eq!(t.apply(&word).unwrap(), word);
    }

    #[test]
    fn reject_empty_alphabet() {
        let err = make_identity(Vec::<u8>::new()).unwrap_err();
        assert_eq!(err, FsmError::EmptyAlphabet);
    }

    #[test]
    fn reject_duplicate_symbols() {
        let err = make_identity(['a', 'b', 'a']).unwrap_err();
        assert!(matches!(err, FsmError::DuplicateSymbol { .. }));
    }

    #[test]
    fn reject_foreign_input() {
        let t = make_identity([0u8, 1]).unwrap();
        let err = t.apply(&[0, 2]).unwrap_err();
        assert_eq!(
            err,
            FsmError::UnrecognizedSymbol {
                position: 1,
                symbol: "2".to_string()
            }
        );
    }
}
