// Reachability closure over a transition function.

use fsm_core::symbol::describe;
use fsm_core::{Alphabet, FsmError, Result, Symbol};
use log::{debug, trace};

use crate::automaton::Automaton;
use crate::config::BuildConfig;
use crate::state::{StateLabel, States};
use crate::transition::Transition;

/// Build an automaton by closing `initial_states` under `transition_function`
/// with the default [`BuildConfig`].
///
/// See [`build_with_config`].
pub fn build<L, I, O, T, F>(
    initial_states: T,
    transition_function: F,
    input_alphabet: Alphabet<I>,
    output_alphabet: Alphabet<O>,
) -> Result<Automaton<L, I, O>>
where
    L: StateLabel,
    I: Symbol,
    O: Symbol,
    T: IntoIterator<Item = L>,
    F: FnMut(&L, &I) -> (L, O),
{
    build_with_config(
        &BuildConfig::default(),
        initial_states,
        transition_function,
        input_alphabet,
        output_alphabet,
    )
}

/// Build an automaton by closing `initial_states` under `transition_function`.
///
/// States are discovered breadth first. Each discovered state is expanded
/// once, calling `transition_function(state, symbol)` for every input symbol
/// in alphabet order; targets not seen before are queued. The closure ends
/// when the queue is empty.
///
/// State ids are handed out in discovery order, and discovery order depends
/// only on the initial states, the alphabet order and the function, so
/// rebuilding from the same inputs yields an identical table.
///
/// No state is final afterwards; use
/// [`Automaton::mark_all_states_final`] or [`Automaton::set_final`].
///
/// Fails with [`FsmError::AlphabetMismatch`] if the function emits a symbol
/// outside `output_alphabet`, and with [`FsmError::StateLimitExceeded`] if
/// more than `config.max_states` states are reachable. An empty set of initial
/// states yields an empty automaton, which cannot be applied.
pub fn build_with_config<L, I, O, T, F>(
    config: &BuildConfig,
    initial_states: T,
    mut transition_function: F,
    input_alphabet: Alphabet<I>,
    output_alphabet: Alphabet<O>,
) -> Result<Automaton<L, I, O>>
where
    L: StateLabel,
    I: Symbol,
    O: Symbol,
    T: IntoIterator<Item = L>,
    F: FnMut(&L, &I) -> (L, O),
{
    let limit = config.state_limit();
    let width = input_alphabet.len();

    let mut states = States::new();
    let mut initial = Vec::new();
    for label in initial_states {
        let (id, _) = states.intern(label, limit)?;
        if !initial.contains(&id) {
            initial.push(id);
        }
    }

    // Ids are dense and handed out in discovery order, so the ids not yet
    // expanded are exactly `next..states.len()`: the queue is implicit.
    let mut table: Vec<Transition> = Vec::with_capacity(states.len() * width);
    let mut next = 0usize;
    while next < states.len() {
        let source = states.label(next as u32).clone();
        trace!("expanding state {next}: {source:?}");

        for (sym_in, symbol) in input_alphabet.iter().enumerate() {
            let (target_label, output) = transition_function(&source, symbol);
            let sym_out =
                output_alphabet
                    .ordinal(&output)
                    .ok_or_else(|| FsmError::AlphabetMismatch {
                        symbol: describe(&output),
                    })?;
            let (target, discovered) = states.intern(target_label, limit)?;
            if discovered {
                trace!("discovered state {target}: {:?}", states.label(target));
            }
            table.push(Transition {
                target,
                sym_in: sym_in as u16,
                sym_out,
            });
        }
        next += 1;
    }

    debug!(
        "closure complete: {} states, {} transitions, {} initial",
        states.len(),
        table.len(),
        initial.len()
    );

    Ok(Automaton::from_parts(
        states,
        initial,
        input_alphabet,
        output_alphabet,
        table,
    ))
}
