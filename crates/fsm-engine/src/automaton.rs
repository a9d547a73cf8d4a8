// Built automaton: inspection, final-state marking and application.

use std::fmt;

use fsm_core::{Alphabet, FsmError, Result, Symbol};

use crate::state::{StateId, StateLabel, States};
use crate::transition::{Transition, TransitionView};

/// A deterministic, total transducer over `I` emitting `O`, with states
/// labelled by `L`.
///
/// Every state has exactly one transition per input symbol. Built by
/// [`crate::closure::build`]; afterwards only the final flags can change.
/// Application borrows the automaton immutably, so one automaton can serve
/// many threads.
#[derive(Clone)]
pub struct Automaton<L: StateLabel, I: Symbol, O: Symbol> {
    states: States<L>,
    initial: Vec<StateId>,
    input_alphabet: Alphabet<I>,
    output_alphabet: Alphabet<O>,
    /// Dense table, `input_alphabet.len()` rows per state, in state id order.
    table: Vec<Transition>,
}

/// Result of running an automaton over an input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome<'a, L, O> {
    /// Whether the run ended in a final state.
    pub accepted: bool,
    /// The state the run ended in.
    pub state: StateId,
    pub state_label: &'a L,
    /// One output symbol per input symbol.
    pub output: Vec<O>,
}

impl<L: StateLabel, I: Symbol, O: Symbol> fmt::Debug for Automaton<L, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("state_count", &self.states.len())
            .field("transition_count", &self.table.len())
            .field("initial", &self.initial)
            .field("input_alphabet", &self.input_alphabet.as_slice())
            .field("output_alphabet", &self.output_alphabet.as_slice())
            .finish()
    }
}

impl<L: StateLabel, I: Symbol, O: Symbol> Automaton<L, I, O> {
    pub(crate) fn from_parts(
        states: States<L>,
        initial: Vec<StateId>,
        input_alphabet: Alphabet<I>,
        output_alphabet: Alphabet<O>,
        table: Vec<Transition>,
    ) -> Self {
        debug_assert_eq!(table.len(), states.len() * input_alphabet.len());
        Self {
            states,
            initial,
            input_alphabet,
            output_alphabet,
            table,
        }
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.table.len()
    }

    pub fn input_alphabet(&self) -> &Alphabet<I> {
        &self.input_alphabet
    }

    pub fn output_alphabet(&self) -> &Alphabet<O> {
        &self.output_alphabet
    }

    /// State labels in id order (discovery order of the closure).
    pub fn states(&self) -> &[L] {
        self.states.labels()
    }

    pub fn state_id(&self, label: &L) -> Option<StateId> {
        self.states.id(label)
    }

    /// Label of state `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a state of this automaton.
    pub fn state_label(&self, id: StateId) -> &L {
        self.states.label(id)
    }

    pub fn initial_state_ids(&self) -> &[StateId] {
        &self.initial
    }

    pub fn initial_states(&self) -> impl Iterator<Item = &L> + '_ {
        self.initial.iter().map(|&id| self.states.label(id))
    }

    pub fn final_states(&self) -> impl Iterator<Item = &L> + '_ {
        (0..self.states.len() as StateId)
            .filter(|&id| self.states.is_final(id))
            .map(|id| self.states.label(id))
    }

    pub fn is_final(&self, id: StateId) -> bool {
        self.states.is_final(id)
    }

    /// Set or clear the final flag of the state labelled `label`.
    ///
    /// Returns `false` if no such state exists.
    pub fn set_final(&mut self, label: &L, is_final: bool) -> bool {
        match self.states.id(label) {
            Some(id) => {
                self.states.set_final(id, is_final);
                true
            }
            None => false,
        }
    }

    /// Mark every discovered state as final.
    pub fn mark_all_states_final(&mut self) {
        self.states.mark_all_final();
    }

    #[inline]
    fn row(&self, state: StateId, sym_in: u16) -> &Transition {
        &self.table[state as usize * self.input_alphabet.len() + sym_in as usize]
    }

    fn view(&self, source: StateId, row: &Transition) -> TransitionView<'_, L, I, O> {
        TransitionView {
            source_id: source,
            target_id: row.target,
            source: self.states.label(source),
            target: self.states.label(row.target),
            input: self.input_alphabet.symbol(row.sym_in),
            output: self.output_alphabet.symbol(row.sym_out),
        }
    }

    /// The transition from state `state` on `input`, if both exist.
    pub fn transition(&self, state: StateId, input: &I) -> Option<TransitionView<'_, L, I, O>> {
        if state as usize >= self.states.len() {
            return None;
        }
        let sym_in = self.input_alphabet.ordinal(input)?;
        Some(self.view(state, self.row(state, sym_in)))
    }

    /// Outgoing transitions of `state`, in input alphabet order.
    pub fn transitions_from(
        &self,
        state: StateId,
    ) -> impl Iterator<Item = TransitionView<'_, L, I, O>> + '_ {
        let width = self.input_alphabet.len();
        let start = (state as usize * width).min(self.table.len());
        let end = (start + width).min(self.table.len());
        self.table[start..end]
            .iter()
            .map(move |row| self.view(state, row))
    }

    /// All transitions in table order (state id, then input ordinal).
    pub fn transitions(&self) -> impl Iterator<Item = TransitionView<'_, L, I, O>> + '_ {
        let width = self.input_alphabet.len();
        self.table
            .iter()
            .enumerate()
            .map(move |(i, row)| self.view((i / width) as StateId, row))
    }

    /// All transitions ordered by source label, then input symbol.
    pub fn sorted_transitions(&self) -> Vec<TransitionView<'_, L, I, O>> {
        let mut views: Vec<_> = self.transitions().collect();
        views.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        views
    }

    /// The packed transition table as raw bytes.
    ///
    /// Two builds with equal labels and equal bytes are identical automata.
    pub fn table_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.table)
    }

    fn start_state(&self) -> Result<StateId> {
        match self.initial.as_slice() {
            [] => Err(FsmError::NoInitialState),
            [id] => Ok(*id),
            many => Err(FsmError::AmbiguousInitialState { count: many.len() }),
        }
    }

    /// Run the automaton over `input` and return the emitted output.
    ///
    /// The output has the same length as the input. The whole input is
    /// validated before the run, so an unknown symbol yields an error and no
    /// output at all.
    pub fn apply(&self, input: &[I]) -> Result<Vec<O>> {
        Ok(self.process(input)?.output)
    }

    /// Like [`apply`](Self::apply), but also reports where the run ended and
    /// whether that state is final.
    pub fn process(&self, input: &[I]) -> Result<ProcessOutcome<'_, L, O>> {
        let mut state = self.start_state()?;
        let encoded = self.input_alphabet.encode(input)?;

        let mut output = Vec::with_capacity(encoded.len());
        for sym_in in encoded {
            let row = self.row(state, sym_in);
            output.push(self.output_alphabet.symbol(row.sym_out).clone());
            state = row.target;
        }

        Ok(ProcessOutcome {
            accepted: self.states.is_final(state),
            state,
            state_label: self.states.label(state),
            output,
        })
    }
}
