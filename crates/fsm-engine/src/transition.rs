// Packed transition rows and printable transition views.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use fsm_core::Symbol;

use crate::state::{StateId, StateLabel};

/// One row of the transition table (8 bytes).
///
/// Layout:
/// - `target` (u32): id of the target state
/// - `sym_in` (u16): ordinal of the input symbol
/// - `sym_out` (u16): ordinal of the output symbol
///
/// The table is dense: the transition of state `s` on input ordinal `i` lives
/// at index `s * input_alphabet.len() + i`, so `sym_in` is redundant for
/// lookup but keeps every row self-describing.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Transition {
    pub target: StateId,
    pub sym_in: u16,
    pub sym_out: u16,
}

/// A transition resolved to labels and symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionView<'a, L, I, O> {
    pub source_id: StateId,
    pub target_id: StateId,
    pub source: &'a L,
    pub target: &'a L,
    pub input: &'a I,
    pub output: &'a O,
}

impl<L: StateLabel, I: Symbol, O: Symbol> TransitionView<'_, L, I, O> {
    /// Sort key used for listing: source label, then input symbol.
    pub fn sort_key(&self) -> (&L, &I) {
        (self.source, self.input)
    }
}

impl<L: StateLabel, I: Symbol, O: Symbol> fmt::Display for TransitionView<'_, L, I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transition from {:?} to {:?}: {:?}|{:?}",
            self.source, self.target, self.input, self.output
        )
    }
}
