// Counting (possibly overlapping) occurrences of a fixed block.

use fsm_core::{Alphabet, FsmError, Result, Symbol};
use fsm_engine::{Automaton, BuildConfig, build_with_config};
use log::debug;

use crate::prefix::{PrefixFunction, rescan_border};

/// Output alphabet of the counter: `0` (no occurrence ends here) and `1`.
pub const COUNTER_OUTPUT: [u8; 2] = [0, 1];

/// Counter transducer. States are labelled by the currently matched proper
/// prefix of the block.
pub type SubblockAutomaton<S> = Automaton<Vec<S>, S, u8>;

/// How the next state is found once a partial match cannot simply be
/// extended.
///
/// Both strategies produce the same automaton.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureStrategy {
    /// Rescan the tail of the extended match on every transition. O(k) per
    /// transition for a block of length k.
    #[default]
    Rescan,
    /// Precompute the prefix function of the block once; amortised O(1) per
    /// transition.
    PrefixTable,
}

/// Builder for [`SubblockCounter`].
#[derive(Debug, Clone)]
pub struct SubblockCounterBuilder<S: Symbol> {
    block: Vec<S>,
    strategy: FailureStrategy,
    config: BuildConfig,
}

impl<S: Symbol> SubblockCounterBuilder<S> {
    pub fn new<T>(block: T) -> Self
    where
        T: IntoIterator<Item = S>,
    {
        Self {
            block: block.into_iter().collect(),
            strategy: FailureStrategy::default(),
            config: BuildConfig::default(),
        }
    }

    pub fn strategy(mut self, strategy: FailureStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the counter over `input_alphabet`.
    ///
    /// Validation happens before any state is discovered:
    /// - an empty block fails with [`FsmError::InvalidPattern`]
    /// - an empty alphabet or a repeated symbol fails with
    ///   [`FsmError::EmptyAlphabet`] / [`FsmError::DuplicateSymbol`]
    /// - a block symbol missing from the alphabet fails with
    ///   [`FsmError::AlphabetMismatch`]
    pub fn build<T>(&self, input_alphabet: T) -> Result<SubblockCounter<S>>
    where
        T: IntoIterator<Item = S>,
    {
        if self.block.is_empty() {
            return Err(FsmError::InvalidPattern);
        }
        let input_alphabet = Alphabet::new(input_alphabet)?;
        input_alphabet.require_all(&self.block)?;
        let output_alphabet = Alphabet::new(COUNTER_OUTPUT)?;

        let block = self.block.as_slice();
        let mut automaton = match self.strategy {
            FailureStrategy::Rescan => build_with_config(
                &self.config,
                [Vec::new()],
                |state: &Vec<S>, symbol: &S| rescan_transition(block, state, symbol),
                input_alphabet,
                output_alphabet,
            )?,
            FailureStrategy::PrefixTable => {
                let prefix_function = PrefixFunction::new(block);
                build_with_config(
                    &self.config,
                    [Vec::new()],
                    |state: &Vec<S>, symbol: &S| {
                        let (matched, full) = prefix_function.step(block, state.len(), symbol);
                        (block[..matched].to_vec(), full as u8)
                    },
                    input_alphabet,
                    output_alphabet,
                )?
            }
        };
        automaton.mark_all_states_final();

        debug!(
            "subblock counter for block of length {} ({:?}): {} states",
            block.len(),
            self.strategy,
            automaton.state_count()
        );

        Ok(SubblockCounter {
            block: self.block.clone(),
            automaton,
        })
    }
}

/// Transition of the counter computed from its definition.
///
/// `state` is the matched prefix. If appending `symbol` still gives a proper
/// prefix of `block`, that is the next state. Otherwise the extended match is
/// either a full occurrence (emit `1`) or a dead end (emit `0`), and the next
/// state is its longest proper suffix that is a prefix of `block`.
pub fn rescan_transition<S: Symbol>(block: &[S], state: &[S], symbol: &S) -> (Vec<S>, u8) {
    let mut candidate = Vec::with_capacity(state.len() + 1);
    candidate.extend_from_slice(state);
    candidate.push(symbol.clone());

    if candidate.len() < block.len() && block.starts_with(&candidate) {
        return (candidate, 0);
    }

    let full = candidate == block;
    let keep = rescan_border(block, &candidate);
    candidate.drain(..candidate.len() - keep);
    (candidate, full as u8)
}

/// Transducer counting occurrences of a block in unary.
///
/// For a block `b_0..b_{k-1}` and input `i_0..i_L`, output `o_j` is `1` iff
/// `i_{j-k+1}..i_j == b_0..b_{k-1}`. Overlapping occurrences each count.
#[derive(Debug, Clone)]
pub struct SubblockCounter<S: Symbol> {
    block: Vec<S>,
    automaton: SubblockAutomaton<S>,
}

impl<S: Symbol> SubblockCounter<S> {
    pub fn block(&self) -> &[S] {
        &self.block
    }

    pub fn automaton(&self) -> &SubblockAutomaton<S> {
        &self.automaton
    }

    pub fn into_automaton(self) -> SubblockAutomaton<S> {
        self.automaton
    }

    /// Occurrence marks, one per input symbol.
    pub fn apply(&self, input: &[S]) -> Result<Vec<u8>> {
        self.automaton.apply(input)
    }

    /// Number of (possibly overlapping) occurrences of the block in `input`.
    pub fn count(&self, input: &[S]) -> Result<usize> {
        Ok(self
            .apply(input)?
            .into_iter()
            .filter(|&mark| mark == 1)
            .count())
    }
}

/// Build the occurrence counter for `block` over `input_alphabet` with the
/// default strategy.
pub fn make_subblock_counter<S, B, T>(block: B, input_alphabet: T) -> Result<SubblockAutomaton<S>>
where
    S: Symbol,
    B: IntoIterator<Item = S>,
    T: IntoIterator<Item = S>,
{
    SubblockCounterBuilder::new(block)
        .build(input_alphabet)
        .map(SubblockCounter::into_automaton)
}
