//! Generators for common finite-state transducers.
//!
//! - [`identity`] -- The identity transducer over an alphabet
//! - [`subblock`] -- Unary counting of (overlapping) block occurrences
//! - [`prefix`] -- Suffix/prefix overlap computations used by the counter
//! - [`transducers`] -- One-call constructors for all generators
//!
//! Every generator validates its arguments before handing a transition
//! function to [`fsm_engine::build`], so a failed call never yields a
//! partially built automaton.

pub mod identity;
pub mod prefix;
pub mod subblock;
pub mod transducers;

pub use fsm_core::{Alphabet, FsmError, Result, Symbol};
pub use fsm_engine::{Automaton, BuildConfig};
pub use identity::{IdentityAutomaton, make_identity};
pub use subblock::{
    FailureStrategy, SubblockAutomaton, SubblockCounter, SubblockCounterBuilder,
    make_subblock_counter,
};
