//! One-call constructors, named after the transducers they build.
//!
//! ```
//! use fsm_generators::transducers;
//!
//! let t = transducers::count_subblock_occurrences([1u8, 0], [0, 1])?;
//! assert_eq!(t.apply(&[1, 0, 1, 0])?, [0, 1, 0, 1]);
//! # Ok::<(), fsm_generators::FsmError>(())
//! ```

use fsm_core::{Result, Symbol};

use crate::identity::{IdentityAutomaton, make_identity};
use crate::subblock::{SubblockAutomaton, make_subblock_counter};

/// The identity transducer over `input_alphabet`.
pub fn identity<S, T>(input_alphabet: T) -> Result<IdentityAutomaton<S>>
where
    S: Symbol,
    T: IntoIterator<Item = S>,
{
    make_identity(input_alphabet)
}

/// A transducer marking every (possibly overlapping) occurrence of `block`
/// with `1`, and every other position with `0`.
pub fn count_subblock_occurrences<S, B, T>(block: B, input_alphabet: T) -> Result<SubblockAutomaton<S>>
where
    S: Symbol,
    B: IntoIterator<Item = S>,
    T: IntoIterator<Item = S>,
{
    make_subblock_counter(block, input_alphabet)
}
