// Symbol bound for alphabet elements.

use std::fmt::Debug;
use std::hash::Hash;

/// An atomic element of an alphabet.
///
/// Anything hashable, totally ordered and cheaply cloneable qualifies: digits,
/// characters, small enums, strings. The ordering is only used to list
/// transitions in a stable order.
pub trait Symbol: Clone + Eq + Hash + Ord + Debug {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Render a symbol for error messages.
///
/// Errors are not generic over the symbol type, so offending symbols are
/// stored in their `Debug` form.
pub fn describe<S: Symbol>(symbol: &S) -> String {
    format!("{symbol:?}")
}
