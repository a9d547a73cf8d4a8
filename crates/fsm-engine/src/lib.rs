//! Deterministic transducer host.
//!
//! Automata are not written down state by state. A caller declares initial
//! states, alphabets and a transition function, and [`closure::build`]
//! discovers the reachable part by repeatedly applying the function until no
//! new state appears. The resulting [`Automaton`] is immutable apart from
//! final-state marking and can be applied to many inputs concurrently.
//!
//! # Architecture
//!
//! - [`state`] -- State labels, integer ids and final flags
//! - [`transition`] -- Packed transition rows and printable views
//! - [`config`] -- Closure limits
//! - [`closure`] -- Reachability closure over a transition function
//! - [`automaton`] -- The built automaton: inspection and application

pub mod automaton;
pub mod closure;
pub mod config;
pub mod state;
pub mod transition;

pub use automaton::{Automaton, ProcessOutcome};
pub use closure::{build, build_with_config};
pub use config::BuildConfig;
pub use fsm_core::{Alphabet, FsmError, Result, Symbol};
pub use state::{StateId, StateLabel};
pub use transition::{Transition, TransitionView};
