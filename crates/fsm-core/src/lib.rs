//! Shared types for finite-state transducer construction.
//!
//! - [`symbol`] -- The [`Symbol`](symbol::Symbol) bound for alphabet elements
//! - [`alphabet`] -- Ordered, duplicate-free alphabets with `u16` ordinals
//! - [`error`] -- The [`FsmError`](error::FsmError) taxonomy shared by all crates

pub mod alphabet;
pub mod error;
pub mod symbol;

pub use alphabet::Alphabet;
pub use error::{FsmError, Result};
pub use symbol::Symbol;
