// Error taxonomy for transducer construction and application.

/// Error type shared by the alphabet, host and generator crates.
///
/// Construction errors are raised before any state is discovered, so a
/// partially built automaton is never returned. Application errors are raised
/// at the first offending input symbol and carry no partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FsmError {
    #[error("pattern must contain at least one symbol")]
    InvalidPattern,
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,
    #[error("symbol {symbol} occurs more than once in the alphabet")]
    DuplicateSymbol { symbol: String },
    #[error("symbol {symbol} is not in the declared alphabet")]
    AlphabetMismatch { symbol: String },
    #[error("alphabet has {count} symbols, at most {} are supported", u16::MAX)]
    TooManySymbols { count: usize },
    #[error("input symbol {symbol} at position {position} is not in the input alphabet")]
    UnrecognizedSymbol { position: usize, symbol: String },
    #[error("automaton has no initial state")]
    NoInitialState,
    #[error("automaton has {count} initial states, exactly one is required")]
    AmbiguousInitialState { count: usize },
    #[error("reachability closure exceeded the limit of {limit} states")]
    StateLimitExceeded { limit: usize },
}

/// Result type for transducer operations.
pub type Result<T> = std::result::Result<T, FsmError>;
