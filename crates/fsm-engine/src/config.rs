// Closure configuration.

/// Default upper bound on the number of states a closure may discover.
///
/// Acts as a safety limit against transition functions whose reachable state
/// space is unbounded.
pub const MAX_STATE_COUNT: usize = 100_000;

/// Limits applied while building an automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Maximum number of distinct states the closure may discover.
    /// Values above `u32::MAX` are clamped, since state ids are `u32`.
    pub max_states: usize,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    /// The effective state limit after clamping to the id space.
    #[inline]
    pub fn state_limit(&self) -> usize {
        self.max_states.min(u32::MAX as usize)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_states: MAX_STATE_COUNT,
        }
    }
}
