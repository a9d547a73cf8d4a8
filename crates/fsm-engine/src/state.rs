// State storage: labels, ids, final flags.

use fsm_core::FsmError;
use hashbrown::HashMap;

/// Bound for state labels. Labels are compared, hashed and ordered exactly
/// like alphabet symbols.
pub use fsm_core::Symbol as StateLabel;

/// Dense integer id of a discovered state, assigned in discovery order.
pub type StateId = u32;

/// Discovered states of an automaton.
///
/// Labels are interned once: the closure looks a label up by value a single
/// time and works with the integer id from then on.
#[derive(Debug, Clone)]
pub struct States<L: StateLabel> {
    /// Maps state id to label.
    labels: Vec<L>,
    /// Maps label to state id.
    ids: HashMap<L, StateId>,
    /// Final flag per state id. False until explicitly set.
    finals: Vec<bool>,
}

impl<L: StateLabel> States<L> {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            ids: HashMap::new(),
            finals: Vec::new(),
        }
    }

    /// Look up `label`, registering it as a new state if unseen.
    ///
    /// Returns the id and whether the state was newly registered. Fails when
    /// registering would exceed `limit` states.
    pub fn intern(&mut self, label: L, limit: usize) -> Result<(StateId, bool), FsmError> {
        if let Some(&id) = self.ids.get(&label) {
            return Ok((id, false));
        }
        if self.labels.len() >= limit {
            return Err(FsmError::StateLimitExceeded { limit });
        }
        let id = self.labels.len() as StateId;
        self.ids.insert(label.clone(), id);
        self.labels.push(label);
        self.finals.push(false);
        Ok((id, true))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn label(&self, id: StateId) -> &L {
        &self.labels[id as usize]
    }

    pub fn id(&self, label: &L) -> Option<StateId> {
        self.ids.get(label).copied()
    }

    #[inline]
    pub fn is_final(&self, id: StateId) -> bool {
        self.finals[id as usize]
    }

    pub fn set_final(&mut self, id: StateId, is_final: bool) {
        self.finals[id as usize] = is_final;
    }

    pub fn mark_all_final(&mut self) {
        self.finals.fill(true);
    }

    /// Labels in id order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }
}

impl<L: StateLabel> Default for States<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_assigns_ids_in_order() {
        let mut states = States::new();
        assert_eq!(states.intern("a", 10).unwrap(), (0, true));
        assert_eq!(states.intern("b", 10).unwrap(), (1, true));
        assert_eq!(states.intern("a", 10).unwrap(), (0, false));
        assert_eq!(states.len(), 2);
        assert_eq!(*states.label(1), "b");
        assert_eq!(states.id(&"b"), Some(1));
        assert_eq!(states.id(&"c"), None);
    }

    #[test]
    fn intern_respects_limit() {
        let mut states = States::new();
        states.intern(0u8, 1).unwrap();
        // Known labels are still found at the limit.
        assert_eq!(states.intern(0u8, 1).unwrap(), (0, false));
        let err = states.intern(1u8, 1).unwrap_err();
        assert_eq!(err, FsmError::StateLimitExceeded { limit: 1 });
    }

    #[test]
    fn final_flags_default_false() {
        let mut states = States::new();
        states.intern('x', 10).unwrap();
        states.intern('y', 10).unwrap();
        assert!(!states.is_final(0));
        states.set_final(1, true);
        assert!(!states.is_final(0));
        assert!(states.is_final(1));
        states.mark_all_final();
        assert!(states.is_final(0));
    }
}
