// Ordered alphabets with compact symbol ordinals.

use crate::error::{FsmError, Result};
use crate::symbol::{Symbol, describe};
use hashbrown::HashMap;

/// A finite, ordered, duplicate-free set of symbols.
///
/// Each symbol is assigned a `u16` ordinal equal to its position in the
/// declaration order. Transition tables store ordinals rather than symbols,
/// and the declaration order fixes the order in which a reachability closure
/// explores outgoing transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<S: Symbol> {
    /// Maps ordinal to symbol.
    symbols: Vec<S>,
    /// Maps symbol to ordinal.
    ordinals: HashMap<S, u16>,
}

impl<S: Symbol> Alphabet<S> {
    /// Build an alphabet from symbols in declaration order.
    ///
    /// Fails with [`FsmError::EmptyAlphabet`] when no symbols are given and
    /// with [`FsmError::DuplicateSymbol`] when a symbol is repeated.
    pub fn new<T>(symbols: T) -> Result<Self>
    where
        T: IntoIterator<Item = S>,
    {
        let symbols: Vec<S> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(FsmError::EmptyAlphabet);
        }
        if symbols.len() > u16::MAX as usize {
            return Err(FsmError::TooManySymbols {
                count: symbols.len(),
            });
        }

        let mut ordinals = HashMap::with_capacity(symbols.len());
        for (i, symbol) in symbols.iter().enumerate() {
            if ordinals.insert(symbol.clone(), i as u16).is_some() {
                return Err(FsmError::DuplicateSymbol {
                    symbol: describe(symbol),
                });
            }
        }

        Ok(Self { symbols, ordinals })
    }

    /// Number of symbols. Never zero.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; empty alphabets are rejected by [`Alphabet::new`].
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Ordinal of `symbol`, if it belongs to the alphabet.
    #[inline]
    pub fn ordinal(&self, symbol: &S) -> Option<u16> {
        self.ordinals.get(symbol).copied()
    }

    /// Symbol with the given ordinal.
    ///
    /// # Panics
    ///
    /// Panics if `ordinal` is out of range. Ordinals handed out by this
    /// alphabet are always in range.
    #[inline]
    pub fn symbol(&self, ordinal: u16) -> &S {
        &self.symbols[ordinal as usize]
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.ordinals.contains_key(symbol)
    }

    /// Check that every symbol in `symbols` belongs to the alphabet.
    ///
    /// Reports the first missing symbol as [`FsmError::AlphabetMismatch`].
    pub fn require_all<'a, T>(&self, symbols: T) -> Result<()>
    where
        T: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        match symbols.into_iter().find(|s| !self.contains(s)) {
            Some(missing) => Err(FsmError::AlphabetMismatch {
                symbol: describe(missing),
            }),
            None => Ok(()),
        }
    }

    /// Translate a symbol sequence into ordinals.
    ///
    /// Fails at the first symbol outside the alphabet with
    /// [`FsmError::UnrecognizedSymbol`]; nothing is returned in that case.
    pub fn encode(&self, input: &[S]) -> Result<Vec<u16>> {
        input
            .iter()
            .enumerate()
            .map(|(position, symbol)| {
                self.ordinal(symbol)
                    .ok_or_else(|| FsmError::UnrecognizedSymbol {
                        position,
                        symbol: describe(symbol),
                    })
            })
            .collect()
    }

    /// Symbols in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.symbols.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.symbols
    }
}

impl<'a, S: Symbol> IntoIterator for &'a Alphabet<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
