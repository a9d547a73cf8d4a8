// Longest suffix that is also a prefix: rescanning and prefix-function table.
//
// Both strategies answer the same question for the subblock counter: after a
// partial match of `matched` pattern symbols is followed by `symbol`, how many
// pattern symbols are matched now, and was a full occurrence completed?

/// Length of the longest proper suffix of `candidate` that is a prefix of
/// `pattern`.
///
/// Searches the smallest `m >= 1` such that `candidate[m..]` is a prefix of
/// `pattern` and returns `candidate.len() - m`. Always succeeds because the
/// empty tail qualifies. Costs O(len²) in the worst case.
pub fn rescan_border<S: PartialEq>(pattern: &[S], candidate: &[S]) -> usize {
    (1..=candidate.len())
        .map(|m| &candidate[m..])
        .find(|tail| pattern.starts_with(tail))
        .map_or(0, <[S]>::len)
}

/// Prefix function of a pattern.
///
/// `borders[i]` is the length of the longest proper suffix of
/// `pattern[..=i]` that is also a prefix of `pattern`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFunction {
    borders: Vec<usize>,
}

impl PrefixFunction {
    pub fn new<S: PartialEq>(pattern: &[S]) -> Self {
        let mut borders = vec![0; pattern.len()];
        let mut k = 0;
        for i in 1..pattern.len() {
            while k > 0 && pattern[i] != pattern[k] {
                k = borders[k - 1];
            }
            if pattern[i] == pattern[k] {
                k += 1;
            }
            borders[i] = k;
        }
        Self { borders }
    }

    /// Longest proper border of the first `len` pattern symbols (`len >= 1`).
    #[inline]
    pub fn border(&self, len: usize) -> usize {
        self.borders[len - 1]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.borders
    }

    /// Advance a partial match of `matched < pattern.len()` symbols by
    /// `symbol`.
    ///
    /// Returns the new match length and whether a full occurrence of
    /// `pattern` ended at `symbol`. The new length is always below
    /// `pattern.len()`: a completed occurrence falls back to its longest
    /// proper border.
    pub fn step<S: PartialEq>(&self, pattern: &[S], matched: usize, symbol: &S) -> (usize, bool) {
        debug_assert!(matched < pattern.len());
        if pattern[matched] == *symbol {
            if matched + 1 < pattern.len() {
                return (matched + 1, false);
            }
            return (self.border(pattern.len()), true);
        }

        let mut m = matched;
        while m > 0 && pattern[m] != *symbol {
            m = self.border(m);
        }
        if pattern[m] == *symbol {
            (m + 1, false)
        } else {
            (0, false)
        }
    }
}
