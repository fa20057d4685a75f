//! Symbol frequency counting.
//!
//! A [`FrequencyTable`] maps each distinct symbol to its occurrence count.
//! Entries keep first-occurrence order so that seeding the queue is
//! reproducible: [`FrequencyTable::ascending`] sorts by count and leaves
//! equal counts in the order the symbols were first seen.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Occurrence counts per distinct symbol.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    index: HashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count every symbol of `symbols`.
    ///
    /// Empty input yields an empty table; building a tree from it fails
    /// with [`Error::EmptyInput`](crate::Error::EmptyInput).
    pub fn count<'a, I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut table = Self::new();
        for symbol in symbols {
            let slot = table.slot(symbol.clone());
            *slot = slot.saturating_add(1);
        }
        table
    }

    /// Build a table from `(symbol, count)` pairs, summing repeated symbols.
    ///
    /// # Errors
    /// Returns `Error::FrequencyOverflow` if a symbol's total exceeds `u64`.
    pub fn from_counts<I: IntoIterator<Item = (S, u64)>>(counts: I) -> Result<Self> {
        let mut table = Self::new();
        for (symbol, count) in counts {
            table.add(symbol, count)?;
        }
        Ok(table)
    }

    /// Add `count` occurrences of `symbol`.
    ///
    /// # Errors
    /// Returns `Error::FrequencyOverflow` if the symbol's total exceeds `u64`;
    /// the table is left unchanged.
    pub fn add(&mut self, symbol: S, count: u64) -> Result<()> {
        let slot = self.slot(symbol);
        *slot = slot.checked_add(count).ok_or(Error::FrequencyOverflow)?;
        Ok(())
    }

    fn slot(&mut self, symbol: S) -> &mut u64 {
        let i = match self.index.get(&symbol) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(symbol.clone(), i);
                self.entries.push((symbol, 0));
                i
            }
        };
        &mut self.entries[i].1
    }

    /// Count recorded for `symbol`, if it was ever seen.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no symbol has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, &(_, c)| acc.saturating_add(c))
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.entries.iter().map(|(s, c)| (s, *c))
    }

    /// Entries in ascending count order; equal counts stay in
    /// first-occurrence order.
    pub fn ascending(&self) -> Vec<(&S, u64)> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by_key(|&(_, c)| c);
        sorted
    }
}

impl<S: Eq + Hash + Clone> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
