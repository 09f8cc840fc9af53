//! The input alphabet of an automaton.
//! An alphabet is a finite set of symbols. Every symbol is a single `char` that is visible when printed,
//! i.e., it is neither whitespace nor a control character.
//! The epsilon sentinel [EPSILON] is never part of an alphabet, but it can label transitions.

use std::{collections::BTreeSet, fmt::Display};

use itertools::Itertools;

/// The label of transitions that are taken without consuming a symbol.
pub const EPSILON: char = '\0';

/// Returns true if `c` may be admitted to an alphabet.
///
/// # Examples
/// ```
/// use automate::alphabet::{is_symbol, EPSILON};
/// assert!(is_symbol('a'));
/// assert!(is_symbol('é'));
/// assert!(!is_symbol(' '));
/// assert!(!is_symbol('\n'));
/// assert!(!is_symbol(EPSILON));
/// ```
pub fn is_symbol(c: char) -> bool {
    c != EPSILON && !c.is_whitespace() && !c.is_control()
}

/// A set of symbols.
/// Insertion enforces the admission rule of [is_symbol], so an alphabet never contains whitespace, control characters or [EPSILON].
/// Symbols are kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: BTreeSet<char>,
}

impl Alphabet {
    /// Returns an empty alphabet.
    pub fn empty() -> Self {
        Alphabet::default()
    }

    /// Check if the alphabet is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if a symbol is in the alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// Inserts a symbol into the alphabet.
    /// Returns false if the symbol is not admissible or already present.
    pub fn insert(&mut self, c: char) -> bool {
        is_symbol(c) && self.symbols.insert(c)
    }

    /// Removes a symbol from the alphabet.
    /// Returns false if the symbol was not present.
    pub fn remove(&mut self, c: char) -> bool {
        self.symbols.remove(&c)
    }

    /// Iterates over the symbols in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Returns the symbols that are contained in both alphabets.
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            symbols: self.symbols.intersection(&other.symbols).copied().collect(),
        }
    }
}

impl FromIterator<char> for Alphabet {
    /// Collects the admissible symbols of the iterator, silently skipping all others.
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut alphabet = Alphabet::empty();
        for c in iter {
            alphabet.insert(c);
        }
        alphabet
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}
