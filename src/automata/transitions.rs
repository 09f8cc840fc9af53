//! The labeled transition relation of an automaton.
//! The relation is an index from an origin state and a label to the set of destination states.
//! States are referred to by their identifiers only, the relation does not know which identifiers are valid.
//! Checking referential integrity against the states and the alphabet is the job of the [Automaton](super::Automaton).

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

use crate::alphabet::EPSILON;

use super::StateId;

/// The type of a transition.
/// A transition is either labeled with a symbol of the alphabet or it is an epsilon transition.
/// Epsilon transitions are carried by the relation, but none of the algorithms follow them.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum TransitionType {
    /// A transition that is taken when reading the given symbol.
    Symbol(char),
    /// An epsilon transition that is taken without consuming any input.
    Epsilon,
}

impl TransitionType {
    /// Returns true if the transition is an epsilon transition.
    pub fn is_epsilon(&self) -> bool {
        matches!(self, TransitionType::Epsilon)
    }

    /// Returns the symbol of the transition, or `None` for epsilon transitions.
    pub fn symbol(&self) -> Option<char> {
        match self {
            TransitionType::Symbol(c) => Some(*c),
            TransitionType::Epsilon => None,
        }
    }
}

impl From<char> for TransitionType {
    /// Maps the [EPSILON] sentinel to [TransitionType::Epsilon] and every other character to a symbol transition.
    fn from(c: char) -> Self {
        if c == EPSILON {
            TransitionType::Epsilon
        } else {
            TransitionType::Symbol(c)
        }
    }
}

impl Display for TransitionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionType::Symbol(c) => write!(f, "{}", c),
            TransitionType::Epsilon => write!(f, "ε"),
        }
    }
}

/// The transition relation.
/// Empty destination sets and origins without any outgoing bucket are never stored,
/// so the absence of a key and an empty set are indistinguishable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transitions {
    map: BTreeMap<StateId, BTreeMap<TransitionType, BTreeSet<StateId>>>,
}

impl Transitions {
    /// Creates an empty relation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the relation has no transitions at all.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Inserts the triple. Returns false if it was already present.
    pub fn insert(&mut self, from: StateId, label: TransitionType, to: StateId) -> bool {
        self.map
            .entry(from)
            .or_default()
            .entry(label)
            .or_default()
            .insert(to)
    }

    /// Returns the destinations of `from` under `label`, if there are any.
    pub fn destinations(&self, from: StateId, label: TransitionType) -> Option<&BTreeSet<StateId>> {
        self.map.get(&from).and_then(|buckets| buckets.get(&label))
    }

    /// Returns true if `from` has at least one outgoing transition labeled `label`.
    pub fn has_bucket(&self, from: StateId, label: TransitionType) -> bool {
        self.destinations(from, label).is_some()
    }

    /// Returns true if the triple is present.
    pub fn contains(&self, from: StateId, label: TransitionType, to: StateId) -> bool {
        self.destinations(from, label)
            .is_some_and(|dests| dests.contains(&to))
    }

    /// Removes the triple. Returns false if it was not present.
    pub fn remove(&mut self, from: StateId, label: TransitionType, to: StateId) -> bool {
        let Some(buckets) = self.map.get_mut(&from) else {
            return false;
        };
        let removed = match buckets.get_mut(&label) {
            Some(dests) => {
                let removed = dests.remove(&to);
                if dests.is_empty() {
                    buckets.remove(&label);
                }
                removed
            }
            None => false,
        };
        if buckets.is_empty() {
            self.map.remove(&from);
        }
        removed
    }

    /// Removes every transition of `from` labeled `label`. Returns false if there was none.
    pub fn remove_bucket(&mut self, from: StateId, label: TransitionType) -> bool {
        let Some(buckets) = self.map.get_mut(&from) else {
            return false;
        };
        let removed = buckets.remove(&label).is_some();
        if buckets.is_empty() {
            self.map.remove(&from);
        }
        removed
    }

    /// Removes every transition labeled `label`, from any origin.
    pub fn remove_label(&mut self, label: TransitionType) {
        for buckets in self.map.values_mut() {
            buckets.remove(&label);
        }
        self.map.retain(|_, buckets| !buckets.is_empty());
    }

    /// Removes every transition that leaves or enters `state`.
    pub fn remove_state(&mut self, state: StateId) {
        self.map.remove(&state);
        for buckets in self.map.values_mut() {
            for dests in buckets.values_mut() {
                dests.remove(&state);
            }
            buckets.retain(|_, dests| !dests.is_empty());
        }
        self.map.retain(|_, buckets| !buckets.is_empty());
    }

    /// Returns true if any epsilon transition is present.
    pub fn has_epsilon(&self) -> bool {
        self.map
            .values()
            .any(|buckets| buckets.contains_key(&TransitionType::Epsilon))
    }

    /// Returns the number of (origin, label, destination) triples.
    pub fn len(&self) -> usize {
        self.map
            .values()
            .flat_map(|buckets| buckets.values())
            .map(|dests| dests.len())
            .sum()
    }

    /// Iterates over all triples in ascending order of origin, label and destination.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, TransitionType, StateId)> + '_ {
        self.map.iter().flat_map(|(&from, buckets)| {
            buckets
                .iter()
                .flat_map(move |(&label, dests)| dests.iter().map(move |&to| (from, label, to)))
        })
    }
}
