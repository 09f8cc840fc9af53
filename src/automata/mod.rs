mod arbitrary;
pub mod comp;
pub mod det;
mod eval;
pub mod inter;
pub mod mirror;
mod reach;
mod transitions;

use std::error::Error;
use std::{collections::BTreeSet, fmt::Display, io};

use itertools::Itertools;

use crate::alphabet::Alphabet;

pub use transitions::{TransitionType, Transitions};

/// Every state of an automaton is identified by an integer.
/// Only non-negative identifiers can be added to an automaton.
pub type StateId = i64;

/// The error returned by the algorithms on automata.
/// Adding or removing states, symbols and transitions never fails, those operations report whether they changed the automaton instead.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum AutomatonError {
    /// The automaton has no states or no symbols, see [Automaton::is_valid].
    InvalidAutomaton,
    /// The given character cannot be read as a symbol, e.g., because it is the epsilon sentinel.
    NotASymbol(char),
}

impl Display for AutomatonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutomatonError::InvalidAutomaton => {
                write!(f, "Invalid automaton: no states or no symbols")
            }
            AutomatonError::NotASymbol(c) => write!(f, "Not a symbol: {:?}", c),
        }
    }
}

impl Error for AutomatonError {}

/// A finite automaton.
/// The automaton consists of a set of states, an alphabet, a set of initial states, a set of final states and a labeled transition relation.
/// The automaton may have any number of initial states and any number of final states.
/// Transitions can be labeled with symbols of the alphabet or with epsilon.
///
/// Every state referenced by the initial states, the final states and the transitions is a state of the automaton,
/// and every symbol labeling a transition is part of the alphabet.
/// The mutating operations maintain these invariants and report whether they changed the automaton.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    states: BTreeSet<StateId>,
    alphabet: Alphabet,
    initial: BTreeSet<StateId>,
    finals: BTreeSet<StateId>,
    transitions: Transitions,
}

impl Automaton {
    /// Create a new, empty automaton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an automaton without states over the given alphabet.
    pub(crate) fn with_alphabet(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            ..Self::default()
        }
    }

    /// Returns whether the automaton has at least one state and at least one symbol.
    /// All algorithms require a valid automaton and return [AutomatonError::InvalidAutomaton] otherwise.
    pub fn is_valid(&self) -> bool {
        !self.states.is_empty() && !self.alphabet.is_empty()
    }

    pub(crate) fn check_valid(&self) -> Result<(), AutomatonError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AutomatonError::InvalidAutomaton)
        }
    }

    /* Alphabet */

    /// Adds a symbol to the alphabet.
    /// Returns false if the symbol is already present or is not admissible, see [is_symbol](crate::alphabet::is_symbol).
    pub fn add_symbol(&mut self, symbol: char) -> bool {
        self.alphabet.insert(symbol)
    }

    /// Removes a symbol from the alphabet, together with all transitions labeled with it.
    /// Returns false if the symbol is not in the alphabet.
    pub fn remove_symbol(&mut self, symbol: char) -> bool {
        if !self.alphabet.remove(symbol) {
            return false;
        }
        self.transitions.remove_label(TransitionType::Symbol(symbol));
        true
    }

    /// Returns if the symbol is in the alphabet.
    pub fn has_symbol(&self, symbol: char) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Returns the number of symbols in the alphabet.
    pub fn count_symbols(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the alphabet of the automaton.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /* States */

    /// Adds a state to the automaton.
    /// Returns false if the identifier is negative or the state already exists.
    pub fn add_state(&mut self, state: StateId) -> bool {
        state >= 0 && self.states.insert(state)
    }

    /// Removes a state from the automaton.
    /// The state is also removed from the initial and final states, and all transitions leaving or entering it are removed.
    /// Returns false if the state does not exist.
    pub fn remove_state(&mut self, state: StateId) -> bool {
        if !self.states.remove(&state) {
            return false;
        }
        self.initial.remove(&state);
        self.finals.remove(&state);
        self.transitions.remove_state(state);
        true
    }

    /// Returns if the state exists.
    pub fn has_state(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    /// Returns the number of states.
    pub fn count_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the states in ascending order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    /// Marks a state as initial.
    /// Does nothing if the state does not exist.
    pub fn set_initial_state(&mut self, state: StateId) {
        if self.has_state(state) {
            self.initial.insert(state);
        }
    }

    /// Returns if the state is an initial state.
    /// Unknown states are not initial.
    pub fn is_initial_state(&self, state: StateId) -> bool {
        self.initial.contains(&state)
    }

    /// Returns the set of initial states.
    pub fn initial_states(&self) -> &BTreeSet<StateId> {
        &self.initial
    }

    /// Marks a state as final.
    /// Does nothing if the state does not exist.
    pub fn set_final_state(&mut self, state: StateId) {
        if self.has_state(state) {
            self.finals.insert(state);
        }
    }

    /// Returns if the state is a final state.
    /// Unknown states are not final.
    pub fn is_final_state(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    /// Returns the set of final states.
    pub fn final_states(&self) -> &BTreeSet<StateId> {
        &self.finals
    }

    /* Transitions */

    /// Checks that both states exist and that the label is epsilon or a symbol of the alphabet.
    fn admits(&self, from: StateId, label: TransitionType, to: StateId) -> bool {
        let label_ok = match label {
            TransitionType::Symbol(c) => self.has_symbol(c),
            TransitionType::Epsilon => true,
        };
        label_ok && self.has_state(from) && self.has_state(to)
    }

    /// Add a transition from one state to another.
    /// The label is either a symbol or epsilon; the epsilon sentinel [EPSILON](crate::alphabet::EPSILON) is converted to an epsilon transition.
    /// Returns false if a state does not exist, the symbol is not in the alphabet, or the transition already exists.
    pub fn add_transition(
        &mut self,
        from: StateId,
        label: impl Into<TransitionType>,
        to: StateId,
    ) -> bool {
        let label = label.into();
        self.admits(from, label, to) && self.transitions.insert(from, label, to)
    }

    /// Removes a transition.
    /// Removing an epsilon transition removes all epsilon transitions leaving `from`.
    /// Returns false if the transition does not exist.
    pub fn remove_transition(
        &mut self,
        from: StateId,
        label: impl Into<TransitionType>,
        to: StateId,
    ) -> bool {
        let label = label.into();
        if !self.has_transition(from, label, to) {
            return false;
        }
        match label {
            TransitionType::Epsilon => self.transitions.remove_bucket(from, label),
            TransitionType::Symbol(_) => self.transitions.remove(from, label, to),
        }
    }

    /// Returns if the transition exists.
    /// For epsilon labels, any epsilon transition leaving `from` counts, regardless of its destination.
    pub fn has_transition(
        &self,
        from: StateId,
        label: impl Into<TransitionType>,
        to: StateId,
    ) -> bool {
        let label = label.into();
        if !self.admits(from, label, to) {
            return false;
        }
        match label {
            TransitionType::Epsilon => self.transitions.has_bucket(from, label),
            TransitionType::Symbol(_) => self.transitions.contains(from, label, to),
        }
    }

    /// Returns the number of transitions.
    pub fn count_transitions(&self) -> usize {
        self.transitions.len()
    }

    /// Returns if the automaton has at least one epsilon transition.
    pub fn has_epsilon_transition(&self) -> bool {
        self.transitions.has_epsilon()
    }

    /// Returns an iterator over all transitions as `(from, label, to)` triples, in ascending order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, TransitionType, StateId)> + '_ {
        self.transitions.iter()
    }

    /// Returns the destinations of the transitions leaving `from` with the given symbol.
    pub(crate) fn successors(
        &self,
        from: StateId,
        symbol: char,
    ) -> impl Iterator<Item = StateId> + '_ {
        self.transitions
            .destinations(from, TransitionType::Symbol(symbol))
            .into_iter()
            .flatten()
            .copied()
    }

    /* Properties */

    /// Checks if the automaton is deterministic.
    /// An automaton is deterministic if it has exactly one initial state and at most one transition per state and symbol.
    /// Epsilon transitions are not taken into account.
    pub fn is_deterministic(&self) -> Result<bool, AutomatonError> {
        self.check_valid()?;
        if self.initial.len() != 1 {
            return Ok(false);
        }
        Ok(self.states().all(|q| {
            self.alphabet
                .iter()
                .all(|c| self.successors(q, c).nth(1).is_none())
        }))
    }

    /// Checks if the automaton is complete.
    /// An automaton is complete if every state has at least one outgoing transition for every symbol of the alphabet.
    pub fn is_complete(&self) -> Result<bool, AutomatonError> {
        self.check_valid()?;
        Ok(self.states().all(|q| {
            self.alphabet
                .iter()
                .all(|c| self.successors(q, c).next().is_some())
        }))
    }

    /// Writes the human-readable representation of the automaton (see its [Display] implementation) to the given sink.
    pub fn pretty_print(&self, out: &mut impl io::Write) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

/// Lists the initial states, the final states and, for every state and symbol, the destinations of the transitions.
/// Epsilon transitions are not listed.
impl Display for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Initial states:")?;
        writeln!(f, "{}", self.initial.iter().join(" "))?;
        writeln!(f, "Final states:")?;
        writeln!(f, "{}", self.finals.iter().join(" "))?;
        writeln!(f, "Transitions:")?;
        for q in self.states() {
            writeln!(f, "For state {q}:")?;
            for c in self.alphabet.iter() {
                let dests = self.successors(q, c).join(" ");
                if dests.is_empty() {
                    writeln!(f, "For letter {c}:")?;
                } else {
                    writeln!(f, "For letter {c}: {dests}")?;
                }
            }
        }
        Ok(())
    }
}
