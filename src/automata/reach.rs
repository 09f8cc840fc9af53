//! Reachability: accessible and co-accessible states, and emptiness of the language.
//! A state is accessible if it can be reached from an initial state, and co-accessible if a final state can be reached from it.
//! Only symbol transitions are followed.

use std::collections::BTreeSet;

use super::{mirror::mirror, Automaton, AutomatonError, StateId};

impl Automaton {
    /// Returns the set of states that are reachable from an initial state, including the initial states themselves.
    /// The states are discovered by a depth-first search following the transitions of every symbol.
    pub fn accessible_states(&self) -> Result<BTreeSet<StateId>, AutomatonError> {
        self.check_valid()?;
        let mut visited = BTreeSet::new();
        let mut stack: Vec<StateId> = self.initial.iter().copied().collect();
        while let Some(q) = stack.pop() {
            if !visited.insert(q) {
                continue;
            }
            let origin = BTreeSet::from([q]);
            for c in self.alphabet.iter() {
                for p in self.step_set(&origin, c)? {
                    if !visited.contains(&p) {
                        stack.push(p);
                    }
                }
            }
        }
        Ok(visited)
    }

    /// Returns whether the automaton accepts no word at all.
    /// This is the case if it has no initial states, no final states, or no final state is accessible.
    pub fn is_language_empty(&self) -> Result<bool, AutomatonError> {
        self.check_valid()?;
        if self.initial.is_empty() || self.finals.is_empty() {
            return Ok(true);
        }
        Ok(self.accessible_states()?.is_disjoint(&self.finals))
    }

    /// Removes all states that are not accessible.
    /// If no state remains, the state `0` is added as an initial state so that the automaton stays valid.
    pub fn remove_non_accessible_states(&mut self) -> Result<(), AutomatonError> {
        let accessible = self.accessible_states()?;
        *self = self.restrict_to(&accessible).0;
        Ok(())
    }

    /// Removes all states that are not co-accessible.
    /// This is done by removing the non-accessible states of the mirror automaton and mirroring the result back.
    /// If no state remains, the automaton is left with the single non-initial state `0` that is final and loops on every symbol.
    pub fn remove_non_co_accessible_states(&mut self) -> Result<(), AutomatonError> {
        let mirrored = mirror(self)?;
        let accessible = mirrored.accessible_states()?;
        let (mut pruned, reinstated) = mirrored.restrict_to(&accessible);
        if reinstated {
            for c in self.alphabet.iter() {
                pruned.add_transition(0, c, 0);
            }
        }
        *self = mirror(&pruned)?;
        Ok(())
    }

    /// Returns a copy of the automaton that only contains the given states and the transitions between them.
    /// If none of the given states is a state of this automaton, the state `0` is added and marked initial.
    /// The second component tells whether that happened.
    fn restrict_to(&self, keep: &BTreeSet<StateId>) -> (Automaton, bool) {
        let mut aut = Automaton::with_alphabet(self.alphabet.clone());
        for q in self.states().filter(|q| keep.contains(q)) {
            aut.add_state(q);
            if self.is_initial_state(q) {
                aut.set_initial_state(q);
            }
            if self.is_final_state(q) {
                aut.set_final_state(q);
            }
        }
        for (from, label, to) in self.transitions() {
            // rejected unless both ends were kept
            aut.add_transition(from, label, to);
        }
        if aut.is_valid() {
            return (aut, false);
        }
        aut.add_state(0);
        aut.set_initial_state(0);
        (aut, true)
    }
}
