//! Computation of the intersection of two automata, and the language-inclusion test built on top of it.
//! The intersection of two automata is an automaton that accepts the words accepted by both automata.
//! The intersection is computed by constructing a product automaton.
//! The product automaton has a state for each pair of states from the two input automata,
//! and a transition for each pair of transitions that are labeled with the same symbol.

use indexmap::IndexMap;
use itertools::iproduct;

use super::{
    comp::{complement, complete},
    Automaton, AutomatonError, StateId,
};

/// Computes the intersection of two automata.
/// The product automaton is built over the symbols that are contained in both alphabets.
/// It has exactly |L| * |R| states, where L and R are the states of the input automata,
/// numbered `0, 1, ...` in ascending order of the pairs of states.
/// A product state is initial (final) if both of its components are initial (final).
///
/// If the alphabets have no symbol in common, the result is the complete automaton over the alphabet of `lhs` that accepts nothing.
pub fn intersect(lhs: &Automaton, rhs: &Automaton) -> Result<Automaton, AutomatonError> {
    lhs.check_valid()?;
    rhs.check_valid()?;
    let shared = lhs.alphabet.intersect(&rhs.alphabet);
    if shared.is_empty() {
        let mut rejecting = Automaton::with_alphabet(lhs.alphabet.clone());
        rejecting.add_state(0);
        rejecting.set_initial_state(0);
        return complete(&rejecting);
    }

    let mut product = Automaton::with_alphabet(shared.clone());
    // Maps pairs of states from the input automata to the corresponding state in the product automaton.
    let mut state_map: IndexMap<(StateId, StateId), StateId> = IndexMap::new();
    for (l, r) in iproduct!(lhs.states(), rhs.states.iter().copied()) {
        let q = state_map.len() as StateId;
        product.add_state(q);
        if lhs.is_initial_state(l) && rhs.is_initial_state(r) {
            product.set_initial_state(q);
        }
        if lhs.is_final_state(l) && rhs.is_final_state(r) {
            product.set_final_state(q);
        }
        state_map.insert((l, r), q);
    }

    for (&(l, r), &q) in &state_map {
        for c in shared.iter() {
            let rdests: Vec<StateId> = rhs.successors(r, c).collect();
            for (pl, pr) in iproduct!(lhs.successors(l, c), rdests) {
                if let Some(&p) = state_map.get(&(pl, pr)) {
                    product.add_transition(q, c, p);
                }
            }
        }
    }
    Ok(product)
}

impl Automaton {
    /// Returns the intersection of `lhs` and `rhs`, see [intersect].
    pub fn create_intersection(
        lhs: &Automaton,
        rhs: &Automaton,
    ) -> Result<Automaton, AutomatonError> {
        intersect(lhs, rhs)
    }

    /// Returns whether no word is accepted by both automata.
    pub fn has_empty_intersection_with(&self, other: &Automaton) -> Result<bool, AutomatonError> {
        intersect(self, other)?.is_language_empty()
    }

    /// Returns whether every word accepted by this automaton is also accepted by `other`.
    ///
    /// An automaton with an empty language is included in every automaton.
    /// Otherwise, the automaton is first reduced to its accessible and co-accessible states.
    /// If any remaining transition is labeled with a symbol that is not in the alphabet of `other`, the automaton is not included.
    /// Else, it is included if and only if its intersection with the complement of `other` is empty.
    pub fn is_included_in(&self, other: &Automaton) -> Result<bool, AutomatonError> {
        other.check_valid()?;
        if self.is_language_empty()? {
            return Ok(true);
        }
        let mut trimmed = self.clone();
        trimmed.remove_non_accessible_states()?;
        trimmed.remove_non_co_accessible_states()?;
        let foreign_symbol = trimmed
            .transitions()
            .filter_map(|(_, label, _)| label.symbol())
            .any(|c| !other.has_symbol(c));
        if foreign_symbol {
            return Ok(false);
        }
        trimmed.has_empty_intersection_with(&complement(other)?)
    }
}
