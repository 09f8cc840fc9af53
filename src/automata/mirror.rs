//! Mirroring (reversal) of an automaton.
//! The mirror of an automaton accepts exactly the reversed words of the automaton.

use super::{Automaton, AutomatonError};

/// Computes the mirror of an automaton.
/// The mirror has the same states and the same alphabet. Initial states become final states and vice versa,
/// and every transition `(q, l, p)` becomes `(p, l, q)`, including epsilon transitions.
pub fn mirror(a: &Automaton) -> Result<Automaton, AutomatonError> {
    a.check_valid()?;
    let mut mirrored = Automaton::with_alphabet(a.alphabet.clone());
    for q in a.states() {
        mirrored.add_state(q);
    }
    for &q in a.final_states() {
        mirrored.set_initial_state(q);
    }
    for &q in a.initial_states() {
        mirrored.set_final_state(q);
    }
    for (from, label, to) in a.transitions() {
        mirrored.add_transition(to, label, from);
    }
    Ok(mirrored)
}

impl Automaton {
    /// Returns the mirror of `a`, see [mirror].
    pub fn create_mirror(a: &Automaton) -> Result<Automaton, AutomatonError> {
        mirror(a)
    }
}
