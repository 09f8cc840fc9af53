//! Completion and complementation of an automaton.
//! An automaton is complete if every state has an outgoing transition for every symbol of the alphabet.
//! The complement of an automaton is an automaton that recognizes precisely those words over the alphabet that are not recognized by the given automaton.

use super::{det::determinize, Automaton, AutomatonError, StateId};

/// Computes a complete automaton that accepts the same language as `a`.
///
/// - If the language of `a` is empty, the result is a single initial, non-final state `0` with a self-loop on every symbol.
/// - If `a` is already complete, the result is a copy of `a`.
/// - Otherwise, a trap state is added that loops on every symbol, and every missing transition is directed to it.
///   The trap state is the smallest non-negative identifier not used by `a`.
pub fn complete(a: &Automaton) -> Result<Automaton, AutomatonError> {
    if a.is_language_empty()? {
        let mut total = Automaton::with_alphabet(a.alphabet.clone());
        total.add_state(0);
        total.set_initial_state(0);
        for c in a.alphabet.iter() {
            total.add_transition(0, c, 0);
        }
        return Ok(total);
    }
    if a.is_complete()? {
        return Ok(a.clone());
    }

    let size = a.count_states() as StateId;
    let trap = (0..size).find(|&q| !a.has_state(q)).unwrap_or(size);

    let mut completed = a.clone();
    completed.add_state(trap);
    for q in a.states() {
        for c in a.alphabet.iter() {
            if a.successors(q, c).next().is_none() {
                completed.add_transition(q, c, trap);
            }
        }
    }
    for c in a.alphabet.iter() {
        completed.add_transition(trap, c, trap);
    }
    Ok(completed)
}

/// Computes the complement of an automaton.
/// The resulting automaton accepts all words over the alphabet of `a` that are not accepted by `a` and rejects all words that are.
/// This is achieved by swapping the final and non-final states of the deterministic and complete automaton obtained from `a`.
/// The result is therefore always deterministic and complete.
///
/// If the automaton is not deterministic, it is determinized first, which takes O(2^n) time, where n is the number of states.
pub fn complement(a: &Automaton) -> Result<Automaton, AutomatonError> {
    let mut comp = complete(&determinize(a)?)?;
    comp.finals = comp.states().filter(|q| !comp.finals.contains(q)).collect();
    Ok(comp)
}

impl Automaton {
    /// Returns a complete automaton with the same language as `a`, see [complete].
    pub fn create_complete(a: &Automaton) -> Result<Automaton, AutomatonError> {
        complete(a)
    }

    /// Returns the complement of `a`, see [complement].
    pub fn create_complement(a: &Automaton) -> Result<Automaton, AutomatonError> {
        complement(a)
    }
}
