//! Determinization of non-deterministic finite automata.
//! An automaton is deterministic if it has exactly one initial state and for each state and each symbol in the alphabet there is at most one transition.

use std::collections::{BTreeSet, VecDeque};

use bit_set::BitSet;
use indexmap::{IndexMap, IndexSet};

use super::{Automaton, AutomatonError, StateId};

/// A set of states. Each set of states corresponds to a single state in the determinized automaton.
/// The set is implemented as a bit set over the positions of the states in the state index of the automaton that is being determinized.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct StateSet(BitSet);

impl StateSet {
    /// Collects the given states into a set, using their positions in `index`.
    fn from_states<'a>(
        states: impl IntoIterator<Item = &'a StateId>,
        index: &IndexSet<StateId>,
    ) -> Self {
        let mut set = BitSet::default();
        for i in states.into_iter().filter_map(|q| index.get_index_of(q)) {
            set.insert(i);
        }
        Self(set)
    }

    /// Returns the states contained in the set.
    fn states(&self, index: &IndexSet<StateId>) -> BTreeSet<StateId> {
        self.0
            .iter()
            .filter_map(|i| index.get_index(i))
            .copied()
            .collect()
    }
}

/// Determinizes an automaton.
/// The result is a deterministic automaton recognizing the same language as the input automaton.
///
/// If the automaton is already deterministic, the result is a copy of it without the states that are not accessible.
/// Otherwise, the function uses the subset construction algorithm, starting from the set of initial states.
/// Every distinct set of states that is discovered becomes one state of the result, numbered `0, 1, ...` in order of discovery.
/// The symbols are visited in ascending order, and an empty set of successors does not produce a transition.
/// A state of the result is final if its set contains a final state of the input automaton.
/// Epsilon transitions are ignored.
///
/// As a result, the number of states in the resulting automaton can be exponential in the number of states of the input automaton.
pub fn determinize(a: &Automaton) -> Result<Automaton, AutomatonError> {
    if a.is_deterministic()? {
        let mut det = a.clone();
        det.remove_non_accessible_states()?;
        return Ok(det);
    }

    let index: IndexSet<StateId> = a.states().collect();
    let mut det = Automaton::with_alphabet(a.alphabet.clone());
    // Maps a set of states of the input automaton to a state of the deterministic automaton
    let mut state_map: IndexMap<StateSet, StateId> = IndexMap::new();
    // The queue of sets to process
    let mut queue: VecDeque<StateSet> = VecDeque::new();

    // The initial set may be empty if there are no initial states
    let initial = StateSet::from_states(a.initial_states(), &index);
    det.add_state(0);
    det.set_initial_state(0);
    if !a.initial_states().is_disjoint(a.final_states()) {
        det.set_final_state(0);
    }
    state_map.insert(initial.clone(), 0);
    queue.push_back(initial);

    while let Some(subset) = queue.pop_front() {
        let from = state_map[&subset];
        let origins = subset.states(&index);
        for c in a.alphabet.iter() {
            let image = a.step_set(&origins, c)?;
            if image.is_empty() {
                continue;
            }
            let is_final = !image.is_disjoint(a.final_states());
            let image = StateSet::from_states(&image, &index);
            let next = state_map.len() as StateId;
            let to = *state_map.entry(image.clone()).or_insert_with(|| {
                det.add_state(next);
                if is_final {
                    det.set_final_state(next);
                }
                queue.push_back(image);
                next
            });
            det.add_transition(from, c, to);
        }
    }
    Ok(det)
}

impl Automaton {
    /// Returns a deterministic automaton with the same language as `a`, see [determinize].
    pub fn create_deterministic(a: &Automaton) -> Result<Automaton, AutomatonError> {
        determinize(a)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::alphabet::EPSILON;
    use crate::automata::arbitrary::words;

    use super::*;

    fn with_states(n: StateId, symbols: &str) -> Automaton {
        let mut a = Automaton::new();
        for i in 0..n {
            a.add_state(i);
        }
        for c in symbols.chars() {
            a.add_symbol(c);
        }
        a
    }

    #[test]
    fn test_determinize_invalid() {
        let a = with_states(0, "a");
        assert_eq!(determinize(&a), Err(AutomatonError::InvalidAutomaton));
    }

    #[test]
    fn test_determinize_deterministic_prunes() {
        let mut a = with_states(3, "a");
        a.set_initial_state(0);
        a.set_final_state(1);
        a.add_transition(0, 'a', 1);
        a.add_transition(2, 'a', 1);
        let det = Automaton::create_deterministic(&a).unwrap();
        assert_eq!(det.states().collect::<Vec<_>>(), vec![0, 1]);
        assert!(det.has_transition(0, 'a', 1));
        assert_eq!(det.count_transitions(), 1);
    }

    #[test]
    fn test_determinize_basic() {
        // -> 0 --a--> 1, 2
        //    1 --b--> 3*
        //    2 --c--> 3*
        let mut a = with_states(4, "abc");
        a.set_initial_state(0);
        a.set_final_state(3);
        a.add_transition(0, 'a', 1);
        a.add_transition(0, 'a', 2);
        a.add_transition(1, 'b', 3);
        a.add_transition(2, 'c', 3);
        let det = determinize(&a).unwrap();
        assert!(det.is_deterministic().unwrap());
        assert_eq!(det.count_states(), 3);
        // {0} -a-> {1, 2}, {1, 2} -b-> {3}, {1, 2} -c-> {3}
        assert!(det.has_transition(0, 'a', 1));
        assert!(det.has_transition(1, 'b', 2));
        assert!(det.has_transition(1, 'c', 2));
        assert_eq!(det.final_states().iter().copied().collect::<Vec<_>>(), vec![2]);
        assert!(det.matches("ab").unwrap());
        assert!(det.matches("ac").unwrap());
        assert!(!det.matches("a").unwrap());
        assert!(!det.matches("bc").unwrap());
    }

    #[test]
    fn test_determinize_collapses_equal_subsets() {
        let mut a = with_states(3, "a");
        a.set_initial_state(0);
        a.set_final_state(2);
        for (from, to) in [(0, 1), (0, 2), (1, 1), (1, 2), (2, 1), (2, 2)] {
            a.add_transition(from, 'a', to);
        }
        let det = determinize(&a).unwrap();
        assert_eq!(det.count_states(), 2);
        assert!(det.has_transition(0, 'a', 1));
        assert!(det.has_transition(1, 'a', 1));
        assert_eq!(det.count_transitions(), 2);
    }

    #[test]
    fn test_determinize_subset_count() {
        // -> 0 --a--> 1, 2
        //    0 --b--> 0
        //    1 --a--> 2
        //   *2 --a--> 0, 2
        //    2 --b--> 1
        let mut a = with_states(3, "ab");
        a.set_initial_state(0);
        a.set_final_state(2);
        a.add_transition(0, 'a', 1);
        a.add_transition(0, 'a', 2);
        a.add_transition(0, 'b', 0);
        a.add_transition(1, 'a', 2);
        a.add_transition(2, 'a', 0);
        a.add_transition(2, 'a', 2);
        a.add_transition(2, 'b', 1);
        let det = determinize(&a).unwrap();
        // {0}, {1, 2}, {0, 2}, {1}, {0, 1, 2}, {0, 1}, {2}
        assert_eq!(det.count_states(), 7);
        assert_eq!(
            det.final_states().iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 4, 6]
        );
        assert!(det.is_deterministic().unwrap());
        assert!(!det.has_transition(3, 'b', 3));
    }

    #[test]
    fn test_determinize_two_initial_states() {
        let mut a = with_states(2, "a");
        a.set_initial_state(0);
        a.set_initial_state(1);
        a.set_final_state(1);
        let det = determinize(&a).unwrap();
        assert_eq!(det.count_states(), 1);
        assert!(det.is_initial_state(0));
        assert!(det.is_final_state(0));
        assert!(det.matches("").unwrap());
        assert!(!det.matches("a").unwrap());
    }

    #[test]
    fn test_determinize_no_initial_state() {
        let mut a = with_states(2, "a");
        a.set_final_state(1);
        a.add_transition(0, 'a', 1);
        let det = determinize(&a).unwrap();
        assert_eq!(det.count_states(), 1);
        assert!(det.is_initial_state(0));
        assert!(!det.is_final_state(0));
        assert_eq!(det.count_transitions(), 0);
    }

    #[test]
    fn test_determinize_ignores_epsilon() {
        let mut a = with_states(2, "a");
        a.set_initial_state(0);
        a.set_final_state(1);
        a.add_transition(0, EPSILON, 1);
        a.add_transition(0, 'a', 0);
        a.add_transition(0, 'a', 1);
        let det = determinize(&a).unwrap();
        assert!(!det.has_epsilon_transition());
        assert!(!det.matches("").unwrap());
        assert!(det.matches("a").unwrap());
    }

    #[quickcheck]
    fn determinize_is_deterministic(a: Automaton) -> bool {
        let det = determinize(&a).unwrap();
        det.is_deterministic().unwrap() && det.initial_states().len() == 1
    }

    #[quickcheck]
    fn determinize_preserves_language(a: Automaton) -> bool {
        let det = determinize(&a).unwrap();
        words(&['a', 'b', 'c'], 4)
            .iter()
            .all(|w| a.matches(w).unwrap() == det.matches(w).unwrap())
    }
}
