//! Evaluation of words.
//! Words are read symbol by symbol, following only transitions labeled with the symbol that is read.
//! Epsilon transitions are never taken.

use std::collections::BTreeSet;

use crate::alphabet::is_symbol;

use super::{Automaton, AutomatonError, StateId};

impl Automaton {
    /// Returns the set of states that are reached from any of the `origins` by exactly one transition labeled `symbol`.
    /// Origins that are not states of the automaton and symbols outside of the alphabet yield no states.
    ///
    /// Returns an error if the automaton is not valid or if `symbol` is not an admissible symbol (such as the epsilon sentinel).
    pub fn step_set(
        &self,
        origins: &BTreeSet<StateId>,
        symbol: char,
    ) -> Result<BTreeSet<StateId>, AutomatonError> {
        self.check_valid()?;
        if !is_symbol(symbol) {
            return Err(AutomatonError::NotASymbol(symbol));
        }
        Ok(origins
            .iter()
            .flat_map(|&q| self.successors(q, symbol))
            .collect())
    }

    /// Returns the set of states that can be reached from an initial state by reading the word.
    ///
    /// - Without initial states, the result is empty.
    /// - The empty word reaches exactly the initial states.
    /// - A word containing a character that is not in the alphabet reaches no state.
    ///
    /// Returns an error if the automaton is not valid.
    pub fn read_string(&self, word: &str) -> Result<BTreeSet<StateId>, AutomatonError> {
        self.check_valid()?;
        if self.initial.is_empty() {
            return Ok(BTreeSet::new());
        }
        if word.is_empty() {
            return Ok(self.initial.clone());
        }
        if !word.chars().all(|c| self.has_symbol(c)) {
            return Ok(BTreeSet::new());
        }
        let mut reached = BTreeSet::new();
        for &q0 in &self.initial {
            let mut current = BTreeSet::from([q0]);
            for c in word.chars() {
                current = self.step_set(&current, c)?;
                if current.is_empty() {
                    break;
                }
            }
            reached.extend(current);
        }
        Ok(reached)
    }

    /// Returns if the automaton accepts the given word.
    /// A word is accepted if reading it reaches at least one final state.
    pub fn matches(&self, word: &str) -> Result<bool, AutomatonError> {
        let reached = self.read_string(word)?;
        Ok(!reached.is_disjoint(&self.finals))
    }
}

#[cfg(test)]
mod tests {

    use crate::alphabet::EPSILON;

    use super::*;

    /// States 0 to 4 over {a, b} with the given transitions and initial/final states.
    fn build(
        transitions: &[(StateId, char, StateId)],
        initial: &[StateId],
        finals: &[StateId],
    ) -> Automaton {
        let mut a = Automaton::new();
        for i in 0..=4 {
            a.add_state(i);
        }
        a.add_symbol('a');
        a.add_symbol('b');
        for &(from, c, to) in transitions {
            assert!(a.add_transition(from, c, to));
        }
        for &q in initial {
            a.set_initial_state(q);
        }
        for &q in finals {
            a.set_final_state(q);
        }
        a
    }

    const BASE: [(StateId, char, StateId); 8] = [
        (0, 'a', 1),
        (0, 'a', 2),
        (0, 'a', 3),
        (1, 'b', 3),
        (2, 'a', 3),
        (2, 'a', 4),
        (3, 'a', 3),
        (3, 'b', 4),
    ];

    fn with_loop() -> Vec<(StateId, char, StateId)> {
        let mut ts = BASE.to_vec();
        ts.push((4, 'a', 4));
        ts
    }

    #[test]
    fn test_step_set_success() {
        let a = build(&with_loop(), &[0, 1], &[1, 4]);
        let res = a.step_set(&BTreeSet::from([0, 1]), 'a').unwrap();
        assert_eq!(res, BTreeSet::from([1, 2, 3]));
    }

    #[test]
    fn test_step_set_no_transition() {
        let a = build(&[], &[0], &[1]);
        assert!(a.step_set(&BTreeSet::from([0]), 'a').unwrap().is_empty());
        assert!(a.step_set(&BTreeSet::new(), 'a').unwrap().is_empty());
    }

    #[test]
    fn test_step_set_unknown_state_or_symbol() {
        let a = build(&with_loop(), &[0], &[1]);
        assert!(a.step_set(&BTreeSet::from([7]), 'a').unwrap().is_empty());
        assert!(a.step_set(&BTreeSet::from([0]), 'c').unwrap().is_empty());
    }

    #[test]
    fn test_step_set_epsilon_is_not_a_symbol() {
        let a = build(&with_loop(), &[0], &[1]);
        assert_eq!(
            a.step_set(&BTreeSet::from([0]), EPSILON),
            Err(AutomatonError::NotASymbol(EPSILON))
        );
    }

    #[test]
    fn test_step_set_ignores_epsilon_transitions() {
        let mut a = build(&[(0, 'a', 1)], &[0], &[2]);
        assert!(a.add_transition(1, EPSILON, 2));
        let res = a.step_set(&BTreeSet::from([0]), 'a').unwrap();
        assert_eq!(res, BTreeSet::from([1]));
        assert!(!a.matches("a").unwrap());
    }

    #[test]
    fn test_invalid_automaton() {
        let mut a = Automaton::new();
        a.add_state(0);
        a.set_initial_state(0);
        assert_eq!(a.read_string(""), Err(AutomatonError::InvalidAutomaton));
        assert_eq!(a.matches("a"), Err(AutomatonError::InvalidAutomaton));
        assert_eq!(
            a.step_set(&BTreeSet::from([0]), 'a'),
            Err(AutomatonError::InvalidAutomaton)
        );
    }

    #[test]
    fn test_read_string_not_in_alphabet() {
        let a = build(&with_loop(), &[0, 1], &[1, 4]);
        assert!(a.read_string("abc").unwrap().is_empty());
        assert!(!a.matches("abc").unwrap());
    }

    #[test]
    fn test_read_string_no_initial_state() {
        let a = build(&with_loop(), &[], &[1, 4]);
        assert!(a.read_string("a").unwrap().is_empty());
        assert!(a.read_string("").unwrap().is_empty());
    }

    #[test]
    fn test_read_string_no_final_state() {
        let a = build(&BASE, &[0], &[]);
        assert_eq!(a.read_string("a").unwrap(), BTreeSet::from([1, 2, 3]));
        assert!(!a.matches("a").unwrap());
    }

    #[test]
    fn test_read_string_short_word() {
        let a = build(&with_loop(), &[0, 1], &[1, 4]);
        assert_eq!(a.read_string("ab").unwrap(), BTreeSet::from([3, 4]));
        assert!(a.matches("ab").unwrap());
    }

    #[test]
    fn test_read_string_long_word() {
        let a = build(&BASE, &[0, 1], &[1, 4]);
        assert!(a.read_string("abbaa").unwrap().is_empty());
        assert!(!a.matches("abbaa").unwrap());
    }

    #[test]
    fn test_read_string_long_word_with_loop() {
        let a = build(&with_loop(), &[0, 1], &[1, 4]);
        assert_eq!(a.read_string("abbaa").unwrap(), BTreeSet::from([4]));
    }

    #[test]
    fn test_read_empty_string_is_initial() {
        let a = build(&with_loop(), &[0, 1], &[4]);
        assert_eq!(a.read_string("").unwrap(), BTreeSet::from([0, 1]));
        assert!(!a.matches("").unwrap());
    }

    #[test]
    fn test_match_empty_string() {
        let mut a = Automaton::new();
        a.add_state(0);
        a.add_state(1);
        a.add_symbol('a');
        a.add_symbol('b');
        a.set_initial_state(0);
        a.set_final_state(0);
        a.set_final_state(1);
        a.add_transition(0, 'a', 1);
        a.add_transition(0, 'b', 0);
        a.add_transition(1, 'b', 0);
        assert!(a.matches("").unwrap());
        assert!(a.matches("ab").unwrap());
        assert!(!a.matches("aa").unwrap());
    }

    #[test]
    fn test_match_two_initial_states() {
        let mut a = Automaton::new();
        for i in 0..3 {
            a.add_state(i);
        }
        a.add_symbol('a');
        a.set_initial_state(0);
        a.set_initial_state(1);
        a.set_final_state(1);
        a.set_final_state(2);
        a.add_transition(0, 'a', 1);
        a.add_transition(1, 'a', 2);
        assert!(a.matches("").unwrap());
        assert!(a.matches("a").unwrap());
        assert!(a.matches("aa").unwrap());
        assert!(!a.matches("aaa").unwrap());
    }
}
