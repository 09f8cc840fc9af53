//! Finite automata over alphabets of single characters.
//!
//! An [Automaton] is a mutable value with a set of states, an alphabet, any number of initial and final states,
//! and a labeled transition relation that may contain epsilon transitions.
//! It is built up with the admission operations (e.g., [Automaton::add_state] and [Automaton::add_transition]),
//! which never fail but report whether they changed the automaton.
//!
//! On top of that, the [automata] module provides the classical constructions:
//! word evaluation, removal of non-accessible and non-co-accessible states, language emptiness,
//! mirroring, completion, complementation, determinization, intersection and language inclusion.
//! Epsilon transitions are kept in the relation, but none of the algorithms follow them.
//!
//! # Examples
//! ```
//! use automate::Automaton;
//!
//! // Words over {a, b} that end with `b`
//! let mut a = Automaton::new();
//! a.add_state(0);
//! a.add_state(1);
//! a.add_symbol('a');
//! a.add_symbol('b');
//! a.set_initial_state(0);
//! a.set_final_state(1);
//! a.add_transition(0, 'a', 0);
//! a.add_transition(0, 'b', 0);
//! a.add_transition(0, 'b', 1);
//!
//! assert!(a.matches("aab").unwrap());
//! assert!(!a.matches("ba").unwrap());
//!
//! let det = Automaton::create_deterministic(&a).unwrap();
//! assert!(det.is_deterministic().unwrap());
//!
//! let comp = Automaton::create_complement(&a).unwrap();
//! assert!(comp.matches("ba").unwrap());
//! assert!(comp.has_empty_intersection_with(&a).unwrap());
//! ```

pub mod alphabet;
pub mod automata;

pub use alphabet::{Alphabet, EPSILON};
pub use automata::{Automaton, AutomatonError, StateId, TransitionType};
