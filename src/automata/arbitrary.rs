//! Random generation of automata for property-based testing.

use quickcheck::{Arbitrary, Gen};

use super::{Automaton, StateId};

/// The symbols that generated automata draw their alphabet from.
const SYMBOLS: [char; 3] = ['a', 'b', 'c'];

/// Generates a valid automaton with one to five states and a non-empty alphabet over `a`, `b` and `c`.
/// Initial states, final states and transitions are chosen at random; no epsilon transitions are generated.
impl Arbitrary for Automaton {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut a = Automaton::new();
        let n = (u8::arbitrary(g) % 5) as StateId + 1;
        for q in 0..n {
            a.add_state(q);
            if bool::arbitrary(g) {
                a.set_initial_state(q);
            }
            if bool::arbitrary(g) {
                a.set_final_state(q);
            }
        }
        for c in SYMBOLS {
            if bool::arbitrary(g) {
                a.add_symbol(c);
            }
        }
        if a.count_symbols() == 0 {
            a.add_symbol(SYMBOLS[0]);
        }
        let symbols: Vec<char> = a.alphabet().iter().collect();
        for from in 0..n {
            for &c in &symbols {
                for to in 0..n {
                    // keep the relation sparse
                    if u8::arbitrary(g) % 3 == 0 {
                        a.add_transition(from, c, to);
                    }
                }
            }
        }
        a
    }
}

/// Returns all words over `symbols` of length at most `max_len`, including the empty word.
#[cfg(test)]
pub(crate) fn words(symbols: &[char], max_len: usize) -> Vec<String> {
    use itertools::Itertools;

    let mut all = vec![String::new()];
    for len in 1..=max_len {
        all.extend(
            std::iter::repeat(symbols.iter().copied())
                .take(len)
                .multi_cartesian_product()
                .map(|w| w.into_iter().collect::<String>()),
        );
    }
    all
}
