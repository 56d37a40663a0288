//!
//! Sampling state/observation sequences from the HmmModel
//!
use super::model::HmmModel;
use super::sequence::Sequence;
use super::state::Symbol;
use crate::error::{HmmError, Result};
use crate::prob::Prob;
use log::trace;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// pick randomly from the choices with its own probability.
///
/// Returns `None` if there is no choice or all choices have `p=0`.
///
pub fn pick_with_prob<R: Rng, T: Copy>(rng: &mut R, choices: &[(T, Prob)]) -> Option<T> {
    choices
        .choose_weighted(rng, |item| item.1.to_value())
        .ok()
        .map(|item| item.0)
}

impl HmmModel {
    ///
    /// Sample a sequence of `n` hidden states and `n` observations.
    ///
    /// 1. pick an initial state from the start marker's transition row
    /// 2. repeat `n` times: transition to a next state, then emit from it.
    ///
    /// The start marker is never revisited. Fails with `DegenerateDistribution`
    /// if a row to be sampled has zero total weight.
    ///
    pub fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Sequence> {
        let mut now = self.pick_next_state(0, rng)?;
        trace!("init {}", self.state(now));

        let mut sequence = Sequence::new();
        for i in 0..n {
            now = self.pick_next_state(now, rng)?;
            let observation = self.pick_emission(now, rng)?;
            trace!("iter {} {} -> {}", i, self.state(now), observation);
            sequence.push(self.state(now).clone(), observation);
        }
        Ok(sequence)
    }
    ///
    /// Sample with `Xoshiro256PlusPlus` seeded by `seed`
    ///
    pub fn sample_from_seed(&self, n: usize, seed: u64) -> Result<Sequence> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        self.sample(n, &mut rng)
    }
    ///
    /// Pick a real state (index >= 1) according to `P(- | from)`.
    ///
    fn pick_next_state<R: Rng>(&self, from: usize, rng: &mut R) -> Result<usize> {
        let choices: Vec<(usize, Prob)> = (1..self.n_states())
            .map(|to| (to, self.p_trans(from, to)))
            .collect();
        pick_with_prob(rng, &choices).ok_or_else(|| {
            HmmError::degenerate(format!(
                "transition row of `{}` has zero total weight",
                self.state(from)
            ))
        })
    }
    ///
    /// Pick an observation according to `P(- | state)`.
    ///
    fn pick_emission<R: Rng>(&self, state: usize, rng: &mut R) -> Result<Symbol> {
        let row = self.emissions().row(self.state(state)).unwrap_or(&[]);
        let choices: Vec<(usize, Prob)> = row.iter().map(|(_, p)| *p).enumerate().collect();
        pick_with_prob(rng, &choices)
            .map(|i| row[i].0.clone())
            .ok_or_else(|| {
                HmmError::degenerate(format!(
                    "emission row of `{}` has zero total weight",
                    self.state(state)
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmm::mocks::{mock_cat, mock_cat_tables, mock_one_hot_cycle};
    use crate::hmm::state::{st, sy, State};
    use crate::hmm::table::{EmissionTable, TransitionTable};
    use crate::prob::p;
    use itertools::Itertools;

    #[test]
    fn picker_pick_with_prob() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        // does not pick p=0 element
        for _ in 0..10 {
            let picked = pick_with_prob(&mut rng, &[(b'a', p(0.0)), (b'b', p(1.0))]);
            assert_eq!(picked, Some(b'b'));
        }
        // all p=0 or empty
        assert_eq!(pick_with_prob(&mut rng, &[(b'a', p(0.0))]), None);
        assert_eq!(pick_with_prob::<_, u8>(&mut rng, &[]), None);
    }
    #[test]
    fn sample_length() {
        let hmm = mock_cat();
        for n in [0, 1, 5, 100] {
            let s = hmm.sample_from_seed(n, 3).unwrap();
            assert_eq!(s.states.len(), n);
            assert_eq!(s.observations.len(), n);
        }
    }
    #[test]
    fn sample_never_start_marker_nor_zero_transition() {
        let hmm = mock_cat();
        let s = hmm.sample_from_seed(200, 11).unwrap();
        println!("{}", s);
        assert!(s.states.iter().all(|state| !state.is_start()));
        for (a, b) in s.states.iter().tuple_windows() {
            let i = hmm.index_of(a).unwrap();
            let j = hmm.index_of(b).unwrap();
            assert!(!hmm.p_trans(i, j).is_zero());
        }
        for (state, o) in s.states.iter().zip(s.observations.iter()) {
            let i = hmm.index_of(state).unwrap();
            assert!(!hmm.p_emit(i, o).is_zero());
        }
    }
    #[test]
    fn sample_is_reproducible() {
        let hmm = mock_cat();
        let s1 = hmm.sample_from_seed(30, 7).unwrap();
        let s2 = hmm.sample_from_seed(30, 7).unwrap();
        assert_eq!(s1, s2);
    }
    #[test]
    fn sample_one_hot_cycle() {
        // a -> b -> c -> a ... and a: x, b: y, c: z
        let hmm = mock_one_hot_cycle();
        let s = hmm.sample_from_seed(10, 0).unwrap();
        let next = |s: &State| match s.as_str() {
            "a" => st("b"),
            "b" => st("c"),
            _ => st("a"),
        };
        for (a, b) in s.states.iter().tuple_windows() {
            assert_eq!(next(a), *b);
        }
        for (state, o) in s.states.iter().zip(s.observations.iter()) {
            let i = hmm.index_of(state).unwrap();
            assert!(hmm.p_emit(i, o).is_one());
        }
    }
    #[test]
    fn sample_zero_start_row() {
        let (mut t, e) = mock_cat_tables();
        t.insert(State::start(), st("happy"), p(0.0));
        t.insert(State::start(), st("grumpy"), p(0.0));
        let hmm = HmmModel::build(t, e).unwrap();
        let r = hmm.sample_from_seed(5, 0);
        assert!(matches!(r, Err(HmmError::DegenerateDistribution(_))));
        let r = hmm.sample_from_seed(0, 0);
        assert!(matches!(r, Err(HmmError::DegenerateDistribution(_))));
    }
    #[test]
    fn sample_missing_transition_row() {
        // `b` is reachable but has no outgoing transitions
        let mut t = TransitionTable::new();
        t.insert(State::start(), st("a"), p(1.0));
        t.insert(st("a"), st("b"), p(1.0));
        let mut e = EmissionTable::new();
        e.insert(st("a"), sy("x"), p(1.0));
        e.insert(st("b"), sy("y"), p(1.0));
        let hmm = HmmModel::build(t, e).unwrap();
        assert_eq!(hmm.sample_from_seed(1, 0).unwrap().states, vec![st("b")]);
        let r = hmm.sample_from_seed(2, 0);
        assert!(matches!(r, Err(HmmError::DegenerateDistribution(_))));
    }
}
