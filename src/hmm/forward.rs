//!
//! Forward algorithm
//!
//! ```text
//! F[s][t] = sum_{s'} F[s'][t-1] P(s' -> s) P(s emits x[t-1])   (t >= 2)
//! ```
//!
use super::lattice::Lattice;
use super::model::HmmModel;
use super::state::{State, Symbol};
use crate::error::Result;
use crate::prob::Prob;
use log::{debug, trace};

impl HmmModel {
    ///
    /// Run Forward algorithm to the emissions, and return the filled lattice.
    ///
    /// Unknown symbols are emitted with `p=0`, which is not an error.
    ///
    pub fn forward_lattice(&self, emissions: &[Symbol]) -> Result<Lattice> {
        let mut lattice = self.init_lattice(emissions)?;
        let n = self.n_states();
        for t in 2..=emissions.len() {
            let emit = self.emission_column(&emissions[t - 1]);
            for s in 1..n {
                let p: Prob = (1..n)
                    .map(|k| {
                        let p_k = lattice.get(k, t - 1) * self.p_trans(k, s) * emit[s];
                        trace!("F[{}][{}] += F[{}][{}] * P({} -> {}) * P({} emits {}) = {}",
                            s, t, k, t - 1, k, s, s, emissions[t - 1], p_k);
                        p_k
                    })
                    .sum();
                lattice.set(s, t, p);
            }
        }
        debug!("forward\n{}", lattice);
        Ok(lattice)
    }
    ///
    /// The most probable state at the last emission, according to the
    /// Forward algorithm.
    ///
    pub fn forward(&self, emissions: &[Symbol]) -> Result<State> {
        let lattice = self.forward_lattice(emissions)?;
        Ok(self.state(lattice.argmax_last()).clone())
    }
    ///
    /// Total probability of the emissions `P(x)` marginalized over all
    /// state paths.
    ///
    pub fn full_prob(&self, emissions: &[Symbol]) -> Result<Prob> {
        let lattice = self.forward_lattice(emissions)?;
        Ok(lattice.last_column().iter().skip(1).sum())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::HmmError;
    use crate::hmm::mocks::{mock_cat, mock_one_hot_cycle};
    use crate::hmm::state::{st, symbols};
    use crate::prob::p;
    use approx::assert_abs_diff_eq;

    #[test]
    fn forward_cat_two_steps() {
        let hmm = mock_cat();
        let obs = symbols(&["purr", "silent"]);
        let l = hmm.forward_lattice(&obs).unwrap();
        // F[-][1] = (0.25, 0.05, 0)
        // F[happy][2]  = (0.25*0.5 + 0.05*0.6) * 0.2 = 0.031
        // F[grumpy][2] = (0.25*0.1 + 0.05*0.3) * 0.5 = 0.02
        // F[hungry][2] = (0.25*0.4 + 0.05*0.1) * 0.2 = 0.021
        assert_abs_diff_eq!(l.get(1, 2), p(0.031), epsilon = 1e-12);
        assert_abs_diff_eq!(l.get(2, 2), p(0.02), epsilon = 1e-12);
        assert_abs_diff_eq!(l.get(3, 2), p(0.021), epsilon = 1e-12);
        assert_eq!(hmm.forward(&obs).unwrap(), st("happy"));
        assert_abs_diff_eq!(hmm.full_prob(&obs).unwrap(), p(0.072), epsilon = 1e-12);
    }
    #[test]
    fn forward_cat_scenario() {
        let hmm = mock_cat();
        let obs = symbols(&["purr", "silent", "silent", "meow", "meow"]);
        let state = hmm.forward(&obs).unwrap();
        assert!(!state.is_start());
        assert!(hmm.states().contains(&state));
        assert_eq!(state, st("hungry"));
    }
    #[test]
    fn forward_single_emission() {
        let hmm = mock_cat();
        // base case only: happy 0.5*0.3, grumpy 0.5*0.4
        assert_eq!(hmm.forward(&symbols(&["meow"])).unwrap(), st("grumpy"));
    }
    #[test]
    fn forward_empty() {
        let hmm = mock_cat();
        let r = hmm.forward(&[]);
        assert!(matches!(r, Err(HmmError::EmptyObservationSequence)));
        let r = hmm.full_prob(&[]);
        assert!(matches!(r, Err(HmmError::EmptyObservationSequence)));
    }
    #[test]
    fn forward_unknown_symbol() {
        let hmm = mock_cat();
        let obs = symbols(&["purr", "bark", "meow"]);
        let l = hmm.forward_lattice(&obs).unwrap();
        assert!(l.column(2).iter().all(|p| p.is_zero()));
        assert!(l.column(3).iter().all(|p| p.is_zero()));
        // all-zero column resolves to the first real state
        assert_eq!(hmm.forward(&obs).unwrap(), st("happy"));
        assert!(hmm.full_prob(&obs).unwrap().is_zero());
    }
    #[test]
    fn forward_is_idempotent() {
        let hmm = mock_one_hot_cycle();
        let obs = symbols(&["x", "y", "z"]);
        let a = hmm.forward(&obs).unwrap();
        let b = hmm.forward(&obs).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, st("c"));
    }
}
