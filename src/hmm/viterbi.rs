//!
//! Viterbi algorithm
//!
//! ```text
//! V[s][t] = max_{s'} V[s'][t-1] P(s' -> s) P(s emits x[t-1])   (t >= 2)
//! B[s][t] = argmax_{s'} (same)
//! ```
//!
//! The most probable path is traced back from the argmax of the last column.
//!
use super::lattice::{argmax_real, Lattice};
use super::model::HmmModel;
use super::state::{State, Symbol};
use crate::error::Result;
use crate::prob::Prob;
use log::{debug, trace};
use serde::Serialize;

///
/// Backpointer table `B[s][t]`: the row index of the best predecessor of
/// state `s` at time `t`. `B[-][1]` points to the start marker (row 0).
///
#[derive(Debug, Clone)]
pub struct Backpointers {
    n_states: usize,
    cells: Vec<usize>,
}

impl Backpointers {
    fn new(n_states: usize, n_emissions: usize) -> Self {
        Backpointers {
            n_states,
            cells: vec![0; n_states * (n_emissions + 1)],
        }
    }
    pub fn get(&self, state: usize, t: usize) -> usize {
        self.cells[t * self.n_states + state]
    }
    fn set(&mut self, state: usize, t: usize, from: usize) {
        self.cells[t * self.n_states + state] = from;
    }
}

///
/// Result of the Viterbi algorithm
///
#[derive(Debug, Clone, Serialize)]
pub struct ViterbiPath {
    /// the most probable state path, in forward time order
    pub states: Vec<State>,
    /// probability of the path jointly with the emissions
    pub prob: Prob,
}

impl HmmModel {
    ///
    /// Fill the Viterbi lattice and its backpointers.
    ///
    /// Ties in the max are resolved to the first predecessor in the
    /// canonical state order.
    ///
    pub fn viterbi_lattice(&self, emissions: &[Symbol]) -> Result<(Lattice, Backpointers)> {
        let mut lattice = self.init_lattice(emissions)?;
        let n = self.n_states();
        let mut back = Backpointers::new(n, emissions.len());
        let mut candidates = vec![Prob::zero(); n];
        for t in 2..=emissions.len() {
            let emit = self.emission_column(&emissions[t - 1]);
            for s in 1..n {
                for k in 1..n {
                    candidates[k] = lattice.get(k, t - 1) * self.p_trans(k, s) * emit[s];
                }
                let k = argmax_real(&candidates);
                trace!("V[{}][{}] = {} from {}", s, t, candidates[k], k);
                lattice.set(s, t, candidates[k]);
                back.set(s, t, k);
            }
        }
        debug!("viterbi\n{}", lattice);
        Ok((lattice, back))
    }
    ///
    /// The most probable state path and its probability.
    ///
    pub fn viterbi_path(&self, emissions: &[Symbol]) -> Result<ViterbiPath> {
        let (lattice, back) = self.viterbi_lattice(emissions)?;
        let last = lattice.argmax_last();
        let prob = lattice.get(last, lattice.n_emissions());

        // trace back until the start marker
        let mut path = vec![last];
        let mut s = last;
        for t in (1..=lattice.n_emissions()).rev() {
            s = back.get(s, t);
            if s == 0 {
                break;
            }
            path.push(s);
        }
        path.reverse();

        let states = path.into_iter().map(|s| self.state(s).clone()).collect();
        Ok(ViterbiPath { states, prob })
    }
    ///
    /// The most probable state path that explains the emissions.
    ///
    pub fn viterbi(&self, emissions: &[Symbol]) -> Result<Vec<State>> {
        self.viterbi_path(emissions).map(|path| path.states)
    }
}
