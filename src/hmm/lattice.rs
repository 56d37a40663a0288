//!
//! Lattice definitions
//!
//! ## Lattice
//!
//! `L[s][t]` for state `s` (row, in the canonical state order) and
//! time `t` (column, `0 <= t <= n_emissions`).
//!
//! * row 0 is the start marker, and only `L[0][0] = 1` is set.
//! * column 0 is the initialization anchor (no emission).
//! * column `t >= 1` corresponds to the emission `x[t-1]`.
//!
use super::model::HmmModel;
use super::state::Symbol;
use crate::error::{HmmError, Result};
use crate::prob::Prob;
use log::trace;

///
/// `n_states x (n_emissions + 1)` table of probabilities
///
/// Cells are stored column by column, so a time step is a contiguous slice.
///
#[derive(Debug, Clone)]
pub struct Lattice {
    n_states: usize,
    cells: Vec<Prob>,
}

impl Lattice {
    ///
    /// Lattice with all cells `p=0` except the anchor `L[0][0] = 1`.
    ///
    pub fn new(n_states: usize, n_emissions: usize) -> Self {
        let mut cells = vec![Prob::zero(); n_states * (n_emissions + 1)];
        cells[0] = Prob::one();
        Lattice { n_states, cells }
    }
    pub fn n_states(&self) -> usize {
        self.n_states
    }
    ///
    /// The number of emissions (= the number of columns - 1)
    ///
    pub fn n_emissions(&self) -> usize {
        self.cells.len() / self.n_states - 1
    }
    pub fn get(&self, state: usize, t: usize) -> Prob {
        self.cells[t * self.n_states + state]
    }
    pub fn set(&mut self, state: usize, t: usize, prob: Prob) {
        self.cells[t * self.n_states + state] = prob;
    }
    ///
    /// All cells of the time `t`
    ///
    pub fn column(&self, t: usize) -> &[Prob] {
        &self.cells[t * self.n_states..(t + 1) * self.n_states]
    }
    ///
    /// The last column `L[-][n_emissions]`
    ///
    pub fn last_column(&self) -> &[Prob] {
        self.column(self.n_emissions())
    }
    ///
    /// Index of the most probable state in the last column.
    ///
    /// Only real states (`s >= 1`) are candidates. Ties are resolved to the
    /// first state in the canonical order, so an all-zero column selects
    /// the first real state.
    ///
    pub fn argmax_last(&self) -> usize {
        argmax_real(self.last_column())
    }
}

///
/// first index `s >= 1` of the maximum value in the column
///
pub(crate) fn argmax_real(column: &[Prob]) -> usize {
    let mut best = 1;
    for s in 2..column.len() {
        if column[s] > column[best] {
            best = s;
        }
    }
    best
}

impl std::fmt::Display for Lattice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // Header
        write!(f, "state")?;
        for t in 0..=self.n_emissions() {
            write!(f, "\tt={}", t)?;
        }
        writeln!(f)?;
        for s in 0..self.n_states() {
            write!(f, "{}", s)?;
            for t in 0..=self.n_emissions() {
                write!(f, "\t{:.6}", self.get(s, t).to_value())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl HmmModel {
    ///
    /// Create a lattice for the emissions with the base case filled.
    ///
    /// `L[s][1] = P(# -> s) P(s emits x[0])` for every real state `s`.
    ///
    pub(crate) fn init_lattice(&self, emissions: &[Symbol]) -> Result<Lattice> {
        if emissions.is_empty() {
            return Err(HmmError::EmptyObservationSequence);
        }
        let mut lattice = Lattice::new(self.n_states(), emissions.len());
        let emit = self.emission_column(&emissions[0]);
        for s in 1..self.n_states() {
            let p = lattice.get(0, 0) * self.p_trans(0, s) * emit[s];
            trace!("L[{}][1] = {}", s, p);
            lattice.set(s, 1, p);
        }
        Ok(lattice)
    }
}
