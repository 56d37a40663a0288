//!
//! Definition of the discrete HMM
//!
use super::state::{State, Symbol};
use super::table::{EmissionTable, TransitionTable};
use crate::error::{HmmError, Result};
use crate::prob::Prob;
use fnv::FnvHashMap as HashMap;
use log::{debug, warn};

///
/// Discrete HMM built from a transition table and an emission table.
///
/// States are indexed in the canonical order returned by `states()`:
/// the start marker is always index 0, and it is the row 0 of every
/// lattice calculated on this model.
///
#[derive(Debug, Clone)]
pub struct HmmModel {
    transitions: TransitionTable,
    emissions: EmissionTable,
    /// canonical state order
    states: Vec<State>,
    /// state -> index in `states`
    index: HashMap<State, usize>,
    /// dense `P(j | i)` stored at `i * n_states + j`.
    /// column 0 (transition into the start marker) is always 0.
    trans: Vec<Prob>,
}

impl HmmModel {
    ///
    /// Build a model from the tables.
    ///
    /// Fails with `MalformedModel` if
    /// * the start marker has no transition row,
    /// * the start marker has an emission row,
    /// * a state that can be transitioned into has no emission row,
    /// * there is no hidden state other than the start marker,
    /// * a probability is not a finite value in `[0, 1]`.
    ///
    pub fn build(transitions: TransitionTable, emissions: EmissionTable) -> Result<HmmModel> {
        let start = State::start();
        if !transitions.contains_row(&start) {
            return Err(HmmError::malformed(
                "start marker `#` is missing from the transition table",
            ));
        }
        if emissions.contains_row(&start) {
            return Err(HmmError::malformed(
                "start marker `#` cannot have an emission row",
            ));
        }
        for (from, to, prob) in transitions.iter() {
            if !prob.is_valid() {
                return Err(HmmError::malformed(format!(
                    "transition {} -> {} has invalid probability {}",
                    from, to, prob
                )));
            }
        }
        for (state, symbol, prob) in emissions.iter() {
            if !prob.is_valid() {
                return Err(HmmError::malformed(format!(
                    "emission {} -> {} has invalid probability {}",
                    state, symbol, prob
                )));
            }
        }

        // start marker first, then sources and destinations in first-seen order
        let mut states = vec![start.clone()];
        let mut index = HashMap::default();
        index.insert(start.clone(), 0);
        let mut add_state = |s: &State, states: &mut Vec<State>| {
            if !index.contains_key(s) {
                index.insert(s.clone(), states.len());
                states.push(s.clone());
            }
        };
        for s in transitions.rows() {
            add_state(s, &mut states);
        }
        for (from, to, _) in transitions.iter() {
            if to.is_start() {
                warn!("ignored transition {} -> {} into the start marker", from, to);
                continue;
            }
            if !emissions.contains_row(to) {
                return Err(HmmError::malformed(format!(
                    "state `{}` can be transitioned into from `{}` but has no emission row",
                    to, from
                )));
            }
            add_state(to, &mut states);
        }
        if states.len() < 2 {
            return Err(HmmError::malformed("model has no hidden states"));
        }

        let n = states.len();
        let mut trans = vec![Prob::zero(); n * n];
        for (i, from) in states.iter().enumerate() {
            for (j, to) in states.iter().enumerate().skip(1) {
                trans[i * n + j] = transitions.prob(from, to);
            }
        }
        debug!("built hmm with {} states {:?}", n, states);

        Ok(HmmModel {
            transitions,
            emissions,
            states,
            index,
            trans,
        })
    }
    ///
    /// Canonical ordering of the states. `states()[0]` is the start marker.
    ///
    pub fn states(&self) -> &[State] {
        &self.states
    }
    ///
    /// Number of states including the start marker
    ///
    pub fn n_states(&self) -> usize {
        self.states.len()
    }
    ///
    /// State at the index of the canonical ordering
    ///
    pub fn state(&self, index: usize) -> &State {
        &self.states[index]
    }
    ///
    /// Index of the state in the canonical ordering
    ///
    pub fn index_of(&self, state: &State) -> Option<usize> {
        self.index.get(state).copied()
    }
    pub fn emissions(&self) -> &EmissionTable {
        &self.emissions
    }
    ///
    /// Transition probability `P(to | from)` by state indices.
    /// Transition into the start marker is always 0.
    ///
    pub fn p_trans(&self, from: usize, to: usize) -> Prob {
        self.trans[from * self.n_states() + to]
    }
    ///
    /// Emission probability `P(symbol | state)` by state index.
    /// The start marker never emits.
    ///
    pub fn p_emit(&self, state: usize, symbol: &Symbol) -> Prob {
        self.emissions.prob(&self.states[state], symbol)
    }
    ///
    /// `P(symbol | s)` for all states `s`, in the canonical order.
    ///
    pub fn emission_column(&self, symbol: &Symbol) -> Vec<Prob> {
        (0..self.n_states())
            .map(|s| self.p_emit(s, symbol))
            .collect()
    }
}

impl std::fmt::Display for HmmModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "# transitions")?;
        write!(f, "{}", self.transitions)?;
        writeln!(f, "# emissions")?;
        write!(f, "{}", self.emissions)
    }
}
