//!
//! Struct for storing a pair of hidden states and observations
//!
use super::state::{State, Symbol};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

///
/// Hidden state sequence and the corresponding observation sequence.
///
/// A sampled sequence has both filled with the same length.
/// A sequence to be decoded may have observations only.
///
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sequence {
    pub states: Vec<State>,
    pub observations: Vec<Symbol>,
}

impl Sequence {
    ///
    /// Constructor of empty sequence
    ///
    pub fn new() -> Self {
        Sequence::default()
    }
    ///
    /// Sequence with observations only (hidden states are unknown)
    ///
    pub fn from_observations(observations: Vec<Symbol>) -> Self {
        Sequence {
            states: Vec::new(),
            observations,
        }
    }
    ///
    /// Append a new state and its emission
    ///
    pub fn push(&mut self, state: State, observation: Symbol) {
        self.states.push(state);
        self.observations.push(observation);
    }
    ///
    /// The length of the observations
    ///
    pub fn len(&self) -> usize {
        self.observations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

//
// Display
//
impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.states.iter().join(" "))?;
        writeln!(f, "{}", self.observations.iter().join(" "))
    }
}
