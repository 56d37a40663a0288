//!
//! Discrete Hidden Markov Model
//!
//! * build a model from transition/emission tables (`hmm::HmmModel::build`)
//! * sample state/observation sequences (`HmmModel::sample`)
//! * decode observations with the Forward and Viterbi algorithms
//!
pub mod error;
pub mod hmm;
pub mod io;
pub mod prelude;
pub mod prob;
pub mod utils;
