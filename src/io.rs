//!
//! Loading HMM tables and observation sequences from text files
//!
//! * `<basename>.trans`: `from_state to_state probability` per line
//! * `<basename>.emit`: `state symbol probability` per line
//! * observations: whitespace-separated symbols
//!
pub mod observations;
pub mod tables;

pub use observations::{
    observation_path, parse_observations, read_observations, write_observations,
};
pub use tables::{emission_path, load_tables, parse_emissions, parse_transitions, transition_path};
