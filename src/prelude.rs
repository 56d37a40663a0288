//!
//! globally-available parts
//!
pub use crate::error::{HmmError, Result};
pub use crate::hmm::state::{State, Symbol};
pub use crate::hmm::{EmissionTable, HmmModel, Lattice, Sequence, TransitionTable, ViterbiPath};
pub use crate::prob::{p, Prob};
