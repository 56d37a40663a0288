//!
//! Discrete HMM calculation
//!
//! # Overview of calculation
//!
//! x = x[0],...,x[n-1] : Emissions of length n
//!
//! States s = 0,...,m-1 in the canonical order of `HmmModel::states()`,
//! where s=0 is the start marker `#` and s>=1 are the hidden states.
//!
//! Lattice L[s][t] for 0<=t<=n
//!
//! L[0][0] = 1   (anchor, never updated)
//! L[s][1] = P(# -> s) P(s emits x[0])
//!
//! Forward
//! F[s][t]
//!  = P(emits x[0:t]=x[0],...,x[t-1] and ends at s)
//!  = sum_{s'>=1} F[s'][t-1] P(s' -> s) P(s emits x[t-1])
//!
//! Viterbi
//! V[s][t]
//!  = max_{s'>=1} V[s'][t-1] P(s' -> s) P(s emits x[t-1])
//!
//! Missing table entries are treated as p=0.
//!
pub mod forward;
pub mod lattice;
pub mod mocks;
pub mod model;
pub mod sample;
pub mod sequence;
pub mod state;
pub mod table;
pub mod viterbi;

pub use lattice::Lattice;
pub use model::HmmModel;
pub use sequence::Sequence;
pub use state::{State, Symbol};
pub use table::{EmissionTable, TransitionTable};
pub use viterbi::ViterbiPath;
