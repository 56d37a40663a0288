//!
//! Labels of hidden states and observation symbols
//!
use serde::{Deserialize, Serialize};

///
/// Label of the start pseudo-state in the table files.
///
pub const START_MARKER: &str = "#";

///
/// Hidden state label
///
/// `State::start()` is the pseudo-state before time 0. It only appears as a
/// transition source and never emits.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(pub String);

impl State {
    pub fn new(label: impl Into<String>) -> State {
        State(label.into())
    }
    ///
    /// The start marker `#`
    ///
    pub fn start() -> State {
        State(START_MARKER.to_string())
    }
    pub fn is_start(&self) -> bool {
        self.0 == START_MARKER
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for State {
    fn from(label: &str) -> State {
        State::new(label)
    }
}

///
/// Observation symbol label
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(label: impl Into<String>) -> Symbol {
        Symbol(label.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(label: &str) -> Symbol {
        Symbol::new(label)
    }
}

///
/// short-hand of `State::new`
///
pub fn st(label: &str) -> State {
    State::new(label)
}

///
/// short-hand of `Symbol::new`
///
pub fn sy(label: &str) -> Symbol {
    Symbol::new(label)
}

///
/// Convert a list of labels into symbols.
///
pub fn symbols(labels: &[&str]) -> Vec<Symbol> {
    labels.iter().map(|&label| Symbol::new(label)).collect()
}
