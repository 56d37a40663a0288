//!
//! Probability tables
//!
//! ## ProbTable
//!
//! Sparse two-level mapping `row -> column -> Prob`.
//! Rows and the columns of each row keep their first-seen order.
//! An entry that is not in the table has probability 0.
//!
use super::state::{State, Symbol};
use crate::prob::Prob;
use fnv::FnvHashMap as HashMap;
use std::hash::Hash;

///
/// Table of probabilities `P(column | row)`
///
#[derive(Debug, Clone)]
pub struct ProbTable<R, C> {
    rows: Vec<(R, Vec<(C, Prob)>)>,
    index: HashMap<R, usize>,
}

///
/// `from_state -> to_state -> P(to_state | from_state)`
/// including the start marker as a source.
///
pub type TransitionTable = ProbTable<State, State>;

///
/// `state -> symbol -> P(symbol | state)`
///
pub type EmissionTable = ProbTable<State, Symbol>;

impl<R, C> ProbTable<R, C>
where
    R: Clone + Eq + Hash,
    C: PartialEq,
{
    ///
    /// Constructor of empty table
    ///
    pub fn new() -> Self {
        ProbTable {
            rows: Vec::new(),
            index: HashMap::default(),
        }
    }
    ///
    /// Set `P(col | row) = prob`.
    ///
    /// If the entry already exists, the value is overwritten but the
    /// position of the entry is kept.
    ///
    pub fn insert(&mut self, row: R, col: C, prob: Prob) {
        let i = match self.index.get(&row) {
            Some(&i) => i,
            None => {
                self.index.insert(row.clone(), self.rows.len());
                self.rows.push((row, Vec::new()));
                self.rows.len() - 1
            }
        };
        let entries = &mut self.rows[i].1;
        match entries.iter_mut().find(|(c, _)| *c == col) {
            Some(entry) => entry.1 = prob,
            None => entries.push((col, prob)),
        }
    }
    ///
    /// Get all entries of the row, if the row exists.
    ///
    pub fn row(&self, row: &R) -> Option<&[(C, Prob)]> {
        self.index.get(row).map(|&i| self.rows[i].1.as_slice())
    }
    pub fn contains_row(&self, row: &R) -> bool {
        self.index.contains_key(row)
    }
    ///
    /// The entry `(row, col)` is explicitly in the table (even if `p=0`).
    ///
    pub fn contains(&self, row: &R, col: &C) -> bool {
        self.row(row)
            .map_or(false, |entries| entries.iter().any(|(c, _)| c == col))
    }
    ///
    /// `P(col | row)`, or `p=0` if the entry is missing.
    ///
    pub fn prob(&self, row: &R, col: &C) -> Prob {
        self.row(row)
            .and_then(|entries| entries.iter().find(|(c, _)| c == col))
            .map(|(_, p)| *p)
            .unwrap_or_default()
    }
    ///
    /// Iterator of row keys in first-seen order
    ///
    pub fn rows(&self) -> impl Iterator<Item = &R> + '_ {
        self.rows.iter().map(|(r, _)| r)
    }
    ///
    /// Iterator of all `(row, col, prob)` entries
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&R, &C, Prob)> + '_ {
        self.rows
            .iter()
            .flat_map(|(r, entries)| entries.iter().map(move |(c, p)| (r, c, *p)))
    }
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R, C> Default for ProbTable<R, C>
where
    R: Clone + Eq + Hash,
    C: PartialEq,
{
    fn default() -> Self {
        ProbTable::new()
    }
}

impl<R, C> std::iter::FromIterator<(R, C, Prob)> for ProbTable<R, C>
where
    R: Clone + Eq + Hash,
    C: PartialEq,
{
    fn from_iter<I: IntoIterator<Item = (R, C, Prob)>>(iter: I) -> Self {
        let mut table = ProbTable::new();
        for (r, c, p) in iter {
            table.insert(r, c, p);
        }
        table
    }
}

///
/// `row col prob` per line, the format of `.trans` and `.emit` files
///
impl<R, C> std::fmt::Display for ProbTable<R, C>
where
    R: Clone + Eq + Hash + std::fmt::Display,
    C: PartialEq + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (r, c, p) in self.iter() {
            writeln!(f, "{} {} {}", r, c, p)?;
        }
        Ok(())
    }
}
