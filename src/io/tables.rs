//!
//! Parser of transition (`.trans`) and emission (`.emit`) table files
//!
use crate::error::{HmmError, Result};
use crate::hmm::model::HmmModel;
use crate::hmm::state::{State, Symbol};
use crate::hmm::table::{EmissionTable, TransitionTable};
use crate::prob::Prob;
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

///
/// `<basename>.trans`
///
pub fn transition_path(basename: &Path) -> PathBuf {
    with_suffix(basename, ".trans")
}

///
/// `<basename>.emit`
///
pub fn emission_path(basename: &Path) -> PathBuf {
    with_suffix(basename, ".emit")
}

pub(crate) fn with_suffix(basename: &Path, suffix: &str) -> PathBuf {
    let mut s = basename.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

///
/// Parse `row column probability` triples, one per line.
/// Blank lines are skipped. Line numbers in errors are 1-based.
///
fn parse_triples<R: BufRead>(reader: R) -> Result<Vec<(String, String, Prob)>> {
    let mut triples = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [row, col, prob] => {
                let prob = prob.parse::<Prob>().map_err(|e: HmmError| HmmError::Parse {
                    line: i + 1,
                    message: e.to_string(),
                })?;
                triples.push((row.to_string(), col.to_string(), prob));
            }
            _ => {
                return Err(HmmError::Parse {
                    line: i + 1,
                    message: format!("expected 3 fields but found {}", fields.len()),
                })
            }
        }
    }
    Ok(triples)
}

///
/// Parse a transition table. `from_state` can be the start marker `#`.
///
pub fn parse_transitions<R: BufRead>(reader: R) -> Result<TransitionTable> {
    let triples = parse_triples(reader)?;
    let mut table = TransitionTable::new();
    for (from, to, prob) in triples {
        let (from, to) = (State(from), State(to));
        if table.contains(&from, &to) {
            warn!("duplicated transition {} -> {} is overwritten", from, to);
        }
        table.insert(from, to, prob);
    }
    Ok(table)
}

///
/// Parse an emission table.
///
pub fn parse_emissions<R: BufRead>(reader: R) -> Result<EmissionTable> {
    let triples = parse_triples(reader)?;
    let mut table = EmissionTable::new();
    for (state, symbol, prob) in triples {
        let (state, symbol) = (State(state), Symbol(symbol));
        if table.contains(&state, &symbol) {
            warn!("duplicated emission {} -> {} is overwritten", state, symbol);
        }
        table.insert(state, symbol, prob);
    }
    Ok(table)
}

///
/// Read `<basename>.trans` and `<basename>.emit`.
///
pub fn load_tables(basename: &Path) -> Result<(TransitionTable, EmissionTable)> {
    let trans_path = transition_path(basename);
    let emit_path = emission_path(basename);
    info!("loading {} and {}", trans_path.display(), emit_path.display());
    let transitions = parse_transitions(BufReader::new(File::open(&trans_path)?))?;
    let emissions = parse_emissions(BufReader::new(File::open(&emit_path)?))?;
    info!(
        "loaded {} transition rows and {} emission rows",
        transitions.n_rows(),
        emissions.n_rows()
    );
    Ok((transitions, emissions))
}

impl HmmModel {
    ///
    /// Build a model from `<basename>.trans` and `<basename>.emit`.
    ///
    pub fn from_files<P: AsRef<Path>>(basename: P) -> Result<HmmModel> {
        let (transitions, emissions) = load_tables(basename.as_ref())?;
        HmmModel::build(transitions, emissions)
    }
}
