//!
//! Observation sequence files
//!
use super::tables::with_suffix;
use crate::error::Result;
use crate::hmm::state::Symbol;
use itertools::Itertools;
use std::path::{Path, PathBuf};

///
/// `<basename>_sequence.obs`, the file that sampled observations are written to.
///
pub fn observation_path(basename: &Path) -> PathBuf {
    with_suffix(basename, "_sequence.obs")
}

///
/// Split whitespace-separated symbols. Line breaks are treated as spaces.
///
pub fn parse_observations(text: &str) -> Vec<Symbol> {
    text.split_whitespace().map(Symbol::new).collect()
}

///
/// Read all symbols in the file.
///
pub fn read_observations<P: AsRef<Path>>(path: P) -> Result<Vec<Symbol>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_observations(&text))
}

///
/// Write symbols space-separated in one line.
///
pub fn write_observations<P: AsRef<Path>>(path: P, observations: &[Symbol]) -> Result<()> {
    let line = observations.iter().join(" ");
    std::fs::write(path, line + "\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmm::state::symbols;

    #[test]
    fn parse_observation_line() {
        let obs = parse_observations("purr silent  silent\tmeow\nmeow\n");
        assert_eq!(
            obs,
            symbols(&["purr", "silent", "silent", "meow", "meow"])
        );
        assert!(parse_observations(" \n").is_empty());
    }
    #[test]
    fn write_and_read_observations() {
        let dir = tempfile::tempdir().unwrap();
        let path = observation_path(&dir.path().join("cat"));
        assert!(path.ends_with("cat_sequence.obs"));
        let obs = symbols(&["meow", "purr"]);
        write_observations(&path, &obs).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "meow purr\n");
        assert_eq!(read_observations(&path).unwrap(), obs);
    }
}
