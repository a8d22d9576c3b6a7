//! Region table loading utilities
//!
//! Reads custom region tables: one `CODE<TAB>Name` row per line, blank lines
//! and `#` comments ignored. A row with only a code has no display name.

use crate::core::Catalog;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegionError {
    #[error("could not read region table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("region table {0} has no named countries")]
    Empty(PathBuf),
}

/// Parse region rows from text
///
/// Returns `(code, name)` pairs borrowed from `content`.
///
/// # Examples
/// ```
/// use country_guess::regions::loader::parse_rows;
///
/// let rows = parse_rows("FR\tFrance\n# comment\nAN\n");
/// assert_eq!(rows, vec![("FR", Some("France")), ("AN", None)]);
/// ```
#[must_use]
pub fn parse_rows(content: &str) -> Vec<(&str, Option<&str>)> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(|line| match line.split_once('\t') {
            Some((code, name)) => {
                let name = name.trim();
                (code.trim(), (!name.is_empty()).then_some(name))
            }
            None => (line.trim(), None),
        })
        .collect()
}

/// Load a catalog from a region file
///
/// # Errors
///
/// Returns [`RegionError::Read`] if the file cannot be read and
/// [`RegionError::Empty`] if it yields no named countries.
///
/// # Examples
/// ```no_run
/// use country_guess::regions::loader::load_from_file;
///
/// let catalog = load_from_file("data/regions.tsv").unwrap();
/// println!("Loaded {} countries", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, RegionError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| RegionError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = Catalog::build(parse_rows(&content));
    if catalog.is_empty() {
        return Err(RegionError::Empty(path.to_path_buf()));
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_rows_reads_code_and_name() {
        let rows = parse_rows("TD\tChad\nES\tSpain\n");
        assert_eq!(rows, vec![("TD", Some("Chad")), ("ES", Some("Spain"))]);
    }

    #[test]
    fn parse_rows_skips_blanks_and_comments() {
        let rows = parse_rows("\n# header\n   \nFR\tFrance\n");
        assert_eq!(rows, vec![("FR", Some("France"))]);
    }

    #[test]
    fn parse_rows_keeps_nameless_codes() {
        let rows = parse_rows("CS\nQO\t  \n");
        assert_eq!(rows, vec![("CS", None), ("QO", None)]);
    }

    #[test]
    fn load_from_file_builds_sorted_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ES\tSpain\nTD\tChad\nAN\nFR\tFrance").unwrap();

        let catalog = load_from_file(file.path()).unwrap();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Chad", "France", "Spain"]);
    }

    #[test]
    fn load_from_file_rejects_empty_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here\nAN\nCS").unwrap();

        assert!(matches!(
            load_from_file(file.path()),
            Err(RegionError::Empty(_))
        ));
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.tsv");
        assert!(matches!(
            load_from_file(&missing),
            Err(RegionError::Read { .. })
        ));
    }
}
