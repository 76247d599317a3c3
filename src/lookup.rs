use std::{
    fs::File,
    io,
    path::Path,
};

use indexmap::IndexMap;
use log::{info, warn};

use crate::{lines::TextLines, Error, ErrorKind, Result};

/// Motif to TE family mapping, read from a two column tab separated file.
///
/// Keys keep the order in which they were first seen. A repeated motif
/// overwrites the family of the earlier row.
#[derive(Debug, Default, Clone)]
pub struct FamilyLookup {
    map: IndexMap<String, String>,
    malformed: usize,
}

impl FamilyLookup {
    /// Read a family list from disk. An empty result is an error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<FamilyLookup> {
        let path = path.as_ref();
        info!("Reading TE family map from '{}'...", path.display());
        let file = File::open(path).map_err(|e| Error::open(path, e))?;
        let lookup = FamilyLookup::from_reader(file)?;
        if lookup.is_empty() {
            return Err(Error::new(ErrorKind::EmptyLookup {
                path: path.to_path_buf(),
            }));
        }
        info!("Successfully mapped {} motifs.", lookup.len());
        Ok(lookup)
    }

    /// Read a family list. Blank rows are ignored and rows that are not
    /// exactly `motif<TAB>family` are logged and skipped.
    pub fn from_reader<R: io::Read>(rdr: R) -> Result<FamilyLookup> {
        let mut lookup = FamilyLookup::default();
        for line in TextLines::new(io::BufReader::new(rdr)) {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(motif), Some(family), None) => lookup.insert(motif, family),
                _ => {
                    warn!("Skipping malformed line in family list: '{}'", line);
                    lookup.malformed += 1;
                }
            }
        }
        Ok(lookup)
    }

    pub fn insert(&mut self, motif: &str, family: &str) {
        self.map.insert(motif.to_string(), family.to_string());
    }

    pub fn get(&self, motif: &str) -> Option<&str> {
        self.map.get(motif).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Motifs in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Number of rows skipped for not having exactly two columns.
    pub fn malformed(&self) -> usize {
        self.malformed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_pairs_and_skips_malformed_rows() {
        let input = "rnd-1_family\tLINE/L1\n\
            \n\
            just_one_field\n\
            a\tb\tc\n\
            rnd-2_family\tDNA/hAT\r\n";
        let lookup = FamilyLookup::from_reader(input.as_bytes()).unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.malformed(), 2);
        assert_eq!(lookup.get("rnd-1_family"), Some("LINE/L1"));
        assert_eq!(lookup.get("rnd-2_family"), Some("DNA/hAT"));
        assert_eq!(lookup.get("rnd-3_family"), None);
    }

    #[test]
    fn carriage_return_rows() {
        let input = "m1\tLINE\rm2\tSINE\r\rm3\tLTR";
        let lookup = FamilyLookup::from_reader(input.as_bytes()).unwrap();
        assert_eq!(lookup.keys().collect::<Vec<_>>(), vec!["m1", "m2", "m3"]);
        assert_eq!(lookup.get("m2"), Some("SINE"));
        assert_eq!(lookup.malformed(), 0);
    }

    #[test]
    fn last_duplicate_wins_first_position_kept() {
        let input = "m1\tLINE\nm2\tSINE\nm1\tLTR\n";
        let lookup = FamilyLookup::from_reader(input.as_bytes()).unwrap();
        assert_eq!(lookup.get("m1"), Some("LTR"));
        assert_eq!(lookup.keys().collect::<Vec<_>>(), vec!["m1", "m2"]);
    }

    #[test]
    fn space_separated_rows_are_malformed() {
        let lookup = FamilyLookup::from_reader("m1 LINE\n".as_bytes()).unwrap();
        assert!(lookup.is_empty());
        assert_eq!(lookup.malformed(), 1);
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("families.tsv");
        std::fs::write(&path, "\nbad\n").unwrap();
        let err = FamilyLookup::from_path(&path).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::EmptyLookup { .. }));
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let err = FamilyLookup::from_path("/nonexistent/families.tsv").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/families.tsv"));
    }
}
