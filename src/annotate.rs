use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
    sync::OnceLock,
};

use indexmap::IndexSet;
use log::{info, warn};
use regex::Regex;

use crate::{lines::TextLines, Error, FamilyLookup, GffLine, Result};

/// Label appended when no family can be resolved for a feature.
pub const UNKNOWN: &str = "UNKNOWN";

/// How many example motifs the mismatch report prints from each side.
const EXAMPLES: usize = 5;

fn motif_regex() -> &'static Regex {
    static MOTIF: OnceLock<Regex> = OnceLock::new();
    MOTIF.get_or_init(|| Regex::new(r#"Motif:([^"\s]+)"#).expect("motif pattern is valid"))
}

/// Pull the identifier out of the first `Motif:<id>` token in a GFF
/// attributes column. The identifier runs up to the next quote or
/// whitespace character.
pub fn extract_motif(attributes: &str) -> Option<&str> {
    motif_regex()
        .captures(attributes)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Counters and example motifs gathered over one annotation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnnotationSummary {
    /// Features whose motif was in the lookup.
    pub found: usize,
    /// Features labelled `UNKNOWN`, with or without a motif token.
    pub unknown: usize,
    /// Every distinct motif seen in the GFF, in first-seen order.
    pub motifs_in_gff: IndexSet<String>,
    /// Distinct motifs that had no lookup entry.
    pub unmapped: IndexSet<String>,
}

impl AnnotationSummary {
    /// Log the diagnostic summary. When any feature is unknown, a few motifs
    /// from each side are printed so the two spellings can be compared.
    pub fn report(&self, lookup: &FamilyLookup) {
        info!("--- Diagnostic Summary ---");
        info!("Successfully mapped motifs: {}", self.found);
        info!("Motifs not found (marked as {}): {}", UNKNOWN, self.unknown);
        if self.unknown == 0 {
            return;
        }

        warn!("--- Mismatch Analysis ---");
        warn!("To fix this, compare the names from the GFF with the names in your family list.");
        warn!("Examples of motifs found in your GFF file:");
        for motif in self.motifs_in_gff.iter().take(EXAMPLES) {
            warn!("  - '{}'", motif);
        }
        warn!("Examples of motifs from your family list file (the lookup keys):");
        for motif in lookup.keys().take(EXAMPLES) {
            warn!("  - '{}'", motif);
        }
        warn!("Check for subtle differences like parentheses, quotes, or extra characters.");
    }
}

/// Append a TE family column to every feature line of `gff`, writing the
/// result to `output`.
///
/// The lookup is built first and an empty one aborts before the GFF is
/// touched. The GFF is opened before `output` is created.
pub fn annotate<P, Q, S>(gff: P, lookup_path: Q, output: S) -> Result<AnnotationSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<Path>,
{
    let (gff, output) = (gff.as_ref(), output.as_ref());
    let lookup = FamilyLookup::from_path(lookup_path)?;

    info!(
        "Processing '{}' and writing to '{}'...",
        gff.display(),
        output.display()
    );
    let input = File::open(gff).map_err(|e| Error::open(gff, e))?;
    let file = File::create(output).map_err(|e| Error::create(output, e))?;
    let writer = BufWriter::new(file);
    let summary = annotate_into(input, &lookup, writer)?;

    info!("--- Process Finished ---");
    info!("Output file saved to '{}'", output.display());
    summary.report(&lookup);
    Ok(summary)
}

/// Writer generic core of [`annotate`].
///
/// Comment, blank and short lines are dropped from the output.
pub fn annotate_into<R, W>(
    rdr: R,
    lookup: &FamilyLookup,
    mut writer: W,
) -> Result<AnnotationSummary>
where
    R: io::Read,
    W: Write,
{
    let mut summary = AnnotationSummary::default();

    for line in TextLines::new(io::BufReader::new(rdr)) {
        let line = line?;
        let Some(feature) = GffLine::parse(&line) else {
            continue;
        };

        let family = match extract_motif(feature.attributes()) {
            Some(motif) => {
                summary.motifs_in_gff.insert(motif.to_string());
                match lookup.get(motif) {
                    Some(family) => {
                        summary.found += 1;
                        family
                    }
                    None => {
                        summary.unknown += 1;
                        summary.unmapped.insert(motif.to_string());
                        UNKNOWN
                    }
                }
            }
            None => {
                summary.unknown += 1;
                UNKNOWN
            }
        };

        writeln!(writer, "{}\t{}", feature.as_str(), family)?;
    }

    writer.flush()?;
    Ok(summary)
}
