//! Two file-format stages used when annotating transposable elements.
//!
//! - [`reformat`] turns a whitespace aligned RepeatMasker `.out` report into
//!   a tab separated table, plus a two column `matching_repeat` to
//!   `repeat_class_family` side table.
//! - [`annotate`] reads that side table (or any `motif<TAB>family` list) and
//!   appends the family of each feature's `Motif:<id>` token to a GFF file,
//!   or `UNKNOWN` when it cannot be resolved.
//!
//! ```no_run
//! let summary = rmfam::reformat("genome.fa.out", "genome.tsv", "families.tsv")?;
//! println!("{} rows", summary.rows);
//!
//! let summary = rmfam::annotate("genome.gff", "families.tsv", "genome.family.gff")?;
//! println!("{} unknown", summary.unknown);
//! # Ok::<(), rmfam::Error>(())
//! ```

mod annotate;
mod error;
mod lines;
mod lookup;
mod reader;
mod record;
mod reformat;

pub use annotate::{annotate, annotate_into, extract_motif, AnnotationSummary, UNKNOWN};
pub use error::{Error, ErrorKind, Result};
pub use lookup::FamilyLookup;
pub use reader::{Reader, RecordsIter, HEADER_LINES};
pub use record::{header, Column, GffLine, ReportLine, GFF_COLUMNS};
pub use reformat::{reformat, reformat_into, ReformatSummary};
