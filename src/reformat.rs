use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{debug, info, warn};

use crate::{header, Error, Reader, Result};

/// Row counts from one reformatting run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReformatSummary {
    /// Data rows written to the main table.
    pub rows: usize,
    /// Rows written to the motif/family side table.
    pub families: usize,
    /// Rows with fewer than 11 fields, left out of the side table only.
    pub short: usize,
}

/// Reformat a RepeatMasker report into a tab separated table at
/// `main_output` and a two column `matching_repeat`/`repeat_class_family`
/// table at `extra_output`.
///
/// The input is opened before either output is created.
pub fn reformat<P, Q, S>(input: P, main_output: Q, extra_output: S) -> Result<ReformatSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<Path>,
{
    let (input, main_output, extra_output) =
        (input.as_ref(), main_output.as_ref(), extra_output.as_ref());
    let reader = Reader::from_path(input)?;
    let main = File::create(main_output).map_err(|e| Error::create(main_output, e))?;
    let extra = File::create(extra_output).map_err(|e| Error::create(extra_output, e))?;
    let (main, extra) = (BufWriter::new(main), BufWriter::new(extra));

    info!("Reformatting '{}'", input.display());
    let summary = reformat_into(reader, main, extra)?;
    info!("Successfully processed '{}'.", input.display());
    info!("  - Main TSV saved to: '{}'", main_output.display());
    info!("  - Extra columns saved to: '{}'", extra_output.display());
    Ok(summary)
}

/// Writer generic core of [`reformat`]. Both writers are flushed before
/// returning.
pub fn reformat_into<R, M, E>(
    mut reader: Reader<R>,
    mut main: M,
    mut extra: E,
) -> Result<ReformatSummary>
where
    R: io::Read,
    M: Write,
    E: Write,
{
    let mut summary = ReformatSummary::default();
    writeln!(main, "{}", header())?;

    let mut records = reader.records();
    while let Some(record) = records.next() {
        let record = record?;
        writeln!(main, "{}", record)?;
        summary.rows += 1;

        match record.family_entry() {
            Some((motif, family)) => {
                writeln!(extra, "{}\t{}", motif, family)?;
                summary.families += 1;
            }
            None => {
                warn!(
                    "Skipped line {} with fewer than 11 columns: '{}'",
                    records.reader().line(),
                    record.source()
                );
                summary.short += 1;
            }
        }
    }

    main.flush()?;
    extra.flush()?;
    debug!("{:?}", summary);
    Ok(summary)
}
