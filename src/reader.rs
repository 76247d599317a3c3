use std::{fs::File, io, path::Path};

use crate::{lines::TextLines, Error, ReportLine, Result};

/// Lines at the top of a RepeatMasker `.out` report that hold the column
/// titles. They are dropped without being inspected.
pub const HEADER_LINES: u64 = 3;

pub struct Reader<R> {
    lines: TextLines<io::BufReader<R>>,
    line: u64,
}

impl Reader<File> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Reader<File>> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::open(path, e))?;
        Ok(Reader::new(file))
    }
}

impl<R: io::Read> Reader<R> {
    pub fn new(rdr: R) -> Reader<R> {
        Reader {
            lines: TextLines::new(io::BufReader::new(rdr)),
            line: 0,
        }
    }

    /// The number of input lines consumed so far, header included.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// A borrowed iterator over the data lines of a report.
    pub fn records(&mut self) -> RecordsIter<'_, R> {
        RecordsIter::new(self)
    }

    /// Read the next non-blank line after the header.
    fn read_record(&mut self) -> Result<Option<ReportLine>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line += 1;
            if self.line <= HEADER_LINES {
                continue;
            }
            if let Some(record) = ReportLine::parse(&line) {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }
}

/// A borrowed iterator over the data lines of a report.
pub struct RecordsIter<'r, R: 'r> {
    /// The underlying reader
    rdr: &'r mut Reader<R>,
}

impl<'r, R: io::Read> RecordsIter<'r, R> {
    fn new(rdr: &'r mut Reader<R>) -> RecordsIter<'r, R> {
        RecordsIter { rdr }
    }

    /// Return a reference to the underlying reader.
    pub fn reader(&self) -> &Reader<R> {
        self.rdr
    }
}

impl<'r, R: io::Read> Iterator for RecordsIter<'r, R> {
    type Item = Result<ReportLine>;

    fn next(&mut self) -> Option<Result<ReportLine>> {
        self.rdr.read_record().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "   SW   perc perc perc  query      position in query    matching  repeat\n\
score   div. del. ins.  sequence    begin  end  (left)   repeat    class/family\n\
\n\
  12  1.2  3  0  seq1  1  10  (90)  +  rnd-1_family  LINE/L1  1  10  (0)  1\n\
\n\
  20  0.0  0  0  seq1  50  60  (40)  C  rnd-2_family  DNA/hAT  (5)  10  1  2  *\n";

    #[test]
    fn skips_header_and_blank_lines() {
        let mut reader = Reader::new(REPORT.as_bytes());
        let records = reader.records().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].as_tsv().starts_with("12\t1.2"));
        assert!(records[1].as_tsv().ends_with("2\t*"));
        assert_eq!(reader.line(), 6);
    }

    #[test]
    fn header_lines_are_dropped_even_when_they_look_like_data() {
        let mut reader = Reader::new("1 2\n3 4\n5 6\n7 8\n".as_bytes());
        let records = reader.records().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_tsv(), "7\t8");
    }

    #[test]
    fn carriage_return_line_endings() {
        let input = "h1\rh2\rh3\r\
            12  1.2  3  0  seq1  1  10  (90)  +  rnd-1_family  LINE/L1  1  10  (0)  1\r\
            \r\
            7 8\r";
        let mut reader = Reader::new(input.as_bytes());
        let records = reader.records().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].family_entry(),
            Some(("rnd-1_family", "LINE/L1"))
        );
        assert_eq!(records[1].as_tsv(), "7\t8");
        assert_eq!(reader.line(), 6);
    }

    #[test]
    fn windows_line_endings() {
        let input = "h1\r\nh2\r\nh3\r\na  b\r\n";
        let mut reader = Reader::new(input.as_bytes());
        let records = reader.records().collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_tsv(), "a\tb");
        assert_eq!(reader.line(), 4);
    }

    #[test]
    fn short_input_has_no_records() {
        let mut reader = Reader::new("a\nb\n".as_bytes());
        assert_eq!(reader.records().count(), 0);
    }

    #[test]
    fn missing_file() {
        let err = Reader::from_path("/nonexistent/rm.out").err().unwrap();
        assert!(matches!(
            err.kind(),
            crate::ErrorKind::FileNotFound { .. }
        ));
    }
}
