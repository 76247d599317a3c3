use std::fmt;

/// The columns of a RepeatMasker `.out` table, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Smith-Waterman score of the match
    SwScore,
    /// Percent divergence from the consensus
    PercDiv,
    /// Percent of bases deleted in the query
    PercDel,
    /// Percent of bases inserted in the query
    PercIns,
    /// Name of the query sequence
    QuerySequence,
    /// Start of the match in the query
    Begin,
    /// End of the match in the query
    End,
    /// Bases left in the query after the match, e.g. `(90)`
    Left,
    /// `+` or `C` for the complement strand
    Strand,
    /// Name of the matching repeat (the motif)
    MatchingRepeat,
    /// Class/family of the matching repeat, e.g. `LINE/L1`
    RepeatClassFamily,
    BeginInRepeat,
    EndInRepeat,
    LeftInRepeat,
    /// RepeatMasker's fragment ID
    Id,
    /// A `*` when a higher scoring match overlaps this one
    OptionalStar,
}

impl Column {
    /// Every column, in file order.
    pub const ALL: [Column; 16] = [
        Column::SwScore,
        Column::PercDiv,
        Column::PercDel,
        Column::PercIns,
        Column::QuerySequence,
        Column::Begin,
        Column::End,
        Column::Left,
        Column::Strand,
        Column::MatchingRepeat,
        Column::RepeatClassFamily,
        Column::BeginInRepeat,
        Column::EndInRepeat,
        Column::LeftInRepeat,
        Column::Id,
        Column::OptionalStar,
    ];

    /// Zero based position of the column in a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The header name written to the reformatted table.
    pub fn name(self) -> &'static str {
        match self {
            Column::SwScore => "SW_score",
            Column::PercDiv => "perc_div",
            Column::PercDel => "perc_del",
            Column::PercIns => "perc_ins",
            Column::QuerySequence => "query_sequence",
            Column::Begin => "begin",
            Column::End => "end",
            Column::Left => "left",
            Column::Strand => "strand",
            Column::MatchingRepeat => "matching_repeat",
            Column::RepeatClassFamily => "repeat_class_family",
            Column::BeginInRepeat => "begin_in_repeat",
            Column::EndInRepeat => "end_in_repeat",
            Column::LeftInRepeat => "left_in_repeat",
            Column::Id => "ID",
            Column::OptionalStar => "optional_star",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The header line of the reformatted table, without a newline.
pub fn header() -> String {
    Column::ALL
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join("\t")
}

/// A single data line of a RepeatMasker report, with every run of
/// whitespace collapsed into one tab.
///
/// No column count is enforced: short lines are still valid rows of the
/// reformatted table, they just have no family entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    source: String,
    tsv: String,
}

impl ReportLine {
    /// Returns `None` when the line is blank.
    pub fn parse(line: &str) -> Option<ReportLine> {
        let fields = line.split_whitespace().collect::<Vec<&str>>();
        if fields.is_empty() {
            return None;
        }
        Some(ReportLine {
            source: line.trim().to_string(),
            tsv: fields.join("\t"),
        })
    }

    /// The input line as it appeared in the report, minus surrounding
    /// whitespace.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The tab separated form of the line.
    pub fn as_tsv(&self) -> &str {
        &self.tsv
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.tsv.split('\t')
    }

    pub fn len(&self) -> usize {
        self.fields().count()
    }

    /// Never true for a parsed line, present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tsv.is_empty()
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.fields().nth(column.index())
    }

    /// The `(matching_repeat, repeat_class_family)` pair, if the line has
    /// at least 11 fields.
    pub fn family_entry(&self) -> Option<(&str, &str)> {
        let mut fields = self.fields().skip(Column::MatchingRepeat.index());
        match (fields.next(), fields.next()) {
            (Some(motif), Some(family)) => Some((motif, family)),
            _ => None,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.tsv)
    }
}

/// Number of tab separated columns a GFF feature line must have.
pub const GFF_COLUMNS: usize = 9;

/// A GFF feature line with at least nine tab separated columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GffLine<'a> {
    line: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> GffLine<'a> {
    /// Returns `None` for comment lines (`#` in the very first position),
    /// blank lines and lines with fewer than nine columns.
    pub fn parse(raw: &'a str) -> Option<GffLine<'a>> {
        if raw.starts_with('#') {
            return None;
        }
        let line = raw.trim();
        if line.is_empty() {
            return None;
        }
        let fields = line.split('\t').collect::<Vec<&str>>();
        if fields.len() < GFF_COLUMNS {
            return None;
        }
        Some(GffLine { line, fields })
    }

    /// The trimmed line.
    pub fn as_str(&self) -> &'a str {
        self.line
    }

    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// The free text ninth column.
    pub fn attributes(&self) -> &'a str {
        self.fields[GFF_COLUMNS - 1]
    }
}
