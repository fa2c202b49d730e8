use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::DatasetError;

/// Maximum tag length in characters, inherited from the legacy fixed-width format.
pub const TAG_MAX_CHARS: usize = 25;

// ---------------------------------------------------------------------------
// Field – the four columns of the input file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Abs,
    Rel,
    Del,
    Tag,
}

impl Field {
    /// All fields in file column order.
    pub const ALL: [Field; 4] = [Field::Abs, Field::Rel, Field::Del, Field::Tag];

    /// The integer fields, in the column order of the [`NumericView`].
    pub const NUMERIC: [Field; 3] = [Field::Abs, Field::Rel, Field::Del];

    pub fn name(self) -> &'static str {
        match self {
            Field::Abs => "abs",
            Field::Rel => "rel",
            Field::Del => "del",
            Field::Tag => "tag",
        }
    }
}

impl FromStr for Field {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| DatasetError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tag – the intended (but unenforced) label vocabulary
// ---------------------------------------------------------------------------

/// Known tag labels. The quotes are part of the value as stored in the file.
///
/// The loader accepts any string, so a record's tag is kept as a `String`;
/// this enum only names the values callers usually filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    PlusFoo,
    MinusFoo,
    PlusBar,
    MinusBar,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::PlusFoo, Tag::MinusFoo, Tag::PlusBar, Tag::MinusBar];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::PlusFoo => "\"++foo\"",
            Tag::MinusFoo => "\"--foo\"",
            Tag::PlusBar => "\"++bar\"",
            Tag::MinusBar => "\"--bar\"",
        }
    }

    /// Classify a raw tag value, `None` if it is outside the vocabulary.
    pub fn parse(value: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub abs: i64,
    pub rel: i64,
    pub del: i64,
    pub tag: String,
}

impl Record {
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Abs => FieldValue::Int(self.abs),
            Field::Rel => FieldValue::Int(self.rel),
            Field::Del => FieldValue::Int(self.del),
            Field::Tag => FieldValue::Text(self.tag.clone()),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, '{}')", self.abs, self.rel, self.del, self.tag)
    }
}

// ---------------------------------------------------------------------------
// FieldValue / Projection – result of a column selection
// ---------------------------------------------------------------------------

/// A single cell of a [`Projection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Text(s) => write!(f, "'{s}'"),
        }
    }
}

/// A narrow view of the dataset: only the selected fields, one row per record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub fields: Vec<Field>,
    pub rows: Vec<Vec<FieldValue>>,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.rows.iter().map(|row| {
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            // Single-element tuples keep their trailing comma: `(1,)`.
            if cells.len() == 1 {
                format!("({},)", cells[0])
            } else {
                format!("({})", cells.join(", "))
            }
        });
        write_rows(f, rows)
    }
}

/// Format rows as a bracketed list, one row per line.
fn write_rows<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    rows: impl IntoIterator<Item = T>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, row) in rows.into_iter().enumerate() {
        if i > 0 {
            f.write_str("\n ")?;
        }
        write!(f, "{row}")?;
    }
    f.write_str("]")
}

/// Render a list of records the same way the dataset prints its own.
pub fn format_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    struct Rows<'r>(Vec<&'r Record>);

    impl fmt::Display for Rows<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_rows(f, self.0.iter())
        }
    }

    Rows(records.into_iter().collect()).to_string()
}

// ---------------------------------------------------------------------------
// NumericView – dense abs/rel/del table
// ---------------------------------------------------------------------------

/// Row-major `i64` table with the columns `abs`, `rel`, `del`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericView {
    data: Vec<i64>,
}

impl NumericView {
    pub const COLUMNS: usize = 3;

    fn from_records(records: &[Record]) -> Self {
        let data = records
            .iter()
            .flat_map(|r| [r.abs, r.rel, r.del])
            .collect();
        NumericView { data }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.data.len() / Self::COLUMNS
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<[i64; 3]> {
        let start = index.checked_mul(Self::COLUMNS)?;
        let end = start.checked_add(Self::COLUMNS)?;
        let row = self.data.get(start..end)?;
        Some([row[0], row[1], row[2]])
    }

    pub fn rows(&self) -> impl Iterator<Item = [i64; 3]> + '_ {
        self.data
            .chunks_exact(Self::COLUMNS)
            .map(|row| [row[0], row[1], row[2]])
    }

    /// Iterate one column top to bottom. `None` for [`Field::Tag`].
    pub fn column(&self, field: Field) -> Option<impl Iterator<Item = i64> + '_> {
        let offset = Field::NUMERIC.iter().position(|f| *f == field)?;
        Some(
            self.data
                .iter()
                .skip(offset)
                .step_by(Self::COLUMNS)
                .copied(),
        )
    }
}

impl fmt::Display for NumericView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Right-align every cell to the widest value, as numpy does.
        let width = self
            .data
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(0);
        let rows = self.rows().map(|row| {
            let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
            format!("[{}]", cells.join(" "))
        });
        write_rows(f, rows)
    }
}

// ---------------------------------------------------------------------------
// TabularDataset – the complete loaded file
// ---------------------------------------------------------------------------

/// Parsed records plus the numeric view derived from them at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabularDataset {
    records: Vec<Record>,
    numeric: NumericView,
}

impl TabularDataset {
    /// Build the dataset, materialising the numeric view once.
    pub fn from_records(records: Vec<Record>) -> Self {
        let numeric = NumericView::from_records(&records);
        TabularDataset { records, numeric }
    }

    /// Records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn numeric(&self) -> &NumericView {
        &self.numeric
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sorted set of distinct tag values.
    pub fn unique_tags(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.tag.as_str()).collect()
    }
}

impl fmt::Display for TabularDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Structured Data:\n{}\n\nUnstructured Data:\n{}\n\n",
            format_records(&self.records),
            self.numeric
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(abs: i64, rel: i64, del: i64, tag: &str) -> Record {
        Record {
            abs,
            rel,
            del,
            tag: tag.to_string(),
        }
    }

    fn sample() -> TabularDataset {
        TabularDataset::from_records(vec![
            record(1, 2, 3, "\"++foo\""),
            record(4, 5, 6, "\"--bar\""),
        ])
    }

    #[test]
    fn numeric_view_matches_records() {
        let ds = sample();
        assert_eq!(ds.numeric().len(), ds.len());
        for (i, r) in ds.records().iter().enumerate() {
            assert_eq!(ds.numeric().row(i), Some([r.abs, r.rel, r.del]));
        }
        assert_eq!(ds.numeric().row(2), None);
    }

    #[test]
    fn numeric_columns() {
        let ds = sample();
        let rel: Vec<i64> = ds.numeric().column(Field::Rel).unwrap().collect();
        assert_eq!(rel, vec![2, 5]);
        assert!(ds.numeric().column(Field::Tag).is_none());
    }

    #[test]
    fn empty_dataset() {
        let ds = TabularDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.numeric().is_empty());
        assert_eq!(ds.numeric().rows().count(), 0);
    }

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "nonexistent".parse::<Field>(),
            Err(DatasetError::UnknownField(name)) if name == "nonexistent"
        ));
    }

    #[test]
    fn tag_vocabulary() {
        assert_eq!(Tag::parse("\"++foo\""), Some(Tag::PlusFoo));
        assert_eq!(Tag::parse("++foo"), None);
        assert_eq!(Tag::MinusBar.to_string(), "\"--bar\"");
    }

    #[test]
    fn display_dataset() {
        let expected = "Structured Data:\n\
                        [(1, 2, 3, '\"++foo\"')\n (4, 5, 6, '\"--bar\"')]\n\n\
                        Unstructured Data:\n\
                        [[1 2 3]\n [4 5 6]]\n\n";
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn display_numeric_pads_columns() {
        let ds = TabularDataset::from_records(vec![record(10, 2, -3, "x")]);
        assert_eq!(ds.numeric().to_string(), "[[10  2 -3]]");
    }

    #[test]
    fn display_single_field_projection() {
        let projection = Projection {
            fields: vec![Field::Abs],
            rows: vec![vec![FieldValue::Int(1)], vec![FieldValue::Int(4)]],
        };
        assert_eq!(projection.to_string(), "[(1,)\n (4,)]");
    }

    #[test]
    fn unique_tags_sorted() {
        let ds = sample();
        let tags: Vec<&str> = ds.unique_tags().into_iter().collect();
        assert_eq!(tags, vec!["\"++foo\"", "\"--bar\""]);
    }
}
