use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::error::{DatasetError, Result};
use super::model::{Field, Record, TabularDataset, TAG_MAX_CHARS};

const FIELD_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a CSV file.
///
/// Layout:
/// * line 1 is a header and is discarded whatever it contains
/// * every other line holds `abs,rel,del,tag`
///
/// Numeric fields may carry surrounding whitespace. The tag is kept verbatim,
/// quote characters included, and cut to [`TAG_MAX_CHARS`] characters.
/// After the header, blank lines and lines starting with `#` are skipped.
///
/// Either every row parses or nothing is returned.
pub fn load(path: &Path) -> Result<TabularDataset> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let dataset = read_dataset(file, path)?;
    log::info!("Loaded {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Same as [`load`] but reads from any byte source.
pub fn load_from_reader<R: Read>(reader: R) -> Result<TabularDataset> {
    read_dataset(reader, Path::new("<reader>"))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

fn read_dataset<R: Read>(reader: R, origin: &Path) -> Result<TabularDataset> {
    // Drop line 1 as raw bytes so a `#` or blank header is not mistaken for
    // a comment, and a non-UTF-8 header is still accepted.
    let mut reader = BufReader::new(reader);
    let mut header = Vec::new();
    let header_lines = match reader.read_until(b'\n', &mut header) {
        Ok(0) => 0,
        Ok(_) => 1,
        Err(e) => return Err(io_error(origin, e)),
    };

    // Quoting is off: `"++foo"` must reach the record with its quotes.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| csv_error(origin, e, header_lines))?;
        if is_blank(&row) {
            continue;
        }
        let line = row.position().map(|p| p.line()).unwrap_or(0) + header_lines;
        records.push(parse_row(&row, line)?);
    }

    Ok(TabularDataset::from_records(records))
}

fn parse_row(row: &StringRecord, line: u64) -> Result<Record> {
    if row.len() != FIELD_COUNT {
        return Err(DatasetError::MalformedRow {
            line,
            reason: format!("expected {FIELD_COUNT} fields, found {}", row.len()),
        });
    }

    Ok(Record {
        abs: parse_int(&row[0], Field::Abs, line)?,
        rel: parse_int(&row[1], Field::Rel, line)?,
        del: parse_int(&row[2], Field::Del, line)?,
        tag: truncate_tag(&row[3], line),
    })
}

fn parse_int(s: &str, field: Field, line: u64) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|e| DatasetError::MalformedRow {
            line,
            reason: format!("'{field}' value '{s}' is not an integer: {e}"),
        })
}

fn truncate_tag(s: &str, line: u64) -> String {
    match s.char_indices().nth(TAG_MAX_CHARS) {
        Some((cut, _)) => {
            log::debug!("line {line}: tag '{s}' truncated to {TAG_MAX_CHARS} characters");
            s[..cut].to_string()
        }
        None => s.to_string(),
    }
}

fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(|field| field.trim().is_empty()) && row.len() <= 1
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn io_error(path: &Path, source: io::Error) -> DatasetError {
    if source.kind() == io::ErrorKind::NotFound {
        DatasetError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        DatasetError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// `line_offset` counts the lines consumed before the CSV reader started.
fn csv_error(origin: &Path, err: csv::Error, line_offset: u64) -> DatasetError {
    let line = err.position().map(|p| p.line() + line_offset).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(source) => io_error(origin, source),
        csv::ErrorKind::Utf8 { err, .. } => DatasetError::MalformedRow {
            line,
            reason: format!("invalid UTF-8: {err}"),
        },
        other => DatasetError::MalformedRow {
            line,
            reason: format!("{other:?}"),
        },
    }
}
