use std::collections::HashSet;

use super::error::Result;
use super::model::{Field, Projection, Record, TabularDataset};

// ---------------------------------------------------------------------------
// Column and tag selection over a loaded dataset
// ---------------------------------------------------------------------------

impl TabularDataset {
    /// Keep only the named fields, one entry per row in file order.
    ///
    /// Fields come out in the order requested; a repeated name is kept once.
    /// Any name outside `abs`, `rel`, `del`, `tag` fails with
    /// [`DatasetError::UnknownField`](super::error::DatasetError::UnknownField).
    pub fn filter_by_columns<I, S>(&self, names: I) -> Result<Projection>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields: Vec<Field> = Vec::new();
        for name in names {
            let field: Field = name.as_ref().parse()?;
            if !fields.contains(&field) {
                fields.push(field);
            }
        }

        let rows = self
            .records()
            .iter()
            .map(|r| fields.iter().map(|&f| r.value(f)).collect())
            .collect();

        Ok(Projection { fields, rows })
    }

    /// Records whose tag equals one of `values` exactly, in file order.
    pub fn filter_by_tag<I, S>(&self, values: I) -> Vec<&Record>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tag_indices(values)
            .into_iter()
            .map(|i| &self.records()[i])
            .collect()
    }

    /// Row indices of the records [`filter_by_tag`](Self::filter_by_tag) returns.
    pub fn tag_indices<I, S>(&self, values: I) -> Vec<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let wanted: Vec<S> = values.into_iter().collect();
        let wanted: HashSet<&str> = wanted.iter().map(|v| v.as_ref()).collect();

        self.records()
            .iter()
            .enumerate()
            .filter(|(_, r)| wanted.contains(r.tag.as_str()))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::data::error::DatasetError;
    use crate::data::loader::load_from_reader;
    use crate::data::model::{FieldValue, Tag};

    use super::*;

    fn sample() -> TabularDataset {
        load_from_reader(
            "abs,rel,del,tag\n\
             1,2,3,\"++foo\"\n\
             4,5,6,\"--bar\"\n\
             7,8,9,\"--foo\"\n\
             10,11,12,\"++foo\"\n"
                .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn single_column() {
        let ds = sample();
        let projection = ds.filter_by_columns(["abs"]).unwrap();
        assert_eq!(projection.fields, vec![Field::Abs]);
        assert_eq!(projection.len(), ds.len());
        for (row, record) in projection.rows.iter().zip(ds.records()) {
            assert_eq!(row, &vec![FieldValue::Int(record.abs)]);
        }
    }

    #[test]
    fn columns_follow_request_order() {
        let ds = sample();
        let projection = ds.filter_by_columns(["tag", "abs", "tag"]).unwrap();
        assert_eq!(projection.fields, vec![Field::Tag, Field::Abs]);
        assert_eq!(
            projection.rows[1],
            vec![FieldValue::Text("\"--bar\"".into()), FieldValue::Int(4)]
        );
    }

    #[test]
    fn unknown_column() {
        let err = sample().filter_by_columns(["nonexistent"]).unwrap_err();
        assert!(matches!(err, DatasetError::UnknownField(name) if name == "nonexistent"));
    }

    #[test]
    fn empty_column_selection_keeps_row_count() {
        let ds = sample();
        let projection = ds.filter_by_columns(Vec::<String>::new()).unwrap();
        assert!(projection.fields.is_empty());
        assert_eq!(projection.len(), ds.len());
    }

    #[test]
    fn single_tag() {
        let ds = sample();
        let hits = ds.filter_by_tag(["\"++foo\""]);
        let abs: Vec<i64> = hits.iter().map(|r| r.abs).collect();
        assert_eq!(abs, vec![1, 10]);
        assert!(hits.iter().all(|r| r.tag == "\"++foo\""));
    }

    #[test]
    fn several_tags_keep_file_order() {
        let ds = sample();
        let hits = ds.filter_by_tag([Tag::PlusFoo, Tag::MinusFoo]);
        let abs: Vec<i64> = hits.iter().map(|r| r.abs).collect();
        assert_eq!(abs, vec![1, 7, 10]);
    }

    #[test]
    fn tag_match_is_exact() {
        let ds = sample();
        assert!(ds.filter_by_tag(["++foo"]).is_empty());
        assert!(ds.filter_by_tag(["\"++fo"]).is_empty());
        assert!(ds.filter_by_tag(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn tag_indices_match_filter() {
        let ds = sample();
        assert_eq!(ds.tag_indices([Tag::MinusBar]), vec![1]);
    }

    #[test]
    fn filters_do_not_change_the_dataset() {
        let ds = sample();
        let before = ds.clone();
        let _ = ds.filter_by_columns(["del"]).unwrap();
        let _ = ds.filter_by_tag(["\"--bar\""]);
        assert_eq!(ds, before);
    }
}
