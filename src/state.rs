use std::collections::BTreeSet;

use crate::color::normalize;
use crate::data::model::{Field, TabularDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset loaded at startup.
    pub dataset: TabularDataset,

    /// Distinct tag values, sorted.
    pub tags: Vec<String>,

    /// Tags currently shown in the plots.
    pub selected_tags: BTreeSet<String>,

    /// Rows of the numeric view passing the tag selection (cached).
    pub visible_indices: Vec<usize>,

    /// `abs` of every row scaled onto `[0, 1]`, used for scatter colours.
    pub color_positions: Vec<f64>,

    pub show_grid: bool,
}

impl AppState {
    /// Start with every tag selected so the plots show the whole dataset.
    pub fn new(dataset: TabularDataset) -> Self {
        let tags: Vec<String> = dataset
            .unique_tags()
            .into_iter()
            .map(str::to_string)
            .collect();
        let selected_tags = tags.iter().cloned().collect();

        let abs: Vec<f64> = dataset
            .numeric()
            .column(Field::Abs)
            .map(|col| col.map(|v| v as f64).collect())
            .unwrap_or_default();

        let mut state = Self {
            visible_indices: Vec::new(),
            color_positions: normalize(&abs),
            dataset,
            tags,
            selected_tags,
            show_grid: true,
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        self.visible_indices = self.dataset.tag_indices(&self.selected_tags);
    }

    /// Toggle a single tag in the selection.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
        self.refilter();
    }

    pub fn select_all(&mut self) {
        self.selected_tags = self.tags.iter().cloned().collect();
        self.refilter();
    }

    pub fn select_none(&mut self) {
        self.selected_tags.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_from_reader;
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        let ds = load_from_reader(
            "abs,rel,del,tag\n\
             0,1,1,\"++foo\"\n\
             5,2,2,\"--bar\"\n\
             10,3,3,\"++foo\"\n"
                .as_bytes(),
        )
        .unwrap();
        AppState::new(ds)
    }

    #[test]
    fn starts_with_everything_visible() {
        let s = state();
        assert_eq!(s.tags, vec!["\"++foo\"", "\"--bar\""]);
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
        assert_eq!(s.color_positions, vec![0.0, 0.5, 1.0]);
        assert!(s.show_grid);
    }

    #[test]
    fn toggling_a_tag_hides_its_rows() {
        let mut s = state();
        s.toggle_tag("\"++foo\"");
        assert_eq!(s.visible_indices, vec![1]);
        s.toggle_tag("\"++foo\"");
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn select_none_then_all() {
        let mut s = state();
        s.select_none();
        assert!(s.visible_indices.is_empty());
        s.select_all();
        assert_eq!(s.visible_indices, vec![0, 1, 2]);
    }
}
