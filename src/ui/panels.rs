use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::Tag;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – tag filter
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Tags");
    ui.separator();

    if state.tags.is_empty() {
        ui.label("Dataset has no rows.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    // Clone so the loop can mutate the selection.
    let tags = state.tags.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for tag in &tags {
                let mut checked = state.selected_tags.contains(tag);
                // Values outside the usual vocabulary are shown in italics.
                let mut text = RichText::new(tag);
                if Tag::parse(tag).is_none() {
                    text = text.italics();
                }
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_tag(tag);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!(
            "{} rows loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        ui.separator();

        if ui.selectable_label(state.show_grid, "Grid").clicked() {
            state.show_grid = !state.show_grid;
        }
    });
}
