use eframe::egui;

use crate::data::model::TabularDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

/// Window showing one loaded dataset: toolbar, tag list, and the two plots.
pub struct TabularPlotApp {
    pub state: AppState,
}

impl TabularPlotApp {
    pub fn new(dataset: TabularDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for TabularPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // Panels must be added before the central panel claims the rest.
        egui::SidePanel::left("tag_panel")
            .default_width(140.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            plot::plot_panels(ui, &self.state);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_from_reader;

    #[test]
    fn new_app_shows_every_row() {
        let ds = load_from_reader("abs,rel,del,tag\n1,2,3,a\n4,5,6,b\n".as_bytes()).unwrap();
        let app = TabularPlotApp::new(ds);
        assert_eq!(app.state.visible_indices, vec![0, 1]);
        assert_eq!(app.state.dataset.len(), 2);
    }
}
