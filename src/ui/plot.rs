use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::model::Field;
use crate::state::AppState;

const GREEN: Color32 = Color32::from_rgb(0x00, 0x80, 0x00);
const BLUE: Color32 = Color32::from_rgb(0x00, 0x00, 0xff);

/// How one series is drawn against `abs`.
struct SeriesStyle {
    field: Field,
    color: Color32,
    marker: MarkerShape,
    radius: f32,
}

// ---------------------------------------------------------------------------
// Plot panels (central panel)
// ---------------------------------------------------------------------------

/// Render the line plot and the scatter plot side by side.
pub fn plot_panels(ui: &mut Ui, state: &AppState) {
    ui.columns(2, |cols: &mut [Ui]| {
        cols[0].heading("A line plot");
        line_plot(&mut cols[0], state);

        cols[1].heading("A scatter plot");
        scatter_plot(&mut cols[1], state);
    });
}

/// `abs` against `rel` and `del` as connected lines with markers.
fn line_plot(ui: &mut Ui, state: &AppState) {
    let series = [
        SeriesStyle {
            field: Field::Rel,
            color: GREEN,
            marker: MarkerShape::Circle,
            radius: 3.0,
        },
        SeriesStyle {
            field: Field::Del,
            color: BLUE,
            marker: MarkerShape::Circle,
            radius: 1.5,
        },
    ];

    Plot::new("line_plot")
        .legend(Legend::default())
        .x_axis_label(Field::Abs.name())
        .show_grid(state.show_grid)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for style in &series {
                let name = style.field.name();
                let xy = visible_xy(state, style.field);

                plot_ui.line(
                    Line::new(PlotPoints::from(xy.clone()))
                        .name(name)
                        .color(style.color)
                        .width(1.5),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(xy))
                        .name(name)
                        .color(style.color)
                        .shape(style.marker)
                        .radius(style.radius)
                        .filled(true),
                );
            }
        });
}

/// `abs` against `rel` and `del` as markers coloured by `abs`.
fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let series = [
        (Field::Rel, MarkerShape::Up, ColorMap::RdYlGnR),
        (Field::Del, MarkerShape::Down, ColorMap::Plasma),
    ];

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(Field::Abs.name())
        .show_grid(state.show_grid)
        .allow_boxed_zoom(true)
        .show(ui, |plot_ui| {
            for (field, marker, cmap) in series {
                let name = format!("{} ({})", field.name(), cmap.name());
                let xy = visible_xy(state, field);

                // egui_plot colours a whole `Points` item, so each marker is its own item.
                for (&idx, point) in state.visible_indices.iter().zip(xy) {
                    let t = state.color_positions.get(idx).copied().unwrap_or(0.0);
                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![point]))
                            .name(&name)
                            .color(cmap.sample(t))
                            .shape(marker)
                            .radius(4.0),
                    );
                }
            }
        });
}

/// `[abs, field]` pairs for the visible rows, in row order.
fn visible_xy(state: &AppState, field: Field) -> Vec<[f64; 2]> {
    let Some(col) = Field::NUMERIC.iter().position(|f| *f == field) else {
        return Vec::new();
    };
    let numeric = state.dataset.numeric();
    state
        .visible_indices
        .iter()
        .filter_map(|&i| numeric.row(i))
        .map(|row| [row[0] as f64, row[col] as f64])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_from_reader;
    use pretty_assertions::assert_eq;

    #[test]
    fn visible_xy_follows_selection() {
        let ds = load_from_reader("h\n1,2,3,a\n4,5,6,b\n7,8,9,a\n".as_bytes()).unwrap();
        let mut state = AppState::new(ds);
        state.toggle_tag("b");
        assert_eq!(visible_xy(&state, Field::Rel), vec![[1.0, 2.0], [7.0, 8.0]]);
        assert_eq!(visible_xy(&state, Field::Del), vec![[1.0, 3.0], [7.0, 9.0]]);
        assert!(visible_xy(&state, Field::Tag).is_empty());
    }
}
