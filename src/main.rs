mod app;
mod cli;
mod color;
mod data;
mod state;
mod ui;

use anyhow::{anyhow, Context, Result};
use app::TabularPlotApp;
use clap::Parser;
use cli::Cli;
use data::error::DatasetError;
use data::loader;
use data::model::{format_records, Field, TabularDataset, Tag};
use eframe::egui;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = match loader::load(&cli.file) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", cli.file.display());
            return Err(e).with_context(|| format!("loading {}", cli.file.display()));
        }
    };

    println!("\n");
    print!("{}", console_report(&dataset)?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 400.0])
            .with_min_inner_size([500.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tabular Plot",
        options,
        Box::new(|_cc| Ok(Box::new(TabularPlotApp::new(dataset)))),
    )
    .map_err(|e| anyhow!("running viewer: {e}"))
}

/// The dataset followed by one column filter and one tag filter.
///
/// Each block ends in three newlines; records print one per line.
fn console_report(dataset: &TabularDataset) -> Result<String, DatasetError> {
    let by_column = dataset.filter_by_columns([Field::Abs.name()])?;
    let by_tag = dataset.filter_by_tag([Tag::PlusFoo, Tag::MinusFoo]);

    Ok(format!(
        "{dataset}\napply filter by column:\n{by_column}\n\n\napply filter by tag:\n{}\n\n\n",
        format_records(by_tag)
    ))
}
