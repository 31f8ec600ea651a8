use std::{cell::RefCell, path::PathBuf, rc::Rc};

mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use recipe_core::{NotificationService, RecipeStore};
use storage::SnapshotStorage;
use tracing::warn;
use ui::RecipeDeskApp;

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the recipe snapshot location.
    #[arg(long)]
    data_file: Option<PathBuf>,
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recipe-desk")
        .join("recipes.json")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let data_file = args.data_file.unwrap_or_else(default_data_file);
    let storage = SnapshotStorage::new(&data_file)
        .with_context(|| format!("failed to prepare data file '{}'", data_file.display()))?;

    let notifications = Rc::new(RefCell::new(Vec::new()));
    let mut store = RecipeStore::new(NotificationService::new());
    let sink = Rc::clone(&notifications);
    store.subscribe(move |message| sink.borrow_mut().push(message.to_string()));

    match storage.load() {
        Ok(Some(recipes)) => store.replace_all(recipes),
        Ok(None) => {}
        Err(err) => {
            warn!("failed to load recipe snapshot: {err:#}");
            notifications
                .borrow_mut()
                .push(format!("Failed to load saved recipes: {err:#}"));
        }
    }

    let app = RecipeDeskApp::new(store, storage, notifications);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Recipe Desk")
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native("Recipe Desk", options, Box::new(move |_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow::anyhow!("failed to run desktop ui: {err}"))?;

    Ok(())
}
