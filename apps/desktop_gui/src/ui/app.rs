use std::{cell::RefCell, rc::Rc};

use eframe::egui;
use recipe_core::{filter_by_ingredient, parse_ingredients, variation, RecipeStore};
use shared::{
    domain::{Recipe, RecipeId, SortKind, VariationKind},
    error::validate_recipe_input,
};
use storage::SnapshotStorage;
use tracing::warn;

/// The UI binding layer: renders the store's sorted, filtered view, routes
/// button clicks into store calls, and flushes the snapshot after every
/// mutation. Holds only transient state (form text, filter text, the
/// edit-in-progress target); the store owns the collection.
pub struct RecipeDeskApp {
    store: RecipeStore,
    storage: SnapshotStorage,
    notifications: Rc<RefCell<Vec<String>>>,

    name_input: String,
    ingredients_input: String,
    filter_input: String,
    editing: Option<RecipeId>,
}

impl RecipeDeskApp {
    pub fn new(
        store: RecipeStore,
        storage: SnapshotStorage,
        notifications: Rc<RefCell<Vec<String>>>,
    ) -> Self {
        Self {
            store,
            storage,
            notifications,
            name_input: String::new(),
            ingredients_input: String::new(),
            filter_input: String::new(),
            editing: None,
        }
    }

    fn push_log(&self, message: impl Into<String>) {
        self.notifications.borrow_mut().push(message.into());
    }

    /// Writes the full collection back to the snapshot. Failures become a
    /// notification instead of tearing the app down.
    fn flush(&mut self) {
        if let Err(err) = self.storage.save(self.store.recipes()) {
            warn!("failed to persist recipes: {err:#}");
            self.push_log(format!("Failed to save recipes: {err:#}"));
        }
    }

    /// Add-or-update entry point for the form. Empty name or ingredients
    /// means no mutation and a single log entry. Edits go through the
    /// store's `update` so they notify like every other mutation.
    fn submit(&mut self) {
        let ingredients = parse_ingredients(&self.ingredients_input);
        if let Err(err) = validate_recipe_input(&self.name_input, &ingredients) {
            self.push_log(err.to_string());
            return;
        }

        let name = self.name_input.trim().to_string();
        match self.editing.take() {
            Some(id) => self.store.update(id, name, ingredients),
            None => {
                let _ = self.store.add(name, ingredients);
            }
        }
        self.flush();
        self.name_input.clear();
        self.ingredients_input.clear();
    }

    fn begin_edit(&mut self, recipe: &Recipe) {
        self.name_input = recipe.name.clone();
        self.ingredients_input = recipe.ingredients.join(", ");
        self.editing = Some(recipe.id);
    }

    fn cancel_edit(&mut self) {
        self.editing = None;
        self.name_input.clear();
        self.ingredients_input.clear();
    }

    fn delete_recipe(&mut self, id: RecipeId) {
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        self.store.delete(id);
        self.flush();
    }

    /// Saves a derived variation as a brand-new recipe with its own id.
    fn add_variation(&mut self, id: RecipeId, kind: VariationKind) {
        let Some(base) = self.store.get(id).cloned() else {
            return;
        };
        let (name, ingredients) = variation::derive(kind, &base.name, &base.ingredients);
        let _ = self.store.add(name, ingredients);
        self.flush();
    }

    fn show_form_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("recipe_form").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(if self.editing.is_some() {
                "Edit Recipe"
            } else {
                "Add a New Recipe"
            });
            ui.add(
                egui::TextEdit::singleline(&mut self.name_input)
                    .hint_text("Recipe Name")
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.ingredients_input)
                    .hint_text("Ingredients (comma-separated)")
                    .desired_width(f32::INFINITY),
            );
            ui.horizontal(|ui| {
                let submit_label = if self.editing.is_some() {
                    "Update Recipe"
                } else {
                    "Add Recipe"
                };
                if ui.button(submit_label).clicked() {
                    self.submit();
                }
                if self.editing.is_some() && ui.button("Cancel").clicked() {
                    self.cancel_edit();
                }
            });
            ui.add_space(6.0);
        });
    }

    fn show_filter_sort_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("filter_sort")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.heading("Filter Recipes");
                ui.add(
                    egui::TextEdit::singleline(&mut self.filter_input)
                        .hint_text("Enter ingredient")
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(12.0);
                ui.heading("Sort Recipes");
                let mut kind = self.store.sort();
                egui::ComboBox::from_id_source("sort_kind")
                    .selected_text(sort_display(kind))
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut kind,
                            SortKind::ByName,
                            sort_display(SortKind::ByName),
                        );
                        ui.selectable_value(
                            &mut kind,
                            SortKind::ByIngredientCount,
                            sort_display(SortKind::ByIngredientCount),
                        );
                    });
                if kind != self.store.sort() {
                    self.store.set_sort(kind);
                }
            });
    }

    fn show_notifications_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("notification_log")
            .resizable(true)
            .default_height(140.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Notifications");
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for message in self.notifications.borrow().iter() {
                            ui.label(message);
                        }
                    });
            });
    }

    fn show_recipes_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Recipes");
            // Filter applies to the sorted view; both work on copies, so
            // the store's insertion order stays intact for persistence.
            let display = filter_by_ingredient(self.store.sorted(), &self.filter_input);
            if display.is_empty() {
                ui.weak(if self.store.is_empty() {
                    "No recipes yet. Add one above."
                } else {
                    "No recipes match the current filter."
                });
                return;
            }
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for recipe in &display {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.strong(&recipe.name);
                            ui.label(format!("Ingredients: {}", recipe.ingredients.join(", ")));
                            ui.horizontal_wrapped(|ui| {
                                if ui.button("Edit").clicked() {
                                    self.begin_edit(recipe);
                                }
                                if ui.button("Delete").clicked() {
                                    self.delete_recipe(recipe.id);
                                }
                                if ui.button("Add Spicy Variation").clicked() {
                                    self.add_variation(recipe.id, VariationKind::Spicy);
                                }
                                if ui.button("Add Vegan Variation").clicked() {
                                    self.add_variation(recipe.id, VariationKind::Vegan);
                                }
                            });
                        });
                        ui.add_space(6.0);
                    }
                });
        });
    }
}

fn sort_display(kind: SortKind) -> &'static str {
    match kind {
        SortKind::ByName => "By Name",
        SortKind::ByIngredientCount => "By Ingredient Count",
    }
}

impl eframe::App for RecipeDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_form_panel(ctx);
        self.show_notifications_panel(ctx);
        self.show_filter_sort_panel(ctx);
        self.show_recipes_panel(ctx);
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
