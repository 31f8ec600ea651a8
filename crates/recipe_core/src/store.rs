use chrono::Utc;
use tracing::{debug, info};

use shared::domain::{Recipe, RecipeId, SortKind};

use crate::{notify::NotificationService, sort};

/// Owns the authoritative recipe collection for the session.
///
/// Mutations (`add`, `delete`, `update`) each publish exactly one message
/// through the owned [`NotificationService`]. The store never persists
/// itself; callers flush the insertion-ordered collection from
/// [`RecipeStore::recipes`] after every mutating call.
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    sort: SortKind,
    notifier: NotificationService,
    last_id: i64,
}

impl RecipeStore {
    pub fn new(notifier: NotificationService) -> Self {
        Self {
            recipes: Vec::new(),
            sort: SortKind::default(),
            notifier,
            last_id: 0,
        }
    }

    /// Registers a callback for every future notification. No replay of
    /// earlier messages.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&str) + 'static) {
        self.notifier.subscribe(subscriber);
    }

    /// Appends a new recipe under a fresh unique id and announces it.
    /// Performs no validation; the caller checks presence of fields.
    pub fn add(&mut self, name: impl Into<String>, ingredients: Vec<String>) -> RecipeId {
        let id = self.next_id();
        let recipe = Recipe::new(id, name, ingredients);
        info!(id = id.0, name = %recipe.name, "recipe added");
        let message = format!("Recipe \"{}\" has been added.", recipe.name);
        self.recipes.push(recipe);
        self.notifier.notify(&message);
        id
    }

    /// Removes the recipe with the given id and announces the removal.
    /// Silently does nothing if the id is unknown.
    pub fn delete(&mut self, id: RecipeId) {
        let Some(index) = self.recipes.iter().position(|r| r.id == id) else {
            debug!(id = id.0, "delete ignored: unknown recipe id");
            return;
        };
        let removed = self.recipes.remove(index);
        info!(id = id.0, name = %removed.name, "recipe deleted");
        self.notifier
            .notify(&format!("Recipe \"{}\" has been deleted.", removed.name));
    }

    /// Rewrites the matching recipe's name and ingredients in place,
    /// keeping its id, and announces the update. Silently does nothing if
    /// the id is unknown.
    pub fn update(&mut self, id: RecipeId, name: impl Into<String>, ingredients: Vec<String>) {
        let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) else {
            debug!(id = id.0, "update ignored: unknown recipe id");
            return;
        };
        recipe.name = name.into();
        recipe.ingredients = ingredients;
        info!(id = id.0, name = %recipe.name, "recipe updated");
        let message = format!("Recipe \"{}\" has been updated.", recipe.name);
        self.notifier.notify(&message);
    }

    /// The collection ordered by the active sort kind. Operates on a copy;
    /// the canonical insertion order (and therefore the persisted order) is
    /// never altered by display.
    pub fn sorted(&self) -> Vec<Recipe> {
        sort::sorted(self.sort, &self.recipes)
    }

    pub fn set_sort(&mut self, kind: SortKind) {
        self.sort = kind;
    }

    pub fn sort(&self) -> SortKind {
        self.sort
    }

    /// Insertion-ordered view, used for persistence flushes.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Startup population from the persistence adapter. Replaces the
    /// collection without publishing notifications and seeds the id
    /// generator past the largest loaded id so future adds stay unique.
    pub fn replace_all(&mut self, recipes: Vec<Recipe>) {
        self.last_id = recipes
            .iter()
            .map(|r| r.id.0)
            .max()
            .unwrap_or(0)
            .max(self.last_id);
        debug!(count = recipes.len(), "recipe collection replaced");
        self.recipes = recipes;
    }

    // Ids stay creation-timestamp-derived but strictly increasing, so two
    // adds within the same millisecond still get distinct ids.
    fn next_id(&mut self) -> RecipeId {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        RecipeId(self.last_id)
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
