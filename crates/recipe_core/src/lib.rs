use shared::domain::Recipe;

pub mod notify;
pub mod sort;
pub mod store;
pub mod variation;

pub use notify::NotificationService;
pub use store::RecipeStore;

/// Keeps only recipes where some ingredient contains `filter` as a
/// case-insensitive substring. An empty or whitespace-only filter keeps
/// everything. Applied by the UI after sorting.
pub fn filter_by_ingredient(recipes: Vec<Recipe>, filter: &str) -> Vec<Recipe> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|recipe| {
            recipe
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Splits a comma-separated ingredients entry into individual ingredients,
/// trimming whitespace and dropping empty fragments.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
