use std::cmp::Ordering;

use shared::domain::{Recipe, SortKind};

/// Comparator behind the sort dropdown: lexicographic case-aware name
/// comparison, or ascending ingredient count. Ties are left to the
/// stability of the underlying sort.
pub fn compare(kind: SortKind, a: &Recipe, b: &Recipe) -> Ordering {
    match kind {
        SortKind::ByName => a.name.cmp(&b.name),
        SortKind::ByIngredientCount => a.ingredients.len().cmp(&b.ingredients.len()),
    }
}

/// Returns an ordered copy. The caller's insertion order is untouched, so
/// a display-only sort never leaks into the persisted order.
pub fn sorted(kind: SortKind, recipes: &[Recipe]) -> Vec<Recipe> {
    let mut ordered = recipes.to_vec();
    ordered.sort_by(|a, b| compare(kind, a, b));
    ordered
}
