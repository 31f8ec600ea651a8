use thiserror::Error;

/// Rejections for user-entered form input. Presence checks only; anything
/// non-empty is accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a recipe name and ingredients.")]
    MissingNameOrIngredients,
}

/// Validates the add/edit form fields: both the name and at least one
/// ingredient must be present.
pub fn validate_recipe_input(name: &str, ingredients: &[String]) -> Result<(), InputError> {
    if name.trim().is_empty() || ingredients.is_empty() {
        return Err(InputError::MissingNameOrIngredients);
    }
    Ok(())
}
