use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(RecipeId);

/// A named list of ingredient strings with a unique id.
///
/// Edited in place by the store: the id is stable for the store's lifetime
/// while name and ingredients may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(id: RecipeId, name: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ingredients,
        }
    }
}

/// Comparator governing display order. Default is `ByName`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKind {
    #[default]
    ByName,
    ByIngredientCount,
}

impl SortKind {
    /// Maps a sort-dropdown label to a kind. Unknown labels fall back to
    /// `ByName` rather than erroring.
    pub fn from_label(label: &str) -> Self {
        match label {
            "ingredientCount" => Self::ByIngredientCount,
            _ => Self::ByName,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ByName => "name",
            Self::ByIngredientCount => "ingredientCount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationKind {
    Spicy,
    Vegan,
}
