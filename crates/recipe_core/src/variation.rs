use shared::domain::VariationKind;

/// Derives a themed variation from a base recipe's name and ingredients
/// without touching the base: the name gains a themed suffix and the
/// ingredient list gains one themed entry. The result is saved back as an
/// independent recipe with its own id, not as a linked derivative.
pub fn derive(kind: VariationKind, name: &str, ingredients: &[String]) -> (String, Vec<String>) {
    let (suffix, extra) = match kind {
        VariationKind::Spicy => (" (Spicy)", "Chili Peppers"),
        VariationKind::Vegan => (" (Vegan)", "Tofu"),
    };
    let mut derived = ingredients.to_vec();
    derived.push(extra.to_string());
    (format!("{name}{suffix}"), derived)
}
