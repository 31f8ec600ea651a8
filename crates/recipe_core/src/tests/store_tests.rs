use super::*;
use crate::variation;
use shared::domain::VariationKind;
use std::{cell::RefCell, rc::Rc};

fn ingredients(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn store_with_log() -> (RecipeStore, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut store = RecipeStore::new(NotificationService::new());
    let sink = Rc::clone(&log);
    store.subscribe(move |message| sink.borrow_mut().push(message.to_string()));
    (store, log)
}

#[test]
fn add_appends_and_notifies_once_with_template() {
    let (mut store, log) = store_with_log();
    store.add("Soup", ingredients(&["Water", "Salt"]));

    assert_eq!(store.len(), 1);
    assert_eq!(
        log.borrow().as_slice(),
        ["Recipe \"Soup\" has been added."]
    );
}

#[test]
fn ids_are_unique_and_increasing_across_rapid_adds() {
    let (mut store, _log) = store_with_log();
    let a = store.add("A", ingredients(&["x"]));
    let b = store.add("B", ingredients(&["x"]));
    let c = store.add("C", ingredients(&["x"]));

    assert!(a < b && b < c, "ids must be strictly increasing: {a:?} {b:?} {c:?}");
}

#[test]
fn delete_removes_matching_entry_and_notifies() {
    let (mut store, log) = store_with_log();
    let soup = store.add("Soup", ingredients(&["Water"]));
    let salad = store.add("Salad", ingredients(&["Lettuce"]));

    store.delete(soup);

    assert_eq!(store.len(), 1);
    assert!(store.get(salad).is_some());
    assert_eq!(
        log.borrow().last().map(String::as_str),
        Some("Recipe \"Soup\" has been deleted.")
    );
}

#[test]
fn delete_of_unknown_id_is_a_silent_no_op() {
    let (mut store, log) = store_with_log();
    store.add("Soup", ingredients(&["Water"]));
    let before = log.borrow().len();

    store.delete(shared::domain::RecipeId(987_654));

    assert_eq!(store.len(), 1);
    assert_eq!(log.borrow().len(), before);
}

#[test]
fn update_rewrites_fields_in_place_and_keeps_the_id() {
    let (mut store, log) = store_with_log();
    let id = store.add("Soup", ingredients(&["Water"]));

    store.update(id, "Broth", ingredients(&["Water", "Bones"]));

    let recipe = store.get(id).expect("recipe survives update");
    assert_eq!(recipe.name, "Broth");
    assert_eq!(recipe.ingredients, ingredients(&["Water", "Bones"]));
    assert_eq!(
        log.borrow().last().map(String::as_str),
        Some("Recipe \"Broth\" has been updated.")
    );
}

#[test]
fn update_of_unknown_id_is_a_silent_no_op() {
    let (mut store, log) = store_with_log();
    store.add("Soup", ingredients(&["Water"]));
    let before = log.borrow().len();

    store.update(shared::domain::RecipeId(42), "Ghost", ingredients(&["Air"]));

    assert_eq!(store.recipes()[0].name, "Soup");
    assert_eq!(log.borrow().len(), before);
}

#[test]
fn collection_size_tracks_net_additions_minus_deletions() {
    let (mut store, _log) = store_with_log();
    let a = store.add("A", ingredients(&["x"]));
    let _b = store.add("B", ingredients(&["x"]));
    let c = store.add("C", ingredients(&["x"]));
    store.delete(a);
    store.delete(c);
    store.add("D", ingredients(&["x"]));

    assert_eq!(store.len(), 2);
}

#[test]
fn every_mutation_emits_exactly_one_notification() {
    let (mut store, log) = store_with_log();
    let id = store.add("Soup", ingredients(&["Water"]));
    store.update(id, "Soup", ingredients(&["Water", "Salt"]));
    store.delete(id);

    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn sorted_by_name_is_non_decreasing_lexicographically() {
    let (mut store, _log) = store_with_log();
    store.add("Pasta", ingredients(&["Flour"]));
    store.add("Apple Pie", ingredients(&["Apples", "Flour", "Butter"]));
    store.add("Miso Soup", ingredients(&["Miso", "Water"]));

    let names: Vec<_> = store.sorted().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["Apple Pie", "Miso Soup", "Pasta"]);
}

#[test]
fn sorted_by_ingredient_count_is_non_decreasing() {
    let (mut store, _log) = store_with_log();
    store.set_sort(shared::domain::SortKind::ByIngredientCount);
    store.add("Pie", ingredients(&["Apples", "Flour", "Butter"]));
    store.add("Toast", ingredients(&["Bread"]));
    store.add("Soup", ingredients(&["Water", "Salt"]));

    let counts: Vec<_> = store
        .sorted()
        .into_iter()
        .map(|r| r.ingredients.len())
        .collect();
    assert_eq!(counts, [1, 2, 3]);
}

#[test]
fn sorting_never_reorders_the_canonical_collection() {
    let (mut store, _log) = store_with_log();
    store.add("Zucchini Bake", ingredients(&["Zucchini"]));
    store.add("Apple Pie", ingredients(&["Apples"]));

    let _ = store.sorted();

    let names: Vec<_> = store.recipes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Zucchini Bake", "Apple Pie"]);
}

#[test]
fn default_sort_is_by_name() {
    let store = RecipeStore::new(NotificationService::new());
    assert_eq!(store.sort(), shared::domain::SortKind::ByName);
}

#[test]
fn subscribers_receive_messages_in_subscription_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut store = RecipeStore::new(NotificationService::new());
    let first = Rc::clone(&log);
    store.subscribe(move |message| first.borrow_mut().push(format!("first: {message}")));
    let second = Rc::clone(&log);
    store.subscribe(move |message| second.borrow_mut().push(format!("second: {message}")));

    store.add("Soup", ingredients(&["Water"]));

    assert_eq!(
        log.borrow().as_slice(),
        [
            "first: Recipe \"Soup\" has been added.",
            "second: Recipe \"Soup\" has been added.",
        ]
    );
}

#[test]
fn replace_all_is_silent_and_seeds_the_id_generator() {
    let (mut store, log) = store_with_log();
    store.replace_all(vec![
        Recipe::new(RecipeId(500), "Soup", ingredients(&["Water"])),
        Recipe::new(RecipeId(900), "Salad", ingredients(&["Lettuce"])),
    ]);

    assert_eq!(store.len(), 2);
    assert!(log.borrow().is_empty(), "startup load must not notify");

    let fresh = store.add("Pie", ingredients(&["Apples"]));
    assert!(fresh.0 > 900, "fresh id must exceed every loaded id");
}

#[test]
fn spicy_variation_scenario_from_base_recipe() {
    let (mut store, _log) = store_with_log();
    let soup = store.add("Soup", ingredients(&["Water", "Salt"]));
    assert_eq!(store.len(), 1);

    let base = store.get(soup).expect("base recipe").clone();
    let (name, derived) = variation::derive(VariationKind::Spicy, &base.name, &base.ingredients);
    let spicy = store.add(name, derived);

    let added = store.get(spicy).expect("variation saved");
    assert_eq!(added.name, "Soup (Spicy)");
    assert_eq!(
        added.ingredients,
        ingredients(&["Water", "Salt", "Chili Peppers"])
    );

    // The base is untouched and independently deletable.
    assert_eq!(store.get(soup).expect("base").ingredients.len(), 2);
    store.delete(soup);
    assert_eq!(store.len(), 1);
    assert_eq!(store.recipes()[0].name, "Soup (Spicy)");
}
