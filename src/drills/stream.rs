//! Collection drills over a [`Menu`] and plain number lists.

use std::collections::HashSet;

use crate::fixtures::Menu;
use crate::optional::Optional;
use crate::records::Dish;
use crate::types::Sequence;

/// Every vegetarian dish, in menu order.
pub fn vegetarian_dishes(menu: &Menu) -> Sequence<Dish> {
    menu.dishes.filter(Dish::is_vegetarian)
}

/// The even numbers of `numbers`, each once, in first-seen order.
pub fn unique_even_numbers(numbers: &Sequence<i64>) -> Sequence<i64> {
    numbers.filter(|n| n % 2 == 0).distinct()
}

/// Length (in characters) of each dish name.
pub fn length_of_dish_names(menu: &Menu) -> Sequence<usize> {
    menu.dishes.map(|d| d.name.chars().count())
}

pub fn is_menu_vegetarian_friendly(menu: &Menu) -> bool {
    menu.dishes.any_match(Dish::is_vegetarian)
}

/// A vegetarian dish, if the menu has one.
pub fn vegetarian_dish(menu: &Menu) -> Optional<Dish> {
    vegetarian_dishes(menu).find_first()
}

pub fn is_everything_under_1000_calories(menu: &Menu) -> bool {
    menu.dishes.all_match(|d| d.calories < 1000)
}

pub fn is_nothing_over_1000_calories(menu: &Menu) -> bool {
    menu.dishes.none_match(|d| d.calories > 1000)
}

/// Names of the first three dishes above 300 calories.
pub fn three_high_caloric_dish_names(menu: &Menu) -> Sequence<String> {
    menu.dishes
        .filter(|d| d.calories > 300)
        .limit(3)
        .map(|d| d.name.clone())
}

pub fn how_many_dishes(menu: &Menu) -> usize {
    menu.dishes.count()
}

/// Every known country of origin. Dishes without one are skipped.
pub fn list_countries_of_origin(menu: &Menu) -> HashSet<String> {
    menu.dishes
        .map_and_filter_absent(|d| d.country_of_origin().map(str::to_string))
        .to_set()
}
