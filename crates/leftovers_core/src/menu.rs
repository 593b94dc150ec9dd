//! Meal type and cuisine selections.

use serde::{Deserialize, Serialize};

/// Meal the recipe is meant for.
///
/// Variants are listed in display order; the first is the default selection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum MealType {
    /// Evening meal
    #[default]
    Dinner,
    /// Midday meal
    Lunch,
    /// Morning meal
    Breakfast,
    /// Something small between meals
    Snack,
}

/// Cuisine the recipe should follow.
///
/// Variants are listed in display order; the first is the default selection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Cuisine {
    /// Italian cooking
    #[default]
    Italian,
    /// Mexican cooking
    Mexican,
    /// Indian cooking
    Indian,
    /// Chinese cooking
    Chinese,
    /// American cooking
    American,
}
