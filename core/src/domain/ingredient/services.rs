use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ingredient::entities::{Ingredient, join_ingredients};

/// Number of ingredients kept in a history summary.
pub const SUMMARY_INGREDIENTS: usize = 5;

static LABEL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ingredients?:").expect("label pattern is valid"));

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|\n").expect("separator pattern is valid"));

/// Removes the first `ingredient(s):` label from OCR text.
pub fn strip_label(raw: &str) -> String {
    LABEL_PREFIX.replace(raw, "").into_owned()
}

/// Splits OCR text into the ordered list of ingredient names.
pub fn extract_ingredients(raw: &str) -> Vec<Ingredient> {
    let cleaned = strip_label(raw);
    SEPARATORS
        .split(&cleaned)
        .filter_map(Ingredient::parse)
        .collect()
}

/// Short summary stored with each history entry.
pub fn summarize(ingredients: &[Ingredient]) -> String {
    let take = ingredients.len().min(SUMMARY_INGREDIENTS);
    join_ingredients(&ingredients[..take])
}
