use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Normalized ingredient name: trimmed, trailing period removed, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Ingredient(String);

impl Ingredient {
    /// Normalizes one raw fragment, returning `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let name = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if name.is_empty() {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ingredient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Joins ingredient names the way they are shown to users and to the model.
pub fn join_ingredients(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(Ingredient::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
