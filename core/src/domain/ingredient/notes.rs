//! Built-in one-line notes for common ingredients.

const NOTES: &[(&str, &str)] = &[
    (
        "sugar",
        "High sugar can worsen diabetes and increase obesity risk.",
    ),
    ("salt", "Excess salt increases blood pressure."),
    (
        "sodium nitrate",
        "Used in processed meats; linked to heart problems.",
    ),
    ("msg", "Flavor enhancer; some may get headaches."),
    (
        "aspartame",
        "Artificial sweetener; avoid in PKU and limit for diabetics.",
    ),
    (
        "trans fat",
        "Increases bad cholesterol and heart disease risk.",
    ),
    ("fiber", "Good for digestion and heart health."),
    ("vitamin", "Generally beneficial for body function."),
];

/// Text shown when no note exists for an ingredient.
pub const DEFAULT_NOTE: &str = "Ask the assistant for details";

/// Exact, case-insensitive lookup.
pub fn ingredient_note(name: &str) -> Option<&'static str> {
    let key = name.trim().to_lowercase();
    NOTES
        .iter()
        .find(|(ingredient, _)| *ingredient == key)
        .map(|(_, note)| *note)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_lookup_ignores_case() {
        assert_eq!(
            ingredient_note("MSG"),
            Some("Flavor enhancer; some may get headaches.")
        );
    }

    #[test]
    fn test_note_requires_exact_name() {
        assert_eq!(ingredient_note("cane sugar"), None);
    }
}
