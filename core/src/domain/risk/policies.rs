use crate::domain::risk::entities::{ProductFacts, RiskTier};

/// Additive codes that always mark an ingredient as bad
/// (acesulfame K, aspartame, monosodium glutamate).
pub const WATCHED_ADDITIVES: [&str; 3] = ["e950", "e951", "e621"];

/// NOVA group from which a product counts as ultra-processed.
pub const ULTRA_PROCESSED_NOVA_GROUP: u8 = 4;

/// Maps a lookup result to a tier. Each check may only overwrite the verdict
/// of the previous one, so the effective precedence is
/// additives > NOVA group > nutri-score grade > default.
pub fn classify_product(product: Option<&ProductFacts>) -> RiskTier {
    let mut tier = RiskTier::Moderate;

    let Some(product) = product else {
        return tier;
    };

    if let Some(grade) = product.nutriscore_grade.as_deref() {
        match grade {
            "a" | "b" => tier = RiskTier::Good,
            "d" | "e" => tier = RiskTier::Bad,
            _ => {}
        }
    }

    if product
        .nova_group
        .is_some_and(|group| group >= ULTRA_PROCESSED_NOVA_GROUP)
    {
        tier = RiskTier::Bad;
    }

    if product
        .additives_tags
        .iter()
        .any(|tag| WATCHED_ADDITIVES.iter().any(|code| tag.contains(code)))
    {
        tier = RiskTier::Bad;
    }

    tier
}
