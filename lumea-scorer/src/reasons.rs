//! Derive ordered reason codes for a product/profile match.
//!
//! Reasons evaluate in a fixed priority order and truncate to
//! [`MAX_REASONS`]. The order is part of the product contract: the UI
//! shows the first reason most prominently.

use lumea_core::{Goal, HairType, MAX_REASONS, MatchReason, Product, SkinConcern, UserProfile};

/// Skin concerns in presentation priority order, with the reason each
/// one yields when the product targets it.
const SKIN_PRIORITY: [(SkinConcern, MatchReason); 5] = [
    (SkinConcern::Sensitivity, MatchReason::SoothesSensitiveSkin),
    (SkinConcern::Dryness, MatchReason::HydratesDrySkin),
    (SkinConcern::Oiliness, MatchReason::BalancesOilySkin),
    (SkinConcern::Acne, MatchReason::FightsAcne),
    (SkinConcern::Aging, MatchReason::TargetsAging),
];

pub(crate) fn derive(product: &Product, profile: &UserProfile) -> Vec<MatchReason> {
    let mut reasons = Vec::with_capacity(MAX_REASONS);

    let sensitivity_covered = push_skin_reason(&mut reasons, product, profile);

    if let Some(reason) = hair_type_reason(product, profile) {
        reasons.push(reason);
    }

    if product.category.covers_hair() && profile.has_nourishable_hair_concern() {
        reasons.push(MatchReason::NourishesHair);
    }

    if profile.has_goal(Goal::Natural) && product.supports_goal(Goal::Natural) {
        reasons.push(MatchReason::NaturalIngredients);
    }

    // Fallback for sensitive users when no sensitivity match fired: a
    // formula with zero harsh ingredients is itself worth surfacing.
    if profile.has_skin_concern(SkinConcern::Sensitivity)
        && product.harsh_ingredients.is_empty()
        && !sensitivity_covered
    {
        reasons.push(MatchReason::GentleFormula);
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Push the highest-priority skin-concern reason, if any.
///
/// Returns whether the pushed reason was the sensitivity one, which
/// suppresses the gentle-formula fallback.
fn push_skin_reason(
    reasons: &mut Vec<MatchReason>,
    product: &Product,
    profile: &UserProfile,
) -> bool {
    for (concern, reason) in SKIN_PRIORITY {
        if profile.has_skin_concern(concern) && product.targets_concern(concern) {
            reasons.push(reason);
            return concern == SkinConcern::Sensitivity;
        }
    }
    false
}

fn hair_type_reason(product: &Product, profile: &UserProfile) -> Option<MatchReason> {
    let hair = profile.hair_type().filter(|&h| product.suits_hair_type(h))?;
    let reason = match hair {
        HairType::Curly | HairType::Coily => MatchReason::DefinesCurls,
        HairType::Wavy => MatchReason::EnhancesWaves,
        HairType::Straight => MatchReason::SuitsYourHairType,
    };
    Some(reason)
}
