//! Weighted rule-table scoring for Lumea catalog products.
//!
//! [`RuleScorer`] implements the
//! [`ProductScorer`](lumea_core::ProductScorer) trait with the shipped
//! matching rules: a baseline that depends on whether the profile
//! carries any signal, capped bonuses for skin-concern, hair-type,
//! hair-concern, and goal matches, penalties for contraindications and
//! sensitivity risks, and a bonus for natural formulas. All arithmetic
//! is additive over integers, so evaluation order never changes the
//! result and identical inputs always produce identical scores.
//!
//! # Examples
//!
//! ```
//! use lumea_core::{Catalog, ProductScorer, SkinConcern, UserProfile};
//! use lumea_scorer::RuleScorer;
//!
//! let catalog = Catalog::builtin();
//! let profile = UserProfile::new().with_skin_concerns([SkinConcern::Dryness]);
//! let product = catalog.get(1).expect("builtin product");
//! assert_eq!(RuleScorer::default().score(product, &profile), 65);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use lumea_core::{Goal, MatchReason, Product, ProductScorer, SkinConcern, UserProfile, clamp_score};

mod reasons;
mod weights;

pub use weights::ScoreWeights;


/// The shipped scoring rule table.
///
/// Stateless apart from its weights; share one instance across request
/// handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuleScorer {
    weights: ScoreWeights,
}

impl RuleScorer {
    /// Construct a scorer with the production weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a scorer with custom weights.
    #[must_use]
    pub const fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// The weights in effect.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }
}

impl ProductScorer for RuleScorer {
    fn score(&self, product: &Product, profile: &UserProfile) -> u8 {
        let w = &self.weights;
        let mut total = if profile.has_signal() {
            w.base_with_signal
        } else {
            w.base_empty_profile
        };

        let concern_hits = product
            .target_concerns
            .iter()
            .filter(|&&concern| profile.has_skin_concern(concern))
            .count();
        total += capped_bonus(concern_hits, w.skin_concern_bonus, w.skin_concern_cap);

        if profile
            .hair_type()
            .is_some_and(|hair| product.suits_hair_type(hair))
        {
            total += w.hair_type_bonus;
        }

        if product.category.covers_hair() {
            // Raw concern count, not overlap with the product's targets.
            // Matches the shipped tuning; check with product before changing.
            total += capped_bonus(
                profile.hair_concerns().len(),
                w.hair_concern_bonus,
                w.hair_concern_cap,
            );
        }

        let goal_hits = product
            .target_goals
            .iter()
            .filter(|&&goal| profile.has_goal(goal))
            .count();
        total += capped_bonus(goal_hits, w.goal_bonus, w.goal_cap);

        if product
            .avoid_for
            .iter()
            .any(|&concern| profile.has_skin_concern(concern))
        {
            total -= w.avoidance_penalty;
        }

        if profile.has_skin_concern(SkinConcern::Sensitivity)
            && !product.harsh_ingredients.is_empty()
        {
            total -= w.sensitivity_penalty;
        }

        if profile.has_goal(Goal::Natural) && product.has_natural_tag() {
            total += w.natural_goal_bonus;
        }

        clamp_score(total)
    }

    fn reasons(&self, product: &Product, profile: &UserProfile) -> Vec<MatchReason> {
        reasons::derive(product, profile)
    }
}

/// Bonus for `hits` matches at `per_match` points each, capped at `cap`.
fn capped_bonus(hits: usize, per_match: i32, cap: i32) -> i32 {
    let count = i32::try_from(hits).unwrap_or(i32::MAX);
    per_match.saturating_mul(count).min(cap)
}
