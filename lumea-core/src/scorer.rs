//! Score catalog products against a user profile.
//!
//! The [`ProductScorer`] trait is the seam between catalog selection
//! and the scoring rule table, so selectors can be exercised with
//! deterministic stand-in scorers in tests.

use crate::product::Product;
use crate::profile::UserProfile;
use crate::reason::MatchReason;

/// Upper bound of the match score range.
pub const MAX_SCORE: u8 = 100;

/// Clamp an accumulated raw score into the `0..=100` match range.
///
/// # Examples
/// ```
/// use lumea_core::clamp_score;
///
/// assert_eq!(clamp_score(-30), 0);
/// assert_eq!(clamp_score(65), 65);
/// assert_eq!(clamp_score(140), 100);
/// ```
#[must_use]
pub fn clamp_score(raw: i32) -> u8 {
    u8::try_from(raw.clamp(0, i32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}

/// A catalog product decorated with its match against a profile.
///
/// Derived and transient: recomputed on every request, never persisted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendedProduct {
    /// The underlying catalog entry.
    pub product: Product,
    /// Match score in `0..=100`.
    pub match_score: u8,
    /// At most [`MAX_REASONS`](crate::MAX_REASONS) ordered reason codes.
    pub match_reasons: Vec<MatchReason>,
}

/// Calculate a deterministic match score for a product.
///
/// Implementations must be pure functions of `(product, profile)`:
/// identical inputs always yield identical outputs, scores stay within
/// `0..=100`, and neither argument is mutated. Implementations must be
/// `Send + Sync` so request handlers can share one scorer.
///
/// # Examples
/// ```
/// use lumea_core::{
///     MatchReason, Product, ProductCategory, ProductScorer, UserProfile,
/// };
///
/// struct UnitScorer;
///
/// impl ProductScorer for UnitScorer {
///     fn score(&self, _product: &Product, _profile: &UserProfile) -> u8 {
///         100
///     }
///
///     fn reasons(&self, _product: &Product, _profile: &UserProfile) -> Vec<MatchReason> {
///         vec![MatchReason::GentleFormula]
///     }
/// }
///
/// let product = Product::new(1, "Skin Food", "Weleda", ProductCategory::Skin);
/// let recommended = UnitScorer.recommend(&product, &UserProfile::new());
/// assert_eq!(recommended.match_score, 100);
/// ```
pub trait ProductScorer: Send + Sync {
    /// Return a match score in `0..=100` for `product` under `profile`.
    fn score(&self, product: &Product, profile: &UserProfile) -> u8;

    /// Return the ordered reason codes explaining the match.
    fn reasons(&self, product: &Product, profile: &UserProfile) -> Vec<MatchReason>;

    /// Decorate a product with its score and reasons.
    fn recommend(&self, product: &Product, profile: &UserProfile) -> RecommendedProduct {
        RecommendedProduct {
            product: product.clone(),
            match_score: self.score(product, profile),
            match_reasons: self.reasons(product, profile),
        }
    }
}
