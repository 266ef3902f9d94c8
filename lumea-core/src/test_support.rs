//! Test-only scorers and fixtures shared by unit and behaviour tests.

use crate::catalog::Catalog;
use crate::codes::ProductCategory;
use crate::product::{Product, ProductId};
use crate::profile::UserProfile;
use crate::reason::MatchReason;
use crate::scorer::{MAX_SCORE, ProductScorer, clamp_score};

/// Scorer returning the same score and reasons for every product.
#[derive(Debug, Clone)]
pub struct FixedScorer {
    /// Score returned for every product.
    pub score: u8,
    /// Reasons returned for every product.
    pub reasons: Vec<MatchReason>,
}

impl FixedScorer {
    /// Build a scorer that always returns `score` with one stock reason.
    #[must_use]
    pub fn with_score(score: u8) -> Self {
        Self {
            score,
            reasons: vec![MatchReason::GentleFormula],
        }
    }
}

impl ProductScorer for FixedScorer {
    fn score(&self, _product: &Product, _profile: &UserProfile) -> u8 {
        self.score.min(MAX_SCORE)
    }

    fn reasons(&self, _product: &Product, _profile: &UserProfile) -> Vec<MatchReason> {
        self.reasons.clone()
    }
}

/// Scorer deriving the score from the product id as `50 + id`.
///
/// Every product clears the selection threshold and higher ids score
/// higher, making sort order predictable in selector tests without
/// hand-tuned catalogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdScorer;

impl ProductScorer for IdScorer {
    fn score(&self, product: &Product, _profile: &UserProfile) -> u8 {
        clamp_score(50_i32.saturating_add(i32::try_from(product.id).unwrap_or(i32::MAX)))
    }

    fn reasons(&self, _product: &Product, _profile: &UserProfile) -> Vec<MatchReason> {
        vec![MatchReason::SuitsYourHairType]
    }
}

/// A minimal skincare product for selector fixtures.
#[must_use]
pub fn bare_product(id: ProductId) -> Product {
    Product::new(id, format!("Product {id}"), "Test Brand", ProductCategory::Skin)
}

/// A catalog of `count` bare products with ids `1..=count`.
#[must_use]
pub fn bare_catalog(count: u32) -> Catalog {
    Catalog::new((1..=count).map(bare_product).collect()).unwrap_or_default()
}
