//! Facade crate for the Lumea recommendation engine.
//!
//! Re-exports the core domain types, the shipped scoring rule table,
//! and the pick selector so applications depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use lumea_engine::{Catalog, Recommender, RuleScorer, SkinConcern, UserProfile};
//!
//! let recommender = Recommender::new(Catalog::builtin(), RuleScorer::new());
//! let profile = UserProfile::new().with_skin_concerns([SkinConcern::Dryness]);
//! let top = recommender.top_pick(&profile).expect("a qualifying product");
//! assert_eq!(top.product.brand, "Weleda");
//! ```

#![forbid(unsafe_code)]

pub use lumea_core::{
    Catalog, CatalogError, Goal, HairConcern, HairType, MAX_REASONS, MAX_SCORE, MatchReason,
    Product, ProductCategory, ProductId, ProductScorer, ProductTag, RecommendedProduct,
    SkinConcern, UserProfile, clamp_score,
};

#[cfg(feature = "test-support")]
pub use lumea_core::test_support;

pub use lumea_picks::{
    CommunityPick, CommunityStats, DEFAULT_COMMUNITY_LIMIT, DEFAULT_DAILY_LIMIT,
    DEFAULT_MEMBER_COUNT, Recommender, SCORE_THRESHOLD,
};

pub use lumea_scorer::{RuleScorer, ScoreWeights};
