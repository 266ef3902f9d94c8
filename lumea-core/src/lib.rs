//! Core domain types for the Lumea recommendation engine.
//!
//! The crate defines the immutable product catalog, the user profile
//! snapshot supplied by the caller, and the [`ProductScorer`] seam that
//! separates catalog selection from the scoring rule table. Everything
//! here is a plain value: the engine holds no global state, performs no
//! I/O, and never mutates its inputs, so it can be called concurrently
//! from any number of request handlers.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod catalog;
mod codes;
mod product;
mod profile;
mod reason;
mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError};
pub use codes::{Goal, HairConcern, HairType, ProductCategory, ProductTag, SkinConcern};
pub use product::{Product, ProductId};
pub use profile::UserProfile;
pub use reason::{MAX_REASONS, MatchReason};
pub use scorer::{MAX_SCORE, ProductScorer, RecommendedProduct, clamp_score};
