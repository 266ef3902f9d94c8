//! Recommendation selection for the Lumea app's three product sections.
//!
//! [`Recommender`] combines an immutable [`Catalog`] with a
//! [`ProductScorer`] and answers four read-only queries:
//!
//! - the single **top pick** for the hero card;
//! - **daily picks**, a day-of-year rotation over the remaining
//!   qualified products;
//! - **community picks**, a week-of-year rotation over the catalog with
//!   caller-supplied exclusions and placeholder popularity numbers;
//! - a **single-product lookup** decorated with score and reasons.
//!
//! Every query is a pure function of `(catalog, profile, now, exclude,
//! limit)`. The timestamp is injected so tests can pin the calendar;
//! production adapters pass the current local time.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use lumea_core::{Catalog, SkinConcern, UserProfile};
//! use lumea_picks::Recommender;
//! use lumea_scorer::RuleScorer;
//!
//! let recommender = Recommender::new(Catalog::builtin(), RuleScorer::new());
//! let profile = UserProfile::new().with_skin_concerns([SkinConcern::Dryness]);
//! let now = NaiveDate::from_ymd_opt(2024, 6, 1)
//!     .and_then(|date| date.and_hms_opt(9, 0, 0))
//!     .expect("valid date");
//!
//! let top = recommender.top_pick(&profile).expect("a qualifying product");
//! let daily = recommender.daily_picks(&profile, now);
//! assert!(daily.iter().all(|pick| pick.product.id != top.product.id));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use chrono::NaiveDateTime;
use log::debug;

use lumea_core::{Catalog, Product, ProductId, ProductScorer, RecommendedProduct, UserProfile};

mod community;
mod rotation;

pub use community::{CommunityPick, CommunityStats, DEFAULT_MEMBER_COUNT};

/// Minimum match score a product needs to be recommended at all.
pub const SCORE_THRESHOLD: u8 = 50;

/// Daily picks returned when the caller does not override the limit.
pub const DEFAULT_DAILY_LIMIT: usize = 3;

/// Community picks returned when the caller does not override the limit.
pub const DEFAULT_COMMUNITY_LIMIT: usize = 2;

/// Read-only recommendation queries over a catalog and a scorer.
///
/// Holds no mutable state; one instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Recommender<S> {
    catalog: Catalog,
    scorer: S,
    stats: CommunityStats,
}

impl<S: ProductScorer> Recommender<S> {
    /// Combine a catalog and scorer with the default community stats.
    #[must_use]
    pub fn new(catalog: Catalog, scorer: S) -> Self {
        Self {
            catalog,
            scorer,
            stats: CommunityStats::default(),
        }
    }

    /// Replace the community stats source while returning `self`.
    #[must_use]
    pub fn with_community_stats(mut self, stats: CommunityStats) -> Self {
        self.stats = stats;
        self
    }

    /// The catalog being recommended from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The single best match for the hero section.
    ///
    /// Returns `None` when the catalog is empty or nothing clears
    /// [`SCORE_THRESHOLD`]. Ties keep the earliest catalog entry.
    #[must_use]
    pub fn top_pick(&self, profile: &UserProfile) -> Option<RecommendedProduct> {
        let mut best: Option<(&Product, u8)> = None;
        for product in &self.catalog {
            let score = self.scorer.score(product, profile);
            if score < SCORE_THRESHOLD {
                continue;
            }
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((product, score));
            }
        }
        best.map(|(product, _)| self.scorer.recommend(product, profile))
    }

    /// Daily rotation with the default limit of [`DEFAULT_DAILY_LIMIT`].
    #[must_use]
    pub fn daily_picks(&self, profile: &UserProfile, now: NaiveDateTime) -> Vec<RecommendedProduct> {
        self.daily_picks_with_limit(profile, now, DEFAULT_DAILY_LIMIT)
    }

    /// Profile-based picks rotated by day of year.
    ///
    /// Products qualify with a score of at least [`SCORE_THRESHOLD`]
    /// and at least one match reason. The pool is sorted by descending
    /// score (catalog order on ties), the top entry is reserved for
    /// [`Self::top_pick`] and sliced out before rotation, and the
    /// remainder rotates left by the day-of-year key.
    #[must_use]
    pub fn daily_picks_with_limit(
        &self,
        profile: &UserProfile,
        now: NaiveDateTime,
        limit: usize,
    ) -> Vec<RecommendedProduct> {
        if limit == 0 {
            return Vec::new();
        }
        let mut pool: Vec<RecommendedProduct> = self
            .catalog
            .iter()
            .map(|product| self.scorer.recommend(product, profile))
            .filter(|pick| pick.match_score >= SCORE_THRESHOLD && !pick.match_reasons.is_empty())
            .collect();
        pool.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        if pool.is_empty() {
            return Vec::new();
        }

        let mut carousel = pool.split_off(1);
        let shift = rotation::offset(rotation::day_of_year(now), carousel.len());
        debug!(
            "daily pool holds {} candidates after the top pick, rotating by {shift}",
            carousel.len()
        );
        carousel.rotate_left(shift);
        carousel.truncate(limit);
        carousel
    }

    /// Community rotation with the default limit of
    /// [`DEFAULT_COMMUNITY_LIMIT`].
    #[must_use]
    pub fn community_picks(&self, now: NaiveDateTime, exclude: &[ProductId]) -> Vec<CommunityPick> {
        self.community_picks_with_limit(now, exclude, DEFAULT_COMMUNITY_LIMIT)
    }

    /// Community-popular picks rotated by week of year.
    ///
    /// `exclude` carries the ids already shown in the other sections so
    /// the page never repeats a product. Popularity and member counts
    /// are placeholders supplied by [`CommunityStats`].
    #[must_use]
    pub fn community_picks_with_limit(
        &self,
        now: NaiveDateTime,
        exclude: &[ProductId],
        limit: usize,
    ) -> Vec<CommunityPick> {
        if limit == 0 {
            return Vec::new();
        }
        let mut picks: Vec<CommunityPick> = self
            .catalog
            .iter()
            .filter(|product| !exclude.contains(&product.id))
            .enumerate()
            .map(|(position, product)| CommunityPick {
                product: product.clone(),
                popularity: community::popularity_for(position),
                members: self.stats.members_for(product.id),
            })
            .collect();
        let shift = rotation::offset(rotation::week_of_year(now), picks.len());
        debug!(
            "community pool holds {} candidates, rotating by {shift}",
            picks.len()
        );
        picks.rotate_left(shift);
        picks.truncate(limit);
        picks
    }

    /// Look up one product decorated with its match for `profile`.
    ///
    /// Unknown ids yield `None`, never an error.
    #[must_use]
    pub fn product_match(
        &self,
        id: ProductId,
        profile: &UserProfile,
    ) -> Option<RecommendedProduct> {
        self.catalog
            .get(id)
            .map(|product| self.scorer.recommend(product, profile))
    }
}
