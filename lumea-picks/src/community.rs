//! Community-popular picks data.
//!
//! Popularity and member counts are deterministic placeholders: no
//! analytics feed into this crate yet. When a real popularity source
//! lands it replaces [`CommunityStats`] via injection; the rotation and
//! exclusion contract in the selector stays unchanged.

use std::collections::HashMap;

use lumea_core::{Product, ProductId};

/// Member count reported for products missing from the stats table.
pub const DEFAULT_MEMBER_COUNT: u32 = 200;

/// Synthetic popularity starts here for the first eligible product.
const POPULARITY_BASE: u8 = 85;

/// Synthetic popularity drops by this much per catalog position.
const POPULARITY_STEP: u8 = 5;

/// Placeholder popularity for a product by its position in the
/// filtered, catalog-ordered list.
pub(crate) fn popularity_for(position: usize) -> u8 {
    let drop = u8::try_from(position)
        .unwrap_or(u8::MAX)
        .saturating_mul(POPULARITY_STEP);
    POPULARITY_BASE.saturating_sub(drop)
}

/// How many community members use each product.
///
/// Values come from a fixed table; unmapped products fall back to
/// [`DEFAULT_MEMBER_COUNT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityStats {
    members: HashMap<ProductId, u32>,
    fallback: u32,
}

impl CommunityStats {
    /// Build stats from explicit member counts and a fallback.
    #[must_use]
    pub fn new(members: impl IntoIterator<Item = (ProductId, u32)>, fallback: u32) -> Self {
        Self {
            members: members.into_iter().collect(),
            fallback,
        }
    }

    /// Member count for a product, falling back for unmapped ids.
    #[must_use]
    pub fn members_for(&self, id: ProductId) -> u32 {
        self.members.get(&id).copied().unwrap_or(self.fallback)
    }
}

impl Default for CommunityStats {
    fn default() -> Self {
        Self::new(
            [
                (1, 248),
                (2, 216),
                (3, 189),
                (4, 172),
                (5, 324),
                (6, 158),
                (7, 291),
                (8, 204),
                (9, 176),
            ],
            DEFAULT_MEMBER_COUNT,
        )
    }
}

/// A product surfaced in the community-popular section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommunityPick {
    /// The underlying catalog entry.
    pub product: Product,
    /// Synthetic popularity in `0..=85`, by filtered catalog position.
    pub popularity: u8,
    /// Community members using the product.
    pub members: u32,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 85)]
    #[case(1, 80)]
    #[case(8, 45)]
    #[case(17, 0)]
    #[case(40, 0)]
    #[case(usize::MAX, 0)]
    fn popularity_steps_down_and_floors_at_zero(#[case] position: usize, #[case] expected: u8) {
        assert_eq!(popularity_for(position), expected);
    }

    #[rstest]
    fn member_counts_fall_back_for_unmapped_ids() {
        let stats = CommunityStats::default();
        assert_eq!(stats.members_for(5), 324);
        assert_eq!(stats.members_for(42), DEFAULT_MEMBER_COUNT);
    }
}
