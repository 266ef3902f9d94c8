//! Catalog product records.

use crate::codes::{Goal, HairType, ProductCategory, ProductTag, SkinConcern};

/// Unique catalog identifier. Always positive.
pub type ProductId = u32;

/// An immutable catalog entry.
///
/// Products are defined once at process start and never change
/// afterwards. The set-typed fields hold unique codes; an empty
/// collection means "no restriction" rather than "unknown".
///
/// # Examples
/// ```
/// use lumea_core::{Product, ProductCategory, SkinConcern};
///
/// let product = Product::new(1, "Skin Food", "Weleda", ProductCategory::Skin)
///     .with_target_concerns([SkinConcern::Dryness])
///     .with_avoid_for([SkinConcern::Oiliness]);
/// assert_eq!(product.id, 1);
/// assert!(product.targets_concern(SkinConcern::Dryness));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Brand display name.
    pub brand: String,
    /// Routine category the product belongs to.
    pub category: ProductCategory,
    /// Marketing/ethics tags.
    pub tags: Vec<ProductTag>,
    /// Skin concerns the product addresses.
    pub target_concerns: Vec<SkinConcern>,
    /// Hair types the product suits.
    pub target_hair_types: Vec<HairType>,
    /// User goals the product supports.
    pub target_goals: Vec<Goal>,
    /// Skin concerns for which the product is contraindicated.
    pub avoid_for: Vec<SkinConcern>,
    /// Ingredient codes that can irritate sensitive skin. Non-empty
    /// means the product carries a sensitivity risk.
    pub harsh_ingredients: Vec<String>,
    /// Display price; never used for scoring.
    pub price: String,
    /// Key into the localized description table.
    pub description: String,
}

impl Product {
    /// Construct a product with empty matching fields.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: ProductCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            category,
            tags: Vec::new(),
            target_concerns: Vec::new(),
            target_hair_types: Vec::new(),
            target_goals: Vec::new(),
            avoid_for: Vec::new(),
            harsh_ingredients: Vec::new(),
            price: String::new(),
            description: String::new(),
        }
    }

    /// Set the marketing tags while returning `self` for chaining.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = ProductTag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Set the targeted skin concerns.
    #[must_use]
    pub fn with_target_concerns(
        mut self,
        concerns: impl IntoIterator<Item = SkinConcern>,
    ) -> Self {
        self.target_concerns = concerns.into_iter().collect();
        self
    }

    /// Set the suited hair types.
    #[must_use]
    pub fn with_target_hair_types(
        mut self,
        hair_types: impl IntoIterator<Item = HairType>,
    ) -> Self {
        self.target_hair_types = hair_types.into_iter().collect();
        self
    }

    /// Set the supported goals.
    #[must_use]
    pub fn with_target_goals(mut self, goals: impl IntoIterator<Item = Goal>) -> Self {
        self.target_goals = goals.into_iter().collect();
        self
    }

    /// Set the contraindicated skin concerns.
    #[must_use]
    pub fn with_avoid_for(mut self, concerns: impl IntoIterator<Item = SkinConcern>) -> Self {
        self.avoid_for = concerns.into_iter().collect();
        self
    }

    /// Set the harsh ingredient codes.
    #[must_use]
    pub fn with_harsh_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.harsh_ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// Set the display price.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Set the description key.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the product addresses the given skin concern.
    #[must_use]
    pub fn targets_concern(&self, concern: SkinConcern) -> bool {
        self.target_concerns.contains(&concern)
    }

    /// Whether the product suits the given hair type.
    #[must_use]
    pub fn suits_hair_type(&self, hair_type: HairType) -> bool {
        self.target_hair_types.contains(&hair_type)
    }

    /// Whether the product supports the given goal.
    #[must_use]
    pub fn supports_goal(&self, goal: Goal) -> bool {
        self.target_goals.contains(&goal)
    }

    /// Whether the product is contraindicated for the given concern.
    #[must_use]
    pub fn contraindicated_for(&self, concern: SkinConcern) -> bool {
        self.avoid_for.contains(&concern)
    }

    /// Whether any tag counts as a natural-ingredients signal.
    #[must_use]
    pub fn has_natural_tag(&self) -> bool {
        self.tags.iter().any(|tag| tag.is_natural_signal())
    }
}
