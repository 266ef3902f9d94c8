//! The immutable product catalog.
//!
//! The catalog is loaded once at process start and is read-only for the
//! process lifetime. The shipped nine-product catalog is compiled in;
//! deployments with a remote catalog build a [`Catalog`] from whatever
//! their loader fetched at startup.

use std::collections::HashMap;

use thiserror::Error;

use crate::codes::{Goal, HairType, ProductCategory, ProductTag, SkinConcern};
use crate::product::{Product, ProductId};

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share the same identifier.
    #[error("duplicate product id {id} in catalog")]
    DuplicateId {
        /// The identifier that appeared more than once.
        id: ProductId,
    },
}

/// An id-indexed, immutable collection of products.
///
/// # Examples
/// ```
/// use lumea_core::Catalog;
///
/// let catalog = Catalog::builtin();
/// assert_eq!(catalog.len(), 9);
/// assert!(catalog.get(1).is_some());
/// assert!(catalog.get(999).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Validate id uniqueness and build the lookup index.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] when two products share an
    /// identifier.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId { id: product.id });
            }
        }
        Ok(Self { products, index })
    }

    /// The catalog shipped with the build.
    #[must_use]
    pub fn builtin() -> Self {
        match Self::new(builtin_products()) {
            Ok(catalog) => catalog,
            // The builtin data carries unique ids; a unit test guards this.
            Err(_) => Self::default(),
        }
    }

    /// Look up a product by id. Unknown ids yield `None`, never an error.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// The nine products shipped with the build.
fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(1, "Skin Food", "Weleda", ProductCategory::Skin)
            .with_tags([ProductTag::Natural, ProductTag::Organic])
            .with_target_concerns([SkinConcern::Dryness, SkinConcern::Sensitivity])
            .with_target_goals([Goal::Hydration, Goal::Natural])
            .with_avoid_for([SkinConcern::Oiliness])
            .with_price("12,95 €")
            .with_description("products.weleda-skin-food"),
        Product::new(2, "Niacinamide 10% + Zinc 1%", "The Ordinary", ProductCategory::Skin)
            .with_tags([ProductTag::Vegan, ProductTag::CrueltyFree])
            .with_target_concerns([SkinConcern::Oiliness, SkinConcern::Pores])
            .with_target_goals([Goal::Glow])
            .with_harsh_ingredients(["high-strength-niacinamide"])
            .with_price("6,50 €")
            .with_description("products.ordinary-niacinamide"),
        Product::new(3, "Effaclar Duo+", "La Roche-Posay", ProductCategory::Skin)
            .with_target_concerns([
                SkinConcern::Oiliness,
                SkinConcern::Acne,
                SkinConcern::Pores,
            ])
            .with_target_goals([Goal::Repair])
            .with_avoid_for([SkinConcern::Dryness])
            .with_price("16,90 €")
            .with_description("products.lrp-effaclar-duo"),
        Product::new(4, "Tolérance Extrême", "Avène", ProductCategory::Skin)
            .with_target_concerns([SkinConcern::Sensitivity, SkinConcern::Redness])
            .with_target_goals([Goal::Soothing])
            .with_price("18,40 €")
            .with_description("products.avene-tolerance"),
        Product::new(5, "No.3 Hair Perfector", "Olaplex", ProductCategory::Hair)
            .with_tags([ProductTag::Vegan, ProductTag::CrueltyFree])
            .with_target_hair_types([HairType::Curly, HairType::Coily])
            .with_target_goals([Goal::Repair])
            .with_price("29,99 €")
            .with_description("products.olaplex-no3"),
        Product::new(6, "Moroccanoil Treatment", "Moroccanoil", ProductCategory::Hair)
            .with_target_hair_types([HairType::Curly, HairType::Wavy])
            .with_target_goals([Goal::Glow])
            .with_harsh_ingredients(["silicones"])
            .with_price("36,00 €")
            .with_description("products.moroccanoil-treatment"),
        Product::new(7, "Ultimate Blends Hair Food", "Garnier", ProductCategory::Hair)
            .with_tags([ProductTag::Vegan, ProductTag::Natural])
            .with_target_hair_types([HairType::Curly, HairType::Coily])
            .with_target_goals([Goal::Hydration, Goal::Natural])
            .with_price("6,99 €")
            .with_description("products.garnier-hair-food"),
        Product::new(8, "Huile Prodigieuse", "Nuxe", ProductCategory::Both)
            .with_tags([ProductTag::Natural, ProductTag::Bio])
            .with_target_concerns([SkinConcern::Dryness, SkinConcern::Aging])
            .with_target_hair_types([HairType::Straight, HairType::Wavy])
            .with_target_goals([Goal::Glow, Goal::Natural])
            .with_avoid_for([SkinConcern::Oiliness])
            .with_harsh_ingredients(["fragrance"])
            .with_price("31,50 €")
            .with_description("products.nuxe-huile"),
        Product::new(9, "The Ritual of Namasté Cream", "Rituals", ProductCategory::Skin)
            .with_tags([ProductTag::Vegan])
            .with_target_concerns([SkinConcern::Aging, SkinConcern::Dryness])
            .with_target_goals([Goal::AntiAging])
            .with_harsh_ingredients(["retinol"])
            .with_price("24,90 €")
            .with_description("products.rituals-namaste"),
    ]
}
