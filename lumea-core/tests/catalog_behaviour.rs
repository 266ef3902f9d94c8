//! Behaviour tests for catalog lookups and the shipped product data.

#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use std::str::FromStr;

use rstest::rstest;
use lumea_core::{Catalog, HairType, MatchReason, ProductCategory, SkinConcern};

#[rstest]
fn builtin_catalog_matches_shipped_data() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 9);

    let weleda = catalog.get(1).expect("builtin product 1");
    assert_eq!(weleda.brand, "Weleda");
    assert_eq!(weleda.category, ProductCategory::Skin);
    assert!(weleda.targets_concern(SkinConcern::Dryness));
    assert!(weleda.contraindicated_for(SkinConcern::Oiliness));
    assert!(weleda.harsh_ingredients.is_empty());

    let effaclar = catalog.get(3).expect("builtin product 3");
    assert!(effaclar.targets_concern(SkinConcern::Oiliness));
    assert!(effaclar.targets_concern(SkinConcern::Acne));
    assert!(effaclar.targets_concern(SkinConcern::Pores));
    assert!(effaclar.harsh_ingredients.is_empty());
}

#[rstest]
fn hair_products_declare_suited_types() {
    let catalog = Catalog::builtin();
    let hair_products: Vec<_> = catalog
        .iter()
        .filter(|product| product.category.covers_hair())
        .collect();
    assert!(!hair_products.is_empty());
    for product in hair_products {
        assert!(
            !product.target_hair_types.is_empty(),
            "hair product {} lists no suited hair types",
            product.id
        );
    }
}

#[rstest]
#[case("curly", HairType::Curly)]
#[case("coily", HairType::Coily)]
fn hair_type_codes_round_trip(#[case] code: &str, #[case] expected: HairType) {
    assert_eq!(HairType::from_str(code), Ok(expected));
    assert_eq!(expected.as_str(), code);
}

#[rstest]
fn reason_codes_serialize_as_kebab_case() {
    let json = serde_json::to_string(&MatchReason::HydratesDrySkin).expect("serialize reason");
    assert_eq!(json, "\"hydrates-dry-skin\"");
    let parsed: MatchReason = serde_json::from_str(&json).expect("parse reason");
    assert_eq!(parsed, MatchReason::HydratesDrySkin);
}
