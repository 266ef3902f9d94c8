//! Behavioural coverage for the shipped scoring rules against the
//! builtin catalog.

#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

use rstest::rstest;

use lumea_core::{
    Catalog, Goal, HairConcern, HairType, MatchReason, Product, ProductCategory, ProductId,
    ProductScorer, SkinConcern, UserProfile,
};
use lumea_scorer::RuleScorer;

fn builtin(id: ProductId) -> Product {
    Catalog::builtin()
        .get(id)
        .cloned()
        .expect("builtin product")
}

#[rstest]
fn dryness_profile_matches_weleda() {
    // base 50 + one overlapping concern (+15), no penalties.
    let profile = UserProfile::new().with_skin_concerns([SkinConcern::Dryness]);
    let scorer = RuleScorer::new();
    let product = builtin(1);

    assert_eq!(scorer.score(&product, &profile), 65);
    assert!(
        scorer
            .reasons(&product, &profile)
            .contains(&MatchReason::HydratesDrySkin)
    );
}

#[rstest]
fn sensitive_profile_gets_gentle_formula_fallback() {
    // Effaclar targets oiliness/acne/pores, so there is no concern
    // overlap, and its empty harsh-ingredient list avoids the
    // sensitivity penalty while earning the gentle-formula reason.
    let profile = UserProfile::new().with_skin_concerns([SkinConcern::Sensitivity]);
    let scorer = RuleScorer::new();
    let product = builtin(3);

    assert_eq!(scorer.score(&product, &profile), 50);
    assert_eq!(
        scorer.reasons(&product, &profile),
        vec![MatchReason::GentleFormula]
    );
}

#[rstest]
fn contraindicated_product_scores_low() {
    // base 50, no overlap, avoidance penalty -40.
    let profile = UserProfile::new().with_skin_concerns([SkinConcern::Oiliness]);
    let scorer = RuleScorer::new();

    assert_eq!(scorer.score(&builtin(1), &profile), 10);
}

#[rstest]
fn empty_profile_gets_the_generous_baseline() {
    let profile = UserProfile::new();
    let scorer = RuleScorer::new();
    for product in Catalog::builtin().iter() {
        assert_eq!(
            scorer.score(product, &profile),
            70,
            "product {} should sit on the empty-profile baseline",
            product.id
        );
        assert!(scorer.score(product, &profile) <= 100);
    }
}

#[rstest]
fn third_overlapping_concern_adds_nothing() {
    let scorer = RuleScorer::new();
    let product = builtin(3);
    let two_concerns =
        UserProfile::new().with_skin_concerns([SkinConcern::Oiliness, SkinConcern::Acne]);
    let three_concerns = UserProfile::new().with_skin_concerns([
        SkinConcern::Oiliness,
        SkinConcern::Acne,
        SkinConcern::Pores,
    ]);

    assert_eq!(scorer.score(&product, &two_concerns), 80);
    assert_eq!(
        scorer.score(&product, &two_concerns),
        scorer.score(&product, &three_concerns)
    );
}

#[rstest]
fn avoidance_costs_exactly_forty_points() {
    let scorer = RuleScorer::new();
    let profile = UserProfile::new().with_skin_concerns([SkinConcern::Oiliness]);
    let contraindicated = builtin(1);
    let mut tolerated = contraindicated.clone();
    tolerated.avoid_for.clear();

    let with_penalty = scorer.score(&contraindicated, &profile);
    let without_penalty = scorer.score(&tolerated, &profile);
    assert_eq!(i32::from(without_penalty) - i32::from(with_penalty), 40);
}

#[rstest]
fn harsh_ingredients_penalise_sensitive_skin() {
    // Niacinamide 10%: no concern overlap for sensitivity, harsh
    // ingredients trigger the -30 penalty, and no reason survives.
    let profile = UserProfile::new().with_skin_concerns([SkinConcern::Sensitivity]);
    let scorer = RuleScorer::new();
    let product = builtin(2);

    assert_eq!(scorer.score(&product, &profile), 20);
    assert!(scorer.reasons(&product, &profile).is_empty());
}

#[rstest]
fn curly_hair_profile_matches_olaplex() {
    // base 50 + hair type 20 + three nourishable concerns capped at 20.
    let profile = UserProfile::new()
        .with_hair_type(HairType::Curly)
        .with_hair_concerns([
            HairConcern::Dryness,
            HairConcern::Frizz,
            HairConcern::Hairfall,
        ]);
    let scorer = RuleScorer::new();
    let product = builtin(5);

    assert_eq!(scorer.score(&product, &profile), 90);
    assert_eq!(
        scorer.reasons(&product, &profile),
        vec![MatchReason::DefinesCurls, MatchReason::NourishesHair]
    );
}

#[rstest]
fn natural_goal_rewards_natural_formulas() {
    // base 50 + natural goal overlap (+10) + natural tag bonus (+10).
    let profile = UserProfile::new().with_goals([Goal::Natural]);
    let scorer = RuleScorer::new();
    let product = builtin(1);

    assert_eq!(scorer.score(&product, &profile), 70);
    assert_eq!(
        scorer.reasons(&product, &profile),
        vec![MatchReason::NaturalIngredients]
    );
}

#[rstest]
fn goal_bonus_caps_at_two_matches() {
    let scorer = RuleScorer::new();
    let product = Product::new(20, "Goal Heavy", "Brand", ProductCategory::Skin)
        .with_target_goals([Goal::Hydration, Goal::Glow, Goal::Repair]);
    let profile = UserProfile::new().with_goals([Goal::Hydration, Goal::Glow, Goal::Repair]);

    // base 50 + goal bonus capped at 20; no natural tag in play.
    assert_eq!(scorer.score(&product, &profile), 70);
}

#[rstest]
fn scoring_is_deterministic() {
    let profile = UserProfile::new()
        .with_skin_concerns([SkinConcern::Dryness, SkinConcern::Sensitivity])
        .with_hair_type(HairType::Wavy)
        .with_goals([Goal::Natural, Goal::Hydration]);
    let scorer = RuleScorer::new();
    for product in Catalog::builtin().iter() {
        assert_eq!(
            scorer.score(product, &profile),
            scorer.score(product, &profile)
        );
        assert_eq!(
            scorer.reasons(product, &profile),
            scorer.reasons(product, &profile)
        );
    }
}

#[rstest]
#[case(HairType::Wavy, vec![MatchReason::EnhancesWaves])]
#[case(HairType::Straight, vec![MatchReason::SuitsYourHairType])]
fn nuxe_oil_suits_straight_and_wavy_hair(
    #[case] hair: HairType,
    #[case] expected: Vec<MatchReason>,
) {
    let profile = UserProfile::new().with_hair_type(hair);
    let scorer = RuleScorer::new();
    assert_eq!(scorer.reasons(&builtin(8), &profile), expected);
}
