//! Tunable weights for the scoring rule table.

/// Points and caps applied by [`RuleScorer`](crate::RuleScorer).
///
/// `Default` carries the production tuning. Every bonus and penalty is
/// an integer number of points on the `0..=100` match scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    /// Baseline when the profile carries any matching signal.
    pub base_with_signal: i32,
    /// Generous baseline for an empty profile, so the UI has something
    /// to show before onboarding completes.
    pub base_empty_profile: i32,
    /// Points per overlapping skin concern.
    pub skin_concern_bonus: i32,
    /// Cap on the total skin-concern bonus.
    pub skin_concern_cap: i32,
    /// Points when the profile's hair type is suited by the product.
    pub hair_type_bonus: i32,
    /// Points per declared hair concern, for hair-category products.
    pub hair_concern_bonus: i32,
    /// Cap on the total hair-concern bonus.
    pub hair_concern_cap: i32,
    /// Points per overlapping goal.
    pub goal_bonus: i32,
    /// Cap on the total goal bonus.
    pub goal_cap: i32,
    /// Deduction when the product is contraindicated for a declared
    /// skin concern.
    pub avoidance_penalty: i32,
    /// Deduction when a sensitive-skinned user meets harsh ingredients.
    pub sensitivity_penalty: i32,
    /// Points when a natural-goal user meets a bio/organic/natural tag.
    pub natural_goal_bonus: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base_with_signal: 50,
            base_empty_profile: 70,
            skin_concern_bonus: 15,
            skin_concern_cap: 30,
            hair_type_bonus: 20,
            hair_concern_bonus: 10,
            hair_concern_cap: 20,
            goal_bonus: 10,
            goal_cap: 20,
            avoidance_penalty: 40,
            sensitivity_penalty: 30,
            natural_goal_bonus: 10,
        }
    }
}
