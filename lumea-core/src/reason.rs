//! Coded explanations for why a product matched a profile.

/// Maximum number of reasons attached to a recommendation.
pub const MAX_REASONS: usize = 3;

/// Why a product scored well for a profile.
///
/// Reasons stay as codes inside the engine; the presentation layer owns
/// the code-to-label table and localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MatchReason {
    /// The product targets the user's sensitive skin.
    SoothesSensitiveSkin,
    /// The product targets the user's dry skin.
    HydratesDrySkin,
    /// The product targets the user's oily skin.
    BalancesOilySkin,
    /// The product targets the user's acne.
    FightsAcne,
    /// The product targets visible aging.
    TargetsAging,
    /// The product suits curly or coily hair.
    DefinesCurls,
    /// The product suits wavy hair.
    EnhancesWaves,
    /// The product suits the user's hair type.
    SuitsYourHairType,
    /// The product nourishes the user's hair concerns.
    NourishesHair,
    /// The formula matches the user's natural-ingredients goal.
    NaturalIngredients,
    /// A gentle formula for sensitive skin with no harsh ingredients.
    GentleFormula,
}

impl MatchReason {
    /// Return the reason as its kebab-case code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SoothesSensitiveSkin => "soothes-sensitive-skin",
            Self::HydratesDrySkin => "hydrates-dry-skin",
            Self::BalancesOilySkin => "balances-oily-skin",
            Self::FightsAcne => "fights-acne",
            Self::TargetsAging => "targets-aging",
            Self::DefinesCurls => "defines-curls",
            Self::EnhancesWaves => "enhances-waves",
            Self::SuitsYourHairType => "suits-your-hair-type",
            Self::NourishesHair => "nourishes-hair",
            Self::NaturalIngredients => "natural-ingredients",
            Self::GentleFormula => "gentle-formula",
        }
    }
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
