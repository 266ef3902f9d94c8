//! Closed code sets used for matching products against profiles.
//!
//! Every code the engine reads is a finite enum rather than a free-form
//! string. Adapters parse user input with [`FromStr`](std::str::FromStr)
//! and the presentation layer maps codes to localized labels outside the
//! core.

/// Which part of a routine a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ProductCategory {
    /// Facial and body skincare.
    Skin,
    /// Hair care.
    Hair,
    /// Suitable for both skin and hair.
    Both,
}

impl ProductCategory {
    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skin => "skin",
            Self::Hair => "hair",
            Self::Both => "both",
        }
    }

    /// Whether hair-specific scoring rules apply to this category.
    #[must_use]
    pub const fn covers_hair(self) -> bool {
        matches!(self, Self::Hair | Self::Both)
    }
}

/// Marketing/ethics tags carried by catalog products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ProductTag {
    /// Certified bio cosmetics.
    Bio,
    /// Naturally derived formula.
    Natural,
    /// No animal-derived ingredients.
    Vegan,
    /// Not tested on animals.
    CrueltyFree,
    /// Certified organic ingredients.
    Organic,
}

impl ProductTag {
    /// Return the tag as its kebab-case code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bio => "bio",
            Self::Natural => "natural",
            Self::Vegan => "vegan",
            Self::CrueltyFree => "cruelty-free",
            Self::Organic => "organic",
        }
    }

    /// Whether the tag counts as a natural-ingredients signal.
    #[must_use]
    pub const fn is_natural_signal(self) -> bool {
        matches!(self, Self::Bio | Self::Organic | Self::Natural)
    }
}

/// Skin issues a user can declare and a product can target or aggravate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SkinConcern {
    /// Dry, tight, or flaky skin.
    Dryness,
    /// Excess sebum and shine.
    Oiliness,
    /// Breakouts and blemishes.
    Acne,
    /// Fine lines and loss of firmness.
    Aging,
    /// Reactive skin that flushes or stings.
    Sensitivity,
    /// Visible or clogged pores.
    Pores,
    /// Diffuse redness.
    Redness,
}

impl SkinConcern {
    /// Return the concern as its lowercase code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dryness => "dryness",
            Self::Oiliness => "oiliness",
            Self::Acne => "acne",
            Self::Aging => "aging",
            Self::Sensitivity => "sensitivity",
            Self::Pores => "pores",
            Self::Redness => "redness",
        }
    }
}

/// Hair texture declared during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HairType {
    /// Straight hair.
    Straight,
    /// Wavy hair.
    Wavy,
    /// Curly hair.
    Curly,
    /// Coily or afro-textured hair.
    Coily,
}

impl HairType {
    /// Return the hair type as its lowercase code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Wavy => "wavy",
            Self::Curly => "curly",
            Self::Coily => "coily",
        }
    }
}

/// Hair issues a user can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HairConcern {
    /// Dry or brittle lengths.
    Dryness,
    /// Frizz and flyaways.
    Frizz,
    /// Shedding and thinning.
    Hairfall,
    /// Flaky scalp.
    Dandruff,
}

impl HairConcern {
    /// Return the concern as its lowercase code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dryness => "dryness",
            Self::Frizz => "frizz",
            Self::Hairfall => "hairfall",
            Self::Dandruff => "dandruff",
        }
    }

    /// Whether a hair product can plausibly nourish this concern.
    ///
    /// Used when deriving match reasons; dandruff needs a treatment
    /// product rather than generic nourishment.
    #[must_use]
    pub const fn is_nourishable(self) -> bool {
        matches!(self, Self::Dryness | Self::Frizz | Self::Hairfall)
    }
}

/// Priorities a user selects during onboarding (at most three by UI
/// convention; the core does not enforce the limit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Goal {
    /// Prefer natural or certified-organic formulas.
    Natural,
    /// Boost moisture.
    Hydration,
    /// Slow visible aging.
    AntiAging,
    /// Even tone and radiance.
    Glow,
    /// Repair damaged skin or hair.
    Repair,
    /// Calm reactive skin.
    Soothing,
}

impl Goal {
    /// Return the goal as its kebab-case code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Hydration => "hydration",
            Self::AntiAging => "anti-aging",
            Self::Glow => "glow",
            Self::Repair => "repair",
            Self::Soothing => "soothing",
        }
    }
}

macro_rules! impl_code_conversions {
    ($($ty:ident => [$($variant:ident),+ $(,)?]),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl std::str::FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let lowered = s.to_lowercase();
                    $(
                        if lowered == Self::$variant.as_str() {
                            return Ok(Self::$variant);
                        }
                    )+
                    Err(format!(concat!("unknown ", stringify!($ty), " code '{}'"), s))
                }
            }
        )+
    };
}

impl_code_conversions! {
    ProductCategory => [Skin, Hair, Both],
    ProductTag => [Bio, Natural, Vegan, CrueltyFree, Organic],
    SkinConcern => [Dryness, Oiliness, Acne, Aging, Sensitivity, Pores, Redness],
    HairType => [Straight, Wavy, Curly, Coily],
    HairConcern => [Dryness, Frizz, Hairfall, Dandruff],
    Goal => [Natural, Hydration, AntiAging, Glow, Repair, Soothing],
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests should fail fast when setup breaks"
    )]

    use std::str::FromStr;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("dryness", SkinConcern::Dryness)]
    #[case("SENSITIVITY", SkinConcern::Sensitivity)]
    #[case("Pores", SkinConcern::Pores)]
    fn skin_concern_parses_case_insensitively(#[case] code: &str, #[case] expected: SkinConcern) {
        assert_eq!(SkinConcern::from_str(code), Ok(expected));
    }

    #[rstest]
    fn display_matches_as_str() {
        assert_eq!(Goal::AntiAging.to_string(), "anti-aging");
        assert_eq!(ProductTag::CrueltyFree.to_string(), "cruelty-free");
        assert_eq!(HairType::Coily.to_string(), HairType::Coily.as_str());
    }

    #[rstest]
    fn parsing_rejects_unknown_codes() {
        let err = HairType::from_str("bald").expect_err("unknown codes must not parse");
        assert!(err.contains("unknown HairType code"));
    }

    #[rstest]
    fn category_hair_coverage() {
        assert!(ProductCategory::Hair.covers_hair());
        assert!(ProductCategory::Both.covers_hair());
        assert!(!ProductCategory::Skin.covers_hair());
    }

    #[rstest]
    fn natural_signal_tags() {
        assert!(ProductTag::Bio.is_natural_signal());
        assert!(ProductTag::Organic.is_natural_signal());
        assert!(ProductTag::Natural.is_natural_signal());
        assert!(!ProductTag::Vegan.is_natural_signal());
        assert!(!ProductTag::CrueltyFree.is_natural_signal());
    }
}
