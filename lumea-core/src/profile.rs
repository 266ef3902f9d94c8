//! User profile snapshots supplied by the caller on every request.
//!
//! The engine never mutates a profile and holds no reference to the
//! profile store; adapters fetch the current snapshot and pass it in.

use crate::codes::{Goal, HairConcern, HairType, SkinConcern};

/// What a user declared about their skin, hair, and priorities.
///
/// An entirely empty profile is valid: before onboarding completes the
/// scorer falls back to a generous baseline so the UI is never empty.
///
/// # Examples
/// ```
/// use lumea_core::{HairType, SkinConcern, UserProfile};
///
/// let profile = UserProfile::new()
///     .with_skin_concerns([SkinConcern::Dryness])
///     .with_hair_type(HairType::Wavy);
/// assert!(profile.has_skin_concern(SkinConcern::Dryness));
/// assert_eq!(profile.hair_type(), Some(HairType::Wavy));
/// assert!(profile.has_signal());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    skin_concerns: Vec<SkinConcern>,
    hair_type: Option<HairType>,
    hair_concerns: Vec<HairConcern>,
    goals: Vec<Goal>,
}

impl UserProfile {
    /// Construct an empty profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            skin_concerns: Vec::new(),
            hair_type: None,
            hair_concerns: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Replace the declared skin concerns while returning `self`.
    #[must_use]
    pub fn with_skin_concerns(
        mut self,
        concerns: impl IntoIterator<Item = SkinConcern>,
    ) -> Self {
        self.skin_concerns = concerns.into_iter().collect();
        self
    }

    /// Set the declared hair type while returning `self`.
    #[must_use]
    pub fn with_hair_type(mut self, hair_type: HairType) -> Self {
        self.hair_type = Some(hair_type);
        self
    }

    /// Replace the declared hair concerns while returning `self`.
    #[must_use]
    pub fn with_hair_concerns(
        mut self,
        concerns: impl IntoIterator<Item = HairConcern>,
    ) -> Self {
        self.hair_concerns = concerns.into_iter().collect();
        self
    }

    /// Replace the selected goals while returning `self`.
    #[must_use]
    pub fn with_goals(mut self, goals: impl IntoIterator<Item = Goal>) -> Self {
        self.goals = goals.into_iter().collect();
        self
    }

    /// Declared skin concerns, order-insensitive.
    #[must_use]
    pub fn skin_concerns(&self) -> &[SkinConcern] {
        &self.skin_concerns
    }

    /// Declared hair type, if onboarding captured one.
    #[must_use]
    pub const fn hair_type(&self) -> Option<HairType> {
        self.hair_type
    }

    /// Declared hair concerns.
    #[must_use]
    pub fn hair_concerns(&self) -> &[HairConcern] {
        &self.hair_concerns
    }

    /// Selected goals.
    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Whether the user declared the given skin concern.
    #[must_use]
    pub fn has_skin_concern(&self, concern: SkinConcern) -> bool {
        self.skin_concerns.contains(&concern)
    }

    /// Whether the user selected the given goal.
    #[must_use]
    pub fn has_goal(&self, goal: Goal) -> bool {
        self.goals.contains(&goal)
    }

    /// Whether any hair concern admits generic nourishment.
    #[must_use]
    pub fn has_nourishable_hair_concern(&self) -> bool {
        self.hair_concerns
            .iter()
            .any(|concern| concern.is_nourishable())
    }

    /// Whether the profile carries any matching signal at all.
    ///
    /// Hair concerns alone do not count: the shipped onboarding flow
    /// never records them without also recording a hair type.
    #[must_use]
    pub fn has_signal(&self) -> bool {
        !self.skin_concerns.is_empty() || self.hair_type.is_some() || !self.goals.is_empty()
    }
}
