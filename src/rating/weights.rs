//! Positional weight tables
//!
//! Each position category carries a fixed list of (component, weight) pairs.
//! Only the components listed for a category are scored for it.

use crate::error::RatingError;
use crate::types::PositionCategory;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A named sub-score derived from one or more raw counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Goals,
    Assists,
    Passes,
    Tackles,
    Interceptions,
    Clearances,
    GkSaves,
    GoalsConceded,
    Distribution,
    ShotsOnTarget,
    Discipline,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Goals => "goals",
            ComponentKind::Assists => "assists",
            ComponentKind::Passes => "passes",
            ComponentKind::Tackles => "tackles",
            ComponentKind::Interceptions => "interceptions",
            ComponentKind::Clearances => "clearances",
            ComponentKind::GkSaves => "gk_saves",
            ComponentKind::GoalsConceded => "goals_conceded",
            ComponentKind::Distribution => "distribution",
            ComponentKind::ShotsOnTarget => "shots_on_target",
            ComponentKind::Discipline => "discipline",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signed weight applied to one component's capped raw score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentWeight {
    pub component: ComponentKind,
    pub weight: f64,
}

impl ComponentWeight {
    pub const fn new(component: ComponentKind, weight: f64) -> Self {
        Self { component, weight }
    }
}

const GOALKEEPER: &[ComponentWeight] = &[
    ComponentWeight::new(ComponentKind::GkSaves, 0.30),
    ComponentWeight::new(ComponentKind::GoalsConceded, -0.25),
    ComponentWeight::new(ComponentKind::Clearances, 0.15),
    ComponentWeight::new(ComponentKind::Distribution, 0.20),
    ComponentWeight::new(ComponentKind::Discipline, -0.10),
];

const DEFENDER: &[ComponentWeight] = &[
    ComponentWeight::new(ComponentKind::Tackles, 0.25),
    ComponentWeight::new(ComponentKind::Clearances, 0.20),
    ComponentWeight::new(ComponentKind::Interceptions, 0.20),
    ComponentWeight::new(ComponentKind::Passes, 0.15),
    ComponentWeight::new(ComponentKind::Goals, 0.10),
    ComponentWeight::new(ComponentKind::Discipline, -0.10),
];

const MIDFIELDER: &[ComponentWeight] = &[
    ComponentWeight::new(ComponentKind::Passes, 0.30),
    ComponentWeight::new(ComponentKind::Assists, 0.20),
    ComponentWeight::new(ComponentKind::Goals, 0.15),
    ComponentWeight::new(ComponentKind::Tackles, 0.15),
    ComponentWeight::new(ComponentKind::Interceptions, 0.10),
    ComponentWeight::new(ComponentKind::Discipline, -0.10),
];

const ATTACKER: &[ComponentWeight] = &[
    ComponentWeight::new(ComponentKind::Goals, 0.35),
    ComponentWeight::new(ComponentKind::Assists, 0.20),
    ComponentWeight::new(ComponentKind::ShotsOnTarget, 0.20),
    ComponentWeight::new(ComponentKind::Passes, 0.15),
    ComponentWeight::new(ComponentKind::Discipline, -0.10),
];

/// Immutable mapping from position category to its component weights
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTable {
    goalkeeper: Cow<'static, [ComponentWeight]>,
    defender: Cow<'static, [ComponentWeight]>,
    midfielder: Cow<'static, [ComponentWeight]>,
    attacker: Cow<'static, [ComponentWeight]>,
}

impl WeightTable {
    /// The fixed production weights
    pub const STANDARD: WeightTable = WeightTable {
        goalkeeper: Cow::Borrowed(GOALKEEPER),
        defender: Cow::Borrowed(DEFENDER),
        midfielder: Cow::Borrowed(MIDFIELDER),
        attacker: Cow::Borrowed(ATTACKER),
    };

    pub fn standard() -> Self {
        Self::STANDARD
    }

    /// Build a table from explicit per-category weights.
    ///
    /// The table is checked with [`WeightTable::validate`] when handed to a
    /// [`RatingEngine`](crate::rating::RatingEngine).
    pub fn new(
        goalkeeper: Vec<ComponentWeight>,
        defender: Vec<ComponentWeight>,
        midfielder: Vec<ComponentWeight>,
        attacker: Vec<ComponentWeight>,
    ) -> Self {
        Self {
            goalkeeper: Cow::Owned(goalkeeper),
            defender: Cow::Owned(defender),
            midfielder: Cow::Owned(midfielder),
            attacker: Cow::Owned(attacker),
        }
    }

    /// Weights for a category, in scoring order
    pub fn weights_for(&self, category: PositionCategory) -> &[ComponentWeight] {
        match category {
            PositionCategory::Goalkeeper => &self.goalkeeper,
            PositionCategory::Defender => &self.defender,
            PositionCategory::Midfielder => &self.midfielder,
            PositionCategory::Attacker => &self.attacker,
        }
    }

    /// Weight of a single component for a category, if it is scored there
    pub fn weight(&self, category: PositionCategory, component: ComponentKind) -> Option<f64> {
        self.weights_for(category)
            .iter()
            .find(|w| w.component == component)
            .map(|w| w.weight)
    }

    /// Check table invariants.
    ///
    /// Every category must carry a negative discipline weight, list each
    /// component at most once, and use finite weights.
    pub fn validate(&self) -> Result<(), RatingError> {
        for category in PositionCategory::ALL {
            let weights = self.weights_for(category);

            for (i, w) in weights.iter().enumerate() {
                if !w.weight.is_finite() {
                    return Err(RatingError::ConfigurationError {
                        message: format!("{} weight for {} is not finite", w.component, category),
                    });
                }
                if weights[..i].iter().any(|prev| prev.component == w.component) {
                    return Err(RatingError::ConfigurationError {
                        message: format!("{} listed twice for {}", w.component, category),
                    });
                }
            }

            match self.weight(category, ComponentKind::Discipline) {
                Some(weight) if weight < 0.0 => {}
                Some(_) => {
                    return Err(RatingError::ConfigurationError {
                        message: format!("Discipline weight for {} must be negative", category),
                    })
                }
                None => {
                    return Err(RatingError::ConfigurationError {
                        message: format!("Missing discipline weight for {}", category),
                    })
                }
            }
        }

        Ok(())
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}
