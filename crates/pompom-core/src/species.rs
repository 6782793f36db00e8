//! Pet species: life stages and evolved forms

use serde::{Deserialize, Serialize};
use std::fmt;

/// Life stage of a species within the evolution machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Freshly hatched
    Baby,
    /// Intermediate stage
    Teen,
    /// Branch point for the terminal forms
    Adult,
    /// Evolved form with no outgoing transitions
    Terminal,
}

/// The pet's current form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Species {
    #[default]
    FlanBebe,
    FlanTeen,
    FlanAdult,
    Pompompurin,
    Muffin,
    Bagel,
    Scone,
}

impl Species {
    /// Every species, juvenile stages first
    pub const ALL: [Species; 7] = [
        Species::FlanBebe,
        Species::FlanTeen,
        Species::FlanAdult,
        Species::Pompompurin,
        Species::Muffin,
        Species::Bagel,
        Species::Scone,
    ];

    /// The four evolved forms reachable from the adult branch point
    pub const TERMINAL: [Species; 4] = [
        Species::Pompompurin,
        Species::Muffin,
        Species::Bagel,
        Species::Scone,
    ];

    /// Wire name used in save records
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::FlanBebe => "FLAN_BEBE",
            Species::FlanTeen => "FLAN_TEEN",
            Species::FlanAdult => "FLAN_ADULT",
            Species::Pompompurin => "POMPOMPURIN",
            Species::Muffin => "MUFFIN",
            Species::Bagel => "BAGEL",
            Species::Scone => "SCONE",
        }
    }

    /// Parse a wire name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sp| sp.as_str() == s)
    }

    /// Position in the evolution machine
    pub fn stage(&self) -> Stage {
        match self {
            Species::FlanBebe => Stage::Baby,
            Species::FlanTeen => Stage::Teen,
            Species::FlanAdult => Stage::Adult,
            Species::Pompompurin | Species::Muffin | Species::Bagel | Species::Scone => {
                Stage::Terminal
            }
        }
    }

    /// Check if this is one of the evolved forms
    pub fn is_terminal(&self) -> bool {
        self.stage() == Stage::Terminal
    }

    /// Check if the pet is at least an adult
    pub fn is_grown(&self) -> bool {
        matches!(self.stage(), Stage::Adult | Stage::Terminal)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
