use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome class of an attack type against a defender's typing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Copy)]
pub enum Effectiveness {
    SuperEffective,
    Normal,
    NotVeryEffective,
}

impl Effectiveness {
    /// Classify a combined type-chart multiplier.
    /// Immunities (0.0) count as not very effective, there is no "no effect" class.
    pub fn from_multiplier(multiplier: f32) -> Self {
        if multiplier > 1.0 {
            Effectiveness::SuperEffective
        } else if multiplier < 1.0 {
            Effectiveness::NotVeryEffective
        } else {
            Effectiveness::Normal
        }
    }

    /// Damage scaling applied to an attack's power.
    pub fn damage_multiplier(&self) -> f64 {
        match self {
            Effectiveness::SuperEffective => 2.0,
            Effectiveness::Normal => 1.0,
            Effectiveness::NotVeryEffective => 0.5,
        }
    }

    /// Suffix appended to an attack report. Empty for normal hits.
    pub fn report_suffix(&self) -> &'static str {
        match self {
            Effectiveness::SuperEffective => " and it was super effective",
            Effectiveness::Normal => "",
            Effectiveness::NotVeryEffective => " and it wasn't very effective",
        }
    }
}

impl fmt::Display for Effectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            Effectiveness::SuperEffective => "Super Effective",
            Effectiveness::Normal => "Normal",
            Effectiveness::NotVeryEffective => "Not Very Effective",
        };

        write!(f, "{}", display_name)
    }
}
