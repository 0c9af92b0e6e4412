//! Ordering of Pokemon under a caller-selected ranking mode.
//!
//! Every comparison takes the mode explicitly. Identical Pokemon (see the
//! `PartialEq` impl on [`PokemonInst`]) always compare as 0; otherwise the
//! mode's keys are tried in order and the first non-zero one decides.

use crate::errors::{EngineError, ValidationError};
use crate::pokemon::PokemonInst;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankingMode {
    /// number, name, HP, CP
    Number = 1,
    /// species, number, HP, CP
    Species = 2,
    /// HP, number, name, CP
    HitPoints = 3,
    /// CP, number, name, HP
    CombatPower = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RankKey {
    Number,
    Species,
    /// Only consulted when at least one side carries a nickname.
    Name,
    HitPoints,
    CombatPower,
}

impl RankingMode {
    pub const ALL: [RankingMode; 4] = [
        RankingMode::Number,
        RankingMode::Species,
        RankingMode::HitPoints,
        RankingMode::CombatPower,
    ];

    fn keys(&self) -> [RankKey; 4] {
        use RankKey::*;

        match self {
            RankingMode::Number => [Number, Name, HitPoints, CombatPower],
            RankingMode::Species => [Species, Number, HitPoints, CombatPower],
            RankingMode::HitPoints => [HitPoints, Number, Name, CombatPower],
            RankingMode::CombatPower => [CombatPower, Number, Name, HitPoints],
        }
    }
}

impl TryFrom<u8> for RankingMode {
    type Error = EngineError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            1 => Ok(RankingMode::Number),
            2 => Ok(RankingMode::Species),
            3 => Ok(RankingMode::HitPoints),
            4 => Ok(RankingMode::CombatPower),
            other => Err(ValidationError::UnknownRankingMode(other).into()),
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = match self {
            RankingMode::Number => "Number",
            RankingMode::Species => "Species",
            RankingMode::HitPoints => "HP",
            RankingMode::CombatPower => "CP",
        };
        write!(f, "{}", display_name)
    }
}

fn str_diff(a: &str, b: &str) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

fn key_diff(key: RankKey, a: &PokemonInst, b: &PokemonInst) -> i32 {
    match key {
        RankKey::Number => a.number() as i32 - b.number() as i32,
        RankKey::Species => str_diff(a.species(), b.species()),
        RankKey::Name => {
            if a.has_custom_name() || b.has_custom_name() {
                str_diff(a.name(), b.name())
            } else {
                0
            }
        }
        RankKey::HitPoints => a.hp() - b.hp(),
        RankKey::CombatPower => a.cp() - b.cp(),
    }
}

/// Compare `a` to `b` under `mode`.
///
/// Negative means `a` ranks first. Numeric keys give their signed
/// difference, string keys give -1, 0 or 1.
pub fn compare(mode: RankingMode, a: &PokemonInst, b: &PokemonInst) -> i32 {
    if a == b {
        return 0;
    }

    mode.keys()
        .into_iter()
        .map(|key| key_diff(key, a, b))
        .find(|diff| *diff != 0)
        .unwrap_or(0)
}

pub fn ordering(mode: RankingMode, a: &PokemonInst, b: &PokemonInst) -> Ordering {
    compare(mode, a, b).cmp(&0)
}

/// Stable sort of `pokemon` under `mode`.
///
/// The name key is only consulted when one side is nicknamed, so `compare`
/// is not transitive across mixed parties. With equal numbers in mode 1,
/// plain "Alpha" > plain "Beta" by HP, "Beta" > nicknamed "Az" by name, and
/// "Az" > "Alpha" by name. The resulting order for such parties is
/// unspecified, and `slice::sort_by` may panic on Rust 1.81+ when it detects
/// the inconsistency.
pub fn rank(mode: RankingMode, pokemon: &mut [PokemonInst]) {
    pokemon.sort_by(|a, b| ordering(mode, a, b));
    log::debug!("Ranked {} Pokemon by {}", pokemon.len(), mode);
}
