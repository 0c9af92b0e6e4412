// In: src/lib.rs

//! Pokemon CP Engine
//!
//! Hidden-stat rolling, level progression, the HP/CP formula, attack
//! effectiveness and multi-key ranking for Pokemon GO style creatures.
//! Everything here is synchronous and works on in-memory values only.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod errors;
pub mod pokemon;
pub mod ranking;
pub mod rng;
pub mod stat_table;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{AttackTemplate, BaseStats, Effectiveness, PokemonType, Species, SpeciesData};

// --- From this crate's modules (`src/`) ---

// Creature and its inputs.
pub use pokemon::{Attack, PokemonInst, SpeciesProfile, MIN_CP};

// Attack selection and resolution.
pub use battle::attacks::{AttackKit, AttackResolver};

// Ranking.
pub use ranking::{compare, ordering, rank, RankingMode};

// Random source, configuration and level table.
pub use config::{EngineConfig, HpFloor};
pub use rng::StatRng;
pub use stat_table::{cp_multiplier, CP_MULTIPLIERS, MAX_LEVEL};

// Crate-specific error and result types.
pub use errors::{
    AttackSlot, ConfigError, EngineError, EngineResult, IllegalStateError, ValidationError,
};
