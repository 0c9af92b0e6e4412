// Pokemon CP Engine Schema - Shared static game data
// Types and their matchups, per-type attack pools and the species catalogue.
// Nothing in here holds per-instance state.

// Re-export the main types
pub use attack_data::*;
pub use battle_data::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod attack_data;
pub mod battle_data;
pub mod pokemon_types;
pub mod species_data;
