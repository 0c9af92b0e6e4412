use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Species {
    Bulbasaur,
    Ivysaur,
    Venusaur,
    Charmander,
    Charmeleon,
    Charizard,
    Squirtle,
    Wartortle,
    Blastoise,
    Pikachu,
}

/// Species-level lower bounds for the hidden stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub attack: i32,
    pub defense: i32,
    pub stamina: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesData {
    pub pokedex_number: u16,
    pub name: &'static str,
    pub height: f64, // metres
    pub weight: f64, // kilograms
    pub primary_type: PokemonType,
    pub secondary_type: Option<PokemonType>,
    pub base_stats: BaseStats,
}

const fn base(attack: i32, defense: i32, stamina: i32) -> BaseStats {
    BaseStats {
        attack,
        defense,
        stamina,
    }
}

impl Species {
    pub fn name(&self) -> &'static str {
        self.data().name
    }

    pub fn data(&self) -> SpeciesData {
        use PokemonType::*;

        let (pokedex_number, name, height, weight, primary_type, secondary_type, base_stats) =
            match self {
                Species::Bulbasaur => (1, "Bulbasaur", 0.7, 6.9, Grass, Some(Poison), base(118, 111, 128)),
                Species::Ivysaur => (2, "Ivysaur", 1.0, 13.0, Grass, Some(Poison), base(151, 143, 155)),
                Species::Venusaur => (3, "Venusaur", 2.0, 100.0, Grass, Some(Poison), base(198, 189, 190)),
                Species::Charmander => (4, "Charmander", 0.6, 8.5, Fire, None, base(116, 93, 118)),
                Species::Charmeleon => (5, "Charmeleon", 1.1, 19.0, Fire, None, base(158, 126, 151)),
                Species::Charizard => (6, "Charizard", 1.7, 90.5, Fire, Some(Flying), base(223, 173, 186)),
                Species::Squirtle => (7, "Squirtle", 0.5, 9.0, Water, None, base(94, 121, 127)),
                Species::Wartortle => (8, "Wartortle", 1.0, 22.5, Water, None, base(126, 155, 153)),
                Species::Blastoise => (9, "Blastoise", 1.6, 85.5, Water, None, base(171, 207, 188)),
                Species::Pikachu => (25, "Pikachu", 0.4, 6.0, Electric, None, base(112, 96, 111)),
            };

        SpeciesData {
            pokedex_number,
            name,
            height,
            weight,
            primary_type,
            secondary_type,
            base_stats,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
