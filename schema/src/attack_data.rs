use crate::PokemonType;
use serde::Serialize;

/// A candidate attack a Pokemon of a given type can be taught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackTemplate {
    pub name: &'static str,
    pub power: u32,
}

const fn attack(name: &'static str, power: u32) -> AttackTemplate {
    AttackTemplate { name, power }
}

const NORMAL_FAST: &[AttackTemplate] = &[attack("Tackle", 5), attack("Quick Attack", 8), attack("Scratch", 6)];
const FIGHTING_FAST: &[AttackTemplate] = &[attack("Karate Chop", 8), attack("Low Kick", 6)];
const FLYING_FAST: &[AttackTemplate] = &[attack("Peck", 10), attack("Wing Attack", 8), attack("Gust", 25)];
const POISON_FAST: &[AttackTemplate] = &[attack("Poison Sting", 5), attack("Acid", 9)];
const GROUND_FAST: &[AttackTemplate] = &[attack("Mud Slap", 18), attack("Mud Shot", 5)];
const ROCK_FAST: &[AttackTemplate] = &[attack("Rock Throw", 12), attack("Smack Down", 16)];
const BUG_FAST: &[AttackTemplate] = &[attack("Bug Bite", 5), attack("Fury Cutter", 3)];
const GHOST_FAST: &[AttackTemplate] = &[attack("Lick", 5), attack("Shadow Claw", 9)];
const FIRE_FAST: &[AttackTemplate] = &[attack("Ember", 10), attack("Fire Fang", 11), attack("Fire Spin", 14)];
const WATER_FAST: &[AttackTemplate] = &[attack("Water Gun", 5), attack("Bubble", 12)];
const GRASS_FAST: &[AttackTemplate] = &[attack("Vine Whip", 7), attack("Razor Leaf", 13)];
const ELECTRIC_FAST: &[AttackTemplate] = &[attack("Thunder Shock", 5), attack("Spark", 6)];
const PSYCHIC_FAST: &[AttackTemplate] = &[attack("Confusion", 20), attack("Zen Headbutt", 12)];
const ICE_FAST: &[AttackTemplate] = &[attack("Ice Shard", 12), attack("Frost Breath", 10)];
const DRAGON_FAST: &[AttackTemplate] = &[attack("Dragon Breath", 6), attack("Dragon Tail", 15)];

const NORMAL_SPECIAL: &[AttackTemplate] = &[attack("Body Slam", 50), attack("Hyper Beam", 150)];
const FIGHTING_SPECIAL: &[AttackTemplate] = &[attack("Brick Break", 40), attack("Cross Chop", 50)];
const FLYING_SPECIAL: &[AttackTemplate] = &[attack("Aerial Ace", 55), attack("Air Cutter", 60)];
const POISON_SPECIAL: &[AttackTemplate] = &[attack("Sludge Bomb", 80), attack("Poison Fang", 35)];
const GROUND_SPECIAL: &[AttackTemplate] = &[attack("Dig", 100), attack("Earthquake", 120)];
const ROCK_SPECIAL: &[AttackTemplate] = &[attack("Rock Slide", 80), attack("Stone Edge", 100)];
const BUG_SPECIAL: &[AttackTemplate] = &[attack("X-Scissor", 45), attack("Signal Beam", 75)];
const GHOST_SPECIAL: &[AttackTemplate] = &[attack("Shadow Ball", 100), attack("Ominous Wind", 45)];
const FIRE_SPECIAL: &[AttackTemplate] = &[attack("Flamethrower", 70), attack("Fire Blast", 140), attack("Flame Charge", 65)];
const WATER_SPECIAL: &[AttackTemplate] = &[attack("Aqua Tail", 50), attack("Water Pulse", 70), attack("Hydro Pump", 130)];
const GRASS_SPECIAL: &[AttackTemplate] = &[attack("Seed Bomb", 55), attack("Power Whip", 90), attack("Solar Beam", 180)];
const ELECTRIC_SPECIAL: &[AttackTemplate] = &[attack("Thunderbolt", 80), attack("Discharge", 65), attack("Thunder", 100)];
const PSYCHIC_SPECIAL: &[AttackTemplate] = &[attack("Psybeam", 70), attack("Psychic", 90)];
const ICE_SPECIAL: &[AttackTemplate] = &[attack("Ice Beam", 90), attack("Blizzard", 130)];
const DRAGON_SPECIAL: &[AttackTemplate] = &[attack("Dragon Claw", 50), attack("Outrage", 110)];

/// Fast attacks available to a Pokemon whose primary type is `pokemon_type`.
pub fn fast_attacks(pokemon_type: PokemonType) -> &'static [AttackTemplate] {
    use PokemonType::*;

    match pokemon_type {
        Normal => NORMAL_FAST,
        Fighting => FIGHTING_FAST,
        Flying => FLYING_FAST,
        Poison => POISON_FAST,
        Ground => GROUND_FAST,
        Rock => ROCK_FAST,
        Bug => BUG_FAST,
        Ghost => GHOST_FAST,
        Fire => FIRE_FAST,
        Water => WATER_FAST,
        Grass => GRASS_FAST,
        Electric => ELECTRIC_FAST,
        Psychic => PSYCHIC_FAST,
        Ice => ICE_FAST,
        Dragon => DRAGON_FAST,
    }
}

/// Special (charged) attacks available to a Pokemon whose primary type is `pokemon_type`.
pub fn special_attacks(pokemon_type: PokemonType) -> &'static [AttackTemplate] {
    use PokemonType::*;

    match pokemon_type {
        Normal => NORMAL_SPECIAL,
        Fighting => FIGHTING_SPECIAL,
        Flying => FLYING_SPECIAL,
        Poison => POISON_SPECIAL,
        Ground => GROUND_SPECIAL,
        Rock => ROCK_SPECIAL,
        Bug => BUG_SPECIAL,
        Ghost => GHOST_SPECIAL,
        Fire => FIRE_SPECIAL,
        Water => WATER_SPECIAL,
        Grass => GRASS_SPECIAL,
        Electric => ELECTRIC_SPECIAL,
        Psychic => PSYCHIC_SPECIAL,
        Ice => ICE_SPECIAL,
        Dragon => DRAGON_SPECIAL,
    }
}
