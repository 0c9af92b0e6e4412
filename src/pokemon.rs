use crate::config::HpFloor;
use crate::errors::{EngineResult, ValidationError};
use crate::rng::StatRng;
use crate::stat_table::{cp_multiplier, MAX_LEVEL};
use schema::{BaseStats, PokemonType, Species};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest per-instance bonus rolled on top of each base stat.
const MAX_STAT_VARIANCE: u8 = 15;

/// Combat Power never drops below this.
pub const MIN_CP: i32 = 10;

/// Everything a species contributes when a Pokemon is created.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesProfile {
    pub species: String,
    pub number: u16,
    pub color: String,
    pub height: f64,
    pub weight: f64,
    pub primary_type: PokemonType,
    pub secondary_type: Option<PokemonType>,
    pub base_stats: BaseStats,
}

impl From<Species> for SpeciesProfile {
    fn from(species: Species) -> Self {
        let data = species.data();
        SpeciesProfile {
            species: data.name.to_string(),
            number: data.pokedex_number,
            color: data.primary_type.color().to_string(),
            height: data.height,
            weight: data.weight,
            primary_type: data.primary_type,
            secondary_type: data.secondary_type,
            base_stats: data.base_stats,
        }
    }
}

/// A learned attack occupying a fast or special slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub power: u32,
    pub attack_type: PokemonType,
}

#[derive(Debug, Clone)]
pub struct PokemonInst {
    species: String,
    name: String, // Species name if no nickname
    number: u16,
    color: String,
    height: f64,
    weight: f64,
    primary_type: PokemonType,
    secondary_type: Option<PokemonType>,

    // Hidden from the player, fixed at creation
    attack_power: i32,
    defense_power: i32,
    stamina_power: i32,
    level: u8,

    hp: i32,
    cp: i32,
    pub(crate) fast_attack: Option<Attack>,
    pub(crate) special_attack: Option<Attack>,
}

impl PokemonInst {
    /// Create a new Pokemon, rolling its starting level and hidden stats.
    ///
    /// Draws, in order: level in 0..=39, then attack, defense and stamina
    /// variances in 0..=15. Each hidden stat is
    /// `floor((base + variance) * multiplier[level])`.
    ///
    /// # Errors
    /// [`ValidationError::EmptyName`] when `name` is blank after trimming.
    pub fn new(profile: &SpeciesProfile, name: &str, rng: &mut StatRng) -> EngineResult<Self> {
        let name = validate_name(name)?;

        let level = rng.next_in_range("Starting Level", MAX_LEVEL);
        let multiplier = cp_multiplier(level);

        let roll_stat = |rng: &mut StatRng, base: i32, reason: &str| -> i32 {
            let variance = rng.next_in_range(reason, MAX_STAT_VARIANCE) as i32;
            ((base + variance) as f64 * multiplier) as i32
        };
        let base = &profile.base_stats;
        let attack_power = roll_stat(rng, base.attack, "Attack Variance");
        let defense_power = roll_stat(rng, base.defense, "Defense Variance");
        let stamina_power = roll_stat(rng, base.stamina, "Stamina Variance");

        let mut pokemon = PokemonInst {
            species: profile.species.clone(),
            name,
            number: profile.number,
            color: profile.color.clone(),
            height: profile.height,
            weight: profile.weight,
            primary_type: profile.primary_type,
            secondary_type: profile.secondary_type,
            attack_power,
            defense_power,
            stamina_power,
            level,
            hp: 0,
            cp: 0,
            fast_attack: None,
            special_attack: None,
        };
        pokemon.recalculate_stats();

        log::debug!(
            "Created {} ({}) at level {}: ATK {} DEF {} STA {} -> HP {} CP {}",
            pokemon.name,
            pokemon.species,
            pokemon.level,
            pokemon.attack_power,
            pokemon.defense_power,
            pokemon.stamina_power,
            pokemon.hp,
            pokemon.cp
        );

        Ok(pokemon)
    }

    /// Create a Pokemon from the built-in species catalogue.
    pub fn from_species(species: Species, name: &str, rng: &mut StatRng) -> EngineResult<Self> {
        Self::new(&SpeciesProfile::from(species), name, rng)
    }

    /// Refresh HP and CP from the hidden stats and the current level.
    ///
    /// HP is always reset to stamina. CP only ever goes up, and never below
    /// [`MIN_CP`].
    fn recalculate_stats(&mut self) {
        let multiplier = cp_multiplier(self.level);

        self.hp = self.stamina_power;

        let new_cp = (self.attack_power as f64
            * (self.defense_power as f64).sqrt()
            * (self.stamina_power as f64).sqrt()
            * multiplier.powi(2)
            / 10.0) as i32;
        if new_cp > self.cp {
            self.cp = new_cp;
        }
        if self.cp < MIN_CP {
            self.cp = MIN_CP;
        }
    }

    /// Raise the level by one (stopping at 39) and refresh HP/CP.
    pub fn level_up(&mut self) {
        if self.level < MAX_LEVEL {
            self.level += 1;
        }
        let old_cp = self.cp;
        self.recalculate_stats();

        log::debug!(
            "{} leveled up to {}: HP {} CP {} -> {}",
            self.name,
            self.level,
            self.hp,
            old_cp,
            self.cp
        );
    }

    /// Rename the Pokemon. Surrounding whitespace is dropped.
    pub fn set_name(&mut self, new_name: &str) -> EngineResult<()> {
        self.name = validate_name(new_name)?;
        Ok(())
    }

    /// Take `hit` points off HP, then apply the configured floor.
    pub(crate) fn be_attacked(&mut self, hit: i32, floor: HpFloor) {
        self.hp = floor.apply(self.hp - hit);
    }

    pub fn is_fainted(&self) -> bool {
        self.hp <= 0
    }

    pub fn has_custom_name(&self) -> bool {
        self.name != self.species
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn primary_type(&self) -> PokemonType {
        self.primary_type
    }

    pub fn secondary_type(&self) -> Option<PokemonType> {
        self.secondary_type
    }

    /// Both types for display, e.g. `"Grass | Poison"`.
    pub fn type_label(&self) -> String {
        match self.secondary_type {
            Some(secondary) => format!("{} | {}", self.primary_type, secondary),
            None => self.primary_type.to_string(),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn cp(&self) -> i32 {
        self.cp
    }

    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    pub fn defense_power(&self) -> i32 {
        self.defense_power
    }

    pub fn stamina_power(&self) -> i32 {
        self.stamina_power
    }

    pub fn fast_attack(&self) -> Option<&str> {
        self.fast_attack.as_ref().map(|a| a.name.as_str())
    }

    pub fn special_attack(&self) -> Option<&str> {
        self.special_attack.as_ref().map(|a| a.name.as_str())
    }

    pub fn fast_attack_slot(&self) -> Option<&Attack> {
        self.fast_attack.as_ref()
    }

    pub fn special_attack_slot(&self) -> Option<&Attack> {
        self.special_attack.as_ref()
    }
}

fn validate_name(name: &str) -> EngineResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    Ok(trimmed.to_string())
}

/// Two Pokemon are equal when number, name, HP, CP and both attack names
/// match. Height, weight and typing are not compared.
impl PartialEq for PokemonInst {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
            && self.name == other.name
            && self.hp == other.hp
            && self.cp == other.cp
            && self.fast_attack() == other.fast_attack()
            && self.special_attack() == other.special_attack()
    }
}

impl fmt::Display for PokemonInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Species: {}", self.species)?;
        if self.has_custom_name() {
            writeln!(f, "Name: {}", self.name)?;
        }
        writeln!(f, "Number: {:03}", self.number)?;
        // Debug formatting keeps the trailing ".0" on whole numbers
        writeln!(f, "Height: {:?}", self.height)?;
        writeln!(f, "Weight: {:?}", self.weight)?;
        writeln!(f, "Type: {}", self.type_label())?;
        writeln!(f, "HP: {}", self.hp)?;
        write!(f, "CP: {}", self.cp)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::errors::EngineError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Profile used by the golden-value tests.
    pub(crate) fn golden_profile() -> SpeciesProfile {
        SpeciesProfile {
            species: "Testmon".to_string(),
            number: 150,
            color: "Pink".to_string(),
            height: 2.0,
            weight: 122.0,
            primary_type: PokemonType::Psychic,
            secondary_type: None,
            base_stats: BaseStats {
                attack: 120,
                defense: 100,
                stamina: 90,
            },
        }
    }

    fn scripted(level: u8, variances: [u8; 3]) -> StatRng {
        StatRng::new_for_test(vec![level, variances[0], variances[1], variances[2]])
    }

    #[rstest]
    #[case("no variance", [0, 0, 0], (94, 79, 71), 71, 439)]
    #[case("max variance", [15, 15, 15], (106, 90, 82), 82, 568)]
    #[case("mixed variance", [7, 3, 11], (100, 81, 79), 79, 499)]
    fn test_golden_values_at_level_39(
        #[case] desc: &str,
        #[case] variances: [u8; 3],
        #[case] hidden: (i32, i32, i32),
        #[case] expected_hp: i32,
        #[case] expected_cp: i32,
    ) {
        let mut rng = scripted(39, variances);
        let pokemon = PokemonInst::new(&golden_profile(), "Testmon", &mut rng).unwrap();

        assert_eq!(pokemon.level(), 39, "{}", desc);
        assert_eq!(
            (pokemon.attack_power(), pokemon.defense_power(), pokemon.stamina_power()),
            hidden,
            "{}",
            desc
        );
        assert_eq!(pokemon.hp(), expected_hp, "{}", desc);
        assert_eq!(pokemon.cp(), expected_cp, "{}", desc);
    }

    #[test]
    fn test_seeded_construction_is_reproducible() {
        let a = PokemonInst::new(&golden_profile(), "Testmon", &mut StatRng::from_seed(7)).unwrap();
        let b = PokemonInst::new(&golden_profile(), "Testmon", &mut StatRng::from_seed(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.level(), b.level());
        assert!(a.level() <= MAX_LEVEL);
    }

    #[test]
    fn test_cp_floor_at_level_zero() {
        // Level 0 stats are 11/9/8, whose raw CP rounds down to 0.
        let pokemon = PokemonInst::new(&golden_profile(), "Testmon", &mut scripted(0, [0, 0, 0])).unwrap();
        assert_eq!(pokemon.hp(), 8);
        assert_eq!(pokemon.cp(), MIN_CP);
    }

    #[test]
    fn test_level_up_recomputes_cp_with_fixed_hidden_stats() {
        let mut pokemon =
            PokemonInst::new(&golden_profile(), "Testmon", &mut scripted(10, [0, 0, 0])).unwrap();
        assert_eq!(pokemon.cp(), 43);
        assert_eq!(pokemon.hp(), 39);

        pokemon.level_up();

        assert_eq!(pokemon.level(), 11);
        assert_eq!(pokemon.cp(), 47);
        // HP tracks stamina, which never changes after creation
        assert_eq!(pokemon.hp(), 39);
        assert_eq!(pokemon.attack_power(), 53);
    }

    #[test]
    fn test_level_up_is_monotonic_and_capped() {
        let mut pokemon =
            PokemonInst::new(&golden_profile(), "Testmon", &mut scripted(30, [4, 9, 2])).unwrap();

        for _ in 0..50 {
            let (level, cp) = (pokemon.level(), pokemon.cp());
            pokemon.level_up();
            assert!(pokemon.level() >= level);
            assert!(pokemon.level() <= MAX_LEVEL);
            assert!(pokemon.cp() >= cp);
            assert!(pokemon.cp() >= MIN_CP);
        }
        assert_eq!(pokemon.level(), MAX_LEVEL);
    }

    #[test]
    fn test_level_up_at_cap_restores_hp() {
        let mut pokemon =
            PokemonInst::new(&golden_profile(), "Testmon", &mut scripted(39, [0, 0, 0])).unwrap();
        pokemon.be_attacked(50, HpFloor::Unbounded);
        assert_eq!(pokemon.hp(), 21);

        pokemon.level_up();

        assert_eq!(pokemon.level(), 39);
        assert_eq!(pokemon.hp(), 71);
        assert_eq!(pokemon.cp(), 439);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_names_are_rejected(#[case] name: &str) {
        let err = PokemonInst::new(&golden_profile(), name, &mut scripted(1, [0, 0, 0])).unwrap_err();
        assert_eq!(err, EngineError::Validation(ValidationError::EmptyName));
    }

    #[test]
    fn test_set_name_trims_and_validates() {
        let mut pokemon = PokemonInst::from_species(
            Species::Pikachu,
            "Pikachu",
            &mut scripted(5, [1, 2, 3]),
        )
        .unwrap();
        assert!(!pokemon.has_custom_name());

        pokemon.set_name("  Sparky ").unwrap();
        assert_eq!(pokemon.name(), "Sparky");
        assert!(pokemon.has_custom_name());

        assert!(pokemon.set_name("    ").is_err());
        assert_eq!(pokemon.name(), "Sparky");
    }

    #[test]
    fn test_hp_floor_settings() {
        let mut unbounded =
            PokemonInst::new(&golden_profile(), "Testmon", &mut scripted(0, [0, 0, 0])).unwrap();
        unbounded.be_attacked(20, HpFloor::Unbounded);
        assert_eq!(unbounded.hp(), -12);
        assert!(unbounded.is_fainted());

        let mut clamped =
            PokemonInst::new(&golden_profile(), "Testmon", &mut scripted(0, [0, 0, 0])).unwrap();
        clamped.be_attacked(20, HpFloor::Zero);
        assert_eq!(clamped.hp(), 0);
        assert!(clamped.is_fainted());
    }

    #[test]
    fn test_species_profile_from_catalogue() {
        let pokemon =
            PokemonInst::from_species(Species::Bulbasaur, "Bulbasaur", &mut scripted(0, [0, 0, 0]))
                .unwrap();
        assert_eq!(pokemon.number(), 1);
        assert_eq!(pokemon.color(), "Green");
        assert_eq!(pokemon.type_label(), "Grass | Poison");
        assert_eq!(pokemon.primary_type(), PokemonType::Grass);
        assert_eq!(pokemon.secondary_type(), Some(PokemonType::Poison));
        assert_eq!(pokemon.fast_attack(), None);
        assert_eq!(pokemon.special_attack(), None);
    }

    #[test]
    fn test_equality_ignores_height_weight_and_type() {
        let mut other_profile = golden_profile();
        other_profile.height = 9.9;
        other_profile.weight = 1.5;
        other_profile.primary_type = PokemonType::Dragon;
        other_profile.secondary_type = Some(PokemonType::Ice);

        let a = PokemonInst::new(&golden_profile(), "Testmon", &mut scripted(20, [1, 1, 1])).unwrap();
        let b = PokemonInst::new(&other_profile, "Testmon", &mut scripted(20, [1, 1, 1])).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, a);

        let c = PokemonInst::new(&golden_profile(), "Mewtwo", &mut scripted(20, [1, 1, 1])).unwrap();
        assert_ne!(a, c);
    }

    #[rstest]
    #[case::number("number")]
    #[case::name("name")]
    #[case::hp("hp")]
    #[case::cp("cp")]
    fn test_each_equality_key_matters(#[case] key: &str) {
        let a = PokemonInst::new(&golden_profile(), "Testmon", &mut scripted(10, [0, 0, 0])).unwrap();
        let b = match key {
            "number" => {
                let renumbered = SpeciesProfile {
                    number: 151,
                    ..golden_profile()
                };
                PokemonInst::new(&renumbered, "Testmon", &mut scripted(10, [0, 0, 0])).unwrap()
            }
            "name" => PokemonInst::new(&golden_profile(), "Other", &mut scripted(10, [0, 0, 0])).unwrap(),
            "hp" => {
                let mut hurt = a.clone();
                hurt.be_attacked(1, HpFloor::Unbounded);
                assert_eq!(hurt.cp(), a.cp());
                hurt
            }
            "cp" => {
                // 43 -> 47 CP while HP stays at 39
                let mut leveled = a.clone();
                leveled.level_up();
                assert_eq!(leveled.hp(), a.hp());
                leveled
            }
            other => panic!("unknown key {}", other),
        };

        assert_ne!(a, b, "{}", key);
        assert_ne!(b, a, "{}", key);
    }

    #[test]
    fn test_display_summary() {
        let mut pokemon =
            PokemonInst::from_species(Species::Squirtle, "Squirtle", &mut scripted(39, [0, 0, 0]))
                .unwrap();
        let expected_plain = format!(
            "Species: Squirtle\nNumber: 007\nHeight: 0.5\nWeight: 9.0\nType: Water\nHP: {}\nCP: {}",
            pokemon.hp(),
            pokemon.cp()
        );
        assert_eq!(pokemon.to_string(), expected_plain);

        pokemon.set_name("Shellby").unwrap();
        assert!(pokemon.to_string().contains("\nName: Shellby\nNumber: 007\n"));
    }
}
