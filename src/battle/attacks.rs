use crate::config::EngineConfig;
use crate::errors::{AttackSlot, EngineResult, IllegalStateError};
use crate::pokemon::{Attack, PokemonInst};
use crate::rng::StatRng;
use schema::{AttackTemplate, Effectiveness, PokemonType};

/// The attack pools a Pokemon draws from, keyed by its primary type.
#[derive(Debug, Clone, Copy)]
pub struct AttackKit {
    pub attack_type: PokemonType,
    pub fast: &'static [AttackTemplate],
    pub special: &'static [AttackTemplate],
}

impl AttackKit {
    pub fn for_type(attack_type: PokemonType) -> Self {
        Self {
            attack_type,
            fast: schema::fast_attacks(attack_type),
            special: schema::special_attacks(attack_type),
        }
    }

    pub fn for_pokemon(pokemon: &PokemonInst) -> Self {
        Self::for_type(pokemon.primary_type())
    }

    fn candidates(&self, slot: AttackSlot) -> &'static [AttackTemplate] {
        match slot {
            AttackSlot::Fast => self.fast,
            AttackSlot::Special => self.special,
        }
    }
}

/// Picks attacks for Pokemon and resolves them against a victim.
#[derive(Debug, Clone, Default)]
pub struct AttackResolver {
    config: EngineConfig,
}

impl AttackResolver {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn choose_fast_attack(&self, pokemon: &mut PokemonInst, rng: &mut StatRng) {
        let attack = self.choose(pokemon, AttackSlot::Fast, rng);
        pokemon.fast_attack = Some(attack);
    }

    pub fn choose_special_attack(&self, pokemon: &mut PokemonInst, rng: &mut StatRng) {
        let attack = self.choose(pokemon, AttackSlot::Special, rng);
        pokemon.special_attack = Some(attack);
    }

    fn choose(&self, pokemon: &PokemonInst, slot: AttackSlot, rng: &mut StatRng) -> Attack {
        let kit = AttackKit::for_pokemon(pokemon);
        let candidates = kit.candidates(slot);
        // Pools hold at most a handful of entries
        let index = rng.next_in_range("Attack Choice", (candidates.len() - 1) as u8) as usize;
        let template = candidates[index];

        log::debug!("{} learned {} {} ({})", pokemon.name(), slot, template.name, template.power);

        Attack {
            name: template.name.to_string(),
            power: template.power,
            attack_type: kit.attack_type,
        }
    }

    /// Classify `attack_type` against the victim's one or two types.
    pub fn effectiveness(attack_type: PokemonType, victim: &PokemonInst) -> Effectiveness {
        let multiplier = PokemonType::effectiveness_against(
            attack_type,
            victim.primary_type(),
            victim.secondary_type(),
        );
        Effectiveness::from_multiplier(multiplier)
    }

    /// Hit `victim` with the attacker's fast attack.
    ///
    /// Returns `"<species> performed <attack>"` plus an effectiveness clause.
    ///
    /// # Errors
    /// [`IllegalStateError::AttackNotChosen`] if no fast attack was chosen yet.
    pub fn perform_fast_attack(
        &self,
        attacker: &PokemonInst,
        victim: &mut PokemonInst,
    ) -> EngineResult<String> {
        self.perform(attacker, victim, AttackSlot::Fast)
    }

    /// Hit `victim` with the attacker's special attack. See [`Self::perform_fast_attack`].
    pub fn perform_special_attack(
        &self,
        attacker: &PokemonInst,
        victim: &mut PokemonInst,
    ) -> EngineResult<String> {
        self.perform(attacker, victim, AttackSlot::Special)
    }

    fn perform(
        &self,
        attacker: &PokemonInst,
        victim: &mut PokemonInst,
        slot: AttackSlot,
    ) -> EngineResult<String> {
        let attack = match slot {
            AttackSlot::Fast => attacker.fast_attack_slot(),
            AttackSlot::Special => attacker.special_attack_slot(),
        }
        .ok_or_else(|| IllegalStateError::AttackNotChosen {
            species: attacker.species().to_string(),
            slot,
        })?;

        let effectiveness = Self::effectiveness(attack.attack_type, victim);
        let hit = (attack.power as f64 * effectiveness.damage_multiplier()) as i32;
        victim.be_attacked(hit, self.config.hp_floor);

        log::debug!(
            "{} used {} on {} ({}): {} damage, {} HP left",
            attacker.name(),
            attack.name,
            victim.name(),
            effectiveness,
            hit,
            victim.hp()
        );
        if victim.is_fainted() {
            log::info!("{} fainted", victim.name());
        }

        Ok(format!(
            "{} performed {}{}",
            attacker.species(),
            attack.name,
            effectiveness.report_suffix()
        ))
    }
}
