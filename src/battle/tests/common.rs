use crate::battle::attacks::AttackResolver;
use crate::errors::EngineResult;
use crate::pokemon::PokemonInst;
use crate::rng::StatRng;
use schema::Species;

/// A builder for creating test Pokemon instances with scripted rolls.
///
/// # Example
/// ```ignore
/// let pikachu = TestPokemonBuilder::new(Species::Pikachu, 39)
///     .with_fast_attack(0)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    species: Species,
    level: u8,
    variances: [u8; 3],
    name: Option<String>,
    fast_attack: Option<u8>,
    special_attack: Option<u8>,
}

impl TestPokemonBuilder {
    /// Creates a new builder for a given species and starting level, with zero variance.
    pub fn new(species: Species, level: u8) -> Self {
        Self {
            species,
            level,
            variances: [0; 3],
            name: None,
            fast_attack: None,
            special_attack: None,
        }
    }

    /// Attack, defense and stamina variances.
    pub fn with_variances(mut self, variances: [u8; 3]) -> Self {
        self.variances = variances;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Index into the species' fast attack pool.
    pub fn with_fast_attack(mut self, index: u8) -> Self {
        self.fast_attack = Some(index);
        self
    }

    /// Index into the species' special attack pool.
    pub fn with_special_attack(mut self, index: u8) -> Self {
        self.special_attack = Some(index);
        self
    }

    pub fn build(self) -> PokemonInst {
        self.build_with(&AttackResolver::default())
    }

    /// Builds the `PokemonInst`, choosing attacks through `resolver`.
    pub fn build_with(self, resolver: &AttackResolver) -> PokemonInst {
        let name = self.name.unwrap_or_else(|| self.species.name().to_string());
        let [attack, defense, stamina] = self.variances;
        let mut rng = StatRng::new_for_test(vec![self.level, attack, defense, stamina]);

        let mut pokemon = assert_ok(PokemonInst::from_species(self.species, &name, &mut rng));

        if let Some(index) = self.fast_attack {
            resolver.choose_fast_attack(&mut pokemon, &mut StatRng::new_for_test(vec![index]));
        }
        if let Some(index) = self.special_attack {
            resolver.choose_special_attack(&mut pokemon, &mut StatRng::new_for_test(vec![index]));
        }

        pokemon
    }
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: EngineResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
