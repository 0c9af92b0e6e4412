use anyhow::Result;
use log::{info, warn};
use pokemon_cp_engine::{
    rank, AttackResolver, EngineConfig, PokemonInst, RankingMode, Species, StatRng, MAX_LEVEL,
};
use std::env;
use std::path::Path;
use strum::IntoEnumIterator;

fn main() -> Result<()> {
    env_logger::init();

    // Optional first argument: path to a RON engine config
    let config = match env::args().nth(1) {
        Some(path) => match EngineConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                warn!("Falling back to default config: {}", e);
                EngineConfig::default()
            }
        },
        None => EngineConfig::default(),
    };
    info!("Engine config: {:?}", config);

    let resolver = AttackResolver::new(config);
    let mut rng = StatRng::new_random();

    // Example 1: Roll one of every species and teach them attacks
    let mut party = Vec::new();
    for species in Species::iter() {
        let mut pokemon = PokemonInst::from_species(species, species.name(), &mut rng)?;
        resolver.choose_fast_attack(&mut pokemon, &mut rng);
        resolver.choose_special_attack(&mut pokemon, &mut rng);
        party.push(pokemon);
    }
    party[0].set_name("Sprout")?;

    println!("Rolled {} Pokemon", party.len());
    println!();

    // Example 2: One exchange of blows
    let (left, right) = party.split_at_mut(3);
    let charmander = &mut right[0];
    let bulbasaur = &mut left[0];
    println!("{}", resolver.perform_fast_attack(charmander, bulbasaur)?);
    println!("{}", resolver.perform_special_attack(bulbasaur, charmander)?);
    println!(
        "  {} HP: {}, {} HP: {}",
        bulbasaur.name(),
        bulbasaur.hp(),
        charmander.name(),
        charmander.hp()
    );
    println!();

    // Example 3: Level up until the cap
    if let Some(pikachu) = party.last_mut() {
        let (start_level, start_cp) = (pikachu.level(), pikachu.cp());
        while pikachu.level() < MAX_LEVEL {
            pikachu.level_up();
        }
        println!(
            "{} leveled from {} (CP {}) to {} (CP {})",
            pikachu.name(),
            start_level,
            start_cp,
            pikachu.level(),
            pikachu.cp()
        );
        println!();
    }

    // Example 4: Every ranking mode
    for mode in RankingMode::ALL {
        rank(mode, &mut party);
        println!("Ranked by {}:", mode);
        for pokemon in &party {
            println!(
                "  #{:03} {:<12} HP {:>4}  CP {:>5}",
                pokemon.number(),
                pokemon.name(),
                pokemon.hp(),
                pokemon.cp()
            );
        }
        println!();
    }

    if let Some(strongest) = party.last() {
        println!("Strongest:\n{}", strongest);
    }

    Ok(())
}
