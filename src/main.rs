use anyhow::Result;
use clap::Parser;
use pokefetch::data::PokeClient;
use pokefetch::summary::PokemonSummary;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Pokémon name or Pokédex number to look up
    #[arg(default_value = "pikachu")]
    pokemon: String,
}

fn run(args: &Args) -> Result<()> {
    let client = PokeClient::new()?;

    // The second and third calls depend on the previous responses, so the
    // sequence cannot fan out.
    let pokemon = client.fetch_pokemon(&args.pokemon)?;
    let species = client.fetch_species(&args.pokemon)?;
    let evolution = client.fetch_evolution_chain(&species.evolution_chain.url)?;

    let summary = PokemonSummary::new(&pokemon, &evolution);
    println!("{}", summary);

    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("{:?}", err);
    }
}
