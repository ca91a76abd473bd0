//! Assembles the display summary from a detail record and its evolution
//! chain, and renders it as the fixed text block.

use std::fmt;

use crate::model::{EvolutionChain, Pokemon};

/// Display object derived once from the fetched records.
#[derive(Debug)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub weight: u32,
    pub height: u32,
    /// Type names in the order the API lists them.
    pub types: Vec<String>,
    /// Game version names in the order the API lists them.
    pub games: Vec<String>,
    /// Species names along the chain, root first, always following the
    /// first listed branch.
    pub evolutions: Vec<String>,
}

impl PokemonSummary {
    /// Copies the scalar fields, resolves the type and game reference
    /// lists to their names, and flattens the evolution tree.
    pub fn new(pokemon: &Pokemon, evolution: &EvolutionChain) -> Self {
        let types = pokemon
            .types
            .iter()
            .map(|slot| slot.type_.name.clone())
            .collect();
        let games = pokemon
            .game_indices
            .iter()
            .map(|entry| entry.version.name.clone())
            .collect();

        // Iterative first-child descent; alternate branches are ignored.
        let mut evolutions = Vec::new();
        let mut link = &evolution.chain;
        loop {
            evolutions.push(link.species.name.clone());
            match link.evolves_to.first() {
                Some(next) => link = next,
                None => break,
            }
        }

        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            weight: pokemon.weight,
            height: pokemon.height,
            types,
            games,
            evolutions,
        }
    }
}

impl fmt::Display for PokemonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(20);
        writeln!(f, "{}", rule)?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Nombre: {}", self.name)?;
        writeln!(f, "Peso: {}", self.weight)?;
        writeln!(f, "Altura: {}", self.height)?;
        writeln!(f, "Tipos: {}", self.types.join(","))?;
        writeln!(f, "Juegos: {}", self.games.join(","))?;
        writeln!(f, "Evoluciones: {}", self.evolutions.join(","))?;
        write!(f, "{}", rule)
    }
}
