//! Typed response shapes for the PokéAPI payloads consumed by the CLI.

use serde::Deserialize;

/// A name/URL pair, the API's universal reference to another resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// The resource's lowercase slug (e.g., "electric", "red").
    pub name: String,
    /// Absolute URL of the referenced resource.
    pub url: String,
}

/// One slot in a Pokémon's type list.
#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

/// One entry in a Pokémon's game appearance list.
#[derive(Debug, Deserialize)]
pub struct GameIndex {
    pub version: NamedResource,
}

/// The detail payload from `/pokemon/{slug}`.
///
/// Only the fields the summary needs are modeled; everything else in the
/// (very large) upstream payload is ignored during deserialization.
#[derive(Debug, Deserialize)]
pub struct Pokemon {
    /// National Pokédex number.
    pub id: u32,
    pub name: String,
    /// Weight in hectograms, as served by the API.
    pub weight: u32,
    /// Height in decimeters, as served by the API.
    pub height: u32,
    pub types: Vec<TypeSlot>,
    pub game_indices: Vec<GameIndex>,
}

/// The species payload from `/pokemon-species/{slug}`. Only the pointer to
/// the evolution chain is consumed.
#[derive(Debug, Deserialize)]
pub struct PokemonSpecies {
    pub evolution_chain: EvolutionChainRef,
}

/// Reference to an evolution-chain resource.
#[derive(Debug, Deserialize)]
pub struct EvolutionChainRef {
    pub url: String,
}

/// One stage of an evolution chain. Each node owns its possible next stages.
#[derive(Debug, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    pub evolves_to: Vec<ChainLink>,
}

/// The payload behind a species record's evolution-chain URL.
#[derive(Debug, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}
