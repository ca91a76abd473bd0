//! Blocking PokéAPI client: one generic fetch-and-parse wrapper plus the
//! three endpoint operations the summary pipeline needs.

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;

use crate::model::{EvolutionChain, Pokemon, PokemonSpecies};

/// Public PokéAPI v2 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the PokéAPI resources the CLI consumes.
pub struct PokeClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl PokeClient {
    /// Creates a client against the public PokéAPI.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against an alternate base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::blocking::Client::builder().build()?,
        })
    }

    /// Fetches the detail record for a Pokémon by name or Pokédex number.
    pub fn fetch_pokemon(&self, slug: &str) -> Result<Pokemon> {
        self.fetch_json(&self.pokemon_url(slug))
    }

    /// Fetches the species record, which carries the evolution-chain URL.
    pub fn fetch_species(&self, slug: &str) -> Result<PokemonSpecies> {
        self.fetch_json(&self.species_url(slug))
    }

    /// Fetches an evolution chain from the URL found in a species record.
    pub fn fetch_evolution_chain(&self, url: &str) -> Result<EvolutionChain> {
        self.fetch_json(url)
    }

    fn pokemon_url(&self, slug: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, slug)
    }

    fn species_url(&self, slug: &str) -> String {
        format!("{}/pokemon-species/{}", self.base_url, slug)
    }

    fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.http.get(url).send()?;
        if !response.status().is_success() {
            bail!("failed to fetch {}: HTTP {}", url, response.status());
        }
        let text = response.text()?;
        let parsed = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse response from {}", url))?;
        Ok(parsed)
    }
}
