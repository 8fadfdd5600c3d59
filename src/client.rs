use crate::model::{EvolutionChainData, MoveDetail, PokemonData, SpeciesData, TypeData};
use anyhow::{anyhow, Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Read-only client for the four PokeAPI resource families this tool
/// consumes. No retries; a failed request surfaces as an error for the
/// caller to scope.
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Pokemon by name or numeric id. HTTP 404 maps to `Ok(None)`.
    pub async fn fetch_pokemon(&self, query: &str) -> Result<Option<PokemonData>> {
        self.get_json_opt(&format!("{}/pokemon/{}", self.base_url, query))
            .await
    }

    /// Pokemon record behind a resource URL, as linked from a type's
    /// membership list.
    pub async fn fetch_pokemon_at(&self, url: &str) -> Result<PokemonData> {
        self.get_json(url).await
    }

    /// Move detail behind the URL carried by a pokemon's move slot.
    pub async fn fetch_move(&self, url: &str) -> Result<MoveDetail> {
        self.get_json(url).await
    }

    /// Type record with damage relations and member list. 404 maps to
    /// `Ok(None)`.
    pub async fn fetch_type(&self, name: &str) -> Result<Option<TypeData>> {
        self.get_json_opt(&format!("{}/type/{}", self.base_url, name))
            .await
    }

    /// Two-step lookup: the species record only links the evolution chain,
    /// which lives at a separate resource.
    pub async fn fetch_evolution_chain(&self, species_id: u32) -> Result<EvolutionChainData> {
        let species: SpeciesData = self
            .get_json(&format!("{}/pokemon-species/{}", self.base_url, species_id))
            .await?;
        let link = species
            .evolution_chain
            .ok_or_else(|| anyhow!("species {} links no evolution chain", species_id))?;
        self.get_json(&link.url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;
        response
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?
            .json::<T>()
            .await
            .with_context(|| format!("failed to decode response from {}", url))
    }

    async fn get_json_opt<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let data = response
            .error_for_status()
            .with_context(|| format!("{} returned an error status", url))?
            .json::<T>()
            .await
            .with_context(|| format!("failed to decode response from {}", url))?;
        Ok(Some(data))
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}
