//! Terminal Pokédex over the PokeAPI REST service: species cards with move
//! lists, type-matchup highlighting on the fixed 18-type grid, and
//! evolution chains, with Spanish display vocabulary.

pub mod client;
pub mod display;
pub mod evolution;
pub mod matchup;
pub mod model;
pub mod render;
pub mod vocab;

pub use crate::client::PokeApiClient;

use crate::display::{DisplayState, Rendering};
use crate::evolution::EvolutionNode;
use crate::matchup::AggregateRelations;
use crate::model::PokemonData;
use crate::render::{MoveLine, TypeEntry};
use futures::future;
use std::io::Write as _;

/// How many moves of a species are looked up in detail.
pub const DEFAULT_MOVE_LIMIT: usize = 10;
/// How many members of a type the search-by-type listing shows.
pub const TYPE_LISTING_LIMIT: usize = 40;

#[derive(Debug, Clone)]
pub struct CliOptions {
    /// One-shot query; `None` opens the interactive prompt.
    pub query: Option<String>,
    pub base_url: String,
    pub move_limit: usize,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            query: None,
            base_url: client::DEFAULT_BASE_URL.to_string(),
            move_limit: DEFAULT_MOVE_LIMIT,
        }
    }
}

pub async fn run(opts: CliOptions) -> anyhow::Result<()> {
    let api = PokeApiClient::with_base_url(&opts.base_url);
    let mut display = DisplayState::new();

    match &opts.query {
        Some(query) => {
            search(&api, &mut display, query, opts.move_limit).await;
            print_display(&display);
            Ok(())
        }
        None => interactive_loop(&api, &mut display, opts.move_limit).await,
    }
}

async fn interactive_loop(
    api: &PokeApiClient,
    display: &mut DisplayState,
    move_limit: usize,
) -> anyhow::Result<()> {
    println!("Pokédex: escribe un nombre o un tipo, 'limpiar' para borrar, 'salir' para terminar.");
    let mut input = String::new();
    loop {
        print!("pokédex> ");
        std::io::stdout().flush()?;
        input.clear();
        if std::io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim().to_string();
        match line.as_str() {
            "" => continue,
            "salir" | "quit" => break,
            "limpiar" | "clear" => {
                display.clear();
                continue;
            }
            _ => {}
        }
        search(api, display, &line, move_limit).await;
        print_display(display);
    }
    Ok(())
}

fn print_display(display: &DisplayState) {
    print!("{}", display.fragment());
    if !display.grid().is_empty() {
        print!("{}", render::grid_table(display.grid()));
    }
}

/// One lookup: resolves the query to a type or a pokemon, fetches whatever
/// that needs, and applies the rendering unless a later query has been
/// issued in the meantime.
pub async fn search(api: &PokeApiClient, display: &mut DisplayState, raw_query: &str, move_limit: usize) {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return;
    }
    let token = display.begin_query();

    let rendering = match vocab::english_id(&query) {
        Some(type_id) => type_search(api, type_id).await,
        None => pokemon_search(api, &query, move_limit).await,
    };
    display.apply(token, rendering);
}

fn normalize_query(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

async fn pokemon_search(api: &PokeApiClient, query: &str, move_limit: usize) -> Rendering {
    // A transport failure and a 404 read the same to the user; only the log
    // tells them apart.
    let pokemon = match api.fetch_pokemon(query).await {
        Ok(Some(data)) => data,
        Ok(None) => return Rendering::message(render::POKEMON_NOT_FOUND),
        Err(err) => {
            log::warn!("pokemon lookup for '{}' failed: {:#}", query, err);
            return Rendering::message(render::POKEMON_NOT_FOUND);
        }
    };

    let moves = fetch_move_lines(api, &pokemon, move_limit).await;

    let mut relations = AggregateRelations::default();
    for slot in &pokemon.types {
        match api.fetch_type(&slot.kind.name).await {
            Ok(Some(type_data)) => relations.merge(&type_data.damage_relations),
            Ok(None) => log::warn!("type '{}' not found upstream", slot.kind.name),
            Err(err) => log::warn!("type lookup for '{}' failed: {:#}", slot.kind.name, err),
        }
    }
    let grid = matchup::resolve_grid(&relations);

    let evolution_lines = match api.fetch_evolution_chain(pokemon.id).await {
        Ok(chain) => evolution::transition_lines(&EvolutionNode::from_chain(&chain.chain)),
        Err(err) => {
            log::warn!("evolution chain for '{}' failed: {:#}", pokemon.name, err);
            vec![render::EVOLUTION_UNAVAILABLE.to_string()]
        }
    };

    Rendering {
        fragment: render::species_card(&pokemon, &moves, &evolution_lines),
        grid,
    }
}

/// Details for the first `limit` moves, fetched concurrently. A failing
/// fetch degrades that one move to a name-only entry.
async fn fetch_move_lines(api: &PokeApiClient, pokemon: &PokemonData, limit: usize) -> Vec<MoveLine> {
    let fetches = pokemon.moves.iter().take(limit).map(|slot| async move {
        match api.fetch_move(&slot.entry.url).await {
            Ok(detail) => MoveLine::Detailed(detail),
            Err(err) => {
                log::warn!("move detail for '{}' failed: {:#}", slot.entry.name, err);
                MoveLine::NameOnly(slot.entry.name.clone())
            }
        }
    });
    future::join_all(fetches).await
}

async fn type_search(api: &PokeApiClient, type_id: &'static str) -> Rendering {
    let type_data = match api.fetch_type(type_id).await {
        Ok(Some(data)) => data,
        Ok(None) => return Rendering::message(render::TYPE_NOT_FOUND),
        Err(err) => {
            log::warn!("type lookup for '{}' failed: {:#}", type_id, err);
            return Rendering::message(render::TYPE_NOT_FOUND);
        }
    };

    // Entries load one by one; a failing record still lists its name.
    let mut entries = Vec::new();
    for member in type_data.pokemon.iter().take(TYPE_LISTING_LIMIT) {
        let artwork = match api.fetch_pokemon_at(&member.pokemon.url).await {
            Ok(data) => data.sprites.other.official_artwork.front_default,
            Err(err) => {
                log::warn!("member lookup for '{}' failed: {:#}", member.pokemon.name, err);
                None
            }
        };
        entries.push(TypeEntry {
            name: member.pokemon.name.clone(),
            artwork,
        });
    }

    Rendering {
        fragment: render::type_listing(type_id, &entries),
        grid: matchup::highlight_cell(type_id),
    }
}
