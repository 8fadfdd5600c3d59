use crate::matchup::TypeGrid;
use crate::model::{MoveDetail, PokemonData};
use crate::vocab::{capitalize, label_of};

pub const POKEMON_NOT_FOUND: &str = "No se encontró el Pokémon.";
pub const TYPE_NOT_FOUND: &str = "No se encontró el tipo.";
pub const EVOLUTION_UNAVAILABLE: &str = "No se pudo obtener la evolución.";

/// Placeholder for a missing power or accuracy value.
pub const MISSING_VALUE: &str = "—";

/// One entry of the move list: full detail, or the bare name when that
/// move's detail fetch failed.
#[derive(Debug, Clone)]
pub enum MoveLine {
    Detailed(MoveDetail),
    NameOnly(String),
}

/// One entry of the search-by-type listing.
#[derive(Debug, Clone)]
pub struct TypeEntry {
    pub name: String,
    pub artwork: Option<String>,
}

/// Dashed API names become readable: "thunder-shock" -> "Thunder shock".
pub fn display_name(raw: &str) -> String {
    capitalize(&raw.replace('-', " "))
}

pub fn move_line(entry: &MoveLine) -> String {
    match entry {
        MoveLine::Detailed(detail) => {
            let power = detail
                .power
                .map(|p| p.to_string())
                .unwrap_or_else(|| MISSING_VALUE.to_string());
            let accuracy = detail
                .accuracy
                .map(|a| format!("{}%", a))
                .unwrap_or_else(|| MISSING_VALUE.to_string());
            format!(
                "{} ({}) – Potencia: {}, Precisión: {}",
                display_name(&detail.name),
                label_of(&detail.kind.name),
                power,
                accuracy
            )
        }
        MoveLine::NameOnly(name) => display_name(name),
    }
}

/// The species card: header, artwork links, move list, evolution section.
/// The type grid is a separate display surface, see `grid_table`.
pub fn species_card(
    pokemon: &PokemonData,
    moves: &[MoveLine],
    evolution_lines: &[String],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}  #{}\n", display_name(&pokemon.name), pokemon.id));

    let type_labels: Vec<String> = pokemon
        .types
        .iter()
        .map(|slot| label_of(&slot.kind.name))
        .collect();
    out.push_str(&format!("Tipo: {}\n", type_labels.join(", ")));

    let artwork = &pokemon.sprites.other.official_artwork;
    if let Some(url) = &artwork.front_default {
        out.push_str(&format!("Ilustración: {}\n", url));
    }
    if let Some(url) = &artwork.front_shiny {
        out.push_str(&format!("Shiny: {}\n", url));
    }

    if !moves.is_empty() {
        out.push_str("\nMovimientos principales:\n");
        for entry in moves {
            out.push_str(&format!("  - {}\n", move_line(entry)));
        }
    }

    out.push_str("\nEvolución:\n");
    for line in evolution_lines {
        out.push_str(&format!("  {}\n", line));
    }
    out
}

/// The fixed 18-row type table. Neutral cells get a dot instead of a
/// marking name.
pub fn grid_table(grid: &TypeGrid) -> String {
    let mut out = String::from("\nTabla de tipos:\n");
    for (type_id, marking) in grid {
        let mark = match marking {
            Some(m) => m.spanish(),
            None => "·",
        };
        out.push_str(&format!("  {:<10} {}\n", label_of(type_id), mark));
    }
    out
}

/// The search-by-type listing, capped upstream to the first entries of the
/// membership list.
pub fn type_listing(type_id: &str, entries: &[TypeEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Pokémon de tipo {}\n\n", label_of(type_id)));
    for entry in entries {
        match &entry.artwork {
            Some(url) => out.push_str(&format!("  - {}  {}\n", capitalize(&entry.name), url)),
            None => out.push_str(&format!("  - {}\n", capitalize(&entry.name))),
        }
    }
    out.push_str(&format!("\nMostrando los primeros {} Pokémon\n", entries.len()));
    out
}
