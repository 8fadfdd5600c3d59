use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fixed order of the 18 canonical type identifiers, as laid out in the
/// comparison grid.
pub const TYPE_ORDER: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

static SPANISH_LABELS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "normal" => "Normal",
    "fire" => "Fuego",
    "water" => "Agua",
    "electric" => "Eléctrico",
    "grass" => "Planta",
    "ice" => "Hielo",
    "fighting" => "Lucha",
    "poison" => "Veneno",
    "ground" => "Tierra",
    "flying" => "Volador",
    "psychic" => "Psíquico",
    "bug" => "Bicho",
    "rock" => "Roca",
    "ghost" => "Fantasma",
    "dragon" => "Dragón",
    "dark" => "Siniestro",
    "steel" => "Acero",
    "fairy" => "Hada",
};

// Lowercased label -> canonical id, derived once from the table above.
static LABEL_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    SPANISH_LABELS
        .entries()
        .map(|(id, label)| (label.to_lowercase(), *id))
        .collect()
});

/// Spanish label for a canonical type id. Unrecognized ids are echoed back
/// capitalized instead of failing, so upstream vocabulary additions still
/// render something sensible.
pub fn label_of(id: &str) -> String {
    match SPANISH_LABELS.get(id) {
        Some(label) => (*label).to_string(),
        None => capitalize(id),
    }
}

/// Canonical id for user input in either vocabulary, case-insensitive.
/// Tries the canonical ids first, then the Spanish labels.
pub fn english_id(input: &str) -> Option<&'static str> {
    let query = input.trim().to_lowercase();
    if let Some(id) = SPANISH_LABELS.get_key(query.as_str()) {
        return Some(*id);
    }
    LABEL_INDEX.get(query.as_str()).copied()
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
