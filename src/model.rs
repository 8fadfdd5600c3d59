use serde::Deserialize;

/// Name + URL pair used all over the PokeAPI schema to link resources.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub entry: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

/// The slice of a `/pokemon/{name|id}` record this tool consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonData {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

/// Move detail fetched per move URL. Power and accuracy are null for
/// status moves.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NamedResource,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
}

/// Per defending type: the attacking types it takes double, half, and no
/// damage from. The three lists are disjoint in the source data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DamageRelations {
    #[serde(default)]
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeMemberSlot {
    pub pokemon: NamedResource,
}

/// The slice of a `/type/{name}` record this tool consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeData {
    pub name: String,
    #[serde(default)]
    pub damage_relations: DamageRelations,
    #[serde(default)]
    pub pokemon: Vec<TypeMemberSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceLink {
    pub url: String,
}

/// Species record, consumed only for the link to its evolution chain.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesData {
    #[serde(default)]
    pub evolution_chain: Option<ResourceLink>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvolutionDetail {
    #[serde(default)]
    pub min_level: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChainData {
    pub chain: ChainLink,
}
