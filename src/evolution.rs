use crate::model::ChainLink;
use crate::vocab::capitalize;

/// Level sentinel rendered when the API supplies no trigger level, e.g.
/// for stone, trade, or friendship evolutions.
pub const UNKNOWN_LEVEL: &str = "???";

/// Shallow evolution tree: root, evolutions, second-stage evolutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    pub species: String,
    pub min_level: Option<u32>,
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Builds the tree down to grandchildren; deeper links are not walked.
    /// Only the first evolution-detail entry per transition is considered.
    pub fn from_chain(chain: &ChainLink) -> Self {
        Self {
            species: chain.species.name.clone(),
            min_level: first_level(chain),
            children: chain
                .evolves_to
                .iter()
                .map(|child| EvolutionNode {
                    species: child.species.name.clone(),
                    min_level: first_level(child),
                    children: child
                        .evolves_to
                        .iter()
                        .map(|grandchild| EvolutionNode {
                            species: grandchild.species.name.clone(),
                            min_level: first_level(grandchild),
                            children: Vec::new(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

fn first_level(link: &ChainLink) -> Option<u32> {
    link.evolution_details.first().and_then(|d| d.min_level)
}

/// Ordered transition lines for the tree: root to each child, then that
/// child to each of its children. A childless root yields the single
/// no-evolutions line.
pub fn transition_lines(root: &EvolutionNode) -> Vec<String> {
    if root.children.is_empty() {
        return vec![format!("{} no tiene evoluciones.", capitalize(&root.species))];
    }

    let mut lines = Vec::new();
    for child in &root.children {
        lines.push(transition(&root.species, child));
        for grandchild in &child.children {
            lines.push(transition(&child.species, grandchild));
        }
    }
    lines
}

fn transition(from: &str, to: &EvolutionNode) -> String {
    let level = match to.min_level {
        Some(level) => level.to_string(),
        None => UNKNOWN_LEVEL.to_string(),
    };
    format!("{} ➜ {} (Nivel {})", capitalize(from), capitalize(&to.species), level)
}
