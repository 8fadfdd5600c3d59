use crate::model::DamageRelations;
use crate::vocab::TYPE_ORDER;
use std::collections::HashSet;

/// Highlight class a grid cell can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marking {
    Weak,
    Resist,
    Immune,
    /// The queried type itself in the search-by-type view.
    Highlight,
}

impl Marking {
    pub fn spanish(self) -> &'static str {
        match self {
            Marking::Weak => "débil",
            Marking::Resist => "resiste",
            Marking::Immune => "inmune",
            Marking::Highlight => "seleccionado",
        }
    }
}

/// Damage relations of one or two types unioned per category. Sets, so
/// duplicates from dual typing collapse.
#[derive(Debug, Clone, Default)]
pub struct AggregateRelations {
    pub weak: HashSet<String>,
    pub resist: HashSet<String>,
    pub immune: HashSet<String>,
}

impl AggregateRelations {
    pub fn merge(&mut self, relations: &DamageRelations) {
        self.weak
            .extend(relations.double_damage_from.iter().map(|t| t.name.clone()));
        self.resist
            .extend(relations.half_damage_from.iter().map(|t| t.name.clone()));
        self.immune
            .extend(relations.no_damage_from.iter().map(|t| t.name.clone()));
    }
}

/// One cell per canonical type, in `TYPE_ORDER`. `None` means neutral.
pub type TypeGrid = Vec<(&'static str, Option<Marking>)>;

/// Builds a fresh grid from the aggregate sets. When a type lands in more
/// than one set the first match wins, in the order immune, weak, resist.
pub fn resolve_grid(relations: &AggregateRelations) -> TypeGrid {
    TYPE_ORDER
        .iter()
        .map(|&t| {
            let marking = if relations.immune.contains(t) {
                Some(Marking::Immune)
            } else if relations.weak.contains(t) {
                Some(Marking::Weak)
            } else if relations.resist.contains(t) {
                Some(Marking::Resist)
            } else {
                None
            };
            (t, marking)
        })
        .collect()
}

/// Grid with only the queried type's cell marked, for the search-by-type
/// view.
pub fn highlight_cell(type_id: &str) -> TypeGrid {
    TYPE_ORDER
        .iter()
        .map(|&t| (t, (t == type_id).then_some(Marking::Highlight)))
        .collect()
}
