use pokedex_lookup::matchup::{
    highlight_cell, resolve_grid, AggregateRelations, Marking, TypeGrid,
};
use pokedex_lookup::model::{DamageRelations, NamedResource};

fn named(names: &[&str]) -> Vec<NamedResource> {
    names
        .iter()
        .map(|n| NamedResource {
            name: n.to_string(),
            url: String::new(),
        })
        .collect()
}

fn relations(weak: &[&str], resist: &[&str], immune: &[&str]) -> DamageRelations {
    DamageRelations {
        double_damage_from: named(weak),
        half_damage_from: named(resist),
        no_damage_from: named(immune),
    }
}

fn marking_of(grid: &TypeGrid, type_id: &str) -> Option<Marking> {
    grid.iter()
        .find(|(id, _)| *id == type_id)
        .expect("type must be in the grid")
        .1
}

#[test]
fn grid_covers_all_18_cells_in_fixed_order() {
    let grid = resolve_grid(&AggregateRelations::default());
    assert_eq!(grid.len(), 18);
    assert_eq!(grid[0].0, "normal");
    assert_eq!(grid[17].0, "fairy");
    assert!(grid.iter().all(|(_, marking)| marking.is_none()));
}

#[test]
fn dual_type_aggregation_unions_with_dedup() {
    // water takes double from electric/grass, flying from electric/ice/rock.
    let mut agg = AggregateRelations::default();
    agg.merge(&relations(&["electric", "grass"], &[], &[]));
    agg.merge(&relations(&["electric", "ice", "rock"], &[], &[]));

    assert_eq!(agg.weak.len(), 4, "duplicate 'electric' must collapse");
    let grid = resolve_grid(&agg);
    for t in ["electric", "grass", "ice", "rock"] {
        assert_eq!(marking_of(&grid, t), Some(Marking::Weak));
    }
    assert_eq!(marking_of(&grid, "normal"), None);
}

#[test]
fn immune_wins_over_weak() {
    let mut agg = AggregateRelations::default();
    agg.merge(&relations(&["electric"], &[], &[]));
    agg.merge(&relations(&[], &[], &["electric"]));

    let grid = resolve_grid(&agg);
    assert_eq!(marking_of(&grid, "electric"), Some(Marking::Immune));
}

#[test]
fn weak_wins_over_resist() {
    // Dual typing can put the same attacker in both sets; no cancellation.
    let mut agg = AggregateRelations::default();
    agg.merge(&relations(&["grass"], &[], &[]));
    agg.merge(&relations(&[], &["grass"], &[]));

    let grid = resolve_grid(&agg);
    assert_eq!(marking_of(&grid, "grass"), Some(Marking::Weak));
}

#[test]
fn immune_wins_over_all_three() {
    let mut agg = AggregateRelations::default();
    agg.merge(&relations(&["ghost"], &["ghost"], &["ghost"]));

    let grid = resolve_grid(&agg);
    assert_eq!(marking_of(&grid, "ghost"), Some(Marking::Immune));
}

#[test]
fn each_resolution_starts_from_a_clean_grid() {
    let mut agg = AggregateRelations::default();
    agg.merge(&relations(&["fire"], &["water"], &[]));
    let first = resolve_grid(&agg);
    assert_eq!(marking_of(&first, "fire"), Some(Marking::Weak));

    let second = resolve_grid(&AggregateRelations::default());
    assert!(
        second.iter().all(|(_, marking)| marking.is_none()),
        "markings from a previous search must not leak"
    );
}

#[test]
fn highlight_cell_marks_only_the_queried_type() {
    let grid = highlight_cell("grass");
    assert_eq!(marking_of(&grid, "grass"), Some(Marking::Highlight));
    let marked = grid.iter().filter(|(_, m)| m.is_some()).count();
    assert_eq!(marked, 1);
}
