use dragons_bane::world::content::{FILLER_LOCATIONS, PATH_NAME};
use dragons_bane::world::{Position, WorldGrid, MEDALLIONS};

fn landmark_positions(grid: &WorldGrid) -> [Position; 3] {
    let c = grid.center();
    [
        Position::new(grid.width() as i32 - 2, c.y),
        Position::new(c.x, 1),
        Position::new(1, c.y),
    ]
}

#[test]
fn landmarks_hold_their_medallions_for_any_seed() {
    for seed in 0..20u64 {
        let grid = WorldGrid::generate_seeded(15, 15, seed);
        for (pos, medallion) in landmark_positions(&grid).iter().zip(MEDALLIONS) {
            let loc = grid.location(*pos).expect("landmark present");
            assert_eq!(loc.items()[0].name, medallion, "seed {} at {}", seed, pos);
            assert_eq!(loc.items()[0].value, 100);
            assert!(!loc.npcs().is_empty());
        }
    }
}

#[test]
fn village_centre_has_only_the_elder() {
    for seed in 0..20u64 {
        let grid = WorldGrid::generate_seeded(15, 15, seed);
        let village = grid.location(grid.center()).unwrap();
        assert!(village.has_sub_map);
        assert_eq!(village.npcs().len(), 1);
        assert_eq!(village.npcs()[0].name, "Village Elder");
        assert!(village.items().is_empty());
    }
}

#[test]
fn filler_cells_get_at_most_one_npc_and_item() {
    let grid = WorldGrid::generate_seeded(15, 15, 11);
    let landmarks = landmark_positions(&grid);
    let filler_names: Vec<&str> = FILLER_LOCATIONS.iter().map(|(n, _)| *n).collect();
    for (pos, loc) in grid.locations() {
        if pos == grid.center() || landmarks.contains(&pos) {
            continue;
        }
        assert!(
            loc.name == PATH_NAME || filler_names.contains(&loc.name.as_str()),
            "unexpected location {} at {}",
            loc.name,
            pos
        );
        assert!(loc.npcs().len() <= 1);
        assert!(loc.items().len() <= 1);
        assert!(!loc.has_sub_map);
    }
}

#[test]
fn only_the_village_opens_a_sub_map() {
    let grid = WorldGrid::generate_seeded(15, 15, 5);
    let subs: Vec<Position> = grid
        .locations()
        .filter(|(_, l)| l.has_sub_map)
        .map(|(p, _)| p)
        .collect();
    assert_eq!(subs, vec![grid.center()]);
}

#[test]
fn configured_size_limits_generate_cleanly() {
    for (w, h) in [(5, 5), (64, 64), (5, 20), (31, 9)] {
        let grid = WorldGrid::generate_seeded(w, h, 8);
        assert_eq!((grid.width(), grid.height()), (w, h));
        let c = grid.center();
        for x in 0..w as i32 {
            assert!(grid.is_passable(Position::new(x, c.y)));
        }
        for y in 0..h as i32 {
            assert!(grid.is_passable(Position::new(c.x, y)));
        }
        for pos in landmark_positions(&grid) {
            assert!(grid.location(pos).is_some(), "{}x{} missing landmark at {}", w, h, pos);
        }
    }
}

#[test]
fn different_seeds_differ_somewhere() {
    let a = WorldGrid::generate_seeded(15, 15, 1);
    let b = WorldGrid::generate_seeded(15, 15, 2);
    assert_ne!(a, b);
}
