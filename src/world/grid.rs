//! The 2D grid of optional locations that makes up a map.
//!
//! The world grid is generated once per session from an explicit RNG so a
//! seed fully determines its contents. Sub-maps (currently only the village)
//! are fixed layouts rebuilt every time the player enters them.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::content::{
    Landmark, EXTRA_PATHS, FILLER_LOCATIONS, ITEM_CHANCE, LOCATION_CHANCE, MOUNTAIN_PEAK,
    NPC_CHANCE, NPC_NAMES, PATH_DESC, PATH_NAME, RANDOM_ITEMS, SACRED_GROVE, VILLAGE_DESC,
    VILLAGE_ELDER, VILLAGE_NAME, WATER_SHRINE,
};
use super::item::Item;
use super::location::{Location, Npc};
use super::position::Position;

/// Side length of the village sub-map.
pub const VILLAGE_SIZE: usize = 5;
/// Where the player lands when entering the village.
pub const VILLAGE_ENTRY: Position = Position::new(2, 2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<Location>>, // row-major height*width
    is_sub_map: bool,
    parent_position: Position,
}

impl WorldGrid {
    /// A grid with no locations at all.
    pub fn empty(width: usize, height: usize) -> Self {
        WorldGrid {
            width,
            height,
            cells: vec![None; width * height],
            is_sub_map: false,
            parent_position: Position::default(),
        }
    }

    /// Generates a world grid: centre cross of paths, random connectors,
    /// the village and three medallion landmarks, random filler, then NPCs
    /// and items.
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut grid = WorldGrid::empty(width, height);
        grid.carve_paths(rng);

        let center = grid.center();
        grid.set_location(
            center,
            Location::new(VILLAGE_NAME, VILLAGE_DESC).with_sub_map(),
        );
        let w = width as i32;
        grid.place_landmark(Position::new(w - 2, center.y), &SACRED_GROVE);
        grid.place_landmark(Position::new(center.x, 1), &WATER_SHRINE);
        grid.place_landmark(Position::new(1, center.y), &MOUNTAIN_PEAK);

        grid.fill_random_locations(rng);
        grid.populate(rng, center);

        if let Some(village) = grid.location_mut(center) {
            village.add_npc(Npc::new(VILLAGE_ELDER));
        }
        debug!(
            "generated {}x{} world with {} locations",
            width,
            height,
            grid.location_count()
        );
        grid
    }

    pub fn generate_seeded(width: usize, height: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(width, height, &mut rng)
    }

    /// Builds the fixed village layout. `parent_position` is the world cell
    /// the player returns to on exit.
    pub fn create_village_map(parent_position: Position) -> Self {
        let mut village = WorldGrid::empty(VILLAGE_SIZE, VILLAGE_SIZE);
        village.is_sub_map = true;
        village.parent_position = parent_position;

        village.set_location(
            VILLAGE_ENTRY,
            Location::new("Village Square", "The heart of the village, where people gather."),
        );
        let mut smith = Location::new("Blacksmith", "The sound of hammering fills the air.");
        smith.add_npc(Npc::new("Master Smith"));
        village.set_location(Position::new(1, 2), smith);

        let mut healer = Location::new("Healer's Hut", "A small hut filled with herbs and potions.");
        healer.add_npc(Npc::new("Wise Healer"));
        village.set_location(Position::new(3, 2), healer);

        let mut lane = Location::new(
            "Village Lane",
            "A narrow lane behind the square, lined with market stalls.",
        );
        lane.add_item(Item::new(
            "Health Potion",
            "Restores your health when consumed.",
            30,
        ));
        village.set_location(Position::new(2, 1), lane);
        village
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_sub_map(&self) -> bool {
        self.is_sub_map
    }

    /// Only meaningful for sub-maps.
    pub fn parent_position(&self) -> Position {
        self.parent_position
    }

    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && (pos.x as usize) < self.width && pos.y >= 0 && (pos.y as usize) < self.height
    }

    fn idx(&self, pos: Position) -> Option<usize> {
        if self.is_valid_position(pos) {
            Some(pos.y as usize * self.width + pos.x as usize)
        } else {
            None
        }
    }

    pub fn location(&self, pos: Position) -> Option<&Location> {
        let i = self.idx(pos)?;
        self.cells[i].as_ref()
    }

    pub fn location_mut(&mut self, pos: Position) -> Option<&mut Location> {
        let i = self.idx(pos)?;
        self.cells[i].as_mut()
    }

    /// Places a location, replacing whatever was there. Out-of-bounds
    /// positions are ignored and reported with `false`.
    pub fn set_location(&mut self, pos: Position, location: Location) -> bool {
        match self.idx(pos) {
            Some(i) => {
                self.cells[i] = Some(location);
                true
            }
            None => false,
        }
    }

    pub fn is_passable(&self, pos: Position) -> bool {
        self.location(pos).is_some()
    }

    /// Explains why `pos` cannot be entered.
    pub fn boundary_message(&self, pos: Position) -> String {
        let reason = if pos.x < 0 {
            "You've reached the western boundary of the known world."
        } else if pos.x >= self.width as i32 {
            "You've reached the eastern boundary of the known world."
        } else if pos.y < 0 {
            "You've reached the northern boundary of the known world."
        } else if pos.y >= self.height as i32 {
            "You've reached the southern boundary of the known world."
        } else {
            "This path is blocked."
        };
        format!("You cannot go that way: {}", reason)
    }

    /// All populated cells in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = (Position, &Location)> + '_ {
        let w = self.width;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|loc| (Position::new((i % w) as i32, (i / w) as i32), loc))
        })
    }

    pub fn location_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    fn carve_paths<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let center = self.center();
        for x in 0..self.width as i32 {
            self.set_location(Position::new(x, center.y), path());
        }
        for y in 0..self.height as i32 {
            self.set_location(Position::new(center.x, y), path());
        }
        if self.width == 0 || self.height == 0 {
            return;
        }
        for _ in 0..EXTRA_PATHS {
            let from = Position::new(
                rng.gen_range(0..self.width) as i32,
                rng.gen_range(0..self.height) as i32,
            );
            let to = Position::new(
                rng.gen_range(0..self.width) as i32,
                rng.gen_range(0..self.height) as i32,
            );
            self.carve_path_between(from, to);
        }
    }

    /// Walks from `from` to `to` one axis step at a time (x first), turning
    /// every empty cell on the way into a path.
    fn carve_path_between(&mut self, from: Position, to: Position) {
        let mut cur = from;
        loop {
            if !self.is_passable(cur) {
                self.set_location(cur, path());
            }
            if cur == to {
                break;
            }
            if cur.x != to.x {
                cur.x += (to.x - cur.x).signum();
            } else {
                cur.y += (to.y - cur.y).signum();
            }
        }
    }

    fn place_landmark(&mut self, pos: Position, landmark: &Landmark) {
        let mut loc = Location::new(landmark.name, landmark.description);
        let (name, desc, value) = landmark.medallion;
        loc.add_item(Item::new(name, desc, value));
        loc.add_npc(Npc::new(landmark.npc));
        if !self.set_location(pos, loc) {
            debug!("landmark {} at {} is outside the grid", landmark.name, pos);
        }
    }

    // Column-major fill order.
    fn fill_random_locations<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for x in 0..self.width as i32 {
            for y in 0..self.height as i32 {
                let pos = Position::new(x, y);
                if self.is_passable(pos) || rng.gen_range(0..100) >= LOCATION_CHANCE {
                    continue;
                }
                let (name, desc) = FILLER_LOCATIONS[rng.gen_range(0..FILLER_LOCATIONS.len())];
                self.set_location(pos, Location::new(name, desc));
            }
        }
    }

    fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R, center: Position) {
        for x in 0..self.width as i32 {
            for y in 0..self.height as i32 {
                let pos = Position::new(x, y);
                if pos == center {
                    continue;
                }
                let Some(loc) = self.location_mut(pos) else {
                    continue;
                };
                if rng.gen_range(0..100) < NPC_CHANCE {
                    let name = NPC_NAMES[rng.gen_range(0..NPC_NAMES.len())];
                    loc.add_npc(Npc::new(name));
                }
                if rng.gen_range(0..100) < ITEM_CHANCE {
                    loc.add_item(random_item(rng));
                }
            }
        }
    }
}

fn path() -> Location {
    Location::new(PATH_NAME, PATH_DESC)
}

fn random_item<R: Rng + ?Sized>(rng: &mut R) -> Item {
    let (name, desc, value) = RANDOM_ITEMS[rng.gen_range(0..RANDOM_ITEMS.len())];
    Item::new(name, desc, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::content::MEDALLIONS;

    #[test]
    fn centre_cross_is_fully_walkable() {
        let grid = WorldGrid::generate_seeded(15, 15, 42);
        let c = grid.center();
        for i in 0..15 {
            assert!(grid.is_passable(Position::new(i, c.y)), "row gap at x={}", i);
            assert!(grid.is_passable(Position::new(c.x, i)), "column gap at y={}", i);
        }
    }

    #[test]
    fn landmarks_sit_at_fixed_offsets() {
        let grid = WorldGrid::generate_seeded(15, 15, 7);
        let village = grid.location(Position::new(7, 7)).unwrap();
        assert_eq!(village.name, VILLAGE_NAME);
        assert!(village.has_sub_map);
        assert!(village.npcs().iter().any(|n| n.name == VILLAGE_ELDER));
        assert!(village.items().is_empty());

        let grove = grid.location(Position::new(13, 7)).unwrap();
        assert_eq!(grove.name, "Sacred Grove");
        assert_eq!(grove.items()[0].name, MEDALLIONS[0]);
        assert_eq!(grove.npcs()[0].name, "Forest Spirit");

        let shrine = grid.location(Position::new(7, 1)).unwrap();
        assert_eq!(shrine.items()[0].name, MEDALLIONS[1]);

        let peak = grid.location(Position::new(1, 7)).unwrap();
        assert_eq!(peak.items()[0].name, MEDALLIONS[2]);
        assert!(peak.is_hazardous());
    }

    #[test]
    fn same_seed_same_world() {
        let a = WorldGrid::generate_seeded(15, 15, 99);
        let b = WorldGrid::generate_seeded(15, 15, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn carved_path_connects_endpoints() {
        let mut grid = WorldGrid::empty(6, 6);
        grid.carve_path_between(Position::new(0, 0), Position::new(4, 3));
        for x in 0..=4 {
            assert!(grid.is_passable(Position::new(x, 0)));
        }
        for y in 0..=3 {
            assert!(grid.is_passable(Position::new(4, y)));
        }
        assert_eq!(grid.location_count(), 8);
    }

    #[test]
    fn boundary_messages_name_the_edge() {
        let grid = WorldGrid::empty(5, 5);
        assert!(grid.boundary_message(Position::new(-1, 2)).contains("western"));
        assert!(grid.boundary_message(Position::new(5, 2)).contains("eastern"));
        assert!(grid.boundary_message(Position::new(2, -1)).contains("northern"));
        assert!(grid.boundary_message(Position::new(2, 5)).contains("southern"));
        assert!(grid.boundary_message(Position::new(2, 2)).contains("blocked"));
    }

    #[test]
    fn village_map_is_fixed() {
        let v = WorldGrid::create_village_map(Position::new(7, 7));
        assert!(v.is_sub_map());
        assert_eq!(v.parent_position(), Position::new(7, 7));
        assert_eq!((v.width(), v.height()), (VILLAGE_SIZE, VILLAGE_SIZE));
        assert_eq!(v.location(VILLAGE_ENTRY).unwrap().name, "Village Square");
        assert_eq!(v.location(Position::new(1, 2)).unwrap().npcs()[0].name, "Master Smith");
        assert_eq!(v.location(Position::new(3, 2)).unwrap().npcs()[0].name, "Wise Healer");
        assert_eq!(
            v.location(Position::new(2, 1)).unwrap().items()[0].name,
            "Health Potion"
        );
        assert_eq!(v, WorldGrid::create_village_map(Position::new(7, 7)));
    }

    #[test]
    fn tiny_grids_do_not_panic() {
        for (w, h) in [(0, 0), (1, 1), (2, 3)] {
            let g = WorldGrid::generate_seeded(w, h, 1);
            assert_eq!(g.width(), w);
        }
    }
}
