use super::grid::WorldGrid;

/// Grids the player has stepped out of, most recent on top.
///
/// An empty stack means the player is on the world grid. Grids are owned, so
/// popping a sub-map's parent discards the sub-map for good.
#[derive(Debug, Clone, Default)]
pub struct NavigationStack {
    grids: Vec<WorldGrid>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, grid: WorldGrid) {
        self.grids.push(grid);
    }

    pub fn pop(&mut self) -> Option<WorldGrid> {
        self.grids.pop()
    }

    pub fn depth(&self) -> usize {
        self.grids.len()
    }
}
