//! Uniform grid over the viewport for neighbour queries.
//!
//! Points are bucketed into square cells by a counting sort, giving a flat
//! `cell_start`/`entries` layout. With the cell side equal to the query radius,
//! every pair closer than the radius lives in the same or an adjacent cell.
//! The number of cells is capped; past the cap cells grow wider than the
//! radius, which only adds candidates.

use nannou::prelude::Vec2;

use crate::viewport::Viewport;

/// Cell budget floor; above it the budget follows the point count.
const MIN_CELL_BUDGET: usize = 64;

#[derive(Debug, Default)]
pub struct SpatialGrid {
    cell_width: f32,
    cell_height: f32,
    cols: usize,
    rows: usize,
    /// `cell_start[c]..cell_start[c + 1]` indexes `entries` for cell `c`.
    cell_start: Vec<usize>,
    entries: Vec<usize>,
}

impl SpatialGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the grid for `positions`. Positions outside the viewport are
    /// clamped into the border cells.
    pub fn rebuild<I>(&mut self, positions: I, viewport: &Viewport, cell_size: f32)
    where
        I: ExactSizeIterator<Item = Vec2> + Clone,
    {
        let cell_size = cell_size.max(f32::EPSILON);
        let budget = positions.len().max(MIN_CELL_BUDGET);
        self.cols = cells_along(viewport.width(), cell_size, budget);
        self.rows = cells_along(viewport.height(), cell_size, budget / self.cols);
        self.cell_width = cell_size.max(viewport.width() / self.cols as f32);
        self.cell_height = cell_size.max(viewport.height() / self.rows as f32);
        let cell_count = self.cols * self.rows;

        self.cell_start.clear();
        self.cell_start.resize(cell_count + 1, 0);
        for p in positions.clone() {
            let c = self.cell_of(p);
            self.cell_start[c + 1] += 1;
        }
        for c in 0..cell_count {
            self.cell_start[c + 1] += self.cell_start[c];
        }

        self.entries.clear();
        self.entries.resize(positions.len(), 0);
        let mut cursor = self.cell_start.clone();
        for (i, p) in positions.enumerate() {
            let c = self.cell_of(p);
            self.entries[cursor[c]] = i;
            cursor[c] += 1;
        }
    }

    /// Candidate pairs `(i, j)` with `i < j` from the same or adjacent cells,
    /// sorted. Contains every pair closer than the cell size.
    pub fn candidate_pairs(&self, positions: &[Vec2]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, &p) in positions.iter().enumerate() {
            let (cx, cy) = self.coords_of(p);
            for ny in cy.saturating_sub(1)..=(cy + 1).min(self.rows - 1) {
                for nx in cx.saturating_sub(1)..=(cx + 1).min(self.cols - 1) {
                    let cell = ny * self.cols + nx;
                    pairs.extend(
                        self.bucket(cell)
                            .iter()
                            .copied()
                            .filter(|&j| j > i)
                            .map(|j| (i, j)),
                    );
                }
            }
        }
        pairs.sort_unstable();
        pairs
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    fn bucket(&self, cell: usize) -> &[usize] {
        &self.entries[self.cell_start[cell]..self.cell_start[cell + 1]]
    }

    fn coords_of(&self, p: Vec2) -> (usize, usize) {
        (
            axis_cell(p.x, self.cell_width, self.cols),
            axis_cell(p.y, self.cell_height, self.rows),
        )
    }

    fn cell_of(&self, p: Vec2) -> usize {
        let (cx, cy) = self.coords_of(p);
        cy * self.cols + cx
    }
}

/// Cells needed to cover `extent`, at most `limit` and at least one.
fn cells_along(extent: f32, cell_size: f32, limit: usize) -> usize {
    // float-to-int casts saturate, NaN maps to 0
    let wanted = (extent / cell_size).ceil() as usize;
    wanted.min(limit).max(1)
}

fn axis_cell(v: f32, cell_size: f32, count: usize) -> usize {
    // float-to-int casts saturate, NaN maps to 0
    let c = (v / cell_size).floor() as i64;
    c.clamp(0, count as i64 - 1) as usize
}
