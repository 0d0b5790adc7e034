//! Material grid describing a ship.

use seaworthy_math::Vec2;
use seaworthy_types::{MaterialId, SeaworthyError, SeaworthyResult};

/// A rectangular grid of cells, each empty or holding a material.
///
/// Cell `(0, 0)` is the bottom-left corner; `y` grows upward. Cell
/// `(x, y)` sits at world position `origin + (x, y) * cell_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureLayer {
    width: usize,
    height: usize,
    cells: Vec<Option<MaterialId>>,
    /// Distance between neighbouring cells (metres).
    pub cell_size: f32,
    /// World position of cell `(0, 0)`.
    pub origin: Vec2,
}

impl StructureLayer {
    /// Creates an empty layer with unit cells at the world origin.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            cell_size: 1.0,
            origin: Vec2::ZERO,
        }
    }

    /// Parses a layer from rows of characters, top row first.
    ///
    /// `.` and space are empty; every other character must appear in
    /// `legend`. Rows shorter than the longest are padded with empty cells.
    pub fn from_ascii(text: &str, legend: &[(char, MaterialId)]) -> SeaworthyResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

        let mut layer = Self::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            let y = height - 1 - row;
            for (x, c) in line.chars().enumerate() {
                if c == '.' || c == ' ' {
                    continue;
                }
                let material = legend
                    .iter()
                    .find(|(k, _)| *k == c)
                    .map(|(_, m)| *m)
                    .ok_or_else(|| {
                        SeaworthyError::InvalidStructure(format!(
                            "unknown cell '{c}' at row {row}, column {x}"
                        ))
                    })?;
                layer.set(x, y, Some(material));
            }
        }

        Ok(layer)
    }

    /// Sets the cell size and world position of cell `(0, 0)`.
    pub fn placed_at(mut self, origin: Vec2, cell_size: f32) -> Self {
        self.origin = origin;
        self.cell_size = cell_size;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Material at `(x, y)`, or `None` if empty or out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<MaterialId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x]
    }

    /// Signed-coordinate variant of [`get`](Self::get), for neighbour walks.
    pub fn get_signed(&self, x: i64, y: i64) -> Option<MaterialId> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    /// Sets the material at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, material: Option<MaterialId>) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = material;
    }

    /// Fills the rectangle `[x0, x1) × [y0, y1)`, clipped to the layer.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, material: MaterialId) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.set(x, y, Some(material));
            }
        }
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// World position of cell `(x, y)`.
    pub fn position_of(&self, x: usize, y: usize) -> Vec2 {
        self.origin + Vec2::new(x as f32, y as f32) * self.cell_size
    }
}
