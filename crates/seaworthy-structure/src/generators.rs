//! Procedural ship generators for scenarios and testing.
//!
//! All generators produce unit-cell layers centred horizontally on
//! `x = 0` with the bottom row at `y = 0`. Use
//! [`StructureLayer::placed_at`] to move them.

use seaworthy_math::Vec2;
use seaworthy_types::MaterialId;

use crate::layer::StructureLayer;

/// Solid rectangular raft of `cols × rows` points.
///
/// # Example
/// ```
/// use seaworthy_structure::generators::raft;
/// use seaworthy_types::MaterialId;
/// let layer = raft(4, 2, MaterialId(0));
/// assert_eq!(layer.occupied_count(), 8);
/// ```
pub fn raft(cols: usize, rows: usize, material: MaterialId) -> StructureLayer {
    let mut layer = StructureLayer::new(cols, rows);
    layer.fill_rect(0, 0, cols, rows, material);
    centred(layer)
}

/// Open-topped hull: a bottom row and two side walls of `hull`, with a
/// deck beam of `deck` one row below the top of the walls.
///
/// Walls are one cell thick. `height` counts the bottom row.
pub fn hull_box(width: usize, height: usize, hull: MaterialId, deck: MaterialId) -> StructureLayer {
    let mut layer = StructureLayer::new(width, height);
    layer.fill_rect(0, 0, width, 1, hull);
    layer.fill_rect(0, 0, 1, height, hull);
    layer.fill_rect(width.saturating_sub(1), 0, width, height, hull);

    if height >= 3 && width >= 3 {
        layer.fill_rect(1, height - 2, width - 1, height - 1, deck);
    }

    centred(layer)
}

/// Horizontal rope of `length` points.
pub fn rope(length: usize, material: MaterialId) -> StructureLayer {
    let mut layer = StructureLayer::new(length, 1);
    layer.fill_rect(0, 0, length, 1, material);
    centred(layer)
}

fn centred(layer: StructureLayer) -> StructureLayer {
    let half_span = layer.width().saturating_sub(1) as f32 * 0.5;
    layer.placed_at(Vec2::new(-half_span, 0.0), 1.0)
}
