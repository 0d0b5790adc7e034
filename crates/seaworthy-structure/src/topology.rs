//! Spring topology derived from a structure layer.
//!
//! Every occupied cell becomes a point. Every pair of occupied cells that
//! are 8-neighbours becomes a spring. Every three mutually connected cells
//! within a 2×2 block become a surface triangle; a fully occupied block
//! yields two triangles sharing its rising diagonal.

use std::collections::HashMap;

use seaworthy_math::Vec2;
use seaworthy_types::{MaterialId, SeaworthyError, SeaworthyResult};

use crate::layer::StructureLayer;

/// Neighbour offsets visited from each cell. Together with their
/// mirror images these cover all 8 neighbours exactly once per pair.
const FORWARD_NEIGHBOURS: [(i64, i64); 4] = [(1, 0), (1, 1), (0, 1), (-1, 1)];

/// A point to be created, in layer order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSpec {
    pub position: Vec2,
    pub material: MaterialId,
    /// Source cell in the layer.
    pub cell: (usize, usize),
}

/// Points, springs and triangles of a structure, as plain index lists.
///
/// Built once when a ship is constructed. Provides the lookups the
/// solver needs at build time:
/// - Spring endpoints (`springs`)
/// - Springs connected to each point (`point_springs`)
/// - Triangle vertices and their edge springs (`triangles`, `triangle_springs`)
#[derive(Debug, Clone, Default)]
pub struct StructureTopology {
    pub points: Vec<PointSpec>,

    /// Spring endpoints as point indices.
    pub springs: Vec<[u32; 2]>,

    /// Triangle vertices as point indices, counter-clockwise.
    pub triangles: Vec<[u32; 3]>,

    /// For each triangle, the springs along its three edges.
    pub triangle_springs: Vec<[u32; 3]>,

    /// For each point, the springs attached to it.
    pub point_springs: Vec<Vec<u32>>,
}

impl StructureTopology {
    /// Build topology from a structure layer.
    ///
    /// Fails with `InvalidStructure` if the layer has no occupied cells.
    pub fn build(layer: &StructureLayer) -> SeaworthyResult<Self> {
        if layer.occupied_count() == 0 {
            return Err(SeaworthyError::InvalidStructure(
                "structure has no points".into(),
            ));
        }

        // Cell → point index
        let mut point_index: HashMap<(usize, usize), u32> = HashMap::new();
        let mut points = Vec::with_capacity(layer.occupied_count());

        for y in 0..layer.height() {
            for x in 0..layer.width() {
                if let Some(material) = layer.get(x, y) {
                    point_index.insert((x, y), points.len() as u32);
                    points.push(PointSpec {
                        position: layer.position_of(x, y),
                        material,
                        cell: (x, y),
                    });
                }
            }
        }

        // Springs, keyed by canonical (min, max) endpoint pair
        let mut springs: Vec<[u32; 2]> = Vec::new();
        let mut spring_index: HashMap<(u32, u32), u32> = HashMap::new();
        let mut point_springs: Vec<Vec<u32>> = vec![Vec::new(); points.len()];

        for (p, spec) in points.iter().enumerate() {
            let (x, y) = (spec.cell.0 as i64, spec.cell.1 as i64);
            for (dx, dy) in FORWARD_NEIGHBOURS {
                let (nx, ny) = (x + dx, y + dy);
                if layer.get_signed(nx, ny).is_none() {
                    continue;
                }
                let q = point_index[&(nx as usize, ny as usize)];
                let a = p as u32;
                let s = springs.len() as u32;
                springs.push([a, q]);
                spring_index.insert(edge_key(a, q), s);
                point_springs[a as usize].push(s);
                point_springs[q as usize].push(s);
            }
        }

        // Triangles from each 2×2 block
        let mut triangles: Vec<[u32; 3]> = Vec::new();
        let mut triangle_springs: Vec<[u32; 3]> = Vec::new();

        for y in 0..layer.height().saturating_sub(1) {
            for x in 0..layer.width().saturating_sub(1) {
                let bl = point_index.get(&(x, y)).copied();
                let br = point_index.get(&(x + 1, y)).copied();
                let tl = point_index.get(&(x, y + 1)).copied();
                let tr = point_index.get(&(x + 1, y + 1)).copied();

                let candidates: Vec<[u32; 3]> = match (bl, br, tl, tr) {
                    (Some(bl), Some(br), Some(tl), Some(tr)) => vec![[bl, br, tr], [bl, tr, tl]],
                    (Some(bl), Some(br), Some(tl), None) => vec![[bl, br, tl]],
                    (Some(bl), Some(br), None, Some(tr)) => vec![[bl, br, tr]],
                    (Some(bl), None, Some(tl), Some(tr)) => vec![[bl, tr, tl]],
                    (None, Some(br), Some(tl), Some(tr)) => vec![[br, tr, tl]],
                    _ => Vec::new(),
                };

                for [a, b, c] in candidates {
                    let edges = [
                        spring_index[&edge_key(a, b)],
                        spring_index[&edge_key(b, c)],
                        spring_index[&edge_key(c, a)],
                    ];
                    triangles.push([a, b, c]);
                    triangle_springs.push(edges);
                }
            }
        }

        tracing::debug!(
            points = points.len(),
            springs = springs.len(),
            triangles = triangles.len(),
            "built structure topology"
        );

        Ok(Self {
            points,
            springs,
            triangles,
            triangle_springs,
            point_springs,
        })
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// For each spring, the triangles that have it as an edge.
    pub fn spring_triangles(&self) -> Vec<Vec<u32>> {
        let mut result = vec![Vec::new(); self.springs.len()];
        for (t, edges) in self.triangle_springs.iter().enumerate() {
            for &s in edges {
                result[s as usize].push(t as u32);
            }
        }
        result
    }
}

fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}
