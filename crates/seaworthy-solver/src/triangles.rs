//! Surface triangle buffers.

use seaworthy_telemetry::{EventBus, EventKind};
use seaworthy_types::{PointId, SpringId, TriangleId};

/// SoA triangle buffers. A triangle is destroyed when any of its edge
/// springs breaks and is never restored automatically.
#[derive(Debug, Clone, Default)]
pub struct Triangles {
    vertices: Vec<[PointId; 3]>,
    sub_springs: Vec<[SpringId; 3]>,
    is_deleted: Vec<bool>,
}

impl Triangles {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            sub_springs: Vec::with_capacity(capacity),
            is_deleted: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn add(&mut self, vertices: [PointId; 3], sub_springs: [SpringId; 3]) -> TriangleId {
        let id = TriangleId(self.vertices.len() as u32);
        self.vertices.push(vertices);
        self.sub_springs.push(sub_springs);
        self.is_deleted.push(false);
        id
    }

    /// Total number of triangles, including deleted ones.
    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles not deleted.
    pub fn live_count(&self) -> usize {
        self.is_deleted.iter().filter(|&&d| !d).count()
    }

    pub fn vertices(&self, id: TriangleId) -> [PointId; 3] {
        self.vertices[id.index()]
    }

    /// The springs along the triangle's edges.
    pub fn sub_springs(&self, id: TriangleId) -> [SpringId; 3] {
        self.sub_springs[id.index()]
    }

    pub fn is_deleted(&self, id: TriangleId) -> bool {
        self.is_deleted[id.index()]
    }

    /// Destroys a triangle. Returns false if it was already destroyed.
    pub(crate) fn destroy(&mut self, id: TriangleId, events: &EventBus) -> bool {
        if self.is_deleted[id.index()] {
            return false;
        }
        self.is_deleted[id.index()] = true;
        events.notify(EventKind::TriangleDestroyed { triangle: id });
        true
    }
}
