//! Planar polygon helpers.

use crate::{Vector, VectorRef};

/// Returns the unit normal of a planar polygon in 3D, given its vertices in
/// cyclic order. Components besides XYZ are ignored.
///
/// Uses Newell's method, so collinear runs of vertices are harmless. Returns
/// `None` if there are fewer than three vertices or the polygon has no area.
pub fn face_normal<V: VectorRef>(vertices: &[V]) -> Option<Vector> {
    if vertices.len() < 3 {
        return None;
    }
    let mut normal = Vector::zero(3);
    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];
        normal[0] += (a.get(1) - b.get(1)) * (a.get(2) + b.get(2));
        normal[1] += (a.get(2) - b.get(2)) * (a.get(0) + b.get(0));
        normal[2] += (a.get(0) - b.get(0)) * (a.get(1) + b.get(1));
    }
    normal.normalize()
}
