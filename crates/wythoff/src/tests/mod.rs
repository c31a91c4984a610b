use std::collections::HashSet;

use crate::{Polyhedral, Polytope, PolytopeBuilder, PolytopeFamily, Preset, canonical_face, face_edges};

mod properties;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn build(preset: Preset) -> Polytope {
    init_logging();
    preset
        .build()
        .unwrap_or_else(|e| panic!("error building {preset}: {e}"))
}

fn build_polyhedron(diagram: [u16; 3], distances: [f64; 3]) -> Polytope {
    init_logging();
    PolytopeBuilder::new(PolytopeFamily::Polyhedron, diagram, &distances)
        .and_then(|b| b.build())
        .unwrap_or_else(|e| panic!("error building {diagram:?} {distances:?}: {e}"))
}

fn counts(p: &impl Polyhedral) -> (usize, usize, usize) {
    (p.num_vertices(), p.num_edges(), p.num_faces())
}

/// Asserts that no edge or face appears twice and that every side of every
/// face is an edge.
#[track_caller]
fn assert_well_formed(p: &impl Polyhedral) {
    let edges: HashSet<_> = p
        .edges()
        .map(|&[a, b]| if a <= b { [a, b] } else { [b, a] })
        .collect();
    assert_eq!(edges.len(), p.num_edges(), "duplicate edge");

    let faces: HashSet<_> = p.faces().map(|f| canonical_face(f)).collect();
    assert_eq!(faces.len(), p.num_faces(), "duplicate face");

    for f in p.faces() {
        assert!(f.len() >= 3, "face {f:?} has fewer than 3 sides");
        for [a, b] in face_edges(f) {
            let key = if a <= b { [a, b] } else { [b, a] };
            assert!(edges.contains(&key), "side ({a}, {b}) of face {f:?} is not an edge");
        }
    }
}
