use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::DualPolyhedron;

const DIAGRAMS: [[u16; 3]; 3] = [[3, 2, 3], [4, 2, 3], [5, 2, 3]];

fn distances(active: u8) -> [f64; 3] {
    std::array::from_fn(|i| if active & (1 << i) != 0 { 1.0 } else { 0.0 })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn proptest_wythoff_polyhedra(diagram in prop::sample::select(DIAGRAMS.to_vec()), active in 1_u8..8) {
        let p = build_polyhedron(diagram, distances(active));
        assert_eq!(p.euler_characteristic(), 2, "{p}");
        assert_well_formed(&p);

        let dual = DualPolyhedron::new(&p).unwrap();
        assert_eq!(dual.euler_characteristic(), 2, "dual of {p}");
        assert_eq!(counts(&dual), (p.num_faces(), p.num_edges(), p.num_vertices()));
    }
}

#[test]
fn test_snub_vertex_count_is_half_the_group() {
    for (diagram, group_order) in std::iter::zip(DIAGRAMS, [24, 48, 120]) {
        init_logging();
        let p = PolytopeBuilder::new(PolytopeFamily::Snub, diagram, &[1.0; 3])
            .and_then(|b| b.build())
            .unwrap();
        assert_eq!(p.num_vertices() * 2, group_order, "{p}");
        assert_eq!(p.euler_characteristic(), 2, "{p}");
        assert_well_formed(&p);
    }
}
