use cgmath::Zero;

use crate::{
    geometry::Vector3,
    ring::Ring,
    tube_mesh::{Facet, TubeMesh},
};

/// Number of facets reserved for a tube of `ring_count` rings.
///
/// The front face reserves 4 slots and each stitched pair of rings takes 8. Only 2 of the
/// front face slots are emitted as the cap; the remaining 2 are left as degenerate facets at
/// the end of the buffer.
pub fn facet_count(ring_count: usize) -> usize {
    match ring_count {
        0 => 0,
        n => 4 + 8 * (n - 1),
    }
}

/// Closes the front of the tube with two facets facing -Z.
fn cap(facets: &mut Vec<Facet>, ring: &Ring) {
    let bl = ring.bottom_left().index;
    let br = ring.bottom_right().index;
    let tr = ring.top_right().index;
    let tl = ring.top_left().index;

    facets.push(Facet::new(bl, tr, br));
    facets.push(Facet::new(bl, tl, tr));
}

/// Joins two adjacent rings with four outward facing quads.
fn stitch(facets: &mut Vec<Facet>, prev: &Ring, cur: &Ring) {
    let (p_bl, p_br, p_tr, p_tl) = (
        prev.bottom_left().index,
        prev.bottom_right().index,
        prev.top_right().index,
        prev.top_left().index,
    );
    let (c_bl, c_br, c_tr, c_tl) = (
        cur.bottom_left().index,
        cur.bottom_right().index,
        cur.top_right().index,
        cur.top_left().index,
    );

    // Right
    facets.push(Facet::new(p_br, c_tr, c_br));
    facets.push(Facet::new(p_br, p_tr, c_tr));
    // Left
    facets.push(Facet::new(c_bl, p_tl, p_bl));
    facets.push(Facet::new(c_bl, c_tl, p_tl));
    // Top
    facets.push(Facet::new(p_tl, c_tr, p_tr));
    facets.push(Facet::new(p_tl, c_tl, c_tr));
    // Bottom
    facets.push(Facet::new(c_bl, p_br, c_br));
    facets.push(Facet::new(c_bl, p_bl, p_br));
}

/// Builds the vertex and index buffers for a sequence of rings.
///
/// The first ring is capped, every consecutive pair is stitched in sequence order and the
/// last ring is left open. An empty sequence produces an empty mesh.
pub fn assemble(rings: &[Ring]) -> TubeMesh {
    let Some(first) = rings.first() else {
        return TubeMesh::default();
    };

    // Vertices are written by the index each corner recorded, not by their position in the
    // ring sequence.
    let mut vertices = vec![Vector3::zero(); rings.len() * 4];
    for corner in rings.iter().flat_map(Ring::corners) {
        vertices[corner.index as usize] = corner.position;
    }

    let reserved = facet_count(rings.len());
    let mut facets = Vec::with_capacity(reserved);
    cap(&mut facets, first);
    for pair in rings.windows(2) {
        stitch(&mut facets, &pair[0], &pair[1]);
    }
    facets.resize(reserved, Facet::default());

    debug_assert!(facets
        .iter()
        .flat_map(Facet::indices)
        .all(|i| (i as usize) < vertices.len()));

    log::debug!(
        "assembled {} rings into {} vertices and {} facets",
        rings.len(),
        vertices.len(),
        facets.len()
    );
    TubeMesh { vertices, facets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::RingGenerator;

    #[test]
    fn reserved_facets() {
        assert_eq!(0, facet_count(0));
        assert_eq!(4, facet_count(1));
        assert_eq!(12, facet_count(2));
        assert_eq!(20, facet_count(3));
    }

    #[test]
    fn empty_sequence() {
        assert!(assemble(&[]).is_empty());
    }

    #[test]
    fn single_ring_is_only_capped() {
        let rings = RingGenerator::new(1.0).generate_rings(1);
        let mesh = assemble(&rings);
        assert_eq!(
            vec![
                Facet::new(0, 2, 1),
                Facet::new(0, 3, 2),
                Facet::default(),
                Facet::default(),
            ],
            mesh.facets
        );
    }

    #[test]
    fn stitch_pattern() {
        let rings = RingGenerator::new(1.0).generate_rings(2);
        let mut facets = Vec::new();
        stitch(&mut facets, &rings[0], &rings[1]);
        assert_eq!(
            vec![
                Facet::new(1, 6, 5),
                Facet::new(1, 2, 6),
                Facet::new(4, 3, 0),
                Facet::new(4, 7, 3),
                Facet::new(3, 6, 2),
                Facet::new(3, 7, 6),
                Facet::new(4, 1, 5),
                Facet::new(4, 0, 1),
            ],
            facets
        );
    }

    #[test]
    fn vertices_scatter_by_recorded_index() {
        let rings = RingGenerator::new(1.0).generate_rings(3);
        let forward = assemble(&rings);

        let reversed: Vec<Ring> = rings.iter().rev().copied().collect();
        let backward = assemble(&reversed);

        assert_eq!(forward.vertices, backward.vertices);
        assert_eq!(Vector3::new(0.0, 1.0, 2.0), backward.vertices[11]);
    }
}
