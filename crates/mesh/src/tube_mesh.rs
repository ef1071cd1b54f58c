use crate::{
    geometry::{Triangle, Vector3},
    TriangleMesh,
};

/// Maintains geometry for a single facet.
///
/// This type must be paired with a list of vertices. The points here are only indices into
/// another vector. Neighbouring rings of a tube share every corner between several facets,
/// so storing 4 byte indices instead of 12 byte positions keeps the index buffer small and
/// lets a renderer upload both buffers as-is.
///
/// As a simple example, a single stitched segment between two rings looks like:
///
/// ```text
///       TL -------- TR
///       /|         /|
///      / |        / |
///    TL -------- TR |
///     |  BL -----|- BR
///     | /        | /
///     |/         |/
///    BL -------- BR
/// ```
///
/// Here we have 8 points and 10 facets (2 for the front cap and 2 for each of the 4 sides).
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

impl Facet {
    pub const fn new(p0: u32, p1: u32, p2: u32) -> Self {
        Self { p0, p1, p2 }
    }

    /// Returns true if the facet collapses to a single point.
    ///
    /// Degenerate facets cover no area and are never rasterized.
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1 && self.p1 == self.p2
    }

    pub fn indices(&self) -> [u32; 3] {
        [self.p0, self.p1, self.p2]
    }
}

/// The output of a tube build: a vertex buffer and a triangle index buffer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TubeMesh {
    pub vertices: Vec<Vector3>,
    pub facets: Vec<Facet>,
}

impl TubeMesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.facets.is_empty()
    }

    /// Flattens the facets into a single index buffer, 3 entries per facet.
    pub fn indices(&self) -> Vec<u32> {
        self.facets.iter().flat_map(Facet::indices).collect()
    }

    /// Returns the vertex buffer as a contiguous slice of x,y,z floats.
    pub fn as_floats(&self) -> &[f32] {
        // Safety: Vector3 is asserted to have the size and alignment of [f32; 3] (see
        // geometry.rs), so a slice of N vectors is the same memory as a slice of 3N floats.
        unsafe {
            std::slice::from_raw_parts(
                self.vertices.as_ptr() as *const f32,
                self.vertices.len() * 3,
            )
        }
    }

    fn resolve(&self, facet: &Facet) -> Triangle {
        Triangle {
            p0: self.vertices[facet.p0 as usize],
            p1: self.vertices[facet.p1 as usize],
            p2: self.vertices[facet.p2 as usize],
        }
    }
}

impl TriangleMesh for TubeMesh {
    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        // Unindexed input provides one point for every facet vertex, so this is simply an
        // identity mapping (ex: facet[i] == i).
        let vertices: Vec<Vector3> = triangles.iter().flat_map(|t| [t.p0, t.p1, t.p2]).collect();
        TubeMesh {
            facets: (0..triangles.len() as u32)
                .map(|i| Facet::new(3 * i, 3 * i + 1, 3 * i + 2))
                .collect(),
            vertices,
        }
    }

    fn triangle_count(&self) -> usize {
        self.facets.len()
    }

    fn triangles(&self) -> Box<dyn Iterator<Item = Triangle> + '_> {
        Box::new(self.facets.iter().map(|f| self.resolve(f)))
    }
}
