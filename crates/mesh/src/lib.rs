mod assemble;
mod config;
mod geometry;
mod ring;
mod tube_mesh;

pub use assemble::*;
pub use config::*;
pub use geometry::*;
pub use ring::*;
pub use tube_mesh::*;

/// A reasonable default mesh to select for unopinionated consumers.
pub type DefaultMesh = TubeMesh;

pub trait TriangleMesh: Sized {
    /// Creates a TriangleMesh from a list of unindexed triangles.
    ///
    /// # Arguments
    ///
    /// * `triangles` - A vector of the triangles of the mesh.
    fn from_triangles(triangles: Vec<Triangle>) -> Self;

    /// Returns the number of triangles that comprises this mesh.
    fn triangle_count(&self) -> usize;

    /// Iterates the triangles of the mesh with their positions resolved.
    fn triangles(&self) -> Box<dyn Iterator<Item = Triangle> + '_>;
}

/// Builds a tube of `ring_count` rings spaced `cube_size` apart along +Z.
///
/// The first ring is capped and the last ring is left open. A ring count of zero yields an
/// empty mesh; a negative ring count is rejected before any work is done.
pub fn build(ring_count: i64, cube_size: f32) -> Result<TubeMesh, InvalidConfiguration> {
    TubeConfig::new(ring_count, cube_size)?.build()
}
