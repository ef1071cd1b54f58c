use crate::geometry::Vector3;

/// One corner of a ring: where it sits and which slot of the vertex buffer it owns.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Corner {
    pub position: Vector3,
    pub index: u32,
}

/// A single square cross-section of the tube.
///
/// Rings are only created by [`RingGenerator`], which hands out 4 consecutive vertex indices
/// per ring and never reuses them.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Ring {
    bottom_left: Corner,
    bottom_right: Corner,
    top_right: Corner,
    top_left: Corner,
}

impl Ring {
    pub fn bottom_left(&self) -> Corner {
        self.bottom_left
    }

    pub fn bottom_right(&self) -> Corner {
        self.bottom_right
    }

    pub fn top_right(&self) -> Corner {
        self.top_right
    }

    pub fn top_left(&self) -> Corner {
        self.top_left
    }

    /// All four corners in index order (bottom-left, bottom-right, top-right, top-left).
    pub fn corners(&self) -> [Corner; 4] {
        [
            self.bottom_left,
            self.bottom_right,
            self.top_right,
            self.top_left,
        ]
    }
}

/// Places rings along the +Z axis, `cube_size` apart.
#[derive(Debug, Clone, Copy)]
pub struct RingGenerator {
    cube_size: f32,
}

impl RingGenerator {
    pub fn new(cube_size: f32) -> Self {
        Self { cube_size }
    }

    pub fn cube_size(&self) -> f32 {
        self.cube_size
    }

    /// Creates the ring at position `ring_index` of the stack.
    ///
    /// The ring takes the indices `next_index..next_index + 4`. Returns the ring together with
    /// the first index left unused, which must be passed to the next call.
    ///
    /// A negative `cube_size` mirrors the tube; it is not an error.
    pub fn generate_ring(&self, ring_index: usize, next_index: u32) -> (Ring, u32) {
        let s = self.cube_size;
        let z = ring_index as f32 * s;
        let corner = |offset: u32, x: f32, y: f32| Corner {
            position: Vector3::new(x, y, z),
            index: next_index + offset,
        };

        let ring = Ring {
            bottom_left: corner(0, 0.0, 0.0),
            bottom_right: corner(1, s, 0.0),
            top_right: corner(2, s, s),
            top_left: corner(3, 0.0, s),
        };
        log::trace!(
            "ring {} at z={} owns indices {}..{}",
            ring_index,
            z,
            next_index,
            next_index + 4
        );
        (ring, next_index + 4)
    }

    /// Generates `ring_count` rings in stacking order, starting at vertex index 0.
    pub fn generate_rings(&self, ring_count: usize) -> Vec<Ring> {
        (0..ring_count)
            .scan(0u32, |next_index, ring_index| {
                let (ring, advanced) = self.generate_ring(ring_index, *next_index);
                *next_index = advanced;
                Some(ring)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_corners_form_scaled_square() {
        let (ring, next) = RingGenerator::new(2.0).generate_ring(0, 0);
        assert_eq!(4, next);
        assert_eq!(Vector3::new(0.0, 0.0, 0.0), ring.bottom_left().position);
        assert_eq!(Vector3::new(2.0, 0.0, 0.0), ring.bottom_right().position);
        assert_eq!(Vector3::new(2.0, 2.0, 0.0), ring.top_right().position);
        assert_eq!(Vector3::new(0.0, 2.0, 0.0), ring.top_left().position);
    }

    #[test]
    fn indices_continue_from_counter() {
        let (ring, next) = RingGenerator::new(1.0).generate_ring(3, 12);
        assert_eq!(16, next);
        assert_eq!([12, 13, 14, 15], ring.corners().map(|c| c.index));
        assert_eq!(12, ring.bottom_left().index);
        assert_eq!(13, ring.bottom_right().index);
        assert_eq!(14, ring.top_right().index);
        assert_eq!(15, ring.top_left().index);
        assert!(ring.corners().iter().all(|c| c.position.z == 3.0));
    }

    #[test]
    fn rings_take_consecutive_indices() {
        let rings = RingGenerator::new(1.0).generate_rings(5);
        assert_eq!(5, rings.len());

        let indices: Vec<u32> = rings
            .iter()
            .flat_map(|r| r.corners().map(|c| c.index))
            .collect();
        assert_eq!((0..20).collect::<Vec<u32>>(), indices);
    }

    #[test]
    fn zero_rings() {
        assert!(RingGenerator::new(1.0).generate_rings(0).is_empty());
    }

    #[test]
    fn negative_size_mirrors() {
        let rings = RingGenerator::new(-1.0).generate_rings(2);
        assert_eq!(Vector3::new(-1.0, -1.0, -1.0), rings[1].top_right().position);
    }
}
