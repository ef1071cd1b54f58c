use cgmath::Zero;

pub type Vector3 = cgmath::Vector3<f32>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// A triangle with its corner positions resolved.
///
/// Corners are listed in winding order; the visible side is the one where the
/// corners appear counter-clockwise.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    /// The un-normalized face normal implied by the winding order.
    pub fn normal(&self) -> Vector3 {
        (self.p1 - self.p0).cross(self.p2 - self.p0)
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        Self {
            p0: Vector3::zero(),
            p1: Vector3::zero(),
            p2: Vector3::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_follows_winding() {
        let t = Triangle {
            p0: Vector3::new(0.0, 0.0, 0.0),
            p1: Vector3::new(1.0, 0.0, 0.0),
            p2: Vector3::new(0.0, 1.0, 0.0),
        };
        assert_eq!(Vector3::new(0.0, 0.0, 1.0), t.normal());

        let flipped = Triangle {
            p1: t.p2,
            p2: t.p1,
            ..t
        };
        assert_eq!(Vector3::new(0.0, 0.0, -1.0), flipped.normal());
    }
}
