use thiserror::Error;

use crate::{assemble::assemble, ring::RingGenerator, tube_mesh::TubeMesh};

/// The largest ring count whose vertex indices all fit in a `u32`.
pub const MAX_RING_COUNT: u64 = (u32::MAX as u64 + 1) / 4;

/// Rejected build requests. No buffers are produced when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidConfiguration {
    #[error("ring count must not be negative, got {0}")]
    NegativeRingCount(i64),
    #[error("cube size must be finite, got {0}")]
    NonFiniteCubeSize(f32),
    #[error("ring count {0} exceeds the maximum of {max}", max = MAX_RING_COUNT)]
    TooManyRings(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeConfig {
    /// Number of rings stacked along +Z.
    pub ring_count: usize,
    /// Edge length of each ring and the spacing between neighbouring rings.
    pub cube_size: f32,
}

impl Default for TubeConfig {
    fn default() -> Self {
        Self {
            ring_count: 2,
            cube_size: 1.0,
        }
    }
}

impl TubeConfig {
    pub fn new(ring_count: i64, cube_size: f32) -> Result<Self, InvalidConfiguration> {
        let ring_count = usize::try_from(ring_count)
            .map_err(|_| InvalidConfiguration::NegativeRingCount(ring_count))?;
        let config = Self {
            ring_count,
            cube_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if !self.cube_size.is_finite() {
            return Err(InvalidConfiguration::NonFiniteCubeSize(self.cube_size));
        }
        let ring_count = self.ring_count as u64;
        if ring_count > MAX_RING_COUNT {
            return Err(InvalidConfiguration::TooManyRings(ring_count));
        }
        Ok(())
    }

    /// Generates the rings for this configuration and assembles them into a mesh.
    pub fn build(&self) -> Result<TubeMesh, InvalidConfiguration> {
        self.validate()?;
        log::debug!(
            "building tube with {} rings of size {}",
            self.ring_count,
            self.cube_size
        );
        let rings = RingGenerator::new(self.cube_size).generate_rings(self.ring_count);
        Ok(assemble(&rings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_ring_count() {
        assert_eq!(
            Err(InvalidConfiguration::NegativeRingCount(-1)),
            TubeConfig::new(-1, 1.0)
        );
    }

    #[test]
    fn rejects_non_finite_size() {
        assert!(matches!(
            TubeConfig::new(2, f32::NAN),
            Err(InvalidConfiguration::NonFiniteCubeSize(_))
        ));
        assert_eq!(
            Err(InvalidConfiguration::NonFiniteCubeSize(f32::INFINITY)),
            TubeConfig::new(2, f32::INFINITY)
        );
    }

    #[test]
    fn rejects_index_overflow() {
        let config = TubeConfig {
            ring_count: MAX_RING_COUNT as usize + 1,
            cube_size: 1.0,
        };
        assert_eq!(
            Err(InvalidConfiguration::TooManyRings(MAX_RING_COUNT + 1)),
            config.build()
        );
    }

    #[test]
    fn accepts_zero_and_negative_sizes() {
        assert!(TubeConfig::new(0, 1.0).is_ok());
        assert!(TubeConfig::new(3, 0.0).is_ok());
        assert!(TubeConfig::new(3, -2.5).is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            "ring count must not be negative, got -4",
            InvalidConfiguration::NegativeRingCount(-4).to_string()
        );
    }
}
