use crate::core::utils::geometry::Axis;
use thiserror::Error;

/// Errors that can occur when constructing a simulation box.
#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum SimBoxError {
    #[error("Box edge along {axis} must be positive and finite (got {value})")]
    InvalidEdge { axis: Axis, value: f64 },
}

/// Rectangular, axis-aligned periodic simulation box.
///
/// All three edge lengths are guaranteed to be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimBox {
    edges: [f64; 3],
}

impl SimBox {
    /// Creates a new box from its edge lengths (in nm).
    ///
    /// # Errors
    ///
    /// Returns [`SimBoxError::InvalidEdge`] if any edge is zero, negative or not finite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, SimBoxError> {
        for (axis, value) in [(Axis::X, x), (Axis::Y, y), (Axis::Z, z)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimBoxError::InvalidEdge { axis, value });
            }
        }
        Ok(Self { edges: [x, y, z] })
    }

    /// Returns the length of the box edge along `axis`.
    #[inline]
    pub fn edge(&self, axis: Axis) -> f64 {
        self.edges[axis.index()]
    }

    pub fn edges(&self) -> [f64; 3] {
        self.edges
    }
}
