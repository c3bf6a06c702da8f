use crate::core::models::simbox::SimBox;
use nalgebra::{Point3, Vector3};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A coordinate axis of the simulation box.
///
/// Used to specify the membrane normal. The default is [`Axis::Z`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// Index of the axis into a 3D coordinate (`x` = 0, `y` = 1, `z` = 2).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid axis '{0}'. Expected 'x', 'y' or 'z'.")]
pub struct ParseAxisError(pub String);

impl FromStr for Axis {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(ParseAxisError(s.to_string())),
        }
    }
}

/// Shortest signed displacement corresponding to `delta` in a periodic dimension of length `edge`.
#[inline]
pub fn minimum_image(delta: f64, edge: f64) -> f64 {
    delta - edge * (delta / edge).round()
}

/// Calculates the minimum-image signed difference `point - reference` along `axis`.
///
/// A positive value means that `point` lies above `reference` along `axis`.
/// Periodic boundary conditions are applied using the box edge along `axis` only.
pub fn signed_axis_distance(
    point: &Point3<f64>,
    reference: &Point3<f64>,
    axis: Axis,
    simbox: &SimBox,
) -> f64 {
    let i = axis.index();
    minimum_image(point[i] - reference[i], simbox.edge(axis))
}

/// Calculates the unweighted center of geometry of `points` respecting periodic boundary conditions.
///
/// The first point anchors the calculation: every point contributes its minimum-image
/// displacement from the anchor, so molecules spanning the box boundary do not pull
/// the center towards the middle of the box. The returned center is wrapped into the box.
///
/// # Return
///
/// Returns `None` if `points` is empty.
pub fn center_of_geometry(points: &[Point3<f64>], simbox: &SimBox) -> Option<Point3<f64>> {
    let anchor = points.first()?;
    let edges = simbox.edges();

    let mut displacement_sum = Vector3::zeros();
    for point in points {
        let delta = point - anchor;
        for i in 0..3 {
            displacement_sum[i] += minimum_image(delta[i], edges[i]);
        }
    }

    let mut center = *anchor + displacement_sum / points.len() as f64;
    for i in 0..3 {
        center[i] = center[i].rem_euclid(edges[i]);
    }
    Some(center)
}
