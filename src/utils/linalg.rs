// src/utils/linalg.rs

use nalgebra::{Rotation2, Vector2, Vector3};

/// Rotate the xy-projection of a vector in-plane by `angle_rad`
///
/// # Arguments
/// * `v` - Vector [x, y, z]
/// * `angle_rad` - Rotation angle in radians, counterclockwise about +z
///
/// # Returns
/// The rotated vector; the z-component is carried through unchanged,
/// so only the in-plane part moves and the norm is preserved.
pub fn rotate_xy(v: [f64; 3], angle_rad: f64) -> [f64; 3] {
  let xy = Rotation2::new(angle_rad) * Vector2::new(v[0], v[1]);
  [xy.x, xy.y, v[2]]
}

/// Angle between two vectors in degrees, in [0, 180]
///
/// The normalized dot product is clamped to [-1, 1] before arccos so
/// exactly parallel or antiparallel pairs cannot overshoot into NaN.
/// A zero-length operand yields 0.0.
pub fn angle_between_deg(a: [f64; 3], b: [f64; 3]) -> f64 {
  let va = Vector3::from(a);
  let vb = Vector3::from(b);

  let denom = va.norm() * vb.norm();
  if denom == 0.0 {
    return 0.0;
  }

  (va.dot(&vb) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}
