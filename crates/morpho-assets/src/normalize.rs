//! Geometry normalization
//!
//! Recenters and uniformly rescales a vertex set so its bounding box is
//! centered at the origin with the largest dimension equal to a target
//! size, independent of source modeling units.

use glam::Vec3;

use crate::error::AssetError;

/// Recenter `positions` on the origin and scale uniformly so the largest
/// bounding-box extent equals `target_size`.
///
/// The divisor is the single largest axis extent, so aspect ratio is
/// preserved. A zero-extent (all vertices coincident) or empty set is
/// `DegenerateGeometry`.
pub fn normalize(positions: &mut [[f32; 3]], target_size: f32) -> Result<(), AssetError> {
    if positions.is_empty() {
        return Err(AssetError::DegenerateGeometry);
    }

    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for position in positions.iter() {
        let v = Vec3::from_array(*position);
        min = min.min(v);
        max = max.max(v);
    }

    let largest_extent = (max - min).max_element();
    if largest_extent <= 0.0 {
        return Err(AssetError::DegenerateGeometry);
    }

    let center = (min + max) * 0.5;
    let scale = target_size / largest_extent;
    for position in positions.iter_mut() {
        *position = ((Vec3::from_array(*position) - center) * scale).to_array();
    }

    Ok(())
}
