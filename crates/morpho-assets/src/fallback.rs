//! Deterministic fallback geometry
//!
//! When an asset fails to decode, the loader substitutes this UV-sphere
//! point cloud so morphing always has a valid, non-empty operand. Only
//! positions are produced; nothing downstream consumes topology.

use std::f32::consts::PI;

/// Generate a UV-sphere point cloud centered at the origin.
///
/// Deterministic for a given resolution: same inputs, same vertices,
/// every time.
pub fn fallback_sphere(radius: f32, segments: u32, rings: u32) -> Vec<[f32; 3]> {
    let mut positions = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = radius * phi.cos();
        let ring_radius = radius * phi.sin();

        for seg in 0..=segments {
            let theta = 2.0 * PI * seg as f32 / segments as f32;
            positions.push([ring_radius * theta.cos(), y, ring_radius * theta.sin()]);
        }
    }

    positions
}
