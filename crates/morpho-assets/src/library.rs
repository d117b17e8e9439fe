//! Shape-set loading orchestration
//!
//! Turns raw container byte buffers into the jointly reconciled canonical
//! mesh set the morph scheduler runs on. One asset failing to decode
//! degrades to the deterministic fallback sphere instead of aborting the
//! set; only an empty input set is fatal.

use morpho_core::CanonicalMesh;
use tracing::{debug, info, warn};

use crate::container::parse_container;
use crate::error::AssetError;
use crate::extract::extract_meshes;
use crate::fallback::fallback_sphere;
use crate::normalize::normalize;
use crate::reconcile::reconcile;

/// Fallback sphere resolution, fixed so every substitution is identical.
const FALLBACK_SEGMENTS: u32 = 24;
const FALLBACK_RINGS: u32 = 16;

/// Load a whole shape set, normalized to `target_size` and reconciled to
/// one shared vertex count.
///
/// Loading must complete before the scheduler is constructed; shapes can
/// not join the pool afterwards.
pub fn load_shape_set(
    assets: &[Vec<u8>],
    target_size: f32,
) -> Result<Vec<CanonicalMesh>, AssetError> {
    if assets.is_empty() {
        return Err(AssetError::EmptyShapeSet);
    }

    let mut point_sets = Vec::with_capacity(assets.len());
    for (index, bytes) in assets.iter().enumerate() {
        match load_point_set(bytes, target_size) {
            Ok(points) => {
                debug!("asset {}: {} vertices", index, points.len());
                point_sets.push(points);
            }
            Err(e) => {
                warn!("asset {} failed to load ({}), substituting fallback sphere", index, e);
                // Radius of half the target size gives the sphere the
                // same bounding extent as a normalized mesh.
                point_sets.push(fallback_sphere(
                    target_size / 2.0,
                    FALLBACK_SEGMENTS,
                    FALLBACK_RINGS,
                ));
            }
        }
    }

    let canonical = reconcile(point_sets);
    info!(
        "shape set ready: {} shapes at {} vertices",
        canonical.len(),
        canonical.first().map_or(0, CanonicalMesh::vertex_count)
    );
    Ok(canonical)
}

/// Decode one asset into a normalized flat point set: parse the
/// container, extract every primitive, de-index, and concatenate.
fn load_point_set(bytes: &[u8], target_size: f32) -> Result<Vec<[f32; 3]>, AssetError> {
    let chunks = parse_container(bytes)?;
    let primitives = extract_meshes(&chunks)?;

    let mut points = Vec::new();
    for primitive in &primitives {
        points.extend(primitive.deindexed());
    }
    if points.is_empty() {
        return Err(AssetError::MalformedMesh("container holds no vertices".into()));
    }

    normalize(&mut points, target_size)?;
    Ok(points)
}
