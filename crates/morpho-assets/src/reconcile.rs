//! Vertex-count reconciliation
//!
//! Meshes with differing vertex counts cannot share one interpolation
//! buffer. Reconciliation pads every mesh up to the largest count in the
//! set by cyclically repeating its own vertices, which gives any two
//! reconciled meshes a well-defined 1:1 correspondence for interpolation.
//! Padded vertices sit on top of existing ones and only separate once a
//! morph target sends them elsewhere.

use morpho_core::CanonicalMesh;
use tracing::debug;

/// Bring every mesh in the set to one shared vertex count.
///
/// For a mesh of `n` vertices and shared count `m >= n`, output vertex
/// `i` is input vertex `i % n`; the first `n` vertices are unchanged.
/// Must be applied once, jointly, across every shape the system will
/// morph between — adding a mesh afterwards breaks the shared-length
/// invariant. Empty meshes are rejected upstream; reaching here with one
/// is a programming error.
pub fn reconcile(meshes: Vec<Vec<[f32; 3]>>) -> Vec<CanonicalMesh> {
    let shared_count = meshes.iter().map(Vec::len).max().unwrap_or(0);
    debug!("reconciling {} meshes to {} vertices", meshes.len(), shared_count);

    meshes
        .into_iter()
        .map(|positions| {
            let original_count = positions.len();
            assert!(
                original_count > 0,
                "empty meshes must be rejected before reconciliation"
            );

            let mut flat = Vec::with_capacity(shared_count * 3);
            for i in 0..shared_count {
                flat.extend_from_slice(&positions[i % original_count]);
            }
            CanonicalMesh::new(flat, original_count)
        })
        .collect()
}
