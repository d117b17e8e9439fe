/// Geometry decoded from a single container primitive (renderer-agnostic).
/// Carries both the raw vertex positions and, if the primitive was indexed,
/// the decoded index list, so callers can choose either form.
#[derive(Debug, Clone)]
pub struct MeshPrimitive {
    pub positions: Vec<[f32; 3]>,
    pub indices: Option<Vec<u32>>,
}

impl MeshPrimitive {
    /// Number of unique vertices carried by this primitive.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Expand into a flat, non-indexed triangle list.
    ///
    /// Each output triple is `positions[indices[i]]`, iterated in index
    /// order, duplicating shared vertices. A non-indexed primitive returns
    /// its positions unchanged.
    pub fn deindexed(&self) -> Vec<[f32; 3]> {
        match &self.indices {
            Some(indices) => indices
                .iter()
                .map(|&i| self.positions[i as usize])
                .collect(),
            None => self.positions.clone(),
        }
    }
}

/// A mesh brought to the shared reconciled vertex count.
///
/// `positions` is a flat `x, y, z, x, y, z, ...` sequence of exactly
/// `vertex_count * 3` floats. Reconciliation only ever pads, so
/// `vertex_count >= original_vertex_count`; the original count is kept
/// so callers can report true model complexity after padding.
#[derive(Debug, Clone)]
pub struct CanonicalMesh {
    positions: Vec<f32>,
    vertex_count: usize,
    original_vertex_count: usize,
}

impl CanonicalMesh {
    /// Build a canonical mesh from a flat position sequence.
    pub fn new(positions: Vec<f32>, original_vertex_count: usize) -> Self {
        assert_eq!(positions.len() % 3, 0, "flat position length must be a multiple of 3");
        let vertex_count = positions.len() / 3;
        assert!(
            original_vertex_count <= vertex_count,
            "reconciliation pads, never truncates"
        );
        Self {
            positions,
            vertex_count,
            original_vertex_count,
        }
    }

    /// The flat position sequence.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Vertex count after reconciliation.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Vertex count before padding (true model complexity).
    pub fn original_vertex_count(&self) -> usize {
        self.original_vertex_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deindexed_expands_shared_vertices() {
        let prim = MeshPrimitive {
            positions: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
            ],
            indices: Some(vec![0, 1, 2, 2, 1, 3]),
        };

        let flat = prim.deindexed();
        assert_eq!(flat.len(), 6);
        assert_eq!(flat[0], [0.0, 0.0, 0.0]);
        assert_eq!(flat[3], [0.0, 1.0, 0.0]);
        assert_eq!(flat[5], [1.0, 1.0, 0.0]);
    }

    #[test]
    fn deindexed_passes_through_without_indices() {
        let prim = MeshPrimitive {
            positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            indices: None,
        };
        assert_eq!(prim.deindexed(), prim.positions);
    }

    #[test]
    fn canonical_mesh_counts() {
        let mesh = CanonicalMesh::new(vec![0.0; 12], 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.original_vertex_count(), 2);
    }

    #[test]
    #[should_panic]
    fn canonical_mesh_rejects_ragged_positions() {
        CanonicalMesh::new(vec![0.0; 7], 1);
    }
}
