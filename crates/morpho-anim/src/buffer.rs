//! Morph interpolation buffers

use morpho_core::{lerp, CanonicalMesh};

/// The three parallel position buffers a morph interpolates across: the
/// live `current` positions, the morph start (`original`), and the morph
/// end (`target`).
///
/// All three always have identical length; a mismatch is a programming
/// error and fails the length assertion loudly.
#[derive(Debug)]
pub struct MorphBuffer {
    current: Vec<f32>,
    original: Vec<f32>,
    target: Vec<f32>,
}

impl MorphBuffer {
    /// Seed all three buffers from one canonical mesh.
    pub fn from_mesh(mesh: &CanonicalMesh) -> Self {
        let positions = mesh.positions().to_vec();
        Self {
            current: positions.clone(),
            original: positions.clone(),
            target: positions,
        }
    }

    /// Snapshot the live positions as the start of a new morph and aim
    /// at a new target mesh.
    pub fn retarget(&mut self, target: &CanonicalMesh) {
        self.assert_lengths();
        assert_eq!(
            self.current.len(),
            target.positions().len(),
            "morph target does not share the reconciled vertex count"
        );
        self.original.copy_from_slice(&self.current);
        self.target.copy_from_slice(target.positions());
    }

    /// Blend the live positions between start and target by the eased
    /// fraction.
    pub fn blend(&mut self, eased: f32) {
        self.assert_lengths();
        for ((current, &original), &target) in self
            .current
            .iter_mut()
            .zip(&self.original)
            .zip(&self.target)
        {
            *current = lerp(original, target, eased);
        }
    }

    /// Snap the live positions onto the target exactly (morph completion).
    pub fn finish(&mut self) {
        self.assert_lengths();
        self.current.copy_from_slice(&self.target);
    }

    /// The live position sequence.
    pub fn current(&self) -> &[f32] {
        &self.current
    }

    /// The live positions as raw bytes, for vertex-buffer upload.
    pub fn current_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.current)
    }

    pub(crate) fn current_mut(&mut self) -> &mut [f32] {
        &mut self.current
    }

    /// Flat length (vertex count * 3).
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    fn assert_lengths(&self) {
        assert_eq!(
            self.current.len(),
            self.original.len(),
            "morph buffers out of sync"
        );
        assert_eq!(
            self.current.len(),
            self.target.len(),
            "morph buffers out of sync"
        );
    }
}
