//! Tick-driven morph scheduler
//!
//! Drives two mutually exclusive interpolation phases over the live
//! vertex buffer - the periodic shape morph and the externally requested
//! view morph - plus an additive radial ripple while a morph is in
//! flight. The scheduler has no internal timer; an external render-loop
//! owner calls `tick` once per display refresh.

use glam::Vec3;
use morpho_core::{ease_in_out, CanonicalMesh, MorphConfig};
use tracing::{debug, info};

use crate::buffer::MorphBuffer;

/// Which interpolation, if any, is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MorphState {
    #[default]
    Idle,
    ShapeMorphing,
    ViewMorphing,
}

/// Display mode requested by the embedding layer.
///
/// `Gallery` cycles through the shape pool on a tick boundary;
/// `Detail(i)` pins canonical mesh `i` (the document/detail view).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Gallery,
    Detail(usize),
}

/// Owns the live vertex buffer and the canonical shape pool, advancing
/// at most one morph per tick. The pool is read-only after construction;
/// every mesh must already share one reconciled vertex count.
pub struct MorphScheduler {
    meshes: Vec<CanonicalMesh>,
    buffer: MorphBuffer,
    config: MorphConfig,
    state: MorphState,
    progress: f32,
    active_shape: usize,
    mode: ViewMode,
    ripple_phase: f32,
    tick_count: u64,
}

impl MorphScheduler {
    /// Build a scheduler over a reconciled shape pool, seeded on mesh 0.
    pub fn new(meshes: Vec<CanonicalMesh>, config: MorphConfig) -> Self {
        assert!(!meshes.is_empty(), "scheduler needs at least one canonical mesh");
        let shared = meshes[0].vertex_count();
        for mesh in &meshes {
            assert_eq!(
                mesh.vertex_count(),
                shared,
                "canonical meshes must share one vertex count"
            );
        }
        assert!(config.duration_ticks > 0, "morph duration must be at least one tick");
        assert!(config.shape_interval_ticks > 0, "shape interval must be at least one tick");

        info!("morph scheduler over {} shapes, {} vertices each", meshes.len(), shared);
        let buffer = MorphBuffer::from_mesh(&meshes[0]);
        Self {
            meshes,
            buffer,
            config,
            state: MorphState::Idle,
            progress: 0.0,
            active_shape: 0,
            mode: ViewMode::Gallery,
            ripple_phase: 0.0,
            tick_count: 0,
        }
    }

    /// Advance one animation tick.
    ///
    /// Returns `true` exactly when the live buffer was rewritten and the
    /// render consumer should re-upload it.
    pub fn tick(&mut self) -> bool {
        self.tick_count += 1;
        // The ripple phase runs monotonically and is never reset between
        // morphs.
        self.ripple_phase += self.config.ripple.phase_step;

        if self.state == MorphState::Idle
            && self.mode == ViewMode::Gallery
            && self.meshes.len() > 1
            && self.tick_count % self.config.shape_interval_ticks == 0
        {
            self.start_shape_morph();
        }

        if self.state == MorphState::Idle {
            return false;
        }

        self.progress += 1.0 / self.config.duration_ticks as f32;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.buffer.finish();
            debug!("{:?} finished on shape {}", self.state, self.active_shape);
            self.state = MorphState::Idle;
        } else {
            let eased = ease_in_out(self.progress);
            self.buffer.blend(eased);
            self.apply_ripple();
        }

        true
    }

    /// Start a morph to the next shape in the pool.
    ///
    /// No-op with a single shape or while a view morph is in flight
    /// (view morphs take priority).
    pub fn trigger_shape_morph(&mut self) {
        if self.meshes.len() < 2 || self.state == MorphState::ViewMorphing {
            return;
        }
        self.start_shape_morph();
    }

    /// Request a display mode.
    ///
    /// A mode different from the active one starts a view morph toward
    /// the mode's mesh, unconditionally abandoning any in-flight shape
    /// morph. Requesting the active mode is a no-op.
    pub fn trigger_view_morph(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }

        let target = match mode {
            ViewMode::Gallery => self.active_shape,
            ViewMode::Detail(index) => {
                assert!(
                    index < self.meshes.len(),
                    "view mode names mesh {index} outside the reconciled pool"
                );
                index
            }
        };

        debug!("view morph {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.buffer.retarget(&self.meshes[target]);
        self.progress = 0.0;
        self.state = MorphState::ViewMorphing;
    }

    fn start_shape_morph(&mut self) {
        self.active_shape = (self.active_shape + 1) % self.meshes.len();
        debug!("shape morph -> {}", self.active_shape);
        self.buffer.retarget(&self.meshes[self.active_shape]);
        self.progress = 0.0;
        self.state = MorphState::ShapeMorphing;
    }

    /// Additive radial ripple, vanishing as the morph completes: each
    /// vertex is pushed along its own direction from the origin by
    /// `sin(r * frequency - phase * phase_rate) * amplitude * (1 - progress)`.
    fn apply_ripple(&mut self) {
        let ripple = &self.config.ripple;
        let falloff = ripple.amplitude * (1.0 - self.progress);
        let wave_phase = self.ripple_phase * ripple.phase_rate;

        for vertex in self.buffer.current_mut().chunks_exact_mut(3) {
            let position = Vec3::new(vertex[0], vertex[1], vertex[2]);
            let radius = position.length();
            let displaced =
                position * (1.0 + (radius * ripple.frequency - wave_phase).sin() * falloff);
            vertex[0] = displaced.x;
            vertex[1] = displaced.y;
            vertex[2] = displaced.z;
        }
    }

    /// The live position sequence (read-only snapshot for rendering).
    pub fn positions(&self) -> &[f32] {
        self.buffer.current()
    }

    /// The live positions as raw bytes, for vertex-buffer upload.
    pub fn position_bytes(&self) -> &[u8] {
        self.buffer.current_bytes()
    }

    pub fn state(&self) -> MorphState {
        self.state
    }

    /// Progress of the active morph in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Index of the shape the gallery currently shows or morphs toward.
    pub fn active_shape(&self) -> usize {
        self.active_shape
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// True (pre-padding) vertex count of a pool mesh, for UI display.
    pub fn original_vertex_count(&self, index: usize) -> Option<usize> {
        self.meshes.get(index).map(CanonicalMesh::original_vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpho_core::RippleConfig;

    fn mesh(value: f32, count: usize) -> CanonicalMesh {
        CanonicalMesh::new(vec![value; count * 3], count)
    }

    /// Duration of 8 ticks keeps the progress step (1/8) exact in f32.
    fn test_config() -> MorphConfig {
        MorphConfig {
            duration_ticks: 8,
            shape_interval_ticks: 1000,
            target_size: 2.0,
            ripple: RippleConfig {
                amplitude: 0.0,
                ..RippleConfig::default()
            },
        }
    }

    fn scheduler(shapes: usize) -> MorphScheduler {
        let meshes = (0..shapes).map(|i| mesh(i as f32 + 1.0, 4)).collect();
        MorphScheduler::new(meshes, test_config())
    }

    #[test]
    fn seeds_from_the_first_mesh() {
        let scheduler = scheduler(3);
        assert_eq!(scheduler.positions(), mesh(1.0, 4).positions());
        assert_eq!(scheduler.state(), MorphState::Idle);
    }

    #[test]
    fn idle_ticks_are_clean() {
        let mut scheduler = scheduler(2);
        assert!(!scheduler.tick());
        assert!(!scheduler.tick());
        assert_eq!(scheduler.positions(), mesh(1.0, 4).positions());
    }

    #[test]
    fn current_equals_original_at_progress_zero() {
        let mut scheduler = scheduler(2);
        scheduler.trigger_shape_morph();
        assert_eq!(scheduler.state(), MorphState::ShapeMorphing);
        assert_eq!(scheduler.progress(), 0.0);
        // No tick yet: the live buffer still shows the morph origin.
        assert_eq!(scheduler.positions(), mesh(1.0, 4).positions());
    }

    #[test]
    fn morph_lands_exactly_on_target() {
        let mut scheduler = scheduler(2);
        scheduler.trigger_shape_morph();

        for _ in 0..8 {
            assert!(scheduler.tick());
        }
        assert_eq!(scheduler.state(), MorphState::Idle);
        assert_eq!(scheduler.progress(), 1.0);
        assert_eq!(scheduler.positions(), mesh(2.0, 4).positions());

        // Once idle again, ticks stop dirtying the buffer.
        assert!(!scheduler.tick());
    }

    #[test]
    fn midpoint_is_the_eased_blend() {
        let mut scheduler = scheduler(2);
        scheduler.trigger_shape_morph();

        for _ in 0..4 {
            scheduler.tick();
        }
        // progress = 0.5, eased = 0.5, blending 1.0 toward 2.0.
        for &v in scheduler.positions() {
            assert!((v - 1.5).abs() < 1e-6);
        }
    }

    #[test]
    fn ripple_does_not_survive_completion() {
        let meshes = vec![mesh(1.0, 4), mesh(2.0, 4)];
        let config = MorphConfig {
            duration_ticks: 8,
            shape_interval_ticks: 1000,
            ..MorphConfig::default()
        };
        let mut scheduler = MorphScheduler::new(meshes, config);
        scheduler.trigger_shape_morph();

        for _ in 0..8 {
            scheduler.tick();
        }
        assert_eq!(scheduler.positions(), mesh(2.0, 4).positions());
    }

    #[test]
    fn ripple_displaces_mid_morph() {
        let meshes = vec![mesh(1.0, 4), mesh(2.0, 4)];
        let config = MorphConfig {
            duration_ticks: 8,
            shape_interval_ticks: 1000,
            ..MorphConfig::default()
        };
        let mut rippled = MorphScheduler::new(meshes.clone(), config);
        let mut flat = MorphScheduler::new(meshes, test_config());
        rippled.trigger_shape_morph();
        flat.trigger_shape_morph();

        let mut diverged = false;
        for _ in 0..7 {
            rippled.tick();
            flat.tick();
            if rippled.positions() != flat.positions() {
                diverged = true;
            }
        }
        assert!(diverged);
    }

    #[test]
    fn view_morph_preempts_shape_morph() {
        let mut scheduler = scheduler(3);
        scheduler.trigger_shape_morph();
        for _ in 0..3 {
            scheduler.tick();
        }
        assert_eq!(scheduler.state(), MorphState::ShapeMorphing);

        scheduler.trigger_view_morph(ViewMode::Detail(2));
        assert_eq!(scheduler.state(), MorphState::ViewMorphing);
        assert_eq!(scheduler.progress(), 0.0);

        for _ in 0..8 {
            scheduler.tick();
        }
        assert_eq!(scheduler.positions(), mesh(3.0, 4).positions());
    }

    #[test]
    fn same_mode_request_is_a_no_op() {
        let mut scheduler = scheduler(3);
        scheduler.trigger_view_morph(ViewMode::Detail(2));
        for _ in 0..8 {
            scheduler.tick();
        }

        scheduler.trigger_view_morph(ViewMode::Detail(2));
        assert_eq!(scheduler.state(), MorphState::Idle);
    }

    #[test]
    fn returning_to_gallery_morphs_back_to_the_active_shape() {
        let mut scheduler = scheduler(3);
        scheduler.trigger_view_morph(ViewMode::Detail(2));
        for _ in 0..8 {
            scheduler.tick();
        }

        scheduler.trigger_view_morph(ViewMode::Gallery);
        for _ in 0..8 {
            scheduler.tick();
        }
        assert_eq!(scheduler.positions(), mesh(1.0, 4).positions());
        assert_eq!(scheduler.active_shape(), 0);
    }

    #[test]
    fn gallery_auto_cycles_on_the_tick_boundary() {
        let meshes = vec![mesh(1.0, 4), mesh(2.0, 4)];
        let config = MorphConfig {
            duration_ticks: 8,
            shape_interval_ticks: 5,
            target_size: 2.0,
            ripple: RippleConfig { amplitude: 0.0, ..RippleConfig::default() },
        };
        let mut scheduler = MorphScheduler::new(meshes, config);

        for _ in 0..4 {
            assert!(!scheduler.tick());
        }
        assert!(scheduler.tick());
        assert_eq!(scheduler.state(), MorphState::ShapeMorphing);
        assert_eq!(scheduler.active_shape(), 1);
    }

    #[test]
    fn detail_mode_suspends_auto_cycling() {
        let meshes = vec![mesh(1.0, 4), mesh(2.0, 4)];
        let config = MorphConfig {
            duration_ticks: 8,
            shape_interval_ticks: 5,
            target_size: 2.0,
            ripple: RippleConfig { amplitude: 0.0, ..RippleConfig::default() },
        };
        let mut scheduler = MorphScheduler::new(meshes, config);
        scheduler.trigger_view_morph(ViewMode::Detail(1));
        for _ in 0..8 {
            scheduler.tick();
        }

        for _ in 0..20 {
            scheduler.tick();
        }
        assert_eq!(scheduler.state(), MorphState::Idle);
        assert_eq!(scheduler.mode(), ViewMode::Detail(1));
    }

    #[test]
    fn shape_cycling_wraps_around() {
        let mut scheduler = scheduler(2);
        scheduler.trigger_shape_morph();
        assert_eq!(scheduler.active_shape(), 1);
        for _ in 0..8 {
            scheduler.tick();
        }
        scheduler.trigger_shape_morph();
        assert_eq!(scheduler.active_shape(), 0);
    }

    #[test]
    fn single_shape_never_morphs() {
        let mut scheduler = scheduler(1);
        scheduler.trigger_shape_morph();
        assert_eq!(scheduler.state(), MorphState::Idle);
        for _ in 0..2000 {
            assert!(!scheduler.tick());
        }
    }

    #[test]
    fn reports_original_vertex_counts() {
        let meshes = vec![
            CanonicalMesh::new(vec![0.0; 12], 2),
            CanonicalMesh::new(vec![1.0; 12], 4),
        ];
        let scheduler = MorphScheduler::new(meshes, test_config());
        assert_eq!(scheduler.original_vertex_count(0), Some(2));
        assert_eq!(scheduler.original_vertex_count(1), Some(4));
        assert_eq!(scheduler.original_vertex_count(9), None);
    }

    #[test]
    #[should_panic]
    fn mismatched_pool_lengths_panic() {
        MorphScheduler::new(vec![mesh(0.0, 2), mesh(0.0, 3)], test_config());
    }
}
