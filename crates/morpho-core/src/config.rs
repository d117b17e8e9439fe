//! Animation configuration
//!
//! Tunable constants for the morph scheduler, grouped into a config
//! struct so the driver can override them from settings.

use serde::{Deserialize, Serialize};

/// Configuration for the morph scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorphConfig {
    /// How many ticks a morph takes from start to finish
    pub duration_ticks: u32,
    /// Tick-count boundary at which an idle scheduler starts the next
    /// shape morph (gallery mode only)
    pub shape_interval_ticks: u64,
    /// Largest bounding-box dimension every loaded mesh is scaled to
    pub target_size: f32,
    /// Surface ripple applied while a morph is in flight
    pub ripple: RippleConfig,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            duration_ticks: 90,
            shape_interval_ticks: 300,
            target_size: 2.0,
            ripple: RippleConfig::default(),
        }
    }
}

/// Parameters of the additive radial ripple.
///
/// Per vertex at radius `r`, the displacement scale is
/// `sin(r * frequency - phase * phase_rate) * amplitude * (1 - progress)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RippleConfig {
    /// Spatial frequency of the wave along the radius
    pub frequency: f32,
    /// How fast the wave travels as the global phase advances
    pub phase_rate: f32,
    /// Peak displacement as a fraction of the vertex radius
    pub amplitude: f32,
    /// Global phase advance per tick
    pub phase_step: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            frequency: 5.0,
            phase_rate: 3.0,
            amplitude: 0.05,
            phase_step: 0.05,
        }
    }
}
