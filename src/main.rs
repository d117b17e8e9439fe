//! Morpho - morphing shape viewer core
//!
//! Headless driver for the Morpho crates: loads binary model containers
//! named on the command line, prepares the canonical shape set (with
//! fallback substitution for assets that fail to decode), and drives the
//! morph scheduler through a simulated display loop. A real embedding
//! would call `tick` from its render callback and upload
//! `position_bytes` whenever a tick reports the buffer dirty.

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use morpho_anim::{MorphScheduler, ViewMode};
use morpho_assets::load_shape_set;

mod settings;

use settings::ViewerSettings;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: morpho <model.glb> [more.glb ...]");
    }

    let settings = ViewerSettings::load();

    let mut assets = Vec::with_capacity(paths.len());
    for path in &paths {
        let bytes = fs::read(path).with_context(|| format!("failed to read '{path}'"))?;
        assets.push(bytes);
    }

    let shapes = load_shape_set(&assets, settings.morph.target_size)
        .context("could not prepare any shapes")?;
    for (path, shape) in paths.iter().zip(&shapes) {
        info!(
            "'{}': {} vertices ({} after reconciliation)",
            path,
            shape.original_vertex_count(),
            shape.vertex_count()
        );
    }

    let detail_shape = shapes.len() - 1;
    let mut scheduler = MorphScheduler::new(shapes, settings.morph.clone());

    // Simulated display loop: a detail view is requested a third of the
    // way in and released at two thirds, preempting whatever shape morph
    // is in flight at those points.
    let total_ticks = settings.demo_ticks;
    let mut dirty_ticks = 0u64;
    for tick in 0..total_ticks {
        if tick == total_ticks / 3 {
            info!("requesting detail view of shape {}", detail_shape);
            scheduler.trigger_view_morph(ViewMode::Detail(detail_shape));
        }
        if tick == 2 * total_ticks / 3 {
            info!("returning to the gallery");
            scheduler.trigger_view_morph(ViewMode::Gallery);
        }

        if scheduler.tick() {
            // A renderer would re-upload scheduler.position_bytes() here.
            dirty_ticks += 1;
        }
    }

    info!(
        "ran {} ticks, {} dirty ({} bytes per upload)",
        total_ticks,
        dirty_ticks,
        scheduler.position_bytes().len()
    );
    info!(
        "final state: {:?}, mode {:?}, active shape {}",
        scheduler.state(),
        scheduler.mode(),
        scheduler.active_shape()
    );

    Ok(())
}
