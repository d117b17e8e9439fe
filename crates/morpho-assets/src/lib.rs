//! Morpho Assets - Container decoding and shape preparation
//!
//! Decodes the chunked binary model container, extracts vertex geometry,
//! normalizes it to a canonical scale, and reconciles a whole set of
//! shapes to one shared vertex count for the morph engine.

mod container;
mod error;
mod extract;
mod fallback;
mod library;
mod normalize;
mod reconcile;
pub mod schema;

#[cfg(test)]
mod test_util;

pub use container::{parse_container, ContainerChunks};
pub use error::AssetError;
pub use extract::extract_meshes;
pub use fallback::fallback_sphere;
pub use library::load_shape_set;
pub use normalize::normalize;
pub use reconcile::reconcile;
