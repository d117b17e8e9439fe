/// Errors that can occur while decoding and preparing a model asset.
///
/// All variants except `EmptyShapeSet` are per-asset: the loading
/// orchestration substitutes the fallback shape and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("invalid container: {0}")]
    Format(String),

    #[error("unsupported container feature: {0}")]
    Unsupported(String),

    #[error("malformed mesh data: {0}")]
    MalformedMesh(String),

    #[error("mesh has a zero-extent bounding box")]
    DegenerateGeometry,

    #[error("no assets to load")]
    EmptyShapeSet,
}
