//! Consumed subset of the container's metadata schema
//!
//! Only the fields the extractor walks are modeled; everything else in
//! the metadata JSON is ignored by serde. Schema presence checks happen
//! in the extractor, not here.

use serde::Deserialize;

/// Root of the decoded metadata chunk.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub meshes: Vec<Mesh>,
    #[serde(default)]
    pub accessors: Vec<Accessor>,
    #[serde(default)]
    pub buffer_views: Vec<BufferView>,
}

#[derive(Debug, Deserialize)]
pub struct Mesh {
    pub name: Option<String>,
    #[serde(default)]
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Deserialize)]
pub struct Primitive {
    #[serde(default)]
    pub attributes: Attributes,
    /// Accessor index of the optional index array.
    pub indices: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Attributes {
    /// Accessor index of the vertex position array.
    #[serde(rename = "POSITION")]
    pub position: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    pub buffer_view: Option<usize>,
    #[serde(default)]
    pub byte_offset: usize,
    pub component_type: u32,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    /// Buffer index; anything other than the single embedded payload
    /// (index 0) is unsupported.
    #[serde(default)]
    pub buffer: usize,
    #[serde(default)]
    pub byte_offset: usize,
}
