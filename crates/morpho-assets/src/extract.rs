//! Mesh extraction from decoded container metadata
//!
//! Walks the metadata's mesh list in document order, resolves each
//! primitive's accessors against the binary payload chunk, and
//! materializes typed position and index arrays.

use morpho_core::MeshPrimitive;
use tracing::debug;

use crate::container::ContainerChunks;
use crate::error::AssetError;
use crate::schema::{Accessor, Document};

/// f32 component type code.
const COMPONENT_F32: u32 = 5126;
/// u16 component type code.
const COMPONENT_U16: u32 = 5123;
/// u32 component type code.
const COMPONENT_U32: u32 = 5125;

/// Extract every primitive of every mesh, in document order.
pub fn extract_meshes(chunks: &ContainerChunks) -> Result<Vec<MeshPrimitive>, AssetError> {
    let mut primitives = Vec::new();

    for (mesh_index, mesh) in chunks.document.meshes.iter().enumerate() {
        for (prim_index, primitive) in mesh.primitives.iter().enumerate() {
            let position_accessor = primitive.attributes.position.ok_or_else(|| {
                AssetError::MalformedMesh(format!(
                    "mesh {mesh_index} primitive {prim_index} has no POSITION attribute"
                ))
            })?;

            let positions = read_positions(chunks, position_accessor)?;

            let indices = match primitive.indices {
                Some(index_accessor) => {
                    let indices = read_indices(chunks, index_accessor)?;
                    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
                        return Err(AssetError::MalformedMesh(format!(
                            "index {bad} out of range for {} vertices",
                            positions.len()
                        )));
                    }
                    Some(indices)
                }
                None => None,
            };

            debug!(
                "mesh {} ('{}') primitive {}: {} vertices, {} indices",
                mesh_index,
                mesh.name.as_deref().unwrap_or("unnamed"),
                prim_index,
                positions.len(),
                indices.as_ref().map_or(0, Vec::len)
            );

            primitives.push(MeshPrimitive { positions, indices });
        }
    }

    Ok(primitives)
}

/// Read a packed f32 position accessor as (x, y, z) triples.
fn read_positions(
    chunks: &ContainerChunks,
    accessor_index: usize,
) -> Result<Vec<[f32; 3]>, AssetError> {
    let accessor = lookup_accessor(&chunks.document, accessor_index)?;
    if accessor.component_type != COMPONENT_F32 {
        return Err(AssetError::Unsupported(format!(
            "position component type {} (only f32 = {COMPONENT_F32} is supported)",
            accessor.component_type
        )));
    }

    let data = accessor_bytes(chunks, accessor, 12)?;
    let mut positions = Vec::with_capacity(accessor.count);
    for triple in data.chunks_exact(12) {
        positions.push([
            read_f32_le(&triple[0..4]),
            read_f32_le(&triple[4..8]),
            read_f32_le(&triple[8..12]),
        ]);
    }
    Ok(positions)
}

/// Read an index accessor, widening u16 indices to u32.
fn read_indices(chunks: &ContainerChunks, accessor_index: usize) -> Result<Vec<u32>, AssetError> {
    let accessor = lookup_accessor(&chunks.document, accessor_index)?;
    match accessor.component_type {
        COMPONENT_U16 => {
            let data = accessor_bytes(chunks, accessor, 2)?;
            Ok(data
                .chunks_exact(2)
                .map(|raw| u16::from_le_bytes([raw[0], raw[1]]) as u32)
                .collect())
        }
        COMPONENT_U32 => {
            let data = accessor_bytes(chunks, accessor, 4)?;
            Ok(data
                .chunks_exact(4)
                .map(|raw| u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
                .collect())
        }
        other => Err(AssetError::Unsupported(format!(
            "index component type {other} (only u16 = {COMPONENT_U16} and u32 = {COMPONENT_U32})"
        ))),
    }
}

fn lookup_accessor(document: &Document, index: usize) -> Result<&Accessor, AssetError> {
    document
        .accessors
        .get(index)
        .ok_or_else(|| AssetError::MalformedMesh(format!("accessor index {index} out of range")))
}

/// Resolve an accessor's packed byte range inside the binary payload.
///
/// Absolute offset = buffer view offset + accessor offset; the data is
/// `count` consecutive elements of `element_size` bytes.
fn accessor_bytes<'p>(
    chunks: &ContainerChunks<'p>,
    accessor: &Accessor,
    element_size: usize,
) -> Result<&'p [u8], AssetError> {
    let view_index = accessor
        .buffer_view
        .ok_or_else(|| AssetError::MalformedMesh("accessor has no buffer view".into()))?;
    let view = chunks.document.buffer_views.get(view_index).ok_or_else(|| {
        AssetError::MalformedMesh(format!("buffer view index {view_index} out of range"))
    })?;

    if view.buffer != 0 {
        return Err(AssetError::Unsupported(format!(
            "reference to buffer {}; only the single embedded payload is supported",
            view.buffer
        )));
    }

    let payload = chunks.payload.ok_or_else(|| {
        AssetError::MalformedMesh(
            "metadata references vertex data but the container has no payload chunk".into(),
        )
    })?;

    let start = view
        .byte_offset
        .checked_add(accessor.byte_offset)
        .ok_or_else(|| AssetError::MalformedMesh("accessor byte offset overflows".into()))?;
    let length = accessor
        .count
        .checked_mul(element_size)
        .ok_or_else(|| AssetError::MalformedMesh("accessor byte length overflows".into()))?;
    let end = start
        .checked_add(length)
        .ok_or_else(|| AssetError::MalformedMesh("accessor byte range overflows".into()))?;

    payload.get(start..end).ok_or_else(|| {
        AssetError::MalformedMesh(format!(
            "accessor range {start}..{end} extends past the {}-byte payload",
            payload.len()
        ))
    })
}

/// Little-endian f32 from the first four bytes of `bytes`.
fn read_f32_le(bytes: &[u8]) -> f32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[..4]);
    f32::from_le_bytes(raw)
}
