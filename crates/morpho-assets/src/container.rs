//! Chunked binary container reader
//!
//! The container is a 12-byte preamble (magic, version, total length)
//! followed by back-to-back chunks, each an 8-byte little-endian
//! `(length, type)` header plus `length` bytes of data. The first chunk
//! must be UTF-8 JSON metadata; the second, if present, is the raw
//! binary payload.

use tracing::{debug, warn};

use crate::error::AssetError;
use crate::schema::Document;

/// `glTF` in little-endian ASCII.
const CONTAINER_MAGIC: u32 = 0x4654_6C67;
/// `JSON` chunk tag.
const CHUNK_JSON: u32 = 0x4E4F_534A;
/// `BIN\0` chunk tag.
const CHUNK_BIN: u32 = 0x004E_4942;

const PREAMBLE_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// The two chunks of a decoded container: the parsed metadata document
/// and a borrowed view of the binary payload. The payload slice never
/// overlaps the bytes consumed as metadata.
#[derive(Debug)]
pub struct ContainerChunks<'a> {
    pub document: Document,
    pub payload: Option<&'a [u8]>,
}

/// Validate and slice a container byte buffer into its two chunks.
///
/// Pure over the input; the payload is a zero-copy subslice of `bytes`.
pub fn parse_container(bytes: &[u8]) -> Result<ContainerChunks<'_>, AssetError> {
    if bytes.len() < PREAMBLE_LEN {
        return Err(AssetError::Format(format!(
            "buffer of {} bytes is shorter than the {PREAMBLE_LEN}-byte header",
            bytes.len()
        )));
    }

    let magic = read_u32_le(&bytes[0..]);
    if magic != CONTAINER_MAGIC {
        return Err(AssetError::Format(format!(
            "bad magic number {magic:#010x}, expected {CONTAINER_MAGIC:#010x}"
        )));
    }

    // Version and total length must be present but are not enforced.
    let version = read_u32_le(&bytes[4..]);
    debug!("container version {}, {} bytes", version, bytes.len());

    let (metadata, metadata_tag, next) = read_chunk(bytes, PREAMBLE_LEN)?;
    if metadata_tag != CHUNK_JSON {
        return Err(AssetError::Format(format!(
            "first chunk tag {metadata_tag:#010x} is not the metadata tag {CHUNK_JSON:#010x}"
        )));
    }

    let payload = if next < bytes.len() {
        let (data, tag, _) = read_chunk(bytes, next)?;
        if tag != CHUNK_BIN {
            warn!("payload chunk carries unexpected tag {:#010x}", tag);
        }
        Some(data)
    } else {
        None
    };

    let document: Document = serde_json::from_slice(metadata)
        .map_err(|e| AssetError::Format(format!("metadata is not valid JSON: {e}")))?;

    Ok(ContainerChunks { document, payload })
}

/// Read the chunk starting at `offset`, returning its data, type tag,
/// and the offset of the following chunk.
fn read_chunk(bytes: &[u8], offset: usize) -> Result<(&[u8], u32, usize), AssetError> {
    let Some(header) = bytes.get(offset..offset + CHUNK_HEADER_LEN) else {
        return Err(AssetError::Format(format!(
            "truncated chunk header at offset {offset}"
        )));
    };
    let length = read_u32_le(header) as usize;
    let tag = read_u32_le(&header[4..]);

    let data_start = offset + CHUNK_HEADER_LEN;
    let Some(data) = bytes.get(data_start..data_start + length) else {
        return Err(AssetError::Format(format!(
            "chunk at offset {offset} declares {length} bytes past the buffer end"
        )));
    };

    Ok((data, tag, data_start + length))
}

/// Little-endian u32 from the first four bytes of `bytes`.
fn read_u32_le(bytes: &[u8]) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[..4]);
    u32::from_le_bytes(raw)
}
