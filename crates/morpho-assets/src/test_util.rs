//! Hand-built container byte fixtures shared across the crate's tests.

/// Assemble a container buffer: preamble, JSON metadata chunk, and (when
/// non-empty) a binary payload chunk, with the total length patched in.
pub(crate) fn build_container(json: &str, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"glTF");
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes()); // total length, patched below

    bytes.extend_from_slice(&(json.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"JSON");
    bytes.extend_from_slice(json.as_bytes());

    if !payload.is_empty() {
        bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        bytes.extend_from_slice(b"BIN\0");
        bytes.extend_from_slice(payload);
    }

    let total = bytes.len() as u32;
    bytes[8..12].copy_from_slice(&total.to_le_bytes());
    bytes
}

/// Pack position triples as little-endian f32 payload bytes.
pub(crate) fn position_bytes(positions: &[[f32; 3]]) -> Vec<u8> {
    positions
        .iter()
        .flatten()
        .flat_map(|v| v.to_le_bytes())
        .collect()
}

/// Pack u16 indices as little-endian payload bytes.
pub(crate) fn index_bytes_u16(indices: &[u16]) -> Vec<u8> {
    indices.iter().flat_map(|i| i.to_le_bytes()).collect()
}

/// A complete container holding one non-indexed triangle:
/// `(0,0,0), (1,0,0), (0,1,0)`.
pub(crate) fn triangle_container() -> Vec<u8> {
    let payload = position_bytes(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    let json = r#"{
        "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}],
        "accessors": [{"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3"}],
        "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 36}]
    }"#;
    build_container(json, &payload)
}
