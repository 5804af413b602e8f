//! Exercises the `.glb` container: a JSON chunk padded to a 4-byte boundary
//! plus an embedded `BIN` chunk, framed by hand the way a real exporter
//! would lay one out.

fn pad4(mut bytes: Vec<u8>, pad_byte: u8) -> Vec<u8> {
    while bytes.len() % 4 != 0 {
        bytes.push(pad_byte);
    }
    bytes
}

fn glb_chunk(ty: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::new();
    chunk.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    chunk.extend_from_slice(ty);
    chunk.extend_from_slice(payload);
    chunk
}

fn glb(json: &[u8], bin: Option<&[u8]>) -> Vec<u8> {
    let json_chunk = glb_chunk(b"JSON", &pad4(json.to_vec(), b' '));
    let bin_chunk = bin.map(|b| glb_chunk(b"BIN\0", &pad4(b.to_vec(), 0)));

    let mut body = json_chunk;
    if let Some(bin_chunk) = &bin_chunk {
        body.extend_from_slice(bin_chunk);
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&((12 + body.len()) as u32).to_le_bytes());
    out.extend_from_slice(&body);
    out
}

const MINIMAL_JSON: &str = r#"{"asset":{"version":"2.0"}}"#;

#[test]
fn glb_without_bin_chunk_parses() {
    let bytes = glb(MINIMAL_JSON.as_bytes(), None);
    let (asset, diagnostics) =
        gltf::parse_slice(&bytes, &gltf::ParseOptions::default()).expect("valid GLB");
    assert!(asset.file_info.bin.is_none());
    assert!(diagnostics.is_empty());
}

#[test]
fn glb_with_bin_chunk_is_recorded_and_noted_in_diagnostics() {
    let bin_payload = [1u8, 2, 3, 4, 5, 6, 7, 8];
    let bytes = glb(MINIMAL_JSON.as_bytes(), Some(&bin_payload));
    let (asset, diagnostics) =
        gltf::parse_slice(&bytes, &gltf::ParseOptions::default()).expect("valid GLB with BIN");
    assert_eq!(asset.file_info.bin.as_deref(), Some(&bin_payload[..]));
    assert!(!diagnostics.is_empty());
}

#[test]
fn wrong_glb_version_is_rejected() {
    let mut bytes = glb(MINIMAL_JSON.as_bytes(), None);
    bytes[4..8].copy_from_slice(&1u32.to_le_bytes());
    let result = gltf::parse_slice(&bytes, &gltf::ParseOptions::default());
    assert!(result.is_err());
}
