//! A fully sparse accessor (no `bufferView` of its own) still derives a
//! byte stride from its `componentType`/`type`, and the `Mat2`/small-
//! component special case in `Accessor::data_stride` is exercised alongside
//! the plain `VEC3` case.

const SPARSE_JSON: &str = r#"{
    "asset": { "version": "2.0" },
    "buffers": [
        { "byteLength": 64 }
    ],
    "bufferViews": [
        { "buffer": 0, "byteOffset": 0, "byteLength": 4 },
        { "buffer": 0, "byteOffset": 4, "byteLength": 48 }
    ],
    "accessors": [
        {
            "componentType": 5126,
            "count": 4,
            "type": "VEC3",
            "sparse": {
                "count": 1,
                "indices": { "bufferView": 0, "componentType": 5121 },
                "values": { "bufferView": 1 }
            }
        },
        {
            "bufferView": 1,
            "byteOffset": 0,
            "componentType": 5121,
            "count": 4,
            "type": "MAT2"
        }
    ]
}"#;

#[test]
fn fully_sparse_accessor_derives_stride_without_a_buffer_view() {
    let (asset, _) = gltf::parse_slice(SPARSE_JSON.as_bytes(), &gltf::ParseOptions::default())
        .expect("a fully sparse accessor needs no bufferView of its own");

    let sparse_accessor = &asset.accessors[0];
    assert!(sparse_accessor.buffer_view.is_none());
    assert!(sparse_accessor.is_sparse());
    let stride = sparse_accessor
        .data_stride(&asset)
        .expect("componentType/type alone are enough to derive a stride");
    assert_eq!(stride, 4 * 3);
}

#[test]
fn mat2_with_byte_sized_components_packs_tightly() {
    let (asset, _) = gltf::parse_slice(SPARSE_JSON.as_bytes(), &gltf::ParseOptions::default())
        .expect("well-formed document");

    let mat2_accessor = &asset.accessors[1];
    let stride = mat2_accessor
        .data_stride(&asset)
        .expect("a MAT2 of bytes derives the 8-byte packed stride");
    assert_eq!(stride, 8);
}
