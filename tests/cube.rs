//! A minimal but complete document: one buffer, one bufferView, one
//! accessor, one mesh with a single triangle primitive, one node, and the
//! default scene referencing it.

const CUBE_JSON: &str = r#"{
    "asset": { "version": "2.0" },
    "buffers": [
        { "byteLength": 36 }
    ],
    "bufferViews": [
        { "buffer": 0, "byteOffset": 0, "byteLength": 36, "target": 34962 }
    ],
    "accessors": [
        {
            "bufferView": 0,
            "componentType": 5126,
            "count": 3,
            "type": "VEC3",
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 1.0, 0.0]
        }
    ],
    "meshes": [
        {
            "primitives": [
                {
                    "attributes": { "POSITION": 0 },
                    "mode": 4
                }
            ]
        }
    ],
    "nodes": [
        { "mesh": 0, "name": "Triangle" }
    ],
    "scenes": [
        { "nodes": [0] }
    ],
    "scene": 0
}"#;

#[test]
fn parses_the_happy_path() {
    let (asset, diagnostics) =
        gltf::parse_slice(CUBE_JSON.as_bytes(), &gltf::ParseOptions::default())
            .expect("a well-formed document should parse");

    assert!(diagnostics.is_empty());
    assert_eq!(asset.accessors.len(), 1);
    assert_eq!(asset.meshes.len(), 1);
    assert_eq!(asset.nodes.len(), 1);
    assert_eq!(asset.scenes.len(), 1);

    let node = &asset.nodes[0];
    assert_eq!(node.name.as_deref(), Some("Triangle"));
    assert!(node.mesh.is_some());
    assert!(node.parent.is_none(), "a scene root has no parent");

    let accessor = &asset.accessors[0];
    let stride = accessor
        .data_stride(&asset)
        .expect("a FLOAT VEC3 accessor derives a stride");
    assert_eq!(stride, 12);
}

#[test]
fn unsupported_version_is_rejected() {
    let json = CUBE_JSON.replace("\"2.0\"", "\"1.0\"");
    let result = gltf::parse_slice(json.as_bytes(), &gltf::ParseOptions::default());
    assert!(matches!(
        result,
        Err(gltf::ParseError::UnsupportedVersion { .. })
    ));
}

#[test]
fn unrecognized_attribute_semantic_is_retained_not_fatal() {
    let json = CUBE_JSON.replace(r#""POSITION": 0"#, r#""POSITION": 0, "FOOBAR": 0"#);
    let (asset, _diagnostics) = gltf::parse_slice(json.as_bytes(), &gltf::ParseOptions::default())
        .expect("an unrecognized attribute semantic must not abort parsing");

    let attributes = &asset.meshes[0].primitives[0].attributes;
    let found = attributes.keys().any(|semantic| {
        matches!(
            semantic,
            gltf::json::validation::Checked::Valid(gltf::json::mesh::Semantic::Invalid(name))
                if name == "FOOBAR"
        )
    });
    assert!(found, "the raw \"FOOBAR\" attribute name should survive parsing");
}
