//! End-to-end coverage of the resolver's entity-spanning invariants, run
//! through `parse_slice` rather than calling `resolve::resolve` directly.

fn asset_with_nodes(nodes_json: &str, scenes_json: &str) -> String {
    format!(
        r#"{{"asset":{{"version":"2.0"}},"nodes":{nodes_json},"scenes":{scenes_json}}}"#
    )
}

#[test]
fn a_node_may_reference_children_defined_later_in_the_document() {
    // Node 0's children array names node 1, which appears after it in the
    // "nodes" array — the walker has no trouble with this since references
    // are plain indices, resolved only after the whole document is walked.
    let json = asset_with_nodes(
        r#"[{"children":[1]},{}]"#,
        r#"[{"nodes":[0]}]"#,
    );
    let (asset, _) = gltf::parse_slice(json.as_bytes(), &gltf::ParseOptions::default())
        .expect("a forward reference to a later node is not an error");
    assert_eq!(asset.nodes[1].parent.map(|p| p.value()), Some(0));
    assert!(asset.nodes[0].parent.is_none());
}

#[test]
fn a_node_claimed_by_two_parents_is_fatal() {
    let json = asset_with_nodes(
        r#"[{"children":[2]},{"children":[2]},{}]"#,
        r#"[]"#,
    );
    let result = gltf::parse_slice(json.as_bytes(), &gltf::ParseOptions::default());
    assert!(matches!(result, Err(gltf::ParseError::Reference { .. })));
}

#[test]
fn a_scene_root_with_a_parent_is_fatal() {
    let json = asset_with_nodes(
        r#"[{"children":[1]},{}]"#,
        r#"[{"nodes":[1]}]"#,
    );
    let result = gltf::parse_slice(json.as_bytes(), &gltf::ParseOptions::default());
    assert!(matches!(result, Err(gltf::ParseError::Reference { .. })));
}

#[test]
fn an_out_of_bounds_mesh_reference_is_fatal() {
    let json = asset_with_nodes(r#"[{"mesh":0}]"#, r#"[]"#);
    let result = gltf::parse_slice(json.as_bytes(), &gltf::ParseOptions::default());
    assert!(matches!(result, Err(gltf::ParseError::Reference { .. })));
}
