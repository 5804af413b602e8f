//! Fix-up pass run once the whole document has been walked: checks every
//! `Index<T>` against its target collection, inverts `Node::children` into
//! `Node::parent`, and enforces the invariants the walker itself has no way
//! to see (a node may have at most one parent, a scene's root nodes must
//! have none).
//!
//! The walker alone can only ever see one entity at a time, so anything
//! that spans entities — "is this index in range", "does any node have two
//! parents" — is deferred to here.

use crate::error::ParseError;
use gltf_json::validation::{Error as ValidationError, Validate};
use gltf_json::{Asset, Index, Path};

/// Runs the fix-up pass over a freshly walked document, returning it
/// unchanged on success. The first invariant violation found — in document
/// order — is returned as a fatal [`ParseError::Reference`].
pub fn resolve(mut asset: Asset) -> Result<Asset, ParseError> {
    check_index_bounds(&asset)?;
    link_parents(&mut asset)?;
    check_scene_roots(&asset)?;
    Ok(asset)
}

/// Walks the whole document with [`Validate::validate_minimally`], which is
/// where every `Index<T>` field reports [`ValidationError::IndexOutOfBounds`]
/// if it names a slot past the end of its target collection. Also runs
/// `validate_completely` for the invariants that additionally need it (e.g.
/// an `Animation` channel's sampler index, which is local to that
/// animation rather than bounds-checked generically).
fn check_index_bounds(asset: &Asset) -> Result<(), ParseError> {
    let mut first_error: Option<(Path, ValidationError)> = None;
    let mut report = |path: &dyn Fn() -> Path, error: ValidationError| {
        if first_error.is_none() {
            first_error = Some((path(), error));
        }
    };

    asset.accessors.validate_minimally(asset, || Path::new().field("accessors"), &mut report);
    asset.animations.validate_minimally(asset, || Path::new().field("animations"), &mut report);
    asset.animations.validate_completely(asset, || Path::new().field("animations"), &mut report);
    asset.buffers.validate_minimally(asset, || Path::new().field("buffers"), &mut report);
    asset.buffer_views.validate_minimally(asset, || Path::new().field("bufferViews"), &mut report);
    asset.cameras.validate_minimally(asset, || Path::new().field("cameras"), &mut report);
    asset.images.validate_minimally(asset, || Path::new().field("images"), &mut report);
    asset.materials.validate_minimally(asset, || Path::new().field("materials"), &mut report);
    asset.meshes.validate_minimally(asset, || Path::new().field("meshes"), &mut report);
    asset.meshes.validate_completely(asset, || Path::new().field("meshes"), &mut report);
    asset.nodes.validate_minimally(asset, || Path::new().field("nodes"), &mut report);
    asset.samplers.validate_minimally(asset, || Path::new().field("samplers"), &mut report);
    asset.scene.validate_minimally(asset, || Path::new().field("scene"), &mut report);
    asset.scenes.validate_minimally(asset, || Path::new().field("scenes"), &mut report);
    asset.skins.validate_minimally(asset, || Path::new().field("skins"), &mut report);
    asset.skins.validate_completely(asset, || Path::new().field("skins"), &mut report);
    asset.textures.validate_minimally(asset, || Path::new().field("textures"), &mut report);
    asset.accessors.validate_completely(asset, || Path::new().field("accessors"), &mut report);
    asset.cameras.validate_completely(asset, || Path::new().field("cameras"), &mut report);

    match first_error {
        Some((path, error)) => Err(ParseError::Reference { path, error }),
        None => Ok(()),
    }
}

/// Inverts `children` into `parent`: every node named in another node's
/// `children` array has its `parent` set to that node's index. A node
/// already claimed by an earlier parent is a fatal error — the format does
/// not allow a node to appear under more than one parent.
fn link_parents(asset: &mut Asset) -> Result<(), ParseError> {
    let mut claims: Vec<Option<Index<gltf_json::scene::Node>>> = vec![None; asset.nodes.len()];

    for (parent_idx, node) in asset.nodes.iter().enumerate() {
        let Some(children) = node.children.as_ref() else {
            continue;
        };
        for child in children {
            let slot = child.value();
            if claims.get(slot).and_then(|c| *c).is_some() {
                return Err(ParseError::Reference {
                    path: Path::new().field("nodes").index(slot).field("parent"),
                    error: ValidationError::Invalid,
                });
            }
            if let Some(slot_ref) = claims.get_mut(slot) {
                *slot_ref = Some(Index::new(parent_idx as u32));
            }
        }
    }

    for (idx, parent) in claims.into_iter().enumerate() {
        asset.nodes[idx].parent = parent;
    }
    Ok(())
}

/// Every root node listed by a scene must not also be claimed as a child by
/// some other node; a node cannot be both a scene root and someone's child.
fn check_scene_roots(asset: &Asset) -> Result<(), ParseError> {
    for (scene_idx, scene) in asset.scenes.iter().enumerate() {
        for root in &scene.nodes {
            let Some(node) = asset.get(*root) else {
                continue;
            };
            if node.parent.is_some() {
                return Err(ParseError::Reference {
                    path: Path::new().field("scenes").index(scene_idx).field("nodes"),
                    error: ValidationError::Invalid,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gltf_json::scene::{Node, Scene};

    fn bare_node() -> Node {
        Node {
            camera: None,
            children: None,
            matrix: None,
            mesh: None,
            rotation: None,
            scale: None,
            translation: None,
            skin: None,
            weights: None,
            name: None,
            parent: None,
            extensions: None,
            extras: None,
        }
    }

    #[test]
    fn links_single_parent() {
        let mut asset = Asset::default();
        asset.nodes.push(Node {
            children: Some(vec![Index::new(1)]),
            ..bare_node()
        });
        asset.nodes.push(bare_node());
        let asset = resolve(asset).unwrap();
        assert_eq!(asset.nodes[1].parent, Some(Index::new(0)));
        assert_eq!(asset.nodes[0].parent, None);
    }

    #[test]
    fn rejects_two_parents_one_child() {
        let mut asset = Asset::default();
        asset.nodes.push(Node {
            children: Some(vec![Index::new(2)]),
            ..bare_node()
        });
        asset.nodes.push(Node {
            children: Some(vec![Index::new(2)]),
            ..bare_node()
        });
        asset.nodes.push(bare_node());
        assert!(matches!(
            resolve(asset),
            Err(ParseError::Reference { .. })
        ));
    }

    #[test]
    fn rejects_scene_root_with_a_parent() {
        let mut asset = Asset::default();
        asset.nodes.push(Node {
            children: Some(vec![Index::new(1)]),
            ..bare_node()
        });
        asset.nodes.push(bare_node());
        asset.scenes.push(Scene {
            nodes: vec![Index::new(1)],
            name: None,
            extensions: None,
            extras: None,
        });
        assert!(matches!(
            resolve(asset),
            Err(ParseError::Reference { .. })
        ));
    }

    #[test]
    fn out_of_bounds_reference_is_fatal() {
        let mut asset = Asset::default();
        asset.nodes.push(Node {
            mesh: Some(Index::new(0)),
            ..bare_node()
        });
        assert!(matches!(
            resolve(asset),
            Err(ParseError::Reference { .. })
        ));
    }
}
