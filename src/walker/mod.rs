//! Schema walker: one recursive-descent function per glTF entity kind,
//! consuming the flat token stream via the value helpers and filling in
//! `gltf_json` records. References are stored as plain `gltf_json::Index<T>`
//! values built directly from the wire index rather than an `index + 1`
//! encoding; bounds are checked later by the resolver rather than the
//! walker itself, so there is no encoding trick to invert.

mod accessor;
mod animation;
mod asset;
mod buffer;
mod camera;
mod image;
mod material;
mod mesh;
mod scene;
mod skin;
mod texture;

use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use crate::value;
use gltf_json::{Asset as Document, Path};
use log::warn;

/// Calls `visit(key, value_index)` once per key/value pair in the object at
/// `index`, in source order. `visit` returns the cursor just past the value
/// it consumed (via a specific parser, or [`crate::value::skip_subtree`]
/// for unrecognized keys). Returns the cursor just past the whole object.
pub(crate) fn walk_object(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
    mut visit: impl FnMut(&str, usize) -> Result<usize, ParseError>,
) -> Result<usize, ParseError> {
    let object = *tokens.get(index).ok_or_else(|| schema_err(path, "unexpected end of input"))?;
    if object.kind != TokenKind::Object {
        return Err(schema_err(path, "expected an object"));
    }
    let mut cursor = index + 1;
    for _ in 0..object.size {
        let key_token = tokens[cursor];
        if key_token.kind != TokenKind::String {
            return Err(schema_err(path, "expected a string key"));
        }
        let key = value::parse_string(bytes, &key_token)
            .ok_or_else(|| schema_err(path, "malformed object key"))?;
        let value_index = cursor + 1;
        cursor = visit(&key, value_index)?;
    }
    Ok(cursor)
}

/// Calls `visit(element_index)` once per element in the array at `index`,
/// in source order, collecting the results. Returns the collected elements
/// and the cursor just past the whole array.
pub(crate) fn walk_array<T>(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
    mut visit: impl FnMut(usize) -> Result<(T, usize), ParseError>,
) -> Result<(Vec<T>, usize), ParseError> {
    let _ = bytes;
    let array = *tokens.get(index).ok_or_else(|| schema_err(path, "unexpected end of input"))?;
    if array.kind != TokenKind::Array {
        return Err(schema_err(path, "expected an array"));
    }
    let mut items = Vec::with_capacity(array.size);
    let mut cursor = index + 1;
    for _ in 0..array.size {
        let (item, next) = visit(cursor)?;
        items.push(item);
        cursor = next;
    }
    Ok((items, cursor))
}

/// Parses an array of `Index<u32>`-shaped integers, e.g. `nodes.children`
/// or `scene.nodes`.
pub(crate) fn walk_index_array<T>(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Vec<gltf_json::Index<T>>, usize), ParseError> {
    walk_array(bytes, tokens, index, path, |i| {
        let token = tokens[i];
        let value = value::to_u32(bytes, &token)
            .ok_or_else(|| schema_err(path, "expected an unsigned integer"))?;
        Ok((gltf_json::Index::new(value), i + 1))
    })
}

pub(crate) fn schema_err(path: &Path, message: &str) -> ParseError {
    ParseError::Schema {
        path: path.clone(),
        message: message.to_string(),
    }
}

pub(crate) fn expect_string(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<String, ParseError> {
    value::parse_string(bytes, &tokens[index]).ok_or_else(|| schema_err(path, "expected a string"))
}

pub(crate) fn expect_u32(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<u32, ParseError> {
    value::to_u32(bytes, &tokens[index]).ok_or_else(|| schema_err(path, "expected an unsigned integer"))
}

pub(crate) fn expect_f32(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<f32, ParseError> {
    value::to_f32(bytes, &tokens[index]).ok_or_else(|| schema_err(path, "expected a number"))
}

pub(crate) fn expect_bool(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<bool, ParseError> {
    value::to_bool(bytes, &tokens[index]).ok_or_else(|| schema_err(path, "expected true or false"))
}

pub(crate) fn raw_value(bytes: &[u8], tokens: &[Token], index: usize) -> gltf_json::extras::RawValue {
    gltf_json::extras::RawValue::from_string(value::raw_slice(bytes, &tokens[index]).to_string())
}

/// Parses the root JSON document at token index `0` into a `gltf_json::Asset`
/// still carrying unresolved (but index-valid-shaped) references; the
/// resolver performs the fix-up pass afterward.
pub fn parse_root(bytes: &[u8], tokens: &[Token]) -> Result<Document, ParseError> {
    let path = Path::new();
    let mut document = Document::default();
    let mut have_asset = false;

    walk_object(bytes, tokens, 0, &path, |key, value_index| match key {
        "asset" => {
            let (value, next) = asset::parse(bytes, tokens, value_index, &path.field("asset"))?;
            document.asset = value;
            have_asset = true;
            Ok(next)
        }
        "accessors" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                accessor::parse(bytes, tokens, i, &path.field("accessors"))
            })?;
            document.accessors = value;
            Ok(next)
        }
        "animations" | "animation" => {
            if key == "animation" {
                warn!("accepting legacy singular \"animation\" key for bug-compatibility");
            }
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                animation::parse(bytes, tokens, i, &path.field("animations"))
            })?;
            document.animations = value;
            Ok(next)
        }
        "buffers" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                buffer::parse_buffer(bytes, tokens, i, &path.field("buffers"))
            })?;
            document.buffers = value;
            Ok(next)
        }
        "bufferViews" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                buffer::parse_view(bytes, tokens, i, &path.field("bufferViews"))
            })?;
            document.buffer_views = value;
            Ok(next)
        }
        "cameras" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                camera::parse(bytes, tokens, i, &path.field("cameras"))
            })?;
            document.cameras = value;
            Ok(next)
        }
        "images" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                image::parse(bytes, tokens, i, &path.field("images"))
            })?;
            document.images = value;
            Ok(next)
        }
        "materials" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                material::parse(bytes, tokens, i, &path.field("materials"))
            })?;
            document.materials = value;
            Ok(next)
        }
        "meshes" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                mesh::parse(bytes, tokens, i, &path.field("meshes"))
            })?;
            document.meshes = value;
            Ok(next)
        }
        "nodes" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                scene::parse_node(bytes, tokens, i, &path.field("nodes"))
            })?;
            document.nodes = value;
            Ok(next)
        }
        "samplers" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                texture::parse_sampler(bytes, tokens, i, &path.field("samplers"))
            })?;
            document.samplers = value;
            Ok(next)
        }
        "scene" => {
            let token = tokens[value_index];
            let value = value::to_u32(bytes, &token)
                .ok_or_else(|| schema_err(&path, "expected an unsigned integer"))?;
            document.scene = Some(gltf_json::Index::new(value));
            Ok(value_index + 1)
        }
        "scenes" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                scene::parse_scene(bytes, tokens, i, &path.field("scenes"))
            })?;
            document.scenes = value;
            Ok(next)
        }
        "skins" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                skin::parse(bytes, tokens, i, &path.field("skins"))
            })?;
            document.skins = value;
            Ok(next)
        }
        "textures" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                texture::parse_texture(bytes, tokens, i, &path.field("textures"))
            })?;
            document.textures = value;
            Ok(next)
        }
        "extensionsUsed" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                let s = value::parse_string(bytes, &tokens[i])
                    .ok_or_else(|| schema_err(&path, "expected a string"))?;
                Ok((s, i + 1))
            })?;
            document.extensions_used = value;
            Ok(next)
        }
        "extensionsRequired" => {
            let (value, next) = walk_array(bytes, tokens, value_index, &path, |i| {
                let s = value::parse_string(bytes, &tokens[i])
                    .ok_or_else(|| schema_err(&path, "expected a string"))?;
                Ok((s, i + 1))
            })?;
            document.extensions_required = value;
            Ok(next)
        }
        "extensions" => {
            let mut entries = Vec::new();
            let next = walk_object(bytes, tokens, value_index, &path, |name, entry_index| {
                entries.push((
                    name.to_string(),
                    gltf_json::extras::RawValue::from_string(
                        value::raw_slice(bytes, &tokens[entry_index]).to_string(),
                    ),
                ));
                Ok(value::skip_subtree(tokens, entry_index))
            })?;
            document.extensions = entries;
            Ok(next)
        }
        "extras" => {
            document.extras = Some(gltf_json::extras::RawValue::from_string(
                value::raw_slice(bytes, &tokens[value_index]).to_string(),
            ));
            Ok(value::skip_subtree(tokens, value_index))
        }
        _ => Ok(value::skip_subtree(tokens, value_index)),
    })?;

    if !have_asset {
        return Err(ParseError::UnsupportedVersion { found: None });
    }

    Ok(document)
}
