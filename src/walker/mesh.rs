use super::{expect_string, expect_u32, raw_value, schema_err, walk_array, walk_object};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use crate::value;
use gltf_json::mesh::{Mesh, Mode, MorphTarget, Primitive, Semantic};
use gltf_json::validation::Checked;
use gltf_json::{Index, Path};
use std::collections::BTreeMap;

pub(crate) fn parse(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Mesh, usize), ParseError> {
    let mut extensions = None;
    let mut extras = None;
    let mut name = None;
    let mut primitives = None;
    let mut weights = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "extensions" => {
            extensions = Some(raw_value(bytes, tokens, value_index));
            Ok(value::skip_subtree(tokens, value_index))
        }
        "extras" => {
            extras = Some(raw_value(bytes, tokens, value_index));
            Ok(value::skip_subtree(tokens, value_index))
        }
        "name" => {
            name = Some(expect_string(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "primitives" => {
            let (value, next) = walk_array(bytes, tokens, value_index, path, |i| {
                parse_primitive(bytes, tokens, i, &path.field("primitives"))
            })?;
            primitives = Some(value);
            Ok(next)
        }
        "weights" => {
            let values = value::parse_float_array_dynamic(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a number array"))?;
            weights = Some(values);
            Ok(value::skip_subtree(tokens, value_index))
        }
        _ => Ok(value::skip_subtree(tokens, value_index)),
    })?;

    let primitives = primitives.ok_or_else(|| schema_err(path, "missing primitives"))?;
    Ok((
        Mesh {
            extensions,
            extras,
            name,
            primitives,
            weights,
        },
        cursor,
    ))
}

fn parse_primitive(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Primitive, usize), ParseError> {
    let mut attributes = BTreeMap::new();
    let mut indices = None;
    let mut material = None;
    let mut mode = Mode::default();
    let mut targets = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "attributes" => {
            let object = tokens[value_index];
            if object.kind != TokenKind::Object {
                return Err(schema_err(path, "expected an object"));
            }
            let mut cursor = value_index + 1;
            for _ in 0..object.size {
                let key_token = tokens[cursor];
                let name = value::parse_string(bytes, &key_token)
                    .ok_or_else(|| schema_err(path, "expected a string key"))?;
                let accessor_index = expect_u32(bytes, tokens, cursor + 1, path)?;
                attributes.insert(Semantic::checked(&name), Index::new(accessor_index));
                cursor += 2;
            }
            Ok(cursor)
        }
        "indices" => {
            indices = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "material" => {
            material = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "mode" => {
            let raw = expect_u32(bytes, tokens, value_index, path)?;
            mode = Mode::from_gl_enum(raw).ok_or_else(|| schema_err(path, "unrecognized mode"))?;
            Ok(value_index + 1)
        }
        "targets" => {
            let (value, next) = walk_array(bytes, tokens, value_index, path, |i| {
                parse_morph_target(bytes, tokens, i, &path.field("targets"))
            })?;
            targets = Some(value);
            Ok(next)
        }
        "extensions" => {
            extensions = Some(raw_value(bytes, tokens, value_index));
            Ok(value::skip_subtree(tokens, value_index))
        }
        "extras" => {
            extras = Some(raw_value(bytes, tokens, value_index));
            Ok(value::skip_subtree(tokens, value_index))
        }
        _ => Ok(value::skip_subtree(tokens, value_index)),
    })?;

    Ok((
        Primitive {
            attributes,
            indices,
            material,
            mode,
            targets,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_morph_target(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(MorphTarget, usize), ParseError> {
    let mut positions = None;
    let mut normals = None;
    let mut tangents = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "POSITION" => {
            positions = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "NORMAL" => {
            normals = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "TANGENT" => {
            tangents = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        _ => Ok(value::skip_subtree(tokens, value_index)),
    })?;

    Ok((
        MorphTarget {
            positions,
            normals,
            tangents,
        },
        cursor,
    ))
}
