use super::{expect_string, expect_u32, raw_value, schema_err, walk_array, walk_index_array, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::scene::{Node, Scene, UnitQuaternion};
use gltf_json::{Index, Path};

pub(crate) fn parse_node(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Node, usize), ParseError> {
    let mut camera = None;
    let mut children = None;
    let mut matrix = None;
    let mut mesh = None;
    let mut rotation = None;
    let mut scale = None;
    let mut translation = None;
    let mut skin = None;
    let mut weights = None;
    let mut name = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "camera" => {
            camera = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "children" => {
            let (value, next) = walk_index_array(bytes, tokens, value_index, path)?;
            children = Some(value);
            Ok(next)
        }
        "matrix" => {
            let raw = value::parse_float_array_fixed::<16>(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a 16-element number array"))?;
            matrix = Some(raw);
            Ok(value::skip_subtree(tokens, value_index))
        }
        "mesh" => {
            mesh = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "rotation" => {
            let raw = value::parse_float_array_fixed::<4>(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a 4-element number array"))?;
            rotation = Some(UnitQuaternion(raw));
            Ok(value::skip_subtree(tokens, value_index))
        }
        "scale" => {
            let raw = value::parse_float_array_fixed::<3>(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a 3-element number array"))?;
            scale = Some(raw);
            Ok(value::skip_subtree(tokens, value_index))
        }
        "translation" => {
            let raw = value::parse_float_array_fixed::<3>(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a 3-element number array"))?;
            translation = Some(raw);
            Ok(value::skip_subtree(tokens, value_index))
        }
        "skin" => {
            skin = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "weights" => {
            let values = value::parse_float_array_dynamic(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a number array"))?;
            weights = Some(values);
            Ok(value::skip_subtree(tokens, value_index))
        }
        "name" => {
            name = Some(expect_string(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
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
        Node {
            camera,
            children,
            matrix,
            mesh,
            rotation,
            scale,
            translation,
            skin,
            weights,
            name,
            parent: None,
            extensions,
            extras,
        },
        cursor,
    ))
}

pub(crate) fn parse_scene(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Scene, usize), ParseError> {
    let mut nodes = Vec::new();
    let mut name = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "nodes" => {
            let (value, next) = walk_array(bytes, tokens, value_index, path, |i| {
                let token = tokens[i];
                let raw = value::to_u32(bytes, &token)
                    .ok_or_else(|| schema_err(path, "expected an unsigned integer"))?;
                Ok((Index::new(raw), i + 1))
            })?;
            nodes = value;
            Ok(next)
        }
        "name" => {
            name = Some(expect_string(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
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
        Scene {
            nodes,
            name,
            extensions,
            extras,
        },
        cursor,
    ))
}
