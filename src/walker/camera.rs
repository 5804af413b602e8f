use super::{expect_f32, expect_string, raw_value, schema_err, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::camera::{Camera, Orthographic, Perspective, Type};
use gltf_json::Path;

pub(crate) fn parse(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Camera, usize), ParseError> {
    let mut orthographic = None;
    let mut perspective = None;
    let mut type_ = None;
    let mut name = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "orthographic" => {
            let (value, next) =
                parse_orthographic(bytes, tokens, value_index, &path.field("orthographic"))?;
            orthographic = Some(value);
            Ok(next)
        }
        "perspective" => {
            let (value, next) =
                parse_perspective(bytes, tokens, value_index, &path.field("perspective"))?;
            perspective = Some(value);
            Ok(next)
        }
        "type" => {
            let raw = expect_string(bytes, tokens, value_index, path)?;
            type_ = Some(match raw.as_str() {
                "orthographic" => Type::Orthographic,
                "perspective" => Type::Perspective,
                _ => return Err(schema_err(path, "unrecognized camera type")),
            });
            Ok(value_index + 1)
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

    let type_ = type_.ok_or_else(|| schema_err(path, "missing type"))?;
    Ok((
        Camera {
            orthographic,
            perspective,
            type_,
            name,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_orthographic(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Orthographic, usize), ParseError> {
    let mut xmag = None;
    let mut ymag = None;
    let mut zfar = None;
    let mut znear = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "xmag" => {
            xmag = Some(expect_f32(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "ymag" => {
            ymag = Some(expect_f32(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "zfar" => {
            zfar = Some(expect_f32(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "znear" => {
            znear = Some(expect_f32(bytes, tokens, value_index, path)?);
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
        Orthographic {
            xmag: xmag.ok_or_else(|| schema_err(path, "missing xmag"))?,
            ymag: ymag.ok_or_else(|| schema_err(path, "missing ymag"))?,
            zfar: zfar.ok_or_else(|| schema_err(path, "missing zfar"))?,
            znear: znear.ok_or_else(|| schema_err(path, "missing znear"))?,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_perspective(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Perspective, usize), ParseError> {
    let mut aspect_ratio = None;
    let mut yfov = None;
    let mut zfar = None;
    let mut znear = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "aspectRatio" => {
            aspect_ratio = Some(expect_f32(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "yfov" => {
            yfov = Some(expect_f32(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "zfar" => {
            zfar = Some(expect_f32(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "znear" => {
            znear = Some(expect_f32(bytes, tokens, value_index, path)?);
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
        Perspective {
            aspect_ratio,
            yfov: yfov.ok_or_else(|| schema_err(path, "missing yfov"))?,
            zfar,
            znear: znear.ok_or_else(|| schema_err(path, "missing znear"))?,
            extensions,
            extras,
        },
        cursor,
    ))
}
