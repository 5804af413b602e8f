use super::{schema_err, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::buffer::{Buffer, Stride, Target, View};
use gltf_json::{Index, Path};

pub(crate) fn parse_buffer(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Buffer, usize), ParseError> {
    let mut byte_length = None;
    let mut uri = None;
    let mut name = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "byteLength" => {
            byte_length = Some(
                value::to_u32(bytes, &tokens[value_index])
                    .ok_or_else(|| schema_err(path, "expected an unsigned integer"))?,
            );
            Ok(value_index + 1)
        }
        "uri" => {
            uri = Some(
                value::parse_string(bytes, &tokens[value_index])
                    .ok_or_else(|| schema_err(path, "expected a string"))?,
            );
            Ok(value_index + 1)
        }
        "name" => {
            name = Some(
                value::parse_string(bytes, &tokens[value_index])
                    .ok_or_else(|| schema_err(path, "expected a string"))?,
            );
            Ok(value_index + 1)
        }
        "extensions" => {
            extensions = Some(gltf_json::extras::RawValue::from_string(
                value::raw_slice(bytes, &tokens[value_index]).to_string(),
            ));
            Ok(value::skip_subtree(tokens, value_index))
        }
        "extras" => {
            extras = Some(gltf_json::extras::RawValue::from_string(
                value::raw_slice(bytes, &tokens[value_index]).to_string(),
            ));
            Ok(value::skip_subtree(tokens, value_index))
        }
        _ => Ok(value::skip_subtree(tokens, value_index)),
    })?;

    let byte_length = byte_length.ok_or_else(|| schema_err(path, "missing byteLength"))?;
    Ok((
        Buffer {
            byte_length,
            uri,
            name,
            extensions,
            extras,
        },
        cursor,
    ))
}

pub(crate) fn parse_view(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(View, usize), ParseError> {
    let mut buffer = None;
    let mut byte_length = None;
    let mut byte_offset = 0u32;
    let mut byte_stride = None;
    let mut name = None;
    let mut target = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "buffer" => {
            let raw = value::to_u32(bytes, &tokens[value_index])
                .ok_or_else(|| schema_err(path, "expected an unsigned integer"))?;
            buffer = Some(Index::new(raw));
            Ok(value_index + 1)
        }
        "byteLength" => {
            byte_length = Some(
                value::to_u32(bytes, &tokens[value_index])
                    .ok_or_else(|| schema_err(path, "expected an unsigned integer"))?,
            );
            Ok(value_index + 1)
        }
        "byteOffset" => {
            byte_offset = value::to_u32(bytes, &tokens[value_index])
                .ok_or_else(|| schema_err(path, "expected an unsigned integer"))?;
            Ok(value_index + 1)
        }
        "byteStride" => {
            let raw = value::to_u32(bytes, &tokens[value_index])
                .ok_or_else(|| schema_err(path, "expected an unsigned integer"))?;
            byte_stride = Some(Stride(raw as usize));
            Ok(value_index + 1)
        }
        "target" => {
            let raw = value::to_u32(bytes, &tokens[value_index])
                .ok_or_else(|| schema_err(path, "expected an unsigned integer"))?;
            target = Some(
                Target::from_gl_enum(raw).ok_or_else(|| schema_err(path, "unrecognized target"))?,
            );
            Ok(value_index + 1)
        }
        "name" => {
            name = Some(
                value::parse_string(bytes, &tokens[value_index])
                    .ok_or_else(|| schema_err(path, "expected a string"))?,
            );
            Ok(value_index + 1)
        }
        "extensions" => {
            extensions = Some(gltf_json::extras::RawValue::from_string(
                value::raw_slice(bytes, &tokens[value_index]).to_string(),
            ));
            Ok(value::skip_subtree(tokens, value_index))
        }
        "extras" => {
            extras = Some(gltf_json::extras::RawValue::from_string(
                value::raw_slice(bytes, &tokens[value_index]).to_string(),
            ));
            Ok(value::skip_subtree(tokens, value_index))
        }
        _ => Ok(value::skip_subtree(tokens, value_index)),
    })?;

    let buffer = buffer.ok_or_else(|| schema_err(path, "missing buffer"))?;
    let byte_length = byte_length.ok_or_else(|| schema_err(path, "missing byteLength"))?;
    Ok((
        View {
            buffer,
            byte_length,
            byte_offset,
            byte_stride,
            name,
            target,
            extensions,
            extras,
        },
        cursor,
    ))
}
