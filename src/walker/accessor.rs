use super::{expect_bool, expect_string, expect_u32, raw_value, schema_err, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::accessor::{sparse, Accessor, GenericComponentType, IndexComponentType, Type};
use gltf_json::validation::Checked;
use gltf_json::{Index, Path};

pub(crate) fn parse(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Accessor, usize), ParseError> {
    let mut buffer_view = None;
    let mut byte_offset = 0u32;
    let mut count = None;
    let mut component_type = Checked::Invalid;
    let mut normalized = false;
    let mut type_ = Checked::Invalid;
    let mut min = None;
    let mut max = None;
    let mut name = None;
    let mut sparse = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "bufferView" => {
            buffer_view = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "byteOffset" => {
            byte_offset = expect_u32(bytes, tokens, value_index, path)?;
            Ok(value_index + 1)
        }
        "count" => {
            count = Some(expect_u32(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "componentType" => {
            let raw = expect_u32(bytes, tokens, value_index, path)?;
            component_type = GenericComponentType::checked(raw);
            Ok(value_index + 1)
        }
        "normalized" => {
            normalized = expect_bool(bytes, tokens, value_index, path)?;
            Ok(value_index + 1)
        }
        "type" => {
            let raw = expect_string(bytes, tokens, value_index, path)?;
            type_ = Type::from_str(&raw).map(Checked::Valid).unwrap_or(Checked::Invalid);
            Ok(value_index + 1)
        }
        "min" => {
            let values = value::parse_float_array_dynamic(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a number array"))?;
            min = Some(values);
            Ok(value::skip_subtree(tokens, value_index))
        }
        "max" => {
            let values = value::parse_float_array_dynamic(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a number array"))?;
            max = Some(values);
            Ok(value::skip_subtree(tokens, value_index))
        }
        "name" => {
            name = Some(expect_string(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "sparse" => {
            let (value, next) = parse_sparse(bytes, tokens, value_index, &path.field("sparse"))?;
            sparse = Some(value);
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

    let count = count.ok_or_else(|| schema_err(path, "missing count"))?;
    Ok((
        Accessor {
            buffer_view,
            byte_offset,
            count,
            component_type,
            normalized,
            type_,
            min,
            max,
            name,
            sparse,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_sparse(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(sparse::Sparse, usize), ParseError> {
    let mut count = None;
    let mut indices = None;
    let mut values = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "count" => {
            count = Some(expect_u32(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "indices" => {
            let (value, next) = parse_indices(bytes, tokens, value_index, &path.field("indices"))?;
            indices = Some(value);
            Ok(next)
        }
        "values" => {
            let (value, next) = parse_values(bytes, tokens, value_index, &path.field("values"))?;
            values = Some(value);
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

    let count = count.ok_or_else(|| schema_err(path, "missing count"))?;
    let indices = indices.ok_or_else(|| schema_err(path, "missing indices"))?;
    let values = values.ok_or_else(|| schema_err(path, "missing values"))?;
    Ok((
        sparse::Sparse {
            count,
            indices,
            values,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_indices(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(sparse::Indices, usize), ParseError> {
    let mut buffer_view = None;
    let mut byte_offset = 0u32;
    let mut component_type = Checked::Invalid;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "bufferView" => {
            buffer_view = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "byteOffset" => {
            byte_offset = expect_u32(bytes, tokens, value_index, path)?;
            Ok(value_index + 1)
        }
        "componentType" => {
            let raw = expect_u32(bytes, tokens, value_index, path)?;
            component_type = IndexComponentType::checked(raw);
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

    let buffer_view = buffer_view.ok_or_else(|| schema_err(path, "missing bufferView"))?;
    Ok((
        sparse::Indices {
            buffer_view,
            byte_offset,
            component_type,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_values(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(sparse::Values, usize), ParseError> {
    let mut buffer_view = None;
    let mut byte_offset = 0u32;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "bufferView" => {
            buffer_view = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "byteOffset" => {
            byte_offset = expect_u32(bytes, tokens, value_index, path)?;
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

    let buffer_view = buffer_view.ok_or_else(|| schema_err(path, "missing bufferView"))?;
    Ok((
        sparse::Values {
            buffer_view,
            byte_offset,
            extensions,
            extras,
        },
        cursor,
    ))
}
