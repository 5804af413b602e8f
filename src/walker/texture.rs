use super::{expect_string, expect_u32, raw_value, schema_err, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::texture::{Info, MagFilter, MinFilter, Sampler, Texture, WrappingMode};
use gltf_json::{Index, Path};

pub(crate) fn parse_sampler(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Sampler, usize), ParseError> {
    let mut mag_filter = None;
    let mut min_filter = None;
    let mut wrap_s = WrappingMode::default();
    let mut wrap_t = WrappingMode::default();
    let mut name = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "magFilter" => {
            let raw = expect_u32(bytes, tokens, value_index, path)?;
            mag_filter = Some(
                MagFilter::from_gl_enum(raw)
                    .ok_or_else(|| schema_err(path, "unrecognized magFilter"))?,
            );
            Ok(value_index + 1)
        }
        "minFilter" => {
            let raw = expect_u32(bytes, tokens, value_index, path)?;
            min_filter = Some(
                MinFilter::from_gl_enum(raw)
                    .ok_or_else(|| schema_err(path, "unrecognized minFilter"))?,
            );
            Ok(value_index + 1)
        }
        "wrapS" => {
            let raw = expect_u32(bytes, tokens, value_index, path)?;
            wrap_s = WrappingMode::from_gl_enum(raw)
                .ok_or_else(|| schema_err(path, "unrecognized wrapS"))?;
            Ok(value_index + 1)
        }
        "wrapT" => {
            let raw = expect_u32(bytes, tokens, value_index, path)?;
            wrap_t = WrappingMode::from_gl_enum(raw)
                .ok_or_else(|| schema_err(path, "unrecognized wrapT"))?;
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

    Ok((
        Sampler {
            mag_filter,
            min_filter,
            wrap_s,
            wrap_t,
            name,
            extensions,
            extras,
        },
        cursor,
    ))
}

pub(crate) fn parse_texture(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Texture, usize), ParseError> {
    let mut sampler = None;
    let mut source = None;
    let mut name = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "sampler" => {
            sampler = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "source" => {
            source = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
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

    let source = source.ok_or_else(|| schema_err(path, "missing source"))?;
    Ok((
        Texture {
            sampler,
            source,
            name,
            extensions,
            extras,
        },
        cursor,
    ))
}

/// Parses a plain texture reference (`baseColorTexture`,
/// `metallicRoughnessTexture`, `emissiveTexture`): just `index` and
/// `texCoord`, no `scale`/`strength` field.
pub(crate) fn parse_info(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Info, usize), ParseError> {
    let mut texture_index = None;
    let mut tex_coord = 0u32;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "index" => {
            texture_index = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "texCoord" => {
            tex_coord = expect_u32(bytes, tokens, value_index, path)?;
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

    let index = texture_index.ok_or_else(|| schema_err(path, "missing index"))?;
    Ok((
        Info {
            index,
            tex_coord,
            extensions,
            extras,
        },
        cursor,
    ))
}
