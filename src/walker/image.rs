use super::{expect_string, expect_u32, raw_value, schema_err, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::image::{Image, MimeType};
use gltf_json::{Index, Path};

pub(crate) fn parse(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Image, usize), ParseError> {
    let mut buffer_view = None;
    let mut mime_type = None;
    let mut uri = None;
    let mut name = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "bufferView" => {
            buffer_view = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "mimeType" => {
            mime_type = Some(MimeType(expect_string(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "uri" => {
            uri = Some(expect_string(bytes, tokens, value_index, path)?);
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

    if buffer_view.is_some() && mime_type.is_none() {
        return Err(schema_err(path, "bufferView requires mimeType"));
    }
    Ok((
        Image {
            buffer_view,
            mime_type,
            uri,
            name,
            extensions,
            extras,
        },
        cursor,
    ))
}
