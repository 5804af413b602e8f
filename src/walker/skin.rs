use super::{expect_string, expect_u32, raw_value, schema_err, walk_index_array, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::skin::Skin;
use gltf_json::{Index, Path};

pub(crate) fn parse(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Skin, usize), ParseError> {
    let mut inverse_bind_matrices = None;
    let mut joints = None;
    let mut skeleton = None;
    let mut name = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "inverseBindMatrices" => {
            inverse_bind_matrices =
                Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "joints" => {
            let (value, next) = walk_index_array(bytes, tokens, value_index, path)?;
            joints = Some(value);
            Ok(next)
        }
        "skeleton" => {
            skeleton = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
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

    let joints = joints.ok_or_else(|| schema_err(path, "missing joints"))?;
    Ok((
        Skin {
            inverse_bind_matrices,
            joints,
            skeleton,
            name,
            extensions,
            extras,
        },
        cursor,
    ))
}
