use super::{schema_err, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::{AssetMetadata, Path};

pub(crate) fn parse(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(AssetMetadata, usize), ParseError> {
    let mut asset = AssetMetadata::default();
    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "copyright" => {
            asset.copyright = Some(
                value::parse_string(bytes, &tokens[value_index])
                    .ok_or_else(|| schema_err(path, "expected a string"))?,
            );
            Ok(value_index + 1)
        }
        "generator" => {
            asset.generator = Some(
                value::parse_string(bytes, &tokens[value_index])
                    .ok_or_else(|| schema_err(path, "expected a string"))?,
            );
            Ok(value_index + 1)
        }
        "minVersion" => {
            asset.min_version = Some(
                value::parse_string(bytes, &tokens[value_index])
                    .ok_or_else(|| schema_err(path, "expected a string"))?,
            );
            Ok(value_index + 1)
        }
        "version" => {
            asset.version = value::parse_string(bytes, &tokens[value_index])
                .ok_or_else(|| schema_err(path, "expected a string"))?;
            Ok(value_index + 1)
        }
        "extensions" => {
            asset.extensions = Some(gltf_json::extras::RawValue::from_string(
                value::raw_slice(bytes, &tokens[value_index]).to_string(),
            ));
            Ok(value::skip_subtree(tokens, value_index))
        }
        "extras" => {
            asset.extras = Some(gltf_json::extras::RawValue::from_string(
                value::raw_slice(bytes, &tokens[value_index]).to_string(),
            ));
            Ok(value::skip_subtree(tokens, value_index))
        }
        _ => Ok(value::skip_subtree(tokens, value_index)),
    })?;

    let parsed_version: Option<f32> = asset.version.parse().ok();
    if parsed_version.filter(|v| *v >= 2.0).is_none() {
        return Err(ParseError::UnsupportedVersion {
            found: Some(asset.version.clone()),
        });
    }

    Ok((asset, cursor))
}
