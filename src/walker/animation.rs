use super::{expect_string, expect_u32, raw_value, schema_err, walk_array, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::animation::{Animation, Channel, Interpolation, Property, Sampler, Target};
use gltf_json::validation::Checked;
use gltf_json::{Index, Path};

pub(crate) fn parse(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Animation, usize), ParseError> {
    let mut channels = None;
    let mut name = None;
    let mut samplers = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "channels" => {
            let (value, next) = walk_array(bytes, tokens, value_index, path, |i| {
                parse_channel(bytes, tokens, i, &path.field("channels"))
            })?;
            channels = Some(value);
            Ok(next)
        }
        "name" => {
            name = Some(expect_string(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "samplers" => {
            let (value, next) = walk_array(bytes, tokens, value_index, path, |i| {
                parse_sampler(bytes, tokens, i, &path.field("samplers"))
            })?;
            samplers = Some(value);
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

    let channels = channels.ok_or_else(|| schema_err(path, "missing channels"))?;
    let samplers = samplers.ok_or_else(|| schema_err(path, "missing samplers"))?;
    Ok((
        Animation {
            channels,
            name,
            samplers,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_channel(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Channel, usize), ParseError> {
    let mut sampler = None;
    let mut target = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "sampler" => {
            sampler = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "target" => {
            let (value, next) = parse_target(bytes, tokens, value_index, &path.field("target"))?;
            target = Some(value);
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

    let sampler = sampler.ok_or_else(|| schema_err(path, "missing sampler"))?;
    let target = target.ok_or_else(|| schema_err(path, "missing target"))?;
    Ok((
        Channel {
            sampler,
            target,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_target(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Target, usize), ParseError> {
    let mut node = None;
    let mut target_path = Checked::Invalid;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "node" => {
            node = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "path" => {
            let raw = expect_string(bytes, tokens, value_index, path)?;
            target_path = match raw.as_str() {
                "translation" => Checked::Valid(Property::Translation),
                "rotation" => Checked::Valid(Property::Rotation),
                "scale" => Checked::Valid(Property::Scale),
                "weights" => Checked::Valid(Property::MorphTargetWeights),
                _ => Checked::Invalid,
            };
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

    let node = node.ok_or_else(|| schema_err(path, "missing node"))?;
    Ok((
        Target {
            node,
            path: target_path,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_sampler(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Sampler, usize), ParseError> {
    let mut input = None;
    let mut interpolation = Interpolation::default();
    let mut output = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "input" => {
            input = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "interpolation" => {
            let raw = expect_string(bytes, tokens, value_index, path)?;
            interpolation = match raw.as_str() {
                "LINEAR" => Interpolation::Linear,
                "STEP" => Interpolation::Step,
                "CUBICSPLINE" => Interpolation::CubicSpline,
                _ => return Err(schema_err(path, "unrecognized interpolation")),
            };
            Ok(value_index + 1)
        }
        "output" => {
            output = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
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

    let input = input.ok_or_else(|| schema_err(path, "missing input"))?;
    let output = output.ok_or_else(|| schema_err(path, "missing output"))?;
    Ok((
        Sampler {
            input,
            interpolation,
            output,
            extensions,
            extras,
        },
        cursor,
    ))
}
