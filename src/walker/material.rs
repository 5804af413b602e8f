use super::texture::parse_info;
use super::{expect_bool, expect_f32, expect_string, expect_u32, raw_value, schema_err, walk_object};
use crate::error::ParseError;
use crate::token::Token;
use crate::value;
use gltf_json::material::{
    AlphaCutoff, AlphaMode, EmissiveFactor, Material, NormalTexture, OcclusionTexture,
    PbrBaseColorFactor, PbrMetallicRoughness, StrengthFactor,
};
use gltf_json::{Index, Path};

pub(crate) fn parse(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(Material, usize), ParseError> {
    let mut alpha_cutoff = None;
    let mut alpha_mode = AlphaMode::default();
    let mut double_sided = false;
    let mut pbr_metallic_roughness = None;
    let mut normal_texture = None;
    let mut occlusion_texture = None;
    let mut emissive_texture = None;
    let mut emissive_factor = EmissiveFactor::default();
    let mut name = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "alphaCutoff" => {
            alpha_cutoff = Some(AlphaCutoff(expect_f32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "alphaMode" => {
            let raw = expect_string(bytes, tokens, value_index, path)?;
            alpha_mode = match raw.as_str() {
                "OPAQUE" => AlphaMode::Opaque,
                "MASK" => AlphaMode::Mask,
                "BLEND" => AlphaMode::Blend,
                _ => return Err(schema_err(path, "unrecognized alphaMode")),
            };
            Ok(value_index + 1)
        }
        "doubleSided" => {
            double_sided = expect_bool(bytes, tokens, value_index, path)?;
            Ok(value_index + 1)
        }
        "pbrMetallicRoughness" => {
            let (value, next) = parse_pbr_metallic_roughness(
                bytes,
                tokens,
                value_index,
                &path.field("pbrMetallicRoughness"),
            )?;
            pbr_metallic_roughness = Some(value);
            Ok(next)
        }
        "normalTexture" => {
            let (value, next) =
                parse_normal_texture(bytes, tokens, value_index, &path.field("normalTexture"))?;
            normal_texture = Some(value);
            Ok(next)
        }
        "occlusionTexture" => {
            let (value, next) = parse_occlusion_texture(
                bytes,
                tokens,
                value_index,
                &path.field("occlusionTexture"),
            )?;
            occlusion_texture = Some(value);
            Ok(next)
        }
        "emissiveTexture" => {
            let (value, next) =
                parse_info(bytes, tokens, value_index, &path.field("emissiveTexture"))?;
            emissive_texture = Some(value);
            Ok(next)
        }
        "emissiveFactor" => {
            let raw = value::parse_float_array_fixed::<3>(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a 3-element number array"))?;
            emissive_factor = EmissiveFactor(raw);
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
        Material {
            alpha_cutoff,
            alpha_mode,
            double_sided,
            pbr_metallic_roughness: pbr_metallic_roughness.unwrap_or_else(default_pbr),
            normal_texture,
            occlusion_texture,
            emissive_texture,
            emissive_factor,
            name,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn default_pbr() -> PbrMetallicRoughness {
    PbrMetallicRoughness {
        base_color_factor: PbrBaseColorFactor::default(),
        base_color_texture: None,
        metallic_factor: 1.0,
        roughness_factor: 1.0,
        metallic_roughness_texture: None,
        extensions: None,
        extras: None,
    }
}

fn parse_pbr_metallic_roughness(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(PbrMetallicRoughness, usize), ParseError> {
    let mut base_color_factor = PbrBaseColorFactor::default();
    let mut base_color_texture = None;
    let mut metallic_factor = 1.0f32;
    let mut roughness_factor = 1.0f32;
    let mut metallic_roughness_texture = None;
    let mut extensions = None;
    let mut extras = None;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "baseColorFactor" => {
            let raw = value::parse_float_array_fixed::<4>(bytes, tokens, value_index)
                .ok_or_else(|| schema_err(path, "expected a 4-element number array"))?;
            base_color_factor = PbrBaseColorFactor(raw);
            Ok(value::skip_subtree(tokens, value_index))
        }
        "baseColorTexture" => {
            let (value, next) =
                parse_info(bytes, tokens, value_index, &path.field("baseColorTexture"))?;
            base_color_texture = Some(value);
            Ok(next)
        }
        "metallicFactor" => {
            metallic_factor = expect_f32(bytes, tokens, value_index, path)?;
            Ok(value_index + 1)
        }
        "roughnessFactor" => {
            roughness_factor = expect_f32(bytes, tokens, value_index, path)?;
            Ok(value_index + 1)
        }
        "metallicRoughnessTexture" => {
            let (value, next) = parse_info(
                bytes,
                tokens,
                value_index,
                &path.field("metallicRoughnessTexture"),
            )?;
            metallic_roughness_texture = Some(value);
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
        PbrMetallicRoughness {
            base_color_factor,
            base_color_texture,
            metallic_factor,
            roughness_factor,
            metallic_roughness_texture,
            extensions,
            extras,
        },
        cursor,
    ))
}

fn parse_normal_texture(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(NormalTexture, usize), ParseError> {
    let mut texture_index = None;
    let mut scale = 1.0f32;
    let mut tex_coord = 0u32;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "index" => {
            texture_index = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "scale" => {
            scale = expect_f32(bytes, tokens, value_index, path)?;
            Ok(value_index + 1)
        }
        "texCoord" => {
            tex_coord = expect_u32(bytes, tokens, value_index, path)?;
            Ok(value_index + 1)
        }
        _ => Ok(value::skip_subtree(tokens, value_index)),
    })?;

    let index = texture_index.ok_or_else(|| schema_err(path, "missing index"))?;
    Ok((
        NormalTexture {
            index,
            scale,
            tex_coord,
        },
        cursor,
    ))
}

fn parse_occlusion_texture(
    bytes: &[u8],
    tokens: &[Token],
    index: usize,
    path: &Path,
) -> Result<(OcclusionTexture, usize), ParseError> {
    let mut texture_index = None;
    let mut strength = StrengthFactor::default();
    let mut tex_coord = 0u32;

    let cursor = walk_object(bytes, tokens, index, path, |key, value_index| match key {
        "index" => {
            texture_index = Some(Index::new(expect_u32(bytes, tokens, value_index, path)?));
            Ok(value_index + 1)
        }
        "strength" => {
            strength = StrengthFactor(expect_f32(bytes, tokens, value_index, path)?);
            Ok(value_index + 1)
        }
        "texCoord" => {
            tex_coord = expect_u32(bytes, tokens, value_index, path)?;
            Ok(value_index + 1)
        }
        _ => Ok(value::skip_subtree(tokens, value_index)),
    })?;

    let index = texture_index.ok_or_else(|| schema_err(path, "missing index"))?;
    Ok((
        OcclusionTexture {
            index,
            strength,
            tex_coord,
        },
        cursor,
    ))
}
