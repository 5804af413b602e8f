use crate::validation::Validate;
use crate::{extras::Extras, texture, Index};
use gltf_derive::Validate;

/// The alpha rendering mode of a material.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AlphaMode {
    /// The alpha value is ignored and the rendered output is fully opaque.
    Opaque,
    /// The rendered output is either fully opaque or fully transparent
    /// depending on the alpha value and the specified alpha cutoff value.
    Mask,
    /// The alpha value is used to composite the source and destination
    /// areas.
    Blend,
}

impl Default for AlphaMode {
    fn default() -> Self {
        AlphaMode::Opaque
    }
}

impl Validate for AlphaMode {}

/// The cutoff threshold for the `Mask` alpha mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlphaCutoff(pub f32);

impl Default for AlphaCutoff {
    fn default() -> Self {
        AlphaCutoff(0.5)
    }
}

impl Validate for AlphaCutoff {}

/// The emissive color of a material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmissiveFactor(pub [f32; 3]);

impl Default for EmissiveFactor {
    fn default() -> Self {
        EmissiveFactor([0.0, 0.0, 0.0])
    }
}

impl Validate for EmissiveFactor {}

/// The base color of a material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PbrBaseColorFactor(pub [f32; 4]);

impl Default for PbrBaseColorFactor {
    fn default() -> Self {
        PbrBaseColorFactor([1.0, 1.0, 1.0, 1.0])
    }
}

impl Validate for PbrBaseColorFactor {}

/// The strength factor of a normal, occlusion, or displacement texture.
///
/// Kept as a field distinct from `NormalTexture::scale` — the two serve
/// different texture kinds and must not be collapsed into one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrengthFactor(pub f32);

impl Default for StrengthFactor {
    fn default() -> Self {
        StrengthFactor(1.0)
    }
}

impl Validate for StrengthFactor {}

/// A set of parameter values that are used to define the metallic-roughness
/// material model from Physically Based Rendering (PBR) methodology.
#[derive(Clone, Debug, Validate)]
pub struct PbrMetallicRoughness {
    /// The base color factor.
    pub base_color_factor: PbrBaseColorFactor,

    /// The base color texture.
    pub base_color_texture: Option<texture::Info>,

    /// The metalness of the material.
    pub metallic_factor: f32,

    /// The roughness of the material.
    pub roughness_factor: f32,

    /// The metallic-roughness texture.
    pub metallic_roughness_texture: Option<texture::Info>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// Defines the normal texture of a material.
#[derive(Clone, Debug, Validate)]
pub struct NormalTexture {
    /// The index of the texture.
    pub index: Index<texture::Texture>,

    /// The scalar multiplier applied to each normal vector of the texture.
    pub scale: f32,

    /// The set index of the texture's `TEXCOORD` attribute.
    pub tex_coord: u32,
}

/// Defines the occlusion texture of a material.
#[derive(Clone, Debug, Validate)]
pub struct OcclusionTexture {
    /// The index of the texture.
    pub index: Index<texture::Texture>,

    /// A scalar multiplier controlling the amount of occlusion applied.
    pub strength: StrengthFactor,

    /// The set index of the texture's `TEXCOORD` attribute.
    pub tex_coord: u32,
}

/// The material appearance of a primitive.
#[derive(Clone, Debug, Validate)]
pub struct Material {
    /// The alpha cutoff value of the material.
    pub alpha_cutoff: Option<AlphaCutoff>,

    /// The alpha rendering mode of the material.
    pub alpha_mode: AlphaMode,

    /// Specifies whether the material is double-sided.
    pub double_sided: bool,

    /// A set of parameter values pertaining to the metallic-roughness
    /// material model.
    pub pbr_metallic_roughness: PbrMetallicRoughness,

    /// A tangent space normal map.
    pub normal_texture: Option<NormalTexture>,

    /// The occlusion map texture.
    pub occlusion_texture: Option<OcclusionTexture>,

    /// The emissive map texture.
    pub emissive_texture: Option<texture::Info>,

    /// The emissive color of the material.
    pub emissive_factor: EmissiveFactor,

    /// Name of this material.
    pub name: Option<String>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}
