use crate::validation::Validate;
use crate::{extras::Extras, image, Index};
use gltf_derive::Validate;

/// Corresponds to `GL_NEAREST`.
pub const NEAREST: u32 = 9728;
/// Corresponds to `GL_LINEAR`.
pub const LINEAR: u32 = 9729;
/// Corresponds to `GL_NEAREST_MIPMAP_NEAREST`.
pub const NEAREST_MIPMAP_NEAREST: u32 = 9984;
/// Corresponds to `GL_LINEAR_MIPMAP_NEAREST`.
pub const LINEAR_MIPMAP_NEAREST: u32 = 9985;
/// Corresponds to `GL_NEAREST_MIPMAP_LINEAR`.
pub const NEAREST_MIPMAP_LINEAR: u32 = 9986;
/// Corresponds to `GL_LINEAR_MIPMAP_LINEAR`.
pub const LINEAR_MIPMAP_LINEAR: u32 = 9987;
/// Corresponds to `GL_CLAMP_TO_EDGE`.
pub const CLAMP_TO_EDGE: u32 = 33071;
/// Corresponds to `GL_MIRRORED_REPEAT`.
pub const MIRRORED_REPEAT: u32 = 33648;
/// Corresponds to `GL_REPEAT`.
pub const REPEAT: u32 = 10497;

/// Magnification filter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MagFilter {
    /// Corresponds to `GL_NEAREST`.
    Nearest = 1,
    /// Corresponds to `GL_LINEAR`.
    Linear,
}

impl MagFilter {
    /// Returns the corresponding GLenum value.
    pub fn as_gl_enum(self) -> u32 {
        match self {
            MagFilter::Nearest => NEAREST,
            MagFilter::Linear => LINEAR,
        }
    }

    /// Parses the given `magFilter` wire value, if recognized.
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        Some(match value {
            NEAREST => MagFilter::Nearest,
            LINEAR => MagFilter::Linear,
            _ => return None,
        })
    }
}

impl Validate for MagFilter {}

/// Minification filter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MinFilter {
    /// Corresponds to `GL_NEAREST`.
    Nearest = 1,
    /// Corresponds to `GL_LINEAR`.
    Linear,
    /// Corresponds to `GL_NEAREST_MIPMAP_NEAREST`.
    NearestMipmapNearest,
    /// Corresponds to `GL_LINEAR_MIPMAP_NEAREST`.
    LinearMipmapNearest,
    /// Corresponds to `GL_NEAREST_MIPMAP_LINEAR`.
    NearestMipmapLinear,
    /// Corresponds to `GL_LINEAR_MIPMAP_LINEAR`.
    LinearMipmapLinear,
}

impl MinFilter {
    /// Returns the corresponding GLenum value.
    pub fn as_gl_enum(self) -> u32 {
        match self {
            MinFilter::Nearest => NEAREST,
            MinFilter::Linear => LINEAR,
            MinFilter::NearestMipmapNearest => NEAREST_MIPMAP_NEAREST,
            MinFilter::LinearMipmapNearest => LINEAR_MIPMAP_NEAREST,
            MinFilter::NearestMipmapLinear => NEAREST_MIPMAP_LINEAR,
            MinFilter::LinearMipmapLinear => LINEAR_MIPMAP_LINEAR,
        }
    }

    /// Parses the given `minFilter` wire value, if recognized.
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        Some(match value {
            NEAREST => MinFilter::Nearest,
            LINEAR => MinFilter::Linear,
            NEAREST_MIPMAP_NEAREST => MinFilter::NearestMipmapNearest,
            LINEAR_MIPMAP_NEAREST => MinFilter::LinearMipmapNearest,
            NEAREST_MIPMAP_LINEAR => MinFilter::NearestMipmapLinear,
            LINEAR_MIPMAP_LINEAR => MinFilter::LinearMipmapLinear,
            _ => return None,
        })
    }
}

impl Validate for MinFilter {}

/// Texture co-ordinate wrapping mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WrappingMode {
    /// Corresponds to `GL_CLAMP_TO_EDGE`.
    ClampToEdge = 1,
    /// Corresponds to `GL_MIRRORED_REPEAT`.
    MirroredRepeat,
    /// Corresponds to `GL_REPEAT`.
    Repeat,
}

impl Default for WrappingMode {
    fn default() -> Self {
        WrappingMode::Repeat
    }
}

impl WrappingMode {
    /// Returns the corresponding GLenum value.
    pub fn as_gl_enum(self) -> u32 {
        match self {
            WrappingMode::ClampToEdge => CLAMP_TO_EDGE,
            WrappingMode::MirroredRepeat => MIRRORED_REPEAT,
            WrappingMode::Repeat => REPEAT,
        }
    }

    /// Parses the given wrapping-mode wire value, if recognized.
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        Some(match value {
            CLAMP_TO_EDGE => WrappingMode::ClampToEdge,
            MIRRORED_REPEAT => WrappingMode::MirroredRepeat,
            REPEAT => WrappingMode::Repeat,
            _ => return None,
        })
    }
}

impl Validate for WrappingMode {}

/// Texture sampler properties for filtering and wrapping modes.
#[derive(Clone, Debug, Validate)]
pub struct Sampler {
    /// Magnification filter.
    pub mag_filter: Option<MagFilter>,

    /// Minification filter.
    pub min_filter: Option<MinFilter>,

    /// `s` wrapping mode.
    pub wrap_s: WrappingMode,

    /// `t` wrapping mode.
    pub wrap_t: WrappingMode,

    /// Name of this sampler.
    pub name: Option<String>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// A texture and its sampler.
#[derive(Clone, Debug, Validate)]
pub struct Texture {
    /// The index of the sampler used by this texture.
    pub sampler: Option<Index<Sampler>>,

    /// The index of the image used by this texture.
    pub source: Index<image::Image>,

    /// Name of this texture.
    pub name: Option<String>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// Reference to a `Texture`.
#[derive(Clone, Debug, Validate)]
pub struct Info {
    /// The index of the texture.
    pub index: Index<Texture>,

    /// The set index of the texture's `TEXCOORD` attribute used for texture
    /// co-ordinate mapping.
    pub tex_coord: u32,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}
