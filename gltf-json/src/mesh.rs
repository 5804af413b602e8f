use crate::validation::{Checked, Error, Validate};
use crate::{accessor, extras::Extras, material, Asset, Index, Path};
use gltf_derive::Validate;
use std::collections::BTreeMap;

/// Corresponds to `GL_POINTS`.
pub const POINTS: u32 = 0;
/// Corresponds to `GL_LINES`.
pub const LINES: u32 = 1;
/// Corresponds to `GL_LINE_LOOP`.
pub const LINE_LOOP: u32 = 2;
/// Corresponds to `GL_LINE_STRIP`.
pub const LINE_STRIP: u32 = 3;
/// Corresponds to `GL_TRIANGLES`.
pub const TRIANGLES: u32 = 4;
/// Corresponds to `GL_TRIANGLE_STRIP`.
pub const TRIANGLE_STRIP: u32 = 5;
/// Corresponds to `GL_TRIANGLE_FAN`.
pub const TRIANGLE_FAN: u32 = 6;

/// The type of primitives to render.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    /// Corresponds to `GL_POINTS`.
    Points = 1,
    /// Corresponds to `GL_LINES`.
    Lines,
    /// Corresponds to `GL_LINE_LOOP`.
    LineLoop,
    /// Corresponds to `GL_LINE_STRIP`.
    LineStrip,
    /// Corresponds to `GL_TRIANGLES`.
    Triangles,
    /// Corresponds to `GL_TRIANGLE_STRIP`.
    TriangleStrip,
    /// Corresponds to `GL_TRIANGLE_FAN`.
    TriangleFan,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Triangles
    }
}

impl Validate for Mode {}

impl Mode {
    /// Parses the given `mode` wire value, if recognized.
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        Some(match value {
            POINTS => Mode::Points,
            LINES => Mode::Lines,
            LINE_LOOP => Mode::LineLoop,
            LINE_STRIP => Mode::LineStrip,
            TRIANGLES => Mode::Triangles,
            TRIANGLE_STRIP => Mode::TriangleStrip,
            TRIANGLE_FAN => Mode::TriangleFan,
            _ => return None,
        })
    }
}

/// Vertex attribute semantic name.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Semantic {
    /// Extra attribute name, beginning with an underscore.
    Extras(String),
    /// Vertex positions.
    Positions,
    /// Vertex normals.
    Normals,
    /// Vertex tangents.
    Tangents,
    /// Vertex colors, set N.
    Colors(u32),
    /// UV texture co-ordinates, set N.
    TexCoords(u32),
    /// Joint indices, set N.
    Joints(u32),
    /// Joint weights, set N.
    Weights(u32),
    /// An attribute name that does not match any recognized category (e.g.
    /// not one of `POSITION`/`NORMAL`/`TANGENT`/`COLOR_N`/`TEXCOORD_N`/
    /// `JOINTS_N`/`WEIGHTS_N`, and not `_`-prefixed). Carries the raw name
    /// verbatim rather than discarding it; unrecognized does not mean
    /// malformed, so this is not surfaced as a parse error.
    Invalid(String),
}

impl Semantic {
    /// Parses a glTF attribute name into a `Checked<Semantic>`. Always
    /// `Valid`: a name that matches no known category becomes
    /// `Semantic::Invalid`, carrying the raw name, rather than `Checked::
    /// Invalid` — an unrecognized (but well-formed) attribute semantic is
    /// not a parse error, so it must not be treated as one by the generic
    /// `Checked<T>: Validate` bounds check.
    pub fn checked(name: &str) -> Checked<Self> {
        if let Some(suffix) = name.strip_prefix('_') {
            return Checked::Valid(Semantic::Extras(suffix.to_string()));
        }
        match name {
            "POSITION" => return Checked::Valid(Semantic::Positions),
            "NORMAL" => return Checked::Valid(Semantic::Normals),
            "TANGENT" => return Checked::Valid(Semantic::Tangents),
            _ => {}
        }
        if let Some(set) = parse_indexed(name, "COLOR_") {
            return Checked::Valid(Semantic::Colors(set));
        }
        if let Some(set) = parse_indexed(name, "TEXCOORD_") {
            return Checked::Valid(Semantic::TexCoords(set));
        }
        if let Some(set) = parse_indexed(name, "JOINTS_") {
            return Checked::Valid(Semantic::Joints(set));
        }
        if let Some(set) = parse_indexed(name, "WEIGHTS_") {
            return Checked::Valid(Semantic::Weights(set));
        }
        Checked::Valid(Semantic::Invalid(name.to_string()))
    }
}

fn parse_indexed(name: &str, prefix: &str) -> Option<u32> {
    name.strip_prefix(prefix).and_then(|n| n.parse().ok())
}

impl Validate for Semantic {}

impl std::fmt::Display for Semantic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Semantic::Extras(name) => write!(f, "_{name}"),
            Semantic::Positions => write!(f, "POSITION"),
            Semantic::Normals => write!(f, "NORMAL"),
            Semantic::Tangents => write!(f, "TANGENT"),
            Semantic::Colors(set) => write!(f, "COLOR_{set}"),
            Semantic::TexCoords(set) => write!(f, "TEXCOORD_{set}"),
            Semantic::Joints(set) => write!(f, "JOINTS_{set}"),
            Semantic::Weights(set) => write!(f, "WEIGHTS_{set}"),
            Semantic::Invalid(name) => write!(f, "{name}"),
        }
    }
}

/// A set of primitives to be rendered.
#[derive(Clone, Debug, Validate)]
pub struct Mesh {
    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,

    /// Name of this mesh.
    pub name: Option<String>,

    /// Defines the geometry to be rendered.
    pub primitives: Vec<Primitive>,

    /// Defines the weights to apply to the morph targets, if any are used.
    pub weights: Option<Vec<f32>>,
}

/// Geometry to be rendered with the given material.
#[derive(Clone, Debug, Validate)]
#[gltf(validate_hook = "primitive_validate_hook")]
pub struct Primitive {
    /// Maps attribute semantic names to the `Accessor` containing the
    /// corresponding attribute data.
    pub attributes: BTreeMap<Checked<Semantic>, Index<accessor::Accessor>>,

    /// The index of the accessor that contains the indices.
    pub indices: Option<Index<accessor::Accessor>>,

    /// The index of the material to apply to this primitive when rendering.
    pub material: Option<Index<material::Material>>,

    /// The type of primitives to render.
    pub mode: Mode,

    /// Morph targets, each overriding a subset of vertex attributes.
    pub targets: Option<Vec<MorphTarget>>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// A dictionary mapping attributes to their deviations in a morph target.
#[derive(Clone, Debug, Validate)]
pub struct MorphTarget {
    /// XYZ vertex position displacements.
    pub positions: Option<Index<accessor::Accessor>>,

    /// XYZ vertex normal displacements.
    pub normals: Option<Index<accessor::Accessor>>,

    /// XYZW vertex tangent displacements.
    pub tangents: Option<Index<accessor::Accessor>>,
}

fn primitive_validate_hook<P, R>(primitive: &Primitive, root: &Asset, path: P, report: &mut R)
where
    P: Fn() -> Path,
    R: FnMut(&dyn Fn() -> Path, Error),
{
    let positions = primitive
        .attributes
        .iter()
        .find(|(semantic, _)| matches!(semantic, Checked::Valid(Semantic::Positions)))
        .map(|(_, index)| index);
    if let Some(index) = positions {
        if let Some(accessor) = root.get(*index) {
            let position_path = || path().field("attributes").key("POSITION");
            match (&accessor.min, &accessor.max) {
                (Some(min), Some(max)) => {
                    if min.len() != 3 {
                        report(&|| position_path().field("min"), Error::Invalid);
                    }
                    if max.len() != 3 {
                        report(&|| position_path().field("max"), Error::Invalid);
                    }
                }
                (None, _) => report(&|| position_path().field("min"), Error::Missing),
                (_, None) => report(&|| position_path().field("max"), Error::Missing),
            }
        }
    }
}
