use crate::validation::{Error, Validate};
use crate::{extras::Extras, Asset, Index, Path};
use gltf_derive::Validate;

/// The minimum byte stride in bytes permitted by the glTF format.
pub const MIN_BYTE_STRIDE: usize = 4;

/// The maximum byte stride in bytes permitted by the glTF format.
pub const MAX_BYTE_STRIDE: usize = 252;

/// Specifies the target a `BufferView` should be bound to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Target {
    /// Corresponds to `GL_ARRAY_BUFFER`.
    ArrayBuffer = 34962,
    /// Corresponds to `GL_ELEMENT_ARRAY_BUFFER`.
    ElementArrayBuffer = 34963,
}

impl Target {
    /// Parses the given `target` wire value, if recognized.
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        Some(match value {
            34962 => Target::ArrayBuffer,
            34963 => Target::ElementArrayBuffer,
            _ => return None,
        })
    }
}

/// The stride, in bytes, between two consecutive elements of a buffer view.
///
/// Bounds-checked on construction: values outside
/// `[MIN_BYTE_STRIDE, MAX_BYTE_STRIDE]` are rejected during resolution
/// rather than silently clamped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stride(pub usize);

impl Validate for Stride {
    fn validate_minimally<P, R>(&self, _root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        if self.0 < MIN_BYTE_STRIDE || self.0 > MAX_BYTE_STRIDE {
            report(&path, Error::Invalid);
        }
    }
}

/// A buffer points to binary data representing geometry, animations, or
/// skins.
#[derive(Clone, Debug, Validate)]
pub struct Buffer {
    /// The length of the buffer in bytes.
    pub byte_length: u32,

    /// The uri of the buffer, if it was loaded from a `.gltf` JSON file
    /// rather than embedded as the `BIN` chunk of a `.glb` container.
    pub uri: Option<String>,

    /// Name of this buffer.
    pub name: Option<String>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// A view into a buffer, generally representing a subset of the buffer.
#[derive(Clone, Debug, Validate)]
pub struct View {
    /// The parent `Buffer`.
    pub buffer: Index<Buffer>,

    /// The length of the buffer view in bytes.
    pub byte_length: u32,

    /// Offset into the parent buffer in bytes.
    pub byte_offset: u32,

    /// The stride, in bytes, between vertex attributes in this buffer view.
    pub byte_stride: Option<Stride>,

    /// Name of this buffer view.
    pub name: Option<String>,

    /// Optional target the buffer should be bound to.
    pub target: Option<Target>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

impl Validate for Target {}
