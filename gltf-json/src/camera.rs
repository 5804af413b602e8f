use crate::validation::{Error, Validate};
use crate::{extras::Extras, Asset, Path};
use gltf_derive::Validate;

/// Specifies the camera's projection type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Type {
    /// Perspective projection.
    Perspective,
    /// Orthographic projection.
    Orthographic,
}

impl Validate for Type {}

/// Values for an orthographic camera projection.
#[derive(Clone, Debug, Validate)]
pub struct Orthographic {
    /// The horizontal magnification of the view.
    pub xmag: f32,

    /// The vertical magnification of the view.
    pub ymag: f32,

    /// The distance to the far clipping plane.
    pub zfar: f32,

    /// The distance to the near clipping plane.
    pub znear: f32,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// Values for a perspective camera projection.
#[derive(Clone, Debug, Validate)]
pub struct Perspective {
    /// Aspect ratio of the field of view.
    pub aspect_ratio: Option<f32>,

    /// The vertical field of view, in radians.
    pub yfov: f32,

    /// The distance to the far clipping plane.
    pub zfar: Option<f32>,

    /// The distance to the near clipping plane.
    pub znear: f32,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// A camera's projection, either perspective or orthographic.
#[derive(Clone, Debug, Validate)]
#[gltf(validate_hook = "camera_validate_hook")]
pub struct Camera {
    /// Orthographic camera values.
    pub orthographic: Option<Orthographic>,

    /// Perspective camera values.
    pub perspective: Option<Perspective>,

    /// Specifies if the camera uses a perspective or orthographic
    /// projection.
    pub type_: Type,

    /// Name of this camera.
    pub name: Option<String>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

fn camera_validate_hook<P, R>(camera: &Camera, _root: &Asset, path: P, report: &mut R)
where
    P: Fn() -> Path,
    R: FnMut(&dyn Fn() -> Path, Error),
{
    match camera.type_ {
        Type::Orthographic if camera.orthographic.is_none() => {
            report(&|| path().field("orthographic"), Error::Missing);
        }
        Type::Perspective if camera.perspective.is_none() => {
            report(&|| path().field("perspective"), Error::Missing);
        }
        _ => {}
    }
}
