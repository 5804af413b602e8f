use crate::{accessor, extras::Extras, scene, Index};
use gltf_derive::Validate;

/// Joints and matrices defining a skin.
#[derive(Clone, Debug, Validate)]
pub struct Skin {
    /// The index of the accessor containing the 4x4 inverse-bind matrices,
    /// if any.
    pub inverse_bind_matrices: Option<Index<accessor::Accessor>>,

    /// Indices of skeleton nodes used as joints in this skin.
    pub joints: Vec<Index<scene::Node>>,

    /// The index of the node used as a skeleton root.
    pub skeleton: Option<Index<scene::Node>>,

    /// Name of this skin.
    pub name: Option<String>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}
