use crate::{camera, extras::Extras, mesh, skin, Index};
use gltf_derive::Validate;

/// A unit quaternion rotation, in `[x, y, z, w]` order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitQuaternion(pub [f32; 4]);

impl Default for UnitQuaternion {
    fn default() -> Self {
        UnitQuaternion([0.0, 0.0, 0.0, 1.0])
    }
}

impl crate::validation::Validate for UnitQuaternion {}

/// A node in the node hierarchy, corresponding to the contents of a single
/// entry in the root `nodes` array.
///
/// A node's parent is determined during the resolve pass by inverting the
/// `children` relationship, and it is a validation error for any node to
/// be referenced as a child more than once.
#[derive(Clone, Debug, Validate)]
pub struct Node {
    /// The index of the camera referenced by this node.
    pub camera: Option<Index<camera::Camera>>,

    /// The indices of this node's children.
    pub children: Option<Vec<Index<Node>>>,

    /// 4x4 column-major transformation matrix.
    pub matrix: Option<[f32; 16]>,

    /// The index of the mesh in this node.
    pub mesh: Option<Index<mesh::Mesh>>,

    /// The node's unit quaternion rotation, in the order `[x, y, z, w]`,
    /// where `w` is the scalar.
    pub rotation: Option<UnitQuaternion>,

    /// The node's non-uniform scale.
    pub scale: Option<[f32; 3]>,

    /// The node's translation.
    pub translation: Option<[f32; 3]>,

    /// The index of the skin referenced by this node.
    pub skin: Option<Index<skin::Skin>>,

    /// The weights of the instantiated morph target.
    pub weights: Option<Vec<f32>>,

    /// Name of this node.
    pub name: Option<String>,

    /// This node's parent, if any. `None` for a scene root. Computed by
    /// the resolver by inverting `children`; never read from the source
    /// document directly.
    pub parent: Option<Index<Node>>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// The column-major identity matrix, the default transform of a node that
/// specifies neither `matrix` nor any TRS component.
pub const IDENTITY_MATRIX: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
];

impl Node {
    /// This node's rotation, or the identity quaternion if it specified
    /// none.
    pub fn rotation_or_default(&self) -> UnitQuaternion {
        self.rotation.unwrap_or_default()
    }

    /// This node's scale, or `(1, 1, 1)` if it specified none.
    pub fn scale_or_default(&self) -> [f32; 3] {
        self.scale.unwrap_or([1.0, 1.0, 1.0])
    }

    /// This node's translation, or the origin if it specified none.
    pub fn translation_or_default(&self) -> [f32; 3] {
        self.translation.unwrap_or([0.0, 0.0, 0.0])
    }

    /// This node's matrix, or the identity matrix if it specified none.
    pub fn matrix_or_default(&self) -> [f32; 16] {
        self.matrix.unwrap_or(IDENTITY_MATRIX)
    }
}

/// The root nodes of a scene.
#[derive(Clone, Debug, Validate)]
pub struct Scene {
    /// The indices of each root node.
    pub nodes: Vec<Index<Node>>,

    /// Name of this scene.
    pub name: Option<String>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}
