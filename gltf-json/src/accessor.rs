use crate::validation::{Checked, Error, Validate};
use crate::{buffer, extras::Extras, Asset, Index, Path};
use gltf_derive::Validate;

/// The component data type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComponentType {
    /// Corresponds to `GL_BYTE`.
    I8 = 1,
    /// Corresponds to `GL_UNSIGNED_BYTE`.
    U8,
    /// Corresponds to `GL_SHORT`.
    I16,
    /// Corresponds to `GL_UNSIGNED_SHORT`.
    U16,
    /// Corresponds to `GL_UNSIGNED_INT`.
    U32,
    /// Corresponds to `GL_FLOAT`.
    F32,
}

impl ComponentType {
    /// Returns the corresponding GLenum value for this component type, as
    /// appears in a glTF file's `componentType` field.
    pub fn as_gl_enum(self) -> u32 {
        match self {
            ComponentType::I8 => 5120,
            ComponentType::U8 => 5121,
            ComponentType::I16 => 5122,
            ComponentType::U16 => 5123,
            ComponentType::U32 => 5125,
            ComponentType::F32 => 5126,
        }
    }

    /// Parses the given `componentType` wire value, if recognized.
    pub fn from_gl_enum(value: u32) -> Option<Self> {
        Some(match value {
            5120 => ComponentType::I8,
            5121 => ComponentType::U8,
            5122 => ComponentType::I16,
            5123 => ComponentType::U16,
            5125 => ComponentType::U32,
            5126 => ComponentType::F32,
            _ => return None,
        })
    }

    /// Returns the size of the component, in bytes.
    pub fn size(self) -> usize {
        match self {
            ComponentType::I8 | ComponentType::U8 => 1,
            ComponentType::I16 | ComponentType::U16 => 2,
            ComponentType::U32 | ComponentType::F32 => 4,
        }
    }
}

/// Specifies whether an accessor's elements are scalars, vectors, or
/// matrices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Type {
    /// Scalar quantity.
    Scalar = 1,
    /// 2D vector.
    Vec2,
    /// 3D vector.
    Vec3,
    /// 4D vector.
    Vec4,
    /// 2x2 matrix.
    Mat2,
    /// 3x3 matrix.
    Mat3,
    /// 4x4 matrix.
    Mat4,
}

impl Type {
    /// Returns the number of components contained in an element of this
    /// type, e.g. 16 for `Mat4`.
    pub fn multiplicity(self) -> usize {
        match self {
            Type::Scalar => 1,
            Type::Vec2 => 2,
            Type::Vec3 => 3,
            Type::Vec4 | Type::Mat2 => 4,
            Type::Mat3 => 9,
            Type::Mat4 => 16,
        }
    }

    /// Parses the given `type` wire string, if recognized.
    pub fn from_str(value: &str) -> Option<Self> {
        Some(match value {
            "SCALAR" => Type::Scalar,
            "VEC2" => Type::Vec2,
            "VEC3" => Type::Vec3,
            "VEC4" => Type::Vec4,
            "MAT2" => Type::Mat2,
            "MAT3" => Type::Mat3,
            "MAT4" => Type::Mat4,
            _ => return None,
        })
    }
}

/// Sparse storage of an accessor's elements that deviate from their
/// initialization value.
pub mod sparse {
    use super::*;

    /// Index array used to identify which elements in the base accessor
    /// array are deviating from their initialization value.
    #[derive(Clone, Debug, Validate)]
    pub struct Indices {
        /// The `BufferView` containing the sparse indices.
        pub buffer_view: Index<buffer::View>,

        /// The offset, in bytes, into the buffer view.
        pub byte_offset: u32,

        /// The data type of each index.
        pub component_type: Checked<IndexComponentType>,

        /// Unrecognized extension data.
        pub extensions: Option<crate::extras::RawValue>,

        /// Application-specific data.
        pub extras: Extras,
    }

    /// Sparse storage of accessor values that deviate from their
    /// initialization value.
    #[derive(Clone, Debug, Validate)]
    pub struct Sparse {
        /// The number of attributes encoded in this sparse accessor.
        pub count: u32,

        /// Index array used to identify which elements in the base accessor
        /// array are being deviated.
        pub indices: Indices,

        /// Array of size `count * number_of_components` storing the
        /// displaced accessor attributes pointed by `indices`.
        pub values: Values,

        /// Unrecognized extension data.
        pub extensions: Option<crate::extras::RawValue>,

        /// Application-specific data.
        pub extras: Extras,
    }

    /// Array of size `count * number_of_components` storing the displaced
    /// accessor attributes pointed by `accessor::sparse::Indices`.
    #[derive(Clone, Debug, Validate)]
    pub struct Values {
        /// The `BufferView` containing the sparse values.
        pub buffer_view: Index<buffer::View>,

        /// The offset, in bytes, into the buffer view.
        pub byte_offset: u32,

        /// Unrecognized extension data.
        pub extensions: Option<crate::extras::RawValue>,

        /// Application-specific data.
        pub extras: Extras,
    }

    /// The data type of each index in a sparse accessor's `indices` array.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum IndexComponentType {
        /// Corresponds to `GL_UNSIGNED_BYTE`.
        U8 = 1,
        /// Corresponds to `GL_UNSIGNED_SHORT`.
        U16,
        /// Corresponds to `GL_UNSIGNED_INT`.
        U32,
    }

    impl IndexComponentType {
        /// Parses the given `componentType` wire value, if it is one of the
        /// three unsigned integer types sparse indices are permitted to use.
        pub fn from_gl_enum(value: u32) -> Option<Self> {
            Some(match value {
                5121 => IndexComponentType::U8,
                5123 => IndexComponentType::U16,
                5125 => IndexComponentType::U32,
                _ => return None,
            })
        }

        /// Returns the corresponding `ComponentType`.
        pub fn as_component_type(self) -> super::ComponentType {
            match self {
                IndexComponentType::U8 => super::ComponentType::U8,
                IndexComponentType::U16 => super::ComponentType::U16,
                IndexComponentType::U32 => super::ComponentType::U32,
            }
        }
    }
}

/// A typed view into a buffer view that contains raw binary data.
#[derive(Clone, Debug, Validate)]
#[gltf(validate_hook = "accessor_validate_hook")]
pub struct Accessor {
    /// The parent buffer view this accessor reads from.
    ///
    /// `None` only when the accessor is fully sparse, i.e. every element is
    /// supplied via `sparse`.
    pub buffer_view: Option<Index<buffer::View>>,

    /// The offset, in bytes, into the buffer view.
    pub byte_offset: u32,

    /// The number of components within the buffer view, not to be confused
    /// with the number of bytes or elements.
    pub count: u32,

    /// The data type of components in the attribute.
    pub component_type: Checked<GenericComponentType>,

    /// Specifies whether integer data values are normalized before usage.
    pub normalized: bool,

    /// Specifies if the attribute is a scalar, vector, or matrix.
    pub type_: Checked<Type>,

    /// Minimum value of each component in this attribute.
    pub min: Option<Vec<f32>>,

    /// Maximum value of each component in this attribute.
    pub max: Option<Vec<f32>>,

    /// Name of this accessor.
    pub name: Option<String>,

    /// Sparse storage of elements that deviate from their initialization
    /// value.
    pub sparse: Option<sparse::Sparse>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// Wrapper around `ComponentType` with a `Checked` deserialization, since the
/// wire value may be any `u32` and not every value is a recognized type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GenericComponentType(pub ComponentType);

impl GenericComponentType {
    /// Parses a `componentType` wire value into a `Checked<GenericComponentType>`.
    pub fn checked(value: u32) -> Checked<Self> {
        match ComponentType::from_gl_enum(value) {
            Some(ty) => Checked::Valid(GenericComponentType(ty)),
            None => Checked::Invalid,
        }
    }
}

/// Wrapper around `sparse::IndexComponentType` with a `Checked`
/// deserialization, for the same reason as `GenericComponentType`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexComponentType(pub sparse::IndexComponentType);

impl IndexComponentType {
    /// Parses a sparse-indices `componentType` wire value into a
    /// `Checked<IndexComponentType>`.
    pub fn checked(value: u32) -> Checked<Self> {
        match sparse::IndexComponentType::from_gl_enum(value) {
            Some(ty) => Checked::Valid(IndexComponentType(ty)),
            None => Checked::Invalid,
        }
    }
}

impl Accessor {
    /// Returns `true` if this accessor carries a sparse substructure.
    pub fn is_sparse(&self) -> bool {
        self.sparse.is_some()
    }

    /// Computes the byte stride between consecutive elements: the attached
    /// buffer view's stride when it has one, otherwise a type/component-
    /// type-derived value with the `Mat2`/`Mat3` small-component special
    /// cases.
    pub fn data_stride(&self, root: &Asset) -> Option<usize> {
        if let Some(view) = self.buffer_view.and_then(|index| root.get(index)) {
            if let Some(stride) = view.byte_stride {
                return Some(stride.0);
            }
        }
        let component_size = match self.component_type.as_ref() {
            Checked::Valid(GenericComponentType(ty)) => ty.size(),
            Checked::Invalid => return None,
        };
        let ty = match self.type_ {
            Checked::Valid(ty) => ty,
            Checked::Invalid => return None,
        };
        Some(match (ty, component_size) {
            (Type::Mat2, 1) => 8,
            (Type::Mat3, 1) | (Type::Mat3, 2) => 12 * component_size,
            _ => ty.multiplicity() * component_size,
        })
    }
}

fn accessor_validate_hook<P, R>(accessor: &Accessor, _root: &Asset, path: P, report: &mut R)
where
    P: Fn() -> Path,
    R: FnMut(&dyn Fn() -> Path, Error),
{
    if accessor.buffer_view.is_none() && accessor.sparse.is_none() {
        report(&|| path().field("bufferView"), Error::Missing);
    }
}
