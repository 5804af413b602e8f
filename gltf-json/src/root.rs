use crate::validation::{Error, Validate};
use crate::{accessor, animation, buffer, camera, image, material, mesh, scene, skin, texture};
use crate::{AssetMetadata, Path};
use std::fmt;
use std::marker::PhantomData;
use std::ops;

/// Represents an offset into an array of type `T` owned by [`Asset`].
pub struct Index<T>(u32, PhantomData<fn() -> T>);

impl<T> Index<T> {
    /// Creates a new `Index` representing an offset into an array of type
    /// `T` with the given value.
    pub fn new(value: u32) -> Self {
        Index(value, PhantomData)
    }

    /// Returns the internal offset value.
    pub fn value(&self) -> usize {
        self.0 as usize
    }
}

impl<T> Clone for Index<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Index<T> {}

impl<T> fmt::Debug for Index<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> fmt::Display for Index<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Eq for Index<T> {}

impl<T> PartialEq for Index<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Ord for Index<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> PartialOrd for Index<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> std::hash::Hash for Index<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> From<u32> for Index<T> {
    fn from(value: u32) -> Self {
        Index::new(value)
    }
}

impl<T: Validate> Validate for Index<T>
where
    Asset: Get<T>,
{
    fn validate_minimally<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        if root.get(*self).is_none() {
            report(&path, Error::IndexOutOfBounds);
        }
    }
}

/// Helper trait for retrieving top-level objects by a universal identifier.
pub trait Get<T> {
    /// Retrieves a single value at the given index, if it exists.
    fn get(&self, index: Index<T>) -> Option<&T>;
}

/// Helper trait for attempting to retrieve top-level objects by an index,
/// panicking if the index turns out to be invalid — used during the
/// resolve pass once all indices have already been checked by
/// `validate_minimally`.
pub trait TryGet<T> {
    /// Retrieves a single value at the given index, panicking if the index
    /// is invalid.
    fn try_get(&self, index: Index<T>) -> Option<&T> {
        self.get(index)
    }
}

impl<S, T> TryGet<T> for S where S: Get<T> {}

macro_rules! impl_get {
    ($ty:ty, $field:ident) => {
        impl Get<$ty> for Asset {
            fn get(&self, index: Index<$ty>) -> Option<&$ty> {
                self.$field.get(index.value())
            }
        }
    };
}

/// The embedded binary payload of a `.glb` container, if the input was one
/// and carried a `BIN` chunk.
#[derive(Clone, Debug, Default)]
pub struct FileInfo {
    /// The `BIN` chunk payload, an owned copy of the bytes embedded in the
    /// container.
    pub bin: Option<Vec<u8>>,
}

/// The root object of a glTF 2.0 asset, containing every top-level array the
/// format defines. By the time a caller sees an `Asset`, every `Index<T>` it
/// contains has already been bounds-checked against the arrays below.
#[derive(Clone, Debug, Default)]
pub struct Asset {
    /// Metadata about the glTF asset.
    pub asset: AssetMetadata,

    /// The embedded binary payload, if this asset was parsed from a `.glb`
    /// container with a `BIN` chunk.
    pub file_info: FileInfo,

    /// All accessors.
    pub accessors: Vec<accessor::Accessor>,

    /// All animations.
    pub animations: Vec<animation::Animation>,

    /// All buffers.
    pub buffers: Vec<buffer::Buffer>,

    /// All buffer views.
    pub buffer_views: Vec<buffer::View>,

    /// All cameras.
    pub cameras: Vec<camera::Camera>,

    /// All images.
    pub images: Vec<image::Image>,

    /// All materials.
    pub materials: Vec<material::Material>,

    /// All meshes.
    pub meshes: Vec<mesh::Mesh>,

    /// All nodes.
    pub nodes: Vec<scene::Node>,

    /// All samplers.
    pub samplers: Vec<texture::Sampler>,

    /// The default scene, if any.
    pub scene: Option<Index<scene::Scene>>,

    /// All scenes.
    pub scenes: Vec<scene::Scene>,

    /// All skins.
    pub skins: Vec<skin::Skin>,

    /// All textures.
    pub textures: Vec<texture::Texture>,

    /// Names of glTF extensions used somewhere in this asset.
    pub extensions_used: Vec<String>,

    /// Names of glTF extensions required to correctly render this asset.
    pub extensions_required: Vec<String>,

    /// Unrecognized top-level extension payloads, as an ordered sequence of
    /// `(name, raw JSON)` pairs in source order, captured verbatim rather
    /// than parsed into a typed model.
    pub extensions: Vec<(String, crate::extras::RawValue)>,

    /// Application-specific data.
    pub extras: crate::extras::Extras,
}

impl_get!(accessor::Accessor, accessors);
impl_get!(animation::Animation, animations);
impl_get!(buffer::Buffer, buffers);
impl_get!(buffer::View, buffer_views);
impl_get!(camera::Camera, cameras);
impl_get!(image::Image, images);
impl_get!(material::Material, materials);
impl_get!(mesh::Mesh, meshes);
impl_get!(scene::Node, nodes);
impl_get!(texture::Sampler, samplers);
impl_get!(scene::Scene, scenes);
impl_get!(skin::Skin, skins);
impl_get!(texture::Texture, textures);

impl Asset {
    /// Returns the internal SOA (struct-of-arrays) item identified by the
    /// given `Index`, if it exists.
    pub fn get<T>(&self, index: Index<T>) -> Option<&T>
    where
        Self: Get<T>,
    {
        (self as &dyn Get<T>).get(index)
    }

    /// Consumes `self`, releasing the asset's resources. There is nothing
    /// to release explicitly since this crate never allocates outside of
    /// Rust's normal ownership; provided so callers porting from an
    /// explicit free/teardown API have an equivalent call to make.
    pub fn free(self) {}
}

impl<T> ops::Index<Index<T>> for Asset
where
    Asset: Get<T>,
{
    type Output = T;

    fn index(&self, index: Index<T>) -> &T {
        self.get(index)
            .unwrap_or_else(|| panic!("no such index: {index:?}"))
    }
}
