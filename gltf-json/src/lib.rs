//! Typed data model for the `gltf` crate.
//!
//! This crate defines the shape a glTF 2.0 asset takes once it has been
//! fully walked and resolved: every array the format can contain, the
//! `Index<T>`/`Get<T>` pattern used to reference between them, and the
//! `Validate` trait used to check an `Asset` against the invariants named
//! in the format. It has no JSON parsing of its own — the `gltf` crate's
//! tokenizer and walker populate these types directly.

// `gltf-derive`'s `#[derive(Validate)]` expands to absolute paths rooted at
// `gltf_json::...` so the same expansion works unchanged whether it runs
// inside this crate (on `Accessor`, `Node`, ...) or downstream. A crate is
// not implicitly present in its own extern prelude under its own name, so
// this crate names itself to close that gap.
extern crate self as gltf_json;

pub mod accessor;
pub mod animation;
pub mod asset;
pub mod buffer;
pub mod camera;
pub mod extras;
pub mod image;
pub mod material;
pub mod mesh;
mod path;
mod root;
pub mod scene;
pub mod skin;
pub mod texture;
pub mod validation;

pub use accessor::Accessor;
pub use asset::AssetMetadata;
pub use camera::Camera;
pub use image::Image;
pub use material::Material;
pub use mesh::Mesh;
pub use path::Path;
pub use root::{Asset, Get, Index, TryGet};
pub use scene::{Node, Scene};
pub use skin::Skin;
pub use texture::Texture;
pub use validation::Validate;
