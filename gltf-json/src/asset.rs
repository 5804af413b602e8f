use crate::extras::Extras;
use gltf_derive::Validate;

/// Metadata about the glTF asset, corresponding to the JSON `asset` block.
/// Named `AssetMetadata` rather than `Asset` to leave that name free for the
/// document root (see [`crate::root::Asset`]).
#[derive(Clone, Debug, Validate)]
pub struct AssetMetadata {
    /// A copyright message suitable for display to credit the content creator.
    pub copyright: Option<String>,

    /// Tool that generated this glTF model. Useful for debugging.
    pub generator: Option<String>,

    /// The minimum glTF version that this asset targets.
    pub min_version: Option<String>,

    /// The glTF version of this asset.
    pub version: String,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

impl Default for AssetMetadata {
    fn default() -> Self {
        AssetMetadata {
            copyright: None,
            generator: None,
            min_version: None,
            version: "2.0".to_string(),
            extensions: None,
            extras: None,
        }
    }
}
