use crate::validation::Validate;
use crate::{buffer, extras::Extras, Index};
use gltf_derive::Validate;

/// MIME types valid for image sources.
pub const VALID_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Image data used to create a texture.
#[derive(Clone, Debug, Validate)]
pub struct Image {
    /// The index of the buffer view that contains the image, equivalent
    /// to the image's uri data.
    pub buffer_view: Option<Index<buffer::View>>,

    /// The image's MIME type, required when `buffer_view` is used.
    pub mime_type: Option<MimeType>,

    /// The uri of the image, if it was not embedded via `buffer_view`.
    pub uri: Option<String>,

    /// Name of this image.
    pub name: Option<String>,

    /// Unrecognized extension data.
    pub extensions: Option<crate::extras::RawValue>,

    /// Application-specific data.
    pub extras: Extras,
}

/// An image MIME type, e.g. `image/png`.
#[derive(Clone, Debug, PartialEq)]
pub struct MimeType(pub String);

impl Validate for MimeType {}
