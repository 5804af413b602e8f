//! A two-stage glTF 2.0 asset parser: a streaming JSON tokenizer that never
//! builds a DOM, and a schema-directed walker that materializes the typed
//! [`gltf_json::Asset`] data model before a fix-up pass resolves and
//! bounds-checks every index reference.
//!
//! ```no_run
//! let (asset, diagnostics) = gltf::parse("model.gltf", &gltf::ParseOptions::default())?;
//! for line in diagnostics.lines() {
//!     eprintln!("{line}");
//! }
//! println!("{} nodes", asset.nodes.len());
//! # Ok::<(), gltf::ParseError>(())
//! ```

mod bytes;
mod container;
mod diagnostics;
mod error;
mod resolve;
mod token;
mod value;
mod walker;

pub use diagnostics::Diagnostics;
pub use error::ParseError;
pub use gltf_json as json;
pub use gltf_json::Asset;

use log::{debug, trace};
use std::path::Path;

/// The default cap on input size accepted by [`parse`]/[`parse_slice`]: 1 GiB.
pub const DEFAULT_MAX_INPUT_SIZE: usize = 1 << 30;

/// Tunables for a single parse call, passed explicitly rather than read from
/// global state.
#[derive(Clone, Copy, Debug)]
pub struct ParseOptions {
    /// The largest input, in bytes, `parse`/`parse_slice` will accept before
    /// failing with [`ParseError::TooLarge`].
    pub max_input_size: usize,
    /// How many token slots to pre-allocate before tokenizing. Zero lets the
    /// token buffer grow on demand; a caller who already knows roughly how
    /// large the document is can avoid reallocation by setting this ahead of
    /// time.
    pub initial_token_capacity: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
            initial_token_capacity: 0,
        }
    }
}

/// Reads `path` from disk and parses it as a `.gltf` or `.glb` asset.
///
/// On success, returns the fully resolved [`Asset`] together with a
/// [`Diagnostics`] collector of any non-fatal observations made along the
/// way. On failure, nothing is returned but the error — a partially built
/// `Asset` is never observable outside this crate.
pub fn parse(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> Result<(Asset, Diagnostics), ParseError> {
    let path = path.as_ref();
    let bytes = bytes::read_file(path, options.max_input_size)?;
    debug!("read {} ({} bytes)", path.display(), bytes.len());
    parse_slice(&bytes, options)
}

/// Parses an in-memory `.gltf` or `.glb` buffer as a glTF 2.0 asset.
///
/// Behaves exactly like [`parse`], for callers that already hold the bytes
/// in memory (an embedded asset, a buffer downloaded over the network, a
/// test fixture).
pub fn parse_slice(
    bytes: &[u8],
    options: &ParseOptions,
) -> Result<(Asset, Diagnostics), ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::TooSmall);
    }
    if bytes.len() > options.max_input_size {
        return Err(ParseError::TooLarge {
            size: bytes.len(),
            limit: options.max_input_size,
        });
    }

    let mut diagnostics = Diagnostics::new();

    let framed = container::frame(bytes)?;
    trace!(
        "framed input: {} byte JSON chunk, bin chunk present: {}",
        framed.json.len(),
        framed.bin.is_some()
    );

    let tokens =
        token::tokenize_with_capacity(framed.json, options.initial_token_capacity, usize::MAX)?;
    trace!("tokenized into {} tokens", tokens.len());

    let mut document = walker::parse_root(framed.json, &tokens)?;
    debug!(
        "walked document: {} nodes, {} meshes, {} accessors",
        document.nodes.len(),
        document.meshes.len(),
        document.accessors.len()
    );

    if let Some(bin) = framed.bin {
        document.file_info.bin = Some(bin.to_vec());
        diagnostics.push("GLB container carried an embedded BIN chunk");
    }

    let document = resolve::resolve(document)?;
    trace!("resolved all references");

    Ok((document, diagnostics))
}
