//! Container framing: detect glTF vs GLB, validate the GLB header and
//! chunk layout, and surface the JSON span plus optional BIN span.
//!
//! Uses the same `byteorder`-based little-endian header/chunk reading and
//! the same chunk-type constants as a conventional `.glb` reader, adapted
//! to split the input into the spans the walker needs rather than
//! constructing an intermediate `Glb` value.

use byteorder::{LittleEndian, ReadBytesExt};
use std::fmt;
use std::io::{self, Cursor, Read};

/// `b"glTF"` read as a little-endian `u32`.
const MAGIC: u32 = 0x4654_6C67;

/// The only GLB version this crate understands.
const SUPPORTED_VERSION: u32 = 2;

/// The `JSON` chunk type, `b"JSON"` read as a little-endian `u32`.
const JSON_CHUNK_TYPE: u32 = 0x4E4F_534A;

/// The `BIN\0` chunk type, `b"BIN\0"` read as a little-endian `u32`.
const BIN_CHUNK_TYPE: u32 = 0x004E_4942;

/// The fixed 12-byte GLB header.
#[derive(Clone, Copy, Debug)]
struct Header {
    version: u32,
    length: u32,
}

impl Header {
    const SIZE: usize = 12;

    fn from_reader<R: Read>(mut reader: R) -> Result<Self, ContainerError> {
        let magic = reader.read_u32::<LittleEndian>()?;
        if magic != MAGIC {
            return Err(ContainerError::Magic);
        }
        let version = reader.read_u32::<LittleEndian>()?;
        if version != SUPPORTED_VERSION {
            return Err(ContainerError::Version(version));
        }
        let length = reader.read_u32::<LittleEndian>()?;
        Ok(Header { version, length })
    }
}

#[derive(Clone, Copy, Debug)]
struct ChunkHeader {
    length: u32,
    ty: u32,
}

impl ChunkHeader {
    const SIZE: usize = 8;

    fn from_reader<R: Read>(mut reader: R) -> Result<Self, ContainerError> {
        let length = reader.read_u32::<LittleEndian>()?;
        let ty = reader.read_u32::<LittleEndian>()?;
        Ok(ChunkHeader { length, ty })
    }
}

/// Failure while framing a `.glb` container.
#[derive(Debug)]
pub enum ContainerError {
    /// An I/O error occurred while reading the in-memory buffer.
    Io(io::Error),
    /// The first four bytes were not `glTF`.
    Magic,
    /// The GLB version was not `2`.
    Version(u32),
    /// The header's declared `length` does not match the actual input
    /// length.
    Length { declared: u32, actual: usize },
    /// A chunk's declared length does not fit within the remaining input.
    ChunkLength,
    /// No `JSON` chunk was found as the first chunk.
    MissingJsonChunk,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContainerError::Io(e) => write!(f, "I/O error while framing container: {e}"),
            ContainerError::Magic => write!(f, "unsupported binary glTF magic"),
            ContainerError::Version(v) => write!(f, "unsupported GLB version {v}"),
            ContainerError::Length { declared, actual } => write!(
                f,
                "GLB header declares length {declared} but input is {actual} bytes"
            ),
            ContainerError::ChunkLength => write!(f, "chunk length exceeds remaining input"),
            ContainerError::MissingJsonChunk => write!(f, "missing JSON chunk"),
        }
    }
}

impl std::error::Error for ContainerError {}

impl From<io::Error> for ContainerError {
    fn from(e: io::Error) -> Self {
        ContainerError::Io(e)
    }
}

/// The JSON and (optional) binary spans extracted from an input buffer.
pub struct Framed<'a> {
    /// The JSON text to tokenize.
    pub json: &'a [u8],
    /// The embedded `BIN` chunk payload, if this was a GLB container with
    /// one.
    pub bin: Option<&'a [u8]>,
}

/// Detects whether `bytes` is a `.glb` container or plain `.gltf` JSON text
/// and returns the spans the walker needs.
pub fn frame(bytes: &[u8]) -> Result<Framed<'_>, ContainerError> {
    if bytes.len() >= 4 && &bytes[0..4] == b"glTF" {
        frame_glb(bytes)
    } else {
        Ok(Framed { json: bytes, bin: None })
    }
}

fn frame_glb(bytes: &[u8]) -> Result<Framed<'_>, ContainerError> {
    let mut cursor = Cursor::new(bytes);
    let header = Header::from_reader(&mut cursor)?;
    if header.length as usize != bytes.len() {
        return Err(ContainerError::Length {
            declared: header.length,
            actual: bytes.len(),
        });
    }

    let mut offset = Header::SIZE;
    let mut json: Option<&[u8]> = None;
    let mut bin: Option<&[u8]> = None;

    while offset < bytes.len() {
        if bytes.len() - offset < ChunkHeader::SIZE {
            return Err(ContainerError::ChunkLength);
        }
        let chunk_header = ChunkHeader::from_reader(&bytes[offset..offset + ChunkHeader::SIZE])?;
        offset += ChunkHeader::SIZE;

        let chunk_length = chunk_header.length as usize;
        if chunk_length > bytes.len() - offset {
            return Err(ContainerError::ChunkLength);
        }
        let payload = &bytes[offset..offset + chunk_length];
        offset += chunk_length;

        match chunk_header.ty {
            JSON_CHUNK_TYPE if json.is_none() => json = Some(payload),
            BIN_CHUNK_TYPE if bin.is_none() && json.is_some() => bin = Some(payload),
            // Unknown or duplicate chunk types are skipped.
            _ => {}
        }
    }

    let json = json.ok_or(ContainerError::MissingJsonChunk)?;
    Ok(Framed { json, bin })
}
