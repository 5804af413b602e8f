use crate::{Asset, Path};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

/// Trait for validating the typed data model's structural invariants.
/// Deriving this (see the `gltf-derive` crate) walks every field
/// recursively; hand-written impls are only needed where a type introduces
/// a new invariant (an `Index<T>` must be in bounds, a `Checked<T>` must be
/// `Valid`, ...).
pub trait Validate {
    /// Validates only the invariants required for the resolver to run
    /// safely — mainly index bounds.
    fn validate_minimally<P, R>(&self, _root: &Asset, _path: P, _report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
    }

    /// Validates the data against the full set of invariants, beyond what
    /// `validate_minimally` covers (required-field presence, parent
    /// uniqueness, and so on).
    fn validate_completely<P, R>(&self, _root: &Asset, _path: P, _report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
    }
}

/// What kind of problem was found while validating.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
    /// An index was found to be out of bounds.
    IndexOutOfBounds,
    /// An invalid value was identified.
    Invalid,
    /// Some required data has been omitted.
    Missing,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            Error::IndexOutOfBounds => "index out of bounds",
            Error::Invalid => "invalid value",
            Error::Missing => "missing data",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for Error {}

/// Wraps a value that was recognized during the walk but did not match any
/// known variant (e.g. an unrecognized attribute semantic). Kept rather
/// than rejected outright, so a consumer can still see the raw name.
#[derive(Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Checked<T> {
    /// The item matched a known variant.
    Valid(T),
    /// The item did not match any known variant.
    Invalid,
}

impl<T> Checked<T> {
    /// Converts from `&Checked<T>` to `Checked<&T>`.
    pub fn as_ref(&self) -> Checked<&T> {
        match self {
            Checked::Valid(item) => Checked::Valid(item),
            Checked::Invalid => Checked::Invalid,
        }
    }

    /// Takes ownership of the contained item if it is `Valid`.
    ///
    /// # Panics
    ///
    /// Panics if called on an `Invalid` item.
    pub fn unwrap(self) -> T {
        match self {
            Checked::Valid(item) => item,
            Checked::Invalid => panic!("attempted to unwrap an invalid item"),
        }
    }
}

impl<T: Clone> Clone for Checked<T> {
    fn clone(&self) -> Self {
        match self {
            Checked::Valid(item) => Checked::Valid(item.clone()),
            Checked::Invalid => Checked::Invalid,
        }
    }
}

impl<T: Copy> Copy for Checked<T> {}

impl<T: fmt::Display> fmt::Display for Checked<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Checked::Valid(item) => item.fmt(f),
            Checked::Invalid => write!(f, "<invalid>"),
        }
    }
}

impl<T: Default> Default for Checked<T> {
    fn default() -> Self {
        Checked::Valid(T::default())
    }
}

impl<T> Validate for Checked<T> {
    fn validate_minimally<P, R>(&self, _root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        if let Checked::Invalid = self {
            report(&path, Error::Invalid);
        }
    }
}

impl<K: Eq + Hash + Ord + ToString + Validate, V: Validate> Validate for BTreeMap<K, V> {
    fn validate_minimally<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        for (key, value) in self.iter() {
            key.validate_minimally(root, || path().key(&key.to_string()), report);
            value.validate_minimally(root, || path().key(&key.to_string()), report);
        }
    }

    fn validate_completely<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        for (key, value) in self.iter() {
            key.validate_completely(root, || path().key(&key.to_string()), report);
            value.validate_completely(root, || path().key(&key.to_string()), report);
        }
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate_minimally<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        if let Some(value) = self.as_ref() {
            value.validate_minimally(root, path, report);
        }
    }

    fn validate_completely<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        if let Some(value) = self.as_ref() {
            value.validate_completely(root, path, report);
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate_minimally<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        for (index, value) in self.iter().enumerate() {
            value.validate_minimally(root, || path().index(index), report);
        }
    }

    fn validate_completely<P, R>(&self, root: &Asset, path: P, report: &mut R)
    where
        P: Fn() -> Path,
        R: FnMut(&dyn Fn() -> Path, Error),
    {
        for (index, value) in self.iter().enumerate() {
            value.validate_completely(root, || path().index(index), report);
        }
    }
}

// These types carry no further invariants once constructed.
impl Validate for bool {}
impl Validate for u32 {}
impl Validate for i32 {}
impl Validate for f32 {}
impl Validate for usize {}
impl Validate for [f32; 3] {}
impl Validate for [f32; 4] {}
impl Validate for [f32; 16] {}
impl Validate for () {}

// A named, unprocessed extension payload: the name itself carries no
// invariant, and the payload is opaque raw JSON.
impl<A: Validate, B: Validate> Validate for (A, B) {}
impl Validate for String {}
