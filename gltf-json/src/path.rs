use std::fmt;

/// An immutable JSON source path, used to name the location of a validation
/// error relative to the root of the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path(String);

impl Path {
    /// Creates an empty JSON source path.
    ///
    /// ```
    /// # use gltf_json::Path;
    /// let path = Path::new();
    /// assert_eq!("", path.as_str());
    /// ```
    pub fn new() -> Self {
        Path(String::new())
    }

    /// Returns a new path ending with the given field.
    ///
    /// ```
    /// # use gltf_json::Path;
    /// let path = Path::new().field("foo");
    /// assert_eq!("foo", path.as_str());
    /// assert_eq!("foo.bar", path.field("bar").as_str());
    /// ```
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Path(name.to_string())
        } else {
            Path(format!("{}.{}", self.0, name))
        }
    }

    /// Returns a new path ending with the given array index.
    ///
    /// ```
    /// # use gltf_json::Path;
    /// let path = Path::new().field("foo");
    /// assert_eq!("foo[123]", path.index(123).as_str());
    /// ```
    pub fn index(&self, index: usize) -> Self {
        Path(format!("{}[{}]", self.0, index))
    }

    /// Returns a new path ending with the given object key.
    ///
    /// ```
    /// # use gltf_json::Path;
    /// let path = Path::new().field("foo");
    /// assert_eq!("foo[\"bar\"]", path.key("bar").as_str());
    /// ```
    pub fn key(&self, key: &str) -> Self {
        Path(format!("{}[\"{}\"]", self.0, key))
    }

    /// Returns a view into the internal representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
