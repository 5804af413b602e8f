use crate::validation::Validate;

/// Application-specific data, or an unrecognized/unparsed `extensions` entry.
///
/// The walker captures the exact source bytes of the JSON value rather
/// than building a generic DOM for it, consistent with the crate's decision
/// not to allocate a tree of values for anything it does not need typed
/// access to.
pub type Extras = Option<RawValue>;

/// The verbatim JSON text of a value the walker did not need to interpret.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawValue(String);

impl RawValue {
    /// Wraps the given JSON source text.
    pub fn from_string(text: String) -> Self {
        RawValue(text)
    }

    /// Returns the raw JSON source text.
    pub fn get(&self) -> &str {
        &self.0
    }
}

impl Validate for RawValue {}
