/// A per-parse collector for non-fatal and fatal diagnostics.
///
/// Every call to [`crate::parse`] gets its own `Diagnostics`, returned
/// alongside the result, so parsing stays reentrant even when several
/// threads parse different assets at once.
#[derive(Clone, Debug)]
pub struct Diagnostics {
    lines: Vec<String>,
    capacity: usize,
    bytes_used: usize,
}

/// The default byte budget for a collector's joined text.
pub const DEFAULT_CAPACITY: usize = 2048;

impl Default for Diagnostics {
    fn default() -> Self {
        Diagnostics::new()
    }
}

impl Diagnostics {
    /// Creates an empty collector with the default byte budget.
    pub fn new() -> Self {
        Diagnostics::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty collector with the given byte budget.
    pub fn with_capacity(capacity: usize) -> Self {
        Diagnostics {
            lines: Vec::new(),
            capacity,
            bytes_used: 0,
        }
    }

    /// Appends a diagnostic line, dropping it silently once the byte budget
    /// is exhausted.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        if self.bytes_used + message.len() + 1 > self.capacity {
            return;
        }
        self.bytes_used += message.len() + 1;
        self.lines.push(message);
    }

    /// Returns every diagnostic collected so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns `true` if no diagnostics were collected.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins every diagnostic into a single newline-separated string.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
