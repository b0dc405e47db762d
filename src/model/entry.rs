//! Entry data structure for env file variables

/// A single name/value pair from an env file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Check whether a string is usable as a variable name.
///
/// Names must be non-empty, contain no `=`, and carry no leading or
/// trailing whitespace.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('=') && name.trim() == name
}
