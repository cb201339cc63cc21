use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a wiki. Pages are scoped by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WikiId(pub u64);

impl fmt::Display for WikiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for WikiId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Identifier of the author of a page version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Version number of a page.
///
/// Stored versions start at 1 and grow by one per successful write. The zero
/// value never names a stored record: as a request it means "the latest
/// version", as a result it is the sentinel for "no such page or version".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(pub u64);

impl Version {
    /// Request value selecting the highest stored version.
    pub const LATEST: Version = Version(0);

    /// Result value reporting that nothing was found.
    pub const SENTINEL: Version = Version(0);

    /// The first version a page can have.
    pub const FIRST: Version = Version(1);

    /// The version following this one, or `None` when it would overflow.
    pub fn next(self) -> Option<Version> {
        self.0.checked_add(1).map(Version)
    }

    /// Returns `true` for the zero value.
    pub fn is_latest(self) -> bool {
        self.0 == 0
    }

    /// The raw number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u64> for Version {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Reference of a page within a wiki.
///
/// The store never interprets references; any string, the empty one
/// included, names a distinct page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRef(String);

impl PageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageRef {
    fn from(reference: &str) -> Self {
        Self(reference.to_string())
    }
}

impl From<String> for PageRef {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl AsRef<str> for PageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
