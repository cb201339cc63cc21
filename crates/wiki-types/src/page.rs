use serde::{Deserialize, Serialize};

use crate::ids::{PageRef, UserId, Version, WikiId};

/// Uniqueness key of a page version: at most one record exists per key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PageKey {
    pub wiki_id: WikiId,
    pub page_ref: PageRef,
    pub version: Version,
}

impl PageKey {
    pub fn new(wiki_id: WikiId, page_ref: impl Into<PageRef>, version: Version) -> Self {
        Self {
            wiki_id,
            page_ref: page_ref.into(),
            version,
        }
    }
}

/// Content of a page version as returned by a load.
///
/// The default value, with version 0, is the sentinel for "no such page or
/// version".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub version: Version,
    pub text: String,
    /// Creation time in seconds since the Unix epoch.
    pub created_at: i64,
}

impl Content {
    /// The empty content reporting absence.
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// Returns `false` for the sentinel.
    pub fn exists(&self) -> bool {
        self.version != Version::SENTINEL
    }
}

/// One entry of a page history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub number: Version,
    pub user_id: UserId,
}

/// Page history, in whatever order the backend returned it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versions {
    pub list: Vec<VersionEntry>,
}

impl Versions {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The entries ordered by version number.
    pub fn sorted(mut self) -> Self {
        self.list.sort_by_key(|e| e.number);
        self
    }
}

impl FromIterator<VersionEntry> for Versions {
    fn from_iter<I: IntoIterator<Item = VersionEntry>>(iter: I) -> Self {
        Self {
            list: iter.into_iter().collect(),
        }
    }
}

/// Outcome of a write or delete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
}

impl Response {
    pub fn success() -> Self {
        Self { success: true }
    }

    /// A write that lost the race for its version number.
    pub fn rejected() -> Self {
        Self { success: false }
    }
}
