//! Document model, query filters, projections and sort specifications.

use std::cmp::Ordering;

use serde_json::{Map, Value};
use wiki_types::{PageKey, PageRef, RecordId, UserId, Version, WikiId};

use crate::error::{StoreError, StoreResult};

/// A stored document: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

/// Field names of a page version document.
pub mod fields {
    /// Record id, assigned by the backend on insert.
    pub const ID: &str = "_id";
    pub const WIKI_ID: &str = "wikiId";
    pub const REF: &str = "ref";
    pub const VERSION: &str = "version";
    pub const USER_ID: &str = "userId";
    pub const TEXT: &str = "text";
}

/// Build the document for a new page version. The backend adds `_id`.
pub fn page_document(key: &PageKey, user_id: UserId, text: &str) -> Document {
    let mut doc = Document::new();
    doc.insert(fields::WIKI_ID.into(), Value::from(key.wiki_id.0));
    doc.insert(fields::REF.into(), Value::from(key.page_ref.as_str()));
    doc.insert(fields::VERSION.into(), Value::from(key.version.0));
    doc.insert(fields::USER_ID.into(), Value::from(user_id.0));
    doc.insert(fields::TEXT.into(), Value::from(text));
    doc
}

/// Read an unsigned integer field.
pub fn get_u64(doc: &Document, field: &str) -> StoreResult<u64> {
    match doc.get(field) {
        Some(value) => value
            .as_u64()
            .ok_or_else(|| StoreError::Decode(format!("field {field} is not an unsigned integer: {value}"))),
        None => Err(StoreError::Decode(format!("missing field {field}"))),
    }
}

/// Read a string field, treating a missing or non-string field as empty.
pub fn get_str_or_default(doc: &Document, field: &str) -> String {
    doc.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Read the backend-assigned record id.
pub fn get_record_id(doc: &Document) -> StoreResult<RecordId> {
    let raw = doc
        .get(fields::ID)
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::Decode(format!("missing field {}", fields::ID)))?;
    raw.parse()
        .map_err(|e| StoreError::Decode(format!("field {}: {e}", fields::ID)))
}

/// Conjunction of field equalities.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(&'static str, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality clause.
    pub fn eq(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.clauses.push((field, value.into()));
        self
    }

    /// All versions of one page.
    pub fn page(wiki_id: WikiId, page_ref: &PageRef) -> Self {
        Self::new()
            .eq(fields::WIKI_ID, wiki_id.0)
            .eq(fields::REF, page_ref.as_str())
    }

    /// Exactly one version of one page.
    pub fn version(wiki_id: WikiId, page_ref: &PageRef, version: Version) -> Self {
        Self::page(wiki_id, page_ref).eq(fields::VERSION, version.0)
    }

    /// Equivalent of [`Filter::version`] for a key.
    pub fn key(key: &PageKey) -> Self {
        Self::version(key.wiki_id, &key.page_ref, key.version)
    }

    /// Returns `true` if every clause matches. An empty filter matches all.
    pub fn matches(&self, doc: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, expected)| doc.get(*field) == Some(expected))
    }
}

/// Which fields a query returns.
///
/// `_id` is always returned unless an exclusion names it; it carries the
/// creation timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Projection {
    #[default]
    All,
    Include(&'static [&'static str]),
    Exclude(&'static [&'static str]),
}

impl Projection {
    pub fn apply(&self, doc: &Document) -> Document {
        match self {
            Self::All => doc.clone(),
            Self::Include(keep) => doc
                .iter()
                .filter(|(k, _)| k.as_str() == fields::ID || keep.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            Self::Exclude(hide) => doc
                .iter()
                .filter(|(k, _)| !hide.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Single-field sort specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub field: &'static str,
    pub direction: Direction,
}

impl Sort {
    pub const fn ascending(field: &'static str) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    pub const fn descending(field: &'static str) -> Self {
        Self {
            field,
            direction: Direction::Descending,
        }
    }

    /// Compare two documents under this sort. Missing fields sort lowest.
    pub fn compare(&self, a: &Document, b: &Document) -> Ordering {
        let ord = compare_values(a.get(self.field), b.get(self.field));
        match self.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Number(x), Value::Number(y)) => match (x.as_u64(), y.as_u64()) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => {
                    let x = x.as_f64().unwrap_or(f64::NAN);
                    let y = y.as_f64().unwrap_or(f64::NAN);
                    x.partial_cmp(&y).unwrap_or(Ordering::Equal)
                }
            },
            (Value::String(x), Value::String(y)) => x.cmp(y),
            _ => Ordering::Equal,
        },
    }
}
