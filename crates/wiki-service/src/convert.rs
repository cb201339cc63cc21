//! Decoding of stored documents into caller-facing values.

use wiki_store::document::{get_record_id, get_str_or_default, get_u64};
use wiki_store::{fields, Document, StoreResult};
use wiki_types::{Content, UserId, Version, VersionEntry};

/// Decode a document projected for a load.
pub fn to_content(doc: &Document) -> StoreResult<Content> {
    let version = get_u64(doc, fields::VERSION)?;
    let id = get_record_id(doc)?;
    Ok(Content {
        version: Version(version),
        text: get_str_or_default(doc, fields::TEXT),
        created_at: id.created_at_unix(),
    })
}

/// Decode a document projected for a history listing.
pub fn to_version_entry(doc: &Document) -> StoreResult<VersionEntry> {
    Ok(VersionEntry {
        number: Version(get_u64(doc, fields::VERSION)?),
        user_id: UserId(get_u64(doc, fields::USER_ID)?),
    })
}
