use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::{NoContext, Timestamp, Uuid};

use crate::error::TypeError;

/// Backend-assigned identifier of a stored record (UUID v7).
///
/// The identifier embeds the millisecond wall-clock time at which the record
/// was inserted, so a record's creation timestamp is recovered from its id
/// rather than from a separate field. Ids generated in one process are
/// strictly increasing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate an id stamped with the current time.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Generate an id stamped with an explicit Unix time.
    pub fn at_unix(seconds: u64, subsec_nanos: u32) -> Self {
        Self(Uuid::new_v7(Timestamp::from_unix(NoContext, seconds, subsec_nanos)))
    }

    /// Wrap an existing UUID. Only version 7 UUIDs carry a timestamp.
    pub fn from_uuid(uuid: Uuid) -> Result<Self, TypeError> {
        if uuid.get_timestamp().is_none() {
            return Err(TypeError::MissingTimestamp(uuid.to_string()));
        }
        Ok(Self(uuid))
    }

    /// Creation time embedded in the id.
    pub fn created_at(&self) -> DateTime<Utc> {
        let millis = self.created_at_millis();
        DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default()
    }

    /// Creation time in whole seconds since the Unix epoch.
    pub fn created_at_unix(&self) -> i64 {
        self.created_at_millis().div_euclid(1000)
    }

    fn created_at_millis(&self) -> i64 {
        match self.0.get_timestamp() {
            Some(ts) => {
                let (seconds, nanos) = ts.to_unix();
                (seconds as i64) * 1000 + i64::from(nanos / 1_000_000)
            }
            None => 0,
        }
    }

    /// Short representation (first 8 characters).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RecordId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s).map_err(|e| TypeError::InvalidRecordId(e.to_string()))?;
        Self::from_uuid(uuid)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.short_id())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
