//! Storage key model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity list kept in a year bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Goals,
    Updates,
    Settings,
}

impl EntityKind {
    /// Prefix used in persisted key names.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Goals => "goals",
            EntityKind::Updates => "updates",
            EntityKind::Settings => "settings",
        }
    }

    pub fn from_key_prefix(value: &str) -> Option<Self> {
        match value {
            "goals" => Some(EntityKind::Goals),
            "updates" => Some(EntityKind::Updates),
            "settings" => Some(EntityKind::Settings),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address of one year bucket, persisted as `"<kind>_<year>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub kind: EntityKind,
    pub year: i32,
}

impl BucketKey {
    pub fn new(kind: EntityKind, year: i32) -> Self {
        Self { kind, year }
    }

    /// Parses a persisted key name. Returns `None` for keys that do not
    /// follow the bucket naming convention.
    pub fn parse(key: &str) -> Option<Self> {
        let (kind, year) = key.rsplit_once('_')?;
        Some(Self {
            kind: EntityKind::from_key_prefix(kind)?,
            year: year.parse().ok()?,
        })
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind, self.year)
    }
}
