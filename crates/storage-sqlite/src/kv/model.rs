//! Database model for key-value entries.

use diesel::prelude::*;

/// One persisted bucket: a `"<kind>_<year>"` key and its JSON array value.
#[derive(Queryable, Insertable, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::kv_store)]
pub struct KvEntryDB {
    pub store_key: String,
    pub store_value: String,
}
