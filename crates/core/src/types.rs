/// Question identifiers are 64-bit integers issued by the catalog store.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
