/// Entity identifiers are opaque strings (UUIDv7 text for new entities).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar date without time of day (task deadlines).
pub type Date = chrono::NaiveDate;

/// Generate a fresh, time-ordered entity identifier.
pub fn new_id() -> EntityId {
    uuid::Uuid::now_v7().to_string()
}
