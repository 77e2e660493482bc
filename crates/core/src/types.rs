/// Primary-key type. Every table uses BIGSERIAL, so ids are `i64`
/// end to end, JSON included.
pub type DbId = i64;

/// UTC wall-clock instant, matching TIMESTAMPTZ columns.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
