/// Database row types — these map directly to SQLite rows.
/// Distinct from the chirp-types API models to keep the DB layer independent;
/// timestamps are stored as RFC 3339 text.
pub struct UserRow {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub email: String,
}
