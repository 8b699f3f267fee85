use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

/// Read the raw value stored under `key`, if any.
pub fn read_slot(db: &Database, key: &str) -> Result<Option<String>, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            "SELECT value FROM storage WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("read slot '{key}' failed: {e}")))
    })
}

/// Replace the whole value stored under `key`.
pub fn write_slot(db: &Database, key: &str, value: &str) -> Result<(), ServerError> {
    let now = Utc::now().to_rfc3339();

    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value, now],
        )
        .map_err(|e| ServerError::DbError(format!("write slot '{key}' failed: {e}")))?;
        Ok(())
    })
}
