use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const BOOKINGS_KEY: &str = "bookings";
pub const BLOCKS_KEY: &str = "blocks";
pub const STAFF_KEY: &str = "staff";

/// Loads a stored collection. A missing or unreadable document comes back
/// as an empty collection rather than an error; the next save overwrites it.
pub fn load_collection<T: DeserializeOwned>(
    conn: &Connection,
    key: &str,
) -> anyhow::Result<Vec<T>> {
    let mut stmt = conn.prepare("SELECT value FROM collections WHERE key = ?1")?;
    let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));

    let raw = match result {
        Ok(raw) => raw,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(vec![]),
        Err(e) => return Err(e.into()),
    };

    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            tracing::warn!("stored collection '{key}' is unreadable, starting empty: {e}");
            Ok(vec![])
        }
    }
}

pub fn save_collection<T: Serialize>(
    conn: &Connection,
    key: &str,
    items: &[T],
) -> anyhow::Result<()> {
    let value = serde_json::to_string(items)?;
    conn.execute(
        "INSERT INTO collections (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET
           value = excluded.value,
           updated_at = excluded.updated_at",
        params![key, value],
    )?;
    Ok(())
}
