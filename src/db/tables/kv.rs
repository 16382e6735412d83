//! Key/value operations for serialized record collections.

use super::super::Database;

impl Database {
    /// Read the stored value for a collection key. `Ok(None)` means the key
    /// has never been written, which is distinct from an empty value.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, String> {
        let conn = self.conn()?;
        let result = conn.query_row(
            "SELECT value FROM collections WHERE key = ?1",
            rusqlite::params![key],
            |row| row.get(0),
        );
        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(format!("Failed to read '{}': {}", key, e)),
        }
    }

    /// Write the full value for a key, replacing any prior value.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), String> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO collections (key, value, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            rusqlite::params![key, value],
        )
        .map_err(|e| format!("Failed to write '{}': {}", key, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;

    #[test]
    fn test_kv_get_absent_key_returns_none() {
        let db = Database::new(":memory:").unwrap();
        assert_eq!(db.kv_get("missing").unwrap(), None);
    }

    #[test]
    fn test_kv_round_trip() {
        let db = Database::new(":memory:").unwrap();
        db.kv_set("love_notes", "[]").unwrap();
        assert_eq!(db.kv_get("love_notes").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_kv_set_overwrites() {
        let db = Database::new(":memory:").unwrap();
        db.kv_set("love_notes", "first").unwrap();
        db.kv_set("love_notes", "second").unwrap();
        assert_eq!(db.kv_get("love_notes").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.db");
        let path = path.to_str().unwrap();

        {
            let db = Database::new(path).unwrap();
            db.kv_set("memories", r#"[{"id":"1"}]"#).unwrap();
        }

        let db = Database::new(path).unwrap();
        assert_eq!(
            db.kv_get("memories").unwrap(),
            Some(r#"[{"id":"1"}]"#.to_string())
        );
    }
}
