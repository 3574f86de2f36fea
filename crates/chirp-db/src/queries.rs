use crate::Database;
use crate::models::UserRow;
use anyhow::Result;
use rusqlite::OptionalExtension;

impl Database {
    // -- Users --

    pub fn create_user(
        &self,
        id: &str,
        email: &str,
        created_at: &str,
        updated_at: &str,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, created_at, updated_at, email) VALUES (?1, ?2, ?3, ?4)",
                (id, created_at, updated_at, email),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_id(&self, id: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, created_at, updated_at, email FROM users WHERE id = ?1",
                [id],
                |row| {
                    Ok(UserRow {
                        id: row.get(0)?,
                        created_at: row.get(1)?,
                        updated_at: row.get(2)?,
                        email: row.get(3)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
        })
    }

    pub fn count_users(&self) -> Result<u64> {
        self.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
                .map_err(Into::into)
        })
    }

    /// Delete every user. Only reachable through the dev-gated admin reset.
    pub fn reset_users(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM users", [])?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn create_and_fetch_user() {
        let db = Database::open_in_memory().unwrap();
        let now = chrono::Utc::now().to_rfc3339();
        let id = uuid::Uuid::new_v4().to_string();

        db.create_user(&id, "walt@example.com", &now, &now).unwrap();

        let row = db.get_user_by_id(&id).unwrap().unwrap();
        assert_eq!(row.email, "walt@example.com");
        assert_eq!(row.created_at, now);
        assert_eq!(row.updated_at, now);
    }

    #[test]
    fn duplicate_email_rejected() {
        let db = Database::open_in_memory().unwrap();
        let now = chrono::Utc::now().to_rfc3339();

        db.create_user("a", "same@example.com", &now, &now).unwrap();
        let result = db.create_user("b", "same@example.com", &now, &now);
        assert!(result.is_err());
    }

    #[test]
    fn reset_empties_users() {
        let db = Database::open_in_memory().unwrap();
        let now = chrono::Utc::now().to_rfc3339();

        db.create_user("a", "a@example.com", &now, &now).unwrap();
        db.create_user("b", "b@example.com", &now, &now).unwrap();
        assert_eq!(db.count_users().unwrap(), 2);

        db.reset_users().unwrap();
        assert_eq!(db.count_users().unwrap(), 0);
    }
}
