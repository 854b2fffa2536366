//! Database schema initialization and migrations.

use std::time::Duration;

use crate::error::{DatabaseResultExt, PaceError, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .busy_timeout(Duration::from_secs(5))
            .db_context("Failed to set busy timeout")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        if !self.has_column("sessions", "cards_created")? {
            self.connection
                .execute(
                    "ALTER TABLE sessions ADD COLUMN cards_created INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .map_err(|e| {
                    PaceError::database("Failed to add cards_created column to sessions table")
                        .with_source(e)
                })?;
            log::debug!("Added cards_created column to sessions table");
        }

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use crate::db::Database;

    #[test]
    fn test_old_database_gains_cards_column() {
        let connection = Connection::open_in_memory().unwrap();
        connection
            .execute_batch(
                "CREATE TABLE sessions (
                    id TEXT PRIMARY KEY NOT NULL,
                    plan_id TEXT NOT NULL,
                    chunk_id TEXT,
                    start_time TEXT NOT NULL,
                    end_time TEXT,
                    duration_minutes INTEGER NOT NULL DEFAULT 0,
                    notes TEXT NOT NULL DEFAULT '',
                    artifacts TEXT NOT NULL DEFAULT '[]'
                );
                INSERT INTO sessions (id, plan_id, start_time, end_time, duration_minutes)
                VALUES ('old', 'p', '2024-01-01T10:00:00Z', '2024-01-01T11:00:00Z', 60);",
            )
            .unwrap();

        let db = Database { connection };
        db.initialize_schema().unwrap();
        assert!(db.has_column("sessions", "cards_created").unwrap());

        let cards: i64 = db
            .connection
            .query_row("SELECT cards_created FROM sessions WHERE id = 'old'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(cards, 0);
    }

    #[test]
    fn test_initialization_is_repeatable() {
        let db = Database::open_in_memory().unwrap();
        db.initialize_schema().unwrap();
        assert!(db.has_column("sessions", "cards_created").unwrap());
    }
}
