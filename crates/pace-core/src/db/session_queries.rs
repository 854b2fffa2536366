//! Session CRUD operations and queries.

use jiff::{Timestamp, fmt::temporal::DateTimePrinter};
use rusqlite::{ErrorCode, OptionalExtension, params, types::Type};

use crate::{
    error::{DatabaseResultExt, PaceError, Result},
    models::{Session, SessionFilter},
    ports::SessionStore,
};

const SESSION_COLUMNS: &str = "id, plan_id, chunk_id, start_time, end_time, duration_minutes, notes, artifacts, cards_created";
const INSERT_SESSION_SQL: &str = "INSERT INTO sessions (id, plan_id, chunk_id, start_time, end_time, duration_minutes, notes, artifacts, cards_created) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const UPDATE_SESSION_SQL: &str = "UPDATE sessions SET plan_id = ?1, chunk_id = ?2, start_time = ?3, end_time = ?4, duration_minutes = ?5, notes = ?6, artifacts = ?7, cards_created = ?8 WHERE id = ?9";
const DELETE_SESSION_SQL: &str = "DELETE FROM sessions WHERE id = ?1";

/// RFC 3339 in UTC with all nine fractional digits, so stored timestamps
/// sort correctly as text.
fn sql_timestamp(timestamp: &Timestamp) -> String {
    DateTimePrinter::new()
        .precision(Some(9))
        .timestamp_to_string(timestamp)
}

impl super::Database {
    /// Helper function to construct a Session from a database row
    fn build_session_from_row(row: &rusqlite::Row) -> rusqlite::Result<Session> {
        let artifacts_json: String = row.get(7)?;
        let artifacts = serde_json::from_str::<Vec<String>>(&artifacts_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

        let end_time = row
            .get::<_, Option<String>>(4)?
            .map(|s| s.parse::<Timestamp>())
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

        Ok(Session {
            id: row.get(0)?,
            plan_id: row.get(1)?,
            chunk_id: row.get(2)?,
            start_time: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
            end_time,
            duration_minutes: row.get(5)?,
            notes: row.get(6)?,
            artifacts,
            cards_created: row.get(8)?,
        })
    }

    fn query_sessions(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Session>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let sessions = stmt
            .query_map(params, Self::build_session_from_row)
            .db_context("Failed to query sessions")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch sessions")?;
        Ok(sessions)
    }

    fn query_session(&self, sql: &str, params: &[&dyn rusqlite::ToSql]) -> Result<Option<Session>> {
        self.connection
            .query_row(sql, params, Self::build_session_from_row)
            .optional()
            .db_context("Failed to query session")
    }
}

impl SessionStore for super::Database {
    fn create(&mut self, session: &Session) -> Result<()> {
        let artifacts = serde_json::to_string(&session.artifacts)?;

        let inserted = self.connection.execute(
            INSERT_SESSION_SQL,
            params![
                session.id,
                session.plan_id,
                session.chunk_id,
                sql_timestamp(&session.start_time),
                session.end_time.as_ref().map(sql_timestamp),
                session.duration_minutes,
                session.notes,
                artifacts,
                session.cards_created,
            ],
        );

        match inserted {
            Ok(_) => Ok(()),
            Err(e) if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => {
                // Only the single-active index can collide for a fresh UUID.
                match self.get_active()? {
                    Some(active) if session.is_active() && active.id != session.id => {
                        Err(PaceError::Conflict {
                            session_id: active.id,
                            plan_id: active.plan_id,
                        })
                    }
                    _ => Err(PaceError::database("Failed to insert session").with_source(e)),
                }
            }
            Err(e) => Err(PaceError::database("Failed to insert session").with_source(e)),
        }
    }

    fn get(&self, id: &str) -> Result<Option<Session>> {
        self.query_session(
            &format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE id = ?1"),
            &[&id],
        )
    }

    fn get_active(&self) -> Result<Option<Session>> {
        self.query_session(
            &format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE end_time IS NULL LIMIT 1"),
            &[],
        )
    }

    fn update(&mut self, session: &Session) -> Result<()> {
        let artifacts = serde_json::to_string(&session.artifacts)?;

        let updated = self
            .connection
            .execute(
                UPDATE_SESSION_SQL,
                params![
                    session.plan_id,
                    session.chunk_id,
                    sql_timestamp(&session.start_time),
                    session.end_time.as_ref().map(sql_timestamp),
                    session.duration_minutes,
                    session.notes,
                    artifacts,
                    session.cards_created,
                    session.id,
                ],
            )
            .db_context("Failed to update session")?;

        if updated == 0 {
            return Err(PaceError::SessionNotFound {
                id: session.id.clone(),
            });
        }
        Ok(())
    }

    fn list(&self, filter: &SessionFilter) -> Result<Vec<Session>> {
        let mut query = format!("SELECT {SESSION_COLUMNS} FROM sessions");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref plan_id) = filter.plan_id {
            conditions.push("plan_id = ?");
            params_vec.push(Box::new(plan_id.clone()));
        }

        if let Some(ref chunk_id) = filter.chunk_id {
            conditions.push("chunk_id = ?");
            params_vec.push(Box::new(chunk_id.clone()));
        }

        if let Some(ref after) = filter.started_after {
            conditions.push("start_time >= ?");
            params_vec.push(Box::new(sql_timestamp(after)));
        }

        if filter.completed_only {
            conditions.push("end_time IS NOT NULL");
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY start_time DESC, id DESC");

        if let Some(limit) = filter.limit {
            query.push_str(" LIMIT ?");
            params_vec.push(Box::new(limit));
        }

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();
        self.query_sessions(&query, &params_refs)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_SESSION_SQL, params![id])
            .db_context("Failed to delete session")?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use jiff::ToSpan;

    use crate::{
        db::Database,
        error::PaceError,
        models::{Session, SessionFilter},
        ports::SessionStore,
        testing::{completed_session, ts},
    };

    fn active(id: &str, plan_id: &str) -> Session {
        Session {
            id: id.to_string(),
            plan_id: plan_id.to_string(),
            chunk_id: None,
            start_time: ts(0),
            end_time: None,
            duration_minutes: 0,
            notes: String::new(),
            artifacts: Vec::new(),
            cards_created: 0,
        }
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let mut db = Database::open_in_memory().unwrap();
        let mut session = completed_session("s1", "p", Some("c"), ts(0), 45);
        session.notes = "line one\nline two".to_string();
        session.artifacts = vec!["a.md".to_string(), "a.md".to_string()];
        session.cards_created = 3;

        db.create(&session).unwrap();
        assert_eq!(db.get("s1").unwrap(), Some(session));
        assert_eq!(db.get("missing").unwrap(), None);
    }

    #[test]
    fn test_second_active_row_is_a_conflict() {
        let mut db = Database::open_in_memory().unwrap();
        db.create(&active("first", "p")).unwrap();

        let err = db.create(&active("second", "q")).unwrap_err();
        match err {
            PaceError::Conflict {
                session_id,
                plan_id,
            } => {
                assert_eq!(session_id, "first");
                assert_eq!(plan_id, "p");
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_completed_rows_do_not_collide() {
        let mut db = Database::open_in_memory().unwrap();
        db.create(&completed_session("a", "p", None, ts(0), 10)).unwrap();
        db.create(&completed_session("b", "p", None, ts(0) + 1.hour(), 10))
            .unwrap();
        db.create(&active("c", "p")).unwrap();

        assert_eq!(db.get_active().unwrap().map(|s| s.id), Some("c".to_string()));
    }

    #[test]
    fn test_update_closes_session() {
        let mut db = Database::open_in_memory().unwrap();
        let mut session = active("s1", "p");
        db.create(&session).unwrap();

        session.complete(ts(0) + 30.minutes()).unwrap();
        session.artifacts.push("out.txt".to_string());
        db.update(&session).unwrap();

        assert!(db.get_active().unwrap().is_none());
        assert_eq!(db.get("s1").unwrap(), Some(session));
    }

    #[test]
    fn test_update_unknown_session() {
        let mut db = Database::open_in_memory().unwrap();
        let err = db.update(&active("ghost", "p")).unwrap_err();
        assert!(matches!(err, PaceError::SessionNotFound { ref id } if id == "ghost"));
    }

    #[test]
    fn test_list_filters_and_orders_newest_first() {
        let mut db = Database::open_in_memory().unwrap();
        db.create(&completed_session("old", "p", Some("c"), ts(0), 10)).unwrap();
        db.create(&completed_session("mid", "p", Some("d"), ts(3600), 10))
            .unwrap();
        db.create(&completed_session("other", "q", Some("c"), ts(7200), 10))
            .unwrap();
        let mut running = active("new", "p");
        running.chunk_id = Some("c".to_string());
        running.start_time = ts(10_800);
        db.create(&running).unwrap();

        let ids = |sessions: Vec<Session>| sessions.into_iter().map(|s| s.id).collect::<Vec<_>>();

        assert_eq!(ids(db.get_by_plan("p").unwrap()), vec!["new", "mid", "old"]);
        assert_eq!(
            ids(db.list(&SessionFilter::completed_for_chunk("p", "c")).unwrap()),
            vec!["old"]
        );
        assert_eq!(
            ids(db
                .list(&SessionFilter {
                    limit: Some(2),
                    ..Default::default()
                })
                .unwrap()),
            vec!["new", "other"]
        );
        assert_eq!(
            ids(db
                .list(&SessionFilter {
                    started_after: Some(ts(3600)),
                    completed_only: true,
                    ..Default::default()
                })
                .unwrap()),
            vec!["other", "mid"]
        );
    }

    #[test]
    fn test_delete_reports_whether_row_existed() {
        let mut db = Database::open_in_memory().unwrap();
        db.create(&active("s1", "p")).unwrap();

        assert!(db.delete("s1").unwrap());
        assert!(!db.delete("s1").unwrap());
        assert!(db.get_active().unwrap().is_none());
    }
}
