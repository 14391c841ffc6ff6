use super::{ConfigStore, PersistenceResult};
use crate::config::CourseConfig;
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

/// Single-row SQLite store for the course configuration snapshot.
pub struct SqliteConfigStore {
    connection: Mutex<Connection>,
}

impl SqliteConfigStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS course_config (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                config_json TEXT NOT NULL
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }
}

impl ConfigStore for SqliteConfigStore {
    fn save_config(&self, config: &CourseConfig) -> PersistenceResult<()> {
        super::validate_config(config)?;
        let json = serde_json::to_string(config)?;
        let mut conn = self.connection.lock().expect("sqlite mutex poisoned");
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM course_config", [])?;
        tx.execute(
            "INSERT INTO course_config (id, config_json) VALUES (1, ?1)",
            params![json],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn load_config(&self) -> PersistenceResult<Option<CourseConfig>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare("SELECT config_json FROM course_config WHERE id = 1")?;
        let json_opt: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;

        let Some(json) = json_opt else {
            return Ok(None);
        };

        let config: CourseConfig = serde_json::from_str(&json)?;
        super::validate_config(&config)?;
        Ok(Some(config))
    }
}
