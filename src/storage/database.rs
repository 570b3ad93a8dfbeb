use crate::error::{AppError, Result};
use rusqlite::{Connection, ErrorCode, OpenFlags};
use std::path::Path;
use tracing::{debug, info};

pub const DEFAULT_DB_PATH: &str = "shop.db";

/// Open an existing shop database for reading and writing.
///
/// The file is never created: a missing path, an unreadable file or a file
/// that is not an SQLite database all fail here as [`AppError::Connection`].
/// A database locked by another connection fails as [`AppError::Query`].
pub fn open_database(db_path: &Path) -> Result<Connection> {
    info!("Opening database at {:?}", db_path);

    let connection_error = |source| AppError::Connection {
        path: db_path.to_path_buf(),
        source,
    };

    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(db_path, flags).map_err(connection_error)?;

    // SQLite reads the header lazily, so touch it before handing the connection out.
    // A lock held by another connection is not a connection problem.
    let schema_version: i64 = conn
        .query_row("PRAGMA schema_version", [], |row| row.get(0))
        .map_err(|e| match e.sqlite_error_code() {
            Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => AppError::Query(e),
            _ => connection_error(e),
        })?;
    debug!("Database schema version {}", schema_version);

    Ok(conn)
}

/// Run `f` against a connection that lives only for the duration of the call.
///
/// The connection is dropped when `f` fails and closed explicitly otherwise.
pub fn with_db_mut<F, T>(db_path: &Path, f: F) -> Result<T>
where
    F: FnOnce(&mut Connection) -> Result<T>,
{
    let mut conn = open_database(db_path)?;
    let value = f(&mut conn)?;

    conn.close().map_err(|(_, e)| AppError::Query(e))?;
    debug!("Database connection closed");

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.db");

        let err = open_database(&path).unwrap_err();
        assert!(matches!(err, AppError::Connection { .. }));
        assert!(!path.exists(), "Opening must not create the database file");
    }

    #[test]
    fn test_garbage_file_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.db");
        fs::write(&path, vec![b'x'; 4096]).unwrap();

        let err = open_database(&path).unwrap_err();
        assert!(matches!(err, AppError::Connection { .. }));
    }

    #[test]
    fn test_directory_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = open_database(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Connection { .. }));
    }

    #[test]
    fn test_existing_database_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER);")
            .unwrap();

        assert!(open_database(&path).is_ok());
    }

    #[test]
    fn test_with_db_mut_releases_connection_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER);")
            .unwrap();

        let result: Result<()> = with_db_mut(&path, |conn| {
            let tx = conn.transaction()?;
            tx.execute("INSERT INTO t (x) VALUES (1)", [])?;
            tx.execute("INSERT INTO nowhere (x) VALUES (1)", [])?;
            tx.commit()?;
            Ok(())
        });
        assert!(matches!(result, Err(AppError::Query(_))));

        // The failed transaction was rolled back and no lock is left behind.
        let conn = Connection::open(&path).unwrap();
        conn.execute("INSERT INTO t (x) VALUES (2)", []).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
