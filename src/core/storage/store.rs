//! SQLite-backed resource store.
//!
//! Owns the `resources` table. Each operation opens its own connection
//! and runs in autocommit mode (or one explicit transaction for
//! multi-statement operations), so every mutation is on disk before the
//! call returns.

use crate::core::error::{KeylinkError, Result};
use crate::core::types::{KeywordUsage, MatchCase, ResourceMatch, ResourceRecord, SeedEntry};
use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS resources (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    keyword  TEXT UNIQUE NOT NULL,
    url      TEXT NOT NULL,
    count    INTEGER NOT NULL DEFAULT 0,
    tag      TEXT NOT NULL DEFAULT ''
)";

/// Persistent keyword → (locator, usage count, tag) mapping
#[derive(Debug, Clone)]
pub struct ResourceStore {
    db_path: PathBuf,
}

impl ResourceStore {
    /// Open (or create) the store at `db_path`.
    ///
    /// Creates the parent directory and the table when missing. Existing
    /// rows are left alone; call [`reset`](Self::reset) to reseed.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                KeylinkError::StorageUnavailable(format!(
                    "cannot create {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let store = Self { db_path };
        store.connect()?.execute(CREATE_TABLE, [])?;
        Ok(store)
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path).map_err(|e| {
            KeylinkError::StorageUnavailable(format!(
                "cannot open {}: {e}",
                self.db_path.display()
            ))
        })
    }

    /// Drop every record and reinsert the seed list.
    ///
    /// Later duplicates of a keyword inside `seed` are skipped. Runs in a
    /// single transaction: on failure the previous table survives.
    /// Returns the number of records inserted.
    pub fn reset(&self, seed: &[SeedEntry]) -> Result<usize> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        tx.execute("DROP TABLE IF EXISTS resources", [])?;
        tx.execute(CREATE_TABLE, [])?;

        let mut inserted = 0;
        {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO resources (keyword, url) VALUES (?1, ?2)")?;
            for entry in seed {
                inserted += stmt.execute(params![entry.keyword, entry.locator])?;
            }
        }
        tx.commit()?;

        tracing::info!(
            "Reseeded resource store with {} record(s) ({} skipped as duplicates)",
            inserted,
            seed.len() - inserted
        );
        Ok(inserted)
    }

    /// Insert a new record with a zero count and no tag.
    ///
    /// Fails with `DuplicateKeyword` when the keyword exists; the
    /// existing record is untouched.
    pub fn insert(&self, keyword: &str, locator: &str) -> Result<()> {
        if keyword.trim().is_empty() {
            return Err(KeylinkError::InvalidInput(
                "keyword cannot be empty".to_string(),
            ));
        }
        if locator.trim().is_empty() {
            return Err(KeylinkError::InvalidInput(
                "locator cannot be empty".to_string(),
            ));
        }

        let changed = self.connect()?.execute(
            "INSERT INTO resources (keyword, url) VALUES (?1, ?2)
             ON CONFLICT(keyword) DO NOTHING",
            params![keyword, locator],
        )?;

        if changed == 0 {
            return Err(KeylinkError::DuplicateKeyword(keyword.to_string()));
        }

        tracing::debug!("Inserted keyword '{}'", keyword);
        Ok(())
    }

    /// Delete a record; returns how many rows were removed (0 or 1)
    pub fn remove(&self, keyword: &str) -> Result<usize> {
        let removed = self
            .connect()?
            .execute("DELETE FROM resources WHERE keyword = ?1", params![keyword])?;
        tracing::debug!("Removed {} record(s) for '{}'", removed, keyword);
        Ok(removed)
    }

    /// Add one to the usage count; no-op for an unknown keyword
    pub fn increment_count(&self, keyword: &str) -> Result<()> {
        self.connect()?.execute(
            "UPDATE resources SET count = count + 1 WHERE keyword = ?1",
            params![keyword],
        )?;
        Ok(())
    }

    /// Set the tag on a record; false when the keyword is unknown
    pub fn set_tag(&self, keyword: &str, tag: &str) -> Result<bool> {
        let changed = self.connect()?.execute(
            "UPDATE resources SET tag = ?1 WHERE keyword = ?2",
            params![tag, keyword],
        )?;
        Ok(changed > 0)
    }

    /// Fetch a single record
    pub fn get(&self, keyword: &str) -> Result<Option<ResourceRecord>> {
        let conn = self.connect()?;
        let record = conn
            .query_row(
                "SELECT keyword, url, count, tag FROM resources WHERE keyword = ?1",
                params![keyword],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// All records in insertion order
    pub fn list_all(&self) -> Result<Vec<ResourceRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT keyword, url, count, tag FROM resources ORDER BY id")?;
        let rows = stmt.query_map([], row_to_record)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Number of records
    pub fn count(&self) -> Result<usize> {
        let conn = self.connect()?;
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM resources", [], |row| row.get(0))?;
        Ok(n as usize)
    }

    /// Records whose keyword contains `query`.
    ///
    /// `%`, `_` and `\` in the query are literal characters. Case
    /// sensitivity follows `case`: `Sensitive` uses `instr`, while
    /// `Insensitive` uses SQLite `LIKE` (ASCII case folding).
    pub fn find_by_substring(&self, query: &str, case: MatchCase) -> Result<Vec<ResourceMatch>> {
        let conn = self.connect()?;
        select_substring(&conn, query, case)
    }

    /// Substring match plus one usage count per matched keyword.
    ///
    /// The select and every count update share one transaction: if any
    /// update fails, no count changes.
    pub fn find_and_count(&self, query: &str, case: MatchCase) -> Result<Vec<ResourceMatch>> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let matches = select_substring(&tx, query, case)?;
        {
            let mut stmt =
                tx.prepare("UPDATE resources SET count = count + 1 WHERE keyword = ?1")?;
            for m in &matches {
                stmt.execute(params![m.keyword])?;
            }
        }
        tx.commit()?;

        Ok(matches)
    }

    /// Records with exactly this tag
    pub fn find_by_tag(&self, tag: &str) -> Result<Vec<ResourceMatch>> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT keyword, url FROM resources WHERE tag = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![tag], row_to_match)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Up to `n` keywords by descending usage count, ties in insertion order
    pub fn top_by_count(&self, n: usize) -> Result<Vec<KeywordUsage>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT keyword, count FROM resources ORDER BY count DESC, id ASC LIMIT ?1",
        )?;
        let limit = i64::try_from(n).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], |row| {
            Ok(KeywordUsage {
                keyword: row.get(0)?,
                usage_count: row.get::<_, i64>(1)?.max(0) as u64,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Every keyword in insertion order (suggestion universe)
    pub fn all_keywords(&self) -> Result<Vec<String>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT keyword FROM resources ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

fn select_substring(
    conn: &Connection,
    query: &str,
    case: MatchCase,
) -> Result<Vec<ResourceMatch>> {
    let (sql, param) = match case {
        MatchCase::Sensitive => (
            "SELECT keyword, url FROM resources WHERE instr(keyword, ?1) > 0 ORDER BY id",
            query.to_string(),
        ),
        MatchCase::Insensitive => (
            "SELECT keyword, url FROM resources WHERE keyword LIKE ?1 ESCAPE '\\' ORDER BY id",
            format!("%{}%", escape_like(query)),
        ),
    };

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params![param], row_to_match)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<ResourceRecord> {
    Ok(ResourceRecord {
        keyword: row.get(0)?,
        locator: row.get(1)?,
        usage_count: row.get::<_, i64>(2)?.max(0) as u64,
        tag: row.get(3)?,
    })
}

fn row_to_match(row: &rusqlite::Row<'_>) -> rusqlite::Result<ResourceMatch> {
    Ok(ResourceMatch {
        keyword: row.get(0)?,
        locator: row.get(1)?,
    })
}

/// Escape `LIKE` metacharacters so the pattern matches literally
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
