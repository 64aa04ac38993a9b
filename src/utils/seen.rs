use anyhow::Result;
use rusqlite::Connection;
use std::collections::HashSet;

use crate::db::repository::MetaRepo;

const META_KEY: &str = "seen_hints";

/// One-shot hint tracker. An explicit value passed to whoever needs it,
/// persisted under a single `app_meta` key and wiped by `setup --reset`.
#[derive(Debug, Default)]
pub struct SeenCache {
    hints: HashSet<String>,
}

impl SeenCache {
    pub fn load(conn: &Connection) -> Result<Self> {
        let hints = match MetaRepo::get(conn, META_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("discarding unreadable {} value: {}", META_KEY, e);
                HashSet::new()
            }),
            None => HashSet::new(),
        };
        Ok(SeenCache { hints })
    }

    pub fn seen(&self, hint: &str) -> bool {
        self.hints.contains(hint)
    }

    /// Record a hint as shown and persist immediately.
    pub fn mark(&mut self, conn: &Connection, hint: &str) -> Result<()> {
        if self.hints.insert(hint.to_string()) {
            let raw = serde_json::to_string(&self.hints)?;
            MetaRepo::set(conn, META_KEY, &raw)?;
        }
        Ok(())
    }

    /// Forget everything, memory and store both.
    pub fn invalidate(&mut self, conn: &Connection) -> Result<()> {
        self.hints.clear();
        MetaRepo::delete(conn, META_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().expect("tempdir");
        let conn = Connection::open(dir.path().join("pollito.db")).expect("open db");
        run_migrations(&conn).expect("migrations");
        (dir, conn)
    }

    #[test]
    fn marks_persist_across_loads() {
        let (_dir, conn) = test_db();
        let mut cache = SeenCache::load(&conn).unwrap();
        assert!(!cache.seen("dashboard"));
        cache.mark(&conn, "dashboard").unwrap();

        let cache = SeenCache::load(&conn).unwrap();
        assert!(cache.seen("dashboard"));
        assert!(!cache.seen("stats"));
    }

    #[test]
    fn invalidate_clears_store() {
        let (_dir, conn) = test_db();
        let mut cache = SeenCache::load(&conn).unwrap();
        cache.mark(&conn, "dashboard").unwrap();
        cache.invalidate(&conn).unwrap();
        assert!(!cache.seen("dashboard"));

        let cache = SeenCache::load(&conn).unwrap();
        assert!(!cache.seen("dashboard"));
    }
}
