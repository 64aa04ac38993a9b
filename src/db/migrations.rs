use anyhow::Result;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch("
        CREATE TABLE IF NOT EXISTS game_log (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            game       TEXT NOT NULL CHECK(game IN ('quiz','memory','foodsort','plate')),
            date       TEXT NOT NULL,
            correct    INTEGER NOT NULL,
            total      INTEGER NOT NULL,
            time_bonus INTEGER NOT NULL DEFAULT 0,
            score      INTEGER NOT NULL,
            perfect    INTEGER NOT NULL DEFAULT 0,
            created_at TEXT DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_game_log_date ON game_log(date);

        CREATE TABLE IF NOT EXISTS pet (
            id             INTEGER PRIMARY KEY CHECK(id = 1),
            happiness      INTEGER NOT NULL DEFAULT 0
                           CHECK(happiness BETWEEN 0 AND 100),
            current_streak INTEGER NOT NULL DEFAULT 0,
            longest_streak INTEGER NOT NULL DEFAULT 0,
            last_fed_date  TEXT
        );

        CREATE TABLE IF NOT EXISTS app_meta (
            key   TEXT PRIMARY KEY,
            value TEXT
        );
    ")?;

    seed_pet_row(conn)?;
    Ok(())
}

/// The pet is a singleton row; create it once so reads never miss.
fn seed_pet_row(conn: &Connection) -> Result<()> {
    conn.execute("INSERT OR IGNORE INTO pet (id) VALUES (1)", [])?;
    Ok(())
}
