//! SQL schema for the Sazón SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per recipe. The title carries the external uniqueness invariant;
-- recipe_id is internal identity only.
CREATE TABLE IF NOT EXISTS recipes (
    recipe_id         TEXT PRIMARY KEY,
    created_at        TEXT NOT NULL,     -- ISO 8601 UTC; server-assigned
    title             TEXT NOT NULL UNIQUE,
    ingredients       TEXT NOT NULL,     -- JSON array of strings
    preparation_steps TEXT NOT NULL,     -- JSON array of strings
    author_type       TEXT NOT NULL,     -- 'VIEWER' | 'PARTICIPANT' | 'JUDGE'
    author_name       TEXT,
    season            INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS recipes_author_type_idx ON recipes(author_type);
CREATE INDEX IF NOT EXISTS recipes_season_idx      ON recipes(season);

PRAGMA user_version = 1;
";
