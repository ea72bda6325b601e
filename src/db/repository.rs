use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::Theme;

/// Key holding every daily entry as one JSON document.
pub const ENTRIES_KEY: &str = "ramadan_tracker_v1";
pub const THEME_KEY: &str = "ramadan_theme";

// ─── App meta ────────────────────────────────────────────────────────────────

pub struct MetaRepo;

impl MetaRepo {
    pub fn get(conn: &Connection, key: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT value FROM app_meta WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .map(Option::flatten)
        .map_err(anyhow::Error::from)
    }

    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO app_meta (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        Ok(())
    }
}

// ─── Theme ───────────────────────────────────────────────────────────────────

pub struct ThemeRepo;

impl ThemeRepo {
    /// Stored theme, light when unset or unreadable.
    pub fn load(conn: &Connection) -> Theme {
        match MetaRepo::get(conn, THEME_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("Could not read theme: {}", e);
                Theme::default()
            }
        }
    }

    pub fn save(conn: &Connection, theme: Theme) -> Result<()> {
        MetaRepo::set(conn, THEME_KEY, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_meta_roundtrip_and_overwrite() {
        let conn = conn();
        assert_eq!(MetaRepo::get(&conn, "k").unwrap(), None);
        MetaRepo::set(&conn, "k", "one").unwrap();
        MetaRepo::set(&conn, "k", "two").unwrap();
        assert_eq!(MetaRepo::get(&conn, "k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_theme_defaults_to_light() {
        let conn = conn();
        assert_eq!(ThemeRepo::load(&conn), Theme::Light);
        MetaRepo::set(&conn, THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemeRepo::load(&conn), Theme::Light);
        ThemeRepo::save(&conn, Theme::Dark).unwrap();
        assert_eq!(ThemeRepo::load(&conn), Theme::Dark);
    }
}
