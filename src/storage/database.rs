use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, Row};
use tracing::{debug, info};

use super::traits::CatalogStore;
use crate::domain::{Brand, BrandStatus, Founder};
use crate::error::Result;

const SCHEMA: &str = r#"
PRAGMA journal_mode=WAL;
CREATE TABLE IF NOT EXISTS brands (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    name         TEXT NOT NULL,
    logo         TEXT,
    hero_image   TEXT,
    one_liner    TEXT NOT NULL DEFAULT '',
    description  TEXT NOT NULL,
    launch_date  TEXT,
    status       TEXT NOT NULL CHECK (status IN ('ideation', 'manufacturing', 'revenue')),
    website_url  TEXT,
    sort_order   INTEGER NOT NULL DEFAULT 0 CHECK (sort_order >= 0)
);
CREATE TABLE IF NOT EXISTS founders (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT NOT NULL,
    role          TEXT NOT NULL,
    photo         TEXT,
    bio           TEXT NOT NULL,
    vision_quote  TEXT,
    linkedin_url  TEXT,
    twitter_url   TEXT,
    sort_order    INTEGER NOT NULL DEFAULT 0 CHECK (sort_order >= 0)
);
"#;

/// SQLite-backed catalog store.
pub struct SqliteCatalog {
    conn: Mutex<Connection>,
}

impl SqliteCatalog {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another thread panicked mid-query;
        // the connection itself is still usable.
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn row_to_brand(row: &Row) -> rusqlite::Result<Brand> {
    let status_text: String = row.get(7)?;
    let status = status_text.parse::<BrandStatus>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Brand {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        logo: row.get(2)?,
        hero_image: row.get(3)?,
        one_liner: row.get(4)?,
        description: row.get(5)?,
        launch_date: row.get(6)?,
        status,
        website_url: row.get(8)?,
        sort_order: row.get(9)?,
    })
}

fn row_to_founder(row: &Row) -> rusqlite::Result<Founder> {
    Ok(Founder {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        role: row.get(2)?,
        photo: row.get(3)?,
        bio: row.get(4)?,
        vision_quote: row.get(5)?,
        linkedin_url: row.get(6)?,
        twitter_url: row.get(7)?,
        sort_order: row.get(8)?,
    })
}

const BRAND_COLUMNS: &str =
    "id, name, logo, hero_image, one_liner, description, launch_date, status, website_url, sort_order";
const FOUNDER_COLUMNS: &str =
    "id, name, role, photo, bio, vision_quote, linkedin_url, twitter_url, sort_order";

impl CatalogStore for SqliteCatalog {
    fn create_brand(&self, brand: &mut Brand) -> Result<()> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO brands (name, logo, hero_image, one_liner, description, launch_date, status, website_url, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                brand.name,
                brand.logo,
                brand.hero_image,
                brand.one_liner,
                brand.description,
                brand.launch_date,
                brand.status.as_str(),
                brand.website_url,
                brand.sort_order,
            ],
        )?;
        let id = conn.last_insert_rowid();
        brand.id = Some(id);
        info!("Created brand: {} with id {}", brand.name, id);
        Ok(())
    }

    fn get_brand_by_id(&self, id: i64) -> Result<Option<Brand>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare(&format!("SELECT {BRAND_COLUMNS} FROM brands WHERE id = ?1"))?;
        let mut rows = stmt.query_map(params![id], row_to_brand)?;
        rows.next().transpose().map_err(Into::into)
    }

    fn get_all_brands(&self) -> Result<Vec<Brand>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {BRAND_COLUMNS} FROM brands ORDER BY sort_order ASC, id ASC"
        ))?;
        let brands = stmt
            .query_map([], row_to_brand)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(brands)
    }

    fn delete_brand(&self, id: i64) -> Result<Option<Brand>> {
        let brand = self.get_brand_by_id(id)?;
        if brand.is_some() {
            self.conn().execute("DELETE FROM brands WHERE id = ?1", params![id])?;
            debug!(id, "deleted brand");
        }
        Ok(brand)
    }

    fn clear_brands(&self) -> Result<Vec<Brand>> {
        let removed = self.get_all_brands()?;
        self.conn().execute("DELETE FROM brands", [])?;
        debug!(count = removed.len(), "cleared brands");
        Ok(removed)
    }

    fn create_founder(&self, founder: &mut Founder) -> Result<()> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO founders (name, role, photo, bio, vision_quote, linkedin_url, twitter_url, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                founder.name,
                founder.role,
                founder.photo,
                founder.bio,
                founder.vision_quote,
                founder.linkedin_url,
                founder.twitter_url,
                founder.sort_order,
            ],
        )?;
        let id = conn.last_insert_rowid();
        founder.id = Some(id);
        info!("Created founder: {} with id {}", founder.name, id);
        Ok(())
    }

    fn get_founder_by_id(&self, id: i64) -> Result<Option<Founder>> {
        let conn = self.conn();
        let mut stmt =
            conn.prepare(&format!("SELECT {FOUNDER_COLUMNS} FROM founders WHERE id = ?1"))?;
        let mut rows = stmt.query_map(params![id], row_to_founder)?;
        rows.next().transpose().map_err(Into::into)
    }

    fn get_all_founders(&self) -> Result<Vec<Founder>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {FOUNDER_COLUMNS} FROM founders ORDER BY sort_order ASC, id ASC"
        ))?;
        let founders = stmt
            .query_map([], row_to_founder)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(founders)
    }

    fn delete_founder(&self, id: i64) -> Result<Option<Founder>> {
        let founder = self.get_founder_by_id(id)?;
        if founder.is_some() {
            self.conn().execute("DELETE FROM founders WHERE id = ?1", params![id])?;
            debug!(id, "deleted founder");
        }
        Ok(founder)
    }

    fn clear_founders(&self) -> Result<Vec<Founder>> {
        let removed = self.get_all_founders()?;
        self.conn().execute("DELETE FROM founders", [])?;
        debug!(count = removed.len(), "cleared founders");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn brand(name: &str, sort_order: u32) -> Brand {
        Brand {
            id: None,
            name: name.to_string(),
            logo: None,
            hero_image: None,
            one_liner: "one liner".to_string(),
            description: "description".to_string(),
            launch_date: NaiveDate::from_ymd_opt(2024, 6, 15),
            status: BrandStatus::Ideation,
            website_url: None,
            sort_order,
        }
    }

    fn founder(name: &str, sort_order: u32) -> Founder {
        Founder {
            id: None,
            name: name.to_string(),
            role: "CEO".to_string(),
            photo: None,
            bio: "bio".to_string(),
            vision_quote: None,
            linkedin_url: None,
            twitter_url: None,
            sort_order,
        }
    }

    #[test]
    fn create_assigns_id_and_round_trips() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        let mut b = brand("Lumina", 1);
        store.create_brand(&mut b).unwrap();
        let id = b.id.unwrap();

        let fetched = store.get_brand_by_id(id).unwrap().unwrap();
        assert_eq!(fetched.name, "Lumina");
        assert_eq!(fetched.status, BrandStatus::Ideation);
        assert_eq!(fetched.launch_date, NaiveDate::from_ymd_opt(2024, 6, 15));
        assert!(store.get_brand_by_id(id + 1).unwrap().is_none());
    }

    #[test]
    fn listing_sorts_by_order_then_insertion() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        store.create_brand(&mut brand("third", 5)).unwrap();
        store.create_brand(&mut brand("first", 1)).unwrap();
        // Same sort_order as "third" but inserted later
        store.create_brand(&mut brand("fourth", 5)).unwrap();
        store.create_brand(&mut brand("second", 2)).unwrap();

        let names: Vec<String> = store
            .get_all_brands()
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["first", "second", "third", "fourth"]);
    }

    #[test]
    fn clear_returns_removed_records() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        store.create_founder(&mut founder("Alex V.", 1)).unwrap();
        store.create_founder(&mut founder("Sarah J.", 2)).unwrap();

        let removed = store.clear_founders().unwrap();
        assert_eq!(removed.len(), 2);
        assert!(store.get_all_founders().unwrap().is_empty());
    }

    #[test]
    fn delete_returns_record_and_removes_row() {
        let store = SqliteCatalog::open_in_memory().unwrap();
        let mut b = brand("Nova Sleep", 5);
        store.create_brand(&mut b).unwrap();
        let id = b.id.unwrap();

        let removed = store.delete_brand(id).unwrap().unwrap();
        assert_eq!(removed.name, "Nova Sleep");
        assert!(store.get_brand_by_id(id).unwrap().is_none());
        assert!(store.delete_brand(id).unwrap().is_none());
    }
}
