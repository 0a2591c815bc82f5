use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::db::storage;
use crate::errors::AppError;
use crate::models::Staff;

const DEFAULT_STAFF: [&str; 2] = ["Staff 1", "Staff 2"];

/// Owns the staff collection. An empty shop gets two default members the
/// first time anyone touches the registry, so there is always someone to
/// assign a booking to.
pub struct StaffRegistry {
    db: Arc<Mutex<Connection>>,
}

impl StaffRegistry {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Staff>, AppError> {
        let conn = self.db.lock().unwrap();
        Ok(load_seeded(&conn)?)
    }

    pub fn add(&self, name: &str) -> Result<Staff, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("staff name must not be empty".to_string()));
        }

        let conn = self.db.lock().unwrap();
        let mut staff = load_seeded(&conn)?;
        let member = Staff::new(name);
        staff.push(member.clone());
        storage::save_collection(&conn, storage::STAFF_KEY, &staff)?;
        Ok(member)
    }

    pub fn get(&self, id: &str) -> Result<Staff, AppError> {
        let conn = self.db.lock().unwrap();
        let staff = load_seeded(&conn)?;
        staff
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("staff {id} not found")))
    }
}

fn load_seeded(conn: &Connection) -> anyhow::Result<Vec<Staff>> {
    let mut staff: Vec<Staff> = storage::load_collection(conn, storage::STAFF_KEY)?;
    if staff.is_empty() {
        staff = DEFAULT_STAFF.iter().map(|name| Staff::new(name)).collect();
        storage::save_collection(conn, storage::STAFF_KEY, &staff)?;
        tracing::info!("seeded default staff");
    }
    Ok(staff)
}
