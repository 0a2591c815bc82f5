use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::storage;
use crate::errors::AppError;
use crate::models::{parse_date, Block, TimeSlot};
use crate::services::schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAvailability {
    pub time: TimeSlot,
    pub blocked: bool,
}

/// The day's offered slots annotated with whether a block covers them.
/// Blocked slots stay in the list so callers can show them as taken.
pub fn available_slots(date: NaiveDate, blocks: &[Block]) -> Vec<SlotAvailability> {
    schedule::slots_for(date)
        .into_iter()
        .map(|time| SlotAvailability {
            time,
            blocked: slot_blocked(date, time, blocks),
        })
        .collect()
}

pub fn slot_blocked(date: NaiveDate, time: TimeSlot, blocks: &[Block]) -> bool {
    blocks.iter().any(|b| b.covers(date, time))
}

/// Owns the block collection. Blocks are identified by their position in
/// insertion order, which is how the owner's list displays them.
pub struct BlockStore {
    db: Arc<Mutex<Connection>>,
}

impl BlockStore {
    pub fn new(db: Arc<Mutex<Connection>>) -> Self {
        Self { db }
    }

    pub fn list(&self) -> Result<Vec<Block>, AppError> {
        let conn = self.db.lock().unwrap();
        Ok(storage::load_collection(&conn, storage::BLOCKS_KEY)?)
    }

    pub fn add(&self, date: &str, time: Option<&str>) -> Result<Block, AppError> {
        let date = parse_date(date).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        let time = match time {
            Some(t) if !t.trim().is_empty() => {
                Some(TimeSlot::parse(t).map_err(|e| AppError::InvalidInput(e.to_string()))?)
            }
            _ => None,
        };
        let block = Block { date, time };

        let conn = self.db.lock().unwrap();
        let mut blocks: Vec<Block> = storage::load_collection(&conn, storage::BLOCKS_KEY)?;
        blocks.push(block.clone());
        storage::save_collection(&conn, storage::BLOCKS_KEY, &blocks)?;
        Ok(block)
    }

    pub fn remove(&self, index: usize) -> Result<Block, AppError> {
        let conn = self.db.lock().unwrap();
        let mut blocks: Vec<Block> = storage::load_collection(&conn, storage::BLOCKS_KEY)?;
        if index >= blocks.len() {
            return Err(AppError::NotFound(format!("no block at index {index}")));
        }
        let removed = blocks.remove(index);
        storage::save_collection(&conn, storage::BLOCKS_KEY, &blocks)?;
        Ok(removed)
    }
}
