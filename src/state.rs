use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::config::AppConfig;
use crate::services::availability::BlockStore;
use crate::services::booking::BookingStore;
use crate::services::clock::Clock;
use crate::services::staff::StaffRegistry;

pub struct AppState {
    pub bookings: BookingStore,
    pub blocks: BlockStore,
    pub staff: StaffRegistry,
    pub config: AppConfig,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db: Arc<Mutex<Connection>>, config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            bookings: BookingStore::new(Arc::clone(&db), Arc::clone(&clock)),
            blocks: BlockStore::new(Arc::clone(&db)),
            staff: StaffRegistry::new(db),
            config,
            clock,
        }
    }
}
