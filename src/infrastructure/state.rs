//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::TowerSectionRepository;
use crate::infrastructure::SeaOrmTowerSectionRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection, used directly by the health check
    db: DatabaseConnection,
    /// Tower section repository
    pub section_repo: Arc<dyn TowerSectionRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let section_repo = Arc::new(SeaOrmTowerSectionRepository::new(db.clone()));

        Self { db, section_repo }
    }
}

// Implement FromRef to allow extracting DatabaseConnection from AppState
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
