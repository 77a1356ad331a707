//! Repository implementations using SeaORM

pub mod tower_section_repository;

pub use tower_section_repository::SeaOrmTowerSectionRepository;
