//! SeaORM implementation of TowerSectionRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    LoaderTrait, ModelTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};

use crate::domain::{
    DiameterRange, DomainError, NewShell, SectionDraft, TowerSection, TowerSectionRepository,
    ValidationError,
};
use crate::models::shell::{self, Entity as ShellEntity};
use crate::models::tower_section::{self, Entity as SectionEntity};

/// SeaORM-based implementation of TowerSectionRepository
pub struct SeaOrmTowerSectionRepository {
    db: DatabaseConnection,
}

impl SeaOrmTowerSectionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_shells(
        &self,
        sections: Vec<tower_section::Model>,
    ) -> Result<Vec<TowerSection>, DomainError> {
        let shells = sections.load_many(ShellEntity, &self.db).await?;

        Ok(sections
            .into_iter()
            .zip(shells)
            .map(|(section, shells)| TowerSection::from_models(section, shells))
            .collect())
    }
}

/// Unique-key violations on the section row mean the part number is taken
fn map_write_error(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ValidationError::DuplicatePartNumber.into(),
        _ => e.into(),
    }
}

async fn insert_shells<C: ConnectionTrait>(
    conn: &C,
    section_id: i32,
    shells: Vec<NewShell>,
) -> Result<Vec<shell::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(shells.len());
    for input in shells {
        let model = shell::ActiveModel {
            section_id: Set(section_id),
            position: Set(input.position),
            height: Set(input.height),
            bottom_diameter: Set(input.bottom_diameter),
            top_diameter: Set(input.top_diameter),
            thickness: Set(input.thickness),
            density: Set(input.density),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        inserted.push(model);
    }
    Ok(inserted)
}

#[async_trait]
impl TowerSectionRepository for SeaOrmTowerSectionRepository {
    async fn find_all(&self) -> Result<Vec<TowerSection>, DomainError> {
        let sections = SectionEntity::find()
            .order_by_asc(tower_section::Column::Id)
            .all(&self.db)
            .await?;

        self.with_shells(sections).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<TowerSection>, DomainError> {
        let Some(section) = SectionEntity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let shells = section
            .find_related(ShellEntity)
            .order_by_asc(shell::Column::Position)
            .all(&self.db)
            .await?;

        Ok(Some(TowerSection::from_models(section, shells)))
    }

    async fn find_by_part_number(
        &self,
        part_number: &str,
    ) -> Result<Option<TowerSection>, DomainError> {
        let Some(section) = SectionEntity::find()
            .filter(tower_section::Column::PartNumber.eq(part_number))
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let shells = section
            .find_related(ShellEntity)
            .order_by_asc(shell::Column::Position)
            .all(&self.db)
            .await?;

        Ok(Some(TowerSection::from_models(section, shells)))
    }

    async fn find_by_diameter_range(
        &self,
        range: DiameterRange,
    ) -> Result<Vec<TowerSection>, DomainError> {
        let mut query = SectionEntity::find();

        if let Some(min) = range.min {
            query = query
                .filter(tower_section::Column::BottomDiameter.gte(min))
                .filter(tower_section::Column::TopDiameter.gte(min));
        }
        if let Some(max) = range.max {
            query = query
                .filter(tower_section::Column::BottomDiameter.lte(max))
                .filter(tower_section::Column::TopDiameter.lte(max));
        }

        let sections = query
            .order_by_asc(tower_section::Column::Id)
            .all(&self.db)
            .await?;

        self.with_shells(sections).await
    }

    async fn create(&self, draft: SectionDraft) -> Result<TowerSection, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();
        let txn = self.db.begin().await?;

        let section = tower_section::ActiveModel {
            part_number: Set(draft.part_number),
            bottom_diameter: Set(draft.geometry.bottom_diameter),
            top_diameter: Set(draft.geometry.top_diameter),
            length: Set(draft.geometry.length),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(map_write_error)?;

        let shells = insert_shells(&txn, section.id, draft.shells).await?;
        txn.commit().await?;

        Ok(TowerSection::from_models(section, shells))
    }

    async fn replace(&self, id: i32, draft: SectionDraft) -> Result<TowerSection, DomainError> {
        let txn = self.db.begin().await?;

        let existing = SectionEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: tower_section::ActiveModel = existing.into();
        active.part_number = Set(draft.part_number);
        active.bottom_diameter = Set(draft.geometry.bottom_diameter);
        active.top_diameter = Set(draft.geometry.top_diameter);
        active.length = Set(draft.geometry.length);
        active.updated_at = Set(chrono::Utc::now().to_rfc3339());

        let section = active.update(&txn).await.map_err(map_write_error)?;

        ShellEntity::delete_many()
            .filter(shell::Column::SectionId.eq(id))
            .exec(&txn)
            .await?;
        let shells = insert_shells(&txn, id, draft.shells).await?;

        txn.commit().await?;

        Ok(TowerSection::from_models(section, shells))
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;

        ShellEntity::delete_many()
            .filter(shell::Column::SectionId.eq(id))
            .exec(&txn)
            .await?;
        let result = SectionEntity::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            // Dropping the transaction rolls it back
            return Err(DomainError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}
