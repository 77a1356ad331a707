use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shells")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub section_id: i32,
    /// 1-based position within the owning section, counted from the bottom
    pub position: i32,
    pub height: f64,
    pub bottom_diameter: f64,
    pub top_diameter: f64,
    pub thickness: f64,
    pub density: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tower_section::Entity",
        from = "Column::SectionId",
        to = "super::tower_section::Column::Id",
        on_delete = "Cascade"
    )]
    TowerSection,
}

impl Related<super::tower_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TowerSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
