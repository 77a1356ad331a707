use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tower_sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub part_number: String,
    /// Bottom diameter of the lowest shell
    pub bottom_diameter: f64,
    /// Top diameter of the highest shell
    pub top_diameter: f64,
    /// Sum of all shell heights
    pub length: f64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shell::Entity")]
    Shell,
}

impl Related<super::shell::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shell.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
