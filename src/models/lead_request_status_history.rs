use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lead_request_status_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lead_request_id: i32,
    pub status: String,
    pub changed_by: String,
    pub changed_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lead_request::Entity",
        from = "Column::LeadRequestId",
        to = "super::lead_request::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    LeadRequest,
}

impl Related<super::lead_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeadRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
