//! Score database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Score;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Filled by the column default at insert
    pub created_at: DateTimeUtc,
    pub user_primary_key: i32,
    pub comment: Option<String>,
    pub ndcg: f64,
    pub f1: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserPrimaryKey",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Score {
    fn from(model: Model) -> Self {
        Score {
            id: model.id,
            created_at: model.created_at,
            user_primary_key: model.user_primary_key,
            comment: model.comment,
            ndcg: model.ndcg,
            f1: model.f1,
        }
    }
}
