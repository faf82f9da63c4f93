//! Migration: Create scores table, owned by users.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scores::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Server-assigned; the application never writes it
                    .col(
                        ColumnDef::new(Scores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Scores::UserPrimaryKey).integer().not_null())
                    .col(ColumnDef::new(Scores::Comment).string_len(256).null())
                    .col(ColumnDef::new(Scores::Ndcg).double().not_null())
                    .col(ColumnDef::new(Scores::F1).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scores_user_primary_key")
                            .from(Scores::Table, Scores::UserPrimaryKey)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scores_user_primary_key")
                    .table(Scores::Table)
                    .col(Scores::UserPrimaryKey)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_scores_user_primary_key")
                    .table(Scores::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Scores::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Scores {
    Table,
    Id,
    CreatedAt,
    UserPrimaryKey,
    Comment,
    Ndcg,
    F1,
}
