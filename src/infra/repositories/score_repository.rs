//! Score repository implementation.
//!
//! Scores are append-only: there is no update or delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::score::{self, ActiveModel, Entity as ScoreEntity};
use crate::domain::{Score, ScoreSubmission};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Score repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Insert a submission; `created_at` is assigned by storage
    async fn create(&self, submission: ScoreSubmission) -> AppResult<Score>;

    /// A user's scores in insertion order
    async fn list_by_user(&self, user_primary_key: i32) -> AppResult<Vec<Score>>;

    /// Every score in insertion order
    async fn list_all(&self) -> AppResult<Vec<Score>>;
}

/// Concrete implementation of ScoreRepository
pub struct ScoreStore {
    db: DatabaseConnection,
}

impl ScoreStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScoreRepository for ScoreStore {
    async fn create(&self, submission: ScoreSubmission) -> AppResult<Score> {
        create(&self.db, submission).await
    }

    async fn list_by_user(&self, user_primary_key: i32) -> AppResult<Vec<Score>> {
        list_by_user(&self.db, user_primary_key).await
    }

    async fn list_all(&self) -> AppResult<Vec<Score>> {
        list_all(&self.db).await
    }
}

pub(crate) async fn create<C: ConnectionTrait>(db: &C, submission: ScoreSubmission) -> AppResult<Score> {
    submission.validate()?;

    let owner = submission.user_primary_key;
    let active_model = ActiveModel {
        id: NotSet,
        created_at: NotSet,
        user_primary_key: Set(owner),
        comment: Set(submission.comment),
        ndcg: Set(submission.ndcg),
        f1: Set(submission.f1),
    };

    let model = active_model.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::UnknownUser(owner),
        _ => AppError::from(e),
    })?;
    Ok(Score::from(model))
}

pub(crate) async fn list_by_user<C: ConnectionTrait>(
    db: &C,
    user_primary_key: i32,
) -> AppResult<Vec<Score>> {
    let models = ScoreEntity::find()
        .filter(score::Column::UserPrimaryKey.eq(user_primary_key))
        .order_by_asc(score::Column::CreatedAt)
        .order_by_asc(score::Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Score::from).collect())
}

pub(crate) async fn list_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<Score>> {
    let models = ScoreEntity::find()
        .order_by_asc(score::Column::CreatedAt)
        .order_by_asc(score::Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Score::from).collect())
}
