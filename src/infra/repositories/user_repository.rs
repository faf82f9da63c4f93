//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, NotSet, QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by surrogate key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by login name
    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<User>>;

    /// Insert a new user; a taken `user_id` fails with `Conflict`
    async fn create(&self, user: User) -> AppResult<User>;

    /// Store a new password hash
    async fn update_password(&self, id: i32, password_hash: String) -> AppResult<User>;

    /// Grant or revoke admin access
    async fn set_admin(&self, id: i32, is_admin: bool) -> AppResult<User>;

    /// Add one to the submission counter
    async fn increment_submissions(&self, id: i32) -> AppResult<()>;

    /// List all users by surrogate key
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        find_by_id(&self.db, id).await
    }

    async fn find_by_user_id(&self, user_id: &str) -> AppResult<Option<User>> {
        find_by_user_id(&self.db, user_id).await
    }

    async fn create(&self, user: User) -> AppResult<User> {
        create(&self.db, user).await
    }

    async fn update_password(&self, id: i32, password_hash: String) -> AppResult<User> {
        update_password(&self.db, id, password_hash).await
    }

    async fn set_admin(&self, id: i32, is_admin: bool) -> AppResult<User> {
        set_admin(&self.db, id, is_admin).await
    }

    async fn increment_submissions(&self, id: i32) -> AppResult<()> {
        increment_submissions(&self.db, id).await
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        list(&self.db).await
    }
}

// Queries shared by the pooled store and the transactional repository.

pub(crate) async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<User>> {
    let result = UserEntity::find_by_id(id).one(db).await?;
    Ok(result.map(User::from))
}

pub(crate) async fn find_by_user_id<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
) -> AppResult<Option<User>> {
    let result = UserEntity::find()
        .filter(user::Column::UserId.eq(user_id))
        .one(db)
        .await?;
    Ok(result.map(User::from))
}

pub(crate) async fn create<C: ConnectionTrait>(db: &C, user: User) -> AppResult<User> {
    let entity = format!("User '{}'", user.user_id);
    let active_model = ActiveModel {
        id: NotSet,
        password: Set(user.password_hash().to_string()),
        user_id: Set(user.user_id),
        print_name: Set(user.print_name),
        is_admin: Set(user.is_admin),
        n_submit: Set(user.n_submit),
    };

    let model = active_model
        .insert(db)
        .await
        .map_err(|e| AppError::from_db(e, entity))?;
    Ok(User::from(model))
}

pub(crate) async fn update_password<C: ConnectionTrait>(
    db: &C,
    id: i32,
    password_hash: String,
) -> AppResult<User> {
    let user = UserEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = user.into();
    active.password = Set(password_hash);

    let model = active.update(db).await?;
    Ok(User::from(model))
}

pub(crate) async fn set_admin<C: ConnectionTrait>(db: &C, id: i32, is_admin: bool) -> AppResult<User> {
    let user = UserEntity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = user.into();
    active.is_admin = Set(is_admin);

    let model = active.update(db).await?;
    Ok(User::from(model))
}

pub(crate) async fn increment_submissions<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<()> {
    let result = UserEntity::update_many()
        .col_expr(
            user::Column::NSubmit,
            Expr::col(user::Column::NSubmit).add(1),
        )
        .filter(user::Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::UnknownUser(id));
    }
    Ok(())
}

pub(crate) async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<User>> {
    let models = UserEntity::find()
        .order_by_asc(user::Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(User::from).collect())
}
