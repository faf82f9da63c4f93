//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod score;
pub mod user;

#[allow(unused_imports)]
pub use score::{ActiveModel as ScoreActiveModel, Entity as ScoreEntity, Model as ScoreModel};
#[allow(unused_imports)]
pub use user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
