//! Score service - submissions and leaderboard queries.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{
    rank_best_scores, sort_by_rank, LeaderboardEntry, Metric, MetricDefinition, Score,
    ScoreSubmission, User,
};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Score service trait for dependency injection.
#[async_trait]
pub trait ScoreService: Send + Sync {
    /// Record a submission and bump the owner's submission counter atomically
    async fn submit(&self, submission: ScoreSubmission) -> AppResult<Score>;

    /// Scores of an already resolved user, in insertion order or in rank order
    async fn user_scores(&self, user: &User, ranked: bool) -> AppResult<Vec<Score>>;

    /// Every score in insertion order
    async fn all_scores(&self) -> AppResult<Vec<Score>>;

    /// Each user's best score, ranked by the sort key
    async fn leaderboard(&self) -> AppResult<Vec<LeaderboardEntry>>;

    /// Metric names and labels, flagging the sort key
    fn metrics(&self) -> Vec<MetricDefinition> {
        Metric::definitions()
    }
}

/// Concrete implementation of ScoreService using Unit of Work.
pub struct ScoreManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ScoreManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ScoreService for ScoreManager<U> {
    async fn submit(&self, submission: ScoreSubmission) -> AppResult<Score> {
        submission.validate()?;

        let score = with_transaction!(self.uow, |ctx| {
            ctx.users()
                .increment_submissions(submission.user_primary_key)
                .await?;
            ctx.scores().create(submission).await
        })?;

        tracing::info!(
            score_id = score.id,
            user_primary_key = score.user_primary_key,
            ndcg = score.ndcg,
            f1 = score.f1,
            "Score recorded"
        );
        Ok(score)
    }

    async fn user_scores(&self, user: &User, ranked: bool) -> AppResult<Vec<Score>> {
        let mut scores = self.uow.scores().list_by_user(user.id).await?;
        if ranked {
            sort_by_rank(&mut scores);
        }
        Ok(scores)
    }

    async fn all_scores(&self) -> AppResult<Vec<Score>> {
        self.uow.scores().list_all().await
    }

    async fn leaderboard(&self) -> AppResult<Vec<LeaderboardEntry>> {
        let users = self.uow.users().list().await?;
        let scores = self.uow.scores().list_all().await?;
        Ok(rank_best_scores(&users, &scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::{MockScoreRepository, MockUserRepository};
    use crate::services::account_service::tests::TestUnitOfWork;
    use chrono::{Duration, TimeZone, Utc};
    use mockall::predicate::eq;

    fn user(id: i32, user_id: &str) -> User {
        User::from_stored(id, user_id.to_string(), user_id.to_string(), "hash".to_string(), false, 1)
    }

    fn score(id: i32, user: i32, ndcg: f64) -> Score {
        Score {
            id,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::seconds(id as i64),
            user_primary_key: user,
            comment: None,
            ndcg,
            f1: 0.5,
        }
    }

    #[tokio::test]
    async fn test_user_scores_insertion_order() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_user_id().never();
        let mut scores = MockScoreRepository::new();
        scores
            .expect_list_by_user()
            .with(eq(7))
            .returning(|pk| Ok(vec![score(1, pk, 0.2), score(2, pk, 0.9), score(3, pk, 0.5)]));

        let service = ScoreManager::new(Arc::new(TestUnitOfWork::new(users, scores)));
        let alice = user(7, "alice");

        let ids: Vec<i32> = service
            .user_scores(&alice, false)
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let ranked: Vec<i32> = service
            .user_scores(&alice, true)
            .await
            .unwrap()
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ranked, vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_leaderboard() {
        let mut users = MockUserRepository::new();
        users
            .expect_list()
            .returning(|| Ok(vec![user(1, "alice"), user(2, "bob")]));
        let mut scores = MockScoreRepository::new();
        scores
            .expect_list_all()
            .returning(|| Ok(vec![score(1, 1, 0.4), score(2, 2, 0.6), score(3, 1, 0.5)]));

        let service = ScoreManager::new(Arc::new(TestUnitOfWork::new(users, scores)));
        let board = service.leaderboard().await.unwrap();

        assert_eq!(board.len(), 2);
        assert_eq!(board[0].user_id, "bob");
        assert_eq!(board[1].user_id, "alice");
        assert_eq!(board[1].score.id, 3);
    }

    #[test]
    fn test_metrics_flag_sort_key() {
        let service = ScoreManager::new(Arc::new(TestUnitOfWork::new(
            MockUserRepository::new(),
            MockScoreRepository::new(),
        )));

        let sort_keys: Vec<String> = service
            .metrics()
            .into_iter()
            .filter(|m| m.sort_key)
            .map(|m| m.name)
            .collect();
        assert_eq!(sort_keys, vec![Score::SORT_KEY.name().to_string()]);
    }

    #[tokio::test]
    async fn test_submit_rejects_non_finite_before_storage() {
        let service = ScoreManager::new(Arc::new(TestUnitOfWork::new(
            MockUserRepository::new(),
            MockScoreRepository::new(),
        )));

        let result = service
            .submit(ScoreSubmission {
                user_primary_key: 1,
                comment: None,
                ndcg: f64::INFINITY,
                f1: 0.0,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
