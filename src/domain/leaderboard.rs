//! Leaderboard ordering over the designated sort key.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::{Score, User};

/// Rank order: higher sort-key value first, earlier submission wins ties.
pub fn rank_order(a: &Score, b: &Score) -> Ordering {
    b.sort_value()
        .total_cmp(&a.sort_value())
        .then_with(|| a.created_at.cmp(&b.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort scores into leaderboard rank order.
pub fn sort_by_rank(scores: &mut [Score]) {
    scores.sort_by(rank_order);
}

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    /// 1-based competition rank; equal sort-key values share a rank
    pub rank: usize,
    #[schema(example = "alice")]
    pub user_id: String,
    #[schema(example = "Alice")]
    pub print_name: String,
    pub n_submit: i32,
    /// The user's best score
    pub score: Score,
}

/// Rank every user by their best score.
///
/// Users without scores are left out, as are scores whose owner is not in
/// `users`.
pub fn rank_best_scores(users: &[User], scores: &[Score]) -> Vec<LeaderboardEntry> {
    let owners: HashMap<i32, &User> = users.iter().map(|u| (u.id, u)).collect();

    let mut best: HashMap<i32, &Score> = HashMap::new();
    for score in scores {
        if !owners.contains_key(&score.user_primary_key) {
            continue;
        }
        best.entry(score.user_primary_key)
            .and_modify(|current| {
                if rank_order(score, *current) == Ordering::Less {
                    *current = score;
                }
            })
            .or_insert(score);
    }

    let mut ranked: Vec<&Score> = best.into_values().collect();
    ranked.sort_by(|a, b| rank_order(a, b));

    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(ranked.len());
    for (position, score) in ranked.into_iter().enumerate() {
        let rank = match entries.last() {
            Some(prev) if prev.score.sort_value() == score.sort_value() => prev.rank,
            _ => position + 1,
        };
        let owner = owners[&score.user_primary_key];
        entries.push(LeaderboardEntry {
            rank,
            user_id: owner.user_id.clone(),
            print_name: owner.print_name.clone(),
            n_submit: owner.n_submit,
            score: score.clone(),
        });
    }
    entries
}
