//! Score command - Submissions and rankings.

use crate::cli::args::{ScoreAction, ScoreArgs};
use crate::config::Config;
use crate::domain::{Metric, Score, ScoreSubmission};
use crate::errors::AppResult;
use crate::services::ServiceContainer;

/// Execute the score command
pub async fn execute(args: ScoreArgs, config: Config) -> AppResult<()> {
    let services = super::connect_services(&config).await?;
    let scores = services.scores();

    match args.action {
        ScoreAction::Submit { result } => {
            let submission = ScoreSubmission::from_json(&result)?;
            let score = scores.submit(submission).await?;
            println!("Recorded score {} at {}", score.id, score.created_at);
        }
        ScoreAction::List { user_id, ranked } => {
            let user = services.accounts().get_user(&user_id).await?;
            for score in scores.user_scores(&user, ranked).await? {
                println!("{}", format_score(&score));
            }
        }
        ScoreAction::Leaderboard => {
            for entry in scores.leaderboard().await? {
                println!(
                    "{:>3}. {} ({})\t{}",
                    entry.rank,
                    entry.print_name,
                    entry.user_id,
                    format_score(&entry.score)
                );
            }
        }
    }

    Ok(())
}

fn format_score(score: &Score) -> String {
    let metrics: Vec<String> = Metric::ALL
        .into_iter()
        .map(|m| format!("{}={:.4}", m.label(), score.metric(m)))
        .collect();
    format!(
        "#{} {} {} {}",
        score.id,
        score.created_at.format("%Y-%m-%d %H:%M:%S"),
        metrics.join(" "),
        score.comment.as_deref().unwrap_or("")
    )
    .trim_end()
    .to_string()
}
