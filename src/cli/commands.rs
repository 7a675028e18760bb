use anyhow::{bail, Result};
use chrono::{DateTime, Local, TimeZone, Utc};
use clap::{Parser, Subcommand};

use crate::client::PredictionClient;
use crate::history::{FileHistoryStore, HistoryStore};
use crate::samples::{self, SampleKind};
use crate::session::{SessionController, SessionState};

#[derive(Parser)]
#[command(name = "scam-shield")]
#[command(version = "0.1.0")]
#[command(about = "Check emails, SMS, and job postings for advance-fee fraud", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a message and record the verdict to the check history
    Analyze {
        /// The message text to analyze
        text: Option<String>,
        /// Analyze a bundled example instead (1-based, see `examples`)
        #[arg(long, value_name = "N", conflicts_with = "text")]
        example: Option<usize>,
    },
    /// List past checks, newest first
    History,
    /// Remove all stored history
    Clear,
    /// Probe the prediction service for liveness
    Health,
    /// Show the bundled example messages
    Examples,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Analyze { text, example }) => {
            analyze(text.as_deref(), *example).await?;
        }
        Some(Commands::History) => {
            show_history()?;
        }
        Some(Commands::Clear) => {
            clear_history()?;
        }
        Some(Commands::Health) => {
            check_health().await?;
        }
        Some(Commands::Examples) => {
            show_examples();
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

async fn analyze(text: Option<&str>, example: Option<usize>) -> Result<()> {
    let input = match (text, example) {
        (Some(text), _) => text.to_string(),
        (None, Some(n)) => match samples::get(n) {
            Some(sample) => sample.text.to_string(),
            None => bail!("No example #{n}. Run `scam-shield examples` to see what's bundled."),
        },
        (None, None) => bail!("Provide a message to analyze, or --example <N>."),
    };

    let client = PredictionClient::from_env()?;
    let store = FileHistoryStore::from_env()?;
    let mut session = SessionController::new(client, store);

    session.submit(&input).await;

    match session.state() {
        SessionState::Result(check) => {
            println!("Verdict: {}", check.label);
            println!("Confidence: {:.1}%", check.confidence * 100.0);
            println!();
            println!("Recorded to check history.");
            Ok(())
        }
        SessionState::Failed(failure) => {
            if failure.connection_alert {
                eprintln!("Connection Error: the fraud detection API is not reachable.");
            }
            bail!("{}", failure.message);
        }
        other => bail!("analyze ended in unexpected state: {other:?}"),
    }
}

fn show_history() -> Result<()> {
    let store = FileHistoryStore::from_env()?;
    let items = store.list();

    println!("Check History");
    println!("================================");

    if items.is_empty() {
        println!("No checks yet. Try analyzing a message!");
        return Ok(());
    }

    let now = Utc::now().timestamp_millis();
    for item in &items {
        println!(
            "[{}] {:.1}%  {}  {}",
            item.label,
            item.confidence * 100.0,
            format_relative_time(item.timestamp, now),
            truncate_text(&item.text, 50)
        );
    }
    println!();
    println!("{} of {} slots used", items.len(), crate::history::HISTORY_CAPACITY);

    Ok(())
}

fn clear_history() -> Result<()> {
    let store = FileHistoryStore::from_env()?;
    store.clear();
    println!("Check history cleared.");
    Ok(())
}

async fn check_health() -> Result<()> {
    let client = PredictionClient::from_env()?;
    match client.check_health().await {
        Ok(health) => {
            println!("Service: {}", client.base_url());
            println!("Status: {}", health.status);
            println!("Model loaded: {}", health.model_loaded);
            Ok(())
        }
        Err(err) => bail!("{}", err.user_message()),
    }
}

fn show_examples() {
    println!("Bundled example messages");
    println!("================================");
    for (i, sample) in samples::EXAMPLES.iter().enumerate() {
        let kind = match sample.kind {
            SampleKind::Scam => "scam",
            SampleKind::Legitimate => "legitimate",
        };
        println!("{}. {} ({})", i + 1, sample.title, kind);
    }
    println!();
    println!("Run `scam-shield analyze --example <N>` to check one.");
}

/// Compact "how long ago" rendering for history rows.
fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff_ms = now_ms.saturating_sub(timestamp_ms);
    let mins = diff_ms / 60_000;
    let hours = diff_ms / 3_600_000;
    let days = diff_ms / 86_400_000;

    if mins < 1 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else {
        let date: DateTime<Local> = match Utc.timestamp_millis_opt(timestamp_ms).single() {
            Some(ts) => ts.into(),
            None => return "unknown".to_string(),
        };
        date.format("%Y-%m-%d").to_string()
    }
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let truncated: String = flattened.chars().take(max_chars).collect();
    format!("{}...", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_time_buckets() {
        let now = 1_700_000_000_000;
        assert_eq!(format_relative_time(now - 30_000, now), "just now");
        assert_eq!(format_relative_time(now - 5 * 60_000, now), "5m ago");
        assert_eq!(format_relative_time(now - 3 * 3_600_000, now), "3h ago");
        assert_eq!(format_relative_time(now - 2 * 86_400_000, now), "2d ago");
        // A week or more falls back to a date
        let old = format_relative_time(now - 10 * 86_400_000, now);
        assert!(old.contains('-'), "expected a date, got: {old}");
    }

    #[test]
    fn truncation_flattens_newlines_and_appends_ellipsis() {
        let text = "Dear Friend,\n\nI am Prince Abubakar from Nigeria. My late father, the King";
        let preview = truncate_text(text, 50);
        assert!(preview.starts_with("Dear Friend, I am Prince Abubakar"));
        assert!(preview.ends_with("..."));
        assert!(preview.chars().count() <= 53);
    }

    #[test]
    fn short_text_is_untouched_apart_from_whitespace() {
        assert_eq!(truncate_text("hello  world", 50), "hello world");
    }
}
