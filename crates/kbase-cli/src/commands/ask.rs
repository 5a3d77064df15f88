use std::sync::Arc;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use kbase_application::ChatStore;
use kbase_core::config::RootConfig;
use kbase_core::{Message, ResponsePolicy};
use kbase_infrastructure::{ConfigService, LogTarget, init_logging};
use kbase_interaction::{FixedResponsePolicy, MockAnsweringService, RandomResponsePolicy};

/// Answers one query through the chat store.
///
/// # Arguments
///
/// * `query` - Question text
/// * `json` - Print the assistant message as JSON instead of text
/// * `instant` - Use a zero-latency, never-failing policy
///
/// # Errors
///
/// Fails when the query is blank or the knowledge base request fails.
pub async fn run(query: &str, json: bool, instant: bool) -> Result<()> {
    if query.trim().is_empty() {
        bail!("Query must not be empty");
    }

    let config = ConfigService::new()
        .and_then(|service| service.get_config())
        .context("Failed to load configuration")?;
    init_logging(&config.logging.level, LogTarget::Stderr)
        .context("Failed to initialize logging")?;

    let store = ChatStore::new(Arc::new(MockAnsweringService::new(policy(&config, instant))));
    let answer = match store.send_message(query).await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("Ask failed: {}", e);
            let display = store.error().await.unwrap_or_else(|| e.to_string());
            bail!(display);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        print!("{}", format_answer(&answer));
    }
    Ok(())
}

fn policy(config: &RootConfig, instant: bool) -> Arc<dyn ResponsePolicy> {
    if instant {
        Arc::new(FixedResponsePolicy::instant())
    } else {
        Arc::new(RandomResponsePolicy::from_settings(&config.service))
    }
}

/// Plain-text rendering: the answer, then one line per reference.
fn format_answer(answer: &Message) -> String {
    let mut out = format!("{}\n", answer.content());
    if !answer.citations().is_empty() {
        out.push_str(&format!("\n{}\n", "References:".bold()));
        for (i, citation) in answer.citations().iter().enumerate() {
            out.push_str(&format!(
                "  [{}] p.{} {} ({})\n",
                i + 1,
                citation.page,
                citation.title,
                citation.document_id
            ));
        }
    }
    out
}
