//! Prompt construction for the strategy review.
//!
//! The template comes from the configuration and uses `{placeholder}`
//! slots; unknown placeholders are left alone so custom templates degrade
//! visibly rather than silently.

use crate::brief::Brief;

/// System prompt sent alongside every review request.
pub const REVIEW_SYSTEM_PROMPT: &str =
    "You are a digital marketing expert evaluating campaign consistency.";

/// Fill the review template from the brief and the extracted strategy text.
pub fn build(template: &str, brief: &Brief, strategy_text: &str, max_strategy_chars: usize) -> String {
    let platforms: Vec<&str> = brief
        .social_accounts
        .iter()
        .map(|a| a.platform.as_str())
        .collect();

    template
        .replace("{business_description}", &brief.business.description)
        .replace("{business_location}", &brief.business.location)
        .replace("{target_market}", &compact(&brief.target_market))
        .replace("{objectives}", &compact(&brief.objectives))
        .replace("{budget}", &format!("{}", brief.budget))
        .replace("{platforms}", &platforms.join(", "))
        .replace(
            "{strategy_text}",
            &truncate_chars(strategy_text, max_strategy_chars),
        )
}

fn compact(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "N/A".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}\n[truncated]", truncated)
}
