//! Campaign brief model and normalization.
//!
//! The brief is the structured half of every validation: a JSON document
//! loaded once per run and never mutated. `normalize` projects it into the
//! same comparable vocabulary the fact extractor produces from the plan
//! document, so every later comparison speaks one language.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;

/// Business description block of the brief.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Business {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub website: Option<String>,
}

/// One declared social/ad account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialAccount {
    pub platform: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Free-text creative requirements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreativeAssets {
    #[serde(default)]
    pub has_assets: bool,
    #[serde(default)]
    pub description: String,
}

/// The structured campaign brief. Unknown fields are tolerated so briefs
/// can carry planner-specific extras without breaking validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brief {
    #[serde(default)]
    pub business: Business,
    #[serde(default)]
    pub target_market: serde_json::Value,
    #[serde(default)]
    pub objectives: serde_json::Value,
    #[serde(default)]
    pub lead_preference: serde_json::Value,
    #[serde(default)]
    pub social_accounts: Vec<SocialAccount>,
    #[serde(default)]
    pub creative_assets: CreativeAssets,
    pub budget: f64,
    #[serde(default)]
    pub start_date: Option<String>,
    pub campaign_duration_days: i64,
}

/// The brief projected into the comparison vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBrief {
    /// Target budget, copied as-is
    pub budget: f64,
    /// Target duration in days, copied as-is
    pub duration_days: i64,
    /// Normalized platform identifiers from the declared accounts
    pub intended_channels: BTreeSet<String>,
    /// Asset types the creative description requires, drawn from the
    /// fixed vocabulary
    pub required_asset_types: BTreeSet<String>,
}

/// Project the brief into comparable facts. Pure.
pub fn normalize(brief: &Brief, config: &ValidationConfig) -> NormalizedBrief {
    let intended_channels = brief
        .social_accounts
        .iter()
        .map(|account| config.normalize_channel(&account.platform))
        .filter(|name| !name.is_empty())
        .collect();

    let required_asset_types = if brief.creative_assets.has_assets {
        let description = brief.creative_assets.description.to_lowercase();
        config
            .creative_vocabulary
            .iter()
            .filter(|asset| asset.matches(&description))
            .map(|asset| asset.name.clone())
            .collect()
    } else {
        BTreeSet::new()
    };

    NormalizedBrief {
        budget: brief.budget,
        duration_days: brief.campaign_duration_days,
        intended_channels,
        required_asset_types,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief_with_assets(description: &str) -> Brief {
        Brief {
            business: Business::default(),
            target_market: serde_json::Value::Null,
            objectives: serde_json::Value::Null,
            lead_preference: serde_json::Value::Null,
            social_accounts: vec![
                SocialAccount {
                    platform: "Facebook".to_string(),
                    urls: vec![],
                },
                SocialAccount {
                    platform: "Google Search".to_string(),
                    urls: vec![],
                },
            ],
            creative_assets: CreativeAssets {
                has_assets: true,
                description: description.to_string(),
            },
            budget: 5000.0,
            start_date: Some("2026-03-01".to_string()),
            campaign_duration_days: 30,
        }
    }

    #[test]
    fn parses_a_full_brief() {
        let raw = r#"{
            "business": {"description": "Bakery", "location": "Lisbon", "online": true, "website": "https://example.test"},
            "target_market": {"regions_included": ["PT"], "gender": "all"},
            "objectives": {"primary": "sales"},
            "lead_preference": "form",
            "social_accounts": [{"platform": "Instagram", "urls": ["https://instagram.com/x"]}],
            "creative_assets": {"has_assets": true, "description": "Product images and a short video"},
            "budget": 3000,
            "start_date": "2026-04-01",
            "campaign_duration_days": 21,
            "extra_planner_field": 42
        }"#;
        let brief: Brief = serde_json::from_str(raw).unwrap();
        assert_eq!(brief.budget, 3000.0);
        assert_eq!(brief.campaign_duration_days, 21);
        assert_eq!(brief.social_accounts[0].platform, "Instagram");
    }

    #[test]
    fn missing_budget_is_a_parse_error() {
        let raw = r#"{"campaign_duration_days": 21}"#;
        assert!(serde_json::from_str::<Brief>(raw).is_err());
    }

    #[test]
    fn normalize_copies_budget_and_duration() {
        let brief = brief_with_assets("images only");
        let normalized = normalize(&brief, &ValidationConfig::default());
        assert_eq!(normalized.budget, 5000.0);
        assert_eq!(normalized.duration_days, 30);
    }

    #[test]
    fn normalize_maps_platforms_through_aliases() {
        let brief = brief_with_assets("images only");
        let normalized = normalize(&brief, &ValidationConfig::default());
        assert!(normalized.intended_channels.contains("meta (facebook)"));
        assert!(normalized.intended_channels.contains("google search"));
    }

    #[test]
    fn required_assets_match_vocabulary_keywords() {
        let brief = brief_with_assets("Static images, one video reel and a carousel");
        let normalized = normalize(&brief, &ValidationConfig::default());
        let required: Vec<_> = normalized.required_asset_types.iter().cloned().collect();
        assert_eq!(required, vec!["carousel", "image", "video"]);
    }

    #[test]
    fn no_assets_flag_requires_nothing() {
        let mut brief = brief_with_assets("images and video");
        brief.creative_assets.has_assets = false;
        let normalized = normalize(&brief, &ValidationConfig::default());
        assert!(normalized.required_asset_types.is_empty());
    }
}
