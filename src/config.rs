//! Engine configuration.
//!
//! One immutable `ValidationConfig` is constructed per run and passed
//! explicitly into the extractor and the checks; there are no process-wide
//! mutable settings. Defaults cover the documented plan conventions; a TOML
//! file supplied via `--config` overlays individual fields.

use std::collections::BTreeMap;
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::PreflightError;

/// Default relative budget tolerance (fraction of the expected budget).
pub const DEFAULT_BUDGET_TOLERANCE: f64 = 0.05;

/// Default absolute duration tolerance in days.
pub const DEFAULT_DURATION_TOLERANCE_DAYS: i64 = 1;

/// Prompt template for the advisory strategy review. Placeholders are
/// substituted by `ai::prompt`.
pub const DEFAULT_REVIEW_PROMPT: &str = "\
Compare this campaign brief with the media plan strategy and evaluate consistency:

CAMPAIGN BRIEF:
Business: {business_description} in {business_location}
Target Market: {target_market}
Objectives: {objectives}
Budget: {budget}
Existing Platforms (for reference only): {platforms}

MEDIA PLAN STRATEGY:
{strategy_text}

Evaluate if the strategy logically matches the brief. Note that platforms \
listed in the brief are existing user platforms for reference only - the \
strategy may choose different or additional platforms as appropriate.

Focus on:
1. Does the strategy address the right target audience?
2. Are the chosen platforms appropriate for the business and objectives?
3. Is the strategy realistic for the given budget?
4. Does the overall approach align with the business context and objectives?

Respond with: CONSISTENT, INCONSISTENT, or PARTIALLY_CONSISTENT followed by a \
brief explanation.";

/// One asset type in the creative vocabulary, with the synonyms that count
/// as a mention of it.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetType {
    pub name: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl AssetType {
    fn new(name: &str, synonyms: &[&str]) -> Self {
        AssetType {
            name: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True when `text` (already lowercased) mentions this asset type.
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.name.as_str()) || self.synonyms.iter().any(|s| text.contains(s.as_str()))
    }
}

/// Settings for the advisory AI review.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Chat model to request
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Prompt template with `{placeholder}` slots
    pub prompt_template: String,
    /// Cap on strategy text included in the prompt, in characters
    pub max_strategy_chars: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        ReviewConfig {
            model: "gpt-4".to_string(),
            timeout_secs: 60,
            prompt_template: DEFAULT_REVIEW_PROMPT.to_string(),
            max_strategy_chars: 2000,
        }
    }
}

/// Immutable configuration for a validation run.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Relative budget tolerance, inclusive at the boundary
    pub budget_tolerance: f64,
    /// Absolute duration tolerance in days, inclusive at the boundary
    pub duration_tolerance_days: i64,
    /// Amount-like token patterns (symbol+number, number+symbol, code+number)
    pub currency_patterns: Vec<Regex>,
    /// Heading patterns that open the strategy-explainer section
    pub strategy_section_patterns: Vec<Regex>,
    /// Heading patterns that open the creative-requirements section
    pub creative_section_patterns: Vec<Regex>,
    /// Pattern for "Channel: <Name>" labels inside the strategy section;
    /// capture group 1 is the channel name
    pub channel_label_pattern: Regex,
    /// Token patterns that locate date-like strings, parallel to
    /// `date_formats`
    pub date_token_patterns: Vec<Regex>,
    /// Accepted date formats, tried in order (chrono format strings)
    pub date_formats: Vec<String>,
    /// Word-anchored label marking a campaign start date line
    pub start_label_pattern: Regex,
    /// Word-anchored label marking a campaign end date line
    pub end_label_pattern: Regex,
    /// Lowercased channel-name aliases applied during normalization
    pub channel_aliases: BTreeMap<String, String>,
    /// Fixed creative-asset vocabulary shared by extractor and normalizer
    pub creative_vocabulary: Vec<AssetType>,
    /// Advisory review settings
    pub review: ReviewConfig,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let compile = |patterns: &[&str]| -> Vec<Regex> {
            // Built-in patterns are covered by tests; they always compile.
            patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
        };

        ValidationConfig {
            budget_tolerance: DEFAULT_BUDGET_TOLERANCE,
            duration_tolerance_days: DEFAULT_DURATION_TOLERANCE_DAYS,
            currency_patterns: compile(&[
                r"[€$£¥₹₽]\s*\d[\d,]*\.?\d*",
                r"\d[\d,]*\.?\d*\s*[€$£¥₹₽]",
                r"\b(?:EUR|USD|GBP)\s+\d[\d,]*\.?\d*",
            ]),
            strategy_section_patterns: compile(&[
                r"(?i)^\s*(?:\d+\s*[.)-]\s*)?strategy\s+explainer\b",
            ]),
            creative_section_patterns: compile(&[
                r"(?i)^\s*(?:\d+\s*[.)-]\s*)?creative\s+(?:requirements|checklist)\b",
            ]),
            channel_label_pattern: Regex::new(r"(?i)\bchannel:\s*(.+)").unwrap(),
            date_token_patterns: compile(&[
                r"\d{4}-\d{2}-\d{2}",
                r"\d{1,2}/\d{1,2}/\d{4}",
                r"[A-Z][a-z]+ \d{1,2}, \d{4}",
            ]),
            date_formats: vec![
                "%Y-%m-%d".to_string(),
                "%d/%m/%Y".to_string(),
                "%B %d, %Y".to_string(),
            ],
            start_label_pattern: Regex::new(r"(?i)\bstarts?\b").unwrap(),
            end_label_pattern: Regex::new(r"(?i)\bends?\b").unwrap(),
            channel_aliases: default_channel_aliases(),
            creative_vocabulary: vec![
                AssetType::new("image", &["photo", "static"]),
                AssetType::new("video", &["reel", "motion"]),
                AssetType::new("banner", &["display ad"]),
                AssetType::new("carousel", &["slideshow"]),
            ],
            review: ReviewConfig::default(),
        }
    }
}

fn default_channel_aliases() -> BTreeMap<String, String> {
    [
        ("facebook", "meta (facebook)"),
        ("instagram", "meta (instagram)"),
        ("meta (fb)", "meta (facebook)"),
        ("meta (ig)", "meta (instagram)"),
        ("meta combined", "meta (combined)"),
        ("google display network", "google display"),
        ("google responsive display", "google display"),
        ("youtube", "youtube ads"),
        ("tiktok", "tiktok ads"),
        ("microsoft audience network", "microsoft audience"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// TOML overlay. Every field is optional; present fields replace the
/// corresponding default wholesale.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverlay {
    budget_tolerance: Option<f64>,
    duration_tolerance_days: Option<i64>,
    currency_patterns: Option<Vec<String>>,
    strategy_section_patterns: Option<Vec<String>>,
    creative_section_patterns: Option<Vec<String>>,
    channel_label_pattern: Option<String>,
    date_token_patterns: Option<Vec<String>>,
    date_formats: Option<Vec<String>>,
    start_label_pattern: Option<String>,
    end_label_pattern: Option<String>,
    channel_aliases: Option<BTreeMap<String, String>>,
    creative_vocabulary: Option<Vec<AssetType>>,
    review_model: Option<String>,
    review_timeout_secs: Option<u64>,
    review_prompt_template: Option<String>,
    review_max_strategy_chars: Option<usize>,
}

impl ValidationConfig {
    /// Load a config overlay from a TOML file on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self, PreflightError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PreflightError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let overlay: ConfigOverlay =
            toml::from_str(&raw).map_err(|source| PreflightError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = ValidationConfig::default();

        let compile_one = |p: String| -> Result<Regex, PreflightError> {
            Regex::new(&p).map_err(|e| PreflightError::ConfigInvalid {
                path: path.to_path_buf(),
                message: format!("bad pattern {:?}: {}", p, e),
            })
        };
        let compile_all = |patterns: Vec<String>| -> Result<Vec<Regex>, PreflightError> {
            patterns.into_iter().map(compile_one).collect()
        };

        if let Some(v) = overlay.budget_tolerance {
            if !(0.0..1.0).contains(&v) {
                return Err(PreflightError::ConfigInvalid {
                    path: path.to_path_buf(),
                    message: format!("budget_tolerance {} must be in [0, 1)", v),
                });
            }
            config.budget_tolerance = v;
        }
        if let Some(v) = overlay.duration_tolerance_days {
            if v < 0 {
                return Err(PreflightError::ConfigInvalid {
                    path: path.to_path_buf(),
                    message: format!("duration_tolerance_days {} must be >= 0", v),
                });
            }
            config.duration_tolerance_days = v;
        }
        if let Some(v) = overlay.currency_patterns {
            config.currency_patterns = compile_all(v)?;
        }
        if let Some(v) = overlay.strategy_section_patterns {
            config.strategy_section_patterns = compile_all(v)?;
        }
        if let Some(v) = overlay.creative_section_patterns {
            config.creative_section_patterns = compile_all(v)?;
        }
        if let Some(v) = overlay.channel_label_pattern {
            let re = compile_one(v)?;
            if re.captures_len() < 2 {
                return Err(PreflightError::ConfigInvalid {
                    path: path.to_path_buf(),
                    message: format!(
                        "channel_label_pattern {:?} needs a capture group for the channel name",
                        re.as_str()
                    ),
                });
            }
            config.channel_label_pattern = re;
        }
        if let Some(v) = overlay.date_token_patterns {
            config.date_token_patterns = compile_all(v)?;
        }
        if let Some(v) = overlay.date_formats {
            config.date_formats = v;
        }
        if let Some(v) = overlay.start_label_pattern {
            config.start_label_pattern = compile_one(v)?;
        }
        if let Some(v) = overlay.end_label_pattern {
            config.end_label_pattern = compile_one(v)?;
        }
        if let Some(v) = overlay.channel_aliases {
            config.channel_aliases = v
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                .collect();
        }
        if let Some(v) = overlay.creative_vocabulary {
            config.creative_vocabulary = v;
        }
        if let Some(v) = overlay.review_model {
            config.review.model = v;
        }
        if let Some(v) = overlay.review_timeout_secs {
            config.review.timeout_secs = v;
        }
        if let Some(v) = overlay.review_prompt_template {
            config.review.prompt_template = v;
        }
        if let Some(v) = overlay.review_max_strategy_chars {
            config.review.max_strategy_chars = v;
        }

        Ok(config)
    }

    /// Apply the alias map and case-fold a channel name for comparison.
    /// The original casing is kept separately for reporting.
    pub fn normalize_channel(&self, name: &str) -> String {
        let folded = name.trim().to_lowercase();
        self.channel_aliases
            .get(&folded)
            .cloned()
            .unwrap_or(folded)
    }
}
