//! Fact extraction from the plan document.
//!
//! Turns the loosely structured document into a bag of typed facts:
//! currency amounts tagged by section, a campaign date range, channel
//! mentions from two independent sources, and the creative asset types the
//! checklist confirms. Extraction is pure and never fails; conventions
//! that are absent are recorded as structural gaps so the checks that need
//! them can report ERROR instead of a false PASS or FAIL.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::config::ValidationConfig;
use crate::document::{parse_amount, PlanDocument, SectionKind};

/// Which part of the document an amount was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTag {
    /// Counted toward the budget sum
    Body,
    /// Illustrative example figures, excluded by policy
    StrategyExplainer,
}

/// A currency amount found in the document.
#[derive(Debug, Clone)]
pub struct BudgetAmount {
    pub value: f64,
    /// ISO-ish currency code derived from the matched token
    pub currency: String,
    pub section: SectionTag,
}

/// Extracted campaign date range. Duration is the inclusive day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn inclusive_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Where a channel mention came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrigin {
    Table,
    Strategy,
}

/// A channel name as written, with its source. Normalization happens at
/// comparison time so reports keep the original casing.
#[derive(Debug, Clone)]
pub struct ChannelMention {
    pub name: String,
    pub origin: ChannelOrigin,
}

/// An expected document convention that was not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralGap {
    MissingPlanTable,
    MissingStrategySection,
    MissingCreativeSection,
    MissingStartDate,
    MissingEndDate,
}

impl fmt::Display for StructuralGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralGap::MissingPlanTable => write!(f, "no media-plan table found"),
            StructuralGap::MissingStrategySection => {
                write!(f, "no strategy-explainer section found")
            }
            StructuralGap::MissingCreativeSection => {
                write!(f, "no creative-requirements section found")
            }
            StructuralGap::MissingStartDate => write!(f, "no parsable campaign start date"),
            StructuralGap::MissingEndDate => write!(f, "no parsable campaign end date"),
        }
    }
}

/// Everything the extractor learned from one document.
#[derive(Debug, Clone, Default)]
pub struct FactSet {
    pub amounts: Vec<BudgetAmount>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub table_channels: Vec<ChannelMention>,
    pub strategy_channels: Vec<ChannelMention>,
    pub creative_assets: BTreeSet<String>,
    pub gaps: Vec<StructuralGap>,
    /// Narrative strategy text, kept for the advisory review
    pub strategy_text: String,
}

impl FactSet {
    pub fn has_gap(&self, gap: StructuralGap) -> bool {
        self.gaps.contains(&gap)
    }

    /// Sum of body-tagged amounts; strategy-explainer figures never count.
    pub fn body_amount_sum(&self) -> f64 {
        self.amounts
            .iter()
            .filter(|a| a.section == SectionTag::Body)
            .map(|a| a.value)
            .sum()
    }

    pub fn body_amount_count(&self) -> usize {
        self.amounts
            .iter()
            .filter(|a| a.section == SectionTag::Body)
            .count()
    }

    pub fn date_range(&self) -> Option<DateRange> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        }
    }
}

/// Extract all facts from a parsed document. Pure, infallible.
pub fn extract(document: &PlanDocument, config: &ValidationConfig) -> FactSet {
    let mut facts = FactSet {
        amounts: extract_amounts(document, config),
        ..FactSet::default()
    };

    extract_dates(document, config, &mut facts);
    extract_channels(document, config, &mut facts);
    extract_creative_assets(document, config, &mut facts);

    facts.strategy_text = document.section_text(SectionKind::StrategyExplainer);

    if !document.has_plan_table {
        facts.gaps.push(StructuralGap::MissingPlanTable);
    }
    if !document.has_section(SectionKind::StrategyExplainer) {
        facts.gaps.push(StructuralGap::MissingStrategySection);
    }
    if !document.has_section(SectionKind::CreativeRequirements) {
        facts.gaps.push(StructuralGap::MissingCreativeSection);
    }
    if facts.start_date.is_none() {
        facts.gaps.push(StructuralGap::MissingStartDate);
    }
    if facts.end_date.is_none() {
        facts.gaps.push(StructuralGap::MissingEndDate);
    }

    facts
}

fn extract_amounts(document: &PlanDocument, config: &ValidationConfig) -> Vec<BudgetAmount> {
    let mut amounts = Vec::new();

    for section in &document.sections {
        let tag = match section.kind {
            SectionKind::StrategyExplainer => SectionTag::StrategyExplainer,
            _ => SectionTag::Body,
        };

        for line in &section.lines {
            // Patterns overlap (e.g. symbol+number vs number+symbol), so
            // later matches covering an already-claimed span are dropped.
            let mut claimed: Vec<(usize, usize)> = Vec::new();

            for pattern in &config.currency_patterns {
                for m in pattern.find_iter(line) {
                    let overlaps = claimed
                        .iter()
                        .any(|&(s, e)| m.start() < e && s < m.end());
                    if overlaps {
                        continue;
                    }
                    if let Some(value) = parse_amount(m.as_str()) {
                        claimed.push((m.start(), m.end()));
                        amounts.push(BudgetAmount {
                            value,
                            currency: currency_code(m.as_str()),
                            section: tag,
                        });
                    }
                }
            }
        }
    }

    amounts
}

fn currency_code(token: &str) -> String {
    for (symbol, code) in [
        ('€', "EUR"),
        ('$', "USD"),
        ('£', "GBP"),
        ('¥', "JPY"),
        ('₹', "INR"),
        ('₽', "RUB"),
    ] {
        if token.contains(symbol) {
            return code.to_string();
        }
    }
    let upper = token.to_uppercase();
    for code in ["EUR", "USD", "GBP"] {
        if upper.starts_with(code) {
            return code.to_string();
        }
    }
    "UNKNOWN".to_string()
}

fn extract_dates(document: &PlanDocument, config: &ValidationConfig, facts: &mut FactSet) {
    for section in &document.sections {
        for line in &section.lines {
            let tokens = date_tokens(line, config);
            if tokens.is_empty() {
                continue;
            }

            // Word-anchored labels, so prose like "extend" or "calendar"
            // never claims a date. Later labeled matches overwrite earlier
            // ones; the last stated date is the one validated.
            let labels_start = config.start_label_pattern.is_match(line);
            let labels_end = config.end_label_pattern.is_match(line);
            if labels_start && labels_end && tokens.len() >= 2 {
                facts.start_date = Some(tokens[0]);
                facts.end_date = Some(tokens[1]);
            } else if labels_start {
                facts.start_date = Some(tokens[0]);
            } else if labels_end {
                facts.end_date = Some(tokens[0]);
            } else if tokens.len() >= 2 && line.to_lowercase().contains(" to ") {
                facts.start_date = Some(tokens[0]);
                facts.end_date = Some(tokens[1]);
            }
        }
    }
}

/// Parsable dates on the line, in reading order.
fn date_tokens(line: &str, config: &ValidationConfig) -> Vec<NaiveDate> {
    let mut found: Vec<(usize, NaiveDate)> = Vec::new();
    for pattern in &config.date_token_patterns {
        for m in pattern.find_iter(line) {
            if let Some(date) = parse_date(m.as_str(), config) {
                found.push((m.start(), date));
            }
        }
    }
    found.sort_by_key(|&(start, _)| start);
    found.into_iter().map(|(_, date)| date).collect()
}

fn parse_date(token: &str, config: &ValidationConfig) -> Option<NaiveDate> {
    config
        .date_formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

fn extract_channels(document: &PlanDocument, config: &ValidationConfig, facts: &mut FactSet) {
    let mut seen_table: BTreeSet<String> = BTreeSet::new();
    for row in &document.table_rows {
        let normalized = config.normalize_channel(&row.channel);
        if normalized.is_empty() || !seen_table.insert(normalized) {
            continue;
        }
        facts.table_channels.push(ChannelMention {
            name: row.channel.trim().to_string(),
            origin: ChannelOrigin::Table,
        });
    }

    let mut seen_strategy: BTreeSet<String> = BTreeSet::new();
    for section in document
        .sections
        .iter()
        .filter(|s| s.kind == SectionKind::StrategyExplainer)
    {
        for line in &section.lines {
            if let Some(cap) = config.channel_label_pattern.captures(line) {
                // A pattern without a capture group names no channel
                let label = match cap.get(1) {
                    Some(m) => m.as_str(),
                    None => continue,
                };
                let name = clean_channel_label(label);
                if name.is_empty() {
                    continue;
                }
                let normalized = config.normalize_channel(&name);
                if seen_strategy.insert(normalized) {
                    facts.strategy_channels.push(ChannelMention {
                        name,
                        origin: ChannelOrigin::Strategy,
                    });
                }
            }
        }
    }
}

fn clean_channel_label(raw: &str) -> String {
    raw.trim()
        .trim_start_matches(['•', '-', '*', ' '])
        .trim_end_matches(['.', ',', ':', ';'])
        .trim()
        .to_string()
}

fn extract_creative_assets(document: &PlanDocument, config: &ValidationConfig, facts: &mut FactSet) {
    let text = document
        .section_text(SectionKind::CreativeRequirements)
        .to_lowercase();
    if text.trim().is_empty() {
        return;
    }
    for asset in &config.creative_vocabulary {
        if asset.matches(&text) {
            facts.creative_assets.insert(asset.name.clone());
        }
    }
}
