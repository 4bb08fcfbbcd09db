//! Channel consistency check.
//!
//! Compares the channel set named by the media-plan table against the
//! channel set named by "Channel:" labels in the strategy explainer.
//! This is a document self-consistency check: the brief's declared
//! accounts are deliberately not part of it. Comparison happens on
//! normalized names; reporting uses the names as written.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde_json::json;

use crate::compare::set_diff;
use crate::config::ValidationConfig;
use crate::extract::{ChannelMention, FactSet, StructuralGap};
use crate::{CheckName, CheckResult};

pub fn run(facts: &FactSet, config: &ValidationConfig) -> CheckResult {
    if facts.has_gap(StructuralGap::MissingPlanTable) || facts.table_channels.is_empty() {
        return CheckResult::error(
            CheckName::ChannelConsistency,
            "no channels found in media plan table",
            json!({ "source": "table" }),
        );
    }
    if facts.has_gap(StructuralGap::MissingStrategySection) || facts.strategy_channels.is_empty() {
        return CheckResult::error(
            CheckName::ChannelConsistency,
            "no channels found in strategy explainer section",
            json!({ "source": "strategy" }),
        );
    }

    let plan_names = original_by_normalized(&facts.table_channels, config);
    let strategy_names = original_by_normalized(&facts.strategy_channels, config);

    let plan_set: BTreeSet<String> = plan_names.keys().cloned().collect();
    let strategy_set: BTreeSet<String> = strategy_names.keys().cloned().collect();
    let diff = set_diff(&plan_set, &strategy_set);

    // Differences are reported with the casing of the side that has them
    let missing_in_strategy: Vec<String> = diff
        .missing_from_b
        .iter()
        .filter_map(|n| plan_names.get(n).cloned())
        .collect();
    let missing_in_plan: Vec<String> = diff
        .extra_in_b
        .iter()
        .filter_map(|n| strategy_names.get(n).cloned())
        .collect();

    let details = json!({
        "plan_channels": plan_names.values().collect::<Vec<_>>(),
        "strategy_channels": strategy_names.values().collect::<Vec<_>>(),
        "missing_in_strategy": missing_in_strategy,
        "missing_in_plan": missing_in_plan,
    });

    if diff.is_equal() {
        CheckResult::pass(
            CheckName::ChannelConsistency,
            format!(
                "all {} channels match between plan and strategy",
                plan_set.len()
            ),
            details,
        )
    } else {
        let mut parts = Vec::new();
        if !missing_in_strategy.is_empty() {
            parts.push(format!(
                "in plan but not in strategy: {}",
                missing_in_strategy.join(", ")
            ));
        }
        if !missing_in_plan.is_empty() {
            parts.push(format!(
                "in strategy but not in plan: {}",
                missing_in_plan.join(", ")
            ));
        }
        CheckResult::fail(
            CheckName::ChannelConsistency,
            format!("channel mismatch: {}", parts.join("; ")),
            details,
        )
    }
}

fn original_by_normalized(
    mentions: &[ChannelMention],
    config: &ValidationConfig,
) -> BTreeMap<String, String> {
    mentions
        .iter()
        .map(|m| (config.normalize_channel(&m.name), m.name.clone()))
        .collect()
}
