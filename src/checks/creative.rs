//! Creative coverage check.
//!
//! Every asset type the brief's creative description requires must be
//! confirmed present in the plan's creative checklist. Both sides speak
//! the same fixed vocabulary, so this is a subset test.

use serde_json::json;

use crate::brief::NormalizedBrief;
use crate::extract::{FactSet, StructuralGap};
use crate::{CheckName, CheckResult};

pub fn run(facts: &FactSet, brief: &NormalizedBrief) -> CheckResult {
    let required = &brief.required_asset_types;
    let present = &facts.creative_assets;

    if required.is_empty() {
        return CheckResult::pass(
            CheckName::Creative,
            "no creative asset types required by the brief",
            json!({
                "required": [],
                "present": present.iter().collect::<Vec<_>>(),
            }),
        );
    }

    if facts.has_gap(StructuralGap::MissingCreativeSection) {
        return CheckResult::error(
            CheckName::Creative,
            "brief requires creative assets but the plan has no creative-requirements section",
            json!({
                "required": required.iter().collect::<Vec<_>>(),
            }),
        );
    }

    let missing: Vec<&String> = required.difference(present).collect();
    let details = json!({
        "required": required.iter().collect::<Vec<_>>(),
        "present": present.iter().collect::<Vec<_>>(),
        "missing": missing,
    });

    if missing.is_empty() {
        CheckResult::pass(
            CheckName::Creative,
            "all required asset types are covered by the creative checklist",
            details,
        )
    } else {
        CheckResult::fail(
            CheckName::Creative,
            format!(
                "asset types missing from the checklist: {}",
                missing
                    .iter()
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            details,
        )
    }
}
