//! Shared on-disk fixtures for the integration tests.
//!
//! Every test works on a realistic brief/plan pair written into a
//! temporary directory, exercising the same load path the binary uses.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// A complete campaign brief: 5000 budget, 30-day run, two declared
/// accounts, creative assets requiring images and video.
pub fn brief_json() -> &'static str {
    r#"{
  "business": {
    "description": "Independent coffee roastery",
    "location": "Rotterdam, NL",
    "online": true,
    "website": "https://example.test"
  },
  "target_market": "Urban professionals aged 25-40",
  "objectives": ["Increase online orders", "Grow brand awareness"],
  "lead_preference": "online",
  "social_accounts": [
    { "platform": "Facebook", "urls": ["https://facebook.com/example"] },
    { "platform": "Instagram", "urls": [] }
  ],
  "creative_assets": {
    "has_assets": true,
    "description": "Product photos and short video reels"
  },
  "budget": 5000,
  "start_date": "2026-03-01",
  "campaign_duration_days": 30
}"#
}

/// A plan that agrees with [`brief_json`] on every checked dimension.
pub fn consistent_plan() -> &'static str {
    "\
Campaign Start Date: 2026-03-01
Campaign End Date: 2026-03-30

## 1. Media Plan

| Channel | Budget |
|---------|--------|
| Meta (Facebook) | \u{20ac}2,500 |
| Meta (Instagram) | \u{20ac}2,500 |

## 2. Strategy Explainer

Channel: Meta (Facebook)
Channel: Meta (Instagram)
Focus on urban professionals with an illustrative pacing of \u{20ac}80/day.

## 3. Creative Requirements

- Image assets (product photos)
- Video under 15s
"
}

/// Same as [`consistent_plan`] but the table carries a channel the
/// strategy section never mentions.
pub fn channel_mismatch_plan() -> &'static str {
    "\
Campaign Start Date: 2026-03-01
Campaign End Date: 2026-03-30

## 1. Media Plan

| Channel | Budget |
|---------|--------|
| Meta (Facebook) | \u{20ac}2,500 |
| Google Search | \u{20ac}2,500 |

## 2. Strategy Explainer

Channel: Meta (Facebook)
Channel: Meta (Instagram)

## 3. Creative Requirements

- Image assets
- Video under 15s
"
}

/// A plan with no campaign dates anywhere.
pub fn no_dates_plan() -> &'static str {
    "\
## 1. Media Plan

| Channel | Budget |
|---------|--------|
| Meta (Facebook) | \u{20ac}2,500 |
| Meta (Instagram) | \u{20ac}2,500 |

## 2. Strategy Explainer

Channel: Meta (Facebook)
Channel: Meta (Instagram)

## 3. Creative Requirements

- Image assets
- Video under 15s
"
}

/// A plan whose table totals 6,000 against the brief's 5,000.
pub fn over_budget_plan() -> &'static str {
    "\
Campaign Start Date: 2026-03-01
Campaign End Date: 2026-03-30

## 1. Media Plan

| Channel | Budget |
|---------|--------|
| Meta (Facebook) | \u{20ac}3,000 |
| Meta (Instagram) | \u{20ac}3,000 |

## 2. Strategy Explainer

Channel: Meta (Facebook)
Channel: Meta (Instagram)

## 3. Creative Requirements

- Image assets
- Video under 15s
"
}

/// Write a brief/plan pair into `dir` and return their paths.
pub fn write_pair(dir: &TempDir, brief: &str, plan: &str) -> (PathBuf, PathBuf) {
    let brief_path = dir.path().join("brief.json");
    let plan_path = dir.path().join("plan.md");
    std::fs::write(&brief_path, brief).unwrap();
    std::fs::write(&plan_path, plan).unwrap();
    (brief_path, plan_path)
}
