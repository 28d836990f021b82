//! Core types for the violation engine (JSON contracts + internal models).
//!
//! JSON keys are camelCase to match the policy engine and plan reader
//! contracts used by the surrounding CI pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the pipeline sends)
// ---------------------------------------------------------------------------

/// One raw violation from the policy-evaluation step. Unknown fields are
/// silently ignored; a missing `ruleRating` counts as 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
  pub rule_key: String,
  #[serde(default)]
  pub rule_rating: i64,
  #[serde(default)]
  pub message: String,
  #[serde(default)]
  pub namespace: String,
  #[serde(default)]
  pub severity: String,
  #[serde(default)]
  pub action: String,
  #[serde(default)]
  pub rule_action: String,
  #[serde(default)]
  pub rule_direction: String,
  #[serde(default)]
  pub rule_priority: i64,
  #[serde(default)]
  pub network: String,
  #[serde(default)]
  pub project: String,
  #[serde(default)]
  pub rule_name: String,
}

/// Rule metadata as the infrastructure-plan reader emits it: any field may
/// be absent for a given rule key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRuleMetadata {
  #[serde(default)]
  pub file_name: Option<String>,
  #[serde(default)]
  pub rule_index: Option<String>,
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub environment: Option<String>,
  #[serde(default)]
  pub prefix: Option<String>,
}

/// The one JSON object the binary reads from stdin.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateInput {
  #[serde(default)]
  pub findings: Vec<Finding>,
  #[serde(default)]
  pub rule_metadata: HashMap<String, RawRuleMetadata>,
}

// ---------------------------------------------------------------------------
// Resolved metadata
// ---------------------------------------------------------------------------

/// Fully populated rule metadata; absent source fields hold "UNKNOWN".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMetadata {
  pub file_name: String,
  pub rule_index: String,
  pub id: String,
  pub environment: String,
  pub prefix: String,
}

// ---------------------------------------------------------------------------
// Tier (normalized severity classification)
// ---------------------------------------------------------------------------

/// Three-tier classification of a summed risk rating.
///
/// The policy layer reserves 999 as "maximum severity"; it is data, so the
/// boundary is exclusive at 999 and everything outside 1..999 (zero and
/// negative included) lands in the critical tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
  Pass,
  Warning,
  Critical,
}

impl Tier {
  pub fn classify(total_rating: i64) -> Self {
    match total_rating {
      1 => Self::Pass,
      r if r > 1 && r < 999 => Self::Warning,
      _ => Self::Critical,
    }
  }

  pub fn icon(self) -> &'static str {
    match self {
      Self::Pass => "✅",
      Self::Warning => "⚠️",
      Self::Critical => "❌",
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Per-finding summary carried inside a group's violationOverview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationDetail {
  pub message: String,
  pub namespace: String,
  pub severity: String,
  pub rule_rating: i64,
}

/// All findings aggregated under one rule key. Descriptive fields come from
/// the first finding encountered for the key; metadata from the lookup table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationGroup {
  pub rule_key: String,
  pub rule_name: String,
  pub message: String,
  pub namespace: String,
  pub severity: String,
  pub action: String,
  pub rule_action: String,
  pub rule_direction: String,
  pub rule_priority: i64,
  pub network: String,
  pub project: String,
  #[serde(flatten)]
  pub metadata: RuleMetadata,
  pub total_rule_rating: i64,
  pub total_count: u64,
  pub tier: Tier,
  pub violation_overview: Vec<ViolationDetail>,
}

/// The ranked report: groups ordered by descending total rating (stable on
/// ties), plus the overall classification the pipeline gates on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedReport {
  pub violations: Vec<ViolationGroup>,
  pub critical_detected: bool,
  pub overall_tier: Tier,
  pub overall_icon: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tier_boundaries() {
    assert_eq!(Tier::classify(1), Tier::Pass);
    assert_eq!(Tier::classify(2), Tier::Warning);
    assert_eq!(Tier::classify(998), Tier::Warning);
    assert_eq!(Tier::classify(999), Tier::Critical);
    assert_eq!(Tier::classify(1000), Tier::Critical);
    assert_eq!(Tier::classify(0), Tier::Critical);
    assert_eq!(Tier::classify(-5), Tier::Critical);
  }

  #[test]
  fn tier_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Tier::Warning).unwrap(), "\"warning\"");
    let t: Tier = serde_json::from_str("\"critical\"").unwrap();
    assert_eq!(t, Tier::Critical);
  }

  #[test]
  fn finding_defaults_missing_rating_to_zero() {
    let f: Finding = serde_json::from_str(r#"{"ruleKey": "fw-001"}"#).unwrap();
    assert_eq!(f.rule_key, "fw-001");
    assert_eq!(f.rule_rating, 0);
    assert!(f.message.is_empty());
  }

  #[test]
  fn finding_ignores_unknown_fields() {
    let json = r#"{"ruleKey": "fw-001", "ruleRating": 3, "extra": {"nested": true}}"#;
    let f: Finding = serde_json::from_str(json).unwrap();
    assert_eq!(f.rule_rating, 3);
  }
}
