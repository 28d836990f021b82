//! Core aggregation: group findings by rule key, sum risk, rank, classify.

use std::collections::HashMap;

use crate::metadata::with_defaults;
use crate::types::*;

/// Fold a flat findings list into a ranked report.
///
/// Groups are created in input order; descriptive fields come from the first
/// finding seen for each key. The final ordering is by descending summed
/// rating with ties kept in first-encountered order. Pure and infallible:
/// an empty input yields an empty report, and metadata missing from the
/// lookup defaults to "UNKNOWN" rather than failing.
pub fn aggregate(
  findings: &[Finding],
  rule_metadata: &HashMap<String, RawRuleMetadata>,
) -> RankedReport {
  let mut index: HashMap<String, usize> = HashMap::new();
  let mut groups: Vec<ViolationGroup> = Vec::new();

  for finding in findings {
    let slot = match index.get(&finding.rule_key) {
      Some(&i) => i,
      None => {
        groups.push(seed_group(finding, rule_metadata));
        index.insert(finding.rule_key.clone(), groups.len() - 1);
        groups.len() - 1
      }
    };

    let group = &mut groups[slot];
    group.total_rule_rating += finding.rule_rating;
    group.total_count += 1;
    group.violation_overview.push(ViolationDetail {
      message: finding.message.clone(),
      namespace: finding.namespace.clone(),
      severity: finding.severity.clone(),
      rule_rating: finding.rule_rating,
    });
  }

  // Vec::sort_by is stable, so equal totals keep encounter order.
  groups.sort_by(|a, b| b.total_rule_rating.cmp(&a.total_rule_rating));
  for group in &mut groups {
    group.tier = Tier::classify(group.total_rule_rating);
  }

  let critical_detected = groups.iter().any(|g| g.total_rule_rating != 1);
  let overall_tier = groups
    .iter()
    .map(|g| g.total_rule_rating)
    .max()
    .map(Tier::classify)
    .unwrap_or(Tier::Pass);

  RankedReport {
    violations: groups,
    critical_detected,
    overall_icon: overall_tier.icon().to_string(),
    overall_tier,
  }
}

/// New group for a first-seen rule key: descriptive fields from the finding,
/// metadata from the lookup (defaulted), totals zeroed.
fn seed_group(
  finding: &Finding,
  rule_metadata: &HashMap<String, RawRuleMetadata>,
) -> ViolationGroup {
  ViolationGroup {
    rule_key: finding.rule_key.clone(),
    rule_name: finding.rule_name.clone(),
    message: finding.message.clone(),
    namespace: finding.namespace.clone(),
    severity: finding.severity.clone(),
    action: finding.action.clone(),
    rule_action: finding.rule_action.clone(),
    rule_direction: finding.rule_direction.clone(),
    rule_priority: finding.rule_priority,
    network: finding.network.clone(),
    project: finding.project.clone(),
    metadata: with_defaults(rule_metadata.get(&finding.rule_key)),
    total_rule_rating: 0,
    total_count: 0,
    tier: Tier::Pass,
    violation_overview: Vec::new(),
  }
}
