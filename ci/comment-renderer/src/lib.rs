//! Render a RankedReport into a markdown pull-request comment.
//!
//! Layout: an overall-status header, a summary table (one row per violation
//! group, rule cell linked to its detail section), then one anchored detail
//! section per group listing the merged rule metadata and every contributing
//! finding. No aggregation logic here; the report arrives fully ranked and
//! classified.

use std::fmt::Write as _;

use violation_engine::types::ViolationGroup;
use violation_engine::RankedReport;

/// Stable anchor id for a group's detail section. Hash-based so re-posted
/// comments keep working links regardless of rule-key characters.
pub fn anchor_id(rule_key: &str) -> String {
  let hex = blake3::hash(rule_key.as_bytes()).to_hex();
  format!("vg-{}", &hex[..16])
}

/// Full comment body for one report.
pub fn render_comment(report: &RankedReport) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "## {} Firewall policy check", report.overall_icon);
  let _ = writeln!(out);

  if report.violations.is_empty() {
    let _ = writeln!(out, "No policy violations found in the changed rule files.");
    return out;
  }

  let total_findings: u64 = report.violations.iter().map(|g| g.total_count).sum();
  let _ = writeln!(
    out,
    "{} finding(s) across {} rule(s), ranked by risk score.",
    total_findings,
    report.violations.len()
  );
  let _ = writeln!(out);

  out.push_str(&render_table(report));

  for group in &report.violations {
    let _ = writeln!(out);
    out.push_str(&render_group(group));
  }

  out
}

fn render_table(report: &RankedReport) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "| Rule | File | Environment | Risk score | Findings | |");
  let _ = writeln!(out, "|---|---|---|---|---|---|");
  for group in &report.violations {
    let _ = writeln!(
      out,
      "| [{}](#{}) | {} | {} | {} | {} | {} |",
      escape_cell(&group.rule_name),
      anchor_id(&group.rule_key),
      escape_cell(&group.metadata.file_name),
      escape_cell(&group.metadata.environment),
      group.total_rule_rating,
      group.total_count,
      group.tier.icon()
    );
  }
  out
}

fn render_group(group: &ViolationGroup) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "<a id=\"{}\"></a>", anchor_id(&group.rule_key));
  let _ = writeln!(
    out,
    "### {} {} (`{}`)",
    group.tier.icon(),
    group.rule_name,
    group.rule_key
  );
  let _ = writeln!(out);
  let _ = writeln!(
    out,
    "Risk score **{}** from {} finding(s).",
    group.total_rule_rating, group.total_count
  );
  let _ = writeln!(out);
  let _ = writeln!(out, "- Project: `{}`", group.project);
  let _ = writeln!(out, "- Network: `{}`", group.network);
  let _ = writeln!(
    out,
    "- Rule: `{}` {} priority {}",
    group.rule_action, group.rule_direction, group.rule_priority
  );
  let _ = writeln!(
    out,
    "- Source: `{}` (index {}, id `{}`, prefix `{}`)",
    group.metadata.file_name, group.metadata.rule_index, group.metadata.id, group.metadata.prefix
  );
  let _ = writeln!(out);
  let _ = writeln!(out, "<details><summary>Findings</summary>");
  let _ = writeln!(out);
  for detail in &group.violation_overview {
    let _ = writeln!(
      out,
      "- **{}** [{}] {} (rating {})",
      detail.severity, detail.namespace, detail.message, detail.rule_rating
    );
  }
  let _ = writeln!(out);
  let _ = writeln!(out, "</details>");
  out
}

/// Keep cell content from breaking the table.
fn escape_cell(s: &str) -> String {
  s.replace('|', "\\|").replace('\n', " ")
}
