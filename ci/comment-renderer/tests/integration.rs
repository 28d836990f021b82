//! Integration test: render a report exactly as the binary receives it.

use comment_renderer::{anchor_id, render_comment};
use violation_engine::RankedReport;

#[test]
fn report_json_renders_to_comment_body() {
  let json = r#"{
    "violations": [
      {
        "ruleKey": "acme-prod/vpc-main/allow-all-ingress",
        "ruleName": "allow-all-ingress",
        "message": "Source range 0.0.0.0/0 is not allowed for ingress",
        "namespace": "policies.firewall.ingress",
        "severity": "HIGH",
        "action": "deny",
        "ruleAction": "allow",
        "ruleDirection": "INGRESS",
        "rulePriority": 1000,
        "network": "vpc-main",
        "project": "acme-prod",
        "fileName": "rules/prod/vpc-main.json",
        "ruleIndex": "2",
        "id": "allow-all-ingress",
        "environment": "prod",
        "prefix": "fw",
        "totalRuleRating": 12,
        "totalCount": 2,
        "tier": "warning",
        "violationOverview": [
          {
            "message": "Source range 0.0.0.0/0 is not allowed for ingress",
            "namespace": "policies.firewall.ingress",
            "severity": "HIGH",
            "ruleRating": 7
          },
          {
            "message": "Port range 0-65535 is too broad",
            "namespace": "policies.firewall.ports",
            "severity": "MEDIUM",
            "ruleRating": 5
          }
        ]
      }
    ],
    "criticalDetected": true,
    "overallTier": "warning",
    "overallIcon": "⚠️"
  }"#;

  let report: RankedReport = serde_json::from_str(json).unwrap();
  let body = render_comment(&report);

  assert!(body.starts_with("## ⚠️ Firewall policy check"));
  assert!(body.contains("2 finding(s) across 1 rule(s)"));
  assert!(body.contains("| [allow-all-ingress](#"));
  assert!(body.contains("rules/prod/vpc-main.json"));
  assert!(body.contains(&anchor_id("acme-prod/vpc-main/allow-all-ingress")));
  assert!(body.contains("Port range 0-65535 is too broad"));
  assert!(body.contains("(rating 7)"));
}
