//! Explicit defaulting of rule metadata from the plan-reader lookup.

use crate::types::{RawRuleMetadata, RuleMetadata};

/// Placeholder for metadata fields absent from the external lookup table.
pub const UNKNOWN: &str = "UNKNOWN";

/// Resolve a (possibly missing, possibly partial) lookup entry into fully
/// populated metadata. Every absent field becomes the literal "UNKNOWN".
pub fn with_defaults(raw: Option<&RawRuleMetadata>) -> RuleMetadata {
  let unknown = || UNKNOWN.to_string();
  match raw {
    Some(m) => RuleMetadata {
      file_name: m.file_name.clone().unwrap_or_else(unknown),
      rule_index: m.rule_index.clone().unwrap_or_else(unknown),
      id: m.id.clone().unwrap_or_else(unknown),
      environment: m.environment.clone().unwrap_or_else(unknown),
      prefix: m.prefix.clone().unwrap_or_else(unknown),
    },
    None => RuleMetadata {
      file_name: unknown(),
      rule_index: unknown(),
      id: unknown(),
      environment: unknown(),
      prefix: unknown(),
    },
  }
}
