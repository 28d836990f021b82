//! Firewall policy violation engine — deterministic grouping + risk ranking.
//!
//! Consumes the policy engine's flat findings list and the plan reader's
//! rule-metadata lookup, groups findings by rule key, sums risk ratings,
//! ranks groups by descending score, and classifies each group and the
//! overall result as pass / warning / critical.
//!
//! No AI, no DB, no network; pure computation. Used by the binary for
//! stdin/stdout; can also be called as a library.

pub mod aggregate;
pub mod error;
pub mod metadata;
pub mod types;

pub use aggregate::aggregate;
pub use error::EngineError;
pub use types::{
  AggregateInput, Finding, RankedReport, RawRuleMetadata, RuleMetadata, Tier, ViolationGroup,
};
