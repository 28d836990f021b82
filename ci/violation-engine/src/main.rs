//! Binary entrypoint: read one JSON object from stdin, write one to stdout.
//!
//! Input: `{"findings": [...], "ruleMetadata": {...}}`
//! Output: the RankedReport JSON.
//!
//! With `--gate`, exits 1 after writing the report when criticalDetected is
//! true, so a CI step can fail the job. Malformed input exits 2.

use std::env;
use std::io::{self, Read, Write};
use std::process;

use violation_engine::{aggregate, AggregateInput, EngineError};

fn main() {
  let gate = env::args().skip(1).any(|a| a == "--gate");
  match run_binary() {
    Ok(critical_detected) => {
      if gate && critical_detected {
        process::exit(1);
      }
    }
    Err(e) => {
      let _ = writeln!(io::stderr(), "violation-engine error: {}", e);
      process::exit(2);
    }
  }
}

fn run_binary() -> Result<bool, EngineError> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let input: AggregateInput = serde_json::from_str(&raw)?;

  let report = aggregate(&input.findings, &input.rule_metadata);
  let json = serde_json::to_vec(&report)?;
  io::stdout().write_all(&json)?;
  Ok(report.critical_detected)
}
