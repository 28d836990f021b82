//! Binary entrypoint: read a RankedReport JSON object from stdin, write the
//! markdown comment body to stdout. Malformed input exits 2.

use std::io::{self, Read, Write};

use comment_renderer::render_comment;
use violation_engine::RankedReport;

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "comment-renderer error: {}", e);
    std::process::exit(2);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let report: RankedReport = serde_json::from_str(&raw)?;

  let body = render_comment(&report);
  io::stdout().write_all(body.as_bytes())?;
  Ok(())
}
