use std::fmt::Write as _;
use tracing::{info, warn};

use crate::command::{self, Command};
use crate::config::Config;
use crate::runner::{BenchRunner, CommandResult};

/// Per-command results in catalog order.
pub struct Report {
    results: Vec<(Command, CommandResult)>,
}

impl Report {
    pub fn results(&self) -> &[(Command, CommandResult)] {
        &self.results
    }

    /// Renders the final summary table, one line per command in catalog
    /// order, mirroring the per-command progress lines.
    pub fn render(&self) -> String {
        let mut out = String::from("=== Summary ===\n");
        for (command, result) in &self.results {
            let _ = writeln!(
                out,
                "{:8} QPS={:.2}, avg latency={:.2}ms",
                command.verb(),
                result.qps,
                result.avg_latency_ms()
            );
        }
        out
    }
}

/// Benchmarks every catalog command in order, fully awaiting one command's
/// run before starting the next, and prints a progress line per command.
pub async fn run_suite(config: &Config) -> Report {
    let runner = BenchRunner::new(config.target_addr(), config.run.concurrency);

    let mut results = Vec::with_capacity(command::CATALOG.len());
    for &cmd in &command::CATALOG {
        let requests = config.requests_for(cmd);
        info!(
            "Benchmarking {}: {} requests, concurrency {}",
            cmd, requests, config.run.concurrency
        );

        let result = runner.run(cmd, requests).await;
        if result.faults > 0 {
            warn!("{}: {} of {} requests failed", cmd, result.faults, requests);
        }
        println!(
            "{:8} QPS={:.2}, avg latency={:.2}ms ({} ok, {} failed)",
            cmd.verb(),
            result.qps,
            result.avg_latency_ms(),
            result.samples,
            result.faults
        );

        results.push((cmd, result));
    }

    Report { results }
}
