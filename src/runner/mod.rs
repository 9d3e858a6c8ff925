use futures::future::join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::command::Command;
use crate::transport;

/// Aggregate outcome of one command's run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CommandResult {
    pub qps: f64,
    pub avg_latency: Duration,
    pub samples: usize,
    pub faults: usize,
}

impl CommandResult {
    pub fn avg_latency_ms(&self) -> f64 {
        self.avg_latency.as_secs_f64() * 1000.0
    }
}

/// Drives requests through at most `concurrency` in-flight workers, one
/// fresh connection each.
pub struct BenchRunner {
    addr: String,
    concurrency: usize,
}

impl BenchRunner {
    pub fn new(addr: impl Into<String>, concurrency: usize) -> Self {
        Self {
            addr: addr.into(),
            concurrency: concurrency.max(1),
        }
    }

    /// Runs `requests` exchanges for `command`, awaiting every task,
    /// success or fault, before aggregating.
    pub async fn run(&self, command: Command, requests: usize) -> CommandResult {
        if requests == 0 {
            return CommandResult::default();
        }

        let limiter = Arc::new(Semaphore::new(self.concurrency));
        let start = Instant::now();

        let mut tasks = Vec::with_capacity(requests);
        for index in 0..requests {
            let limiter = limiter.clone();
            let addr = self.addr.clone();
            let line = command.request_line(index);

            tasks.push(tokio::spawn(async move {
                // the semaphore is never closed
                let Ok(_permit) = limiter.acquire_owned().await else {
                    return None;
                };
                let t0 = Instant::now();
                match transport::exchange(&addr, &line).await {
                    Ok(_response) => Some(t0.elapsed()),
                    Err(e) => {
                        debug!("{} request {} failed: {}", command, index, e);
                        None
                    }
                }
            }));
        }

        // merge after the join point; workers share no state
        let mut samples = 0usize;
        let mut faults = 0usize;
        let mut total = Duration::ZERO;
        for joined in join_all(tasks).await {
            match joined {
                Ok(Some(elapsed)) => {
                    samples += 1;
                    total += elapsed;
                }
                Ok(None) => faults += 1,
                Err(e) => {
                    warn!("{} worker panicked: {}", command, e);
                    faults += 1;
                }
            }
        }

        aggregate(requests, samples, faults, total, start.elapsed())
    }
}

fn aggregate(
    requests: usize,
    samples: usize,
    faults: usize,
    total: Duration,
    elapsed: Duration,
) -> CommandResult {
    if samples == 0 || elapsed.is_zero() {
        return CommandResult {
            qps: 0.0,
            avg_latency: Duration::ZERO,
            samples,
            faults,
        };
    }
    CommandResult {
        qps: requests as f64 / elapsed.as_secs_f64(),
        avg_latency: total / samples as u32,
        samples,
        faults,
    }
}
